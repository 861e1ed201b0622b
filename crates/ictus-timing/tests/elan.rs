use ictus_timing::error::TimingError;
use ictus_timing::lesion::{AnteriorExtent, AnteriorPattern, Lesion, PosteriorSite};
use ictus_timing::severity::{
    Severity, StartWindow, classify, classify_all, overall_severity, start_window,
};

fn posterior(site: PosteriorSite, exceeds_15_mm: bool) -> Lesion {
    Lesion::Posterior { site, exceeds_15_mm }
}

fn anterior_by_size(exceeds_15_mm: bool) -> Lesion {
    Lesion::Anterior {
        pattern: None,
        extent: None,
        multi_territory: false,
        exceeds_15_mm,
    }
}

#[test]
fn large_brainstem_or_cerebellar_lesion_is_major() {
    assert_eq!(classify(&posterior(PosteriorSite::Brainstem, true)), Severity::Major);
    assert_eq!(classify(&posterior(PosteriorSite::Cerebellum, true)), Severity::Major);
    // Small brainstem lesions fall back to the size rule.
    assert_eq!(classify(&posterior(PosteriorSite::Brainstem, false)), Severity::Minor);
}

#[test]
fn pca_cortical_branch_is_moderate_at_any_size() {
    assert_eq!(
        classify(&posterior(PosteriorSite::PcaCorticalBranch, false)),
        Severity::Moderate
    );
    assert_eq!(
        classify(&posterior(PosteriorSite::PcaCorticalBranch, true)),
        Severity::Moderate
    );
}

#[test]
fn other_posterior_sites_classify_by_size() {
    assert_eq!(classify(&posterior(PosteriorSite::Other, false)), Severity::Minor);
    assert_eq!(classify(&posterior(PosteriorSite::Other, true)), Severity::Moderate);
}

#[test]
fn anterior_major_extents() {
    for extent in [
        AnteriorExtent::EntireTerritory,
        AnteriorExtent::MultipleCorticalBranches,
        AnteriorExtent::CorticalAndDeepBranches,
    ] {
        let lesion = Lesion::Anterior {
            pattern: None,
            extent: Some(extent),
            multi_territory: false,
            exceeds_15_mm: false,
        };
        assert_eq!(classify(&lesion), Severity::Major);
    }

    let multi = Lesion::Anterior {
        pattern: None,
        extent: None,
        multi_territory: true,
        exceeds_15_mm: false,
    };
    assert_eq!(classify(&multi), Severity::Major);
}

#[test]
fn anterior_moderate_patterns() {
    for pattern in [
        AnteriorPattern::McaCorticalBranch,
        AnteriorPattern::McaDeepBranch,
        AnteriorPattern::InternalBorderzone,
        AnteriorPattern::AcaCorticalBranch,
    ] {
        let lesion = Lesion::Anterior {
            pattern: Some(pattern),
            extent: None,
            multi_territory: false,
            exceeds_15_mm: false,
        };
        assert_eq!(classify(&lesion), Severity::Moderate);
    }
}

#[test]
fn anterior_extent_outranks_pattern() {
    let lesion = Lesion::Anterior {
        pattern: Some(AnteriorPattern::McaDeepBranch),
        extent: Some(AnteriorExtent::EntireTerritory),
        multi_territory: false,
        exceeds_15_mm: false,
    };
    assert_eq!(classify(&lesion), Severity::Major);
}

#[test]
fn anterior_without_pattern_classifies_by_size() {
    assert_eq!(classify(&anterior_by_size(false)), Severity::Minor);
    assert_eq!(classify(&anterior_by_size(true)), Severity::Moderate);
}

#[test]
fn single_lesion_keeps_its_label() {
    assert_eq!(overall_severity(&[Severity::Minor]).unwrap(), Severity::Minor);
    assert_eq!(overall_severity(&[Severity::Moderate]).unwrap(), Severity::Moderate);
    assert_eq!(overall_severity(&[Severity::Major]).unwrap(), Severity::Major);
}

#[test]
fn two_minor_lesions_escalate_to_moderate() {
    let result = overall_severity(&[Severity::Minor, Severity::Minor]).unwrap();
    assert_eq!(result, Severity::Moderate);
}

#[test]
fn two_minor_plus_one_moderate_escalates_to_major() {
    let result =
        overall_severity(&[Severity::Minor, Severity::Minor, Severity::Moderate]).unwrap();
    assert_eq!(result, Severity::Major);
}

#[test]
fn three_minor_lesions_escalate_to_major() {
    let result = overall_severity(&[Severity::Minor, Severity::Minor, Severity::Minor]).unwrap();
    assert_eq!(result, Severity::Major);
}

#[test]
fn two_moderate_lesions_escalate_to_major() {
    let result = overall_severity(&[Severity::Moderate, Severity::Moderate]).unwrap();
    assert_eq!(result, Severity::Major);
}

#[test]
fn one_minor_plus_one_moderate_stays_moderate() {
    let result = overall_severity(&[Severity::Minor, Severity::Moderate]).unwrap();
    assert_eq!(result, Severity::Moderate);
}

#[test]
fn major_never_deescalates() {
    let result = overall_severity(&[Severity::Major, Severity::Minor]).unwrap();
    assert_eq!(result, Severity::Major);
}

#[test]
fn lesion_count_bounds() {
    assert!(matches!(overall_severity(&[]), Err(TimingError::NoLesions)));
    let five = [Severity::Minor; 5];
    assert!(matches!(
        overall_severity(&five),
        Err(TimingError::TooManyLesions { max: 4, got: 5 })
    ));
}

#[test]
fn classify_all_composes_classification_and_aggregation() {
    let lesions = [
        anterior_by_size(false),
        anterior_by_size(false),
        posterior(PosteriorSite::PcaCorticalBranch, false),
    ];
    assert_eq!(classify_all(&lesions).unwrap(), Severity::Major);
}

#[test]
fn start_window_map_is_fixed() {
    assert_eq!(start_window(Severity::Minor), StartWindow::Within48Hours);
    assert_eq!(start_window(Severity::Moderate), StartWindow::Within48Hours);
    assert_eq!(start_window(Severity::Major), StartWindow::Day6To7);
    assert_eq!(StartWindow::Day6To7.label(), "6–7 days");
}
