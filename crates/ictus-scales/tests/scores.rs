use ictus_core::models::sex::Sex;
use ictus_scales::afib::{ChadsVasc, annual_risk_percent};
use ictus_scales::bleeding::HasBled;
use ictus_scales::tia::{Abcd2, RiskBand};

fn chads_base() -> ChadsVasc {
    ChadsVasc {
        heart_failure: false,
        hypertension: false,
        age: 50,
        diabetes: false,
        prior_stroke_tia: false,
        vascular_disease: false,
        sex: Sex::Male,
    }
}

#[test]
fn chads_vasc_age_tier_and_female_point() {
    let input = ChadsVasc {
        age: 70,
        sex: Sex::Female,
        ..chads_base()
    };
    assert_eq!(input.total(), 2);
}

#[test]
fn chads_vasc_age_thresholds() {
    assert_eq!(ChadsVasc { age: 64, ..chads_base() }.total(), 0);
    assert_eq!(ChadsVasc { age: 65, ..chads_base() }.total(), 1);
    assert_eq!(ChadsVasc { age: 74, ..chads_base() }.total(), 1);
    assert_eq!(ChadsVasc { age: 75, ..chads_base() }.total(), 2);
}

#[test]
fn chads_vasc_all_factors_is_nine() {
    let input = ChadsVasc {
        heart_failure: true,
        hypertension: true,
        age: 80,
        diabetes: true,
        prior_stroke_tia: true,
        vascular_disease: true,
        sex: Sex::Female,
    };
    assert_eq!(input.total(), 9);
}

#[test]
fn chads_vasc_annual_risk_table() {
    assert_eq!(annual_risk_percent(0), Some(0.2));
    assert_eq!(annual_risk_percent(8), Some(10.8));
    assert_eq!(annual_risk_percent(9), Some(12.2));
    assert_eq!(annual_risk_percent(10), None);
}

fn abcd2_base() -> Abcd2 {
    Abcd2 {
        age_60_or_over: false,
        bp_140_90_or_over: false,
        unilateral_weakness: false,
        speech_disturbance_without_weakness: false,
        duration_minutes: 0,
        diabetes: false,
    }
}

#[test]
fn abcd2_full_vector_is_seven() {
    let input = Abcd2 {
        age_60_or_over: true,
        bp_140_90_or_over: true,
        unilateral_weakness: true,
        speech_disturbance_without_weakness: false,
        duration_minutes: 65,
        diabetes: true,
    };
    assert_eq!(input.total(), 7);
}

#[test]
fn abcd2_weakness_wins_over_speech() {
    let input = Abcd2 {
        unilateral_weakness: true,
        speech_disturbance_without_weakness: true,
        ..abcd2_base()
    };
    assert_eq!(input.total(), 2);
}

#[test]
fn abcd2_speech_without_weakness_scores_one() {
    let input = Abcd2 {
        speech_disturbance_without_weakness: true,
        ..abcd2_base()
    };
    assert_eq!(input.total(), 1);
}

#[test]
fn abcd2_duration_boundaries() {
    assert_eq!(Abcd2 { duration_minutes: 9, ..abcd2_base() }.total(), 0);
    assert_eq!(Abcd2 { duration_minutes: 10, ..abcd2_base() }.total(), 1);
    assert_eq!(Abcd2 { duration_minutes: 59, ..abcd2_base() }.total(), 1);
    assert_eq!(Abcd2 { duration_minutes: 60, ..abcd2_base() }.total(), 2);
}

#[test]
fn abcd2_risk_bands() {
    assert_eq!(RiskBand::from_total(0), RiskBand::Low);
    assert_eq!(RiskBand::from_total(3), RiskBand::Low);
    assert_eq!(RiskBand::from_total(4), RiskBand::Moderate);
    assert_eq!(RiskBand::from_total(5), RiskBand::Moderate);
    assert_eq!(RiskBand::from_total(6), RiskBand::High);
    assert_eq!(RiskBand::from_total(7), RiskBand::High);

    let high = RiskBand::High.recurrence_risk();
    assert_eq!(high.two_day, 8.1);
    assert_eq!(high.ninety_day, 17.8);
}

#[test]
fn has_bled_counts_each_factor_once() {
    let none = HasBled {
        hypertension_sbp_over_160: false,
        abnormal_renal_function: false,
        abnormal_liver_function: false,
        prior_stroke: false,
        bleeding_history: false,
        labile_inr: false,
        age_over_65: false,
        bleeding_predisposing_drugs: false,
        excess_alcohol: false,
    };
    assert_eq!(none.total(), 0);

    let all = HasBled {
        hypertension_sbp_over_160: true,
        abnormal_renal_function: true,
        abnormal_liver_function: true,
        prior_stroke: true,
        bleeding_history: true,
        labile_inr: true,
        age_over_65: true,
        bleeding_predisposing_drugs: true,
        excess_alcohol: true,
    };
    assert_eq!(all.total(), 9);

    let one = HasBled {
        labile_inr: true,
        ..none
    };
    assert_eq!(one.total(), 1);
}

#[test]
fn totals_are_idempotent() {
    let input = Abcd2 {
        age_60_or_over: true,
        duration_minutes: 30,
        ..abcd2_base()
    };
    assert_eq!(input.total(), input.total());
}
