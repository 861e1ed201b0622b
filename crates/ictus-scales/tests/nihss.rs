use ictus_scales::nihss::{NihssExam, NihssItem, item_defs};

#[test]
fn item_table_has_fifteen_entries_in_order() {
    let defs = item_defs();
    assert_eq!(defs.len(), 15);
    assert_eq!(defs[0].item, NihssItem::LevelOfConsciousness);
    assert_eq!(defs[0].name, "1a. Level of consciousness (LOC)");
    assert_eq!(defs[14].item, NihssItem::Neglect);
    assert_eq!(defs[14].range.max, 2);
}

#[test]
fn default_exam_scores_zero() {
    let exam = NihssExam::default();
    assert_eq!(exam.total(), 0);
    assert!(exam.validate().is_empty());
}

#[test]
fn total_is_sum_of_items() {
    let exam = NihssExam {
        level_of_consciousness: 1,
        best_gaze: 2,
        motor_arm_left: 3,
        best_language: 2,
        ..NihssExam::default()
    };
    assert_eq!(exam.total(), 8);
}

#[test]
fn max_exam_totals_forty_two() {
    let mut exam = NihssExam::default();
    for def in item_defs() {
        let value = def.range.max;
        match def.item {
            NihssItem::LevelOfConsciousness => exam.level_of_consciousness = value,
            NihssItem::LocQuestions => exam.loc_questions = value,
            NihssItem::LocCommands => exam.loc_commands = value,
            NihssItem::BestGaze => exam.best_gaze = value,
            NihssItem::VisualFields => exam.visual_fields = value,
            NihssItem::FacialPalsy => exam.facial_palsy = value,
            NihssItem::MotorArmLeft => exam.motor_arm_left = value,
            NihssItem::MotorArmRight => exam.motor_arm_right = value,
            NihssItem::MotorLegLeft => exam.motor_leg_left = value,
            NihssItem::MotorLegRight => exam.motor_leg_right = value,
            NihssItem::LimbAtaxia => exam.limb_ataxia = value,
            NihssItem::Sensory => exam.sensory = value,
            NihssItem::BestLanguage => exam.best_language = value,
            NihssItem::Dysarthria => exam.dysarthria = value,
            NihssItem::Neglect => exam.neglect = value,
        }
    }
    assert_eq!(exam.total(), 42);
    assert!(exam.validate().is_empty());
}

#[test]
fn validate_reports_every_violation() {
    let exam = NihssExam {
        level_of_consciousness: 4,
        limb_ataxia: 3,
        ..NihssExam::default()
    };
    let violations = exam.validate();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].value, 4);
    assert!(violations[0].message.contains("1a. Level of consciousness"));
    assert!(violations[1].message.contains("7. Limb ataxia"));
}

#[test]
fn entries_follow_administration_order() {
    let exam = NihssExam {
        neglect: 2,
        ..NihssExam::default()
    };
    let entries: Vec<_> = exam.entries().collect();
    assert_eq!(entries.len(), 15);
    assert_eq!(entries[14], (NihssItem::Neglect, 2));
}
