use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ictus_core::models::laterality::Laterality;
use ictus_scales::nihss::{NihssExam, item_defs};

/// MRC-style motor grade from an NIHSS motor item score (0–4).
pub fn motor_grade(value: u8) -> &'static str {
    match value {
        0 => "V",
        1 => "IV",
        2 => "III",
        3 => "II",
        4 => "I",
        _ => "N/A",
    }
}

/// Mental-status wording from NIHSS item 1a.
pub fn mental_status(loc: u8) -> &'static str {
    match loc {
        0 => "alert",
        1 => "mild drowsy",
        2 => "drowsy",
        3 => "semicoma",
        _ => "unknown",
    }
}

/// Language wording from NIHSS item 9.
pub fn language_status(value: u8) -> &'static str {
    match value {
        0 => "normal",
        1 => "mild aphasia (language score 1)",
        2 => "moderate aphasia (language score 2)",
        3 => "severe aphasia (language score 3)",
        _ => "unknown",
    }
}

/// Sides for the findings the NIHSS item values do not localize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExamSides {
    pub facial: Laterality,
    pub sensory: Laterality,
    pub ataxia: Laterality,
}

/// Per-item component list for the medical record.
pub fn component_text(exam: &NihssExam) -> String {
    let mut output = String::from("NIHSS components:\n");
    for def in item_defs() {
        output.push_str(&format!("- {}: {}\n", def.name, exam.value(def.item)));
    }
    output.push_str(&format!("NIHSS total: {}", exam.total()));
    output
}

/// Structured neurologic-examination narrative.
pub fn neuro_exam_text(exam: &NihssExam, sides: &ExamSides) -> String {
    let mut lines = vec!["Neurologic examination:".to_string()];

    lines.push(format!("MSE: {}", mental_status(exam.level_of_consciousness)));
    lines.push(format!("Language function: {}", language_status(exam.best_language)));

    if exam.best_gaze == 0 {
        lines.push("EOM: normal".to_string());
    } else {
        lines.push("EOM: gaze preponderance (+)".to_string());
    }

    lines.push(format!(
        "dysarthria {}",
        if exam.dysarthria > 0 { "(+)" } else { "(-)" }
    ));

    lines.push("Motor".to_string());
    lines.push(format!(
        "LUE/RUE: {}/{}",
        motor_grade(exam.motor_arm_left),
        motor_grade(exam.motor_arm_right)
    ));
    lines.push(format!(
        "LLE/RLE: {}/{}",
        motor_grade(exam.motor_leg_left),
        motor_grade(exam.motor_leg_right)
    ));

    if exam.sensory > 0 {
        lines.push(format!("Sensory: {} hypesthesia (+)", sides.sensory.adjective()));
    } else {
        lines.push("Sensory: (-)".to_string());
    }

    if exam.limb_ataxia > 0 {
        lines.push(format!(
            "Cerebellar function test: {} dysmetria (+)",
            sides.ataxia.adjective()
        ));
    } else {
        lines.push("Cerebellar function test: (-)".to_string());
    }

    lines.push(format!(
        "neglect {}",
        if exam.neglect > 0 { "(+)" } else { "(-)" }
    ));

    if exam.facial_palsy > 0 {
        let finding = match sides.facial {
            Laterality::Left => "left CTFP".to_string(),
            Laterality::Right => "right CTFP".to_string(),
            Laterality::Bilateral => "bilateral facial palsy (+)".to_string(),
        };
        lines.push(format!("Facial expression: {finding}"));
    } else {
        lines.push("Facial expression: (-)".to_string());
    }

    lines.push(format!("NIHSS total: {}", exam.total()));
    lines.join("\n")
}
