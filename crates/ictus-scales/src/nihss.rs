use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::{ItemRange, ItemViolation};

/// Identifier for one of the 15 NIHSS items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NihssItem {
    LevelOfConsciousness,
    LocQuestions,
    LocCommands,
    BestGaze,
    VisualFields,
    FacialPalsy,
    MotorArmLeft,
    MotorArmRight,
    MotorLegLeft,
    MotorLegRight,
    LimbAtaxia,
    Sensory,
    BestLanguage,
    Dysarthria,
    Neglect,
}

/// Definition of one NIHSS item: display name and declared score range.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDef {
    pub item: NihssItem,
    pub name: String,
    pub range: ItemRange,
}

/// The 15 NIHSS items in administration order.
pub fn item_defs() -> &'static [ItemDef] {
    static DEFS: std::sync::LazyLock<Vec<ItemDef>> = std::sync::LazyLock::new(|| {
        let items: [(NihssItem, &str, u8); 15] = [
            (NihssItem::LevelOfConsciousness, "1a. Level of consciousness (LOC)", 3),
            (NihssItem::LocQuestions, "1b. LOC questions", 2),
            (NihssItem::LocCommands, "1c. LOC commands", 2),
            (NihssItem::BestGaze, "2. Best gaze", 2),
            (NihssItem::VisualFields, "3. Visual fields", 3),
            (NihssItem::FacialPalsy, "4. Facial palsy", 3),
            (NihssItem::MotorArmLeft, "5a. Motor arm (Left)", 4),
            (NihssItem::MotorArmRight, "5b. Motor arm (Right)", 4),
            (NihssItem::MotorLegLeft, "6a. Motor leg (Left)", 4),
            (NihssItem::MotorLegRight, "6b. Motor leg (Right)", 4),
            (NihssItem::LimbAtaxia, "7. Limb ataxia", 2),
            (NihssItem::Sensory, "8. Sensory", 2),
            (NihssItem::BestLanguage, "9. Best language", 3),
            (NihssItem::Dysarthria, "10. Dysarthria", 2),
            (NihssItem::Neglect, "11. Extinction and inattention (Neglect)", 2),
        ];

        items
            .iter()
            .map(|&(item, name, max)| ItemDef {
                item,
                name: name.to_string(),
                range: ItemRange { min: 0, max },
            })
            .collect()
    });
    &DEFS
}

/// A scored NIHSS exam. Every item defaults to 0 (no deficit); the
/// total is the plain sum of the 15 item values, maximum 42.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NihssExam {
    pub level_of_consciousness: u8,
    pub loc_questions: u8,
    pub loc_commands: u8,
    pub best_gaze: u8,
    pub visual_fields: u8,
    pub facial_palsy: u8,
    pub motor_arm_left: u8,
    pub motor_arm_right: u8,
    pub motor_leg_left: u8,
    pub motor_leg_right: u8,
    pub limb_ataxia: u8,
    pub sensory: u8,
    pub best_language: u8,
    pub dysarthria: u8,
    pub neglect: u8,
}

impl NihssExam {
    pub fn value(&self, item: NihssItem) -> u8 {
        match item {
            NihssItem::LevelOfConsciousness => self.level_of_consciousness,
            NihssItem::LocQuestions => self.loc_questions,
            NihssItem::LocCommands => self.loc_commands,
            NihssItem::BestGaze => self.best_gaze,
            NihssItem::VisualFields => self.visual_fields,
            NihssItem::FacialPalsy => self.facial_palsy,
            NihssItem::MotorArmLeft => self.motor_arm_left,
            NihssItem::MotorArmRight => self.motor_arm_right,
            NihssItem::MotorLegLeft => self.motor_leg_left,
            NihssItem::MotorLegRight => self.motor_leg_right,
            NihssItem::LimbAtaxia => self.limb_ataxia,
            NihssItem::Sensory => self.sensory,
            NihssItem::BestLanguage => self.best_language,
            NihssItem::Dysarthria => self.dysarthria,
            NihssItem::Neglect => self.neglect,
        }
    }

    /// (item, value) pairs in administration order.
    pub fn entries(&self) -> impl Iterator<Item = (NihssItem, u8)> + '_ {
        item_defs().iter().map(|def| (def.item, self.value(def.item)))
    }

    pub fn total(&self) -> u32 {
        self.entries().map(|(_, value)| u32::from(value)).sum()
    }

    /// Check every item against its declared range. Returns all
    /// violations, not just the first.
    pub fn validate(&self) -> Vec<ItemViolation> {
        let mut violations = Vec::new();
        for def in item_defs() {
            let value = self.value(def.item);
            if !def.range.contains(value) {
                violations.push(ItemViolation {
                    item_id: def.name.clone(),
                    value,
                    expected_range: def.range,
                    message: format!(
                        "NIHSS: {} score {} is outside range [{}, {}]",
                        def.name, value, def.range.min, def.range.max,
                    ),
                });
            }
        }
        violations
    }
}
