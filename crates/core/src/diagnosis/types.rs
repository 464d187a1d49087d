//! Types for the diagnosis questionnaire and its result

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Upper bound of every questionnaire sub-dimension (range sliders go 0..=4).
pub const MAX_LEVEL: u8 = 4;

/// Concern that adds the performance bonus to 5-ALA.
pub const CONCERN_PERFORMANCE: &str = "パフォーマンス";

/// Concern that adds the brain-fatigue bonus to BHB.
pub const CONCERN_BRAIN_FATIGUE: &str = "脳疲労";

/// A completed questionnaire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisAnswers {
    pub age_group: String,
    pub gender: String,
    pub main_concerns: Vec<String>,
    pub chronic_pain: ChronicPain,
    pub brain_fatigue: BrainFatigue,
    pub beauty: Beauty,
    pub lifestyle: Lifestyle,
    pub mental: Mental,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronicPain {
    pub neck_shoulder: u8,
    pub headache: u8,
    pub lower_back: u8,
    pub upper_back: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainFatigue {
    pub sleep_onset: u8,
    pub night_waking: u8,
    pub morning_fatigue: u8,
    pub concentration: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beauty {
    pub swelling: u8,
    pub skin_dullness: u8,
    pub face_line: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    pub meal_frequency: u8,
    pub exercise_amount: u8,
    pub caffeine: u8,
    pub alcohol: u8,
    pub screen_time: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mental {
    pub stress_level: u8,
    pub mood_swings: u8,
    pub anxiety_irritability: u8,
}

impl DiagnosisAnswers {
    /// Whether the respondent listed `concern` among their main concerns.
    pub fn has_concern(&self, concern: &str) -> bool {
        self.main_concerns.iter().any(|value| value == concern)
    }

    /// Every sub-dimension with its dotted JSON path.
    pub fn levels(&self) -> [(&'static str, u8); 19] {
        let Self { chronic_pain: p, brain_fatigue: b, beauty: y, lifestyle: l, mental: m, .. } =
            self;
        [
            ("chronicPain.neckShoulder", p.neck_shoulder),
            ("chronicPain.headache", p.headache),
            ("chronicPain.lowerBack", p.lower_back),
            ("chronicPain.upperBack", p.upper_back),
            ("brainFatigue.sleepOnset", b.sleep_onset),
            ("brainFatigue.nightWaking", b.night_waking),
            ("brainFatigue.morningFatigue", b.morning_fatigue),
            ("brainFatigue.concentration", b.concentration),
            ("beauty.swelling", y.swelling),
            ("beauty.skinDullness", y.skin_dullness),
            ("beauty.faceLine", y.face_line),
            ("lifestyle.mealFrequency", l.meal_frequency),
            ("lifestyle.exerciseAmount", l.exercise_amount),
            ("lifestyle.caffeine", l.caffeine),
            ("lifestyle.alcohol", l.alcohol),
            ("lifestyle.screenTime", l.screen_time),
            ("mental.stressLevel", m.stress_level),
            ("mental.moodSwings", m.mood_swings),
            ("mental.anxietyIrritability", m.anxiety_irritability),
        ]
    }

    /// Request-boundary validation. The engine itself never calls this and
    /// computes with whatever it is given. An empty `main_concerns` list is
    /// accepted; an absent one already fails deserialization.
    pub fn validate_required(&self) -> Result<(), DomainError> {
        if self.age_group.trim().is_empty() {
            return Err(DomainError::MissingField("ageGroup"));
        }
        if self.gender.trim().is_empty() {
            return Err(DomainError::MissingField("gender"));
        }

        if let Some((field, value)) = self.levels().into_iter().find(|(_, v)| *v > MAX_LEVEL) {
            return Err(DomainError::OutOfRange { field, value, max: MAX_LEVEL });
        }

        Ok(())
    }
}

/// Score per supplement for a single questionnaire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplementScores {
    pub magnesium: f64,
    pub cytokine: f64,
    pub ala: f64,
    pub bhb: f64,
    pub multivitamin: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementRecommendation {
    pub name: String,
    pub score: f64,
    pub reason: String,
    pub expected_effects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_link: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelfCareCategory {
    BrainTraining,
    Bodycare,
    Lifestyle,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfCareRecommendation {
    pub category: SelfCareCategory,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub supplements: Vec<SupplementRecommendation>,
    pub self_care: Vec<SelfCareRecommendation>,
    pub summary: String,
}
