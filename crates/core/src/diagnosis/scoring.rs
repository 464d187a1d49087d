//! Weighted supplement scoring

use super::types::{DiagnosisAnswers, SupplementScores, CONCERN_BRAIN_FATIGUE, CONCERN_PERFORMANCE};

/// Flat bonus added when the respondent names the matching main concern.
pub const CONCERN_BONUS: f64 = 5.0;

/// Computes supplement scores from a questionnaire.
///
/// Scores are raw weighted sums and are only comparable within one call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, answers: &DiagnosisAnswers) -> SupplementScores {
        SupplementScores {
            magnesium: self.magnesium(answers),
            cytokine: self.cytokine(answers),
            ala: self.ala(answers),
            bhb: self.bhb(answers),
            multivitamin: self.multivitamin(answers),
        }
    }

    /// Chronic stiffness, sleep and stress.
    pub fn magnesium(&self, answers: &DiagnosisAnswers) -> f64 {
        let pain = &answers.chronic_pain;
        let fatigue = &answers.brain_fatigue;
        let mental = &answers.mental;

        weighted(&[
            (pain.neck_shoulder, 2.0),
            (pain.headache, 2.0),
            (fatigue.sleep_onset, 1.5),
            (fatigue.night_waking, 1.5),
            (mental.stress_level, 1.5),
            (mental.anxiety_irritability, 1.5),
        ])
    }

    /// Beauty and overall recovery.
    pub fn cytokine(&self, answers: &DiagnosisAnswers) -> f64 {
        weighted(&[
            (answers.beauty.skin_dullness, 2.5),
            (answers.beauty.face_line, 2.0),
            (answers.brain_fatigue.morning_fatigue, 2.0),
            (answers.chronic_pain.lower_back, 1.5),
            (answers.beauty.swelling, 2.0),
        ])
    }

    /// Energy, concentration and performance.
    pub fn ala(&self, answers: &DiagnosisAnswers) -> f64 {
        weighted(&[
            (answers.brain_fatigue.concentration, 3.0),
            (answers.brain_fatigue.morning_fatigue, 2.0),
            (answers.lifestyle.exercise_amount, 1.5),
        ]) + concern_bonus(answers, CONCERN_PERFORMANCE)
    }

    /// Brain fatigue and mood.
    pub fn bhb(&self, answers: &DiagnosisAnswers) -> f64 {
        weighted(&[
            (answers.brain_fatigue.concentration, 2.5),
            (answers.brain_fatigue.morning_fatigue, 2.0),
            (answers.mental.mood_swings, 1.5),
            (answers.lifestyle.meal_frequency, 1.5),
        ]) + concern_bonus(answers, CONCERN_BRAIN_FATIGUE)
    }

    /// General lifestyle baseline.
    pub fn multivitamin(&self, answers: &DiagnosisAnswers) -> f64 {
        weighted(&[
            (answers.lifestyle.meal_frequency, 2.0),
            (answers.lifestyle.exercise_amount, 1.5),
            (answers.brain_fatigue.morning_fatigue, 1.0),
            (answers.beauty.skin_dullness, 1.5),
            (answers.mental.stress_level, 1.0),
        ])
    }
}

fn weighted(terms: &[(u8, f64)]) -> f64 {
    terms.iter().map(|(level, weight)| f64::from(*level) * weight).sum()
}

fn concern_bonus(answers: &DiagnosisAnswers, concern: &str) -> f64 {
    if answers.has_concern(concern) {
        CONCERN_BONUS
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::types::{BrainFatigue, ChronicPain, Lifestyle, Mental};

    fn base(concerns: &[&str]) -> DiagnosisAnswers {
        DiagnosisAnswers {
            age_group: "30代".to_string(),
            gender: "女性".to_string(),
            main_concerns: concerns.iter().map(|c| c.to_string()).collect(),
            ..DiagnosisAnswers::default()
        }
    }

    #[test]
    fn magnesium_matches_hand_computed_weights() {
        let answers = DiagnosisAnswers {
            chronic_pain: ChronicPain { neck_shoulder: 4, headache: 3, ..ChronicPain::default() },
            brain_fatigue: BrainFatigue {
                sleep_onset: 3,
                night_waking: 2,
                ..BrainFatigue::default()
            },
            mental: Mental { stress_level: 3, anxiety_irritability: 2, ..Mental::default() },
            ..base(&["慢性コリ・痛み"])
        };

        let scores = ScoreCalculator::new().calculate(&answers);
        // 8 + 6 + 4.5 + 3 + 4.5 + 3 = 29
        assert!((scores.magnesium - 29.0).abs() < 1e-9);
    }

    #[test]
    fn performance_concern_adds_bonus_to_ala_only() {
        let answers = DiagnosisAnswers {
            brain_fatigue: BrainFatigue {
                concentration: 4,
                morning_fatigue: 3,
                ..BrainFatigue::default()
            },
            lifestyle: Lifestyle { exercise_amount: 2, ..Lifestyle::default() },
            ..base(&["パフォーマンス"])
        };

        let scores = ScoreCalculator::new().calculate(&answers);
        // 12 + 6 + 3 + 5
        assert!((scores.ala - 26.0).abs() < 1e-9);
        // 10 + 6, no brain-fatigue bonus
        assert!((scores.bhb - 16.0).abs() < 1e-9);
    }

    #[test]
    fn brain_fatigue_concern_adds_bonus_to_bhb() {
        let scores = ScoreCalculator::new().calculate(&base(&["脳疲労"]));
        assert_eq!(scores.bhb, CONCERN_BONUS);
        assert_eq!(scores.ala, 0.0);
    }

    #[test]
    fn all_zero_answers_score_zero_everywhere() {
        let scores = ScoreCalculator::new().calculate(&base(&["なんとなく不調"]));
        assert_eq!(scores, SupplementScores::default());
    }

    #[test]
    fn raising_a_contributing_level_never_lowers_magnesium() {
        let calculator = ScoreCalculator::new();
        let mut answers = base(&["睡眠"]);
        let mut previous = calculator.magnesium(&answers);

        for level in 1..=4 {
            answers.chronic_pain.neck_shoulder = level;
            let current = calculator.magnesium(&answers);
            assert!(current >= previous, "level {level} lowered magnesium");
            previous = current;
        }
    }

    #[test]
    fn out_of_range_levels_are_computed_as_given() {
        let mut answers = base(&["睡眠"]);
        answers.chronic_pain.headache = 10;

        assert_eq!(ScoreCalculator::new().magnesium(&answers), 20.0);
    }
}
