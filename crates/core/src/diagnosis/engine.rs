//! Diagnosis engine: scoring, selection, self-care and summary in one call

use super::catalog::{self, Supplement};
use super::scoring::ScoreCalculator;
use super::selfcare;
use super::types::{DiagnosisAnswers, DiagnosisResult, SupplementScores};
use super::MAX_SUPPLEMENTS;

/// Separator used when listing the respondent's main concerns.
const CONCERN_SEPARATOR: &str = "、";

/// Pure, stateless recommendation engine. Safe to share across request tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosisEngine {
    calculator: ScoreCalculator,
}

impl DiagnosisEngine {
    pub fn new() -> Self {
        Self { calculator: ScoreCalculator::new() }
    }

    pub fn scores(&self, answers: &DiagnosisAnswers) -> SupplementScores {
        self.calculator.calculate(answers)
    }

    /// Runs the full diagnosis for one questionnaire.
    pub fn diagnose(&self, answers: &DiagnosisAnswers) -> DiagnosisResult {
        let scores = self.scores(answers);
        let supplements = catalog::select_top(&scores, MAX_SUPPLEMENTS);
        let self_care = selfcare::recommend(answers);

        let top_name = supplements
            .first()
            .map(|supplement| supplement.name.as_str())
            .unwrap_or_else(|| Supplement::ALL[0].name());
        let summary = summarize(&answers.main_concerns, top_name);

        DiagnosisResult { supplements, self_care, summary }
    }
}

/// Renders the summary text. An empty concern list renders as an empty quote.
pub fn summarize(main_concerns: &[String], top_supplement: &str) -> String {
    let concerns = main_concerns.join(CONCERN_SEPARATOR);
    [
        format!("あなたの主な悩みは「{concerns}」です。"),
        "生活習慣と症状から、脳・自律神経・体のバランスを整えることが重要です。".to_string(),
        format!("特に{top_supplement}が最も適していると考えられます。"),
        "セルフケアと組み合わせることで、より効果的な改善が期待できます。".to_string(),
    ]
    .join("\n")
}
