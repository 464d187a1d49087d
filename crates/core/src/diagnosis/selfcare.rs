//! Threshold rules that turn questionnaire answers into self-care items

use super::types::{DiagnosisAnswers, SelfCareCategory, SelfCareRecommendation};

/// One independent rule: when `applies` holds, the item is recommended.
#[derive(Clone, Copy)]
pub struct SelfCareRule {
    pub id: &'static str,
    pub applies: fn(&DiagnosisAnswers) -> bool,
    pub category: SelfCareCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: Option<&'static str>,
}

impl std::fmt::Debug for SelfCareRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelfCareRule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl SelfCareRule {
    pub fn recommendation(&self) -> SelfCareRecommendation {
        SelfCareRecommendation {
            category: self.category,
            title: self.title.to_string(),
            description: self.description.to_string(),
            duration: self.duration.map(str::to_string),
        }
    }
}

fn eye_movement(a: &DiagnosisAnswers) -> bool {
    a.brain_fatigue.concentration >= 2 || a.mental.stress_level >= 2
}

fn breathing_478(a: &DiagnosisAnswers) -> bool {
    a.mental.stress_level >= 3 || a.brain_fatigue.sleep_onset >= 2
}

fn neck_shoulder_stretch(a: &DiagnosisAnswers) -> bool {
    a.chronic_pain.neck_shoulder >= 3 || a.chronic_pain.upper_back >= 2
}

fn facial_massage(a: &DiagnosisAnswers) -> bool {
    a.beauty.swelling >= 2 || a.beauty.face_line >= 2
}

fn digital_detox(a: &DiagnosisAnswers) -> bool {
    a.lifestyle.screen_time >= 3
}

fn sleep_environment(a: &DiagnosisAnswers) -> bool {
    a.brain_fatigue.sleep_onset >= 2 || a.brain_fatigue.night_waking >= 2
}

fn light_exercise(a: &DiagnosisAnswers) -> bool {
    a.lifestyle.exercise_amount >= 3
}

/// Rules in evaluation order. Several may fire for the same answers.
pub const SELF_CARE_RULES: &[SelfCareRule] = &[
    SelfCareRule {
        id: "eye_movement",
        applies: eye_movement,
        category: SelfCareCategory::BrainTraining,
        title: "眼球運動トレーニング",
        description: "目を上下左右にゆっくり動かし、首を動かさずに8の字を描く。脳の活性化と疲労回復に効果的。",
        duration: Some("5分"),
    },
    SelfCareRule {
        id: "breathing_478",
        applies: breathing_478,
        category: SelfCareCategory::BrainTraining,
        title: "4-7-8呼吸法",
        description: "4秒吸って、7秒止めて、8秒吐く。自律神経を整え、リラックス効果が高い。",
        duration: Some("5分"),
    },
    SelfCareRule {
        id: "neck_shoulder_stretch",
        applies: neck_shoulder_stretch,
        category: SelfCareCategory::Bodycare,
        title: "首肩セルフケアストレッチ",
        description: "肩を大きく回し、首をゆっくり傾ける。血流改善とコリの解消に効果的。",
        duration: Some("10分"),
    },
    SelfCareRule {
        id: "facial_massage",
        applies: facial_massage,
        category: SelfCareCategory::Bodycare,
        title: "フェイシャルマッサージ",
        description: "顎から耳、額からこめかみへリンパを流す。むくみ解消とフェイスライン改善。",
        duration: Some("5分"),
    },
    SelfCareRule {
        id: "digital_detox",
        applies: digital_detox,
        category: SelfCareCategory::Lifestyle,
        title: "デジタルデトックス",
        description: "就寝1時間前からスマホ・PC利用を控える。ブルーライトカット眼鏡の使用も推奨。",
        duration: None,
    },
    SelfCareRule {
        id: "sleep_environment",
        applies: sleep_environment,
        category: SelfCareCategory::Lifestyle,
        title: "睡眠環境の最適化",
        description: "寝室の温度を18-22度に保ち、就寝90分前の入浴で体温リズムを整える。",
        duration: None,
    },
    SelfCareRule {
        id: "light_exercise",
        applies: light_exercise,
        category: SelfCareCategory::Lifestyle,
        title: "軽い運動習慣",
        description: "1日15分のウォーキングから始める。血流改善と自律神経のバランス調整に効果的。",
        duration: Some("15分"),
    },
];

/// Evaluates `rules` in order and collects every match.
pub fn match_rules(rules: &[SelfCareRule], answers: &DiagnosisAnswers) -> Vec<SelfCareRecommendation> {
    rules.iter().filter(|rule| (rule.applies)(answers)).map(SelfCareRule::recommendation).collect()
}

/// Self-care items for `answers` under the default rule set.
pub fn recommend(answers: &DiagnosisAnswers) -> Vec<SelfCareRecommendation> {
    match_rules(SELF_CARE_RULES, answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(answers: &DiagnosisAnswers) -> Vec<&'static str> {
        SELF_CARE_RULES.iter().filter(|rule| (rule.applies)(answers)).map(|rule| rule.id).collect()
    }

    #[test]
    fn nothing_fires_at_all_zero_baseline() {
        let answers = DiagnosisAnswers::default();
        assert!(recommend(&answers).is_empty());
    }

    #[test]
    fn each_threshold_is_inclusive() {
        let mut answers = DiagnosisAnswers::default();
        answers.brain_fatigue.concentration = 2;
        assert_eq!(fired(&answers), vec!["eye_movement"]);

        let mut answers = DiagnosisAnswers::default();
        answers.mental.stress_level = 3;
        assert_eq!(fired(&answers), vec!["eye_movement", "breathing_478"]);

        let mut answers = DiagnosisAnswers::default();
        answers.chronic_pain.upper_back = 2;
        assert_eq!(fired(&answers), vec!["neck_shoulder_stretch"]);

        let mut answers = DiagnosisAnswers::default();
        answers.lifestyle.screen_time = 3;
        assert_eq!(fired(&answers), vec!["digital_detox"]);

        let mut answers = DiagnosisAnswers::default();
        answers.lifestyle.exercise_amount = 3;
        assert_eq!(fired(&answers), vec!["light_exercise"]);
    }

    #[test]
    fn just_below_threshold_does_not_fire() {
        let mut answers = DiagnosisAnswers::default();
        answers.chronic_pain.neck_shoulder = 2;
        answers.lifestyle.screen_time = 2;
        answers.beauty.face_line = 1;
        assert!(fired(&answers).is_empty());
    }

    #[test]
    fn bodycare_and_lifestyle_fire_together_in_declaration_order() {
        let mut answers = DiagnosisAnswers::default();
        answers.beauty.swelling = 2;
        answers.brain_fatigue.night_waking = 3;

        let items = recommend(&answers);
        let categories: Vec<SelfCareCategory> = items.iter().map(|item| item.category).collect();
        assert_eq!(categories, vec![SelfCareCategory::Bodycare, SelfCareCategory::Lifestyle]);
        assert_eq!(items[0].title, "フェイシャルマッサージ");
        assert_eq!(items[1].title, "睡眠環境の最適化");
        assert_eq!(items[1].duration, None);
    }

    #[test]
    fn sleep_onset_triggers_breathing_and_environment() {
        let mut answers = DiagnosisAnswers::default();
        answers.brain_fatigue.sleep_onset = 2;
        assert_eq!(fired(&answers), vec!["breathing_478", "sleep_environment"]);
    }

    #[test]
    fn custom_rule_sets_are_evaluated_independently() {
        let mut answers = DiagnosisAnswers::default();
        answers.lifestyle.screen_time = 4;

        let only_detox = &SELF_CARE_RULES[4..5];
        assert_eq!(match_rules(only_detox, &answers).len(), 1);
        assert!(match_rules(&SELF_CARE_RULES[..4], &answers).is_empty());
    }
}
