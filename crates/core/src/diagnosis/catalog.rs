//! Supplement catalog and top-N selection

use serde::{Deserialize, Serialize};

use super::types::{SupplementRecommendation, SupplementScores};

/// Supplement candidates in declaration order. Ties in score keep this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Supplement {
    Magnesium,
    Cytokine,
    Ala,
    Bhb,
    Multivitamin,
}

/// Static display data for a supplement.
#[derive(Debug, Clone, Copy)]
pub struct SupplementProfile {
    pub name: &'static str,
    pub reason: &'static str,
    pub expected_effects: &'static [&'static str],
}

const MAGNESIUM: SupplementProfile = SupplementProfile {
    name: "マグネシウム",
    reason: "慢性的な首肩こりや睡眠の質の低下、ストレスレベルが高いことから、マグネシウム不足が考えられます。",
    expected_effects: &["筋肉の緊張緩和", "睡眠の質向上", "ストレス軽減", "神経系のリラックス"],
};

const CYTOKINE: SupplementProfile = SupplementProfile {
    name: "サイトカイン（臍帯由来幹細胞上清液）",
    reason: "美容面での悩みや疲労回復の遅れから、細胞レベルでのリカバリーサポートが有効です。",
    expected_effects: &["肌質改善", "疲労回復促進", "アンチエイジング", "全身のリカバリー"],
};

const ALA: SupplementProfile = SupplementProfile {
    name: "5-ALA",
    reason: "集中力の低下や朝の疲労感から、ミトコンドリア機能の向上が必要と考えられます。",
    expected_effects: &["エネルギー生成促進", "集中力向上", "パフォーマンス向上", "持久力アップ"],
};

const BHB: SupplementProfile = SupplementProfile {
    name: "BHB（ケトン体）",
    reason: "脳疲労や集中力の低下、気分のムラから、脳のエネルギー源としてケトン体が有効です。",
    expected_effects: &["脳機能向上", "メンタルクリア", "持続的エネルギー", "気分の安定"],
};

const MULTIVITAMIN: SupplementProfile = SupplementProfile {
    name: "マルチビタミン",
    reason: "生活習慣や食事の偏りから、基本的な栄養素の底上げが必要です。",
    expected_effects: &["栄養バランス改善", "全般的な健康維持", "免疫力サポート", "エネルギー代謝促進"],
};

impl Supplement {
    pub const ALL: [Supplement; 5] =
        [Self::Magnesium, Self::Cytokine, Self::Ala, Self::Bhb, Self::Multivitamin];

    pub fn profile(&self) -> &'static SupplementProfile {
        match self {
            Self::Magnesium => &MAGNESIUM,
            Self::Cytokine => &CYTOKINE,
            Self::Ala => &ALA,
            Self::Bhb => &BHB,
            Self::Multivitamin => &MULTIVITAMIN,
        }
    }

    pub fn name(&self) -> &'static str {
        self.profile().name
    }

    pub fn score_in(&self, scores: &SupplementScores) -> f64 {
        match self {
            Self::Magnesium => scores.magnesium,
            Self::Cytokine => scores.cytokine,
            Self::Ala => scores.ala,
            Self::Bhb => scores.bhb,
            Self::Multivitamin => scores.multivitamin,
        }
    }

    pub fn recommendation(&self, score: f64) -> SupplementRecommendation {
        let profile = self.profile();
        SupplementRecommendation {
            name: profile.name.to_string(),
            score,
            reason: profile.reason.to_string(),
            expected_effects: profile.expected_effects.iter().map(|e| e.to_string()).collect(),
            purchase_link: None,
        }
    }
}

/// Ranks every candidate by score, highest first. The sort is stable so equal
/// scores stay in declaration order.
pub fn rank(scores: &SupplementScores) -> Vec<(Supplement, f64)> {
    let mut ranked: Vec<(Supplement, f64)> =
        Supplement::ALL.iter().map(|supplement| (*supplement, supplement.score_in(scores))).collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// The `limit` best-scoring supplements with their static metadata attached.
pub fn select_top(scores: &SupplementScores, limit: usize) -> Vec<SupplementRecommendation> {
    rank(scores)
        .into_iter()
        .take(limit)
        .map(|(supplement, score)| supplement.recommendation(score))
        .collect()
}
