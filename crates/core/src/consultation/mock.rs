//! Deterministic consultation report built from keywords in the form text.
//!
//! Used when the advisor runs without a remote model and whenever the remote
//! call fails, so members always receive a report.

use super::{ConsultationInput, ConsultationReport, ReportSelfCare, ReportSupplement};

/// Keyword hits extracted from a consultation form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Signals {
    pub shoulder_pain: bool,
    pub sleep_issue: bool,
    pub fatigue: bool,
    pub low_motivation: bool,
    pub brain_fog: bool,
    pub desk_work: bool,
    pub coffee: bool,
    pub menstrual_cycle: bool,
}

impl Signals {
    pub fn detect(input: &ConsultationInput) -> Self {
        let concerns = input.current_concerns.to_lowercase();
        let lifestyle = input.lifestyle_rhythm.to_lowercase();
        let notes = input.additional_notes.to_lowercase();

        Self {
            shoulder_pain: contains_any(&concerns, &["肩", "こり"]),
            sleep_issue: contains_any(&concerns, &["寝", "眠"]),
            fatigue: contains_any(&concerns, &["疲", "だるい"]),
            low_motivation: concerns.contains("やる気"),
            brain_fog: concerns.contains("ぼーっと"),
            desk_work: contains_any(&lifestyle, &["デスク", "座"]),
            coffee: notes.contains("コーヒー"),
            menstrual_cycle: notes.contains("生理"),
        }
    }

    fn low_energy(&self) -> bool {
        self.fatigue || self.low_motivation || self.brain_fog
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Builds the fallback report for `input`.
pub fn mock_report(input: &ConsultationInput) -> ConsultationReport {
    let signals = Signals::detect(input);

    ConsultationReport {
        summary: summary(&signals),
        supplements: supplements(&signals),
        self_care: self_care(&signals),
    }
}

fn summary(s: &Signals) -> String {
    if s.desk_work && s.shoulder_pain && s.sleep_issue {
        let caffeine = if s.coffee {
            "カフェイン過多がHPA軸（視床下部-下垂体-副腎）を刺激し、"
        } else {
            ""
        };
        format!(
            "長時間のデスクワークにより、頸部・肩甲帯の筋緊張が持続し、それが硬膜を介して脳幹への血流低下を引き起こしています。\
             これが「肩こり」だけでなく、夜間の入眠困難や朝の倦怠感として表れている状態です。\
             さらに{caffeine}交感神経の過緊張が続いているため、副交感神経への切り替えが上手くいかず、\
             「寝ても疲れが取れない」という悪循環に陥っています。"
        )
    } else if s.low_energy() {
        let tail = if s.menstrual_cycle {
            "さらに生理周期に伴うホルモン変動が自律神経の揺らぎを増幅し、副交感神経のトーン低下（迷走神経機能の減弱）として現れています。"
        } else {
            "午後の「頭がぼーっとする」症状は、脳のエネルギー供給（グルコース・ケトン体）の不足と、ミトコンドリア機能の低下が重なっている状態です。"
        };
        format!(
            "慢性的な疲労感とやる気の低下は、単なる「体の疲れ」ではなく、中枢（脳・自律神経）のエネルギー代謝の低下を示唆しています。\
             HPA軸（視床下部-下垂体-副腎）の負荷が続き、コルチゾール分泌のリズムが乱れている可能性があります。{tail}"
        )
    } else {
        "あなたの状態を中枢神経の視点から見ると、情報過多・環境ストレスによる脳幹のオーバーロードが起点となり、\
         自律神経の調整機能が低下している状態と考えられます。"
            .to_string()
    }
}

fn supplements(s: &Signals) -> Vec<ReportSupplement> {
    let mut items = Vec::new();

    if s.shoulder_pain || s.sleep_issue {
        let caffeine =
            if s.coffee { "コーヒーによるカフェイン摂取もマグネシウム排泄を促進するため、" } else { "" };
        items.push(supplement(
            "マグネシウム",
            92.0,
            format!(
                "あなたの場合、筋緊張が続くことでマグネシウムの消費が増大しています。\
                 マグネシウムはNMDA受容体の調整を通じて中枢過敏化を抑え、同時に筋肉の弛緩と迷走神経のトーン回復を促します。\
                 {caffeine}特に重要な栄養素です。"
            ),
        ));
    }

    if s.sleep_issue || s.low_energy() {
        let cause = if s.sleep_issue {
            "睡眠の質の低下と朝の倦怠感"
        } else {
            "慢性的な疲労感と午後の集中力低下"
        };
        let cycle = if s.menstrual_cycle {
            "生理周期に伴うエネルギー変動の振れ幅を小さくする効果も期待できます。"
        } else {
            ""
        };
        items.push(supplement(
            "5-ALA（5-アミノレブリン酸）",
            90.0,
            format!(
                "{cause}から、ミトコンドリアのATP産生効率が落ちていると推測されます。\
                 5-ALAはミトコンドリア機能を直接サポートし、脳のエネルギー代謝を底上げします。\
                 特に「脳の電池切れ」状態には効果的です。{cycle}"
            ),
        ));
    }

    if s.menstrual_cycle {
        items.push(supplement(
            "マグネシウム",
            88.0,
            "生理前の不調（PMS）は、エストロゲン・プロゲステロンの変動が自律神経とHPA軸に直接影響している状態です。\
             マグネシウムはGABA受容体を介して情緒安定に寄与し、Ca/Mgバランスを整えることで生理前の自律神経の揺らぎを緩和します。"
                .to_string(),
        ));
    }

    if s.desk_work && (s.fatigue || s.shoulder_pain) {
        items.push(supplement(
            "サイトカイン",
            85.0,
            "デスクワークによる姿勢負担は、単なる筋肉疲労ではなく、ファシア（筋膜）レベルでの癒着・硬化を引き起こします。\
             サイトカインは細胞レベルでの修復を促し、ファシアの粘弾性回復をサポートします。"
                .to_string(),
        ));
    }

    if s.fatigue && !s.shoulder_pain {
        items.push(supplement(
            "CoQ10",
            86.0,
            "副交感神経の低下（迷走神経トーンの減弱）により、細胞レベルでのエネルギー産生が滞っている可能性があります。\
             CoQ10はミトコンドリアの電子伝達系を直接サポートし、持続的なエネルギー供給を可能にします。"
                .to_string(),
        ));
    }

    items
}

fn self_care(s: &Signals) -> Vec<ReportSelfCare> {
    let mut items = Vec::new();

    if s.shoulder_pain {
        let cadence = if s.desk_work { "1時間おきに実施すると" } else { "" };
        items.push(care(
            "頸部-硬膜リリース呼吸法",
            format!(
                "仰向けで首の後ろに小さめのクッションを置き、ゆっくり深呼吸（1分間に4-6回）を5分間。\
                 横隔膜の動きが迷走神経を刺激し、硬膜テンションを緩めます。\
                 {cadence}脳幹への血流が改善し、肩こりの根本にアプローチできます。"
            ),
        ));
    }

    if s.sleep_issue {
        items.push(care(
            "夕方の「安全系」スイッチング",
            "18時以降、5分間の「4-7-8呼吸」（4秒吸って7秒止めて8秒吐く）を実施。\
             これは腹側迷走神経を優位にし、交感神経優位の「防衛モード」から「安全モード」へ切り替えるスイッチです。\
             就寝2時間前に行うと効果的。"
                .to_string(),
        ));
    }

    if s.fatigue || s.low_motivation {
        let cycle = if s.menstrual_cycle { "生理周期に関わらず、" } else { "" };
        items.push(care(
            "朝の「覚醒スイッチ」リセット",
            format!(
                "起床後5分以内に、太陽光（または明るい光）を浴びながら深呼吸10回。\
                 視交叉上核（体内時計の中枢）を刺激し、コルチゾールの分泌リズムを正常化します。\
                 {cycle}HPA軸の負担軽減に直結します。"
            ),
        ));
    }

    if s.desk_work {
        items.push(care(
            "眼球運動による脳幹調整",
            "座ったまま、頭を動かさず目だけでゆっくり上下左右を見る（各方向5秒ずつ）。\
             眼球運動は脳幹・小脳への直接入力となり、中枢の覚醒度を調整します。デスクワーク中に2時間おき実施。"
                .to_string(),
        ));
    } else {
        let target = if s.menstrual_cycle { "自律神経の安定化" } else { "迷走神経トーンの回復" };
        items.push(care(
            "足裏刺激による迷走神経活性化",
            format!(
                "外回りで歩くことが多い方向け。歩行中、意識的に足裏全体で地面を感じながら歩く（特に踵から着地）。\
                 足裏の機械受容器からの求心性入力が脳幹を刺激し、{target}につながります。"
            ),
        ));
    }

    items
}

fn supplement(name: &str, score: f64, reason: String) -> ReportSupplement {
    ReportSupplement { name: name.to_string(), score, reason }
}

fn care(title: &str, description: String) -> ReportSelfCare {
    ReportSelfCare { title: title.to_string(), description }
}
