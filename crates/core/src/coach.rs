//! Daily coaching plans built from self-reported state logs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consultation::parse_json_reply;
use crate::errors::DomainError;

/// Number of most recent logs the coach looks at.
pub const COACH_LOG_WINDOW: usize = 7;

/// One day of self-reported state. Levels are on a 1..=10 scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachLog {
    pub log_date: NaiveDate,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub fatigue_level: Option<u8>,
    #[serde(default)]
    pub mood_level: Option<u8>,
    #[serde(default)]
    pub pain_level: Option<u8>,
    #[serde(default)]
    pub did_selfcare: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub feedback: String,
    #[serde(default)]
    pub menu: Vec<PlanItem>,
}

const NOT_RECORDED: &str = "未記録";

fn or_not_recorded<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NOT_RECORDED.to_string())
}

/// User turn sent alongside the coach system prompt. `logs` are expected most
/// recent first; only the first [`COACH_LOG_WINDOW`] are rendered.
pub fn coach_user_message(logs: &[CoachLog]) -> String {
    let blocks: Vec<String> = logs
        .iter()
        .take(COACH_LOG_WINDOW)
        .enumerate()
        .map(|(index, log)| {
            let did_selfcare = log
                .did_selfcare
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or("なし");
            format!(
                "【{}日前】\n- 睡眠時間: {}時間\n- 疲労度: {}/10\n- 気分: {}/10\n- コリ・痛み: {}/10\n- セルフケア実施: {}",
                index + 1,
                or_not_recorded(log.sleep_hours),
                or_not_recorded(log.fatigue_level),
                or_not_recorded(log.mood_level),
                or_not_recorded(log.pain_level),
                did_selfcare,
            )
        })
        .collect();

    format!(
        "以下は直近{COACH_LOG_WINDOW}日間の状態ログです：\n\n{}\n\n上記のログを分析し、今日のセルフケアメニューをJSON形式で提案してください。",
        blocks.join("\n\n")
    )
}

pub fn parse_plan(raw: &str) -> Result<DailyPlan, DomainError> {
    parse_json_reply(raw)
}

/// Fixed plan used without a remote model or when the model call fails.
pub fn mock_plan() -> DailyPlan {
    let item = |title: &str, description: &str, duration: &str| PlanItem {
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
    };

    DailyPlan {
        feedback: "睡眠時間は良好ですが、疲労度が高めです。今日は軽めのセルフケアを重点的に行いましょう。"
            .to_string(),
        menu: vec![
            item("朝の眼球運動", "目を上下左右にゆっくり動かし、8の字を描きます。", "3分"),
            item("昼休みのストレッチ", "首肩を中心にゆっくりとほぐします。", "5分"),
            item("夕方の呼吸法", "4-7-8呼吸で自律神経を整えます。", "5分"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(day: u32) -> CoachLog {
        CoachLog {
            log_date: NaiveDate::from_ymd_opt(2026, 10, day).expect("valid date"),
            sleep_hours: Some(6.5),
            fatigue_level: Some(7),
            mood_level: None,
            pain_level: Some(3),
            did_selfcare: Some("ストレッチ".to_string()),
        }
    }

    #[test]
    fn renders_numbered_blocks_with_placeholders() {
        let mut second = log(15);
        second.sleep_hours = None;
        second.did_selfcare = Some("  ".to_string());

        let message = coach_user_message(&[log(16), second]);
        assert!(message.starts_with("以下は直近7日間の状態ログです："));
        assert!(message.contains("【1日前】\n- 睡眠時間: 6.5時間\n- 疲労度: 7/10\n- 気分: 未記録/10"));
        assert!(message.contains("【2日前】\n- 睡眠時間: 未記録時間"));
        assert!(message.contains("- セルフケア実施: なし"));
    }

    #[test]
    fn zero_levels_render_as_numbers() {
        let mut quiet = log(16);
        quiet.fatigue_level = Some(0);
        quiet.pain_level = Some(0);
        quiet.sleep_hours = Some(0.0);

        let message = coach_user_message(&[quiet]);
        assert!(message.contains("- 睡眠時間: 0時間"));
        assert!(message.contains("- 疲労度: 0/10"));
        assert!(message.contains("- コリ・痛み: 0/10"));
    }

    #[test]
    fn only_the_most_recent_week_is_rendered() {
        let logs: Vec<CoachLog> = (1..=10).map(log).collect();
        let message = coach_user_message(&logs);
        assert!(message.contains("【7日前】"));
        assert!(!message.contains("【8日前】"));
    }

    #[test]
    fn parses_log_json_with_missing_levels() {
        let parsed: CoachLog =
            serde_json::from_str(r#"{"logDate":"2026-10-17","fatigueLevel":4}"#).expect("parses");
        assert_eq!(parsed.fatigue_level, Some(4));
        assert_eq!(parsed.sleep_hours, None);
    }

    #[test]
    fn mock_plan_has_three_short_items() {
        let plan = mock_plan();
        assert_eq!(plan.menu.len(), 3);
        assert_eq!(plan.menu[0].title, "朝の眼球運動");
        assert_eq!(plan.menu[0].duration, "3分");
    }

    #[test]
    fn parses_fenced_plan_reply() {
        let raw = "```json\n{\"feedback\":\"good\",\"menu\":[{\"title\":\"t\",\"description\":\"d\",\"duration\":\"5分\"}]}\n```";
        let plan = parse_plan(raw).expect("plan parses");
        assert_eq!(plan.feedback, "good");
        assert_eq!(plan.menu[0].duration, "5分");
    }
}
