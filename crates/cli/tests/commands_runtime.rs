use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde_json::{json, Value};
use tempfile::TempDir;
use unibase_cli::commands::{config, diagnose};

fn answers() -> Value {
    json!({
        "ageGroup": "30代",
        "gender": "男性",
        "mainConcerns": ["パフォーマンス"],
        "chronicPain": {"neckShoulder": 0, "headache": 0, "lowerBack": 0, "upperBack": 0},
        "brainFatigue": {"sleepOnset": 0, "nightWaking": 0, "morningFatigue": 3, "concentration": 4},
        "beauty": {"swelling": 0, "skinDullness": 0, "faceLine": 0},
        "lifestyle": {"mealFrequency": 0, "exerciseAmount": 2, "caffeine": 0, "alcohol": 0, "screenTime": 0},
        "mental": {"stressLevel": 0, "moodSwings": 0, "anxietyIrritability": 0}
    })
}

fn write_answers(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("answers.json");
    fs::write(&path, body).expect("answers file should be writable");
    path
}

#[test]
fn diagnose_prints_result_for_valid_answers() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_answers(&dir, &answers().to_string());

    let result = diagnose::run(&path, false);
    assert_eq!(result.exit_code, 0, "expected successful diagnosis");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["supplements"][0]["name"], "5-ALA");
    assert_eq!(payload["supplements"][0]["score"], json!(26.0));
    assert!(payload["summary"].as_str().is_some_and(|s| s.contains("パフォーマンス")));
}

#[test]
fn diagnose_pretty_output_is_multiline_json() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_answers(&dir, &answers().to_string());

    let result = diagnose::run(&path, true);
    assert_eq!(result.exit_code, 0);
    assert!(result.output.lines().count() > 1);
    parse_payload(&result.output);
}

#[test]
fn diagnose_returns_validation_failure_for_out_of_range_level() {
    let dir = TempDir::new().expect("tempdir");
    let mut body = answers();
    body["beauty"]["faceLine"] = json!(5);
    let path = write_answers(&dir, &body.to_string());

    let result = diagnose::run(&path, false);
    assert_eq!(result.exit_code, 2, "expected validation failure code");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "diagnose");
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "validation");
    assert!(payload["message"].as_str().is_some_and(|m| m.contains("beauty.faceLine")));
}

#[test]
fn diagnose_returns_parse_failure_for_malformed_json() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_answers(&dir, "{\"ageGroup\": ");

    let result = diagnose::run(&path, false);
    assert_eq!(result.exit_code, 1);
    assert_eq!(parse_payload(&result.output)["error_class"], "parse");
}

#[test]
fn diagnose_returns_io_failure_for_missing_file() {
    let dir = TempDir::new().expect("tempdir");

    let result = diagnose::run(&dir.path().join("absent.json"), false);
    assert_eq!(result.exit_code, 1);
    assert_eq!(parse_payload(&result.output)["error_class"], "io");
}

#[test]
fn config_reports_env_sources_and_redacts_key() {
    with_env(
        &[
            ("UNIBASE_LLM_PROVIDER", "anthropic"),
            ("UNIBASE_LLM_API_KEY", "sk-ant-supersecret"),
            ("UNIBASE_SERVER_PORT", "9001"),
        ],
        || {
            let result = config::run(None);
            assert_eq!(result.exit_code, 0);

            let output = &result.output;
            assert!(output.contains("- llm.provider = anthropic (source: env (UNIBASE_LLM_PROVIDER))"));
            assert!(output.contains("- llm.api_key = sk-ant-*** (source: env (UNIBASE_LLM_API_KEY))"));
            assert!(output.contains("- server.port = 9001 (source: env (UNIBASE_SERVER_PORT))"));
            assert!(output.contains("- llm.model = claude-3-5-sonnet-latest (source: default)"));
            assert!(!output.contains("supersecret"));
        },
    );
}

#[test]
fn config_reports_file_sources() {
    with_env(&[], || {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("unibase.toml");
        fs::write(&path, "[logging]\nlevel = \"debug\"\nformat = \"json\"\n").expect("write config");

        let result = config::run(Some(&path));
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("- logging.level = debug (source: file ("));
        assert!(result.output.contains("- logging.format = json"));
        assert!(result.output.contains("- llm.provider = mock (source: default)"));
    });
}

#[test]
fn config_returns_failure_when_remote_provider_lacks_key() {
    with_env(&[("UNIBASE_LLM_PROVIDER", "openai")], || {
        let result = config::run(None);
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "config");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "AI_PROVIDER",
        "UNIBASE_LLM_PROVIDER",
        "UNIBASE_LLM_API_KEY",
        "UNIBASE_LLM_BASE_URL",
        "UNIBASE_LLM_MODEL",
        "UNIBASE_LLM_TIMEOUT_SECS",
        "UNIBASE_SERVER_BIND_ADDRESS",
        "UNIBASE_SERVER_PORT",
        "UNIBASE_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "UNIBASE_LOGGING_LEVEL",
        "UNIBASE_LOGGING_FORMAT",
        "UNIBASE_LOG_LEVEL",
        "UNIBASE_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
