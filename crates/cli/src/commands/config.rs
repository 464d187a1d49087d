use std::env;
use std::fs;
use std::path::Path;

use secrecy::ExposeSecret;
use toml::Value;
use unibase_core::config::{resolve_config_path, AppConfig, LoadOptions};

use super::{CommandResult, EXIT_VALIDATION};

pub fn run(config_path: Option<&Path>) -> CommandResult {
    let config = match AppConfig::load(LoadOptions {
        config_path: config_path.map(Path::to_path_buf),
        ..LoadOptions::default()
    }) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("config validation failed: {error}"),
                EXIT_VALIDATION,
            )
        }
    };

    let file_path = resolve_config_path(config_path);
    let file_doc = file_path.as_deref().and_then(load_config_file_doc);
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, file_doc.as_ref(), file_path.as_deref())
    };

    let api_key = config
        .llm
        .api_key
        .as_ref()
        .map(|key| redact_key(key.expose_secret()))
        .unwrap_or_else(|| "<unset>".to_string());

    let rows = [
        (
            "server.bind_address",
            config.server.bind_address.clone(),
            source("server.bind_address", &["UNIBASE_SERVER_BIND_ADDRESS"]),
        ),
        ("server.port", config.server.port.to_string(), source("server.port", &["UNIBASE_SERVER_PORT"])),
        (
            "server.graceful_shutdown_secs",
            config.server.graceful_shutdown_secs.to_string(),
            source("server.graceful_shutdown_secs", &["UNIBASE_SERVER_GRACEFUL_SHUTDOWN_SECS"]),
        ),
        (
            "llm.provider",
            config.llm.provider.as_str().to_string(),
            source("llm.provider", &["UNIBASE_LLM_PROVIDER", "AI_PROVIDER"]),
        ),
        ("llm.model", config.llm.effective_model().to_string(), source("llm.model", &["UNIBASE_LLM_MODEL"])),
        (
            "llm.base_url",
            config.llm.base_url.clone().unwrap_or_else(|| "<unset>".to_string()),
            source("llm.base_url", &["UNIBASE_LLM_BASE_URL"]),
        ),
        ("llm.api_key", api_key, source("llm.api_key", &["UNIBASE_LLM_API_KEY"])),
        (
            "llm.timeout_secs",
            config.llm.timeout_secs.to_string(),
            source("llm.timeout_secs", &["UNIBASE_LLM_TIMEOUT_SECS"]),
        ),
        (
            "logging.level",
            config.logging.level.clone(),
            source("logging.level", &["UNIBASE_LOGGING_LEVEL", "UNIBASE_LOG_LEVEL"]),
        ),
        (
            "logging.format",
            format!("{:?}", config.logging.format).to_lowercase(),
            source("logging.format", &["UNIBASE_LOGGING_FORMAT", "UNIBASE_LOG_FORMAT"]),
        ),
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    lines.extend(rows.iter().map(|(key, value, source)| render_line(key, value, source)));

    CommandResult::output(lines.join("\n"))
}

fn load_config_file_doc(path: &Path) -> Option<Value> {
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: &str) -> String {
    format!("- {key} = {value} (source: {source})")
}

/// Keeps only the vendor prefix, e.g. `sk-ant-***`.
fn redact_key(key: &str) -> String {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }

    match trimmed.rsplit_once('-') {
        Some((prefix, _)) if prefix.len() <= 8 => format!("{prefix}-***"),
        _ => "<redacted>".to_string(),
    }
}
