use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use unibase_agent::{client_from_config, CoachService, ConsultationService, LlmClient};
use unibase_core::config::AppConfig;
use unibase_core::diagnosis::DiagnosisEngine;
use unibase_core::errors::ApplicationError;

use crate::api::ApiState;
use crate::health::HealthState;

pub struct Application {
    pub config: AppConfig,
    pub engine: DiagnosisEngine,
    pub consultation: ConsultationService,
    pub coach: CoachService,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("llm client initialization failed: {0}")]
    LlmClient(#[from] ApplicationError),
}

/// Wires services from an already loaded and validated config.
pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );
    let client: Option<Arc<dyn LlmClient>> = client_from_config(&config.llm)
        .map_err(|error| ApplicationError::Configuration(format!("{error:#}")))?;

    info!(
        event_name = "system.bootstrap.llm_ready",
        correlation_id = "bootstrap",
        provider = config.llm.provider.as_str(),
        model = config.llm.effective_model(),
        "llm provider initialized"
    );

    Ok(Application {
        engine: DiagnosisEngine::new(),
        consultation: ConsultationService::new(client.clone()),
        coach: CoachService::new(client),
        config,
    })
}

impl Application {
    pub fn api_state(&self) -> ApiState {
        ApiState {
            engine: self.engine,
            consultation: self.consultation.clone(),
            coach: self.coach.clone(),
        }
    }

    pub fn health_state(&self) -> HealthState {
        HealthState::from_config(&self.config.llm)
    }
}

#[cfg(test)]
mod tests {
    use unibase_core::config::{AppConfig, ConfigOverrides, LlmProvider, LoadOptions};
    use unibase_core::errors::{ApplicationError, InterfaceError};

    use crate::bootstrap::{bootstrap_with_config, BootstrapError};

    #[test]
    fn bootstrap_fails_fast_without_llm_key() {
        let mut config = AppConfig::default();
        config.llm.provider = LlmProvider::Anthropic;

        let message = match bootstrap_with_config(config) {
            Ok(_) => panic!("bootstrap should fail without an api key"),
            Err(error) => error.to_string(),
        };
        assert!(message.contains("llm.api_key"));
    }

    #[test]
    fn missing_llm_key_surfaces_as_configuration_error() {
        let mut config = AppConfig::default();
        config.llm.provider = LlmProvider::OpenAi;

        let Err(BootstrapError::LlmClient(error)) = bootstrap_with_config(config) else {
            panic!("bootstrap should fail without an api key");
        };
        assert!(matches!(error, ApplicationError::Configuration(_)));
        assert!(matches!(error.into_interface("bootstrap"), InterfaceError::Internal { .. }));
    }

    #[test]
    fn bootstrap_with_remote_provider_wires_services() {
        let config = AppConfig::load(LoadOptions {
            overrides: ConfigOverrides {
                llm_provider: Some(LlmProvider::OpenAi),
                llm_api_key: Some("sk-test".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .expect("config loads with a key");

        let app = bootstrap_with_config(config).expect("bootstrap succeeds");
        assert_eq!(app.consultation.provider(), "openai");
        assert_eq!(app.health_state().provider_name(), "openai");
    }

    #[test]
    fn mock_provider_needs_no_credentials() {
        let app = bootstrap_with_config(AppConfig::default()).expect("bootstrap succeeds");
        assert_eq!(app.consultation.provider(), "mock");
    }
}
