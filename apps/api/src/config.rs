use anyhow::{Context, Result};

use crate::ai::client::ProviderConfig;

const DEFAULT_LOCAL_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_LOCAL_MODEL: &str = "llama3.1";

/// Application configuration loaded from environment variables once at
/// startup. The AI provider is resolved here into a typed variant; business
/// logic never reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub ai_provider: ProviderConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let selector =
            std::env::var("AI_PROVIDER").unwrap_or_else(|_| "ollama".to_string());
        let ai_provider = resolve_provider(
            &selector,
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("OLLAMA_API_URL").ok(),
            std::env::var("OLLAMA_MODEL").ok(),
        )?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            ai_provider,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Maps the provider selector onto a typed variant. Anything other than
/// "openai" selects the local provider, mirroring its role as the default.
fn resolve_provider(
    selector: &str,
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
) -> Result<ProviderConfig> {
    match selector {
        "openai" => {
            let api_key = api_key
                .context("Required environment variable 'OPENAI_API_KEY' is not set")?;
            Ok(ProviderConfig::Hosted { api_key })
        }
        _ => Ok(ProviderConfig::Local {
            base_url: base_url.unwrap_or_else(|| DEFAULT_LOCAL_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_LOCAL_MODEL.to_string()),
        }),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosted_provider_requires_api_key() {
        let result = resolve_provider("openai", None, None, None);
        assert!(result.is_err());

        let provider = resolve_provider("openai", Some("sk-test".into()), None, None).unwrap();
        assert!(matches!(provider, ProviderConfig::Hosted { .. }));
    }

    #[test]
    fn test_local_provider_applies_defaults() {
        let provider = resolve_provider("ollama", None, None, None).unwrap();
        match provider {
            ProviderConfig::Local { base_url, model } => {
                assert_eq!(base_url, DEFAULT_LOCAL_BASE_URL);
                assert_eq!(model, DEFAULT_LOCAL_MODEL);
            }
            _ => panic!("expected local provider"),
        }
    }

    #[test]
    fn test_unknown_selector_falls_back_to_local() {
        let provider = resolve_provider("something-else", None, None, None).unwrap();
        assert!(matches!(provider, ProviderConfig::Local { .. }));
    }
}
