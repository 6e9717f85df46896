use anyhow::Result;
use serde::Deserialize;

/// Service configuration, layered file + environment.
///
/// Every field has a default so the service runs with no config file at all;
/// that is the expected demo-mode deployment. `SPEECH_COACH__*` environment
/// variables (double-underscore path separator) override the file, and the
/// conventional `OPENAI_API_KEY` variable supplies the delegate credential.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub analysis: AnalysisConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Substituted when the request's duration field is missing or unusable.
    pub default_duration_secs: u32,

    /// Cap on records returned by the history endpoint.
    pub history_limit: usize,

    /// Flat gamification reward attached to each analysis response.
    pub xp_per_analysis: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// Delegate credential. Absent means local-only scoring, not an error.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,

    /// Bound on the single delegate attempt.
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "speech-coach".to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: 30,
            history_limit: 20,
            xp_per_analysis: 25,
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 8,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SPEECH_COACH").separator("__"))
            .build()?;

        let mut cfg: Config = settings.try_deserialize()?;

        // An explicitly configured key wins over the ambient variable.
        if cfg.openai.api_key.is_none() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                if !key.trim().is_empty() {
                    cfg.openai.api_key = Some(key);
                }
            }
        }

        Ok(cfg)
    }
}
