use std::path::PathBuf;

use log::debug;

use crate::error::{CopilotError, Result};

pub const API_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];
pub const DATA_PATH_VAR: &str = "AADI_DATA_PATH";
pub const MODEL_VAR: &str = "AADI_MODEL";

pub const DEFAULT_DATA_PATH: &str = "financial_data.json";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Clone, PartialEq, Eq)]
pub struct CopilotConfig {
    pub api_key: String,
    pub model: String,
    pub data_path: PathBuf,
}

// Keeps the key out of logs.
impl std::fmt::Debug for CopilotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopilotConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("data_path", &self.data_path)
            .finish()
    }
}

impl CopilotConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = validate_api_key(api_key.into())?;
        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Reads the process environment. Callers that want `.env` support load
    /// it themselves before calling this.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source; the first non-empty
    /// `API_KEY_VARS` entry wins.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                CopilotError::Configuration(format!(
                    "No API key found. Set {} in the environment or a .env file.",
                    API_KEY_VARS.join(" or ")
                ))
            })?;

        let mut config = Self::new(api_key)?;
        debug!("API key resolved from environment");
        if let Some(model) = lookup(MODEL_VAR).filter(|m| !m.trim().is_empty()) {
            config.model = model;
        }
        if let Some(path) = lookup(DATA_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }
        Ok(config)
    }
}

fn validate_api_key(raw: String) -> Result<String> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(CopilotError::Configuration(
            "The API key is empty.".to_string(),
        ));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(CopilotError::Configuration(
            "The API key must not contain whitespace.".to_string(),
        ));
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_from_key_only() {
        let env = vars(&[("GOOGLE_API_KEY", "abc123")]);
        let config = CopilotConfig::from_lookup(|name| env.get(name).cloned()).unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn test_fallback_key_and_overrides() {
        let env = vars(&[
            ("GOOGLE_API_KEY", "  "),
            ("GEMINI_API_KEY", "xyz"),
            ("AADI_MODEL", "gemini-2.0-flash"),
            ("AADI_DATA_PATH", "/data/users.json"),
        ]);
        let config = CopilotConfig::from_lookup(|name| env.get(name).cloned()).unwrap();

        assert_eq!(config.api_key, "xyz");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.data_path, PathBuf::from("/data/users.json"));
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let result = CopilotConfig::from_lookup(|_| None);
        assert!(matches!(result, Err(CopilotError::Configuration(_))));
    }

    #[test]
    fn test_invalid_keys() {
        assert!(CopilotConfig::new("").is_err());
        assert!(CopilotConfig::new("has space").is_err());
        assert_eq!(CopilotConfig::new(" trimmed ").unwrap().api_key, "trimmed");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = CopilotConfig::new("super-secret").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
