//! Runtime settings read from the environment and an optional `.env` file.

use std::time::Duration;

use crate::error::ConfigError;

/// Variable holding the completion-service credential.
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
/// Variable naming a cassette file to record the run into.
pub const RECORD_VAR: &str = "READMEGEN_RECORD";

const MODEL_VAR: &str = "READMEGEN_MODEL";
const GITHUB_API_VAR: &str = "READMEGEN_GITHUB_API";
const COMPLETION_URL_VAR: &str = "READMEGEN_COMPLETION_URL";
const REFERER_VAR: &str = "READMEGEN_REFERER";
const TITLE_VAR: &str = "READMEGEN_TITLE";
const TIMEOUT_VAR: &str = "READMEGEN_TIMEOUT_SECS";

const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-0528-qwen3-8b:free";
const DEFAULT_GITHUB_API: &str = "https://api.github.com/repos";
const DEFAULT_COMPLETION_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_REFERER: &str = "https://readme-generator.ai";
const DEFAULT_TITLE: &str = "README Generator";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Endpoints, credential, and client identity used by the live adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the repository metadata service (`{base}/{owner}/{repo}`).
    pub github_api_base: String,
    /// Full URL of the chat-completion endpoint.
    pub completion_url: String,
    /// Bearer credential for the completion endpoint.
    pub api_key: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Value of the `HTTP-Referer` client-identifying header.
    pub referer: String,
    /// Value of the `X-Title` client-identifying header.
    pub title: String,
    /// Per-request timeout applied to both endpoints.
    pub timeout: Duration,
}

impl Settings {
    /// Reads settings from the process environment, loading `.env` first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when no credential is set, or
    /// [`ConfigError::InvalidValue`] when the timeout is not a whole number.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let or_default = |name: &str, default: &str| get(name).unwrap_or_else(|| default.into());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: TIMEOUT_VAR,
                    value: raw.clone(),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            github_api_base: or_default(GITHUB_API_VAR, DEFAULT_GITHUB_API),
            completion_url: or_default(COMPLETION_URL_VAR, DEFAULT_COMPLETION_URL),
            api_key,
            model: or_default(MODEL_VAR, DEFAULT_MODEL),
            referer: or_default(REFERER_VAR, DEFAULT_REFERER),
            title: or_default(TITLE_VAR, DEFAULT_TITLE),
            timeout: Duration::from_secs(timeout),
        })
    }

    /// Model identifier to use when no settings are loaded (cassette replay).
    #[must_use]
    pub fn default_model() -> &'static str {
        DEFAULT_MODEL
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_fill_everything_but_the_key() {
        let settings = Settings::from_lookup(lookup(&[(API_KEY_VAR, "sk-test")])).unwrap();
        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.github_api_base, DEFAULT_GITHUB_API);
        assert_eq!(settings.completion_url, DEFAULT_COMPLETION_URL);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.title, "README Generator");
        assert_eq!(settings.timeout, Duration::from_secs(60));
    }

    #[test]
    fn missing_key_is_a_startup_error() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey(API_KEY_VAR));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = Settings::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey(API_KEY_VAR));
    }

    #[test]
    fn overrides_are_honored() {
        let settings = Settings::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (MODEL_VAR, "openai/gpt-4o"),
            (GITHUB_API_VAR, "http://127.0.0.1:9000/repos"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(settings.model, "openai/gpt-4o");
        assert_eq!(settings.github_api_base, "http://127.0.0.1:9000/repos");
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let vars = lookup(&[(API_KEY_VAR, "k"), (TIMEOUT_VAR, "soon")]);
        let err = Settings::from_lookup(vars).unwrap_err();
        let ConfigError::InvalidValue { name, .. } = &err else {
            panic!("expected an invalid value error, got {err:?}");
        };
        assert_eq!(*name, TIMEOUT_VAR);
    }
}
