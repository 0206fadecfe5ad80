// Runtime configuration
//
// Everything is an environment variable with a logged default, so a plain
// `soloquest` invocation talks to the production services.

use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "https://soloquest.onrender.com";
const DEFAULT_ADVISORY_URL: &str = "https://api.tugo.com";
const DEFAULT_ADVISORY_KEY: &str = "v22uy5a2jc576a8svsyufatn";
const DEFAULT_DB_PATH: &str = "soloquest.db";
const DEFAULT_FALLBACK_PATH: &str = "assets/safety_advisories.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// SoloQuest backend base URL.
    pub api_url: String,
    /// Advisory service base URL.
    pub advisory_url: String,
    /// Fixed advisory service credential; configuration, not user data.
    pub advisory_key: String,
    /// Local storage database.
    pub db_path: PathBuf,
    /// Bundled fallback advisory document.
    pub fallback_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: var_or("SOLOQUEST_API_URL", DEFAULT_API_URL),
            advisory_url: var_or("SOLOQUEST_ADVISORY_URL", DEFAULT_ADVISORY_URL),
            advisory_key: var_or("SOLOQUEST_ADVISORY_KEY", DEFAULT_ADVISORY_KEY),
            db_path: PathBuf::from(var_or("SOLOQUEST_DB", DEFAULT_DB_PATH)),
            fallback_path: PathBuf::from(var_or("SOLOQUEST_FALLBACK", DEFAULT_FALLBACK_PATH)),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            log::debug!("{} not set, using default {}", key, default);
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let config = Config::from_env();
        assert!(config.advisory_url.starts_with("https://"));
        assert!(!config.advisory_key.is_empty());
        assert!(config.fallback_path.to_string_lossy().ends_with(".json"));
    }
}
