use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Upstream placeholder value, treated the same as an unset key.
const PLACEHOLDER_KEY: &str = "YOUR_RAPIDAPI_KEY_HERE";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shared key for both RapidAPI services. Unset or placeholder means
    /// those providers report themselves unavailable without a request.
    pub rapidapi_key: Option<String>,
    pub cache_ttl_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rapidapi_key: None,
            cache_ttl_seconds: 3600,
        }
    }
}

impl Config {
    /// Optional `config.toml` in the working directory, then environment
    /// overrides. The `RAPIDAPI_KEY` variable wins over the file.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from(Path::new(CONFIG_FILE))?;
        if let Ok(key) = std::env::var("RAPIDAPI_KEY") {
            if !key.is_empty() {
                config.rapidapi_key = Some(key);
            }
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// The usable key, filtering out empty and placeholder values.
    pub fn api_key(&self) -> Option<&str> {
        self.rapidapi_key
            .as_deref()
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_KEY)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_placeholder_key_counts_as_unset() {
        let mut config = Config::default();
        assert!(!config.has_api_key());

        config.rapidapi_key = Some(PLACEHOLDER_KEY.to_string());
        assert!(!config.has_api_key());

        config.rapidapi_key = Some(String::new());
        assert!(!config.has_api_key());

        config.rapidapi_key = Some("abc123".to_string());
        assert_eq!(config.api_key(), Some("abc123"));
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");

        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "rapidapi_key = \"secret\"")?;
        writeln!(file, "cache_ttl_seconds = 60")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));

        Ok(())
    }

    #[test]
    fn test_missing_file_yields_defaults() -> anyhow::Result<()> {
        let config = Config::load_from(Path::new("/nonexistent/config.toml"))?;
        assert!(config.rapidapi_key.is_none());
        assert_eq!(config.cache_ttl_seconds, 3600);
        Ok(())
    }
}
