use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = "config";
pub const CONFIG_FILE: &str = "config/config.json";

/// Identification the SEC requires on every request: who is asking and why.
/// Persisted once via the `config` subcommand and read on every `get` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub email: String,
    pub usage: String,
}

impl ClientConfig {
    pub fn user_agent(&self) -> String {
        format!("{} {}", self.usage, self.email)
    }

    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(CONFIG_DIR)?;
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("could not write {:?}", path))?;
        Ok(())
    }

    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| {
            format!(
                "could not read {:?}; run the `config` subcommand first",
                path
            )
        })?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("could not parse {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ClientConfig {
            email: "hello@example.com".to_string(),
            usage: "personal use".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = ClientConfig::load_from(&path).unwrap();
        assert_eq!(loaded.email, "hello@example.com");
        assert_eq!(loaded.user_agent(), "personal use hello@example.com");
    }

    #[test]
    fn load_from_missing_file_mentions_the_config_subcommand() {
        let err = ClientConfig::load_from(Path::new("definitely/missing.json")).unwrap_err();
        assert!(err.to_string().contains("config"));
    }
}
