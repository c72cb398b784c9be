//! Global memoir configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{JournalError, JournalResult};

static DEFAULT_JOURNAL_DIR: &str = "~/memories";

fn default_journal_dir() -> PathBuf {
    PathBuf::from(DEFAULT_JOURNAL_DIR)
}

fn is_default_journal_dir(p: &PathBuf) -> bool {
    *p == default_journal_dir()
}

/// Global configuration at ~/.config/memoir/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct JournalConfig {
    #[serde(default = "default_journal_dir", skip_serializing_if = "is_default_journal_dir")]
    pub journal_dir: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        JournalConfig {
            journal_dir: default_journal_dir(),
        }
    }
}

impl JournalConfig {
    pub fn config_path() -> JournalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| JournalError::Config("Could not determine config directory".into()))?
            .join("memoir");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> JournalResult<()> {
        let contents = format!(
            "\
# memoir configuration

# Where your journal lives:
# journal_dir = \"{}\"
",
            DEFAULT_JOURNAL_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                JournalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| JournalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
