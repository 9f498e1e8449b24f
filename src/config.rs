use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Render newline and space as visible two-column glyphs
    pub show_whitespace_glyphs: bool,
    /// Append each session report to results.csv
    pub log_results: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_whitespace_glyphs: true,
            log_results: true,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

/// JSON file under the project config dir; missing or unreadable files fall
/// back to defaults so a bad config can never block a session.
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("", "", "tapline").map(|dirs| Self {
            path: dirs.config_dir().join("config.json"),
        })
    }

    pub fn at_path(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, raw)
    }
}
