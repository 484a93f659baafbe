use crate::error::{NotebookError, Result};
use crate::model::{Priority, Status};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".notebook.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotebookConfig {
    #[serde(default)]
    pub notebook: NotebookSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookSettings {
    /// Notes file, relative to the directory holding the config file.
    #[serde(default = "default_file")]
    pub file: String,

    #[serde(default)]
    pub default_priority: Priority,

    #[serde(default)]
    pub default_status: Status,
}

fn default_file() -> String {
    "notes.json".to_string()
}

impl Default for NotebookSettings {
    fn default() -> Self {
        Self {
            file: default_file(),
            default_priority: Priority::default(),
            default_status: Status::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuiSettings {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_show_tags")]
    pub show_tags: bool,
}

fn default_title() -> String {
    "Notebook".to_string()
}

fn default_show_tags() -> bool {
    true
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_tags: default_show_tags(),
        }
    }
}

impl NotebookConfig {
    /// Loads an explicit config file. Returns the config and the directory
    /// relative paths resolve against.
    pub fn load(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            NotebookError::Config(format!("Cannot read {}: {}", config_path.display(), e))
        })?;
        let config: NotebookConfig = toml::from_str(&content)?;
        let root = config_path
            .parent()
            .ok_or_else(|| {
                NotebookError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        Ok((config, root))
    }

    /// Searches upward from `start_path` for a config file, falling back to
    /// defaults rooted at `start_path` when there is none.
    pub fn discover(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using config file");
                Self::load(&path)
            }
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn notes_path(&self, root: &Path) -> PathBuf {
        let file = Path::new(&self.notebook.file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            root.join(file)
        }
    }
}
