use crate::theme::Theme;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "EMOBALANCE_DATA_DIR";
pub const USER_ENV: &str = "EMOBALANCE_USER";
pub const SYSTEM_THEME_ENV: &str = "EMOBALANCE_SYSTEM_THEME";

const CONFIG_FILE: &str = "config.json";
const DEFAULT_USER_ID: &str = "local";

/// Optional `config.json` in the data directory.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    user_id: Option<String>,
    system_theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub user_id: String,
    pub system_theme: Theme,
}

fn default_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\emobalance")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/emobalance")
    }
}

/// Reads `COLORFGBG` ("fg;bg"); a light background index means a light
/// terminal.
pub fn detect_system_theme(colorfgbg: Option<&str>) -> Theme {
    colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| if bg == 7 || bg == 15 { Theme::Light } else { Theme::Dark })
        .unwrap_or(Theme::Dark)
}

fn parse_file_config(content: &str) -> crate::Result<FileConfig> {
    Ok(serde_json::from_str(content)?)
}

fn read_file_config(data_dir: &Path) -> FileConfig {
    let path = data_dir.join(CONFIG_FILE);
    let Ok(content) = std::fs::read_to_string(&path) else {
        return FileConfig::default();
    };
    match parse_file_config(&content) {
        Ok(config) => config,
        Err(e) => {
            crate::logger::warn(&format!("Ignoring invalid {}: {}", path.display(), e));
            FileConfig::default()
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let env = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self::resolve(
            env(DATA_DIR_ENV).map(PathBuf::from),
            env(USER_ENV),
            env(SYSTEM_THEME_ENV),
            env("COLORFGBG"),
        )
    }

    /// Environment values win over `config.json`, which wins over defaults.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        user_env: Option<String>,
        theme_env: Option<String>,
        colorfgbg: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let file = read_file_config(&data_dir);

        let user_id = user_env
            .or(file.user_id)
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        let system_theme = theme_env
            .as_deref()
            .and_then(Theme::parse)
            .or_else(|| file.system_theme.as_deref().and_then(Theme::parse))
            .unwrap_or_else(|| detect_system_theme(colorfgbg.as_deref()));

        Self {
            data_dir,
            user_id,
            system_theme,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("emobalance.db")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("emobalance.log")
    }

    pub fn export_path(&self) -> PathBuf {
        self.data_dir.join("journal-export.csv")
    }

    pub fn import_path(&self) -> PathBuf {
        self.data_dir.join("journal-import.csv")
    }
}
