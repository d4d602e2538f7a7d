use std::path::PathBuf;

pub const DATA_FILE_ENV: &str = "WEALTHMATE_DATA_FILE";
pub const DEFAULT_DATA_FILE: &str = "./data/wealthmate.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStoreConfig {
    pub path: PathBuf,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl FileStoreConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(DATA_FILE_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|value| Self {
                path: PathBuf::from(value),
            })
            .unwrap_or_default()
    }
}
