use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir = std::env::var("WEEKLOG_DATA_DIR").unwrap_or_else(|_| "./data".into());
        if data_dir.trim().is_empty() {
            anyhow::bail!("WEEKLOG_DATA_DIR must not be empty");
        }

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
        })
    }
}
