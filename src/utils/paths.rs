use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".nichiwari";
const HOME_ENV: &str = "NICHIWARI_HOME";
const STORE_DIR: &str = "store";
const CONFIG_FILE: &str = "config.json";
const TELEMETRY_FILE: &str = "telemetry.jsonl";

/// Returns the application data directory, defaulting to `~/.nichiwari`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory backing the key-value store.
pub fn store_dir_in(base: &Path) -> PathBuf {
    base.join(STORE_DIR)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Default location for the JSON-lines telemetry sink.
pub fn telemetry_file_in(base: &Path) -> PathBuf {
    base.join(TELEMETRY_FILE)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
