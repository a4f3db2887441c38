//! API credential resolution.
//!
//! Resolution order: the `OPENAI_API_KEY` environment variable, then the
//! `aiApiKey` entry of the gateway's settings file under the platform config
//! directory. A missing credential is a per-call configuration error, never
//! a process-startup failure.

use std::path::{Path, PathBuf};
use voxgate_core::{GatewayError, Result};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const SETTINGS_KEY: &str = "aiApiKey";

/// Platform-specific settings file location (`voxgate/settings.json` under
/// the user config directory). None when the platform has no config dir.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("voxgate").join("settings.json"))
}

/// Resolve the API key from the environment, then the settings file.
pub fn resolve_api_key() -> Result<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    if let Some(path) = settings_path() {
        if let Some(key) = read_settings_key(&path) {
            return Ok(key);
        }
    }

    Err(GatewayError::Config(format!(
        "API key not configured; set {API_KEY_ENV} or add {SETTINGS_KEY} to the settings file"
    )))
}

/// Read `aiApiKey` from a settings file. An absent, unreadable, or corrupt
/// file is treated the same as a missing key.
pub fn read_settings_key(path: &Path) -> Option<String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return None,
    };
    let settings: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings file is not valid JSON");
            return None;
        }
    };
    settings
        .get(SETTINGS_KEY)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("settings.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_settings_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(&dir, r#"{"aiApiKey": "sk-from-file", "theme": "dark"}"#);
        assert_eq!(read_settings_key(&path), Some("sk-from-file".to_string()));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_settings_key(&dir.path().join("nope.json")), None);
    }

    #[test]
    fn test_corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(&dir, "not json at all");
        assert_eq!(read_settings_key(&path), None);
    }

    #[test]
    fn test_empty_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(&dir, r#"{"aiApiKey": ""}"#);
        assert_eq!(read_settings_key(&path), None);
    }
}
