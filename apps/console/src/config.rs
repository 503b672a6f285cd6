use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use session_core::{
    DEFAULT_MOCK_DELAY, DEFAULT_MOCK_DISPLAY_NAME, DEFAULT_MOCK_EMAIL, DEFAULT_MOCK_PASSWORD,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub demo_email: String,
    pub demo_password: String,
    pub display_name: String,
    pub mock_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            demo_email: DEFAULT_MOCK_EMAIL.into(),
            demo_password: DEFAULT_MOCK_PASSWORD.into(),
            display_name: DEFAULT_MOCK_DISPLAY_NAME.into(),
            mock_delay_ms: DEFAULT_MOCK_DELAY.as_millis() as u64,
        }
    }
}

/// Precedence: defaults, then the optional TOML file, then environment
/// variables (bare name or `APP__`-prefixed).
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let path = config_path.unwrap_or_else(|| Path::new("console.toml"));
    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_file_overrides(&mut settings, &file_cfg);
        }
    }

    if let Ok(v) = std::env::var("DEMO_EMAIL") {
        settings.demo_email = v;
    }
    if let Ok(v) = std::env::var("APP__DEMO_EMAIL") {
        settings.demo_email = v;
    }

    if let Ok(v) = std::env::var("DEMO_PASSWORD") {
        settings.demo_password = v;
    }
    if let Ok(v) = std::env::var("APP__DEMO_PASSWORD") {
        settings.demo_password = v;
    }

    if let Ok(v) = std::env::var("DISPLAY_NAME") {
        settings.display_name = v;
    }
    if let Ok(v) = std::env::var("APP__DISPLAY_NAME") {
        settings.display_name = v;
    }

    if let Ok(v) = std::env::var("APP__MOCK_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.mock_delay_ms = parsed;
        }
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("demo_email") {
        settings.demo_email = v.clone();
    }
    if let Some(v) = file_cfg.get("demo_password") {
        settings.demo_password = v.clone();
    }
    if let Some(v) = file_cfg.get("display_name") {
        settings.display_name = v.clone();
    }
    if let Some(v) = file_cfg.get("mock_delay_ms") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.mock_delay_ms = parsed;
        }
    }
}
