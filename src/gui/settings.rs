use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::ShareMathError,
    logging::LoggingConfig,
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub zoom: f32,
    pub logging: LoggingConfig,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true, zoom: 1.0, logging: LoggingConfig::default() }
    }
}

impl SettingsData {
    pub fn load() -> Self {
        load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) -> Result<(), ShareMathError> {
        save_json(self, SETTINGS_FILE)
    }
}
