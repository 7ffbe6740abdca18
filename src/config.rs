use ::config::{Config, Environment};
use serde::Deserialize;

/// Настройки загрузки палитры блоков.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    /// Путь к JSON-файлу палитры.
    pub path: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            path: "blocks/brush.json".into(),
        }
    }
}

impl PaletteConfig {
    /// Читает настройки из переменных окружения с префиксом `BRUSH_`.
    pub fn from_env() -> Self {
        Config::builder()
            .add_source(Environment::with_prefix("BRUSH").separator("_"))
            .build()
            .ok()
            .and_then(|c| c.try_deserialize().ok())
            .unwrap_or_default()
    }
}
