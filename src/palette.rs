//! Сохранение и загрузка палитры дескрипторов.
//!
//! Палитра хранится как плоский JSON-список записей [`BlockDescriptor`];
//! порядок записей в файле задаёт порядок блоков в палитре редактора.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::config::PaletteConfig;
use crate::descriptor::BlockDescriptor;
use crate::registry::BlockRegistry;

/// Сохраняет дескрипторы в JSON-файл.
pub fn save_to_file(
    path: &Path,
    descriptors: &[BlockDescriptor],
) -> Result<(), Box<dyn std::error::Error>> {
    let data = serde_json::to_string_pretty(descriptors)?;
    fs::write(path, data)?;
    Ok(())
}

/// Загружает дескрипторы из JSON-файла.
pub fn load_from_file(path: &Path) -> Result<Vec<BlockDescriptor>, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(path)?;
    let descriptors: Vec<BlockDescriptor> = serde_json::from_str(&data)?;
    Ok(descriptors)
}

/// Собирает реестр из файла палитры, заданного настройками окружения.
///
/// Если файл отсутствует или не читается, возвращает реестр со встроенными
/// блоками кисти; строгая политика дубликатов действует и при загрузке.
pub fn load_or_builtin() -> BlockRegistry {
    let cfg = PaletteConfig::from_env();
    let path = Path::new(&cfg.path);
    if path.exists() {
        match load_from_file(path).and_then(|blocks| {
            BlockRegistry::from_descriptors(blocks).map_err(|e| e.into())
        }) {
            Ok(registry) => return registry,
            Err(e) => warn!("не удалось загрузить палитру из `{}`: {e}", cfg.path),
        }
    }
    BlockRegistry::with_builtins()
}
