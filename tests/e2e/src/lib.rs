//! # e2e-tests - End-to-end тесты CLI инструментов
//!
//! Этот крейт содержит e2e тесты для CLI инструмента `dbc-scan`.
//!
//! ## Фикстуры
//!
//! Тестовые файлы расположены в `fixtures/`:
//! - `network.dbc` — небольшой DBC-файл с CRLF-окончаниями строк
//! - `blank_only.dbc` — только пустые и пробельные строки
//! - `latin1.dbc` — DBC-файл в кодировке Latin-1 (`°C`, `Kühlung`)
//! - `network.txt` — DBC-содержимое с неверным расширением

use std::path::PathBuf;

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}
