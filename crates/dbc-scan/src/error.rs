//! Ошибки сканирования и таксономия ошибок формата DBC.
//!
//! Сами примитивы сканирования никогда не возвращают ошибок: исчерпание
//! потока и сбой чтения видны только через [`StreamState`](crate::stream::StreamState).
//! Этот модуль нужен вызывающей стороне, чтобы узнать причину сбоя
//! и превратить «пустая строка + невалидный поток» в понятную ошибку формата.

use std::{io, path::Path};

use thiserror::Error;

use crate::{line_reader, stream::LineSource};

/// Причина, по которой поток строк перешёл в состояние `Failed`.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Ошибка ввода/вывода нижележащего reader'а.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Ошибки валидности DBC-файла.
///
/// Используются слоем разбора грамматики поверх примитивов сканирования.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Файл невалиден без уточнения причины.
    #[error("Invalid DBC file")]
    Invalid,

    /// Расширение файла не `.dbc`.
    #[error(
        "File is not of DBC format. Expected a .dbc extension. Cannot read this type of file ({path}). Found the extension ({extension})."
    )]
    WrongExtension {
        /// Путь к файлу.
        path: String,
        /// Фактическое расширение (пустое, если его нет).
        extension: String,
    },

    /// Файл не удалось прочитать как текст DBC.
    #[error("File is not of DBC format. Cannot read this type of file ({0}).")]
    Unreadable(String),

    /// Поток закончился раньше, чем нашлась обязательная строка.
    #[error("Invalid dbc file. Missing the required {expected}. Attempting to read line: ({line}).")]
    MissingLine {
        /// Что ожидалось (например, "version header").
        expected: &'static str,
        /// Строка, прочитанная при попытке.
        line: String,
    },
}

impl From<StreamError> for FormatError {
    fn from(err: StreamError) -> Self {
        Self::Unreadable(err.to_string())
    }
}

/// Проверяет, что путь указывает на файл с расширением `.dbc`.
///
/// Регистр расширения не важен. Файл без расширения считается
/// файлом с пустым расширением.
///
/// # Пример
///
/// ```
/// use dbc_scan::error::{FormatError, check_extension};
///
/// assert!(check_extension("network.dbc").is_ok());
/// assert!(check_extension("NETWORK.DBC").is_ok());
/// assert!(matches!(check_extension("network.txt"), Err(FormatError::WrongExtension { .. })));
/// ```
pub fn check_extension(path: impl AsRef<Path>) -> Result<(), FormatError> {
    let path = path.as_ref();
    let extension = path.extension().map(|ext| ext.to_string_lossy()).unwrap_or_default();

    if extension.eq_ignore_ascii_case("dbc") {
        return Ok(());
    }

    Err(FormatError::WrongExtension {
        path: path.display().to_string(),
        extension: extension.into_owned(),
    })
}

/// Читает следующую непустую строку или возвращает [`FormatError::MissingLine`].
///
/// Обёртка над [`line_reader::next_non_blank_line`] для слоя грамматики.
///
/// Сканирование очищает строку при исчерпании потока, поэтому в
/// [`FormatError::MissingLine`] отсюда всегда попадает пустая строка и
/// сообщение заканчивается на `()`. Непустое значение `line` в этом
/// варианте возможно только если ошибку строит сам вызывающий код.
pub fn require_non_blank_line<S: LineSource + ?Sized>(
    stream: &mut S,
    line: &mut String,
    expected: &'static str,
) -> Result<(), FormatError> {
    if line_reader::next_non_blank_line(stream, line).is_good() {
        Ok(())
    } else {
        Err(FormatError::MissingLine { expected, line: line.clone() })
    }
}
