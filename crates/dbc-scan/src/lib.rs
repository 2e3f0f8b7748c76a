//! Примитивы сканирования текста для парсера DBC-файлов.
//!
//! Крейт нормализует сырой ввод до того, как его увидит разбор грамматики:
//!
//! - [`line_reader`] — чтение строк с удалением `'\r'` от CRLF и направленное
//!   сканирование (до следующей значимой строки или до границы секции);
//! - [`text`] — обрезка пробелов, проверка на пустоту, разбиение по разделителю;
//! - [`number`] — преобразование строки в `f64` без зависимости от локали;
//! - [`endian`] — разворот порядка байтов значений фиксированной ширины;
//! - [`error`] — причины сбоя потока и таксономия ошибок формата.
//!
//! Крейт ничего не знает о сообщениях, сигналах и заголовках DBC —
//! он поставляет только нормализованные строки, токены и числа.
//!
//! # Быстрый старт
//!
//! ```
//! use std::io::Cursor;
//!
//! use dbc_scan::prelude::*;
//!
//! let input = "VERSION \"\"\r\n\r\nBO_ 100 Engine: 8 ECU\r\n SG_ Rpm : 0|16@1+ (0.25,0) [0|16383.75] \"rpm\" ECU\r\n";
//! let mut stream = LineStream::new(Cursor::new(input));
//! let mut line = String::new();
//!
//! next_non_blank_line(&mut stream, &mut line);
//! assert_eq!(line, "VERSION \"\"");
//!
//! next_non_blank_line(&mut stream, &mut line);
//! let tokens = split(trim(line.as_str()), DEFAULT_DELIMITER);
//! assert_eq!(tokens, ["BO_", "100", "Engine:", "8", "ECU"]);
//!
//! next_non_blank_line(&mut stream, &mut line);
//! let factor = trim_chars(split(trim(line.as_str()), ' ')[4], &['(', ')']);
//! assert_eq!(convert_to_double(split(factor, ',')[0], 1.0), 0.25);
//!
//! assert!(!next_non_blank_line(&mut stream, &mut line).is_good());
//! assert_eq!(stream.finish().unwrap(), 4);
//! ```

pub mod endian;
pub mod error;
pub mod line_reader;
pub mod number;
pub mod stream;
pub mod text;

/// Часто используемые типы и функции.
pub mod prelude {
    pub use crate::{
        endian::{FixedWidth, reverse_bytes, swap_endianness},
        error::{FormatError, StreamError, check_extension, require_non_blank_line},
        line_reader::{next_non_blank_line, read_line, skip_to_next_blank_line},
        number::convert_to_double,
        stream::{LineSource, LineStream, StreamState},
        text::{
            DEFAULT_DELIMITER, Trim, is_blank_or_empty, split, split_into, trim, trim_chars,
        },
    };
}
