//! Построчное чтение с нормализацией концов строк и направленное сканирование.
//!
//! Все функции принимают поток и строку-буфер вызывающей стороны и
//! возвращают тот же поток, чтобы результат можно было сразу проверить:
//!
//! ```
//! use std::io::Cursor;
//!
//! use dbc_scan::line_reader::next_non_blank_line;
//! use dbc_scan::stream::{LineSource, LineStream};
//!
//! let mut stream = LineStream::new(Cursor::new("\r\n   \r\nBO_ 100 Engine: 8 ECU\r\n"));
//! let mut line = String::new();
//!
//! assert!(next_non_blank_line(&mut stream, &mut line).is_good());
//! assert_eq!(line, "BO_ 100 Engine: 8 ECU");
//! ```
//!
//! Ни одна функция не возвращает ошибок. Исчерпание и сбой потока видны
//! только через [`LineSource::state`]; после каждого вызова нужно проверять
//! поток, а не полагаться на непустую строку.

use tracing::trace;

use crate::{stream::LineSource, text::is_blank_or_empty};

/// Читает одну строку, снимая завершающий `'\r'` (остаток CRLF).
///
/// Содержимое `line` заменяется. Если поток исчерпан или сломан,
/// `line` становится пустой.
pub fn read_line<'s, S: LineSource + ?Sized>(stream: &'s mut S, line: &mut String) -> &'s mut S {
    stream.read_raw_line(line);
    if line.ends_with('\r') {
        line.pop();
    }
    stream
}

/// Пропускает пустые и пробельные строки до первой значимой.
///
/// Если поток закончился раньше, `line` сбрасывается в пустую строку:
/// последняя прочитанная пробельная строка не сохраняется.
pub fn next_non_blank_line<'s, S: LineSource + ?Sized>(
    stream: &'s mut S,
    line: &mut String,
) -> &'s mut S {
    scan_until(stream, line, |candidate| !is_blank_or_empty(candidate))
}

/// Пропускает строки до первой пустой или пробельной (границы секции).
///
/// Политика на исчерпании та же, что у [`next_non_blank_line`]:
/// `line` становится пустой строкой.
pub fn skip_to_next_blank_line<'s, S: LineSource + ?Sized>(
    stream: &'s mut S,
    line: &mut String,
) -> &'s mut S {
    scan_until(stream, line, |candidate| is_blank_or_empty(candidate))
}

fn scan_until<'s, S, P>(stream: &'s mut S, line: &mut String, mut accept: P) -> &'s mut S
where
    S: LineSource + ?Sized,
    P: FnMut(&str) -> bool,
{
    let mut skipped = 0usize;
    loop {
        if !read_line(&mut *stream, line).is_good() {
            trace!(skipped, state = ?stream.state(), "scan reached end of stream");
            line.clear();
            return stream;
        }

        if accept(line.as_str()) {
            return stream;
        }
        skipped += 1;
    }
}
