//! Абстракция потока строк.
//!
//! [`LineSource`] — минимальный контракт «прочитать одну строку, сообщить
//! валидность», на котором построены функции [`line_reader`](crate::line_reader).
//! [`LineStream`] реализует его поверх любого [`BufRead`]: файла, stdin
//! или [`Cursor`](std::io::Cursor) в тестах.

use std::io::BufRead;

use tracing::{trace, warn};

use crate::error::StreamError;

/// Состояние потока после последней попытки чтения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamState {
    /// Последнее чтение вернуло строку.
    Good,
    /// Входные данные закончились, ничего не прочитано.
    Eof,
    /// Ошибка ввода/вывода нижележащего reader'а.
    Failed,
}

/// Источник строк с собственным признаком валидности.
///
/// Вызывающая сторона владеет источником; функции сканирования только
/// заимствуют его и продвигают курсор.
pub trait LineSource {
    /// Читает следующую сырую строку в `line`, заменяя её содержимое.
    ///
    /// Завершающий `'\n'` удаляется, `'\r'` остаётся — его снимает
    /// [`line_reader::read_line`](crate::line_reader::read_line).
    /// Если чтение не удалось, `line` остаётся пустой.
    fn read_raw_line(&mut self, line: &mut String);

    /// Состояние после последнего чтения.
    fn state(&self) -> StreamState;

    /// `true`, если последнее чтение вернуло строку.
    fn is_good(&self) -> bool {
        self.state() == StreamState::Good
    }
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_raw_line(&mut self, line: &mut String) {
        (**self).read_raw_line(line);
    }

    fn state(&self) -> StreamState {
        (**self).state()
    }
}

/// Поток строк поверх [`BufRead`].
///
/// Состояние «липкое»: после `Eof` или `Failed` поток больше не обращается
/// к reader'у, а каждое чтение просто очищает строку.
///
/// Строка, не являющаяся корректным UTF-8, не ломает поток: она
/// декодируется как Latin-1 (DBC-файлы часто сохранены в cp1252/Latin-1),
/// а номер строки попадает в лог.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use dbc_scan::stream::{LineSource, LineStream, StreamState};
///
/// let mut stream = LineStream::new(Cursor::new("first\r\nsecond"));
/// let mut line = String::new();
///
/// stream.read_raw_line(&mut line);
/// assert_eq!(line, "first\r");
/// stream.read_raw_line(&mut line);
/// assert_eq!(line, "second");
/// stream.read_raw_line(&mut line);
/// assert_eq!(stream.state(), StreamState::Eof);
/// assert_eq!(stream.finish().unwrap(), 2);
/// ```
#[derive(Debug)]
pub struct LineStream<R> {
    inner: R,
    state: StreamState,
    /// Счётчик успешно прочитанных строк.
    lines_read: usize,
    /// Строки, декодированные как Latin-1 вместо UTF-8.
    latin1_lines: usize,
    /// Причина перехода в `Failed`.
    error: Option<StreamError>,
}

impl<R: BufRead> LineStream<R> {
    /// Создаёт поток поверх буферизованного reader'а.
    pub fn new(reader: R) -> Self {
        Self {
            inner: reader,
            state: StreamState::Good,
            lines_read: 0,
            latin1_lines: 0,
            error: None,
        }
    }

    /// Количество успешно прочитанных строк.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Причина сбоя, если поток в состоянии `Failed`.
    #[must_use]
    pub fn error(&self) -> Option<&StreamError> {
        self.error.as_ref()
    }

    /// Количество строк, которые не были корректным UTF-8 и прочитаны как Latin-1.
    #[must_use]
    pub fn latin1_lines(&self) -> usize {
        self.latin1_lines
    }

    /// Завершает работу с потоком.
    ///
    /// Возвращает количество прочитанных строк, если поток не сломан,
    /// иначе — причину сбоя. Позволяет отличить исчерпание от ошибки.
    pub fn finish(self) -> Result<usize, StreamError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.lines_read),
        }
    }

    fn fail(&mut self, err: StreamError) {
        warn!(lines_read = self.lines_read, error = %err, "line stream failed");
        self.state = StreamState::Failed;
        self.error = Some(err);
    }
}

impl<R: BufRead> LineSource for LineStream<R> {
    fn read_raw_line(&mut self, line: &mut String) {
        // Reuse the caller's allocation as the byte buffer.
        let mut bytes = std::mem::take(line).into_bytes();
        bytes.clear();

        if self.state != StreamState::Good {
            return;
        }

        match self.inner.read_until(b'\n', &mut bytes) {
            Ok(0) => {
                trace!(lines_read = self.lines_read, "end of input");
                self.state = StreamState::Eof;
            }
            Ok(_) => {
                if bytes.last() == Some(&b'\n') {
                    bytes.pop();
                }
                self.lines_read += 1;
                *line = match String::from_utf8(bytes) {
                    Ok(text) => text,
                    Err(err) => {
                        warn!(
                            line = self.lines_read,
                            error = %err.utf8_error(),
                            "line is not valid UTF-8, decoding as Latin-1"
                        );
                        self.latin1_lines += 1;
                        decode_latin1(err.as_bytes())
                    }
                };
            }
            Err(err) => self.fail(StreamError::Io(err)),
        }
    }

    fn state(&self) -> StreamState {
        self.state
    }
}

/// Latin-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
