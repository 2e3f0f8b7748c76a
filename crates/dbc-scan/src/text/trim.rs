//! Generic trimming over string-like sequences.

/// A sequence of text units that can be trimmed from both ends.
///
/// Implemented for [`str`] (units are `char`) and `[u8]` (units are bytes),
/// so `String` and `Vec<u8>` work through deref. Trimming never copies or
/// mutates: it returns a sub-slice of the input.
pub trait Trim {
    /// The element type the trim predicate is applied to.
    type Unit: Copy + PartialEq;

    /// The default whitespace predicate: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
    ///
    /// This is the C-locale `isspace` set and does not depend on the
    /// process locale. Non-ASCII whitespace is not trimmed.
    fn is_space(unit: Self::Unit) -> bool;

    /// Returns the sub-slice left after removing units matching `trimmable`
    /// from both ends.
    fn trim_by<P: FnMut(Self::Unit) -> bool>(&self, trimmable: P) -> &Self;

    /// `true` if every unit matches `predicate` (vacuously true when empty).
    fn all_units<P: FnMut(Self::Unit) -> bool>(&self, predicate: P) -> bool;
}

impl Trim for str {
    type Unit = char;

    fn is_space(unit: char) -> bool {
        matches!(unit, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
    }

    fn trim_by<P: FnMut(char) -> bool>(&self, mut trimmable: P) -> &str {
        let start = self
            .char_indices()
            .find(|&(_, ch)| !trimmable(ch))
            .map_or(self.len(), |(idx, _)| idx);
        let end = self[start..]
            .char_indices()
            .rev()
            .find(|&(_, ch)| !trimmable(ch))
            .map_or(start, |(idx, ch)| start + idx + ch.len_utf8());
        &self[start..end]
    }

    fn all_units<P: FnMut(char) -> bool>(&self, predicate: P) -> bool {
        self.chars().all(predicate)
    }
}

impl Trim for [u8] {
    type Unit = u8;

    fn is_space(unit: u8) -> bool {
        matches!(unit, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
    }

    fn trim_by<P: FnMut(u8) -> bool>(&self, mut trimmable: P) -> &[u8] {
        let start = self.iter().position(|&b| !trimmable(b)).unwrap_or(self.len());
        let end = self[start..]
            .iter()
            .rposition(|&b| !trimmable(b))
            .map_or(start, |idx| start + idx + 1);
        &self[start..end]
    }

    fn all_units<P: FnMut(u8) -> bool>(&self, mut predicate: P) -> bool {
        self.iter().all(|&b| predicate(b))
    }
}

/// Removes leading and trailing whitespace (see [`Trim::is_space`]).
///
/// ```
/// use dbc_scan::text::trim;
///
/// assert_eq!(trim("  hello  "), "hello");
/// assert_eq!(trim(&b"\t BU_ \r"[..]), b"BU_");
/// ```
pub fn trim<T: Trim + ?Sized>(value: &T) -> &T {
    value.trim_by(T::is_space)
}

/// Removes leading and trailing units that belong to `trim_chars`.
///
/// An empty set trims nothing.
///
/// ```
/// use dbc_scan::text::trim_chars;
///
/// assert_eq!(trim_chars("\"Engine speed\";", &['"', ';']), "Engine speed");
/// ```
pub fn trim_chars<'a, T: Trim + ?Sized>(value: &'a T, trim_chars: &[T::Unit]) -> &'a T {
    value.trim_by(|unit| trim_chars.contains(&unit))
}

/// `true` if the value is empty or consists only of whitespace.
pub fn is_blank_or_empty<T: Trim + ?Sized>(value: &T) -> bool {
    value.all_units(T::is_space)
}
