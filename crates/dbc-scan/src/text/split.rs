//! Single-character delimiter splitting.

/// Delimiter used when the caller has no better choice.
pub const DEFAULT_DELIMITER: char = ' ';

/// Splits `value` at every `delimiter`, keeping empty tokens.
///
/// Adjacent, leading and trailing delimiters all produce empty tokens, so
/// the result always has one more element than there are delimiters.
/// An empty input yields a single empty token.
///
/// ```
/// use dbc_scan::text::split;
///
/// assert_eq!(split("a,,b", ','), ["a", "", "b"]);
/// assert_eq!(split("", ','), [""]);
/// ```
pub fn split(value: &str, delimiter: char) -> Vec<&str> {
    value.split(delimiter).collect()
}

/// Appends the tokens of [`split`] to a caller-owned container.
///
/// Existing contents of `container` are kept.
///
/// ```
/// use dbc_scan::text::split_into;
///
/// let mut tokens = vec!["BO_".to_string()];
/// split_into("100 Engine", &mut tokens, ' ');
/// assert_eq!(tokens, ["BO_", "100", "Engine"]);
/// ```
pub fn split_into<C: Extend<String>>(value: &str, container: &mut C, delimiter: char) {
    container.extend(value.split(delimiter).map(str::to_owned));
}
