//! Pure string transforms: trimming, blank detection and splitting.
//!
//! Everything here works on borrowed input and either returns a sub-slice
//! of it or fresh tokens. Nothing depends on the process locale.

mod split;
mod trim;

pub use split::{DEFAULT_DELIMITER, split, split_into};
pub use trim::{Trim, is_blank_or_empty, trim, trim_chars};
