//! # Alias Patterns
//!
//! Shape rules for alias names, shared by every dialect.

use lazy_static::lazy_static;
use regex::Regex;

/// Keyword that starts every alias line
pub const ALIAS_KEYWORD: &str = "alias";

/// Longest accepted alias name
pub const MAX_NAME_LEN: usize = 255;

/// Longest accepted alias command
pub const MAX_COMMAND_LEN: usize = 2048;

lazy_static! {
    /// Matches a valid alias name.
    ///
    /// First character: ASCII alphanumeric or `_`.
    /// Remaining characters: ASCII alphanumeric, `_` or `-`, up to
    /// [`MAX_NAME_LEN`] characters in total.
    pub static ref ALIAS_NAME_RE: Regex = Regex::new(
        r"^[A-Za-z0-9_][A-Za-z0-9_-]{0,254}$"
    ).unwrap();
}
