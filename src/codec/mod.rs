//! # Alias Codec
//!
//! Line-level parsing and formatting of alias definitions.
//!
//! Parsing and validation are deliberately separate phases:
//!
//! | Function | Fails? | Used when |
//! |----------|--------|-----------|
//! | [`parse_line`] | never (returns `Option`) | loading, removing |
//! | [`validate_name`] / [`validate_command`] | pure predicates | before writes |
//! | [`validate`] | `Err(InvalidAlias)` | write gate in the store |
//!
//! One alias per line. Continuation lines (`\`) and several aliases joined
//! by `;` are not recognised.

pub mod patterns;

use log::debug;

use crate::error::{Error, Result};
use crate::model::{Alias, ShellType};
use patterns::{ALIAS_KEYWORD, ALIAS_NAME_RE, MAX_COMMAND_LEN};

const BLANKS: [char; 2] = [' ', '\t'];

/// True iff `name` is 1-255 chars, starts with an alphanumeric or `_` and
/// contains only alphanumerics, `_` and `-`.
pub fn validate_name(name: &str) -> bool {
    ALIAS_NAME_RE.is_match(name)
}

/// True iff `command` is 1-2048 chars. Content is not inspected.
pub fn validate_command(command: &str) -> bool {
    let len = command.chars().count();
    (1..=MAX_COMMAND_LEN).contains(&len)
}

/// Write gate: both predicates must accept the alias.
pub fn validate(alias: &Alias) -> Result<()> {
    if validate_name(&alias.name) && validate_command(&alias.command) {
        Ok(())
    } else {
        debug!("rejected alias {:?}", alias.name);
        Err(Error::InvalidAlias {
            name: alias.name.clone(),
        })
    }
}

/// Format an alias as a configuration line for `shell`.
///
/// Commands containing a single quote are wrapped in double quotes with no
/// escaping, so `$` and backticks inside them are still expanded by the
/// shell. Everything else is single-quoted. All three dialects accept the
/// `alias name='value'` form, fish included.
pub fn format_alias(alias: &Alias, shell: ShellType) -> String {
    let quote = if alias.command.contains('\'') { '"' } else { '\'' };
    match shell {
        ShellType::Bash | ShellType::Zsh | ShellType::Fish => {
            format!("alias {}={}{}{}", alias.name, quote, alias.command, quote)
        }
    }
}

/// Syntactic pre-filter: the line, after leading blanks, starts with `alias`.
///
/// `aliasfoo=1` passes this check too; [`parse_line`] decides the rest.
pub fn is_alias_line(line: &str) -> bool {
    line.trim_start_matches(BLANKS).starts_with(ALIAS_KEYWORD)
}

/// Parse one configuration line into an alias.
///
/// Returns `None` when the line has no `alias` keyword, no `=`, an empty
/// name or an empty right-hand side. The name is not validated.
///
/// Quoted commands end at the next quote of the same kind; an unclosed quote
/// takes the rest of the line. Unquoted commands end at the first `#`.
pub fn parse_line(line: &str) -> Option<Alias> {
    let rest = line
        .trim_start_matches(BLANKS)
        .strip_prefix(ALIAS_KEYWORD)?;
    let (name_part, command_part) = rest.split_once('=')?;

    let name = name_part.trim_matches(BLANKS);
    if name.is_empty() {
        return None;
    }

    let command_part = command_part.trim_start_matches(BLANKS);
    let first = command_part.chars().next()?;

    let command = if first == '\'' || first == '"' {
        let body = &command_part[first.len_utf8()..];
        match body.find(first) {
            Some(end) => &body[..end],
            None => body,
        }
    } else {
        let body = match command_part.find('#') {
            Some(comment) => &command_part[..comment],
            None => command_part,
        };
        body.trim_end_matches(BLANKS)
    };

    Some(Alias::new(name, command))
}
