//! Alias record

/// A single alias definition: `alias <name>=<command>`
///
/// Equality is structural. Nothing here enforces the name/command shape
/// rules; parsed aliases may carry names that `codec::validate_name` would
/// reject, and validation only happens before a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub command: String,
}

impl Alias {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    /// Parse a `NAME=COMMAND` definition as typed on the command line.
    ///
    /// One pair of matching surrounding quotes on the command is stripped.
    pub fn from_definition(definition: &str) -> Option<Self> {
        let (name, command) = definition.split_once('=')?;
        Some(Self::new(name.trim(), unquote(command.trim())))
    }
}

/// Strip one pair of surrounding quotes of the same kind
fn unquote(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_equality() {
        assert_eq!(Alias::new("ll", "ls -la"), Alias::new("ll", "ls -la"));
        assert_ne!(Alias::new("ll", "ls -la"), Alias::new("ll", "ls -l"));
    }

    #[test]
    fn test_alias_display() {
        assert_eq!(Alias::new("gs", "git status").to_string(), "gs = git status");
    }

    #[test]
    fn test_from_definition() {
        assert_eq!(
            Alias::from_definition("ll='ls -la'"),
            Some(Alias::new("ll", "ls -la"))
        );
        assert_eq!(
            Alias::from_definition("gs=git status"),
            Some(Alias::new("gs", "git status"))
        );
        assert_eq!(Alias::from_definition("novalue"), None);
    }

    #[test]
    fn test_from_definition_keeps_inner_quotes() {
        assert_eq!(
            Alias::from_definition(r#"say=echo "hi""#),
            Some(Alias::new("say", r#"echo "hi""#))
        );
        assert_eq!(Alias::from_definition("x='a'"), Some(Alias::new("x", "a")));
        assert_eq!(
            Alias::from_definition(r#"q="it's""#),
            Some(Alias::new("q", "it's"))
        );
        assert_eq!(Alias::from_definition("m='a\""), Some(Alias::new("m", "'a\"")));
        assert_eq!(Alias::from_definition("s='"), Some(Alias::new("s", "'")));
    }
}
