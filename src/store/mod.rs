//! Config Store: alias-level reads and mutations of one configuration file

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::{Error, Result};
use crate::model::{Alias, ShellType};
use crate::utils::path::{read_bytes, read_file, write_atomic};
use crate::utils::strings::{join_lines, split_lines_preserve_trailing};

/// Reads and rewrites the alias lines of a shell configuration file.
///
/// Every mutation rewrites the whole file through [`write_atomic`]; lines
/// that are not touched are written back byte-for-byte, whatever their
/// encoding. Alias lines are decoded lossily for parsing only. No locking is done,
/// so callers sharing a file must serialize access themselves.
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
    shell: ShellType,
}

impl AliasStore {
    pub fn new(path: impl Into<PathBuf>, shell: ShellType) -> Self {
        Self {
            path: path.into(),
            shell,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn shell(&self) -> ShellType {
        self.shell
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Every line of the file as raw bytes, trailing blank lines included
    pub fn read_all_lines(&self) -> Result<Vec<Vec<u8>>> {
        let content = read_bytes(&self.path)?;
        Ok(split_lines_preserve_trailing(&content)
            .into_iter()
            .map(<[u8]>::to_vec)
            .collect())
    }

    /// Replace the file with `lines`, each newline-terminated
    pub fn write_all_lines<S: AsRef<[u8]>>(&self, lines: &[S]) -> Result<()> {
        write_atomic(&self.path, &join_lines(lines))
    }

    /// All alias lines in file order. Duplicate names are kept.
    pub fn load_aliases(&self) -> Result<Vec<Alias>> {
        let content = read_file(&self.path)?;
        let aliases: Vec<Alias> = content
            .lines()
            .filter(|line| codec::is_alias_line(line))
            .filter_map(codec::parse_line)
            .collect();

        debug!(
            "loaded {} aliases from {}",
            aliases.len(),
            self.path.display()
        );
        Ok(aliases)
    }

    /// Append `alias` to the end of the file, creating the file if needed.
    ///
    /// An existing alias with the same name is left alone, so the file ends
    /// up with two definitions.
    pub fn add_alias(&self, alias: &Alias) -> Result<()> {
        codec::validate(alias)?;

        let mut content = if self.exists() {
            read_bytes(&self.path)?
        } else {
            Vec::new()
        };

        if !content.is_empty() && !content.ends_with(b"\n") {
            content.push(b'\n');
        }
        content.extend_from_slice(codec::format_alias(alias, self.shell).as_bytes());
        content.push(b'\n');

        write_atomic(&self.path, &content)?;
        info!("added alias '{}' to {}", alias.name, self.path.display());
        Ok(())
    }

    /// Remove every alias line named `name`; returns how many were removed.
    pub fn remove_alias(&self, name: &str) -> Result<usize> {
        if !self.exists() {
            return Err(Error::not_found(&self.path));
        }

        let lines = self.read_all_lines()?;
        let before = lines.len();
        let kept: Vec<Vec<u8>> = lines
            .into_iter()
            .filter(|line| !defines(line, name))
            .collect();

        let removed = before - kept.len();
        if removed == 0 {
            return Err(Error::AliasNotFound {
                name: name.to_string(),
            });
        }

        self.write_all_lines(&kept)?;
        info!(
            "removed {} definition(s) of '{}' from {}",
            removed,
            name,
            self.path.display()
        );
        Ok(removed)
    }

    /// Redefine `alias.name` in place.
    ///
    /// The first definition is replaced by the new line and any later ones
    /// are dropped. Without an existing definition the alias is appended.
    /// Returns the number of definitions that were replaced or dropped.
    pub fn replace_alias(&self, alias: &Alias) -> Result<usize> {
        codec::validate(alias)?;

        if !self.exists() {
            self.add_alias(alias)?;
            return Ok(0);
        }

        let line = codec::format_alias(alias, self.shell);
        let mut replaced = 0;
        let mut lines = Vec::new();
        for existing in self.read_all_lines()? {
            if !defines(&existing, &alias.name) {
                lines.push(existing);
                continue;
            }
            if replaced == 0 {
                lines.push(line.as_bytes().to_vec());
            }
            replaced += 1;
        }

        if replaced == 0 {
            self.add_alias(alias)?;
            return Ok(0);
        }

        self.write_all_lines(&lines)?;
        info!("replaced alias '{}' in {}", alias.name, self.path.display());
        Ok(replaced)
    }
}

/// True when `line` is an alias line whose parsed name is exactly `name`
fn defines(line: &[u8], name: &str) -> bool {
    let line = String::from_utf8_lossy(line);
    codec::is_alias_line(&line)
        && codec::parse_line(&line).is_some_and(|alias| alias.name == name)
}

/// Case-insensitive substring filter over `"<name> = <command>"`
pub fn search<'a>(aliases: &'a [Alias], query: &str) -> Vec<&'a Alias> {
    let query = query.to_lowercase();
    aliases
        .iter()
        .filter(|alias| alias.to_string().to_lowercase().contains(&query))
        .collect()
}
