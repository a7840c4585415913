//! Shell dialects and their default configuration paths

use std::path::PathBuf;

/// Supported shell dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    pub const ALL: [ShellType; 3] = [ShellType::Bash, ShellType::Zsh, ShellType::Fish];

    /// Config file location relative to the home directory
    pub fn config_file_name(&self) -> &'static str {
        match self {
            ShellType::Bash => ".bashrc",
            ShellType::Zsh => ".zshrc",
            ShellType::Fish => ".config/fish/config.fish",
        }
    }

    /// Get the default configuration file path for this shell
    pub fn default_config_path(&self) -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(self.config_file_name())
    }

    /// Get shell name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }

    /// Command that re-reads `path` in a running shell
    pub fn reload_command(&self, path: &std::path::Path) -> String {
        format!("source {}", path.display())
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ShellType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(format!("Unknown shell type: {}", s)),
        }
    }
}
