//! Shell detection utilities

use log::debug;
use std::path::Path;

use crate::model::ShellType;

/// Detect shell type from a configuration file name or extension
pub fn detect_from_file(path: &Path) -> Option<ShellType> {
    if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
        if filename.contains("zshrc") || filename.contains("zprofile") {
            return Some(ShellType::Zsh);
        }
        if filename.contains("bashrc")
            || filename.contains("bash_profile")
            || filename.contains("bash_aliases")
        {
            return Some(ShellType::Bash);
        }
        if filename == "config.fish" {
            return Some(ShellType::Fish);
        }
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => match ext.to_lowercase().as_str() {
            "sh" | "bash" => Some(ShellType::Bash),
            "zsh" => Some(ShellType::Zsh),
            "fish" => Some(ShellType::Fish),
            _ => None,
        },
        None => None,
    }
}

/// Match a shell name or path such as `/usr/bin/zsh` or `-bash`
pub fn detect_from_name(name: &str) -> Option<ShellType> {
    if name.contains("zsh") {
        Some(ShellType::Zsh)
    } else if name.contains("bash") {
        Some(ShellType::Bash)
    } else if name.contains("fish") {
        Some(ShellType::Fish)
    } else {
        None
    }
}

/// First shell whose config file exists under `home`, checking zsh, bash, fish
pub fn detect_from_config_files(home: &Path) -> Option<ShellType> {
    [ShellType::Zsh, ShellType::Bash, ShellType::Fish]
        .into_iter()
        .find(|shell| home.join(shell.config_file_name()).exists())
}

/// Name of the parent process, read from procfs
#[cfg(target_os = "linux")]
fn parent_process_name() -> Option<String> {
    let ppid = std::os::unix::process::parent_id();
    let comm = std::fs::read_to_string(format!("/proc/{}/comm", ppid)).ok()?;
    let comm = comm.trim_end().to_string();
    (!comm.is_empty()).then_some(comm)
}

#[cfg(not(target_os = "linux"))]
fn parent_process_name() -> Option<String> {
    None
}

/// Detect the user's shell from the environment.
///
/// Order: `$SHELL`, existing config files in the home directory, the parent
/// process name, then Bash.
pub fn detect() -> ShellType {
    if let Some(shell) = std::env::var("SHELL").ok().as_deref().and_then(detect_from_name) {
        debug!("shell from $SHELL: {}", shell);
        return shell;
    }

    if let Some(shell) = dirs::home_dir().as_deref().and_then(detect_from_config_files) {
        debug!("shell from existing config file: {}", shell);
        return shell;
    }

    if let Some(shell) = parent_process_name().as_deref().and_then(detect_from_name) {
        debug!("shell from parent process: {}", shell);
        return shell;
    }

    ShellType::Bash
}

/// Get the appropriate shell type for the current context
pub fn get_shell_type(specified: Option<ShellType>, file_path: Option<&Path>) -> ShellType {
    // Priority: specified > file detection > environment detection
    if let Some(shell) = specified {
        return shell;
    }

    if let Some(shell) = file_path.and_then(detect_from_file) {
        return shell;
    }

    detect()
}
