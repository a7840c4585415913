//! End-to-end behaviour of the store and backup engine through the public API

mod common;

use std::fs;
use tempfile::tempdir;

use shalias::backup::compress::is_compressed;
use shalias::codec::{format_alias, is_alias_line, parse_line, validate_name};
use shalias::{Alias, AliasStore, Error, ShellType};

use common::test_manager;

#[test]
fn test_round_trip_all_dialects() {
    let aliases = [
        Alias::new("ll", "ls -la"),
        Alias::new("git_log", "git log --oneline --graph"),
        Alias::new("x-y_9", "echo \"quoted\" # and a hash"),
        Alias::new("_", "cd ~ && ls"),
    ];
    for alias in &aliases {
        for shell in ShellType::ALL {
            let line = format_alias(alias, shell);
            assert!(is_alias_line(&line));
            assert_eq!(parse_line(&line).as_ref(), Some(alias));
        }
    }
}

#[test]
fn test_name_validation_examples() {
    assert!(validate_name("ll"));
    assert!(validate_name("git_log"));
    assert!(!validate_name(""));
    assert!(!validate_name("with space"));
}

#[test]
fn test_load_single_alias() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias ll='ls -la'\nexport X=1\n").unwrap();

    let store = AliasStore::new(&rc_file, ShellType::Bash);
    assert_eq!(store.load_aliases().unwrap(), vec![Alias::new("ll", "ls -la")]);
}

#[test]
fn test_add_two_then_remove_one() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");
    fs::write(&rc_file, "").unwrap();
    let store = AliasStore::new(&rc_file, ShellType::Zsh);

    store.add_alias(&Alias::new("ll", "ls -la")).unwrap();
    store.add_alias(&Alias::new("gs", "git status")).unwrap();
    assert_eq!(
        store.load_aliases().unwrap(),
        vec![Alias::new("ll", "ls -la"), Alias::new("gs", "git status")]
    );

    store.remove_alias("ll").unwrap();
    assert_eq!(store.load_aliases().unwrap(), vec![Alias::new("gs", "git status")]);
}

#[test]
fn test_remove_unknown_alias() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias ll='ls'\n").unwrap();
    let store = AliasStore::new(&rc_file, ShellType::Bash);

    let err = store.remove_alias("gs").unwrap_err();
    assert!(matches!(err, Error::AliasNotFound { .. }));
    assert!(err.to_string().contains("alias not found"));
}

#[test]
fn test_fish_config_created_with_parents() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".config/fish/config.fish");
    let store = AliasStore::new(&rc_file, ShellType::Fish);

    store.add_alias(&Alias::new("g", "git")).unwrap();

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "alias g='git'\n");
}

#[cfg(unix)]
#[test]
fn test_written_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    let store = AliasStore::new(&rc_file, ShellType::Bash);
    store.add_alias(&Alias::new("ll", "ls")).unwrap();
    store.remove_alias("ll").unwrap();

    let mode = fs::metadata(&rc_file).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn test_backup_of_missing_source_creates_nothing() {
    let dir = tempdir().unwrap();
    let manager = test_manager(dir.path(), &dir.path().join(".bashrc"));

    assert!(matches!(manager.create_backup(), Err(Error::NotFound { .. })));
    assert!(manager.list_backups().unwrap().is_empty());
}

#[test]
fn test_twenty_five_backups_rotate_to_twenty() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias ll='ls -la'\n").unwrap();
    let manager = test_manager(dir.path(), &rc_file);

    let mut created = Vec::new();
    for _ in 0..25 {
        created.push(manager.create_backup().unwrap());
    }

    let listed = manager.list_backups().unwrap();
    assert_eq!(listed.len(), 20);

    let entries = manager.list_entries().unwrap();
    for (rank, entry) in entries.iter().enumerate() {
        assert_eq!(entry.compressed, rank >= 10, "rank {}: {}", rank, entry.file_name);
    }

    // the five oldest are gone in both forms
    for oldest in &created[..5] {
        assert!(!oldest.exists());
        assert!(!shalias::backup::compress::compressed_path(oldest).exists());
    }
    // the ten newest are untouched
    for newest in &created[15..] {
        assert!(newest.exists());
        assert!(!is_compressed(newest));
    }
}

#[test]
fn test_restore_undoes_add() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "export EDITOR=vim\nalias ll='ls -la'\n").unwrap();
    let store = AliasStore::new(&rc_file, ShellType::Bash);
    let manager = test_manager(dir.path(), &rc_file);

    let before = store.load_aliases().unwrap();
    let backup = manager.create_backup().unwrap();
    store.add_alias(&Alias::new("gs", "git status")).unwrap();
    assert_eq!(store.load_aliases().unwrap().len(), 2);

    manager.restore_from_backup(&backup).unwrap();
    assert_eq!(store.load_aliases().unwrap(), before);
}

#[test]
fn test_restore_last_from_compressed_band() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias a='1'\n").unwrap();
    let manager = test_manager(dir.path(), &rc_file).with_max_backups(2);

    manager.create_backup().unwrap();
    fs::write(&rc_file, "alias b='2'\n").unwrap();
    manager.create_backup().unwrap();

    let entries = manager.list_entries().unwrap();
    let compressed = entries.iter().find(|e| e.compressed).unwrap();

    manager.restore_from_backup(&compressed.path).unwrap();
    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "alias a='1'\n");
    assert!(compressed.path.exists());
    assert_eq!(manager.list_backups().unwrap().len(), 2);
}

#[test]
fn test_load_and_edit_file_with_latin1_comment() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, b"# caf\xe9\nalias ll='ls -la'\n").unwrap();
    let store = AliasStore::new(&rc_file, ShellType::Bash);

    assert_eq!(store.load_aliases().unwrap(), vec![Alias::new("ll", "ls -la")]);
    store.add_alias(&Alias::new("gs", "git status")).unwrap();
    store.remove_alias("ll").unwrap();

    assert_eq!(fs::read(&rc_file).unwrap(), b"# caf\xe9\nalias gs='git status'\n");
}
