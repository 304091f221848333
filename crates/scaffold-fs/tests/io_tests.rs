use assert_fs::prelude::*;
use predicates::prelude::*;
use scaffold_fs::io;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.txt");

    io::write_atomic(&path, b"hello world").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.txt");
    fs::write(&path, "original").unwrap();

    io::write_atomic(&path, b"updated").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_creates_missing_parents() {
    let temp = assert_fs::TempDir::new().unwrap();
    let target = temp.child("features").child("bootstrap").child("support.php");

    io::write_atomic(target.path(), b"<?php").unwrap();

    target.assert("<?php");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    io::write_atomic(&temp.path().join("target.txt"), b"content").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
    temp.child("target.txt").assert(predicate::path::is_file());
}

#[test]
fn test_failed_rename_removes_temp_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let blocker = temp.child("features");
    blocker.create_dir_all().unwrap();
    blocker.child("keep.txt").write_str("keep").unwrap();

    let result = io::write_atomic(blocker.path(), b"content");

    assert!(matches!(result, Err(scaffold_fs::Error::Io { .. })));
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
    blocker.child("keep.txt").assert("keep");
}

#[test]
fn test_ensure_dir_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("a").join("b");

    io::ensure_dir(&dir).unwrap();
    io::ensure_dir(&dir).unwrap();

    assert!(dir.is_dir());
}

#[test]
fn test_ensure_dir_over_file_fails() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("bin");
    fs::write(&blocker, "not a dir").unwrap();

    let result = io::ensure_dir(&blocker.join("inner"));
    assert!(matches!(result, Err(scaffold_fs::Error::Io { .. })));
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn test_write_into_readonly_dir_is_io_error() {
        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, Permissions::from_mode(0o555)).unwrap();

        // Privileged users bypass directory permissions
        let probe = locked.join("probe");
        let privileged = fs::write(&probe, "").is_ok();

        let result = io::write_atomic(&locked.join("file.txt"), b"x");
        fs::set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();

        if !privileged {
            assert!(matches!(result, Err(scaffold_fs::Error::Io { .. })));
        }
    }

    #[test]
    fn test_write_atomic_keeps_existing_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wp-cli.yml");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o600)).unwrap();

        io::write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_write_atomic_writes_through_symlink() {
        let temp = TempDir::new().unwrap();
        let shared = temp.path().join("shared");
        fs::create_dir(&shared).unwrap();
        let real = shared.join("editorconfig");
        fs::write(&real, "old").unwrap();
        let link = temp.path().join(".editorconfig");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        io::write_atomic(&link, b"new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_through_dangling_symlink_creates_target() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("command.php");
        std::os::unix::fs::symlink("real-command.php", &link).unwrap();

        io::write_atomic(&link, b"<?php").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(temp.path().join("real-command.php")).unwrap(),
            "<?php"
        );
    }

    #[test]
    fn test_set_executable_preserves_other_bits() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("install.sh");
        fs::write(&path, "#!/bin/sh").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o640)).unwrap();

        io::set_executable(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o751);
    }
}
