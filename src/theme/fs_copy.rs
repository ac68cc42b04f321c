//! Recursive directory copy used by apply and backup.

use std::fs;
use std::io;
use std::path::Path;

/// Copy the tree at `src` into a new directory `dst`.
///
/// `dst` must not exist yet. Symlinks are followed and their targets copied,
/// so the result never points back into the source tree.
pub(super) fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<u64> {
    fs::create_dir(dst)?;
    copy_dir_contents(src, dst)
}

/// Copy every entry of `src` into the existing directory `dst`.
pub(super) fn copy_dir_contents(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut copied = 0u64;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if fs::metadata(&from)?.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// True when `dir` contains at least one entry.
pub(super) fn has_entries(dir: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(dir)?.next().transpose()?.is_some())
}

/// Remove `path` if present; a missing path is not an error.
pub(super) fn remove_dir_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{read_tree, TestTempDir};

    #[test]
    fn copies_nested_files_byte_for_byte() {
        let dir = TestTempDir::new("copy-nested");
        dir.write_text("src/style.css", "* { color: red; }");
        dir.write_text("src/modules/clock.json", "{\"format\":\"{:%H}\"}");

        let files = copy_dir_recursive(&dir.child("src"), &dir.child("dst")).unwrap();

        assert_eq!(files, 2);
        assert_eq!(read_tree(&dir.child("src")), read_tree(&dir.child("dst")));
    }

    #[test]
    fn refuses_existing_destination() {
        let dir = TestTempDir::new("copy-exists");
        dir.write_text("src/config", "{}");
        fs::create_dir_all(dir.child("dst")).unwrap();

        let err = copy_dir_recursive(&dir.child("src"), &dir.child("dst")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn has_entries_detects_empty_directory() {
        let dir = TestTempDir::new("has-entries");
        fs::create_dir_all(dir.child("empty")).unwrap();
        dir.write_text("full/config", "{}");
        assert!(!has_entries(&dir.child("empty")).unwrap());
        assert!(has_entries(&dir.child("full")).unwrap());
    }

    #[test]
    fn removing_missing_directory_is_ok() {
        let dir = TestTempDir::new("remove-missing");
        remove_dir_if_exists(&dir.child("nope")).unwrap();
    }
}
