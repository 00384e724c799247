use std::fs;
use std::path::Path;

use nix::unistd::{access, AccessFlags};

/// Permission checks with access(2) semantics: answers for the effective
/// user, honoring ACLs and read-only mounts, unlike mode-bit inspection.
pub trait PathAccessExt {
    fn is_readable(&self) -> bool;
    fn is_executable(&self) -> bool;
    fn is_readable_executable(&self) -> bool;
}

impl PathAccessExt for Path {
    fn is_readable(&self) -> bool {
        access(self, AccessFlags::R_OK).is_ok()
    }

    fn is_executable(&self) -> bool {
        access(self, AccessFlags::X_OK).is_ok()
    }

    fn is_readable_executable(&self) -> bool {
        access(self, AccessFlags::R_OK | AccessFlags::X_OK).is_ok()
    }
}

/// Whether two paths name the same underlying file (device + inode).
///
/// Two different spellings of one file compare equal; a path that cannot
/// be stat'ed compares unequal to everything.
pub fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn same_file_sees_through_path_spelling() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("marker");
        File::create(&file).unwrap();

        let respelled = dir.path().join(".").join("marker");
        assert!(same_file(&file, &respelled));
    }

    #[test]
    fn same_file_distinguishes_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        File::create(&a).unwrap();
        File::create(&b).unwrap();

        assert!(!same_file(&a, &b));
        assert!(!same_file(&a, &dir.path().join("missing")));
    }

    #[test]
    fn readable_but_not_executable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        File::create(&file).unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();

        assert!(file.is_readable());
        assert!(!file.is_readable_executable());
    }

    #[test]
    fn executable_file_passes_both() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("script");
        File::create(&file).unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(file.is_readable_executable());
    }
}
