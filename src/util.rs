/// Shared filesystem helpers.
pub mod fs {
    use std::fs;
    use std::io;

    use camino::Utf8Path;

    /// Ensure a directory exists, creating it recursively if needed.
    ///
    /// An existing directory is left untouched. Anything else already at
    /// `path` (a regular file, a dangling link) surfaces as an error from
    /// `create_dir_all`.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<()> {
        if !path.is_dir() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use camino::Utf8PathBuf;
        use std::time::{SystemTime, UNIX_EPOCH};

        fn unique_temp_dir() -> Utf8PathBuf {
            let mut dir = std::env::temp_dir();
            let ts = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos();
            dir.push(format!("roblox-scaffold-util-{ts}"));
            Utf8PathBuf::from_path_buf(dir).unwrap()
        }

        #[test]
        fn ensure_dir_is_idempotent() {
            let root = unique_temp_dir();
            let nested = root.join("a").join("b");
            ensure_dir(&nested).unwrap();
            ensure_dir(&nested).unwrap();
            assert!(nested.is_dir());
            let _ = fs::remove_dir_all(root.as_std_path());
        }

        #[test]
        fn ensure_dir_rejects_regular_file() {
            let root = unique_temp_dir();
            fs::create_dir_all(root.as_std_path()).unwrap();
            let file = root.join("occupied");
            fs::write(file.as_std_path(), "x").unwrap();

            assert!(ensure_dir(&file).is_err());
            assert!(ensure_dir(&file.join("child")).is_err());

            let _ = fs::remove_dir_all(root.as_std_path());
        }
    }
}
