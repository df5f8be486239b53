use std::io;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::util::fs::ensure_dir;

/// Result of ensuring a single relative directory under the root.
#[derive(Debug)]
pub struct Outcome {
    pub relative: &'static str,
    pub result: io::Result<()>,
}

impl Outcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything the materializer did for one run.
#[derive(Debug)]
pub struct Report {
    pub root: Utf8PathBuf,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn created_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// Create `root` and every entry of `directories` beneath it.
///
/// The root itself must be creatable; a failure there aborts the run. Each
/// entry is attempted independently so one bad branch does not stop the rest.
pub fn materialize(root: &Utf8Path, directories: &[&'static str]) -> Result<Report> {
    ensure_dir(root).with_context(|| format!("creating root directory {}", root))?;
    let root = root
        .canonicalize_utf8()
        .with_context(|| format!("resolving root directory {}", root))?;
    tracing::info!(root = %root, "materializing directory tree");

    let outcomes = directories
        .iter()
        .map(|&relative| {
            let result = ensure_dir(&root.join(relative));
            match &result {
                Ok(()) => tracing::debug!(path = relative, "directory ready"),
                Err(err) => tracing::warn!(path = relative, error = %err, "directory creation failed"),
            }
            Outcome { relative, result }
        })
        .collect();

    Ok(Report { root, outcomes })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::layout::{self, DIRECTORIES};

    fn unique_temp_dir() -> Utf8PathBuf {
        let mut dir = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("roblox-scaffold-tree-{ts}"));
        Utf8PathBuf::from_path_buf(dir).unwrap()
    }

    fn snapshot(root: &Utf8Path) -> BTreeSet<String> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![root.to_owned()];
        while let Some(dir) = stack.pop() {
            for entry in dir.read_dir_utf8().unwrap() {
                let entry = entry.unwrap();
                let path = entry.path().to_owned();
                seen.insert(path.strip_prefix(root).unwrap().to_string());
                if path.is_dir() {
                    stack.push(path);
                }
            }
        }
        seen
    }

    #[test]
    fn creates_root_and_every_entry() {
        let root = unique_temp_dir().join("mygame");
        let report = materialize(&root, DIRECTORIES).unwrap();

        assert!(report.root.is_absolute());
        assert_eq!(report.created_count(), DIRECTORIES.len());
        for relative in DIRECTORIES {
            assert!(report.root.join(relative).is_dir(), "{relative} missing");
        }

        let top: BTreeSet<String> = report
            .root
            .read_dir_utf8()
            .unwrap()
            .map(|e| e.unwrap().file_name().to_owned())
            .collect();
        let expected: BTreeSet<String> = layout::top_level().map(str::to_owned).collect();
        assert_eq!(top, expected);

        let _ = fs::remove_dir_all(root.parent().unwrap().as_std_path());
    }

    #[test]
    fn second_run_leaves_tree_unchanged() {
        let root = unique_temp_dir();
        let first = materialize(&root, DIRECTORIES).unwrap();
        let before = snapshot(&first.root);

        let second = materialize(&root, DIRECTORIES).unwrap();
        assert_eq!(second.created_count(), DIRECTORIES.len());
        assert_eq!(snapshot(&second.root), before);

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn blocked_branch_does_not_stop_the_rest() {
        let root = unique_temp_dir();
        fs::create_dir_all(root.as_std_path()).unwrap();
        fs::write(root.join("Lighting").as_std_path(), "not a folder").unwrap();

        let report = materialize(&root, DIRECTORIES).unwrap();

        let failed: Vec<_> = report.failures().map(|o| o.relative).collect();
        assert_eq!(failed.len(), 6);
        assert!(failed.iter().all(|rel| rel.starts_with("Lighting")));
        assert_eq!(report.created_count(), DIRECTORIES.len() - 6);
        assert!(report.root.join("TextChatService/BubbleChatConfiguration").is_dir());

        let _ = fs::remove_dir_all(root.as_std_path());
    }

    #[test]
    fn root_occupied_by_file_is_fatal() {
        let parent = unique_temp_dir();
        fs::create_dir_all(parent.as_std_path()).unwrap();
        let root = parent.join("game");
        fs::write(root.as_std_path(), "").unwrap();

        let err = materialize(&root, DIRECTORIES).unwrap_err();
        assert!(err.to_string().contains("creating root directory"));

        let _ = fs::remove_dir_all(parent.as_std_path());
    }
}
