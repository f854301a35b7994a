use crate::filter::is_hidden;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// A filesystem node met during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path as produced by the walk, rooted at the resolved root.
    pub path: PathBuf,
    /// The same path with the root stripped. Empty for the root itself.
    pub relative: PathBuf,
    /// Whether the walk reported this entry as a directory.
    ///
    /// Symbolic links are never directories here, even when they point at one.
    pub is_dir: bool,
    /// Whether the base name starts with the hidden marker.
    pub is_hidden: bool,
}

impl Entry {
    pub(crate) fn new(path: PathBuf, relative: PathBuf, is_dir: bool) -> Self {
        let is_hidden = relative
            .file_name()
            .is_some_and(|name| is_hidden(&name.to_string_lossy()));
        Self {
            path,
            relative,
            is_dir,
            is_hidden,
        }
    }

    /// The relative path with `/` separators, as written into markers.
    pub fn relative_display(&self) -> String {
        join_relative(&self.relative)
    }
}

pub(crate) fn join_relative(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// What a completed run did.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// The resolved root that was walked.
    pub root: PathBuf,
    /// Files whose block was written in full.
    pub files_written: usize,
    /// Content bytes copied, markers excluded.
    pub bytes_copied: u64,
    /// Hidden files skipped. Pruned directories are not counted.
    pub hidden_skipped: usize,
    /// Entries that failed and were skipped.
    pub entry_errors: usize,
    /// Whether the output artifact was met inside the tree and left out.
    pub output_excluded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_display_uses_forward_slashes() {
        let entry = Entry::new(
            PathBuf::from("/r/.github/workflows/ci.yml"),
            [".github", "workflows", "ci.yml"].iter().collect(),
            false,
        );
        assert_eq!(entry.relative_display(), ".github/workflows/ci.yml");
        assert!(!entry.is_hidden);
    }

    #[test]
    fn hidden_flag_follows_base_name() {
        let entry = Entry::new(PathBuf::from("/r/src/.env"), PathBuf::from("src/.env"), false);
        assert!(entry.is_hidden);
        let root = Entry::new(PathBuf::from("/r"), PathBuf::new(), true);
        assert!(!root.is_hidden);
        assert_eq!(root.relative_display(), "");
    }
}
