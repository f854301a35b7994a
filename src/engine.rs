use crate::error::ColligoError;
use crate::filter::is_pruned_dir;
use crate::options::ColligoOptions;
use crate::output::write_file_block;
use crate::types::{Entry, RunSummary};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
}

impl Walker {
    fn new(root: &Path, options: &ColligoOptions) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(false);
        if options.sort_by_name {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        if !options.include_hidden {
            // The root is depth 0 and never reaches the filter.
            builder.filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && is_pruned_dir(&entry.file_name().to_string_lossy()))
            });
        }
        Self {
            inner: builder.build(),
            root: root.to_path_buf(),
        }
    }

    fn into_iter(self) -> impl Iterator<Item = Result<Entry, ColligoError>> {
        let root = self.root;
        self.inner.map(move |result| {
            let entry = result?;
            let relative = entry
                .path()
                .strip_prefix(&root)
                .map_err(|_| ColligoError::RelativePath {
                    path: entry.path().to_path_buf(),
                    root: root.clone(),
                })?
                .to_path_buf();
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            Ok(Entry::new(entry.into_path(), relative, is_dir))
        })
    }
}

/// Cleans, absolutizes and resolves symbolic links in `path`.
///
/// # Errors
///
/// [`ColligoError::RootResolution`] if the path does not exist or cannot be read,
/// [`ColligoError::NotADirectory`] if it resolves to anything but a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf, ColligoError> {
    let resolved = dunce::canonicalize(path).map_err(|e| ColligoError::root(path, e))?;
    let metadata = fs::metadata(&resolved).map_err(|e| ColligoError::root(path, e))?;
    if !metadata.is_dir() {
        return Err(ColligoError::NotADirectory { path: resolved });
    }
    Ok(resolved)
}

/// Path of `output` relative to `root`, or `None` if it lies outside.
///
/// A relative `output` is taken against the current directory, where it gets created.
/// Computed once before the walk; the walk compares entry paths against it.
pub fn relative_output_path(root: &Path, output: &Path) -> Option<PathBuf> {
    let absolute = match dunce::canonicalize(output) {
        Ok(path) => path,
        Err(_) if output.is_absolute() => output.to_path_buf(),
        Err(_) => std::env::current_dir().ok()?.join(output),
    };
    clean(&absolute)
        .strip_prefix(root)
        .ok()
        .map(Path::to_path_buf)
}

/// Lexically drops `.` components and folds `..` into the preceding component.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// Creates (or truncates) the output artifact.
pub fn create_output(path: &Path) -> Result<File, ColligoError> {
    File::create(path).map_err(|source| ColligoError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })
}

/// Walks `options.root` depth-first and writes one block per non-hidden regular file to `sink`.
///
/// Output is buffered and flushed once after the walk.
///
/// # Errors
///
/// Fatal errors only: root resolution, a walk error such as an unreadable directory,
/// an entry outside the root, or a failed final flush. Per-entry failures are
/// logged, counted in [`RunSummary::entry_errors`], and skipped.
pub fn colligo<W: Write>(options: &ColligoOptions, sink: W) -> Result<RunSummary, ColligoError> {
    let root = resolve_root(&options.root)?;
    let excluded = options
        .output
        .as_deref()
        .and_then(|output| relative_output_path(&root, output));
    tracing::debug!(
        root = %root.display(),
        excluded = ?excluded,
        "starting traversal"
    );
    let mut writer = BufWriter::new(sink);
    let mut summary = RunSummary {
        root: root.clone(),
        ..Default::default()
    };
    for entry in Walker::new(&root, options).into_iter() {
        let entry = entry?;
        visit(&entry, excluded.as_deref(), options, &mut writer, &mut summary);
    }
    writer.flush().map_err(ColligoError::Flush)?;
    tracing::debug!(
        files = summary.files_written,
        bytes = summary.bytes_copied,
        errors = summary.entry_errors,
        "traversal finished"
    );
    Ok(summary)
}

fn visit<W: Write>(
    entry: &Entry,
    excluded: Option<&Path>,
    options: &ColligoOptions,
    writer: &mut W,
    summary: &mut RunSummary,
) {
    let resolved = match dunce::canonicalize(&entry.path) {
        Ok(path) => path,
        Err(e) => {
            let err = ColligoError::symlink(&entry.path, e);
            tracing::error!(path = %entry.path.display(), error = %err, "skipping entry");
            summary.entry_errors += 1;
            return;
        }
    };
    if excluded == Some(entry.relative.as_path()) {
        tracing::debug!(path = %entry.path.display(), "skipping output artifact");
        summary.output_excluded = true;
        return;
    }
    // Pruned directories never get here; the rest are descended by the walk.
    if entry.is_dir {
        return;
    }
    if entry.is_hidden && !options.include_hidden {
        tracing::debug!(path = %entry.path.display(), "skipping hidden file");
        summary.hidden_skipped += 1;
        return;
    }
    match fs::metadata(&resolved) {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => {
            tracing::debug!(
                path = %entry.path.display(),
                target = %resolved.display(),
                "skipping non-regular file"
            );
            return;
        }
        Err(e) => {
            tracing::error!(path = %resolved.display(), error = %e, "skipping entry");
            summary.entry_errors += 1;
            return;
        }
    }
    let relative = entry.relative_display();
    match write_file_block(writer, &resolved, &relative) {
        Ok(bytes) => {
            summary.files_written += 1;
            summary.bytes_copied += bytes;
        }
        Err(e) => {
            tracing::error!(file = %relative, error = %e, "error processing file");
            summary.entry_errors += 1;
        }
    }
}
