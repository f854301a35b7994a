//! Serialization of single files into the artifact.
//!
//! Each file becomes one block:
//!
//! ```text
//! \n\n# BEGIN FILE: <relative/path>\n\n<raw bytes>\n\n# END FILE: <relative/path>\n\n
//! ```
//!
//! Content is copied verbatim. No encoding or line-ending changes are made.

use crate::error::SerializeError;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

const BEGIN_LABEL: &str = "# BEGIN FILE: ";
const END_LABEL: &str = "# END FILE: ";

/// The marker written before a file's content.
pub fn begin_marker(relative: &str) -> String {
    format!("\n\n{BEGIN_LABEL}{relative}\n\n")
}

/// The marker written after a file's content.
pub fn end_marker(relative: &str) -> String {
    format!("\n\n{END_LABEL}{relative}\n\n")
}

/// The in-band line written in place of content when a file cannot be opened.
pub fn read_error_line(relative: &str, error: &io::Error) -> String {
    format!("# Error reading {relative}: {error}\n")
}

/// Writes the block for the file at `path` to `sink`, labelled with `relative`.
///
/// Returns the number of content bytes copied.
///
/// # Errors
///
/// - [`SerializeError::Open`] if the file cannot be opened. The begin marker and a
///   `# Error reading` line have been written; no end marker follows.
/// - [`SerializeError::Copy`] if reading or writing fails partway. Bytes already
///   copied stay in the sink.
/// - [`SerializeError::Write`] if a marker or the diagnostic line cannot be written.
pub fn write_file_block<W: Write>(
    sink: &mut W,
    path: &Path,
    relative: &str,
) -> Result<u64, SerializeError> {
    sink.write_all(begin_marker(relative).as_bytes())
        .map_err(|e| SerializeError::write(path, e))?;
    let copied = {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                sink.write_all(read_error_line(relative, &e).as_bytes())
                    .map_err(|we| SerializeError::write(path, we))?;
                return Err(SerializeError::Open {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };
        io::copy(&mut file, sink).map_err(|e| SerializeError::Copy {
            path: path.to_path_buf(),
            source: e,
        })?
    };
    sink.write_all(end_marker(relative).as_bytes())
        .map_err(|e| SerializeError::write(path, e))?;
    tracing::debug!(file = relative, bytes = copied, "wrote file block");
    Ok(copied)
}
