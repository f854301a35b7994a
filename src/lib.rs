//! # Colligo
//!
//! `colligo` flattens a directory tree into one text artifact. Every non-hidden
//! regular file is written as a block delimited by markers that carry its path
//! relative to the root:
//!
//! ```text
//! \n\n# BEGIN FILE: src/main.rs\n\n<raw bytes>\n\n# END FILE: src/main.rs\n\n
//! ```
//!
//! Names starting with `.` are skipped, and hidden directories are pruned with
//! their whole subtree, except `.github`. Failures on a single entry are logged
//! through `tracing` and skipped; only root resolution, walk errors and the final
//! flush abort a run.
//!
//! # Example
//!
//! ```no_run
//! use colligo::{ColligoBuilder, colligo, create_output};
//! use std::path::Path;
//!
//! let output = Path::new("combined.txt");
//! let sink = create_output(output).expect("Failed to create output");
//! let options = ColligoBuilder::new(".")
//!     .output(output)
//!     .sort_by_name(true)
//!     .build();
//!
//! let summary = colligo(&options, sink).expect("Failed to combine files");
//! println!("{} files written", summary.files_written);
//! ```

mod engine;
mod error;
mod filter;
pub mod logging;
mod options;
pub mod output;
mod types;

pub use engine::{colligo, create_output, relative_output_path, resolve_root};
pub use error::{ColligoError, SerializeError};
pub use filter::{ALWAYS_INCLUDED_DIR, HIDDEN_MARKER, is_hidden, is_pruned_dir};
pub use options::{ColligoBuilder, ColligoOptions, default_output_name};
pub use output::write_file_block;
pub use types::{Entry, RunSummary};
