//! Hidden-name convention used to decide which entries are suppressed.
//!
//! Hidden is decided from the base name alone, not from any filesystem attribute.

/// Leading character that marks a name as hidden.
pub const HIDDEN_MARKER: char = '.';

/// Hidden directory that is always descended into.
pub const ALWAYS_INCLUDED_DIR: &str = ".github";

/// Returns `true` if `name` begins with [`HIDDEN_MARKER`].
///
/// The empty name is not hidden.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Returns `true` if a directory called `name` should be skipped with its whole subtree.
pub fn is_pruned_dir(name: &str) -> bool {
    is_hidden(name) && name != ALWAYS_INCLUDED_DIR
}
