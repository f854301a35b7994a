use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColligoOptions {
    pub root: PathBuf,
    pub output: Option<PathBuf>,
    pub include_hidden: bool,
    pub sort_by_name: bool,
}
impl Default for ColligoOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: None,
            include_hidden: false,
            sort_by_name: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct ColligoBuilder {
    options: ColligoOptions,
}
impl ColligoBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ColligoOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Path of the artifact being written, so the walk can leave it out.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = Some(path.into());
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn sort_by_name(mut self, yes: bool) -> Self {
        self.options.sort_by_name = yes;
        self
    }
    pub fn build(self) -> ColligoOptions {
        self.options
    }
}

/// Default artifact name: `combined_repo_<os>_<YYYYMMDDTHHMMSS>.txt`.
pub fn default_output_name() -> String {
    format!(
        "combined_repo_{}_{}.txt",
        std::env::consts::OS,
        Local::now().format("%Y%m%dT%H%M%S")
    )
}
