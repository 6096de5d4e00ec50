use std::path::PathBuf;

use chrono::{DateTime, Local};

/// Document-wide configuration of a manuscript.
///
/// Missing metadata is substituted with permissive placeholders rather than
/// rejected; `time` is stamped at import, never read from input.
#[derive(Debug, Clone, PartialEq)]
pub struct ManuscriptConfig {
    pub title: String,
    pub author: String,
    /// Cover image filename, resolved against an illustrations directory at
    /// export time. `None` means no cover.
    pub cover: Option<PathBuf>,
    pub time: DateTime<Local>,
}

impl Default for ManuscriptConfig {
    fn default() -> Self {
        Self {
            title: "untitled".to_string(),
            author: "unnamed author".to_string(),
            cover: None,
            time: Local::now(),
        }
    }
}
