use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("source document not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("fragment \"{name}\" matched {} files, expected exactly one", candidates.len())]
    FragmentResolution {
        name: String,
        candidates: Vec<PathBuf>,
    },

    #[error("properties line has no key/value separator: {0:?}")]
    MalformedProperty(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type ImportResult<T> = Result<T, ImportError>;
