use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FindbarError {
    #[error("{} is not valid UTF-8 text", .0.display())]
    InvalidUtf8(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
