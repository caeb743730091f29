//! Loading the page text shown in the viewer

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::FindbarError;

/// Page text and the title shown above it
#[derive(Debug)]
pub struct PageSource {
    pub title: String,
    pub text: String,
}

/// Reads a page from `path`, or from stdin when no path is given
pub fn read_page(path: Option<&Path>) -> Result<PageSource, FindbarError> {
    match path {
        Some(path) => read_file(path),
        None => read_stdin(),
    }
}

fn read_file(path: &Path) -> Result<PageSource, FindbarError> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| FindbarError::InvalidUtf8(path.to_path_buf()))?;

    #[cfg(debug_assertions)]
    log::debug!("Loaded page {:?} ({} bytes)", path, text.len());

    Ok(PageSource {
        title: path.display().to_string(),
        text,
    })
}

fn read_stdin() -> Result<PageSource, FindbarError> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes).map_err(|_| FindbarError::InvalidUtf8(PathBuf::from("stdin")))?;

    Ok(PageSource {
        title: "stdin".to_string(),
        text,
    })
}
