//! Text loading for template files

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
///
/// Templates are not guaranteed to be valid UTF-8; invalid sequences are
/// replaced rather than failing the whole file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let bytes = fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(path = %path, "Decoding non-UTF-8 template lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
