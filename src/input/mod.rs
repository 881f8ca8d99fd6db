//! Input document loading
//!
//! Plain-text formats are read directly. Binary documents and images need an
//! external [`TextExtractor`]; without one the request is rejected rather
//! than analyzed partially.

use crate::domain::{PrivlensError, Result};
use std::path::Path;

/// Extensions accepted for analysis (lowercase, without the dot)
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "csv", "pdf", "docx", "png", "jpg", "jpeg"];

/// Extensions read as UTF-8 without an extractor
const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "csv"];

/// External text extraction for binary document and image formats
pub trait TextExtractor: Send + Sync {
    /// Whether this extractor handles the (lowercase) extension
    fn supports(&self, extension: &str) -> bool;

    /// Extract plain text from the file
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Lowercase extension of `path`, validated against [`ALLOWED_EXTENSIONS`]
pub fn validate_extension(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(PrivlensError::UnsupportedFileType {
            extension: if extension.is_empty() {
                "(none)".to_string()
            } else {
                format!(".{extension}")
            },
            allowed: ALLOWED_EXTENSIONS
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Check that `text` is non-empty and at most `max_chars` characters long
pub fn validate_text(text: &str, max_chars: usize) -> Result<()> {
    if text.is_empty() {
        return Err(PrivlensError::EmptyInput);
    }
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(PrivlensError::InputTooLarge {
            chars,
            max: max_chars,
        });
    }
    Ok(())
}

/// Load the text of `path` for analysis
pub fn load_text(path: &Path, extractor: Option<&dyn TextExtractor>) -> Result<String> {
    let extension = validate_extension(path)?;

    if PLAIN_TEXT_EXTENSIONS.contains(&extension.as_str()) {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PrivlensError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "Loaded text input");
        return Ok(text);
    }

    match extractor {
        Some(extractor) if extractor.supports(&extension) => extractor.extract_text(path),
        _ => Err(PrivlensError::ExtractorUnavailable(format!(".{extension}"))),
    }
}
