//! Photo encoding.
//!
//! Photos are embedded directly in the event record as base64 data URIs, so
//! an event is fully self-contained with no file-path indirection.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{JournalError, JournalResult};

/// Read an image file and encode it as a `data:<mime>;base64,...` URI.
pub fn read_as_data_uri(path: &Path) -> JournalResult<String> {
    let mime = mime_for_path(path)?;
    let bytes = std::fs::read(path)?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Decode a data URI back into its mime type and raw bytes.
pub fn decode_data_uri(uri: &str) -> JournalResult<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| JournalError::Photo("not a data URI".to_string()))?;
    let (mime, encoded) = rest
        .split_once(";base64,")
        .ok_or_else(|| JournalError::Photo("missing base64 payload".to_string()))?;

    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| JournalError::Photo(format!("invalid base64 photo data: {e}")))?;
    Ok((mime.to_string(), bytes))
}

/// File extension to use when writing a decoded photo back to disk.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        _ => "img",
    }
}

fn mime_for_path(path: &Path) -> JournalResult<&'static str> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "bmp" => Ok("image/bmp"),
        other => Err(JournalError::Photo(format!(
            "unsupported image type: \"{}\" ({})",
            other,
            path.display()
        ))),
    }
}
