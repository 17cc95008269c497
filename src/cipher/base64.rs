use crate::error::{CifraError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Encode text as standard Base64 over its UTF-8 bytes
pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 back to UTF-8 text
pub fn base64_decode(text: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(text)
        .map_err(|e| CifraError::InvalidBase64(format!("decoding failed: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| CifraError::InvalidBase64(format!("decoded bytes are not UTF-8: {}", e)))
}
