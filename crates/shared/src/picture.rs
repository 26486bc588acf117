//! Picture helpers: preview data URIs and the advisory upload limits.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::PictureError;

/// Default maximum picture size (5 MB)
pub const DEFAULT_MAX_PICTURE_BYTES: u64 = 5 * 1024 * 1024;

/// Default accepted MIME types
pub const DEFAULT_PICTURE_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Resolve the MIME type for a picture, falling back to the file extension
/// when the picker did not report one.
pub fn picture_mime(content_type: Option<&str>, filename: &str) -> String {
    if let Some(ct) = content_type.map(str::trim).filter(|ct| !ct.is_empty()) {
        return ct.to_string();
    }

    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// Encode picture bytes as a `data:` URI suitable for an `img` source.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Size and type limits shown next to the picture picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureLimits {
    pub max_bytes: u64,
    pub allowed_types: Vec<String>,
}

impl Default for PictureLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_PICTURE_BYTES,
            allowed_types: DEFAULT_PICTURE_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl PictureLimits {
    pub fn check(&self, size: u64, mime: &str) -> Result<(), PictureError> {
        if size > self.max_bytes {
            return Err(PictureError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }
        if !self.allowed_types.iter().any(|t| t.eq_ignore_ascii_case(mime)) {
            return Err(PictureError::UnsupportedType(mime.to_string()));
        }
        Ok(())
    }

    /// Short advisory text, e.g. "Max 5MB. JPG, PNG".
    pub fn hint(&self) -> String {
        let kinds: Vec<String> = self
            .allowed_types
            .iter()
            .map(|t| match t.as_str() {
                "image/jpeg" => "JPG".to_string(),
                other => other.trim_start_matches("image/").to_ascii_uppercase(),
            })
            .collect();

        let mb = self.max_bytes as f64 / (1024.0 * 1024.0);
        let size = if mb.fract() == 0.0 {
            format!("{}MB", mb as u64)
        } else {
            format!("{:.1}MB", mb)
        };

        format!("Max {}. {}", size, kinds.join(", "))
    }
}
