//! Shared error types.

use thiserror::Error;

/// A field name that is not one of the fixed profile keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

/// A dial prefix outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported country code: {0}")]
pub struct UnknownCountryCode(pub String);

/// Problems with a selected picture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PictureError {
    #[error("picture is too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },
    #[error("unsupported picture type: {0}")]
    UnsupportedType(String),
    #[error("failed to read picture: {0}")]
    Read(String),
}

/// Failure reported while handing a payload to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("picture could not be attached: {0}")]
    Picture(#[from] PictureError),
    #[error("network error: {0}")]
    Network(String),
}

impl SubmitError {
    /// The generic text shown to the end user for any submission failure.
    pub fn user_message(&self) -> &'static str {
        "Submit failed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_error_converts_into_submit_error() {
        let err: SubmitError = PictureError::Read("eof".into()).into();
        assert_eq!(err.to_string(), "picture could not be attached: failed to read picture: eof");
    }

    #[test]
    fn every_submit_error_has_the_same_user_message() {
        let errors = [
            SubmitError::Network("timeout".into()),
            SubmitError::Picture(PictureError::Read("eof".into())),
        ];
        for err in errors {
            assert_eq!(err.user_message(), "Submit failed");
        }
    }
}
