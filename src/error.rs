use seed_scheme::ParseColorError;
use thiserror::Error;

/// Errors surfaced by the theme state.
///
/// None of these are fatal: every failure leaves the last-known-good
/// state in place and emits no notifications, so callers can simply
/// report and move on.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The image locator could not be read at all.
    #[error("failed to read source image: {0}")]
    Io(#[from] std::io::Error),

    /// The image bytes could not be decoded.
    #[error("failed to decode source image: {0}")]
    Decode(#[from] png::DecodingError),

    /// The image decoded but is in a layout we do not handle.
    #[error("unsupported source image format: {0}")]
    UnsupportedImage(String),

    /// Every sampled color was filtered out (for example, a grayscale
    /// image); the previous seed is retained.
    #[error("no sampled color is suitable as a seed")]
    NoSuitableSeed,

    /// A malformed color string was rejected before any mutation.
    #[error("invalid seed color: {0}")]
    InvalidColor(#[from] ParseColorError),
}

impl StyleError {
    /// Whether this is part of the decode-failure family (locator could
    /// not be resolved to pixel data).
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            StyleError::Io(_) | StyleError::Decode(_) | StyleError::UnsupportedImage(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_family() {
        let io: StyleError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(io.is_decode_failure());
        assert!(StyleError::UnsupportedImage("interlaced".into()).is_decode_failure());
        assert!(!StyleError::NoSuitableSeed.is_decode_failure());

        let parse = "#xyz".parse::<seed_scheme::Argb>().unwrap_err();
        assert!(!StyleError::from(parse).is_decode_failure());
    }
}
