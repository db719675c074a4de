//! 32-bit ARGB display color
//!
//! The display-side color representation used at every boundary of this
//! crate: pixel buffers come in as ARGB, scheme tables go out as ARGB.
//! Perceptual math happens elsewhere ([`crate::color::Lab`], [`crate::hct`]).

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A color in 32-bit ARGB encoding (alpha, red, green, blue; 8 bits each).
///
/// This is the interchange format: image pixels are ARGB in, scheme role
/// colors are ARGB out. The type is `Ord` so color-to-population mappings
/// can use it as a deterministic map key.
///
/// # Example
///
/// ```
/// use seed_scheme::Argb;
///
/// let purple = Argb::new(0xFF6750A4);
/// assert_eq!(purple.red(), 0x67);
/// assert_eq!(purple.to_hex(), "#ff6750a4");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Argb(u32);

impl Argb {
    /// Create a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn new(argb: u32) -> Self {
        Self(argb)
    }

    /// Create a fully opaque color from 8-bit channels.
    ///
    /// # Example
    ///
    /// ```
    /// use seed_scheme::Argb;
    /// assert_eq!(Argb::from_rgb(255, 0, 0), Argb::new(0xFFFF0000));
    /// ```
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Alpha channel (255 = opaque).
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Format as a lowercase 8-hex-digit string, `#aarrggbb`.
    ///
    /// This is the wire format handed to UI layers.
    pub fn to_hex(self) -> String {
        format!("#{:08x}", self.0)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(#{:08x})", self.0)
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Parse an ARGB color from a hex string.
    ///
    /// Supports the following formats, with or without a leading `#`:
    /// - `AARRGGBB` - 8-digit hex with explicit alpha
    /// - `RRGGBB` - 6-digit hex, alpha assumed `FF`
    /// - `RGB` - shorthand 3-digit hex (expands to RRGGBB), alpha `FF`
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is
    /// trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use seed_scheme::Argb;
    ///
    /// let a: Argb = "#6750a4".parse().unwrap();
    /// assert_eq!(a, Argb::new(0xFF6750A4));
    ///
    /// let b: Argb = "80ff0000".parse().unwrap();
    /// assert_eq!(b.alpha(), 0x80);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                // Shorthand: each digit doubles (0xF -> 0xFF)
                let expanded: String = s.chars().flat_map(|c| [c, c]).collect();
                let rgb = u32::from_str_radix(&expanded, 16)?;
                Ok(Self(0xFF00_0000 | rgb))
            }
            6 => {
                let rgb = u32::from_str_radix(s, 16)?;
                Ok(Self(0xFF00_0000 | rgb))
            }
            8 => Ok(Self(u32::from_str_radix(s, 16)?)),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidDigit(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidDigit(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3, 6 or 8 characters)")
            }
            ParseColorError::InvalidDigit(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidDigit(err) => Some(err),
            ParseColorError::InvalidLength => None,
        }
    }
}
