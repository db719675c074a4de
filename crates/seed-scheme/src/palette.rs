//! Tonal palettes: hue/chroma families sampled at arbitrary tones.
//!
//! A tonal palette fixes hue and chroma and exposes the whole tone range
//! (0 black to 100 white) of that color family. Scheme expansion never
//! invents colors directly; it only samples palettes at tones.

use crate::hct::{sanitize_degrees, Hct};
use crate::color::Argb;

// The "tonal spot" recipe: how a single seed fans out into the six
// palettes a scheme draws from. Hue offsets and chroma levels are fixed;
// only the seed's hue flows through.
const PRIMARY_CHROMA: f64 = 36.0;
const SECONDARY_CHROMA: f64 = 16.0;
const TERTIARY_HUE_ROTATION: f64 = 60.0;
const TERTIARY_CHROMA: f64 = 24.0;
const NEUTRAL_CHROMA: f64 = 6.0;
const NEUTRAL_VARIANT_CHROMA: f64 = 8.0;
const ERROR_HUE: f64 = 25.0;
const ERROR_CHROMA: f64 = 84.0;

/// A family of colors sharing hue and chroma, varying only in tone.
///
/// # Example
///
/// ```
/// use seed_scheme::TonalPalette;
///
/// let palette = TonalPalette::from_hue_and_chroma(250.0, 36.0);
/// let dark = palette.tone(10.0);
/// let light = palette.tone(90.0);
/// assert_ne!(dark, light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
}

impl TonalPalette {
    /// Create a palette from a hue (degrees) and chroma.
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self {
            hue: sanitize_degrees(hue),
            chroma: chroma.max(0.0),
        }
    }

    /// The palette's hue in degrees, [0, 360).
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// The palette's chroma (an upper bound; extreme tones carry less).
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// The display color of this palette at the given tone (clamped to
    /// [0, 100]); chroma degrades gracefully where the gamut runs out.
    pub fn tone(&self, tone: f64) -> Argb {
        Hct::new(self.hue, self.chroma, tone).to_argb()
    }
}

/// The six tonal palettes a scheme samples from, all derived from one
/// seed by the tonal-spot recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorePalettes {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

impl CorePalettes {
    /// Fan a seed color out into the six palettes.
    ///
    /// Primary carries the seed's hue at a fixed accent chroma;
    /// secondary is the same hue muted; tertiary rotates the hue 60°;
    /// the neutrals are near-gray versions of the seed hue; error is a
    /// fixed clinical red independent of the seed.
    pub fn tonal_spot(seed: Hct) -> Self {
        let hue = seed.hue();
        CorePalettes {
            primary: TonalPalette::from_hue_and_chroma(hue, PRIMARY_CHROMA),
            secondary: TonalPalette::from_hue_and_chroma(hue, SECONDARY_CHROMA),
            tertiary: TonalPalette::from_hue_and_chroma(
                hue + TERTIARY_HUE_ROTATION,
                TERTIARY_CHROMA,
            ),
            neutral: TonalPalette::from_hue_and_chroma(hue, NEUTRAL_CHROMA),
            neutral_variant: TonalPalette::from_hue_and_chroma(hue, NEUTRAL_VARIANT_CHROMA),
            error: TonalPalette::from_hue_and_chroma(ERROR_HUE, ERROR_CHROMA),
        }
    }
}
