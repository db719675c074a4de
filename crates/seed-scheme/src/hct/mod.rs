//! HCT: hue, chroma, tone.
//!
//! The perceptual coordinate system the whole derivation pipeline works
//! in. Hue and chroma come from the CAM16 appearance model; tone is
//! CIELAB L*. The combination means "same tone" guarantees the same
//! contrast behavior regardless of hue, which is what lets a scheme pick
//! role colors purely by (palette, tone) and still meet contrast
//! expectations.
//!
//! Not every (hue, chroma, tone) triple is displayable in sRGB.
//! [`Hct::new`] finds the closest displayable color by holding hue and
//! tone fixed and giving up chroma, so a stored `Hct` always describes a
//! real display color.

mod cam16;

pub(crate) use cam16::Cam16;

use crate::color::{argb_from_linrgb, argb_from_lstar, y_from_lstar, Argb, Lab};

/// Wrap an angle into [0, 360).
pub(crate) fn sanitize_degrees(degrees: f64) -> f64 {
    let d = degrees % 360.0;
    if d < 0.0 {
        d + 360.0
    } else {
        d
    }
}

/// Smallest angle between two hues, in degrees (0..=180).
pub(crate) fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

// Gamut search bounds. The outer chroma search stops once the window is
// narrower than a visually indistinguishable step; the inner lightness
// bisection always runs a fixed number of halvings so results are
// bit-for-bit reproducible.
const CHROMA_SEARCH_WINDOW: f64 = 0.4;
const TONE_BISECTION_STEPS: u32 = 24;
const GAMUT_EPSILON: f64 = 1e-3;

/// A color described by CAM16 hue and chroma plus L* tone.
///
/// Always corresponds to a displayable sRGB color: construction clamps
/// into gamut, so the stored hue/chroma/tone are re-measured from the
/// color that will actually be shown.
///
/// # Example
///
/// ```
/// use seed_scheme::Hct;
///
/// let hct = Hct::new(250.0, 40.0, 50.0);
/// assert!((hct.tone() - 50.0).abs() < 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// The displayable color closest to (hue, chroma, tone).
    ///
    /// Hue is taken mod 360, tone is clamped to [0, 100], and chroma is
    /// reduced as far as needed to land inside the sRGB gamut. The
    /// search is deterministic and bounded (fixed bisection depths), so
    /// equal inputs always produce equal colors.
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    /// Measure the appearance of a display color.
    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Hct {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: Lab::from(argb).l,
            argb,
        }
    }

    /// Hue angle in degrees, [0, 360).
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// CAM16 chroma, >= 0.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// L* tone, 0 (black) to 100 (white).
    #[inline]
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// The underlying display color.
    #[inline]
    pub fn to_argb(&self) -> Argb {
        self.argb
    }
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Hct::from_argb(argb)
    }
}

/// Find the displayable ARGB for (hue, chroma, tone).
fn solve_to_argb(hue: f64, chroma: f64, tone: f64) -> Argb {
    let hue = sanitize_degrees(hue);
    let chroma = chroma.max(0.0);
    let tone = tone.clamp(0.0, 100.0);

    // Achromatic requests and the tone extremes are exactly the gray axis
    if chroma < 0.5 || tone < 0.0001 || tone > 99.9999 {
        return argb_from_lstar(tone);
    }

    if let Some(argb) = fit_in_gamut(hue, chroma, tone) {
        return argb;
    }

    // Requested chroma is not displayable at this hue and tone. Binary
    // search the largest chroma that is.
    let mut low = 0.0;
    let mut high = chroma;
    let mut answer = argb_from_lstar(tone);
    while high - low > CHROMA_SEARCH_WINDOW {
        let mid = (low + high) / 2.0;
        match fit_in_gamut(hue, mid, tone) {
            Some(argb) => {
                answer = argb;
                low = mid;
            }
            None => high = mid,
        }
    }
    answer
}

/// Bisect CAM16 lightness until the color's luminance matches the
/// requested tone, then accept it only if it is inside the sRGB gamut.
fn fit_in_gamut(hue: f64, chroma: f64, tone: f64) -> Option<Argb> {
    let target_y = y_from_lstar(tone);
    let mut j_low = 0.0;
    let mut j_high = 100.0;
    for _ in 0..TONE_BISECTION_STEPS {
        let j_mid = (j_low + j_high) / 2.0;
        let xyz = cam16::xyz_from_jch(j_mid, chroma, hue);
        if xyz[1] < target_y {
            j_low = j_mid;
        } else {
            j_high = j_mid;
        }
    }
    let j = (j_low + j_high) / 2.0;
    let linrgb = cam16::linrgb_from_jch(j, chroma, hue);
    if linrgb
        .iter()
        .any(|&c| c < -GAMUT_EPSILON || c > 100.0 + GAMUT_EPSILON)
    {
        return None;
    }
    Some(argb_from_linrgb(linrgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_sanitize_degrees() {
        assert_eq!(sanitize_degrees(0.0), 0.0);
        assert_eq!(sanitize_degrees(360.0), 0.0);
        assert_eq!(sanitize_degrees(-30.0), 330.0);
        assert_eq!(sanitize_degrees(725.0), 5.0);
    }

    #[test]
    fn test_difference_degrees() {
        assert_eq!(difference_degrees(0.0, 0.0), 0.0);
        assert_eq!(difference_degrees(10.0, 350.0), 20.0);
        assert_eq!(difference_degrees(350.0, 10.0), 20.0);
        assert_eq!(difference_degrees(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_tone_extremes_are_black_and_white() {
        assert_eq!(Hct::new(120.0, 80.0, 0.0).to_argb(), Argb::from_rgb(0, 0, 0));
        assert_eq!(
            Hct::new(120.0, 80.0, 100.0).to_argb(),
            Argb::from_rgb(255, 255, 255)
        );
    }

    #[test]
    fn test_achromatic_request_yields_gray() {
        let hct = Hct::new(200.0, 0.0, 50.0);
        let argb = hct.to_argb();
        assert_eq!(argb.red(), argb.green());
        assert_eq!(argb.green(), argb.blue());
        assert!(approx_eq(hct.tone(), 50.0, 0.5));
    }

    #[test]
    fn test_requested_tone_is_preserved() {
        for hue in [0.0, 45.0, 120.0, 210.0, 300.0] {
            for tone in [10.0, 25.0, 50.0, 75.0, 90.0] {
                let hct = Hct::new(hue, 30.0, tone);
                assert!(
                    approx_eq(hct.tone(), tone, 0.5),
                    "tone drifted for hue {hue}: requested {tone}, got {}",
                    hct.tone()
                );
            }
        }
    }

    #[test]
    fn test_requested_hue_is_preserved() {
        for hue in [15.0, 90.0, 180.0, 265.0, 330.0] {
            let hct = Hct::new(hue, 40.0, 50.0);
            assert!(
                difference_degrees(hct.hue(), hue) < 2.0,
                "hue drifted: requested {hue}, got {}",
                hct.hue()
            );
        }
    }

    #[test]
    fn test_impossible_chroma_is_reduced_not_errored() {
        // No sRGB color has chroma 200; the solver must return the most
        // chromatic color at this hue and tone instead
        let hct = Hct::new(250.0, 200.0, 50.0);
        assert!(hct.chroma() < 200.0);
        assert!(hct.chroma() > 10.0, "chroma collapsed: {}", hct.chroma());
        assert!(approx_eq(hct.tone(), 50.0, 0.5));
        assert!(difference_degrees(hct.hue(), 250.0) < 3.0);
    }

    #[test]
    fn test_modest_chroma_is_met_exactly() {
        // Chroma 16 at mid tones is comfortably inside the gamut for
        // every hue; the solver must not shave it
        for hue in (0..360).step_by(30) {
            let hct = Hct::new(f64::from(hue), 16.0, 50.0);
            assert!(
                approx_eq(hct.chroma(), 16.0, 1.0),
                "chroma missed at hue {hue}: {}",
                hct.chroma()
            );
        }
    }

    #[test]
    fn test_construction_is_deterministic() {
        let a = Hct::new(311.0, 36.0, 40.0);
        let b = Hct::new(311.0, 36.0, 40.0);
        assert_eq!(a.to_argb(), b.to_argb());
    }

    #[test]
    fn test_round_trip_from_display_color() {
        // Measuring a display color and reconstructing from its own
        // coordinates must land back on (essentially) the same color
        for argb in [
            Argb::new(0xFF6750A4),
            Argb::new(0xFF0061A4),
            Argb::new(0xFF9A4058),
        ] {
            let hct = Hct::from_argb(argb);
            let rebuilt = Hct::new(hct.hue(), hct.chroma(), hct.tone()).to_argb();
            assert!(
                (i32::from(rebuilt.red()) - i32::from(argb.red())).abs() <= 2
                    && (i32::from(rebuilt.green()) - i32::from(argb.green())).abs() <= 2
                    && (i32::from(rebuilt.blue()) - i32::from(argb.blue())).abs() <= 2,
                "HCT round trip failed: {argb:?} -> {rebuilt:?}"
            );
        }
    }
}
