//! CIE color plumbing: sRGB linearization, XYZ, CIELAB and the L* scale.
//!
//! All math is `f64`. Linear RGB and XYZ components are on a 0..=100
//! scale, matching the CIE convention where the D65 white point has
//! Y = 100.
//!
//! # References
//!
//! IEC 61966-2-1 (sRGB transfer function), CIE 15:2004 (XYZ, L*a*b*).

use super::argb::Argb;

/// The D65 standard illuminant in XYZ.
pub(crate) const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

// Exact inverse of SRGB_TO_XYZ. The two matrices must stay a matched
// pair or round trips drift; test_matrix_pair_composes_to_identity
// checks the product.
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.241377479238869, -1.5376652402851856, -0.4988536684626807],
    [-0.9691452513005325, 1.8758853451067878, 0.04156585616912063],
    [0.055620936896913074, -0.2039552456474213, 1.057179911122034],
];

// CIELAB segment constants: e = (6/29)^3, kappa = (29/3)^3
const LAB_E: f64 = 216.0 / 24389.0;
const LAB_KAPPA: f64 = 24389.0 / 27.0;

/// Gamma-decode one 8-bit sRGB channel to linear light on a 0..=100 scale.
pub(crate) fn linearized(component: u8) -> f64 {
    let normalized = f64::from(component) / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Gamma-encode one linear channel (0..=100 scale) to an 8-bit sRGB value.
///
/// Out-of-range input is clamped; this is where gamut clamping of
/// reverse conversions physically happens.
pub(crate) fn delinearized(component: f64) -> u8 {
    let normalized = component / 100.0;
    let encoded = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    (encoded * 255.0).round().clamp(0.0, 255.0) as u8
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_E {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

fn lab_invf(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > LAB_E {
        ft3
    } else {
        (116.0 * ft - 16.0) / LAB_KAPPA
    }
}

/// Relative luminance Y (0..=100) for a given L* tone (0..=100).
pub(crate) fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_invf((lstar + 16.0) / 116.0)
}

/// L* tone (0..=100) for a given relative luminance Y (0..=100).
///
/// Production code only goes tone -> Y (the gamut fit searches on Y);
/// the reverse direction exists to verify that pair in tests.
#[cfg(test)]
fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

/// Convert an ARGB color to XYZ (D65, Y on a 0..=100 scale).
pub(crate) fn xyz_from_argb(argb: Argb) -> [f64; 3] {
    let r = linearized(argb.red());
    let g = linearized(argb.green());
    let b = linearized(argb.blue());
    [
        SRGB_TO_XYZ[0][0] * r + SRGB_TO_XYZ[0][1] * g + SRGB_TO_XYZ[0][2] * b,
        SRGB_TO_XYZ[1][0] * r + SRGB_TO_XYZ[1][1] * g + SRGB_TO_XYZ[1][2] * b,
        SRGB_TO_XYZ[2][0] * r + SRGB_TO_XYZ[2][1] * g + SRGB_TO_XYZ[2][2] * b,
    ]
}

/// Convert XYZ to linear RGB (components on a 0..=100 scale, unclamped).
///
/// Out-of-gamut XYZ produces components outside 0..=100; callers that
/// need an in-gamut test inspect the result before encoding.
pub(crate) fn linrgb_from_xyz(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    [
        XYZ_TO_SRGB[0][0] * x + XYZ_TO_SRGB[0][1] * y + XYZ_TO_SRGB[0][2] * z,
        XYZ_TO_SRGB[1][0] * x + XYZ_TO_SRGB[1][1] * y + XYZ_TO_SRGB[1][2] * z,
        XYZ_TO_SRGB[2][0] * x + XYZ_TO_SRGB[2][1] * y + XYZ_TO_SRGB[2][2] * z,
    ]
}

/// Encode linear RGB (0..=100 scale) into an opaque ARGB color, clamping
/// each channel into gamut.
pub(crate) fn argb_from_linrgb(linrgb: [f64; 3]) -> Argb {
    Argb::from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

/// The opaque gray with the given L* tone (0 = black, 100 = white).
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let y = y_from_lstar(lstar.clamp(0.0, 100.0));
    let component = delinearized(y);
    Argb::from_rgb(component, component, component)
}

/// A color in CIELAB (D65).
///
/// Used for clustering pixels: Euclidean distance in Lab tracks perceived
/// color difference well enough for population-weighted averaging, and
/// the conversion is a fraction of the cost of the CAM16 space used for
/// scoring and scheme expansion.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white). Identical to tone.
/// - `a`: Green-red axis.
/// - `b`: Blue-yellow axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness (L*): 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis: negative = green, positive = red
    pub a: f64,
    /// Blue-yellow axis: negative = blue, positive = yellow
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance (perceptual distance metric).
    ///
    /// Squared to avoid the sqrt when only comparing distances.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

impl From<Argb> for Lab {
    fn from(argb: Argb) -> Self {
        let xyz = xyz_from_argb(argb);
        let fx = lab_f(xyz[0] / WHITE_POINT_D65[0]);
        let fy = lab_f(xyz[1] / WHITE_POINT_D65[1]);
        let fz = lab_f(xyz[2] / WHITE_POINT_D65[2]);
        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Argb {
    /// Convert back to display ARGB, clamped to the sRGB gamut.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;
        let xyz = [
            lab_invf(fx) * WHITE_POINT_D65[0],
            lab_invf(fy) * WHITE_POINT_D65[1],
            lab_invf(fz) * WHITE_POINT_D65[2],
        ];
        argb_from_linrgb(linrgb_from_xyz(xyz))
    }
}
