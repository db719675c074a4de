//! CAM16 color appearance model (the subset this crate needs).
//!
//! Only three correlates are computed: lightness J, chroma C and hue h.
//! The forward direction turns a display color into appearance
//! correlates; the inverse turns (J, C, h) back into XYZ. Both run under
//! a single fixed set of "standard" viewing conditions (D65 white, the
//! average surround a phone or desktop UI is designed for).
//!
//! # References
//!
//! Li et al., "Comprehensive color solutions: CAM16, CAT16, and CAM16-UCS",
//! Color Research & Application, 2017.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::color::{xyz_from_argb, y_from_lstar, Argb};
use crate::color::{linrgb_from_xyz, WHITE_POINT_D65};

use super::sanitize_degrees;

/// Precomputed terms of the CAM16 viewing environment.
///
/// Computing these once and sharing them is what keeps the per-color
/// conversions cheap; every field is a pure function of the white point,
/// adapting luminance, background and surround.
#[derive(Debug, Clone)]
pub(crate) struct ViewingConditions {
    n: f64,
    aw: f64,
    nbb: f64,
    ncb: f64,
    c: f64,
    nc: f64,
    rgb_d: [f64; 3],
    fl: f64,
    z: f64,
}

fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    start + (stop - start) * amount
}

impl ViewingConditions {
    /// The standard environment: D65 white point, background L* 50,
    /// "average" surround, no full chromatic-adaptation discounting.
    pub(crate) fn standard() -> &'static ViewingConditions {
        static STANDARD: OnceLock<ViewingConditions> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let adapting_luminance = 200.0 / PI * y_from_lstar(50.0) / 100.0;
            ViewingConditions::make(WHITE_POINT_D65, adapting_luminance, 50.0, 2.0, false)
        })
    }

    fn make(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        // Cone responses of the white point (CAT16 matrix)
        let r_w = white_point[0] * 0.401288 + white_point[1] * 0.650173 + white_point[2] * -0.051461;
        let g_w = white_point[0] * -0.250268 + white_point[1] * 1.204414 + white_point[2] * 0.045854;
        let b_w = white_point[0] * -0.002079 + white_point[1] * 0.048952 + white_point[2] * 0.953127;

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let mut d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        d = d.clamp(0.0, 1.0);
        let nc = f;

        let rgb_d = [
            d * (100.0 / r_w) + 1.0 - d,
            d * (100.0 / g_w) + 1.0 - d,
            d * (100.0 / b_w) + 1.0 - d,
        ];

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance
            + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_afactors = [
            (fl * rgb_d[0] * r_w / 100.0).powf(0.42),
            (fl * rgb_d[1] * g_w / 100.0).powf(0.42),
            (fl * rgb_d[2] * b_w / 100.0).powf(0.42),
        ];
        let rgb_a = [
            400.0 * rgb_afactors[0] / (rgb_afactors[0] + 27.13),
            400.0 * rgb_afactors[1] / (rgb_afactors[1] + 27.13),
            400.0 * rgb_afactors[2] / (rgb_afactors[2] + 27.13),
        ];
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        ViewingConditions {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            z,
        }
    }
}

/// CAM16 appearance correlates of a color: lightness J, chroma C, hue h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cam16 {
    /// Hue angle, degrees in [0, 360)
    pub hue: f64,
    /// Chroma (colorfulness relative to the white point), >= 0
    pub chroma: f64,
    /// Lightness, 0 (black) to 100 (white)
    pub j: f64,
}

impl Cam16 {
    /// Appearance of a display color under the standard viewing conditions.
    pub(crate) fn from_argb(argb: Argb) -> Cam16 {
        Self::from_xyz(xyz_from_argb(argb), ViewingConditions::standard())
    }

    fn from_xyz(xyz: [f64; 3], vc: &ViewingConditions) -> Cam16 {
        let [x, y, z] = xyz;

        // Cone responses (CAT16), chromatic adaptation, response compression
        let r_t = 0.401288 * x + 0.650173 * y - 0.051461 * z;
        let g_t = -0.250268 * x + 1.204414 * y + 0.045854 * z;
        let b_t = -0.002079 * x + 0.048952 * y + 0.953127 * z;

        let r_d = vc.rgb_d[0] * r_t;
        let g_d = vc.rgb_d[1] * g_t;
        let b_d = vc.rgb_d[2] * b_t;

        let r_af = (vc.fl * r_d.abs() / 100.0).powf(0.42);
        let g_af = (vc.fl * g_d.abs() / 100.0).powf(0.42);
        let b_af = (vc.fl * b_d.abs() / 100.0).powf(0.42);
        let r_a = r_d.signum() * 400.0 * r_af / (r_af + 27.13);
        let g_a = g_d.signum() * 400.0 * g_af / (g_af + 27.13);
        let b_a = b_d.signum() * 400.0 * b_af / (b_af + 27.13);

        // Opponent dimensions and auxiliary terms
        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;
        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let hue = sanitize_degrees(b.atan2(a).to_degrees());

        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = t.powf(0.9) * (1.64 - 0.29_f64.powf(vc.n)).powf(0.73);
        let chroma = alpha * (j / 100.0).sqrt();

        Cam16 { hue, chroma, j }
    }
}

/// Inverse model: XYZ of the color with lightness `j`, chroma `chroma`
/// and hue `hue` (degrees) under the standard viewing conditions.
///
/// The result is unclamped; colors outside the sRGB gamut come back as
/// XYZ that maps to linear RGB outside 0..=100.
pub(crate) fn xyz_from_jch(j: f64, chroma: f64, hue: f64) -> [f64; 3] {
    let vc = ViewingConditions::standard();

    let alpha = if chroma == 0.0 || j == 0.0 {
        0.0
    } else {
        chroma / (j / 100.0).sqrt()
    };
    let t = (alpha / (1.64 - 0.29_f64.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);

    let h_rad = hue.to_radians();
    let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
    let ac = vc.aw * (j / 100.0).powf(1.0 / (vc.c * vc.z));
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let p2 = ac / vc.nbb;

    let h_sin = h_rad.sin();
    let h_cos = h_rad.cos();
    let gamma =
        23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
    let a = gamma * h_cos;
    let b = gamma * h_sin;

    let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
    let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
    let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

    let r_cbase = (27.13 * r_a.abs() / (400.0 - r_a.abs())).max(0.0);
    let g_cbase = (27.13 * g_a.abs() / (400.0 - g_a.abs())).max(0.0);
    let b_cbase = (27.13 * b_a.abs() / (400.0 - b_a.abs())).max(0.0);
    let r_c = r_a.signum() * (100.0 / vc.fl) * r_cbase.powf(1.0 / 0.42);
    let g_c = g_a.signum() * (100.0 / vc.fl) * g_cbase.powf(1.0 / 0.42);
    let b_c = b_a.signum() * (100.0 / vc.fl) * b_cbase.powf(1.0 / 0.42);

    let r_f = r_c / vc.rgb_d[0];
    let g_f = g_c / vc.rgb_d[1];
    let b_f = b_c / vc.rgb_d[2];

    // Inverse CAT16
    [
        1.86206786 * r_f - 1.01125463 * g_f + 0.14918677 * b_f,
        0.38752654 * r_f + 0.62144744 * g_f - 0.00897398 * b_f,
        -0.01584150 * r_f - 0.03412294 * g_f + 1.04996444 * b_f,
    ]
}

/// Linear RGB (0..=100 scale, unclamped) for CAM16 (J, C, h).
pub(crate) fn linrgb_from_jch(j: f64, chroma: f64, hue: f64) -> [f64; 3] {
    linrgb_from_xyz(xyz_from_jch(j, chroma, hue))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Argb = Argb::new(0xFFFF0000);
    const GREEN: Argb = Argb::new(0xFF00FF00);
    const BLUE: Argb = Argb::new(0xFF0000FF);
    const WHITE: Argb = Argb::new(0xFFFFFFFF);
    const BLACK: Argb = Argb::new(0xFF000000);

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    /// Known correlates of the sRGB primaries under the standard
    /// viewing conditions. If these drift, every derived scheme color
    /// shifts with them.
    #[test]
    fn test_known_correlates_of_primaries() {
        let red = Cam16::from_argb(RED);
        assert!(approx_eq(red.hue, 27.408, 0.1), "red hue {}", red.hue);
        assert!(
            approx_eq(red.chroma, 113.357, 0.2),
            "red chroma {}",
            red.chroma
        );
        assert!(approx_eq(red.j, 46.445, 0.1), "red j {}", red.j);

        let green = Cam16::from_argb(GREEN);
        assert!(approx_eq(green.hue, 142.139, 0.1), "green hue {}", green.hue);
        assert!(
            approx_eq(green.chroma, 108.410, 0.2),
            "green chroma {}",
            green.chroma
        );
        assert!(approx_eq(green.j, 79.331, 0.1), "green j {}", green.j);

        let blue = Cam16::from_argb(BLUE);
        assert!(approx_eq(blue.hue, 282.788, 0.1), "blue hue {}", blue.hue);
        assert!(
            approx_eq(blue.chroma, 87.230, 0.2),
            "blue chroma {}",
            blue.chroma
        );
        assert!(approx_eq(blue.j, 25.465, 0.1), "blue j {}", blue.j);
    }

    #[test]
    fn test_achromatic_colors_have_negligible_chroma() {
        assert!(Cam16::from_argb(BLACK).chroma < 0.1);
        // White picks up a trace of chroma from the model's surround terms
        assert!(Cam16::from_argb(WHITE).chroma < 3.0);
        assert!(Cam16::from_argb(Argb::from_rgb(128, 128, 128)).chroma < 3.0);
    }

    #[test]
    fn test_lightness_ordering() {
        let j_black = Cam16::from_argb(BLACK).j;
        let j_gray = Cam16::from_argb(Argb::from_rgb(128, 128, 128)).j;
        let j_white = Cam16::from_argb(WHITE).j;
        assert!(j_black < j_gray && j_gray < j_white);
        assert!(j_black < 0.1, "black j {}", j_black);
        assert!(approx_eq(j_white, 100.0, 0.5), "white j {}", j_white);
    }

    #[test]
    fn test_inverse_round_trips_forward() {
        // Forward then inverse should land back on the same linear RGB
        for argb in [RED, GREEN, BLUE, Argb::new(0xFF6750A4), Argb::new(0xFF123456)] {
            let cam = Cam16::from_argb(argb);
            let linrgb = linrgb_from_jch(cam.j, cam.chroma, cam.hue);
            let round_trip = crate::color::argb_from_linrgb(linrgb);
            assert!(
                (i32::from(round_trip.red()) - i32::from(argb.red())).abs() <= 1
                    && (i32::from(round_trip.green()) - i32::from(argb.green())).abs() <= 1
                    && (i32::from(round_trip.blue()) - i32::from(argb.blue())).abs() <= 1,
                "CAM16 round trip failed: {argb:?} -> {round_trip:?}"
            );
        }
    }

    #[test]
    fn test_inverse_is_deterministic() {
        let a = xyz_from_jch(50.0, 40.0, 120.0);
        let b = xyz_from_jch(50.0, 40.0, 120.0);
        assert_eq!(a, b);
    }
}
