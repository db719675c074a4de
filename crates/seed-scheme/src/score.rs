//! Seed ranking: order quantized colors by suitability as a UI accent.
//!
//! Grays make poor accents, and a photo of a forest should not put five
//! near-identical greens at the top of the list. The ranking therefore:
//!
//! 1. Measures each color in HCT and drops near-achromatic ones.
//! 2. Smears population over a hue neighborhood, so a hue that covers a
//!    lot of the image scores well even when split across many similar
//!    colors, and a hue that barely appears is dropped.
//! 3. Scores by smoothed population share plus distance from a target
//!    chroma, keeping only one winner per hue neighborhood.
//!
//! The output may legitimately be empty (an all-gray image has no usable
//! accent); callers keep their previous seed in that case.

use std::collections::BTreeMap;

use crate::color::Argb;
use crate::hct::{difference_degrees, sanitize_degrees, Hct};

/// Colors below this chroma read as gray and are never suggested.
const CUTOFF_CHROMA: f64 = 5.0;
/// Hues covering less than this share of the image are noise.
const CUTOFF_EXCITED_PROPORTION: f64 = 0.01;
/// The chroma an ideal accent color would have.
const TARGET_CHROMA: f64 = 48.0;
/// Weight of the smoothed population share (scaled to percent).
const WEIGHT_PROPORTION: f64 = 0.7;
/// Per-unit bonus for chroma above the target.
const WEIGHT_CHROMA_ABOVE: f64 = 0.3;
/// Per-unit penalty for chroma below the target.
const WEIGHT_CHROMA_BELOW: f64 = 0.1;
/// Half-width, in degrees, of the hue window used both for population
/// smoothing and for deduplicating near-identical hues.
const HUE_WINDOW: f64 = 15.0;

struct Candidate {
    argb: Argb,
    hue: f64,
    chroma: f64,
    population: u32,
    excited_proportion: f64,
    score: f64,
}

/// Rank quantized colors by suitability as a seed, most suitable first.
///
/// Takes the color-to-population mapping produced by
/// [`quantize`](crate::quantize()) and returns an ordered list of
/// distinct-hue candidates. Returns an empty vec when every input color
/// is too gray or too rare; ordering is fully deterministic (score,
/// then chroma, then population, then hue).
///
/// # Example
///
/// ```
/// use seed_scheme::{quantize, ranked, Argb};
///
/// let red = Argb::from_rgb(255, 0, 0);
/// let candidates = ranked(&quantize(&[red; 4], 128));
/// assert_eq!(candidates, vec![red]);
/// ```
pub fn ranked(colors_to_population: &BTreeMap<Argb, u32>) -> Vec<Argb> {
    let total: u64 = colors_to_population
        .values()
        .map(|&n| u64::from(n))
        .sum();
    if total == 0 {
        return Vec::new();
    }

    // Population share per integer hue
    let mut hue_proportions = [0.0f64; 360];
    let measured: Vec<(Argb, Hct, u32)> = colors_to_population
        .iter()
        .map(|(&argb, &population)| (argb, Hct::from_argb(argb), population))
        .collect();
    for (_, hct, population) in &measured {
        let hue = sanitize_degrees(hct.hue()).floor() as usize % 360;
        hue_proportions[hue] += f64::from(*population) / total as f64;
    }

    let mut candidates: Vec<Candidate> = Vec::new();
    for (argb, hct, population) in measured {
        let hue = sanitize_degrees(hct.hue());
        let hue_index = hue.floor() as i32;
        let mut excited_proportion = 0.0;
        let window = HUE_WINDOW.round() as i32;
        for offset in -window..=window {
            let i = (hue_index + offset).rem_euclid(360) as usize;
            excited_proportion += hue_proportions[i];
        }

        if hct.chroma() < CUTOFF_CHROMA || excited_proportion <= CUTOFF_EXCITED_PROPORTION {
            continue;
        }

        let proportion_score = excited_proportion * 100.0 * WEIGHT_PROPORTION;
        let chroma_weight = if hct.chroma() < TARGET_CHROMA {
            WEIGHT_CHROMA_BELOW
        } else {
            WEIGHT_CHROMA_ABOVE
        };
        let chroma_score = (hct.chroma() - TARGET_CHROMA) * chroma_weight;

        candidates.push(Candidate {
            argb,
            hue,
            chroma: hct.chroma(),
            population,
            excited_proportion,
            score: proportion_score + chroma_score,
        });
    }

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.chroma.total_cmp(&a.chroma))
            .then(b.population.cmp(&a.population))
            .then(a.hue.total_cmp(&b.hue))
    });

    // One winner per hue neighborhood
    let mut winners: Vec<&Candidate> = Vec::new();
    for candidate in &candidates {
        if winners
            .iter()
            .all(|w| difference_degrees(w.hue, candidate.hue) > HUE_WINDOW)
        {
            winners.push(candidate);
        }
    }
    winners.into_iter().map(|c| c.argb).collect()
}
