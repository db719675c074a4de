//! Color reduction: cluster a pixel buffer into representative colors.
//!
//! Bounded k-means in CIELAB. The pixel buffer is first collapsed to
//! distinct colors with populations; if there are no more distinct
//! colors than requested, those exact colors and counts are the answer.
//! Otherwise Lloyd iterations run under a fixed cap, weighted by
//! population, with deterministic seeding: initial centroids are the
//! most populous distinct colors (ties broken by packed ARGB value).
//!
//! Everything is a pure function of the input: no randomness, stable
//! first-occurrence ordering of the distinct-color pass, and
//! strict-less-than nearest-centroid comparisons so ties always resolve
//! to the lowest cluster index.

use std::collections::{BTreeMap, HashMap};

use crate::color::{Argb, Lab};

/// Iteration cap for the Lloyd loop. Convergence usually happens well
/// before this; the cap bounds worst-case work on adversarial inputs.
const MAX_ITERATIONS: usize = 10;

/// Reduce `pixels` to at most `max_colors` representative colors, each
/// paired with the number of pixels it stands for.
///
/// Pixels that are not fully opaque are ignored, as are all pixels when
/// `max_colors` is 0. An empty (or fully transparent) buffer produces an
/// empty map rather than an error.
///
/// # Example
///
/// ```
/// use seed_scheme::{quantize, Argb};
///
/// let red = Argb::from_rgb(255, 0, 0);
/// let counts = quantize(&[red; 4], 128);
/// assert_eq!(counts.len(), 1);
/// assert_eq!(counts[&red], 4);
/// ```
pub fn quantize(pixels: &[Argb], max_colors: usize) -> BTreeMap<Argb, u32> {
    if max_colors == 0 {
        return BTreeMap::new();
    }

    // Distinct colors in first-occurrence order, with populations
    let mut order: Vec<Argb> = Vec::new();
    let mut counts: HashMap<Argb, u32> = HashMap::new();
    for &pixel in pixels {
        if pixel.alpha() < 255 {
            continue;
        }
        counts
            .entry(pixel)
            .and_modify(|n| *n += 1)
            .or_insert_with(|| {
                order.push(pixel);
                1
            });
    }

    if order.len() <= max_colors {
        return order.into_iter().map(|c| (c, counts[&c])).collect();
    }

    let points: Vec<Lab> = order.iter().map(|&c| Lab::from(c)).collect();
    let weights: Vec<u32> = order.iter().map(|c| counts[c]).collect();

    // Seed centroids with the most populous colors
    let mut seed_order: Vec<usize> = (0..order.len()).collect();
    seed_order.sort_by(|&a, &b| weights[b].cmp(&weights[a]).then(order[a].cmp(&order[b])));
    let mut centroids: Vec<Lab> = seed_order[..max_colors]
        .iter()
        .map(|&i| points[i])
        .collect();

    let mut assignment: Vec<usize> = points.iter().map(|&p| nearest(p, &centroids)).collect();

    for _ in 0..MAX_ITERATIONS {
        recompute_centroids(&points, &weights, &assignment, &mut centroids);

        let mut changed = false;
        for (i, &point) in points.iter().enumerate() {
            let best = nearest(point, &centroids);
            if best != assignment[i] {
                assignment[i] = best;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    // Map centroids back to display colors; clusters that round to the
    // same ARGB merge their populations
    let mut populations = vec![0u64; centroids.len()];
    for (i, &cluster) in assignment.iter().enumerate() {
        populations[cluster] += u64::from(weights[i]);
    }
    let mut result: BTreeMap<Argb, u32> = BTreeMap::new();
    for (cluster, &population) in populations.iter().enumerate() {
        if population == 0 {
            continue;
        }
        let argb = Argb::from(centroids[cluster]);
        let count = u32::try_from(population).unwrap_or(u32::MAX);
        *result.entry(argb).or_insert(0) += count;
    }
    result
}

fn nearest(point: Lab, centroids: &[Lab]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, &centroid) in centroids.iter().enumerate() {
        let distance = point.distance_squared(centroid);
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

fn recompute_centroids(
    points: &[Lab],
    weights: &[u32],
    assignment: &[usize],
    centroids: &mut [Lab],
) {
    let mut sums = vec![(0.0f64, 0.0f64, 0.0f64, 0.0f64); centroids.len()];
    for (i, &cluster) in assignment.iter().enumerate() {
        let w = f64::from(weights[i]);
        let entry = &mut sums[cluster];
        entry.0 += points[i].l * w;
        entry.1 += points[i].a * w;
        entry.2 += points[i].b * w;
        entry.3 += w;
    }
    for (cluster, sum) in sums.into_iter().enumerate() {
        // Empty clusters keep their previous centroid
        if sum.3 > 0.0 {
            centroids[cluster] = Lab::new(sum.0 / sum.3, sum.1 / sum.3, sum.2 / sum.3);
        }
    }
}
