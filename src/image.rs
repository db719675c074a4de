//! Source-image loading: PNG decode plus downscale to sampling size.
//!
//! The derivation pipeline only needs a statistically representative
//! pixel buffer, not the full image, so anything larger than
//! [`MAX_SAMPLE_EDGE`] on a side is box-averaged down before it reaches
//! the quantizer. That keeps clustering cost bounded no matter what the
//! user drops on the window.

use std::fs::File;
use std::path::Path;

use seed_scheme::Argb;

use crate::error::StyleError;

/// Longest edge, in pixels, of the buffer handed to the quantizer.
pub const MAX_SAMPLE_EDGE: u32 = 128;

/// Decode a PNG file into an ARGB pixel buffer, downscaled to at most
/// [`MAX_SAMPLE_EDGE`] on the longer side (aspect preserved).
///
/// Accepts 8-bit grayscale, grayscale-alpha, RGB and RGBA images;
/// indexed and sub-8-bit images are expanded by the decoder, 16-bit
/// channels are reduced. Anything else is an
/// [`UnsupportedImage`](StyleError::UnsupportedImage) decode failure.
pub fn load_png(path: &Path) -> Result<Vec<Argb>, StyleError> {
    let mut decoder = png::Decoder::new(File::open(path)?);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let bytes = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(StyleError::UnsupportedImage(format!(
            "bit depth {:?}",
            info.bit_depth
        )));
    }

    let pixels = match info.color_type {
        png::ColorType::Grayscale => bytes.iter().map(|&v| Argb::from_rgb(v, v, v)).collect(),
        png::ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .map(|px| Argb::new((u32::from(px[1]) << 24) | gray_rgb(px[0])))
            .collect(),
        png::ColorType::Rgb => bytes
            .chunks_exact(3)
            .map(|px| Argb::from_rgb(px[0], px[1], px[2]))
            .collect(),
        png::ColorType::Rgba => bytes
            .chunks_exact(4)
            .map(|px| {
                Argb::new(
                    (u32::from(px[3]) << 24)
                        | (u32::from(px[0]) << 16)
                        | (u32::from(px[1]) << 8)
                        | u32::from(px[2]),
                )
            })
            .collect(),
        other => {
            return Err(StyleError::UnsupportedImage(format!(
                "color type {other:?}"
            )))
        }
    };

    Ok(downscale(pixels, info.width, info.height))
}

const fn gray_rgb(v: u8) -> u32 {
    (v as u32) << 16 | (v as u32) << 8 | (v as u32)
}

/// Box-average `pixels` down so neither edge exceeds
/// [`MAX_SAMPLE_EDGE`]; images already small enough pass through
/// untouched.
fn downscale(pixels: Vec<Argb>, width: u32, height: u32) -> Vec<Argb> {
    if width <= MAX_SAMPLE_EDGE && height <= MAX_SAMPLE_EDGE || width == 0 || height == 0 {
        return pixels;
    }

    let scale = f64::from(MAX_SAMPLE_EDGE) / f64::from(width.max(height));
    let target_w = ((f64::from(width) * scale).round() as u32).max(1);
    let target_h = ((f64::from(height) * scale).round() as u32).max(1);

    let mut out = Vec::with_capacity((target_w * target_h) as usize);
    for ty in 0..target_h {
        // Source row range covered by this target row
        let y0 = (u64::from(ty) * u64::from(height) / u64::from(target_h)) as u32;
        let y1 = ((u64::from(ty) + 1) * u64::from(height) / u64::from(target_h)).max(u64::from(y0) + 1) as u32;
        for tx in 0..target_w {
            let x0 = (u64::from(tx) * u64::from(width) / u64::from(target_w)) as u32;
            let x1 = ((u64::from(tx) + 1) * u64::from(width) / u64::from(target_w)).max(u64::from(x0) + 1) as u32;

            let mut sums = [0u64; 4];
            let mut count = 0u64;
            for y in y0..y1.min(height) {
                for x in x0..x1.min(width) {
                    let px = pixels[(u64::from(y) * u64::from(width) + u64::from(x)) as usize];
                    sums[0] += u64::from(px.alpha());
                    sums[1] += u64::from(px.red());
                    sums[2] += u64::from(px.green());
                    sums[3] += u64::from(px.blue());
                    count += 1;
                }
            }
            let avg = |sum: u64| (sum / count) as u8;
            out.push(Argb::new(
                (u32::from(avg(sums[0])) << 24)
                    | (u32::from(avg(sums[1])) << 16)
                    | (u32::from(avg(sums[2])) << 8)
                    | u32::from(avg(sums[3])),
            ));
        }
    }
    out
}
