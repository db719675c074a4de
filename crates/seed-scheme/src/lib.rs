#![allow(clippy::excessive_precision)]

//! seed-scheme: seed-to-scheme color derivation
//!
//! This library turns a single seed color — chosen directly or sampled
//! from an image — into a complete, named light/dark color scheme in the
//! Material Design 3 style. It is the algorithmic half of a theming
//! system; reactive state and image decoding live in the consuming
//! crate.
//!
//! # Pipeline
//!
//! ```text
//! pixel buffer (ARGB)
//!     |
//!     v
//! quantize()             cluster pixels in CIELAB, bounded k-means
//!     |
//!     v
//! {color: population}
//!     |
//!     v
//! ranked()               score by hue coverage and chroma, drop grays
//!     |
//!     v
//! best candidate  ---->  Scheme::of(seed, dark)
//!                             |
//!                             v
//!                        36 named role colors
//! ```
//!
//! # Quick Start
//!
//! ```
//! use seed_scheme::{quantize, ranked, Argb, Role, Scheme};
//!
//! // Sample a seed from an image's pixels
//! let pixels = vec![Argb::from_rgb(255, 0, 0); 4];
//! let candidates = ranked(&quantize(&pixels, 128));
//! let seed = candidates[0];
//!
//! // Expand it into light and dark schemes
//! let light = Scheme::of(seed, false);
//! let dark = Scheme::of(seed, true);
//! assert_ne!(light.get(Role::Surface), dark.get(Role::Surface));
//! ```
//!
//! # Color Science
//!
//! Three color representations, each chosen for a specific job:
//!
//! | Space | Key property | Used for |
//! |-------|--------------|----------|
//! | **ARGB** | Display encoding | Input pixels, output role colors |
//! | **CIELAB** | Cheap, perceptually reasonable distances | Clustering pixels ([`quantize`]) |
//! | **HCT** | CAM16 hue/chroma + L* tone | Scoring seeds, building tonal palettes |
//!
//! CIELAB is good enough for averaging nearby pixels and an order of
//! magnitude cheaper than CAM16, so the quantizer lives there. Seed
//! scoring and scheme expansion reason about hue, colorfulness and
//! contrast, which is exactly what [`Hct`] encodes: its tone component
//! is CIELAB L*, so picking role colors by tone fixes their contrast
//! relationships independent of hue.
//!
//! Not every (hue, chroma, tone) is displayable. [`Hct::new`] holds hue
//! and tone fixed and reduces chroma until the color fits in sRGB, so
//! tonal palettes degrade gracefully toward gray instead of clipping.
//!
//! # Determinism
//!
//! Every function here is a pure function of its arguments: clustering
//! uses capped, deterministically seeded iterations; ranking breaks all
//! ties explicitly; gamut mapping uses fixed bisection depths. Equal
//! inputs produce byte-for-byte equal outputs, which the consuming
//! crate relies on to cache both appearances of a scheme.

pub mod color;
pub mod hct;
pub mod palette;
pub mod quantize;
pub mod scheme;
pub mod score;


pub use color::{argb_from_lstar, Argb, Lab, ParseColorError};
pub use hct::Hct;
pub use palette::{CorePalettes, TonalPalette};
pub use quantize::quantize;
pub use scheme::{Role, Scheme};
pub use score::ranked;
