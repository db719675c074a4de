//! Color types and conversion utilities
//!
//! This module provides the display-side color type and the CIE color
//! plumbing the rest of the crate builds on.
//!
//! # Color Spaces
//!
//! - **ARGB**: 32-bit display encoding (8 bits per channel). Use for I/O.
//! - **CIELAB**: Perceptually motivated space used for clustering pixels.
//!
//! The CAM16-based hue/chroma/tone space lives in [`crate::hct`]; it uses
//! the XYZ plumbing defined here.
//!
//! # Example
//!
//! ```
//! use seed_scheme::{Argb, Lab};
//!
//! // Parse a UI color string
//! let seed: Argb = "#6750A4".parse().unwrap();
//!
//! // Convert to Lab for perceptual math
//! let lab = Lab::from(seed);
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

mod argb;
mod lab;

pub use argb::{Argb, ParseColorError};
pub use lab::{argb_from_lstar, Lab};

pub(crate) use lab::{
    argb_from_linrgb, linrgb_from_xyz, xyz_from_argb, y_from_lstar, WHITE_POINT_D65,
};
