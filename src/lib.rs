//! stylekit — seed-driven application theming.
//!
//! Builds Material-style color scheme tables from a single seed color
//! and keeps them reactive: change the seed (directly, from a hex
//! string, or by pointing at an image) and every subscriber hears
//! about exactly the fields that changed.
//!
//! The color science lives in the embedded [`seed_scheme`] crate; this
//! crate adds the stateful manager, PNG decoding, and the serializable
//! wire format on top.
//!
//! ```no_run
//! use stylekit::StyleManager;
//!
//! let mut style = StyleManager::new();
//! style.set_source_image("wallpaper.png")?;
//! println!("{}", serde_json::to_string_pretty(&style.snapshot())?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod image;
pub mod state;

pub use error::StyleError;
pub use state::{scheme_to_map, ObserverId, StyleManager, ThemeEvent, ThemeSnapshot, DEFAULT_SEED};

// Re-export the color pipeline so downstream users need only one crate.
pub use seed_scheme::{Argb, Hct, Role, Scheme};
