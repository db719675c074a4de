//! Reactive theme state: seed in, notified scheme tables out.
//!
//! [`StyleManager`] owns the full theme tuple — seed color, dark flag,
//! and the light and dark scheme tables — and keeps the invariant that
//! both tables are always derived from the current seed. Mutations are
//! no-ops when the value is unchanged; real changes recompute whatever
//! is affected *before* committing anything, then notify subscribers
//! once per changed field. Toggling the dark flag is therefore a pure
//! republish (both appearances are already cached), and a failed image
//! reseed leaves the state exactly as it was.
//!
//! The manager is single-owner by design: it takes `&mut self` for
//! mutation and holds plain fields. Callers that share it across
//! threads wrap it in their own lock.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use seed_scheme::{quantize, ranked, Argb, Scheme};

use crate::error::StyleError;
use crate::image;

/// The default seed: the Material baseline purple.
pub const DEFAULT_SEED: Argb = Argb::new(0xFF6750A4);

/// Cap on the number of representative colors sampled from an image.
const MAX_IMAGE_COLORS: usize = 128;

/// A change to one observable field of the theme state.
///
/// `CurrentScheme` is a view change: it fires when the scheme selected
/// by the dark flag changes identity, whether because the flag flipped
/// or because the seed replaced both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEvent {
    SeedColorChanged,
    DarkThemeChanged,
    LightSchemeChanged,
    DarkSchemeChanged,
    CurrentSchemeChanged,
}

/// Handle returned by [`StyleManager::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(ThemeEvent)>;

/// Serializable snapshot of the whole theme state, with every color as
/// an 8-hex-digit `#aarrggbb` string. This is the transport format for
/// UI layers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub seed_color: String,
    pub is_dark_theme: bool,
    pub current_scheme: BTreeMap<&'static str, String>,
    pub light_scheme: BTreeMap<&'static str, String>,
    pub dark_scheme: BTreeMap<&'static str, String>,
}

/// Convert a scheme table to its wire form: role name to hex string.
pub fn scheme_to_map(scheme: &Scheme) -> BTreeMap<&'static str, String> {
    scheme
        .iter()
        .map(|(role, color)| (role.name(), color.to_hex()))
        .collect()
}

/// Reactive theme state derived from a single seed color.
///
/// # Example
///
/// ```
/// use stylekit::StyleManager;
/// use seed_scheme::{Argb, Role};
///
/// let mut style = StyleManager::new();
/// style.subscribe(|event| println!("changed: {event:?}"));
///
/// style.set_seed_color(Argb::from_rgb(0, 97, 164));
/// let primary = style.current_scheme().get(Role::Primary);
/// assert_eq!(primary.alpha(), 255);
/// ```
pub struct StyleManager {
    seed_color: Argb,
    is_dark_theme: bool,
    light_scheme: Scheme,
    dark_scheme: Scheme,
    observers: Vec<(ObserverId, Callback)>,
    next_observer: u64,
}

impl StyleManager {
    /// Create a manager with the default seed, light appearance, and
    /// both schemes precomputed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a manager seeded with a specific color.
    pub fn with_seed(seed: Argb) -> Self {
        StyleManager {
            seed_color: seed,
            is_dark_theme: false,
            light_scheme: Scheme::of(seed, false),
            dark_scheme: Scheme::of(seed, true),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// The seed color every scheme is currently derived from.
    pub fn seed_color(&self) -> Argb {
        self.seed_color
    }

    /// Whether the dark appearance is selected.
    pub fn is_dark_theme(&self) -> bool {
        self.is_dark_theme
    }

    /// The light-appearance scheme table.
    pub fn light_scheme(&self) -> &Scheme {
        &self.light_scheme
    }

    /// The dark-appearance scheme table.
    pub fn dark_scheme(&self) -> &Scheme {
        &self.dark_scheme
    }

    /// The scheme table matching the current dark flag.
    pub fn current_scheme(&self) -> &Scheme {
        if self.is_dark_theme {
            &self.dark_scheme
        } else {
            &self.light_scheme
        }
    }

    /// Register a callback invoked once per changed field, in
    /// registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(ThemeEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback. Returns `false` if the
    /// id was already gone.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    /// Select the dark or light appearance.
    ///
    /// Both schemes are already cached, so this republishes a view and
    /// never recomputes. Setting the current value is a no-op with no
    /// notification.
    pub fn set_is_dark_theme(&mut self, dark: bool) {
        if self.is_dark_theme == dark {
            return;
        }
        self.is_dark_theme = dark;
        self.emit(ThemeEvent::DarkThemeChanged);
        self.emit(ThemeEvent::CurrentSchemeChanged);
    }

    /// Re-derive both schemes from a new seed color.
    ///
    /// Setting the current seed is a no-op with no notification.
    /// Otherwise both tables are computed in full before anything is
    /// stored, then subscribers hear about the seed and all three
    /// scheme views.
    pub fn set_seed_color(&mut self, seed: Argb) {
        if self.seed_color == seed {
            return;
        }
        let light = Scheme::of(seed, false);
        let dark = Scheme::of(seed, true);

        self.seed_color = seed;
        self.light_scheme = light;
        self.dark_scheme = dark;
        debug!(seed = %seed, "recomputed schemes");

        self.emit(ThemeEvent::SeedColorChanged);
        self.emit(ThemeEvent::LightSchemeChanged);
        self.emit(ThemeEvent::DarkSchemeChanged);
        self.emit(ThemeEvent::CurrentSchemeChanged);
    }

    /// Set the seed from a UI color string (`#rgb`, `#rrggbb` or
    /// `#aarrggbb`). Malformed input is rejected before any mutation.
    pub fn set_seed_hex(&mut self, color: &str) -> Result<(), StyleError> {
        let seed: Argb = color.parse()?;
        self.set_seed_color(seed);
        Ok(())
    }

    /// Derive a new seed from a decoded pixel buffer.
    ///
    /// Runs the quantize-then-rank pipeline; the best candidate becomes
    /// the seed via [`set_seed_color`](Self::set_seed_color). If every
    /// sampled color is unsuitable the state is left untouched and
    /// [`StyleError::NoSuitableSeed`] is returned.
    pub fn set_source_pixels(&mut self, pixels: &[Argb]) -> Result<(), StyleError> {
        let candidates = ranked(&quantize(pixels, MAX_IMAGE_COLORS));
        match candidates.first() {
            Some(&best) => {
                debug!(seed = %best, candidates = candidates.len(), "image produced a seed");
                self.set_seed_color(best);
                Ok(())
            }
            None => {
                warn!("source image has no color suitable as a seed");
                Err(StyleError::NoSuitableSeed)
            }
        }
    }

    /// Derive a new seed from a PNG file on disk.
    ///
    /// Decode failures are reported and leave the state untouched.
    pub fn set_source_image(&mut self, path: impl AsRef<Path>) -> Result<(), StyleError> {
        let path = path.as_ref();
        let pixels = match image::load_png(path) {
            Ok(pixels) => pixels,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load source image");
                return Err(err);
            }
        };
        self.set_source_pixels(&pixels)
    }

    /// Snapshot the whole state in wire form.
    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            seed_color: self.seed_color.to_hex(),
            is_dark_theme: self.is_dark_theme,
            current_scheme: scheme_to_map(self.current_scheme()),
            light_scheme: scheme_to_map(&self.light_scheme),
            dark_scheme: scheme_to_map(&self.dark_scheme),
        }
    }

    fn emit(&mut self, event: ThemeEvent) {
        for (_, callback) in self.observers.iter_mut() {
            callback(event);
        }
    }
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::new()
    }
}
