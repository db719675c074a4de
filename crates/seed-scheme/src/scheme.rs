//! Scheme expansion: one seed color to a complete named-role table.
//!
//! A scheme is a total mapping from the fixed set of [`Role`]s to
//! display colors, for one appearance (light or dark). Every role is
//! defined as "this palette at this tone", with the tone differing
//! between light and dark; that assignment is data, not logic, and
//! lives in [`role_assignment`] as a checked-in table.

use crate::color::Argb;
use crate::hct::Hct;
use crate::palette::{CorePalettes, TonalPalette};

/// A named slot in a scheme table, with a fixed UI meaning.
///
/// [`Role::ALL`] enumerates every role; a [`Scheme`] always carries all
/// of them. [`Role::name`] gives the camelCase identifier used on the
/// wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    InverseSurface,
    InverseOnSurface,
    InversePrimary,
    SurfaceDim,
    SurfaceBright,
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
}

impl Role {
    /// Every role, in wire order.
    pub const ALL: [Role; 36] = [
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::Secondary,
        Role::OnSecondary,
        Role::SecondaryContainer,
        Role::OnSecondaryContainer,
        Role::Tertiary,
        Role::OnTertiary,
        Role::TertiaryContainer,
        Role::OnTertiaryContainer,
        Role::Error,
        Role::OnError,
        Role::ErrorContainer,
        Role::OnErrorContainer,
        Role::Background,
        Role::OnBackground,
        Role::Surface,
        Role::OnSurface,
        Role::SurfaceVariant,
        Role::OnSurfaceVariant,
        Role::Outline,
        Role::OutlineVariant,
        Role::Shadow,
        Role::Scrim,
        Role::InverseSurface,
        Role::InverseOnSurface,
        Role::InversePrimary,
        Role::SurfaceDim,
        Role::SurfaceBright,
        Role::SurfaceContainerLowest,
        Role::SurfaceContainerLow,
        Role::SurfaceContainer,
        Role::SurfaceContainerHigh,
        Role::SurfaceContainerHighest,
    ];

    /// The camelCase identifier used when handing schemes to a UI layer.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::OnPrimary => "onPrimary",
            Role::PrimaryContainer => "primaryContainer",
            Role::OnPrimaryContainer => "onPrimaryContainer",
            Role::Secondary => "secondary",
            Role::OnSecondary => "onSecondary",
            Role::SecondaryContainer => "secondaryContainer",
            Role::OnSecondaryContainer => "onSecondaryContainer",
            Role::Tertiary => "tertiary",
            Role::OnTertiary => "onTertiary",
            Role::TertiaryContainer => "tertiaryContainer",
            Role::OnTertiaryContainer => "onTertiaryContainer",
            Role::Error => "error",
            Role::OnError => "onError",
            Role::ErrorContainer => "errorContainer",
            Role::OnErrorContainer => "onErrorContainer",
            Role::Background => "background",
            Role::OnBackground => "onBackground",
            Role::Surface => "surface",
            Role::OnSurface => "onSurface",
            Role::SurfaceVariant => "surfaceVariant",
            Role::OnSurfaceVariant => "onSurfaceVariant",
            Role::Outline => "outline",
            Role::OutlineVariant => "outlineVariant",
            Role::Shadow => "shadow",
            Role::Scrim => "scrim",
            Role::InverseSurface => "inverseSurface",
            Role::InverseOnSurface => "inverseOnSurface",
            Role::InversePrimary => "inversePrimary",
            Role::SurfaceDim => "surfaceDim",
            Role::SurfaceBright => "surfaceBright",
            Role::SurfaceContainerLowest => "surfaceContainerLowest",
            Role::SurfaceContainerLow => "surfaceContainerLow",
            Role::SurfaceContainer => "surfaceContainer",
            Role::SurfaceContainerHigh => "surfaceContainerHigh",
            Role::SurfaceContainerHighest => "surfaceContainerHighest",
        }
    }
}

/// Which of the six core palettes a role samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaletteRef {
    Primary,
    Secondary,
    Tertiary,
    Error,
    Neutral,
    NeutralVariant,
}

/// The checked-in role table: (palette, light tone, dark tone).
///
/// These values are Material Design baseline data, not derived;
/// changing any of them changes colors users see.
const fn role_assignment(role: Role) -> (PaletteRef, f64, f64) {
    use PaletteRef as P;
    match role {
        Role::Primary => (P::Primary, 40.0, 80.0),
        Role::OnPrimary => (P::Primary, 100.0, 20.0),
        Role::PrimaryContainer => (P::Primary, 90.0, 30.0),
        Role::OnPrimaryContainer => (P::Primary, 10.0, 90.0),
        Role::Secondary => (P::Secondary, 40.0, 80.0),
        Role::OnSecondary => (P::Secondary, 100.0, 20.0),
        Role::SecondaryContainer => (P::Secondary, 90.0, 30.0),
        Role::OnSecondaryContainer => (P::Secondary, 10.0, 90.0),
        Role::Tertiary => (P::Tertiary, 40.0, 80.0),
        Role::OnTertiary => (P::Tertiary, 100.0, 20.0),
        Role::TertiaryContainer => (P::Tertiary, 90.0, 30.0),
        Role::OnTertiaryContainer => (P::Tertiary, 10.0, 90.0),
        Role::Error => (P::Error, 40.0, 80.0),
        Role::OnError => (P::Error, 100.0, 20.0),
        Role::ErrorContainer => (P::Error, 90.0, 30.0),
        Role::OnErrorContainer => (P::Error, 10.0, 90.0),
        Role::Background => (P::Neutral, 98.0, 6.0),
        Role::OnBackground => (P::Neutral, 10.0, 90.0),
        Role::Surface => (P::Neutral, 98.0, 6.0),
        Role::OnSurface => (P::Neutral, 10.0, 90.0),
        Role::SurfaceVariant => (P::NeutralVariant, 90.0, 30.0),
        Role::OnSurfaceVariant => (P::NeutralVariant, 30.0, 80.0),
        Role::Outline => (P::NeutralVariant, 50.0, 60.0),
        Role::OutlineVariant => (P::NeutralVariant, 80.0, 30.0),
        Role::Shadow => (P::Neutral, 0.0, 0.0),
        Role::Scrim => (P::Neutral, 0.0, 0.0),
        Role::InverseSurface => (P::Neutral, 20.0, 90.0),
        Role::InverseOnSurface => (P::Neutral, 95.0, 20.0),
        Role::InversePrimary => (P::Primary, 80.0, 40.0),
        Role::SurfaceDim => (P::Neutral, 87.0, 6.0),
        Role::SurfaceBright => (P::Neutral, 98.0, 24.0),
        Role::SurfaceContainerLowest => (P::Neutral, 100.0, 4.0),
        Role::SurfaceContainerLow => (P::Neutral, 96.0, 10.0),
        Role::SurfaceContainer => (P::Neutral, 94.0, 12.0),
        Role::SurfaceContainerHigh => (P::Neutral, 92.0, 17.0),
        Role::SurfaceContainerHighest => (P::Neutral, 90.0, 22.0),
    }
}

/// A complete role-to-color table for one appearance.
///
/// Total by construction: every [`Role`] is present, always. Derivation
/// is deterministic, so two schemes from the same (seed, dark) pair
/// compare equal.
///
/// # Example
///
/// ```
/// use seed_scheme::{Argb, Role, Scheme};
///
/// let light = Scheme::of(Argb::new(0xFF6750A4), false);
/// let dark = Scheme::of(Argb::new(0xFF6750A4), true);
/// assert_ne!(light.get(Role::Surface), dark.get(Role::Surface));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    colors: [Argb; Role::ALL.len()],
}

impl Scheme {
    /// Expand a seed color into the full role table for one appearance.
    pub fn of(seed: Argb, dark: bool) -> Scheme {
        let palettes = CorePalettes::tonal_spot(Hct::from_argb(seed));
        let mut colors = [Argb::new(0); Role::ALL.len()];
        for (i, &role) in Role::ALL.iter().enumerate() {
            let (palette_ref, light_tone, dark_tone) = role_assignment(role);
            let palette = resolve(&palettes, palette_ref);
            colors[i] = palette.tone(if dark { dark_tone } else { light_tone });
        }
        Scheme { colors }
    }

    /// The color assigned to a role.
    pub fn get(&self, role: Role) -> Argb {
        // `ALL` lists variants in declaration order, so the discriminant
        // doubles as the storage index
        self.colors[role as usize]
    }

    /// Iterate all (role, color) pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Argb)> + '_ {
        Role::ALL.iter().zip(self.colors.iter()).map(|(&r, &c)| (r, c))
    }
}

fn resolve(palettes: &CorePalettes, palette_ref: PaletteRef) -> TonalPalette {
    match palette_ref {
        PaletteRef::Primary => palettes.primary,
        PaletteRef::Secondary => palettes.secondary,
        PaletteRef::Tertiary => palettes.tertiary,
        PaletteRef::Error => palettes.error,
        PaletteRef::Neutral => palettes.neutral,
        PaletteRef::NeutralVariant => palettes.neutral_variant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Lab;

    const SEED: Argb = Argb::new(0xFF6750A4);

    #[test]
    fn test_every_role_is_present_exactly_once() {
        let scheme = Scheme::of(SEED, false);
        let names: Vec<&str> = scheme.iter().map(|(role, _)| role.name()).collect();
        assert_eq!(names.len(), 36);
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), 36, "duplicate role names");
    }

    #[test]
    fn test_wire_names_match_contract() {
        let expected = [
            "primary",
            "onPrimary",
            "primaryContainer",
            "onPrimaryContainer",
            "secondary",
            "onSecondary",
            "secondaryContainer",
            "onSecondaryContainer",
            "tertiary",
            "onTertiary",
            "tertiaryContainer",
            "onTertiaryContainer",
            "error",
            "onError",
            "errorContainer",
            "onErrorContainer",
            "background",
            "onBackground",
            "surface",
            "onSurface",
            "surfaceVariant",
            "onSurfaceVariant",
            "outline",
            "outlineVariant",
            "shadow",
            "scrim",
            "inverseSurface",
            "inverseOnSurface",
            "inversePrimary",
            "surfaceDim",
            "surfaceBright",
            "surfaceContainerLowest",
            "surfaceContainerLow",
            "surfaceContainer",
            "surfaceContainerHigh",
            "surfaceContainerHighest",
        ];
        let actual: Vec<&str> = Role::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_all_matches_discriminant_order() {
        for (i, &role) in Role::ALL.iter().enumerate() {
            assert_eq!(role as usize, i, "{role:?} out of order in ALL");
        }
    }

    /// Byte-exact expected output for the baseline seed, both
    /// appearances. Any change to the color math, the palette recipe or
    /// the role table shows up here as a concrete hex diff instead of a
    /// drifted tolerance somewhere downstream.
    #[test]
    fn test_golden_tables_for_baseline_seed() {
        let expected_light = [
            ("primary", "#ff65558f"),
            ("onPrimary", "#ffffffff"),
            ("primaryContainer", "#ffe9ddff"),
            ("onPrimaryContainer", "#ff201047"),
            ("secondary", "#ff625b71"),
            ("onSecondary", "#ffffffff"),
            ("secondaryContainer", "#ffe8def8"),
            ("onSecondaryContainer", "#ff1e192b"),
            ("tertiary", "#ff7e5260"),
            ("onTertiary", "#ffffffff"),
            ("tertiaryContainer", "#ffffd9e3"),
            ("onTertiaryContainer", "#ff31101d"),
            ("error", "#ffba1a1a"),
            ("onError", "#ffffffff"),
            ("errorContainer", "#ffffdad6"),
            ("onErrorContainer", "#ff410002"),
            ("background", "#fffdf7ff"),
            ("onBackground", "#ff1d1b20"),
            ("surface", "#fffdf7ff"),
            ("onSurface", "#ff1d1b20"),
            ("surfaceVariant", "#ffe7e0eb"),
            ("onSurfaceVariant", "#ff49454e"),
            ("outline", "#ff7a757f"),
            ("outlineVariant", "#ffcac4cf"),
            ("shadow", "#ff000000"),
            ("scrim", "#ff000000"),
            ("inverseSurface", "#ff322f35"),
            ("inverseOnSurface", "#fff5eff7"),
            ("inversePrimary", "#ffcfbdfe"),
            ("surfaceDim", "#ffded8e0"),
            ("surfaceBright", "#fffdf7ff"),
            ("surfaceContainerLowest", "#ffffffff"),
            ("surfaceContainerLow", "#fff8f2fa"),
            ("surfaceContainer", "#fff2ecf4"),
            ("surfaceContainerHigh", "#ffece6ee"),
            ("surfaceContainerHighest", "#ffe6e0e9"),
        ];
        let expected_dark = [
            ("primary", "#ffcfbdfe"),
            ("onPrimary", "#ff36275d"),
            ("primaryContainer", "#ff4d3d75"),
            ("onPrimaryContainer", "#ffe9ddff"),
            ("secondary", "#ffcbc2db"),
            ("onSecondary", "#ff332d41"),
            ("secondaryContainer", "#ff4a4458"),
            ("onSecondaryContainer", "#ffe8def8"),
            ("tertiary", "#ffefb8c8"),
            ("onTertiary", "#ff4a2532"),
            ("tertiaryContainer", "#ff633b48"),
            ("onTertiaryContainer", "#ffffd9e3"),
            ("error", "#ffffb4ab"),
            ("onError", "#ff680005"),
            ("errorContainer", "#ff93010a"),
            ("onErrorContainer", "#ffffdad6"),
            ("background", "#ff141218"),
            ("onBackground", "#ffe6e0e9"),
            ("surface", "#ff141218"),
            ("onSurface", "#ffe6e0e9"),
            ("surfaceVariant", "#ff49454e"),
            ("onSurfaceVariant", "#ffcac4cf"),
            ("outline", "#ff948f99"),
            ("outlineVariant", "#ff49454e"),
            ("shadow", "#ff000000"),
            ("scrim", "#ff000000"),
            ("inverseSurface", "#ffe6e0e9"),
            ("inverseOnSurface", "#ff322f35"),
            ("inversePrimary", "#ff65558f"),
            ("surfaceDim", "#ff141218"),
            ("surfaceBright", "#ff3b383e"),
            ("surfaceContainerLowest", "#ff0f0d13"),
            ("surfaceContainerLow", "#ff1d1b20"),
            ("surfaceContainer", "#ff211f24"),
            ("surfaceContainerHigh", "#ff2b292f"),
            ("surfaceContainerHighest", "#ff36343a"),
        ];
        for (dark, expected) in [(false, expected_light), (true, expected_dark)] {
            let scheme = Scheme::of(SEED, dark);
            for ((role, color), (name, hex)) in scheme.iter().zip(expected) {
                assert_eq!(role.name(), name);
                assert_eq!(
                    color.to_hex(),
                    hex,
                    "{name} drifted (dark={dark})"
                );
            }
        }
    }

    #[test]
    fn test_expansion_is_deterministic() {
        assert_eq!(Scheme::of(SEED, false), Scheme::of(SEED, false));
        assert_eq!(Scheme::of(SEED, true), Scheme::of(SEED, true));
    }

    #[test]
    fn test_light_and_dark_differ_on_surfaces() {
        let light = Scheme::of(SEED, false);
        let dark = Scheme::of(SEED, true);
        assert_ne!(light.get(Role::Surface), dark.get(Role::Surface));
        assert_ne!(light.get(Role::OnSurface), dark.get(Role::OnSurface));
        assert_ne!(light.get(Role::Primary), dark.get(Role::Primary));
    }

    #[test]
    fn test_shadow_and_scrim_are_black() {
        for dark in [false, true] {
            let scheme = Scheme::of(SEED, dark);
            assert_eq!(scheme.get(Role::Shadow), Argb::from_rgb(0, 0, 0));
            assert_eq!(scheme.get(Role::Scrim), Argb::from_rgb(0, 0, 0));
        }
    }

    #[test]
    fn test_tone_0_and_100_roles_hit_the_extremes() {
        let light = Scheme::of(SEED, false);
        assert_eq!(
            light.get(Role::SurfaceContainerLowest),
            Argb::from_rgb(255, 255, 255)
        );
        assert_eq!(light.get(Role::OnPrimary), Argb::from_rgb(255, 255, 255));
    }

    #[test]
    fn test_inverse_primary_mirrors_the_other_appearance() {
        // inversePrimary in light is the dark appearance's primary tone
        // and vice versa, from the same palette
        let light = Scheme::of(SEED, false);
        let dark = Scheme::of(SEED, true);
        assert_eq!(light.get(Role::InversePrimary), dark.get(Role::Primary));
        assert_eq!(dark.get(Role::InversePrimary), light.get(Role::Primary));
    }

    #[test]
    fn test_on_colors_contrast_with_their_base() {
        // Tone pairs in the table are at least 40 L* apart; verify the
        // derived colors actually carry that contrast
        let pairs = [
            (Role::Primary, Role::OnPrimary),
            (Role::Secondary, Role::OnSecondary),
            (Role::Surface, Role::OnSurface),
            (Role::Error, Role::OnError),
        ];
        for dark in [false, true] {
            let scheme = Scheme::of(SEED, dark);
            for (base, on) in pairs {
                let base_l = Lab::from(scheme.get(base)).l;
                let on_l = Lab::from(scheme.get(on)).l;
                assert!(
                    (base_l - on_l).abs() > 35.0,
                    "insufficient contrast between {base:?} and {on:?} (dark={dark}): {base_l} vs {on_l}"
                );
            }
        }
    }

    #[test]
    fn test_all_colors_are_opaque() {
        for dark in [false, true] {
            for (role, color) in Scheme::of(SEED, dark).iter() {
                assert_eq!(color.alpha(), 255, "{role:?} is not opaque");
            }
        }
    }
}
