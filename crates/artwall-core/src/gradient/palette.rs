//! Theme and medium color configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{HexColor, Medium};

/// The theme the engine falls back to for unknown theme names.
pub const DEFAULT_THEME: &str = "atelier";

/// Hue spread for mediums absent from the variation table.
const DEFAULT_HUE_VARIATION: u32 = 25;

/// Saturation boost for mediums absent from the boost table.
const DEFAULT_SATURATION_BOOST: u32 = 15;

/// Base color when a palette has no usable entry at all (drawing purple).
const DEFAULT_BASE_RGB: (u8, u8, u8) = (0x7c, 0x3a, 0xed);

/// Static color configuration for gradient derivation.
///
/// Maps theme name to per-medium base colors, plus per-medium hue
/// variation and saturation boost tables. Loaded once per process and
/// treated as immutable by the engine; every lookup is total, falling
/// back to the `atelier` theme and the `drawing` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Theme name to per-medium base hex colors.
    pub themes: BTreeMap<String, BTreeMap<Medium, HexColor>>,

    /// Per-medium hue spread applied from the artwork hash.
    #[serde(default)]
    pub hue_variations: BTreeMap<Medium, u32>,

    /// Per-medium saturation boost.
    #[serde(default)]
    pub saturation_boosts: BTreeMap<Medium, u32>,

    /// Per-medium solid colors for clients without gradient support.
    #[serde(default)]
    pub solid_fallbacks: BTreeMap<Medium, HexColor>,
}

impl Palette {
    /// Base color for a `(theme, medium)` pair.
    ///
    /// Unknown themes use `atelier`, unknown mediums use the theme's
    /// `drawing` entry, and a palette with neither yields the built-in
    /// drawing purple. Never fails: the gradient subsystem is cosmetic
    /// and must not block rendering.
    pub fn base_color(&self, theme: &str, medium: Medium) -> (u8, u8, u8) {
        let colors = self
            .themes
            .get(theme)
            .or_else(|| self.themes.get(DEFAULT_THEME));

        colors
            .and_then(|c| c.get(&medium).or_else(|| c.get(&Medium::Drawing)))
            .map(|hex| hex.to_rgb())
            .unwrap_or(DEFAULT_BASE_RGB)
    }

    /// Hue spread for a medium, defaulting to 25.
    pub fn hue_variation(&self, medium: Medium) -> u32 {
        self.hue_variations
            .get(&medium)
            .copied()
            .unwrap_or(DEFAULT_HUE_VARIATION)
            .max(1)
    }

    /// Saturation boost for a medium, defaulting to 15.
    pub fn saturation_boost(&self, medium: Medium) -> u32 {
        self.saturation_boosts
            .get(&medium)
            .copied()
            .unwrap_or(DEFAULT_SATURATION_BOOST)
    }

    /// Solid color fallback for a medium.
    pub fn solid_fallback(&self, medium: Medium) -> HexColor {
        self.solid_fallbacks
            .get(&medium)
            .copied()
            .unwrap_or_else(|| {
                let (r, g, b) = DEFAULT_BASE_RGB;
                // Formatting a known-good triple cannot produce an invalid color.
                HexColor::new(format!("#{r:02x}{g:02x}{b:02x}")).unwrap_or_else(|_| unreachable!())
            })
    }
}

impl Default for Palette {
    /// The six-theme reference configuration.
    fn default() -> Self {
        fn hex(s: &str) -> HexColor {
            // All literals below are valid six-digit colors.
            HexColor::new(s).unwrap_or_else(|_| unreachable!())
        }

        fn theme(audio: &str) -> BTreeMap<Medium, HexColor> {
            BTreeMap::from([
                (Medium::Audio, hex(audio)),
                (Medium::Drawing, hex("#7c3aed")),
                (Medium::Sculpture, hex("#ea580c")),
                (Medium::Writing, hex("#2563eb")),
            ])
        }

        // Themes differ only in the audio family color in the reference
        // configuration; the other mediums share one palette.
        let themes = BTreeMap::from([
            ("atelier".to_string(), theme("#0b8783")),
            ("blueprint".to_string(), theme("#1e40af")),
            ("dark".to_string(), theme("#0b8783")),
            ("teal".to_string(), theme("#0f766e")),
            ("nature".to_string(), theme("#16a34a")),
            ("earth".to_string(), theme("#92400e")),
        ]);

        let hue_variations = BTreeMap::from([
            (Medium::Writing, 20),
            (Medium::Audio, 30),
            (Medium::Drawing, 25),
            (Medium::Sculpture, 35),
        ]);

        let saturation_boosts = BTreeMap::from([
            (Medium::Writing, 15),
            (Medium::Audio, 20),
            (Medium::Drawing, 18),
            (Medium::Sculpture, 22),
        ]);

        let solid_fallbacks = BTreeMap::from([
            (Medium::Audio, hex("#dc2626")),
            (Medium::Drawing, hex("#7c3aed")),
            (Medium::Sculpture, hex("#ea580c")),
            (Medium::Writing, hex("#2563eb")),
        ]);

        Self {
            themes,
            hue_variations,
            saturation_boosts,
            solid_fallbacks,
        }
    }
}
