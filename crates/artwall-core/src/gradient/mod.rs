//! Deterministic gradient derivation for artwork cards.
//!
//! Every card gets a unique, stable gradient derived from its id, its
//! medium's color family and the active theme. The algorithm is a wire
//! contract: the server renders the initial page and the client re-runs
//! the identical derivation on theme switch, so the CSS string must be
//! byte-identical between the two implementations.

mod color;
mod palette;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{HexColor, Medium};

pub use palette::{DEFAULT_THEME, Palette};

/// Hash an artwork id to a stable non-negative integer.
///
/// This is part of the wire contract, not an implementation detail: the
/// value is the MD5 digest of the UTF-8 bytes interpreted as a
/// big-endian 128-bit integer. A client implementation using any other
/// hash family will disagree with the server on every gradient.
pub fn stable_hash(text: &str) -> u128 {
    u128::from_be_bytes(md5::compute(text.as_bytes()).0)
}

/// One stop of a derived gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Hue in `[0, 360)`.
    pub hue: u16,
    /// Saturation percentage in `[0, 100]`.
    pub saturation: u8,
    /// Lightness percentage in `[0, 100]`.
    pub lightness: u8,
    /// Relative position percentage along the gradient axis.
    pub position: u8,
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%) {}%",
            self.hue, self.saturation, self.lightness, self.position
        )
    }
}

/// A derived gradient: a diagonal angle plus three color stops.
///
/// For a fixed `(id, medium, theme)` input the derived value is
/// bit-identical across repeated calls and across independent
/// implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientSpec {
    /// Gradient axis angle in degrees, always in `[135, 180)`.
    pub angle_degrees: u16,
    /// The three stops, at positions 0%, 50% and 100%.
    pub stops: [ColorStop; 3],
}

impl GradientSpec {
    /// Render the CSS `linear-gradient(...)` string.
    ///
    /// This exact string is what the server embeds in card styles and
    /// what the client must reproduce.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}deg, {}, {}, {})",
            self.angle_degrees, self.stops[0], self.stops[1], self.stops[2]
        )
    }
}

/// The gradient derivation engine.
///
/// Holds the immutable color configuration; [`GradientEngine::derive`]
/// is pure and safe to call from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct GradientEngine {
    palette: Palette,
}

impl GradientEngine {
    /// Create an engine over a custom palette.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The palette this engine derives from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Derive the gradient for an artwork card.
    ///
    /// Total: unknown themes fall back to `atelier` and mediums without
    /// a palette entry use the `drawing` family, so derivation can never
    /// fail and never blocks rendering.
    pub fn derive(&self, artwork_id: &str, medium: Medium, theme: &str) -> GradientSpec {
        let (r, g, b) = self.palette.base_color(theme, medium);
        let (base_hue, base_sat, base_light) = color::rgb_to_hsl(r, g, b);

        let hash = stable_hash(artwork_id);
        let hue_variation = u128::from(self.palette.hue_variation(medium));
        let saturation_boost = u32::from(self.palette.saturation_boost(medium));

        let hue1 = ((u128::from(base_hue) + hash % hue_variation) % 360) as u16;
        let hue2 = (hue1 + 25) % 360;
        let hue3 = (hue2 + 25) % 360;

        let base_sat = u32::from(base_sat);
        let sat1 = (base_sat + saturation_boost).min(95) as u8;
        let sat2 = (base_sat + saturation_boost + 5).min(98) as u8;
        let sat3 = (base_sat + saturation_boost + 3).min(95) as u8;

        let base_light = i32::from(base_light);
        let light1 = (base_light - 5).clamp(35, 50) as u8;
        let light2 = base_light.clamp(40, 55) as u8;
        let light3 = (base_light + 5).clamp(45, 60) as u8;

        let angle_degrees = 135 + (hash % 45) as u16;

        GradientSpec {
            angle_degrees,
            stops: [
                ColorStop { hue: hue1, saturation: sat1, lightness: light1, position: 0 },
                ColorStop { hue: hue2, saturation: sat2, lightness: light2, position: 50 },
                ColorStop { hue: hue3, saturation: sat3, lightness: light3, position: 100 },
            ],
        }
    }

    /// Solid color stand-in for clients without gradient support.
    pub fn solid_fallback(&self, medium: Medium) -> HexColor {
        self.palette.solid_fallback(medium)
    }
}
