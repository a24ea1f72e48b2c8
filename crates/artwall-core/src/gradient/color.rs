//! RGB to HSL conversion.
//!
//! The conversion is part of the gradient wire contract: both the server
//! and client implementations truncate through the same f64 expression
//! order, so the integer HSL triple is identical on both sides.

/// Convert RGB channel values to integer `(hue, saturation, lightness)`.
///
/// Hue is in `[0, 360)`, saturation and lightness in `[0, 100]`. Values
/// are truncated, not rounded.
pub(crate) fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
    let r_norm = f64::from(r) / 255.0;
    let g_norm = f64::from(g) / 255.0;
    let b_norm = f64::from(b) / 255.0;

    let max_c = r_norm.max(g_norm).max(b_norm);
    let min_c = r_norm.min(g_norm).min(b_norm);
    let lightness = (max_c + min_c) / 2.0;

    let (hue, saturation) = if max_c == min_c {
        (0.0, 0.0)
    } else {
        let diff = max_c - min_c;
        let saturation = if lightness > 0.5 {
            diff / (2.0 - max_c - min_c)
        } else {
            diff / (max_c + min_c)
        };

        let hue = if max_c == r_norm {
            (g_norm - b_norm) / diff + if g_norm < b_norm { 6.0 } else { 0.0 }
        } else if max_c == g_norm {
            (b_norm - r_norm) / diff + 2.0
        } else {
            (r_norm - g_norm) / diff + 4.0
        };

        (hue / 6.0, saturation)
    };

    ((hue * 360.0) as u16, (saturation * 100.0) as u8, (lightness * 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_palette_conversions() {
        // Base colors of the default palette and their expected integer HSL.
        assert_eq!(rgb_to_hsl(0x0b, 0x87, 0x83), (178, 84, 28)); // #0b8783
        assert_eq!(rgb_to_hsl(0x7c, 0x3a, 0xed), (262, 83, 57)); // #7c3aed
        assert_eq!(rgb_to_hsl(0xea, 0x58, 0x0c), (20, 90, 48)); // #ea580c
        assert_eq!(rgb_to_hsl(0x25, 0x63, 0xeb), (221, 83, 53)); // #2563eb
        assert_eq!(rgb_to_hsl(0x92, 0x40, 0x0e), (22, 82, 31)); // #92400e
        assert_eq!(rgb_to_hsl(0x16, 0xa3, 0x4a), (142, 76, 36)); // #16a34a
        assert_eq!(rgb_to_hsl(0x0f, 0x76, 0x6e), (175, 77, 26)); // #0f766e
        assert_eq!(rgb_to_hsl(0x1e, 0x40, 0xaf), (225, 70, 40)); // #1e40af
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsl(0, 0, 0), (0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 255, 255), (0, 0, 100));
        assert_eq!(rgb_to_hsl(128, 128, 128), (0, 0, 50));
    }
}
