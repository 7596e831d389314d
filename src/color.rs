use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: geo → Color32
// ---------------------------------------------------------------------------

/// Stable colour per country/region, assigned once from the geo vocabulary
/// so a country keeps its colour across every interaction and both charts.
#[derive(Debug, Clone)]
pub struct GeoColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl GeoColors {
    /// Assign one palette colour per geo, in vocabulary order.
    pub fn new(geos: &[String]) -> Self {
        let palette = generate_palette(geos.len());
        let mapping: BTreeMap<String, Color32> =
            geos.iter().cloned().zip(palette).collect();

        GeoColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a geo.
    pub fn color_for(&self, geo: &str) -> Color32 {
        self.mapping.get(geo).copied().unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn geo_colors_are_stable_and_distinct() {
        let geos = vec!["France".to_string(), "Spain".to_string()];
        let colors = GeoColors::new(&geos);

        assert_eq!(colors.color_for("France"), colors.color_for("France"));
        assert_ne!(colors.color_for("France"), colors.color_for("Spain"));
        // unknown geos fall back to the default
        assert_eq!(colors.color_for("Atlantis"), Color32::GRAY);
    }
}
