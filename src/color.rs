use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::config::{FAIL_LABEL, SUCCESS_LABEL};
use crate::data::model::Outcome;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// One colour per pie slice, at evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = 360.0 * i as f32 / n as f32;
            let rgb: Srgb = Hsl::new(hue, 0.75, 0.55).into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

/// Fixed colours for the two outcome categories.
pub fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Failure => Color32::from_rgb(220, 80, 70),
        Outcome::Success => Color32::from_rgb(70, 170, 110),
    }
}

// ---------------------------------------------------------------------------
// Color mapping: slice label → Color32
// ---------------------------------------------------------------------------

/// Maps pie slice labels to distinct colours. Outcome labels always get the
/// outcome colours so Fail/Success look the same on both charts.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let labels: Vec<&str> = labels.into_iter().collect();
        let palette = generate_palette(labels.len());
        let mapping = labels
            .into_iter()
            .zip(palette)
            .map(|(label, c)| {
                let color = match label {
                    FAIL_LABEL => outcome_color(Outcome::Failure),
                    SUCCESS_LABEL => outcome_color(Outcome::Success),
                    _ => c,
                };
                (label.to_string(), color)
            })
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn outcome_labels_use_outcome_colors() {
        let map = ColorMap::new(["Fail", "Success"]);
        assert_eq!(map.color_for("Fail"), outcome_color(Outcome::Failure));
        assert_eq!(map.color_for("Success"), outcome_color(Outcome::Success));
    }

    #[test]
    fn unknown_label_falls_back_to_gray() {
        let map = ColorMap::new(["CCAFS LC-40"]);
        assert_eq!(map.color_for("KSC LC-39A"), Color32::GRAY);
    }
}
