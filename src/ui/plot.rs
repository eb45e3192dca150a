use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{
    Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, pos2, vec2,
};
use egui_plot::{Legend, Plot, Points};

use crate::chart::{PieChart, ScatterChart};
use crate::color::{ColorMap, outcome_color};
use crate::data::model::Outcome;

// ---------------------------------------------------------------------------
// Pie chart (upper half of the central panel)
// ---------------------------------------------------------------------------

/// Largest angle covered by one polygon; keeps every piece convex.
const MAX_PIECE_ANGLE: f32 = FRAC_PI_2;
const ARC_SEGMENTS_PER_RADIAN: f32 = 16.0;

/// Render a pie chart with a legend on its right.
pub fn pie_chart(ui: &mut Ui, chart: &PieChart, colors: &ColorMap, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    let text_color = ui.visuals().text_color();
    let (response, painter) =
        ui.allocate_painter(vec2(ui.available_width(), height), Sense::hover());
    let rect = response.rect;

    let radius = (rect.height().min(rect.width() * 0.5) * 0.5 - 8.0).max(16.0);
    let center = pos2(rect.center().x - radius * 0.5, rect.center().y);
    let total = chart.total();

    if total == 0 {
        painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::GRAY));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "No launches to show",
            FontId::proportional(14.0),
            text_color,
        );
    }

    let mut start = -FRAC_PI_2;
    let mut hovered = None;
    for slice in &chart.slices {
        if total == 0 || slice.value == 0 {
            continue;
        }
        let fraction = slice.value as f32 / total as f32;
        let sweep = TAU * fraction;
        let color = colors.color_for(&slice.label);
        for piece in sector_polygons(center, radius, start, sweep) {
            painter.add(Shape::convex_polygon(piece, color, Stroke::NONE));
        }

        let mid = start + sweep * 0.5;
        painter.text(
            center + Vec2::angled(mid) * radius * 0.65,
            Align2::CENTER_CENTER,
            format!("{:.1}%", fraction * 100.0),
            FontId::proportional(13.0),
            Color32::WHITE,
        );

        if let Some(pos) = response.hover_pos() {
            if in_sector(pos, center, radius, start, sweep) {
                hovered = Some(format!("{}: {}", slice.label, slice.value));
            }
        }
        start += sweep;
    }

    // Legend
    let mut y = center.y - radius;
    let x = center.x + radius + 24.0;
    for slice in &chart.slices {
        let swatch = Rect::from_min_size(pos2(x, y), vec2(12.0, 12.0));
        painter.rect_filled(swatch, 2.0, colors.color_for(&slice.label));
        painter.text(
            pos2(x + 18.0, y + 6.0),
            Align2::LEFT_CENTER,
            format!("{} ({})", slice.label, slice.value),
            FontId::proportional(14.0),
            text_color,
        );
        y += 20.0;
    }

    if let Some(text) = hovered {
        response.on_hover_text(text);
    }
}

/// Split a circular sector into convex polygons of at most [`MAX_PIECE_ANGLE`].
fn sector_polygons(center: Pos2, radius: f32, start: f32, sweep: f32) -> Vec<Vec<Pos2>> {
    let pieces = (sweep / MAX_PIECE_ANGLE - 1e-4).ceil().max(1.0) as usize;
    let piece_sweep = sweep / pieces as f32;
    let segments = ((piece_sweep * ARC_SEGMENTS_PER_RADIAN).ceil() as usize).max(1);

    (0..pieces)
        .map(|p| {
            let a0 = start + piece_sweep * p as f32;
            let mut points = Vec::with_capacity(segments + 2);
            points.push(center);
            for s in 0..=segments {
                let a = a0 + piece_sweep * s as f32 / segments as f32;
                points.push(center + Vec2::angled(a) * radius);
            }
            points
        })
        .collect()
}

fn in_sector(pos: Pos2, center: Pos2, radius: f32, start: f32, sweep: f32) -> bool {
    let d = pos - center;
    if d.length() > radius {
        return false;
    }
    let offset = (d.angle() - start).rem_euclid(TAU);
    offset <= sweep
}

// ---------------------------------------------------------------------------
// Scatter chart (lower half of the central panel)
// ---------------------------------------------------------------------------

/// Render payload mass vs. outcome, one coloured series per outcome.
pub fn scatter_plot(ui: &mut Ui, chart: &ScatterChart) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| chart.hover_text(name, value.x, value.y))
        .show(ui, |plot_ui| {
            for outcome in [Outcome::Failure, Outcome::Success] {
                let points = Points::new(chart.series(outcome))
                    .name(outcome.to_string())
                    .color(outcome_color(outcome))
                    .radius(4.0)
                    .filled(true);
                plot_ui.points(points);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_circle_splits_into_quarter_pieces() {
        let pieces = sector_polygons(Pos2::ZERO, 10.0, -FRAC_PI_2, TAU);
        assert_eq!(pieces.len(), 4);
        for piece in &pieces {
            assert_eq!(piece[0], Pos2::ZERO);
            for p in &piece[1..] {
                assert!((p.to_vec2().length() - 10.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn small_sector_is_single_piece() {
        let pieces = sector_polygons(Pos2::ZERO, 5.0, 0.0, 0.3);
        assert_eq!(pieces.len(), 1);
        assert!(pieces[0].len() >= 3);
    }

    #[test]
    fn hit_test_respects_radius_and_angle() {
        let c = Pos2::ZERO;
        // Sector covering the right-hand quarter centred on angle 0.
        let start = -FRAC_PI_2 / 2.0;
        assert!(in_sector(pos2(5.0, 0.0), c, 10.0, start, FRAC_PI_2));
        assert!(!in_sector(pos2(15.0, 0.0), c, 10.0, start, FRAC_PI_2));
        assert!(!in_sector(pos2(-5.0, 0.0), c, 10.0, start, FRAC_PI_2));
    }
}
