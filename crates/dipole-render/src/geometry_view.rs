// 2D antenna schematic drawn with egui painter.

use dipole_core::constants::POSITION_SPAN_WAVELENGTHS;
use dipole_core::{AntennaParams, AntennaResult};

/// Draw a schematic of the dipole in a top panel: two conductor arms either
/// side of a center feed gap, on the same ±span wavelength axis as the plot
/// below so the arms line up with the profile's support.
pub fn draw_geometry(ctx: &egui::Context, params: &AntennaParams, result: &AntennaResult) {
    egui::TopBottomPanel::top("geometry")
        .min_height(110.0)
        .show(ctx, |ui| {
            ui.heading("Antenna Schematic");

            let available = ui.available_size();
            let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());
            let rect = response.rect;

            let half_len_wavelengths = params.length_multiplier / 2.0;
            if half_len_wavelengths <= 0.0 || rect.width() <= 0.0 {
                return;
            }

            let padding = 20.0;
            let draw_width = rect.width() - 2.0 * padding;
            // Pixels per wavelength on the shared ±span axis.
            let scale_x = draw_width / (2.0 * POSITION_SPAN_WAVELENGTHS) as f32;

            let center = rect.center();
            let arm_px = half_len_wavelengths as f32 * scale_x;
            let feed_gap_px = 6.0;
            let thickness = 8.0;
            let arm_color = egui::Color32::from_rgb(80, 120, 180);

            // Left and right arms as centered horizontal bars.
            for dir in [-1.0f32, 1.0] {
                let inner_x = center.x + dir * feed_gap_px / 2.0;
                let outer_x = center.x + dir * arm_px;
                let arm_rect = egui::Rect::from_two_pos(
                    egui::pos2(inner_x, center.y - thickness / 2.0),
                    egui::pos2(outer_x, center.y + thickness / 2.0),
                );
                painter.rect_filled(arm_rect, 2.0, arm_color);
                painter.rect_stroke(
                    arm_rect,
                    2.0,
                    egui::Stroke::new(1.0, egui::Color32::WHITE),
                    egui::StrokeKind::Outside,
                );
            }

            // Feed point at the center gap.
            painter.circle_filled(center, 3.5, egui::Color32::from_rgb(220, 80, 80));

            painter.text(
                egui::pos2(center.x, center.y + thickness / 2.0 + 6.0),
                egui::Align2::CENTER_TOP,
                format!(
                    "each arm {:.3} m  ·  total {:.3} m",
                    result.arm_length_m, result.total_length_m
                ),
                egui::FontId::proportional(12.0),
                egui::Color32::GRAY,
            );
        });
}
