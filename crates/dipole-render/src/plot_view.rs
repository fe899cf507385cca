// Current distribution plot via egui_plot, with the status readout.

use dipole_core::{AntennaParams, AntennaResult};
use egui_plot::{Legend, Line, Plot};

/// Draw the current distribution plot in the central panel, headed by the
/// status readout (frequency, wavelength, physical lengths).
pub fn draw_current_plot(ctx: &egui::Context, params: &AntennaParams, result: &AntennaResult) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Dipole Current Distribution");
        ui.label("Simple standing-wave model for a center-fed straight dipole.");
        ui.separator();
        ui.monospace(status_text(params, result));

        let points: Vec<[f64; 2]> = result
            .positions
            .iter()
            .zip(result.current.iter())
            .map(|(&x, &i)| [x, i])
            .collect();

        let line = Line::new(points).name("I (normalized)");

        Plot::new("current_plot")
            .x_axis_label("Position along antenna (in wavelengths, λ)")
            .y_axis_label("Normalized current (arb.)")
            .include_y(-1.1)
            .include_y(1.1)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    });
}

/// Multi-line readout summarizing the computed lengths and the parameters
/// that produced them.
fn status_text(params: &AntennaParams, result: &AntennaResult) -> String {
    format!(
        "f = {:.3} MHz\n\
         λ = {:.3} m\n\
         Total length = {:.3} m  ({:.2}×λ × VF {:.3})\n\
         Each arm = {:.3} m",
        params.frequency_mhz,
        result.wavelength_m,
        result.total_length_m,
        params.length_multiplier,
        params.velocity_factor,
        result.arm_length_m,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_for_default_params() {
        let params = AntennaParams::default();
        let result = dipole_core::compute(&params).expect("default params must be valid");
        let text = status_text(&params, &result);

        assert!(text.contains("f = 100.000 MHz"), "got: {text}");
        assert!(text.contains("λ = 2.998 m"), "got: {text}");
        assert!(
            text.contains("Total length = 1.424 m  (0.50×λ × VF 0.950)"),
            "got: {text}"
        );
        assert!(text.contains("Each arm = 0.712 m"), "got: {text}");
    }
}
