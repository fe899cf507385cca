// egui control panel: frequency entry, sliders, reset.

use dipole_core::AntennaParams;

/// UI-only state that doesn't belong in AntennaParams: the frequency text
/// box contents, which may be mid-edit and not yet a valid number.
pub struct UiState {
    pub frequency_text: String,
}

impl UiState {
    pub fn new(params: &AntennaParams) -> Self {
        Self {
            frequency_text: format_frequency(params.frequency_mhz),
        }
    }
}

/// Parse the frequency text box. Anything that is not a strictly positive,
/// finite number silently falls back to `fallback` — the initial default,
/// not the last valid value.
pub fn parse_frequency(text: &str, fallback: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f,
        _ => fallback,
    }
}

fn format_frequency(frequency_mhz: f64) -> String {
    format!("{frequency_mhz:.3}")
}

/// Draw the right-side control panel. Returns `true` if any antenna
/// parameter changed (meaning the model needs to be re-run).
pub fn draw_controls(
    ctx: &egui::Context,
    params: &mut AntennaParams,
    ui_state: &mut UiState,
) -> bool {
    let mut changed = false;
    let defaults = AntennaParams::default();

    egui::SidePanel::right("controls")
        .min_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Antenna Parameters");
            ui.separator();

            // --- Frequency ---
            ui.label("Frequency (MHz)");
            let response = ui.text_edit_singleline(&mut ui_state.frequency_text);
            let committed = response.lost_focus()
                || (response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
            if committed {
                let freq = parse_frequency(&ui_state.frequency_text, defaults.frequency_mhz);
                if freq != params.frequency_mhz {
                    params.frequency_mhz = freq;
                    changed = true;
                }
                // Echo the value actually in effect, silently correcting
                // rejected input.
                ui_state.frequency_text = format_frequency(freq);
            }

            ui.separator();

            // --- Velocity factor ---
            ui.label("Velocity Factor");
            let mut vf = params.velocity_factor as f32;
            if ui
                .add(egui::Slider::new(&mut vf, 0.80..=1.00).step_by(0.005))
                .changed()
            {
                params.velocity_factor = vf as f64;
                changed = true;
            }

            // --- Electrical length ---
            ui.label("Length (×λ)");
            let mut mult = params.length_multiplier as f32;
            if ui
                .add(egui::Slider::new(&mut mult, 0.25..=2.0).step_by(0.01))
                .changed()
            {
                params.length_multiplier = mult as f64;
                changed = true;
            }

            ui.separator();

            // --- Reset ---
            if ui.add(egui::Button::new("Reset")).clicked() {
                *params = defaults.clone();
                ui_state.frequency_text = format_frequency(params.frequency_mhz);
                changed = true;
            }
        });

    changed
}
