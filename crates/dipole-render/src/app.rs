// eframe application: parameter state, recompute-on-change, panel layout.

use dipole_core::{AntennaParams, AntennaResult};
use log::error;

use crate::{geometry_view, plot_view, ui, ui::UiState};

pub struct App {
    params: AntennaParams,
    ui_state: UiState,
    result: AntennaResult,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let params = AntennaParams::default();
        let result = dipole_core::compute(&params).expect("default params must be valid");
        let ui_state = UiState::new(&params);

        Self {
            params,
            ui_state,
            result,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Controls first, so the schematic and plot below always render the
        // result computed from this frame's parameters.
        let changed = ui::draw_controls(ctx, &mut self.params, &mut self.ui_state);

        if changed {
            match dipole_core::compute(&self.params) {
                Ok(result) => self.result = result,
                Err(e) => {
                    // Keep the previous curve. The frequency fallback in the
                    // controls normally makes this unreachable.
                    error!("model evaluation failed: {e}");
                }
            }
        }

        geometry_view::draw_geometry(ctx, &self.params, &self.result);
        plot_view::draw_current_plot(ctx, &self.params, &self.result);
    }
}
