pub mod constants;
pub mod current_profile;
pub mod lengths;
pub mod wavelength;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Shared interface types — the render layer builds against these
// ---------------------------------------------------------------------------

/// User-adjustable parameters describing the full antenna state.
#[derive(Debug, Clone, PartialEq)]
pub struct AntennaParams {
    /// Operating frequency in MHz.
    pub frequency_mhz: f64,
    /// Velocity factor: ratio of conductor propagation speed to c (0–1).
    pub velocity_factor: f64,
    /// Electrical length of the antenna, in wavelengths.
    pub length_multiplier: f64,
}

impl Default for AntennaParams {
    fn default() -> Self {
        Self {
            frequency_mhz: 100.0,   // MHz
            velocity_factor: 0.95,
            length_multiplier: 0.5, // 0.5λ dipole (classic)
        }
    }
}

/// Results of a model evaluation — consumed by the UI for plotting and
/// the status readout.
#[derive(Debug, Clone)]
pub struct AntennaResult {
    /// Position samples along the antenna, in wavelengths (length N).
    pub positions: Vec<f64>,
    /// Normalized standing-wave current at each position sample.
    pub current: Vec<f64>,
    /// Free-space wavelength in metres.
    pub wavelength_m: f64,
    /// Physical end-to-end length in metres.
    pub total_length_m: f64,
    /// Physical length of one arm of the center-fed dipole in metres.
    pub arm_length_m: f64,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// The wavelength calculation requires a strictly positive, finite
    /// frequency. The UI substitutes its default before calling in, so in
    /// practice this is only reachable through direct library use.
    #[error("frequency must be a strictly positive, finite value in MHz, got {0}")]
    InvalidFrequency(f64),
}

/// Run the full model: wavelength and physical lengths from the parameters,
/// then the standing-wave current profile over the default position axis.
pub fn compute(params: &AntennaParams) -> Result<AntennaResult, ModelError> {
    let lengths = lengths::lengths(
        params.frequency_mhz,
        params.velocity_factor,
        params.length_multiplier,
    )?;

    let positions = current_profile::position_axis(
        constants::POSITION_SPAN_WAVELENGTHS,
        constants::POSITION_SAMPLES,
    );
    let current = current_profile::current_profile(&positions, params.length_multiplier);

    Ok(AntennaResult {
        positions,
        current,
        wavelength_m: lengths.wavelength_m,
        total_length_m: lengths.total_m,
        arm_length_m: lengths.arm_m,
    })
}
