use crate::constants::SPEED_OF_LIGHT;
use crate::ModelError;

/// Free-space wavelength in metres for a frequency given in MHz.
///
/// λ = c / f. Fails with [`ModelError::InvalidFrequency`] for zero,
/// negative, or non-finite input; substituting a default on bad input is
/// the caller's policy, not the model's.
pub fn wavelength_m(frequency_mhz: f64) -> Result<f64, ModelError> {
    if !frequency_mhz.is_finite() || frequency_mhz <= 0.0 {
        return Err(ModelError::InvalidFrequency(frequency_mhz));
    }
    Ok(SPEED_OF_LIGHT / (frequency_mhz * 1e6))
}
