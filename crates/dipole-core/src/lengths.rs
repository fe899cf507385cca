use crate::wavelength::wavelength_m;
use crate::ModelError;

/// Physical lengths derived from frequency, velocity factor, and the
/// electrical length multiplier. All fields in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipoleLengths {
    /// Free-space wavelength.
    pub wavelength_m: f64,
    /// End-to-end conductor length: multiplier × λ × VF.
    pub total_m: f64,
    /// One arm of the center-fed dipole: total / 2.
    pub arm_m: f64,
}

/// Compute the physical lengths of a center-fed dipole.
///
/// The velocity factor accounts for end effects and dielectric loading,
/// shortening the physical antenna relative to its free-space electrical
/// length. Velocity factor and multiplier are taken as-is: values outside
/// the UI's slider bounds are still mathematically valid here, and bounds
/// enforcement stays a UI concern.
pub fn lengths(
    frequency_mhz: f64,
    velocity_factor: f64,
    length_multiplier: f64,
) -> Result<DipoleLengths, ModelError> {
    let wavelength_m = wavelength_m(frequency_mhz)?;
    let total_m = length_multiplier * wavelength_m * velocity_factor;
    Ok(DipoleLengths {
        wavelength_m,
        total_m,
        arm_m: total_m / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The classic half-wave case from the tool's defaults:
    /// 100 MHz, VF 0.95, 0.5λ.
    #[test]
    fn test_half_wave_dipole_at_100_mhz() {
        let l = lengths(100.0, 0.95, 0.5).expect("valid params");
        assert!((l.wavelength_m - 2.99792458).abs() < 1e-12, "λ = {}", l.wavelength_m);
        assert!(
            (l.total_m - 1.42401).abs() < 1e-5,
            "total = {} m, expected ≈ 1.42401 m",
            l.total_m
        );
        assert!(
            (l.arm_m - 0.71200).abs() < 1e-5,
            "arm = {} m, expected ≈ 0.71200 m",
            l.arm_m
        );
    }

    /// Each arm is exactly half of the total, across a parameter grid.
    #[test]
    fn test_arm_is_exactly_half_of_total() {
        for f in [1.0, 7.1, 27.185, 100.0, 446.0] {
            for vf in [0.80, 0.91, 0.95, 1.00] {
                for mult in [0.25, 0.5, 1.0, 1.5, 2.0] {
                    let l = lengths(f, vf, mult).expect("valid params");
                    assert_eq!(
                        l.arm_m,
                        l.total_m / 2.0,
                        "arm must equal total/2 at f={f}, vf={vf}, mult={mult}"
                    );
                }
            }
        }
    }

    /// Out-of-slider-range values are still accepted by the model.
    #[test]
    fn test_values_beyond_ui_bounds_accepted() {
        let l = lengths(100.0, 0.66, 3.0).expect("model accepts out-of-range VF/multiplier");
        assert!((l.total_m - 3.0 * 2.99792458 * 0.66).abs() < 1e-9);
    }

    #[test]
    fn test_total_scales_linearly_with_multiplier() {
        let base = lengths(50.0, 0.95, 0.5).expect("valid params");
        let doubled = lengths(50.0, 0.95, 1.0).expect("valid params");
        assert!((doubled.total_m - 2.0 * base.total_m).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_frequency_propagates() {
        assert_eq!(
            lengths(0.0, 0.95, 0.5),
            Err(ModelError::InvalidFrequency(0.0))
        );
        assert!(lengths(-7.0, 0.95, 0.5).is_err());
    }
}
