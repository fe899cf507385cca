/// Free-space speed of light in m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Half-width of the default position axis, in wavelengths. The axis spans
/// [-1.5λ, 1.5λ] so the longest selectable antenna (2λ, arms out to ±1λ)
/// fits with margin on either side.
pub const POSITION_SPAN_WAVELENGTHS: f64 = 1.5;

/// Number of samples on the default position axis.
pub const POSITION_SAMPLES: usize = 2000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_covers_longest_antenna() {
        // Largest length multiplier offered by the UI is 2.0λ.
        assert!(POSITION_SPAN_WAVELENGTHS >= 2.0 / 2.0);
    }

    #[test]
    fn test_speed_of_light_exact() {
        assert_eq!(SPEED_OF_LIGHT, 299_792_458.0);
    }
}
