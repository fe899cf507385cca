use std::f64::consts::PI;

/// Evenly spaced position axis over `[-span, span]` wavelengths, symmetric
/// about zero, with `samples` points including both endpoints.
pub fn position_axis(span: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![-span],
        _ => {
            let step = 2.0 * span / (samples - 1) as f64;
            (0..samples).map(|i| -span + i as f64 * step).collect()
        }
    }
}

/// Standing-wave current along a center-fed dipole, one value per position.
///
/// Positions and the antenna length are both in wavelength units, so the
/// propagation constant is 2π: I(x) = sin(2π·(L/2 − |x|)) inside the
/// conductor and 0 beyond its ends. This forces zero current at the tips
/// and, for the classic 0.5λ case, a single lobe peaking at the feed point.
///
/// Each sample depends only on its own position, so the pass is trivially
/// parallelizable; a plain map is all the default axis needs.
pub fn current_profile(positions: &[f64], length_multiplier: f64) -> Vec<f64> {
    let half = length_multiplier / 2.0;
    positions
        .iter()
        .map(|&x| {
            if x.abs() <= half {
                (2.0 * PI * (half - x.abs())).sin()
            } else {
                0.0
            }
        })
        .collect()
}
