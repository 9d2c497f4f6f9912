//! Per-atom exposure score → RGB color mapping.
//!
//! Scores come from [`crate::analysis::exposure_scores`] and are already
//! normalized to [0, 1], so the score is sampled on the ramp directly.
//! Default ramp: blue (buried) → cyan → yellow → red (exposed).

/// A color ramp defined by N evenly-spaced color stops.
/// `t = 0` maps to the first color, `t = 1` maps to the last.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<[f32; 3]>,
}

impl ColorRamp {
    /// Build a ramp from at least two color stops.
    #[must_use]
    pub fn new(stops: Vec<[f32; 3]>) -> Option<Self> {
        (stops.len() >= 2).then_some(Self { stops })
    }

    /// Interpolate the ramp at position `t` in [0, 1].
    #[must_use]
    pub fn sample(&self, t: f32) -> [f32; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len() - 1;
        let scaled = t * n as f32;
        let idx = (scaled as usize).min(n - 1);
        let frac = scaled - idx as f32;

        let a = &self.stops[idx];
        let b = &self.stops[idx + 1];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }
}

impl Default for ColorRamp {
    /// Blue → Cyan → Yellow → Red
    fn default() -> Self {
        Self {
            stops: vec![
                [0.15, 0.25, 0.95], // blue (buried)
                [0.1, 0.85, 0.95],  // cyan
                [1.0, 0.9, 0.1],    // yellow
                [0.9, 0.15, 0.1],   // red (exposed)
            ],
        }
    }
}

/// Exposure heat-map colors using the default ramp.
#[must_use]
pub fn exposure_colors(scores: &[f32]) -> Vec<[f32; 3]> {
    exposure_colors_with_ramp(scores, &ColorRamp::default())
}

/// Exposure heat-map colors using a custom ramp.
#[must_use]
pub fn exposure_colors_with_ramp(
    scores: &[f32],
    ramp: &ColorRamp,
) -> Vec<[f32; 3]> {
    scores.iter().map(|&s| ramp.sample(s)).collect()
}
