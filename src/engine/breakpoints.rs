//! Piecewise-constant step scaling from a raw rate to a 0-100 sub-score.

/// One band: any value at or above `min` scores `score`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub score: f64,
}

/// Ordered band table, highest threshold first, plus the score for values
/// that clear no band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub bands: &'static [Band],
    pub floor: f64,
}

/// Shorthand for building band tables in `const` context.
pub const fn band(min: f64, score: f64) -> Band {
    Band { min, score }
}

impl Breakpoints {
    /// First band (top-down) whose threshold the value meets; no interpolation.
    pub fn scale(&self, value: f64) -> f64 {
        self.bands
            .iter()
            .find(|b| value >= b.min)
            .map(|b| b.score)
            .unwrap_or(self.floor)
    }

    /// Thresholds strictly descending, scores non-increasing top to bottom,
    /// and every band at least as good as the floor.
    pub fn is_well_formed(&self) -> bool {
        let ordered = self
            .bands
            .windows(2)
            .all(|w| w[0].min > w[1].min && w[0].score >= w[1].score);
        let above_floor = self.bands.iter().all(|b| b.score >= self.floor);
        ordered && above_floor
    }
}
