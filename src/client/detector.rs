#[cfg(test)]
#[path = "detector_test.rs"]
mod detector_test;

use crate::state::THRESHOLDS;

/// Converts a stream of stress-level readings into discrete upward
/// threshold crossings with hysteresis.
///
/// A threshold fires when the level moves from below it to at-or-above it,
/// then stays silenced until the level drops back below (re-arm). A single
/// reading jump can fire several thresholds at once, in ascending order.
#[derive(Clone, Debug, Default)]
pub struct ThresholdDetector {
    previous: u8,
    triggered: [bool; THRESHOLDS.len()],
}

impl ThresholdDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one reading. Returns the thresholds crossed upward by this
    /// reading, ascending. Exact equality counts as crossed.
    pub fn observe(&mut self, new_level: u8) -> Vec<u8> {
        let mut crossed = Vec::new();
        for (i, &threshold) in THRESHOLDS.iter().enumerate() {
            if self.previous < threshold && new_level >= threshold && !self.triggered[i] {
                self.triggered[i] = true;
                crossed.push(threshold);
            }
        }

        // Re-arm thresholds the level has dropped back below.
        for (i, &threshold) in THRESHOLDS.iter().enumerate() {
            if new_level < threshold {
                self.triggered[i] = false;
            }
        }

        self.previous = new_level;
        crossed
    }

    /// The last reading fed to the detector.
    #[must_use]
    pub fn previous_level(&self) -> u8 {
        self.previous
    }
}
