#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use tracing::debug;

use crate::client::detector::ThresholdDetector;

// =============================================================================
// HAPTICS
// =============================================================================

/// Haptic output seam. A surface that cannot vibrate returns false.
pub trait Haptics {
    fn vibrate(&self, pattern: &[u64]) -> bool;
}

/// Haptics for surfaces without a vibration motor.
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&self, _pattern: &[u64]) -> bool {
        false
    }
}

/// Vibration pattern for a threshold, stronger for higher levels.
/// Alternating on/off durations in milliseconds.
#[must_use]
pub fn vibration_pattern(threshold: u8) -> &'static [u64] {
    match threshold {
        50 => &[150, 100, 150],
        75 => &[200, 100, 200, 100, 200],
        100 => &[300, 100, 300, 100, 300, 100, 300],
        _ => &[100],
    }
}

/// Dispatch a vibration. An unsupported device degrades to a debug note;
/// never surfaced to the user.
pub fn vibrate_for(haptics: &dyn Haptics, threshold: u8) {
    if !haptics.vibrate(vibration_pattern(threshold)) {
        debug!(threshold, "vibration unsupported on this device");
    }
}

// =============================================================================
// LED
// =============================================================================

/// LED background hue: green (120) at level 0 down to red (0) at 100,
/// sweeping 30 degrees per band.
#[must_use]
pub fn led_hue(level: u8) -> f32 {
    let level = f32::from(level.min(100));
    if level <= 25.0 {
        120.0 - level / 25.0 * 30.0
    } else if level <= 50.0 {
        90.0 - (level - 25.0) / 25.0 * 30.0
    } else if level <= 75.0 {
        60.0 - (level - 50.0) / 25.0 * 30.0
    } else {
        30.0 - (level - 75.0) / 25.0 * 30.0
    }
}

/// CSS color string for the LED background.
#[must_use]
pub fn led_color(level: u8) -> String {
    format!("hsl({:.0}, 80%, 50%)", led_hue(level))
}

// =============================================================================
// WATCH STATE
// =============================================================================

/// Watch surface state: the displayed level plus threshold detection.
#[derive(Clone, Debug, Default)]
pub struct WatchState {
    pub level: u8,
    detector: ThresholdDetector,
}

impl WatchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a replicated level reading. Returns the thresholds to publish
    /// as events, ascending.
    pub fn observe(&mut self, level: u8) -> Vec<u8> {
        self.level = level.min(100);
        self.detector.observe(self.level)
    }
}
