use super::*;
use std::sync::Mutex;

struct RecordingHaptics {
    patterns: Mutex<Vec<Vec<u64>>>,
}

impl RecordingHaptics {
    fn new() -> Self {
        Self { patterns: Mutex::new(Vec::new()) }
    }
}

impl Haptics for RecordingHaptics {
    fn vibrate(&self, pattern: &[u64]) -> bool {
        self.patterns
            .lock()
            .expect("mock mutex should lock")
            .push(pattern.to_vec());
        true
    }
}

// =============================================================
// Haptics
// =============================================================

#[test]
fn vibration_patterns_escalate_with_threshold() {
    assert_eq!(vibration_pattern(25), &[100]);
    assert_eq!(vibration_pattern(50), &[150, 100, 150]);
    assert_eq!(vibration_pattern(75), &[200, 100, 200, 100, 200]);
    assert_eq!(vibration_pattern(100), &[300, 100, 300, 100, 300, 100, 300]);
}

#[test]
fn unknown_threshold_falls_back_to_short_pulse() {
    assert_eq!(vibration_pattern(10), &[100]);
}

#[test]
fn vibrate_for_dispatches_the_threshold_pattern() {
    let haptics = RecordingHaptics::new();
    vibrate_for(&haptics, 75);

    let recorded = haptics.patterns.lock().expect("mock mutex should lock");
    assert_eq!(recorded.as_slice(), &[vec![200, 100, 200, 100, 200]]);
}

#[test]
fn unsupported_haptics_degrade_silently() {
    // Must not panic or surface anything.
    vibrate_for(&NoHaptics, 100);
}

// =============================================================
// LED
// =============================================================

#[test]
fn led_hue_sweeps_green_to_red() {
    assert!((led_hue(0) - 120.0).abs() < f32::EPSILON);
    assert!((led_hue(25) - 90.0).abs() < f32::EPSILON);
    assert!((led_hue(50) - 60.0).abs() < f32::EPSILON);
    assert!((led_hue(75) - 30.0).abs() < f32::EPSILON);
    assert!(led_hue(100).abs() < f32::EPSILON);
}

#[test]
fn led_hue_is_monotone_decreasing() {
    let mut previous = led_hue(0);
    for level in 1..=100 {
        let hue = led_hue(level);
        assert!(hue <= previous, "hue increased at level {level}");
        previous = hue;
    }
}

#[test]
fn led_color_formats_css_hsl() {
    assert_eq!(led_color(0), "hsl(120, 80%, 50%)");
    assert_eq!(led_color(100), "hsl(0, 80%, 50%)");
}

// =============================================================
// Watch state
// =============================================================

#[test]
fn observe_updates_level_and_reports_crossings() {
    let mut watch = WatchState::new();
    assert_eq!(watch.observe(80), vec![25, 50, 75]);
    assert_eq!(watch.level, 80);
    assert!(watch.observe(85).is_empty());
}

#[test]
fn observe_clamps_overrange_readings() {
    let mut watch = WatchState::new();
    assert_eq!(watch.observe(250), vec![25, 50, 75, 100]);
    assert_eq!(watch.level, 100);
}

#[test]
fn observe_rearms_like_the_detector() {
    let mut watch = WatchState::new();
    watch.observe(60);
    watch.observe(40);
    assert_eq!(watch.observe(60), vec![50]);
}
