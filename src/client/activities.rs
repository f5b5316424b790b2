#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

// =============================================================================
// ICONS
// =============================================================================

/// Closed set of activity icons. Rendering dispatch is exhaustive, so a new
/// activity kind is a compile-checked addition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityIcon {
    Walk,
    Music,
    Breathe,
    Stretch,
    Draw,
    Puzzle,
    Yoga,
}

impl ActivityIcon {
    /// Animation class tag used by the presentation layer.
    #[must_use]
    pub fn animation_label(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Music => "music",
            Self::Breathe => "breathe",
            Self::Stretch => "stretch",
            Self::Draw => "draw",
            Self::Puzzle => "puzzle",
            Self::Yoga => "yoga",
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// One catalog activity. Seed values bootstrap a fresh session's stats.
#[derive(Clone, Copy, Debug)]
pub struct Activity {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: ActivityIcon,
    pub instructions: &'static [&'static str],
    pub seed_rating: f32,
    pub seed_count: u32,
}

pub static CATALOG: [Activity; 7] = [
    Activity {
        name: "Walk",
        description: "A short walk outside clears the head and resets your pace.",
        icon: ActivityIcon::Walk,
        instructions: &[
            "Put on comfortable shoes and clothes",
            "Step outside or use a treadmill",
            "Walk at a relaxed pace for 10-15 minutes",
            "Focus on your breathing and surroundings",
            "Gradually return to your starting point",
        ],
        seed_rating: 4.8,
        seed_count: 5,
    },
    Activity {
        name: "Listen to music",
        description: "Calming music slows your breathing and softens focus.",
        icon: ActivityIcon::Music,
        instructions: &[
            "Find a quiet, comfortable space",
            "Put on headphones for best experience",
            "Choose calming or favorite music",
            "Close your eyes and focus on the melody",
            "Let the music guide your breathing",
        ],
        seed_rating: 4.0,
        seed_count: 4,
    },
    Activity {
        name: "Breathe",
        description: "A guided breathing cycle to bring your heart rate down.",
        icon: ActivityIcon::Breathe,
        instructions: &[
            "Sit or lie down comfortably",
            "Inhale slowly through your nose for 4 seconds",
            "Hold your breath for 4 seconds",
            "Exhale slowly through your mouth for 6 seconds",
            "Repeat 5-10 times",
        ],
        seed_rating: 4.0,
        seed_count: 2,
    },
    Activity {
        name: "Stretch",
        description: "Gentle stretches release tension held in the shoulders and back.",
        icon: ActivityIcon::Stretch,
        instructions: &[
            "Stand up and find some space",
            "Reach your arms above your head",
            "Gently bend to each side",
            "Roll your shoulders back and forward",
            "Hold each stretch for 15-30 seconds",
        ],
        seed_rating: 2.5,
        seed_count: 2,
    },
    Activity {
        name: "Draw",
        description: "Free-form drawing moves attention away from the stressor.",
        icon: ActivityIcon::Draw,
        instructions: &[
            "Get paper and pencils or pens",
            "Find a quiet spot to sit",
            "Draw anything that comes to mind",
            "Focus on the process, not the result",
            "Spend at least 10 minutes drawing",
        ],
        seed_rating: 3.5,
        seed_count: 2,
    },
    Activity {
        name: "Sudoku",
        description: "A small logic puzzle gives a racing mind one thing to do.",
        icon: ActivityIcon::Puzzle,
        instructions: &[
            "Open a Sudoku app or get a puzzle book",
            "Start with an easy difficulty level",
            "Focus on one section at a time",
            "Use logic to fill in the numbers",
            "Take breaks if you feel frustrated",
        ],
        seed_rating: 3.5,
        seed_count: 2,
    },
    Activity {
        name: "Yoga",
        description: "Basic poses and slow breathing to unwind the whole body.",
        icon: ActivityIcon::Yoga,
        instructions: &[
            "Find a quiet space with a mat",
            "Start with basic stretching poses",
            "Focus on your breathing throughout",
            "Hold each pose for 30-60 seconds",
            "End with a few minutes of relaxation",
        ],
        seed_rating: 0.0,
        seed_count: 0,
    },
];

/// Look up a catalog activity by its unique name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Activity> {
    CATALOG.iter().find(|a| a.name == name)
}

/// Which activity a notification suggests for a given threshold.
#[must_use]
pub fn suggested_for(threshold: u8) -> &'static Activity {
    let name = if threshold >= 75 {
        "Breathe"
    } else if threshold >= 50 {
        "Listen to music"
    } else {
        "Walk"
    };
    find(name).unwrap_or(&CATALOG[0])
}

// =============================================================================
// LEVEL PRESENTATION
// =============================================================================

/// Face shown for a stress level band.
#[must_use]
pub fn stress_emoji(level: u8) -> &'static str {
    if level <= 25 {
        "😊"
    } else if level <= 50 {
        "😐"
    } else if level <= 75 {
        "😟"
    } else {
        "😰"
    }
}

/// Band color (hex) for a stress level.
#[must_use]
pub fn stress_color(level: u8) -> &'static str {
    if level <= 25 {
        "#4ade80"
    } else if level <= 50 {
        "#facc15"
    } else if level <= 75 {
        "#fb923c"
    } else {
        "#f87171"
    }
}

/// Simulated per-day levels shown on the home view.
pub const DEMO_DAILY_STATS: [(&str, u8); 5] =
    [("21.12", 15), ("20.12", 20), ("19.12", 70), ("18.12", 25), ("17.12", 30)];
