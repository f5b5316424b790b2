#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use rand::Rng;

use crate::client::activities::CATALOG;

/// Usage aggregate for one activity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActivityStats {
    pub count: u32,
    /// Running weighted average in [1, 5]; 0 until first rated.
    pub rating: f32,
}

/// Per-session aggregates for every catalog activity, in catalog order.
/// Dashboard-local: reset on logout, never round-tripped through the store.
#[derive(Clone, Debug)]
pub struct SessionStats {
    entries: Vec<(&'static str, ActivityStats)>,
}

impl SessionStats {
    /// Seed deterministically from the catalog values.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            entries: CATALOG
                .iter()
                .map(|a| (a.name, ActivityStats { count: a.seed_count, rating: a.seed_rating }))
                .collect(),
        }
    }

    /// The prototype's per-login random bootstrap, kept behind an explicit
    /// constructor. A production build would load persisted aggregates.
    pub fn randomized<R: Rng>(rng: &mut R) -> Self {
        Self {
            entries: CATALOG
                .iter()
                .map(|a| {
                    (
                        a.name,
                        ActivityStats {
                            count: rng.random_range(0..10),
                            rating: round10(rng.random_range(1.0_f32..5.0)),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Aggregate for one activity, by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ActivityStats> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, s)| *s)
    }

    /// One more completion of `name`. Returns the new count.
    pub fn increment(&mut self, name: &str) -> u32 {
        let Some(stats) = self.entry_mut(name) else {
            return 0;
        };
        stats.count += 1;
        stats.count
    }

    /// Blend a 1-5 rating into the running average, weighted by the
    /// post-increment count: `round10((old*(n-1) + value) / n)`. On a fresh
    /// activity `n` is 1, so the submitted value replaces any seed.
    /// Returns the new average.
    #[allow(clippy::cast_precision_loss)]
    pub fn rate(&mut self, name: &str, value: f32) -> f32 {
        let Some(stats) = self.entry_mut(name) else {
            return 0.0;
        };
        let n = stats.count.max(1);
        let value = value.clamp(1.0, 5.0);
        let blended = (stats.rating * (n - 1) as f32 + value) / n as f32;
        stats.rating = round10(blended).clamp(1.0, 5.0);
        stats.rating
    }

    /// Catalog entries ordered by descending rating. Stable: ties keep
    /// catalog order.
    #[must_use]
    pub fn sorted_by_rating(&self) -> Vec<(&'static str, ActivityStats)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.rating.partial_cmp(&a.1.rating).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut ActivityStats> {
        self.entries.iter_mut().find(|(n, _)| *n == name).map(|(_, s)| s)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Round to one decimal place.
#[must_use]
pub fn round10(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
