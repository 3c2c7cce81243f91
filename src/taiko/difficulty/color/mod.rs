use self::data::{
    alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak,
    repeating_hit_patterns::RepeatingHitPatterns,
};

pub mod color_data;
pub mod data;
pub mod preprocessor;

/// Color patterns of all difficulty objects.
///
/// Each level only refers to its neighbours and children through indices
/// into the respective list.
#[derive(Debug, Default)]
pub struct ColorEncoding {
    pub mono_streaks: Vec<MonoStreak>,
    pub alternating_mono_patterns: Vec<AlternatingMonoPattern>,
    pub repeating_hit_patterns: Vec<RepeatingHitPatterns>,
}

impl ColorEncoding {
    pub fn mono_streak(&self, idx: usize) -> Option<&MonoStreak> {
        self.mono_streaks.get(idx)
    }

    pub fn alternating_mono_pattern(&self, idx: usize) -> Option<&AlternatingMonoPattern> {
        self.alternating_mono_patterns.get(idx)
    }

    pub fn repeating_hit_patterns(&self, idx: usize) -> Option<&RepeatingHitPatterns> {
        self.repeating_hit_patterns.get(idx)
    }

    /// Index of the first difficulty object within an alternating pattern.
    pub fn alternating_first_hit_object(&self, pattern: &AlternatingMonoPattern) -> Option<usize> {
        pattern
            .mono_streaks
            .first()
            .and_then(|&idx| self.mono_streak(idx))
            .and_then(MonoStreak::first_hit_object)
    }

    /// Index of the first difficulty object within a repeating pattern.
    pub fn repeating_first_hit_object(&self, pattern: &RepeatingHitPatterns) -> Option<usize> {
        pattern
            .alternating_mono_patterns
            .first()
            .and_then(|&idx| self.alternating_mono_pattern(idx))
            .and_then(|alternating| self.alternating_first_hit_object(alternating))
    }
}
