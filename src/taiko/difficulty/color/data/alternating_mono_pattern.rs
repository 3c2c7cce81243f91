use super::mono_streak::MonoStreak;

/// Consecutive [`MonoStreak`]s of equal length, alternating in hit type.
#[derive(Debug, Default)]
pub struct AlternatingMonoPattern {
    pub mono_streaks: Vec<usize>,
    /// Index of the enclosing [`RepeatingHitPatterns`].
    ///
    /// [`RepeatingHitPatterns`]: super::repeating_hit_patterns::RepeatingHitPatterns
    pub parent: usize,
    /// Position within the parent.
    pub idx: usize,
}

impl AlternatingMonoPattern {
    /// Same streak length, same amount of streaks, and starting on the same
    /// hit type.
    pub fn is_repetition_of(&self, other: &Self, mono_streaks: &[MonoStreak]) -> bool {
        self.has_identical_mono_len(other, mono_streaks)
            && self.mono_streaks.len() == other.mono_streaks.len()
            && first_streak(self, mono_streaks).map(|mono| mono.hit_type)
                == first_streak(other, mono_streaks).map(|mono| mono.hit_type)
    }

    pub fn has_identical_mono_len(&self, other: &Self, mono_streaks: &[MonoStreak]) -> bool {
        first_streak(self, mono_streaks).map(MonoStreak::run_len)
            == first_streak(other, mono_streaks).map(MonoStreak::run_len)
    }
}

fn first_streak<'a>(
    pattern: &AlternatingMonoPattern,
    mono_streaks: &'a [MonoStreak],
) -> Option<&'a MonoStreak> {
    pattern
        .mono_streaks
        .first()
        .and_then(|&idx| mono_streaks.get(idx))
}
