use std::cmp;

use super::{alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak};

const MAX_REPETITION_INTERVAL: usize = 16;

/// [`AlternatingMonoPattern`]s that are coupled by repetition.
#[derive(Debug)]
pub struct RepeatingHitPatterns {
    pub alternating_mono_patterns: Vec<usize>,
    /// Index of the preceding pattern.
    pub prev: Option<usize>,
    /// Amount of patterns between this one and its closest earlier
    /// repetition, or one above the maximum if there is none.
    pub repetition_interval: usize,
}

impl RepeatingHitPatterns {
    pub const fn new(prev: Option<usize>) -> Self {
        Self {
            alternating_mono_patterns: Vec::new(),
            prev,
            repetition_interval: 0,
        }
    }

    fn is_repetition_of(
        &self,
        other: &Self,
        alternating: &[AlternatingMonoPattern],
        mono_streaks: &[MonoStreak],
    ) -> bool {
        if self.alternating_mono_patterns.len() != other.alternating_mono_patterns.len() {
            return false;
        }

        self.alternating_mono_patterns
            .iter()
            .zip(other.alternating_mono_patterns.iter())
            .take(2)
            .all(|(&self_idx, &other_idx)| {
                match (alternating.get(self_idx), alternating.get(other_idx)) {
                    (Some(this), Some(other)) => this.has_identical_mono_len(other, mono_streaks),
                    _ => false,
                }
            })
    }
}

/// Assign the repetition interval of the pattern at `idx`.
///
/// Looks at most [`MAX_REPETITION_INTERVAL`] patterns back.
pub fn find_repetition_interval(
    patterns: &mut [RepeatingHitPatterns],
    idx: usize,
    alternating: &[AlternatingMonoPattern],
    mono_streaks: &[MonoStreak],
) {
    let Some(this) = patterns.get(idx) else {
        return;
    };

    let mut interval_found = MAX_REPETITION_INTERVAL + 1;

    if let Some(mut other_idx) = this.prev {
        let mut interval = 1;

        while interval < MAX_REPETITION_INTERVAL {
            if this.is_repetition_of(&patterns[other_idx], alternating, mono_streaks) {
                interval_found = cmp::min(interval, MAX_REPETITION_INTERVAL);

                break;
            }

            let Some(prev) = patterns[other_idx].prev else {
                break;
            };

            other_idx = prev;
            interval += 1;
        }
    }

    patterns[idx].repetition_interval = interval_found;
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::HitType;

    use super::*;

    fn streak(hit_type: HitType, len: usize) -> MonoStreak {
        let mut streak = MonoStreak::new(hit_type);
        streak.hit_objects = (0..len).collect();

        streak
    }

    fn single(mono: usize) -> AlternatingMonoPattern {
        AlternatingMonoPattern {
            mono_streaks: vec![mono],
            ..Default::default()
        }
    }

    #[test]
    fn no_previous_pattern() {
        let mut patterns = [RepeatingHitPatterns::new(None)];
        find_repetition_interval(&mut patterns, 0, &[], &[]);

        assert_eq!(patterns[0].repetition_interval, MAX_REPETITION_INTERVAL + 1);
    }

    #[test]
    fn repetition_two_patterns_back() {
        let mono_streaks = [
            streak(HitType::Center, 2),
            streak(HitType::Rim, 3),
            streak(HitType::Center, 2),
        ];
        let alternating = [single(0), single(1), single(2)];

        let mut patterns: Vec<_> = (0..3_usize)
            .map(|i| {
                let mut pattern = RepeatingHitPatterns::new(i.checked_sub(1));
                pattern.alternating_mono_patterns.push(i);

                pattern
            })
            .collect();

        for idx in 0..patterns.len() {
            find_repetition_interval(&mut patterns, idx, &alternating, &mono_streaks);
        }

        let intervals: Vec<_> = patterns.iter().map(|p| p.repetition_interval).collect();
        assert_eq!(intervals, vec![17, 17, 2]);
    }

    #[test]
    fn interval_is_bounded() {
        let mono_streaks: Vec<_> = (1..=20).map(|len| streak(HitType::Center, len)).collect();
        let alternating: Vec<_> = (0..20).map(single).collect();

        let mut patterns: Vec<_> = (0..21_usize)
            .map(|i| {
                let mut pattern = RepeatingHitPatterns::new(i.checked_sub(1));
                // last pattern repeats the very first one, 20 patterns back
                pattern.alternating_mono_patterns.push(i % 20);

                pattern
            })
            .collect();

        find_repetition_interval(&mut patterns, 20, &alternating, &mono_streaks);

        assert_eq!(patterns[20].repetition_interval, MAX_REPETITION_INTERVAL + 1);
    }
}
