use crate::taiko::difficulty::object::TaikoDifficultyObjects;

use super::{
    data::{
        alternating_mono_pattern::AlternatingMonoPattern,
        mono_streak::MonoStreak,
        repeating_hit_patterns::{find_repetition_interval, RepeatingHitPatterns},
    },
    ColorEncoding,
};

pub struct ColorDifficultyPreprocessor;

impl ColorDifficultyPreprocessor {
    /// Encode the color patterns of all objects and store the result in
    /// `hit_objects`.
    ///
    /// Must run after every difficulty object has been pushed since streak
    /// boundaries depend on later objects.
    pub fn process_and_assign(hit_objects: &mut TaikoDifficultyObjects) {
        let mut encoding = Self::encode(hit_objects);

        for (pattern_idx, repeating) in encoding.repeating_hit_patterns.iter().enumerate() {
            for (i, &alternating_idx) in repeating.alternating_mono_patterns.iter().enumerate() {
                let alternating = &mut encoding.alternating_mono_patterns[alternating_idx];
                alternating.parent = pattern_idx;
                alternating.idx = i;

                for (j, &mono_idx) in alternating.mono_streaks.iter().enumerate() {
                    let mono = &mut encoding.mono_streaks[mono_idx];
                    mono.parent = alternating_idx;
                    mono.idx = j;

                    for (position, &obj_idx) in mono.hit_objects.iter().enumerate() {
                        let color = &mut hit_objects.objects[obj_idx].color;
                        color.mono_streak = Some(mono_idx);
                        color.mono_position = position;
                        color.alternating_mono_pattern = Some(alternating_idx);
                        color.repeating_hit_patterns = Some(pattern_idx);
                    }
                }
            }
        }

        log_trace!(
            mono_streaks = encoding.mono_streaks.len(),
            alternating_mono_patterns = encoding.alternating_mono_patterns.len(),
            repeating_hit_patterns = encoding.repeating_hit_patterns.len(),
            "Encoded color patterns"
        );

        hit_objects.color = encoding;
    }

    fn encode(hit_objects: &TaikoDifficultyObjects) -> ColorEncoding {
        let mono_streaks = Self::encode_mono_streaks(hit_objects);
        let alternating_mono_patterns = Self::encode_alternating_mono_patterns(&mono_streaks);
        let mut repeating_hit_patterns =
            Self::encode_repeating_hit_patterns(&alternating_mono_patterns, &mono_streaks);

        for idx in 0..repeating_hit_patterns.len() {
            find_repetition_interval(
                &mut repeating_hit_patterns,
                idx,
                &alternating_mono_patterns,
                &mono_streaks,
            );
        }

        ColorEncoding {
            mono_streaks,
            alternating_mono_patterns,
            repeating_hit_patterns,
        }
    }

    fn encode_mono_streaks(hit_objects: &TaikoDifficultyObjects) -> Vec<MonoStreak> {
        let mut mono_streaks: Vec<MonoStreak> = Vec::new();

        for curr in hit_objects.iter() {
            let continues_streak = hit_objects
                .previous_note(curr, 0)
                .is_some_and(|prev| prev.base_hit_type == curr.base_hit_type);

            if !continues_streak || mono_streaks.is_empty() {
                mono_streaks.push(MonoStreak::new(curr.base_hit_type));
            }

            if let Some(streak) = mono_streaks.last_mut() {
                streak.hit_objects.push(curr.idx);
            }
        }

        mono_streaks
    }

    fn encode_alternating_mono_patterns(mono_streaks: &[MonoStreak]) -> Vec<AlternatingMonoPattern> {
        let mut patterns: Vec<AlternatingMonoPattern> = Vec::new();
        let mut prev_run_len = None;

        for (mono_idx, mono) in mono_streaks.iter().enumerate() {
            let run_len = mono.run_len();

            if prev_run_len != Some(run_len) {
                patterns.push(AlternatingMonoPattern::default());
            }

            prev_run_len = Some(run_len);

            if let Some(curr) = patterns.last_mut() {
                curr.mono_streaks.push(mono_idx);
            }
        }

        patterns
    }

    fn encode_repeating_hit_patterns(
        alternating: &[AlternatingMonoPattern],
        mono_streaks: &[MonoStreak],
    ) -> Vec<RepeatingHitPatterns> {
        let is_coupled = |i: usize| {
            alternating
                .get(i + 2)
                .is_some_and(|other| alternating[i].is_repetition_of(other, mono_streaks))
        };

        let mut patterns = Vec::new();
        let mut i = 0;

        while i < alternating.len() {
            let prev = patterns.len().checked_sub(1);
            let mut curr = RepeatingHitPatterns::new(prev);

            if is_coupled(i) {
                while is_coupled(i) {
                    curr.alternating_mono_patterns.push(i);
                    i += 1;
                }

                // * Skip over viewed data and add the rest to the pattern
                curr.alternating_mono_patterns.push(i);
                curr.alternating_mono_patterns.push(i + 1);
                i += 1;
            } else {
                curr.alternating_mono_patterns.push(i);
            }

            patterns.push(curr);
            i += 1;
        }

        patterns
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::hit_object::{HitType, RawHitEvent},
        taiko::difficulty::DifficultyValues,
    };

    use super::*;

    fn objects(hit_types: &str) -> TaikoDifficultyObjects {
        let events: Vec<_> = "cc"
            .chars()
            .chain(hit_types.chars())
            .enumerate()
            .map(|(i, c)| {
                let hit_type = if c == 'r' { HitType::Rim } else { HitType::Center };

                RawHitEvent::new(i as f64 * 100.0, hit_type)
            })
            .collect();

        DifficultyValues::create_difficulty_objects(&events, 1.0)
    }

    #[test]
    fn streaks_and_patterns() {
        let objects = objects("ccrrccrc");
        let encoding = &objects.color;

        let run_lens: Vec<_> = encoding.mono_streaks.iter().map(MonoStreak::run_len).collect();
        assert_eq!(run_lens, vec![2, 2, 2, 1, 1]);

        let alternating: Vec<_> = encoding
            .alternating_mono_patterns
            .iter()
            .map(|pattern| pattern.mono_streaks.clone())
            .collect();
        assert_eq!(alternating, vec![vec![0, 1, 2], vec![3, 4]]);

        assert_eq!(encoding.repeating_hit_patterns.len(), 2);
        assert!(encoding
            .repeating_hit_patterns
            .iter()
            .all(|pattern| pattern.repetition_interval == 17));

        let color = &objects.objects[5].color;
        assert_eq!(color.mono_streak, Some(2));
        assert_eq!(color.mono_position, 1);
        assert_eq!(color.alternating_mono_pattern, Some(0));
        assert_eq!(color.repeating_hit_patterns, Some(0));

        let last = &encoding.mono_streaks[4];
        assert_eq!((last.parent, last.idx), (1, 1));
        assert_eq!(encoding.alternating_mono_patterns[1].parent, 1);
        assert_eq!(encoding.alternating_mono_patterns[1].idx, 0);
    }

    #[test]
    fn coupled_alternating_patterns() {
        let objects = objects("crccrrcrccrr");
        let encoding = &objects.color;

        assert_eq!(encoding.alternating_mono_patterns.len(), 4);
        assert_eq!(encoding.repeating_hit_patterns.len(), 1);
        assert_eq!(
            encoding.repeating_hit_patterns[0].alternating_mono_patterns,
            vec![0, 1, 2, 3]
        );

        let indices: Vec<_> = encoding
            .alternating_mono_patterns
            .iter()
            .map(|pattern| (pattern.parent, pattern.idx))
            .collect();
        assert_eq!(indices, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn color_changes() {
        let objects = objects("ccrrrc");

        // inside the rim streak
        let curr = &objects.objects[3];
        let prev_change = curr.color.previous_color_change(&objects).map(|h| h.idx);
        let next_change = curr.color.next_color_change(&objects).map(|h| h.idx);

        assert_eq!(prev_change, Some(1));
        assert_eq!(next_change, Some(5));

        let first = &objects.objects[0];
        assert_eq!(first.color.previous_color_change(&objects), None);
    }

    #[test]
    fn empty_input() {
        let objects = objects("");

        assert!(objects.is_empty());
        assert!(objects.color.mono_streaks.is_empty());
        assert!(objects.color.repeating_hit_patterns.is_empty());
    }
}
