use std::f64::consts::E;

use crate::{
    taiko::difficulty::{
        color::data::{
            alternating_mono_pattern::AlternatingMonoPattern, mono_streak::MonoStreak,
            repeating_hit_patterns::RepeatingHitPatterns,
        },
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
    util::difficulty::logistic_exp,
};

pub struct ColorEvaluator;

impl ColorEvaluator {
    /// Color difficulty of an object.
    ///
    /// Only the first object of a mono streak, alternating pattern, or
    /// repeating pattern picks up that structure's difficulty.
    pub fn evaluate_difficulty_of(
        hit_object: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        let encoding = &objects.color;
        let color = &hit_object.color;
        let mut difficulty = 0.0;

        if let Some(mono_streak) = color.mono_streak.and_then(|idx| encoding.mono_streak(idx)) {
            if mono_streak.first_hit_object() == Some(hit_object.idx) {
                difficulty += Self::eval_mono_streak_diff(mono_streak, objects);
            }
        }

        if let Some(alternating) = color
            .alternating_mono_pattern
            .and_then(|idx| encoding.alternating_mono_pattern(idx))
        {
            if encoding.alternating_first_hit_object(alternating) == Some(hit_object.idx) {
                difficulty += Self::eval_alternating_mono_pattern_diff(alternating, objects);
            }
        }

        if let Some(repeating) = color
            .repeating_hit_patterns
            .and_then(|idx| encoding.repeating_hit_patterns(idx))
        {
            if encoding.repeating_first_hit_object(repeating) == Some(hit_object.idx) {
                difficulty += Self::eval_repeating_hit_patterns_diff(repeating);
            }
        }

        difficulty
    }

    fn eval_mono_streak_diff(mono_streak: &MonoStreak, objects: &TaikoDifficultyObjects) -> f64 {
        let parent_eval = objects
            .color
            .alternating_mono_pattern(mono_streak.parent)
            .map_or(1.0, |parent| {
                Self::eval_alternating_mono_pattern_diff(parent, objects)
            });

        logistic_exp(E * mono_streak.idx as f64 - 2.0 * E, None) * parent_eval * 0.5
    }

    fn eval_alternating_mono_pattern_diff(
        alternating_mono_pattern: &AlternatingMonoPattern,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        let parent_eval = objects
            .color
            .repeating_hit_patterns(alternating_mono_pattern.parent)
            .map_or(1.0, Self::eval_repeating_hit_patterns_diff);

        logistic_exp(E * alternating_mono_pattern.idx as f64 - 2.0 * E, None) * parent_eval
    }

    fn eval_repeating_hit_patterns_diff(repeating_hit_patterns: &RepeatingHitPatterns) -> f64 {
        let repetition_interval = repeating_hit_patterns.repetition_interval as f64;

        2.0 * (1.0 - logistic_exp(E * repetition_interval - 2.0 * E, None))
    }
}
