use crate::taiko::difficulty::object::{TaikoDifficultyObject, TaikoDifficultyObjects};

/// Color patterns a difficulty object belongs to.
///
/// All indices point into the lists of the
/// [`ColorEncoding`](super::ColorEncoding).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorData {
    pub mono_streak: Option<usize>,
    /// Position of the object within its mono streak.
    pub mono_position: usize,
    pub alternating_mono_pattern: Option<usize>,
    pub repeating_hit_patterns: Option<usize>,
}

impl ColorData {
    /// The last note before the mono streak of this object started.
    pub fn previous_color_change<'a>(
        &self,
        hit_objects: &'a TaikoDifficultyObjects,
    ) -> Option<&'a TaikoDifficultyObject> {
        self.mono_streak
            .and_then(|idx| hit_objects.color.mono_streak(idx))
            .and_then(|mono| mono.first_hit_object())
            .and_then(|idx| hit_objects.get(idx))
            .and_then(|h| hit_objects.previous_note(h, 0))
    }

    /// The first note after the mono streak of this object ended.
    pub fn next_color_change<'a>(
        &self,
        hit_objects: &'a TaikoDifficultyObjects,
    ) -> Option<&'a TaikoDifficultyObject> {
        self.mono_streak
            .and_then(|idx| hit_objects.color.mono_streak(idx))
            .and_then(|mono| mono.last_hit_object())
            .and_then(|idx| hit_objects.get(idx))
            .and_then(|h| hit_objects.next_note(h, 0))
    }
}
