use crate::{
    any::difficulty::skills::{SkillConstants, StrainDecaySkill, StrainSkill, StrainState},
    taiko::difficulty::{
        config::StarRatingConfig,
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
        rhythm::{HitObjectRhythm, COMMON_RHYTHMS},
    },
    util::{float_ext::FloatExt, limited_queue::LimitedQueue},
};

const RHYTHM_HISTORY_MAX_LEN: usize = 8;

#[derive(Clone, Debug)]
pub struct Rhythm {
    state: StrainState,
    constants: SkillConstants,
    /// Decaying strain of the skill itself.
    current_decay_strain: f64,
    /// Strain of consecutive rhythm changes.
    current_strain: f64,
    notes_since_rhythm_change: usize,
    rhythm_history: LimitedQueue<HistoryElement, RHYTHM_HISTORY_MAX_LEN>,
}

impl Rhythm {
    const STRAIN_DECAY: f64 = 0.96;

    pub fn new(config: &StarRatingConfig) -> Self {
        Self {
            state: StrainState::new(config.section_length, config.decay_weight),
            constants: config.rhythm,
            current_decay_strain: 0.0,
            current_strain: 0.0,
            notes_since_rhythm_change: 0,
            rhythm_history: LimitedQueue::new(),
        }
    }

    fn repetition_penalties(&mut self, hit_object: &TaikoDifficultyObject) -> f64 {
        let mut penalty = 1.0;

        self.rhythm_history.push(HistoryElement::new(hit_object));

        let max_patterns = (RHYTHM_HISTORY_MAX_LEN / 2).min(self.rhythm_history.len());

        for most_recent_patterns_to_compare in 2..=max_patterns {
            let last_start = self.rhythm_history.len() - most_recent_patterns_to_compare;

            for start in (0..last_start).rev() {
                if !self.same_pattern(start, most_recent_patterns_to_compare) {
                    continue;
                }

                let notes_since = hit_object.idx - self.rhythm_history[start].idx;
                penalty *= Self::repetition_penalty(notes_since);

                break;
            }
        }

        penalty
    }

    fn same_pattern(&self, start: usize, most_recent_patterns_to_compare: usize) -> bool {
        let offset = self.rhythm_history.len() - most_recent_patterns_to_compare;

        (0..most_recent_patterns_to_compare).all(|i| {
            self.rhythm_history[start + i].rhythm == self.rhythm_history[offset + i].rhythm
        })
    }

    fn repetition_penalty(notes_since: usize) -> f64 {
        f64::min(1.0, 0.032 * notes_since as f64)
    }

    fn pattern_len_penalty(pattern_len: usize) -> f64 {
        let pattern_len = pattern_len as f64;
        let short_pattern_penalty = f64::min(0.15 * pattern_len, 1.0);
        let long_pattern_penalty = (2.5 - 0.15 * pattern_len).clamp(0.0, 1.0);

        f64::min(short_pattern_penalty, long_pattern_penalty)
    }

    fn speed_penalty(&mut self, hit_object_delta_time: f64) -> f64 {
        if hit_object_delta_time < 80.0 {
            return 1.0;
        }

        if hit_object_delta_time < 210.0 {
            return f64::max(0.0, 1.4 - 0.005 * hit_object_delta_time);
        }

        self.reset_rhythm_and_strain();

        0.0
    }

    fn reset_rhythm_and_strain(&mut self) {
        self.current_strain = 0.0;
        self.notes_since_rhythm_change = 0;
    }
}

impl StrainSkill for Rhythm {
    type DifficultyObject = TaikoDifficultyObject;
    type DifficultyObjects = TaikoDifficultyObjects;

    fn state(&self) -> &StrainState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StrainState {
        &mut self.state
    }

    fn into_state(self) -> StrainState {
        self.state
    }

    fn strain_value_at(
        &mut self,
        curr: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        self.decay_strain_value_at(curr, objects)
    }

    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        self.decay_initial_strain(time, curr, objects)
    }
}

impl StrainDecaySkill for Rhythm {
    fn constants(&self) -> SkillConstants {
        self.constants
    }

    fn current_strain(&self) -> f64 {
        self.current_decay_strain
    }

    fn current_strain_mut(&mut self) -> &mut f64 {
        &mut self.current_decay_strain
    }

    fn strain_value_of(&mut self, curr: &TaikoDifficultyObject, _: &TaikoDifficultyObjects) -> f64 {
        self.current_strain *= Self::STRAIN_DECAY;
        self.notes_since_rhythm_change += 1;

        // * rhythm difficulty zero (due to rhythm not changing) => no rhythm strain.
        if curr.rhythm.difficulty.eq(0.0) {
            return 0.0;
        }

        let mut obj_strain = curr.rhythm.difficulty;

        obj_strain *= self.repetition_penalties(curr);
        obj_strain *= Self::pattern_len_penalty(self.notes_since_rhythm_change);
        obj_strain *= self.speed_penalty(curr.delta_time);

        // * careful - needs to be done here since calls above read this value
        self.notes_since_rhythm_change = 0;

        self.current_strain += obj_strain;

        self.current_strain
    }
}

#[derive(Copy, Clone, Debug)]
struct HistoryElement {
    idx: usize,
    rhythm: &'static HitObjectRhythm,
}

impl HistoryElement {
    const fn new(difficulty_object: &TaikoDifficultyObject) -> Self {
        Self {
            idx: difficulty_object.idx,
            rhythm: difficulty_object.rhythm,
        }
    }
}

impl Default for HistoryElement {
    fn default() -> Self {
        Self {
            idx: 0,
            rhythm: &COMMON_RHYTHMS[0],
        }
    }
}
