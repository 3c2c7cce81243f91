use crate::{
    any::difficulty::skills::{SkillConstants, StrainDecaySkill, StrainSkill, StrainState},
    taiko::difficulty::{
        config::StarRatingConfig,
        evaluators::ColorEvaluator,
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
};

#[derive(Clone, Debug)]
pub struct Color {
    state: StrainState,
    constants: SkillConstants,
    current_strain: f64,
}

impl Color {
    pub fn new(config: &StarRatingConfig) -> Self {
        Self {
            state: StrainState::new(config.section_length, config.decay_weight),
            constants: config.color,
            current_strain: 0.0,
        }
    }
}

impl StrainSkill for Color {
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

impl StrainDecaySkill for Color {
    fn constants(&self) -> SkillConstants {
        self.constants
    }

    fn current_strain(&self) -> f64 {
        self.current_strain
    }

    fn current_strain_mut(&mut self) -> &mut f64 {
        &mut self.current_strain
    }

    fn strain_value_of(
        &mut self,
        curr: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        ColorEvaluator::evaluate_difficulty_of(curr, objects)
    }
}
