use crate::{
    any::difficulty::{
        object::IDifficultyObject,
        skills::{strain_decay, SkillConstants, StrainSkill, StrainState},
    },
    taiko::difficulty::{
        config::StarRatingConfig,
        evaluators::StaminaEvaluator,
        object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    },
};

/// Stamina of both hands, or of a single hand when `single_color` is set.
#[derive(Clone, Debug)]
pub struct Stamina {
    state: StrainState,
    constants: SkillConstants,
    single_color: bool,
    current_strain: f64,
}

impl Stamina {
    pub fn new(config: &StarRatingConfig, single_color: bool) -> Self {
        Self {
            state: StrainState::new(config.section_length, config.decay_weight),
            constants: config.stamina,
            single_color,
            current_strain: 0.0,
        }
    }
}

impl StrainSkill for Stamina {
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

    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        if self.single_color {
            return 0.0;
        }

        let prev_start_time = curr
            .previous(0, objects)
            .map_or(0.0, |prev| prev.start_time);

        self.current_strain
            * strain_decay(time - prev_start_time, self.constants.strain_decay_base)
    }

    fn strain_value_at(
        &mut self,
        curr: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) -> f64 {
        let SkillConstants {
            skill_multiplier,
            strain_decay_base,
        } = self.constants;

        self.current_strain *= strain_decay(curr.delta_time, strain_decay_base);
        self.current_strain += StaminaEvaluator::evaluate_diff_of(curr, objects) * skill_multiplier;

        if !self.single_color {
            return self.current_strain;
        }

        // * Safely prevents previous strains from shifting as new notes are added.
        let index = curr.color.mono_position as f64;

        self.current_strain / (1.0 + f64::exp(-(index - 10.0) / 2.0))
    }
}
