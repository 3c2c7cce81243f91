use crate::util::{float_ext::FloatExt, strains_vec::StrainsVec};

use super::object::{HasDeltaTime, HasStartTime, IDifficultyObject, IDifficultyObjects};

/// Multiplier and decay base of a skill whose strain decays exponentially.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SkillConstants {
    /// Scales each object's strain contribution.
    pub skill_multiplier: f64,
    /// Fraction of the strain that remains after one second.
    pub strain_decay_base: f64,
}

/// Section bookkeeping shared by all strain skills.
#[derive(Clone, Debug)]
pub struct StrainState {
    section_length: f64,
    decay_weight: f64,
    current_section_peak: f64,
    current_section_end: f64,
    strain_peaks: StrainsVec,
    object_strains: Vec<f64>,
}

impl StrainState {
    pub fn new(section_length: f64, decay_weight: f64) -> Self {
        Self {
            section_length,
            decay_weight,
            current_section_peak: 0.0,
            current_section_end: 0.0,
            strain_peaks: StrainsVec::with_capacity(256),
            object_strains: Vec::with_capacity(256),
        }
    }

    #[cfg(test)]
    pub fn object_strains(&self) -> &[f64] {
        &self.object_strains
    }
}

pub trait StrainSkill: Sized {
    type DifficultyObject: IDifficultyObject<DifficultyObjects = Self::DifficultyObjects>
        + HasStartTime
        + HasDeltaTime;
    type DifficultyObjects: IDifficultyObjects + ?Sized;

    fn state(&self) -> &StrainState;

    fn state_mut(&mut self) -> &mut StrainState;

    fn into_state(self) -> StrainState;

    /// Returns the strain value at the given object and updates the skill's
    /// current strain.
    fn strain_value_at(
        &mut self,
        curr: &Self::DifficultyObject,
        objects: &Self::DifficultyObjects,
    ) -> f64;

    /// Strain level at the start of a new section that begins at `time`.
    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &Self::DifficultyObject,
        objects: &Self::DifficultyObjects,
    ) -> f64;

    fn process(&mut self, curr: &Self::DifficultyObject, objects: &Self::DifficultyObjects) {
        let section_length = self.state().section_length;

        // * The first object doesn't generate a strain, so we begin with an incremented section end
        if curr.idx() == 0 {
            self.state_mut().current_section_end =
                f64::ceil(curr.start_time() / section_length) * section_length;
        }

        while curr.start_time() > self.state().current_section_end {
            self.save_current_peak();
            let section_end = self.state().current_section_end;
            self.start_new_section_from(section_end, curr, objects);
            self.state_mut().current_section_end += section_length;
        }

        let strain = self.strain_value_at(curr, objects);
        let state = self.state_mut();
        state.current_section_peak = f64::max(strain, state.current_section_peak);

        // * Store the strain value for the object
        state.object_strains.push(strain);
    }

    fn save_current_peak(&mut self) {
        let state = self.state_mut();
        state.strain_peaks.push(state.current_section_peak);
    }

    fn start_new_section_from(
        &mut self,
        time: f64,
        curr: &Self::DifficultyObject,
        objects: &Self::DifficultyObjects,
    ) {
        // * The maximum strain of the new section is not zero by default
        // * This means we need to capture the strain level at the beginning of the new section,
        // * and use that as the initial peak level.
        self.state_mut().current_section_peak = self.calculate_initial_strain(time, curr, objects);
    }

    fn count_top_weighted_strains(&self, difficulty_value: f64) -> f64 {
        count_top_weighted_strains(&self.state().object_strains, difficulty_value)
    }

    /// All section peaks including the still open section.
    fn into_current_strain_peaks(self) -> StrainsVec {
        let state = self.into_state();

        get_current_strain_peaks(state.strain_peaks, state.current_section_peak)
    }

    fn current_strain_peaks(&self) -> StrainsVec {
        let state = self.state();

        get_current_strain_peaks(state.strain_peaks.clone(), state.current_section_peak)
    }

    fn into_difficulty_value(self) -> f64 {
        let decay_weight = self.state().decay_weight;

        difficulty_value(self.into_current_strain_peaks(), decay_weight)
    }

    fn cloned_difficulty_value(&self) -> f64 {
        difficulty_value(self.current_strain_peaks(), self.state().decay_weight)
    }
}

/// A [`StrainSkill`] whose strain decays exponentially and grows by
/// [`strain_value_of`] scaled by the skill multiplier.
///
/// Implementors delegate [`StrainSkill::strain_value_at`] and
/// [`StrainSkill::calculate_initial_strain`] to [`decay_strain_value_at`] and
/// [`decay_initial_strain`].
///
/// [`strain_value_of`]: StrainDecaySkill::strain_value_of
/// [`decay_strain_value_at`]: StrainDecaySkill::decay_strain_value_at
/// [`decay_initial_strain`]: StrainDecaySkill::decay_initial_strain
pub trait StrainDecaySkill: StrainSkill {
    fn constants(&self) -> SkillConstants;

    fn current_strain(&self) -> f64;

    fn current_strain_mut(&mut self) -> &mut f64;

    fn strain_value_of(
        &mut self,
        curr: &Self::DifficultyObject,
        objects: &Self::DifficultyObjects,
    ) -> f64;

    fn decay_initial_strain(
        &self,
        time: f64,
        curr: &Self::DifficultyObject,
        objects: &Self::DifficultyObjects,
    ) -> f64 {
        let prev_start_time = curr
            .previous(0, objects)
            .map_or(0.0, HasStartTime::start_time);

        self.current_strain()
            * strain_decay(time - prev_start_time, self.constants().strain_decay_base)
    }

    fn decay_strain_value_at(
        &mut self,
        curr: &Self::DifficultyObject,
        objects: &Self::DifficultyObjects,
    ) -> f64 {
        let SkillConstants {
            skill_multiplier,
            strain_decay_base,
        } = self.constants();

        *self.current_strain_mut() *= strain_decay(curr.delta_time(), strain_decay_base);
        let strain = self.strain_value_of(curr, objects) * skill_multiplier;
        *self.current_strain_mut() += strain;

        self.current_strain()
    }
}

fn get_current_strain_peaks(mut strain_peaks: StrainsVec, current_section_peak: f64) -> StrainsVec {
    strain_peaks.push(current_section_peak);

    strain_peaks
}

pub fn count_top_weighted_strains(object_strains: &[f64], difficulty_value: f64) -> f64 {
    if object_strains.is_empty() {
        return 0.0;
    }

    // * What would the top strain be if all strain values were identical
    let consistent_top_strain = difficulty_value / 10.0;

    if FloatExt::eq(consistent_top_strain, 0.0) {
        return object_strains.len() as f64;
    }

    // * Use a weighted sum of all strains. Constants are arbitrary and give nice values
    object_strains
        .iter()
        .map(|s| 1.1 / (1.0 + f64::exp(-10.0 * (s / consistent_top_strain - 0.88))))
        .sum()
}

pub fn difficulty_value(current_strain_peaks: StrainsVec, decay_weight: f64) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    // * Sections with 0 strain are excluded to avoid worst-case time complexity of the following sort (e.g. /b/2351871).
    // * These sections will not contribute to the difficulty.
    let mut peaks = current_strain_peaks;

    // * Difficulty is the weighted sum of the highest strains from every section.
    // * We're sorting from highest to lowest strain.
    for strain in peaks.sorted_non_zero_iter() {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Object {
        idx: usize,
        start_time: f64,
        delta_time: f64,
    }

    impl IDifficultyObject for Object {
        type DifficultyObjects = [Object];

        fn idx(&self) -> usize {
            self.idx
        }
    }

    impl HasStartTime for Object {
        fn start_time(&self) -> f64 {
            self.start_time
        }
    }

    impl HasDeltaTime for Object {
        fn delta_time(&self) -> f64 {
            self.delta_time
        }
    }

    fn objects(times: &[f64]) -> Vec<Object> {
        times
            .iter()
            .enumerate()
            .map(|(idx, &start_time)| Object {
                idx,
                start_time,
                delta_time: idx
                    .checked_sub(1)
                    .map_or(start_time, |prev| start_time - times[prev]),
            })
            .collect()
    }

    /// Every object has a strain of `1.0` and new sections start at `0.0`.
    struct Flat {
        state: StrainState,
    }

    impl StrainSkill for Flat {
        type DifficultyObject = Object;
        type DifficultyObjects = [Object];

        fn state(&self) -> &StrainState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut StrainState {
            &mut self.state
        }

        fn into_state(self) -> StrainState {
            self.state
        }

        fn strain_value_at(&mut self, _: &Object, _: &[Object]) -> f64 {
            1.0
        }

        fn calculate_initial_strain(&self, _: f64, _: &Object, _: &[Object]) -> f64 {
            0.0
        }
    }

    struct Decaying {
        state: StrainState,
        current_strain: f64,
    }

    impl StrainSkill for Decaying {
        type DifficultyObject = Object;
        type DifficultyObjects = [Object];

        fn state(&self) -> &StrainState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut StrainState {
            &mut self.state
        }

        fn into_state(self) -> StrainState {
            self.state
        }

        fn strain_value_at(&mut self, curr: &Object, objects: &[Object]) -> f64 {
            self.decay_strain_value_at(curr, objects)
        }

        fn calculate_initial_strain(&self, time: f64, curr: &Object, objects: &[Object]) -> f64 {
            self.decay_initial_strain(time, curr, objects)
        }
    }

    impl StrainDecaySkill for Decaying {
        fn constants(&self) -> SkillConstants {
            SkillConstants {
                skill_multiplier: 2.0,
                strain_decay_base: 0.5,
            }
        }

        fn current_strain(&self) -> f64 {
            self.current_strain
        }

        fn current_strain_mut(&mut self) -> &mut f64 {
            &mut self.current_strain
        }

        fn strain_value_of(&mut self, _: &Object, _: &[Object]) -> f64 {
            1.0
        }
    }

    #[test]
    fn sections_are_filled_with_initial_strain() {
        let objects = objects(&[100.0, 500.0, 1300.0]);
        let mut skill = Flat {
            state: StrainState::new(400.0, 0.9),
        };

        for curr in objects.iter() {
            skill.process(curr, &objects);
        }

        assert_eq!(skill.state().object_strains(), &[1.0, 1.0, 1.0]);
        assert_eq!(
            skill.into_current_strain_peaks().into_vec(),
            vec![1.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn decaying_strain_carries_into_next_section() {
        let objects = objects(&[100.0, 1000.0]);
        let mut skill = Decaying {
            state: StrainState::new(400.0, 0.9),
            current_strain: 0.0,
        };

        for curr in objects.iter() {
            skill.process(curr, &objects);
        }

        // 2.0 after the first object, decayed from its start time to the
        // start of the second section.
        let peaks = skill.current_strain_peaks().into_vec();

        assert_eq!(peaks.len(), 3);
        assert!((peaks[0] - 2.0).abs() < 1e-12);
        assert!((peaks[1] - 2.0 * 0.5_f64.powf(0.3)).abs() < 1e-12);
        assert!((peaks[2] - (2.0 * 0.5_f64.powf(0.9) + 2.0)).abs() < 1e-12);
    }

    #[test]
    fn weighted_sum_ignores_zeros() {
        let mut peaks = StrainsVec::with_capacity(4);

        for peak in [1.0, 0.0, 2.0, 0.0] {
            peaks.push(peak);
        }

        assert!((difficulty_value(peaks, 0.9) - 2.9).abs() < 1e-12);
    }

    #[test]
    fn top_weighted_strains() {
        assert!(count_top_weighted_strains(&[], 5.0).eq(0.0));
        assert!(count_top_weighted_strains(&[1.0, 2.0, 3.0], 0.0).eq(3.0));

        let count = count_top_weighted_strains(&[10.0, 10.0], 100.0);
        let expected = 2.0 * 1.1 / (1.0 + f64::exp(-10.0 * (1.0 - 0.88)));
        assert!((count - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_decay_base() {
        assert!(strain_decay(0.0, 0.0).eq(1.0));
        assert!(strain_decay(5.0, 0.0).eq(0.0));
        assert!((strain_decay(1000.0, 0.4) - 0.4).abs() < 1e-12);
    }
}
