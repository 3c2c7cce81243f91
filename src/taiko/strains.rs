use crate::{
    any::difficulty::{skills::StrainSkill, Difficulty},
    model::hit_object::RawHitEvent,
    taiko::difficulty::DifficultyValues,
};

/// The result of calculating the strains on an osu!taiko chart.
///
/// Suitable to plot the difficulty of a chart over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaikoStrains {
    /// Strain peaks of the color skill.
    pub color: Vec<f64>,
    /// Strain peaks of the rhythm skill.
    pub rhythm: Vec<f64>,
    /// Strain peaks of the stamina skill.
    pub stamina: Vec<f64>,
    /// Strain peaks of the stamina skill restricted to single-colored streaks.
    pub single_color_stamina: Vec<f64>,
}

impl TaikoStrains {
    /// Time between two strains in ms with the default
    /// [`StarRatingConfig`](crate::StarRatingConfig).
    pub const SECTION_LEN: f64 = 400.0;
}

pub fn strains(difficulty: &Difficulty, events: &[RawHitEvent]) -> TaikoStrains {
    let events = difficulty.get_passed_events(events);

    if events.len() < 3 {
        return TaikoStrains::default();
    }

    let DifficultyValues { skills, .. } = DifficultyValues::calculate(difficulty, events);

    TaikoStrains {
        color: skills.color.into_current_strain_peaks().into_vec(),
        rhythm: skills.rhythm.into_current_strain_peaks().into_vec(),
        stamina: skills.stamina.into_current_strain_peaks().into_vec(),
        single_color_stamina: skills
            .single_color_stamina
            .into_current_strain_peaks()
            .into_vec(),
    }
}
