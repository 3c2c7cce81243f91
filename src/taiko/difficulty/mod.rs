use crate::{
    any::difficulty::{skills::StrainSkill, Difficulty},
    model::hit_object::RawHitEvent,
    util::{
        difficulty::{difficulty_range, norm},
        float_ext::FloatExt,
    },
};

use self::{
    color::preprocessor::ColorDifficultyPreprocessor,
    config::StarRatingConfig,
    object::{TaikoDifficultyObject, TaikoDifficultyObjects},
    skills::{color::Color, rhythm::Rhythm, stamina::Stamina, TaikoSkills},
};

use super::attributes::TaikoDifficultyAttributes;

mod color;
pub mod config;
mod evaluators;
mod object;
mod rhythm;
mod skills;

pub fn difficulty(difficulty: &Difficulty, events: &[RawHitEvent]) -> TaikoDifficultyAttributes {
    let mods = difficulty.get_mods();
    let events = difficulty.get_passed_events(events);

    if events.is_empty() {
        log_debug!("No hit events, skipping difficulty calculation");

        return TaikoDifficultyAttributes {
            mods: mods.clone(),
            ..Default::default()
        };
    }

    let clock_rate = difficulty.get_clock_rate();
    let (great_hit_window, ok_hit_window) = hit_windows(difficulty.get_od(), clock_rate);

    let DifficultyValues { skills, max_combo } = DifficultyValues::calculate(difficulty, events);

    let mut attrs = TaikoDifficultyAttributes {
        great_hit_window,
        ok_hit_window,
        max_combo,
        mods: mods.clone(),
        is_convert: difficulty.get_is_convert(),
        ..Default::default()
    };

    DifficultyValues::eval(&mut attrs, skills, mods.rx(), difficulty.get_config());

    attrs
}

/// Great and ok hit windows in milliseconds, adjusted for the clock rate.
fn hit_windows(od: f64, clock_rate: f64) -> (f64, f64) {
    let great = difficulty_range(od, 50.0, 35.0, 20.0);
    let ok = difficulty_range(od, 120.0, 80.0, 50.0);

    (great / clock_rate, ok / clock_rate)
}

/// Returns the combined rating of all sections.
///
/// For each section, the peaks of all skills are combined into a single
/// peak. The rating is a weighted sum of the combined peaks with higher peaks
/// being weighted more.
fn combined_difficulty_value(
    rhythm: Rhythm,
    color: Color,
    stamina: Stamina,
    is_relax: bool,
    config: &StarRatingConfig,
) -> f64 {
    let color_peaks = color.into_current_strain_peaks();
    let rhythm_peaks = rhythm.into_current_strain_peaks();
    let stamina_peaks = stamina.into_current_strain_peaks();

    let rhythm_skill_multiplier = config.rhythm_skill_multiplier();
    let color_skill_multiplier = config.color_skill_multiplier();
    let stamina_skill_multiplier = config.stamina_skill_multiplier();

    let mut peaks = Vec::with_capacity(color_peaks.len());

    let iter = color_peaks
        .iter()
        .zip(rhythm_peaks.iter())
        .zip(stamina_peaks.iter());

    for ((mut color_peak, mut rhythm_peak), mut stamina_peak) in iter {
        rhythm_peak *= rhythm_skill_multiplier;
        color_peak *= color_skill_multiplier;
        stamina_peak *= stamina_skill_multiplier;

        if is_relax {
            // * There is no colour difficulty in relax.
            color_peak = 0.0;
            // * Stamina difficulty is decreased with an increased available finger count.
            stamina_peak /= config.relax_stamina_divisor;
        }

        let peak = norm(
            config.rhythm_norm,
            [
                norm(config.color_stamina_norm, [color_peak, stamina_peak]),
                rhythm_peak,
            ],
        );

        // * Sections with 0 strain are excluded to avoid worst-case time complexity of the following sort (e.g. /b/2351871).
        // * These sections will not contribute to the difficulty.
        if peak > 0.0 {
            peaks.push(peak);
        }
    }

    peaks.sort_by(|a, b| b.total_cmp(a));

    let mut difficulty = 0.0;
    let mut weight = 1.0;

    for strain in peaks {
        difficulty += strain * weight;
        weight *= config.decay_weight;
    }

    difficulty
}

pub struct DifficultyValues {
    pub skills: TaikoSkills,
    pub max_combo: u32,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, events: &[RawHitEvent]) -> Self {
        let clock_rate = difficulty.get_clock_rate();
        let max_combo = u32::try_from(events.len()).unwrap_or(u32::MAX);

        let diff_objects = Self::create_difficulty_objects(events, clock_rate);
        let mut skills = TaikoSkills::new(difficulty.get_config());

        for hit_object in diff_objects.iter() {
            skills.rhythm.process(hit_object, &diff_objects);
            skills.color.process(hit_object, &diff_objects);
            skills.stamina.process(hit_object, &diff_objects);
            skills
                .single_color_stamina
                .process(hit_object, &diff_objects);
        }

        Self { skills, max_combo }
    }

    pub fn eval(
        attrs: &mut TaikoDifficultyAttributes,
        skills: TaikoSkills,
        is_relax: bool,
        config: &StarRatingConfig,
    ) {
        let TaikoSkills {
            rhythm,
            color,
            stamina,
            single_color_stamina,
        } = skills;

        let rhythm_difficulty_value = rhythm.cloned_difficulty_value();
        let color_difficulty_value = color.cloned_difficulty_value();
        let stamina_difficulty_value = stamina.cloned_difficulty_value();

        let rhythm_rating = rhythm_difficulty_value * config.rhythm_skill_multiplier();
        let color_rating = color_difficulty_value * config.color_skill_multiplier();
        let stamina_rating = stamina_difficulty_value * config.stamina_skill_multiplier();
        let mono_stamina_rating =
            single_color_stamina.into_difficulty_value() * config.stamina_skill_multiplier();

        let mono_stamina_factor = if FloatExt::eq(stamina_rating, 0.0) {
            1.0
        } else {
            f64::powf(
                mono_stamina_rating / stamina_rating,
                config.mono_stamina_exponent,
            )
        };

        let rhythm_top_strains = rhythm.count_top_weighted_strains(rhythm_difficulty_value);
        let color_top_strains = color.count_top_weighted_strains(color_difficulty_value);
        let stamina_top_strains = stamina.count_top_weighted_strains(stamina_difficulty_value);

        let combined_rating = combined_difficulty_value(rhythm, color, stamina, is_relax, config);
        let mut star_rating = config.rescale(combined_rating * config.star_scale);

        // * Converts are penalised outside the scope of difficulty calculation, as our assumptions surrounding standard play-styles becomes out-of-scope.
        if attrs.is_convert {
            star_rating *= config.convert_multiplier;

            // * For maps with relax, multiple inputs are more likely to be abused.
            if is_relax {
                star_rating *= config.convert_relax_multiplier;
            }
            // * For maps with either relax or low colour variance and high stamina requirement, multiple inputs are more likely to be abused.
            else if color_rating < config.low_color_threshold
                && stamina_rating > config.high_stamina_threshold
            {
                star_rating *= config.convert_low_color_multiplier;
            }
        }

        log_trace!(
            stars = star_rating,
            rhythm = rhythm_rating,
            color = color_rating,
            stamina = stamina_rating,
            mono_stamina_factor,
            "Evaluated osu!taiko difficulty"
        );

        attrs.stars = star_rating;
        attrs.rhythm = rhythm_rating;
        attrs.color = color_rating;
        attrs.stamina = stamina_rating;
        attrs.mono_stamina_factor = mono_stamina_factor;
        attrs.rhythm_top_strains = rhythm_top_strains;
        attrs.color_top_strains = color_top_strains;
        attrs.stamina_top_strains = stamina_top_strains;
    }

    /// Turn hit events into difficulty objects and encode their colors.
    ///
    /// The first two events only serve as predecessors. Events from the first
    /// non-finite start time onwards are ignored.
    pub fn create_difficulty_objects(
        events: &[RawHitEvent],
        clock_rate: f64,
    ) -> TaikoDifficultyObjects {
        let finite_len = events
            .iter()
            .position(|event| !event.start_time.is_finite())
            .unwrap_or(events.len());

        if finite_len < events.len() {
            log_debug!(
                idx = finite_len,
                "Ignoring hit events from the first non-finite start time onwards"
            );
        }

        let events = &events[..finite_len];

        if events.len() < 3 {
            log_debug!(
                n_events = events.len(),
                "Fewer than three hit events, no difficulty objects"
            );
        }

        let mut diff_objects = TaikoDifficultyObjects::with_capacity(events.len().saturating_sub(2));

        let mut last_center_time = None;
        let mut last_rim_time = None;

        for (event_idx, event) in events.iter().enumerate() {
            let last_same_channel = if event.hit_type.is_center() {
                last_center_time.replace(event.start_time)
            } else {
                last_rim_time.replace(event.start_time)
            };

            let same_channel_delta_time =
                last_same_channel.map(|prev: f64| (event.start_time - prev) / clock_rate);

            if let Some(diff_object) = TaikoDifficultyObject::new(
                events,
                event_idx,
                clock_rate,
                same_channel_delta_time,
                &diff_objects,
            ) {
                diff_objects.push(diff_object);
            }
        }

        ColorDifficultyPreprocessor::process_and_assign(&mut diff_objects);

        diff_objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternating(len: u32, interval: f64) -> Vec<RawHitEvent> {
        (0..len)
            .map(|i| {
                let time = f64::from(i) * interval;

                if i % 2 == 0 {
                    RawHitEvent::center(time)
                } else {
                    RawHitEvent::rim(time)
                }
            })
            .collect()
    }

    #[test]
    fn same_channel_deltas() {
        let events = [
            RawHitEvent::center(0.0),
            RawHitEvent::rim(100.0),
            RawHitEvent::center(200.0),
            RawHitEvent::center(300.0),
            RawHitEvent::rim(400.0),
        ];

        let objects = DifficultyValues::create_difficulty_objects(&events, 2.0);
        let deltas: Vec<_> = objects.iter().map(|h| h.same_channel_delta_time).collect();

        assert_eq!(deltas, vec![Some(100.0), Some(50.0), Some(150.0)]);
    }

    #[test]
    fn non_finite_times_truncate() {
        let mut events = alternating(10, 100.0);
        events[6].start_time = f64::INFINITY;

        let objects = DifficultyValues::create_difficulty_objects(&events, 1.0);

        assert_eq!(objects.len(), 4);
    }

    #[test]
    fn hit_windows_scale_with_od_and_rate() {
        let (great, ok) = hit_windows(5.0, 1.0);
        assert!((great - 35.0).abs() < 1e-12);
        assert!((ok - 80.0).abs() < 1e-12);

        let (great, ok) = hit_windows(10.0, 1.5);
        assert!((great - 20.0 / 1.5).abs() < 1e-12);
        assert!((ok - 50.0 / 1.5).abs() < 1e-12);

        let (great, ok) = hit_windows(0.0, 1.0);
        assert!((great - 50.0).abs() < 1e-12);
        assert!((ok - 120.0).abs() < 1e-12);
    }

    /// Close the current section and open an empty one at `time`.
    fn push_empty_section<S>(
        skill: &mut S,
        time: f64,
        last: &TaikoDifficultyObject,
        objects: &TaikoDifficultyObjects,
    ) where
        S: StrainSkill<
            DifficultyObject = TaikoDifficultyObject,
            DifficultyObjects = TaikoDifficultyObjects,
        >,
    {
        skill.save_current_peak();
        skill.start_new_section_from(time, last, objects);
    }

    #[test]
    fn trailing_empty_sections_are_ignored() {
        const EMPTY_SECTIONS: u32 = 25;

        let events = alternating(60, 90.0);
        let config = StarRatingConfig::DEFAULT;
        let objects = DifficultyValues::create_difficulty_objects(&events, 1.0);
        let mut skills = TaikoSkills::new(&config);

        for curr in objects.iter() {
            skills.rhythm.process(curr, &objects);
            skills.color.process(curr, &objects);
            skills.stamina.process(curr, &objects);
        }

        let mut padded = skills.clone();
        let last = &objects.objects[objects.len() - 1];

        // far enough for every decayed strain to underflow to zero
        for i in 1..=EMPTY_SECTIONS {
            let time = 1e9 * f64::from(i);
            push_empty_section(&mut padded.rhythm, time, last, &objects);
            push_empty_section(&mut padded.color, time, last, &objects);
            push_empty_section(&mut padded.stamina, time, last, &objects);
        }

        let peaks = skills.stamina.current_strain_peaks().into_vec();
        let padded_peaks = padded.stamina.current_strain_peaks().into_vec();

        assert_eq!(padded_peaks.len(), peaks.len() + EMPTY_SECTIONS as usize);
        assert!(padded_peaks[peaks.len()..].iter().all(|&peak| peak == 0.0));

        assert_eq!(
            padded.color.cloned_difficulty_value().to_bits(),
            skills.color.cloned_difficulty_value().to_bits()
        );

        for is_relax in [false, true] {
            let expected = combined_difficulty_value(
                skills.rhythm.clone(),
                skills.color.clone(),
                skills.stamina.clone(),
                is_relax,
                &config,
            );

            let actual = combined_difficulty_value(
                padded.rhythm.clone(),
                padded.color.clone(),
                padded.stamina.clone(),
                is_relax,
                &config,
            );

            assert!(expected > 0.0);
            assert_eq!(actual.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn relax_removes_color() {
        let events = alternating(200, 120.0);
        let config = StarRatingConfig::DEFAULT;

        let combined = |is_relax| {
            let DifficultyValues { skills, .. } =
                DifficultyValues::calculate(&Difficulty::new(), &events);

            combined_difficulty_value(
                skills.rhythm,
                skills.color,
                skills.stamina,
                is_relax,
                &config,
            )
        };

        assert!(combined(true) < combined(false));
        assert!(combined(true) > 0.0);
    }
}
