use rosu_map::section::general::GameMode;

use crate::{
    model::{hit_object::RawHitEvent, mods::GameMods},
    taiko::{StarRatingConfig, TaikoDifficultyAttributes, TaikoStrains},
};

pub mod object;
pub mod skills;

/// Difficulty calculator on a sequence of osu!taiko hits.
///
/// # Example
///
/// ```
/// use taiko_sr::{Difficulty, RawHitEvent};
///
/// let events = [
///     RawHitEvent::center(0.0),
///     RawHitEvent::rim(200.0),
///     RawHitEvent::center(400.0),
///     RawHitEvent::rim(600.0).strong(),
/// ];
///
/// let attrs = Difficulty::new()
///     .mods(8 + 64) // HDDT
///     .is_convert(false)
///     .calculate(&events);
///
/// assert_eq!(attrs.max_combo, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    passed_objects: Option<u32>,
    /// Clock rate will be clamped internally between 0.01 and 100.0.
    clock_rate: Option<f64>,
    od: Option<ModsDependent>,
    is_convert: bool,
    config: StarRatingConfig,
}

/// Wrapper for beatmap attributes in [`Difficulty`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    /// Value of the beatmap attribute.
    pub value: f32,
    /// Whether `value` already includes the effect of mods.
    pub with_mods: bool,
}

impl ModsDependent {
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

/// All the ways the input of a [`Difficulty`] calculation can be invalid.
///
/// Only returned by [`Difficulty::checked_calculate`].
#[derive(Debug, thiserror::Error)]
pub enum DifficultyError {
    #[error("clock rate must be finite and positive, got {0}")]
    ClockRate(f64),
    #[error("hit event #{idx} has a non-finite start time")]
    NonFiniteTime { idx: usize },
    #[error("hit event #{idx} at {start_time}ms starts before its predecessor at {prev_time}ms")]
    DecreasingTime {
        idx: usize,
        start_time: f64,
        prev_time: f64,
    },
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            passed_objects: None,
            clock_rate: None,
            od: None,
            is_convert: false,
            config: StarRatingConfig::DEFAULT,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - [`&GameModsIntermode`](rosu_mods::GameModsIntermode)
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate.clamp(0.01, 100.0)),
            ..self
        }
    }

    /// Specify the overall difficulty. Defaults to `5.0`.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// The overall difficulty only affects the hit windows, not the star
    /// rating.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn od(self, od: f32, with_mods: bool) -> Self {
        Self {
            od: Some(ModsDependent {
                value: od.clamp(-20.0, 20.0),
                with_mods,
            }),
            ..self
        }
    }

    /// Whether the chart was converted from another mode.
    ///
    /// Converted charts are penalized after the rating has been computed.
    pub fn is_convert(mut self, is_convert: bool) -> Self {
        self.is_convert = is_convert;

        self
    }

    /// Mark the chart as converted if it was originally made for a mode
    /// other than osu!taiko.
    pub fn is_convert_from(self, original_mode: GameMode) -> Self {
        self.is_convert(!matches!(original_mode, GameMode::Taiko))
    }

    /// Use custom calibration constants.
    pub fn config(mut self, config: StarRatingConfig) -> Self {
        self.config = config;

        self
    }

    /// Perform the difficulty calculation.
    ///
    /// The input is not validated. Use [`checked_calculate`] to reject
    /// malformed events beforehand.
    ///
    /// [`checked_calculate`]: Self::checked_calculate
    pub fn calculate(&self, events: &[RawHitEvent]) -> TaikoDifficultyAttributes {
        crate::taiko::difficulty::difficulty(self, events)
    }

    /// Same as [`calculate`] but first checks that the clock rate is valid
    /// and that the events are ordered by finite start times.
    ///
    /// [`calculate`]: Self::calculate
    pub fn checked_calculate(
        &self,
        events: &[RawHitEvent],
    ) -> Result<TaikoDifficultyAttributes, DifficultyError> {
        self.validate(events)?;

        Ok(self.calculate(events))
    }

    /// Perform the difficulty calculation but instead of evaluating the skill
    /// strains, return them as is.
    ///
    /// Suitable to plot the difficulty of a chart over time.
    pub fn strains(&self, events: &[RawHitEvent]) -> TaikoStrains {
        crate::taiko::strains::strains(self, events)
    }

    fn validate(&self, events: &[RawHitEvent]) -> Result<(), DifficultyError> {
        let clock_rate = self.get_clock_rate();

        if !clock_rate.is_finite() || clock_rate <= 0.0 {
            return Err(DifficultyError::ClockRate(clock_rate));
        }

        let mut prev_time = f64::NEG_INFINITY;

        for (idx, event) in events.iter().enumerate() {
            let start_time = event.start_time;

            if !start_time.is_finite() {
                return Err(DifficultyError::NonFiniteTime { idx });
            }

            if start_time < prev_time {
                return Err(DifficultyError::DecreasingTime {
                    idx,
                    start_time,
                    prev_time,
                });
            }

            prev_time = start_time;
        }

        Ok(())
    }

    pub(crate) const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub(crate) fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    /// The events to consider, truncated to the passed objects.
    pub(crate) fn get_passed_events<'a>(&self, events: &'a [RawHitEvent]) -> &'a [RawHitEvent] {
        match self.passed_objects {
            Some(passed_objects) => &events[..events.len().min(passed_objects as usize)],
            None => events,
        }
    }

    /// The overall difficulty after applying mods.
    pub(crate) fn get_od(&self) -> f64 {
        let od = self.od.unwrap_or(ModsDependent::new(5.0));

        if od.with_mods {
            return f64::from(od.value);
        }

        let base = self.mods.od().unwrap_or(f64::from(od.value));
        let od = base * self.mods.od_multiplier();

        if self.mods.hr() {
            od.min(10.0)
        } else {
            od
        }
    }

    pub(crate) const fn get_is_convert(&self) -> bool {
        self.is_convert
    }

    pub(crate) const fn get_config(&self) -> &StarRatingConfig {
        &self.config
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}
