pub use crate::any::difficulty::skills::SkillConstants;

/// Calibration constants of the star rating.
///
/// [`StarRatingConfig::DEFAULT`] reproduces osu!lazer's values. Changing any
/// of them produces ratings that are no longer comparable to official ones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StarRatingConfig {
    /// Length of a strain section in milliseconds.
    pub section_length: f64,
    /// Weight decay per rank when summing sorted section peaks.
    pub decay_weight: f64,
    /// Base multiplier for all skills.
    pub difficulty_multiplier: f64,
    /// Weight of the rhythm skill relative to the base multiplier.
    pub rhythm_weight: f64,
    /// Weight of the color skill relative to the base multiplier.
    pub color_weight: f64,
    /// Weight of the stamina skills relative to the base multiplier.
    pub stamina_weight: f64,
    pub rhythm: SkillConstants,
    pub color: SkillConstants,
    pub stamina: SkillConstants,
    /// Norm exponent to combine color and stamina peaks.
    pub color_stamina_norm: f64,
    /// Norm exponent to combine the color-stamina peak with the rhythm peak.
    pub rhythm_norm: f64,
    /// Applied to the combined rating before rescaling.
    pub star_scale: f64,
    pub rescale_multiplier: f64,
    pub rescale_divisor: f64,
    /// Applied to the star rating of converted charts.
    pub convert_multiplier: f64,
    /// Additionally applied to converted charts with `Relax`.
    pub convert_relax_multiplier: f64,
    /// Additionally applied to converted charts with little color variance but
    /// high stamina requirements.
    pub convert_low_color_multiplier: f64,
    /// Color rating below which a converted chart counts as low-variance.
    pub low_color_threshold: f64,
    /// Stamina rating above which a converted chart counts as demanding.
    pub high_stamina_threshold: f64,
    /// Divisor of the stamina peaks when `Relax` is enabled.
    pub relax_stamina_divisor: f64,
    /// Exponent of the ratio between mono and total stamina.
    pub mono_stamina_exponent: f64,
}

impl StarRatingConfig {
    #[expect(clippy::unreadable_literal, reason = "staying in-sync with lazer")]
    pub const DEFAULT: Self = Self {
        section_length: 400.0,
        decay_weight: 0.9,
        difficulty_multiplier: 0.084375,
        rhythm_weight: 0.2,
        color_weight: 0.375,
        stamina_weight: 0.375,
        rhythm: SkillConstants {
            skill_multiplier: 10.0,
            strain_decay_base: 0.0,
        },
        color: SkillConstants {
            skill_multiplier: 0.12,
            strain_decay_base: 0.8,
        },
        stamina: SkillConstants {
            skill_multiplier: 1.1,
            strain_decay_base: 0.4,
        },
        color_stamina_norm: 1.5,
        rhythm_norm: 2.0,
        star_scale: 1.4,
        rescale_multiplier: 10.43,
        rescale_divisor: 8.0,
        convert_multiplier: 0.925,
        convert_relax_multiplier: 0.60,
        convert_low_color_multiplier: 0.80,
        low_color_threshold: 2.0,
        high_stamina_threshold: 8.0,
        relax_stamina_divisor: 1.5,
        mono_stamina_exponent: 5.0,
    };

    pub fn rhythm_skill_multiplier(&self) -> f64 {
        self.rhythm_weight * self.difficulty_multiplier
    }

    pub fn color_skill_multiplier(&self) -> f64 {
        self.color_weight * self.difficulty_multiplier
    }

    pub fn stamina_skill_multiplier(&self) -> f64 {
        self.stamina_weight * self.difficulty_multiplier
    }

    /// Logarithmic compression of the combined rating.
    ///
    /// Negative values are returned unchanged.
    pub fn rescale(&self, stars: f64) -> f64 {
        if stars < 0.0 {
            stars
        } else {
            self.rescale_multiplier * f64::ln(stars / self.rescale_divisor + 1.0)
        }
    }
}

impl Default for StarRatingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
