use crate::model::mods::GameMods;

/// The result of a difficulty calculation on an osu!taiko chart.
#[derive(Clone, Debug, PartialEq)]
pub struct TaikoDifficultyAttributes {
    /// The final star rating.
    pub stars: f64,
    /// The difficulty of the rhythm skill.
    pub rhythm: f64,
    /// The difficulty of the color skill.
    pub color: f64,
    /// The difficulty of the stamina skill.
    pub stamina: f64,
    /// The ratio of stamina difficulty from mono-color (single color) streams to total
    /// stamina difficulty.
    pub mono_stamina_factor: f64,
    /// Effective amount of objects driving the rhythm difficulty.
    pub rhythm_top_strains: f64,
    /// Effective amount of objects driving the color difficulty.
    pub color_top_strains: f64,
    /// Effective amount of objects driving the stamina difficulty.
    pub stamina_top_strains: f64,
    /// The perceived hit window for an n300 inclusive of rate-adjusting mods (DT/HT/etc)
    pub great_hit_window: f64,
    /// The perceived hit window for an n100 inclusive of rate-adjusting mods (DT/HT/etc)
    pub ok_hit_window: f64,
    /// The maximum combo.
    pub max_combo: u32,
    /// The mods that were used for the calculation.
    pub mods: GameMods,
    /// Whether the chart was converted from another mode.
    pub is_convert: bool,
    /// Version of the calculation. Ratings of different versions are not
    /// comparable.
    pub version: u32,
}

impl TaikoDifficultyAttributes {
    /// Version of osu!lazer's difficulty calculator that is mirrored.
    pub const VERSION: u32 = 20_241_007;

    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Whether the chart was converted from another mode.
    pub const fn is_convert(&self) -> bool {
        self.is_convert
    }
}

impl Default for TaikoDifficultyAttributes {
    fn default() -> Self {
        Self {
            stars: 0.0,
            rhythm: 0.0,
            color: 0.0,
            stamina: 0.0,
            mono_stamina_factor: 0.0,
            rhythm_top_strains: 0.0,
            color_top_strains: 0.0,
            stamina_top_strains: 0.0,
            great_hit_window: 0.0,
            ok_hit_window: 0.0,
            max_combo: 0,
            mods: GameMods::default(),
            is_convert: false,
            version: Self::VERSION,
        }
    }
}
