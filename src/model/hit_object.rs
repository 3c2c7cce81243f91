pub use rosu_map::section::hit_objects::hit_samples::HitSoundType;

/// The drum channel a hit has to be played on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HitType {
    /// Centre of the drum, colored red ("don").
    #[default]
    Center,
    /// Rim of the drum, colored blue ("kat").
    Rim,
}

impl HitType {
    /// Derive the hit type from the hit's samples.
    ///
    /// Clap or whistle samples turn a hit into a rim hit.
    pub fn from_sound(sound: HitSoundType) -> Self {
        if sound.has_flag(HitSoundType::CLAP | HitSoundType::WHISTLE) {
            Self::Rim
        } else {
            Self::Center
        }
    }

    /// The opposite channel.
    pub const fn inverted(self) -> Self {
        match self {
            Self::Center => Self::Rim,
            Self::Rim => Self::Center,
        }
    }

    pub const fn is_center(self) -> bool {
        matches!(self, Self::Center)
    }

    pub const fn is_rim(self) -> bool {
        matches!(self, Self::Rim)
    }
}

/// A single timed hit of a chart.
///
/// Events are expected in non-decreasing order of their start time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RawHitEvent {
    /// Start time in milliseconds.
    pub start_time: f64,
    pub hit_type: HitType,
    /// Whether the hit is strong i.e. both hands are expected to play it.
    ///
    /// Strong hits do not affect the star rating.
    pub is_strong: bool,
}

impl RawHitEvent {
    pub const fn new(start_time: f64, hit_type: HitType) -> Self {
        Self {
            start_time,
            hit_type,
            is_strong: false,
        }
    }

    /// Create a centre hit.
    pub const fn center(start_time: f64) -> Self {
        Self::new(start_time, HitType::Center)
    }

    /// Create a rim hit.
    pub const fn rim(start_time: f64) -> Self {
        Self::new(start_time, HitType::Rim)
    }

    /// Mark the hit as strong.
    #[must_use]
    pub const fn strong(self) -> Self {
        Self {
            is_strong: true,
            ..self
        }
    }

    /// Create a hit whose channel is derived from its samples.
    pub fn from_sound(start_time: f64, sound: HitSoundType, is_strong: bool) -> Self {
        Self {
            start_time,
            hit_type: HitType::from_sound(sound),
            is_strong,
        }
    }

    /// The same hit on the opposite channel.
    #[must_use]
    pub const fn inverted(&self) -> Self {
        Self {
            hit_type: self.hit_type.inverted(),
            ..*self
        }
    }
}
