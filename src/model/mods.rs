use std::fmt::{Debug, Formatter, Result as FmtResult};

use rosu_mods::{
    generated_mods::DifficultyAdjustTaiko, GameMod, GameModIntermode, GameMods as GameModsLazer,
    GameModsIntermode, GameModsLegacy,
};

/// Collection of game mods.
///
/// Only the mods that influence the star rating are ever queried: speed
/// changes, `Easy`, `HardRock`, `Relax`, and a custom overall difficulty.
///
/// This type can be created through its `From<T>` implementations where `T`
/// can be
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
/// - [`rosu_mods::GameMods`]
/// - [`rosu_mods::GameModsIntermode`]
/// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
///
/// # Example
///
/// ```
/// use taiko_sr::GameMods;
/// use rosu_mods::{GameModsIntermode, GameModsLegacy, GameMods as GameModsLazer};
///
/// let int = GameMods::from(64 + 16);
/// let legacy = GameMods::from(GameModsLegacy::DoubleTime | GameModsLegacy::HardRock);
/// let lazer = GameMods::from(GameModsLazer::new());
/// let intermode = GameMods::from(GameModsIntermode::new());
///
/// assert!(int.dt() && int.hr());
/// assert_eq!(int, legacy);
/// assert!((lazer.clock_rate() - intermode.clock_rate()).abs() < f64::EPSILON);
/// ```
#[derive(Clone, PartialEq)]
pub struct GameMods {
    inner: GameModsInner,
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.inner {
            GameModsInner::Lazer(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Intermode(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Legacy(ref mods) => Debug::fmt(mods, f),
        }
    }
}

/// Inner type of [`GameMods`] so that remote types contained in variants don't
/// need to be re-exported.
#[derive(Clone, PartialEq)]
enum GameModsInner {
    Lazer(GameModsLazer),
    Intermode(GameModsIntermode),
    Legacy(GameModsLegacy),
}

impl GameMods {
    pub(crate) const DEFAULT: Self = Self {
        inner: GameModsInner::Legacy(GameModsLegacy::NoMod),
    };

    /// Returns the mods' clock rate.
    ///
    /// In case of variable clock rates like for `WindUp`, this will return
    /// `1.0`.
    pub fn clock_rate(&self) -> f64 {
        match self.inner {
            GameModsInner::Lazer(ref mods) => mods.clock_rate().map_or(1.0, f64::from),
            GameModsInner::Intermode(ref mods) => mods.legacy_clock_rate(),
            GameModsInner::Legacy(mods) => mods.clock_rate(),
        }
    }

    /// Multiplier applied to the overall difficulty, `HardRock` taking
    /// precedence over `Easy`.
    pub fn od_multiplier(&self) -> f64 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    /// Check whether the mods specify a custom overall difficulty through
    /// osu!taiko's difficulty adjust mod.
    pub fn od(&self) -> Option<f64> {
        match self.inner {
            GameModsInner::Lazer(ref mods) => mods.iter().find_map(|gamemod| match gamemod {
                GameMod::DifficultyAdjustTaiko(DifficultyAdjustTaiko {
                    overall_difficulty,
                    ..
                }) => overall_difficulty.map(f64::from),
                _ => None,
            }),
            GameModsInner::Intermode(_) | GameModsInner::Legacy(_) => None,
        }
    }
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: $name:ident [ $s:literal ], )* ) => {
        impl GameMods {
            $(
                // workaround for <https://github.com/rust-lang/rust-analyzer/issues/8092>
                #[doc = "Check whether [`GameMods`] contain `"]
                #[doc = $s]
                #[doc = "`."]
                pub fn $fn(&self) -> bool {
                    match self.inner {
                        GameModsInner::Lazer(ref mods) => {
                            mods.contains_intermode(GameModIntermode::$name)
                        },
                        GameModsInner::Intermode(ref mods) => {
                            mods.contains(GameModIntermode::$name)
                        },
                        GameModsInner::Legacy(mods) => {
                            mods.contains(GameModsLegacy::$name)
                        },
                    }
                }
            )*
        }
    };
}

impl_has_mod! {
    ez: Easy ["Easy"],
    hr: HardRock ["HardRock"],
    rx: Relax ["Relax"],
    dt: DoubleTime ["DoubleTime"],
    nc: Nightcore ["Nightcore"],
    ht: HalfTime ["HalfTime"],
}

impl Default for GameMods {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<GameModsLazer> for GameMods {
    fn from(mods: GameModsLazer) -> Self {
        Self {
            inner: GameModsInner::Lazer(mods),
        }
    }
}

impl From<GameModsIntermode> for GameMods {
    fn from(mods: GameModsIntermode) -> Self {
        Self {
            inner: GameModsInner::Intermode(mods),
        }
    }
}

impl From<&GameModsIntermode> for GameMods {
    fn from(mods: &GameModsIntermode) -> Self {
        // If only legacy mods are set, use `GameModsLegacy` and thus avoid
        // allocating an owned `GameModsIntermode` instance.
        match mods.checked_bits() {
            Some(bits) => bits.into(),
            None => mods.to_owned().into(),
        }
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self {
            inner: GameModsInner::Legacy(mods),
        }
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        GameModsLegacy::from_bits(bits).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_bits() {
        let mods = GameMods::from(64 + 16);

        assert!(mods.dt());
        assert!(mods.hr());
        assert!(!mods.ez());
        assert!(!mods.rx());
        assert!((mods.clock_rate() - 1.5).abs() < f64::EPSILON);
        assert!((mods.od_multiplier() - 1.4).abs() < f64::EPSILON);
        assert_eq!(mods.od(), None);
    }

    #[test]
    fn half_time_and_easy() {
        let mods = GameMods::from(GameModsLegacy::HalfTime | GameModsLegacy::Easy);

        assert!(mods.ht());
        assert!((mods.clock_rate() - 0.75).abs() < f64::EPSILON);
        assert!((mods.od_multiplier() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn default_is_nomod() {
        let mods = GameMods::default();

        assert!((mods.clock_rate() - 1.0).abs() < f64::EPSILON);
        assert!((mods.od_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!(!mods.rx());
    }

    #[test]
    fn intermode_relax() {
        let mut intermode = GameModsIntermode::new();
        intermode.insert(GameModIntermode::Relax);

        assert!(GameMods::from(&intermode).rx());
        assert!(GameMods::from(intermode).rx());
    }
}
