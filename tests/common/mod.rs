#![allow(unused)]

use taiko_sr::{HitType, RawHitEvent};

/// Bit values for mods
pub mod mods {
    pub const NM: u32 = 0;
    pub const EZ: u32 = 1 << 1;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const RX: u32 = 1 << 7;
    pub const HT: u32 = 1 << 8;
}

#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}")
}

/// Relative comparison for values that went through many transcendental
/// functions.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * f64::max(1.0, expected.abs());

    assert!(
        (actual - expected).abs() < tolerance,
        "{actual} != {expected}"
    );
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);

/// Events alternating between center and rim at a fixed interval.
pub fn alternating(len: u32, interval: f64) -> Vec<RawHitEvent> {
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

/// Events whose hit types follow `pattern` (`c` for center, anything else for
/// rim) and whose gaps cycle through `intervals`.
pub fn patterned(len: usize, pattern: &str, intervals: &[f64]) -> Vec<RawHitEvent> {
    let hit_types: Vec<_> = pattern
        .chars()
        .map(|c| if c == 'c' { HitType::Center } else { HitType::Rim })
        .collect();

    let mut time = 0.0;

    (0..len)
        .map(|i| {
            let event = RawHitEvent::new(time, hit_types[i % hit_types.len()]);
            time += intervals[i % intervals.len()];

            event
        })
        .collect()
}

/// The mixed chart used for regression values.
pub fn mixed_chart() -> Vec<RawHitEvent> {
    patterned(
        64,
        "ccrcrrcrcccrrcrc",
        &[120.0, 120.0, 60.0, 60.0, 180.0, 120.0, 240.0],
    )
}
