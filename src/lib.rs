//! Library to calculate the star rating of [osu!taiko] charts.
//!
//! ## Description
//!
//! `taiko-sr` turns a sequence of timed centre/rim hits into a star rating and
//! a set of descriptive difficulty attributes. The calculation follows
//! [osu!lazer]'s osu!taiko difficulty calculator with version `20241007`.
//!
//! The rating is built in four stages:
//!   - each hit is turned into a difficulty object that knows its timing
//!     deltas and its predecessors,
//!   - a single pass over all objects encodes their colour patterns,
//!   - four skills (rhythm, colour, stamina, single-colour stamina) track
//!     decaying strains in fixed-length sections,
//!   - the section peaks are combined, weighted, and rescaled into the rating.
//!
//! ## Usage
//!
//! ```
//! use taiko_sr::{Difficulty, RawHitEvent};
//!
//! let events: Vec<_> = (0..50)
//!     .map(|i| {
//!         let time = f64::from(i) * 150.0;
//!
//!         if i % 2 == 0 {
//!             RawHitEvent::center(time)
//!         } else {
//!             RawHitEvent::rim(time)
//!         }
//!     })
//!     .collect();
//!
//! let attrs = Difficulty::new()
//!     .mods(64) // DT
//!     .od(5.0, false)
//!     .calculate(&events);
//!
//! println!("Stars: {} | Max combo: {}", attrs.stars, attrs.max_combo);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `raw_strains` | Section peaks are stored as a plain list instead of compacting consecutive zeros. |
//! | `tracing` | Degenerate inputs and final ratings are logged through `tracing`. | [`tracing`]
//!
//! [osu!taiko]: https://osu.ppy.sh/wiki/en/Game_mode/osu%21taiko
//! [osu!lazer]: https://github.com/ppy/osu
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::{
    any::{Difficulty, DifficultyError},
    model::{
        hit_object::{HitType, RawHitEvent},
        mods::GameMods,
    },
    taiko::{StarRatingConfig, TaikoDifficultyAttributes, TaikoStrains},
};

#[macro_use]
mod util;

/// Types for calculations independent of the specific skill set.
pub mod any;

/// Types for osu!taiko calculations.
pub mod taiko;

/// Types used in and around this crate.
pub mod model;
