//! Library to calculate the movement difficulty of [osu!catch] object streams.
//!
//! ## Description
//!
//! `rosu-catch-diff` ports [osu!lazer]'s strain based movement skill for
//! osu!catch with emphasis on precise floating point behavior. It consists of
//! two layers:
//!
//!   - a generic [`StrainAccumulator`] that decays a running strain, tracks
//!     its peak per 750ms section, and weighs the sorted peaks into a single
//!     difficulty value
//!   - the [`Movement`] skill which simulates the catcher across the stream
//!     and rates how much effort each object requires
//!
//! Parsing beatmaps and detecting hyperdashes is not part of this crate; the
//! input is a stream of already converted [`PalpableObject`]s or normalized
//! [`CatchDifficultyObject`]s.
//!
//! ## Usage
//!
//! ```
//! use rosu_catch_diff::{CatchDifficulty, PalpableObject};
//!
//! let objects = [
//!     PalpableObject::new(32.0, 1000.0),
//!     PalpableObject::new(480.0, 1300.0).hyper_dash(true, 0.0),
//!     PalpableObject::new(0.0, 1450.0),
//!     PalpableObject::new(100.0, 1600.0),
//! ];
//!
//! let difficulty = CatchDifficulty::new()
//!     .cs(4.2)
//!     .clock_rate(1.5); // DT
//!
//! let diff_objects = difficulty.create_difficulty_objects(&objects)?;
//! let attrs = difficulty.calculate(&diff_objects)?;
//!
//! println!("Movement: {}", attrs.movement);
//! # Ok::<_, rosu_catch_diff::DifficultyError>(())
//! ```
//!
//! ## Gradual calculation
//!
//! [`CatchGradualDifficulty`] yields the attributes after every processed
//! object. Each step is identical to a calculation with the corresponding
//! amount of passed objects.
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Rejected configurations are logged through `tracing::error` and finished calculations through `tracing::debug`. | [`tracing`]
//!
//! [osu!catch]: https://osu.ppy.sh/wiki/en/Game_mode/osu%21catch
//! [osu!lazer]: https://github.com/ppy/osu
//! [`tracing`]: https://docs.rs/tracing
//! [`StrainAccumulator`]: any::StrainAccumulator
//! [`Movement`]: catch::Movement

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::catch::{
    CatchDifficulty, CatchDifficultyAttributes, CatchDifficultyObject, CatchGradualDifficulty,
    DifficultyError, PalpableObject,
};

/// Generic strain skill types.
pub mod any;

/// Types for osu!catch calculations.
pub mod catch;

mod util;
