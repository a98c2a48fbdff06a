pub use self::{
    attributes::CatchDifficultyAttributes,
    catcher::Catcher,
    difficulty::{
        gradual::CatchGradualDifficulty,
        object::{CatchDifficultyObject, LastObject},
        skills::movement::{Movement, MovementState},
        CatchDifficulty,
    },
    error::{DifficultyError, DifficultyResult},
    object::PalpableObject,
    strains::CatchStrains,
};

mod attributes;
mod catcher;
mod difficulty;
mod error;
mod object;
mod strains;
