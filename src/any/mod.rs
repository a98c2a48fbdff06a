pub use self::difficulty::{
    object::IDifficultyObject,
    skills::{Skill, StrainAccumulator, StrainConfig, StrainValueOf},
};

pub use crate::util::strains_vec::StrainsVec;

pub mod difficulty;
