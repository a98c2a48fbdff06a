/// The result of a difficulty calculation on an osu!catch object stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatchDifficultyAttributes {
    /// The difficulty value of the movement skill.
    pub movement: f64,
    /// The amount of processed objects.
    pub n_objects: u32,
}

impl CatchDifficultyAttributes {
    /// Return the movement difficulty value.
    pub const fn movement(&self) -> f64 {
        self.movement
    }

    /// Return the amount of processed objects.
    pub const fn n_objects(&self) -> u32 {
        self.n_objects
    }
}
