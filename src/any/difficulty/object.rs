/// An object within the normalized stream fed to a strain skill.
pub trait IDifficultyObject {
    /// Start time in ms, already adjusted by the clock rate.
    fn start_time(&self) -> f64;

    /// Time in ms since the previous object, already adjusted by the clock
    /// rate.
    fn delta_time(&self) -> f64;
}
