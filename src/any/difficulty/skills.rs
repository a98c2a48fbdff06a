use crate::util::strains_vec::StrainsVec;

use super::object::IDifficultyObject;

/// Tuning constants of a strain decay skill.
///
/// Bound once at construction and never modified afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrainConfig {
    /// Factor applied to every strain contribution.
    pub skill_multiplier: f64,
    /// Remaining share of the strain after one second.
    pub strain_decay_base: f64,
    /// Weight ratio between consecutive sorted section peaks.
    pub decay_weight: f64,
    /// Length of a section in ms.
    pub section_length: f64,
}

/// Computes the strain contribution of a single object.
///
/// Implementors may carry state across calls; objects are passed strictly in
/// chronological order, each exactly once.
pub trait StrainValueOf {
    type DifficultyObject: IDifficultyObject;

    /// Default tuning constants for the skill.
    const CONFIG: StrainConfig;

    fn strain_value_of(&mut self, curr: &Self::DifficultyObject) -> f64;
}

/// Exponentially decaying strain that tracks its peak per section.
#[derive(Clone, Debug)]
pub struct StrainAccumulator {
    config: StrainConfig,
    current_strain: f64,
    current_section_peak: f64,
    current_section_end: f64,
    prev_start_time: Option<f64>,
    strain_peaks: StrainsVec,
}

impl StrainAccumulator {
    pub fn new(config: StrainConfig) -> Self {
        Self {
            config,
            current_strain: 0.0,
            current_section_peak: 0.0,
            current_section_end: 0.0,
            prev_start_time: None,
            strain_peaks: StrainsVec::with_capacity(256),
        }
    }

    pub const fn current_strain(&self) -> f64 {
        self.current_strain
    }

    /// Decays the current strain by `delta_time` and adds the new
    /// contribution, closing every section that ended before `start_time`.
    ///
    /// Returns the resulting strain.
    pub fn process(&mut self, start_time: f64, delta_time: f64, strain_value: f64) -> f64 {
        let section_length = self.config.section_length;

        match self.prev_start_time {
            // The first section ends at the first multiple of the section
            // length that is not before the first object.
            None => {
                self.current_section_end = f64::ceil(start_time / section_length) * section_length;
            }
            Some(prev_start_time) => {
                while start_time > self.current_section_end {
                    self.save_current_peak();
                    self.start_new_section_from(self.current_section_end, prev_start_time);
                    self.current_section_end += section_length;
                }
            }
        }

        self.current_strain *= strain_decay(delta_time, self.config.strain_decay_base);
        self.current_strain += strain_value * self.config.skill_multiplier;

        self.current_section_peak = f64::max(self.current_strain, self.current_section_peak);
        self.prev_start_time = Some(start_time);

        self.current_strain
    }

    fn save_current_peak(&mut self) {
        self.strain_peaks.push(self.current_section_peak);
    }

    fn start_new_section_from(&mut self, time: f64, prev_start_time: f64) {
        self.current_section_peak =
            self.current_strain * strain_decay(time - prev_start_time, self.config.strain_decay_base);
    }

    /// All closed section peaks plus the peak of the trailing section.
    pub fn get_curr_strain_peaks(&self) -> StrainsVec {
        let mut strain_peaks = self.strain_peaks.clone();
        strain_peaks.push(self.current_section_peak);

        strain_peaks
    }

    pub fn into_curr_strain_peaks(self) -> StrainsVec {
        let mut strain_peaks = self.strain_peaks;
        strain_peaks.push(self.current_section_peak);

        strain_peaks
    }

    /// Weighted sum of all section peaks processed so far.
    pub fn difficulty_value(&self) -> f64 {
        difficulty_value(self.get_curr_strain_peaks(), self.config.decay_weight)
    }

    pub fn into_difficulty_value(self) -> f64 {
        let decay_weight = self.config.decay_weight;

        difficulty_value(self.into_curr_strain_peaks(), decay_weight)
    }
}

/// A [`StrainValueOf`] evaluator combined with the accumulator it feeds.
#[derive(Clone, Debug)]
pub struct Skill<E> {
    pub inner: E,
    accumulator: StrainAccumulator,
}

impl<E: StrainValueOf> Skill<E> {
    /// Uses the evaluator's default [`StrainConfig`].
    pub fn new(inner: E) -> Self {
        Self::with_config(inner, E::CONFIG)
    }

    pub fn with_config(inner: E, config: StrainConfig) -> Self {
        Self {
            inner,
            accumulator: StrainAccumulator::new(config),
        }
    }

    /// Evaluates `curr` and feeds its contribution into the accumulator.
    ///
    /// Returns the evaluator's raw contribution for `curr`.
    pub fn process(&mut self, curr: &E::DifficultyObject) -> f64 {
        let strain_value = self.inner.strain_value_of(curr);

        self.accumulator
            .process(curr.start_time(), curr.delta_time(), strain_value);

        strain_value
    }

    pub fn get_curr_strain_peaks(&self) -> StrainsVec {
        self.accumulator.get_curr_strain_peaks()
    }

    pub fn difficulty_value(&self) -> f64 {
        self.accumulator.difficulty_value()
    }

    pub fn into_difficulty_value(self) -> f64 {
        self.accumulator.into_difficulty_value()
    }
}

/// Sorts the peaks in descending order and sums them up, each weighted by
/// `decay_weight` to the power of its rank.
pub fn difficulty_value(current_strain_peaks: StrainsVec, decay_weight: f64) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    let mut peaks = current_strain_peaks;
    peaks.sort_desc();

    // * Difficulty is the weighted sum of the highest strains from every section.
    // * We're sorting from highest to lowest strain.
    for strain in peaks.iter() {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}
