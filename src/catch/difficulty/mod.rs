use crate::{
    any::difficulty::skills::Skill,
    catch::{
        attributes::CatchDifficultyAttributes,
        catcher::Catcher,
        error::{DifficultyError, DifficultyResult},
        object::PalpableObject,
        strains::CatchStrains,
    },
};

use self::{object::CatchDifficultyObject, skills::movement::Movement};

pub mod gradual;
pub mod object;
pub mod skills;

/// Difficulty calculator on osu!catch object streams.
///
/// Create one calculation per stream and clock rate; skills are never shared
/// between calculations.
///
/// # Example
///
/// ```
/// use rosu_catch_diff::catch::{CatchDifficulty, PalpableObject};
///
/// let objects = [
///     PalpableObject::new(0.0, 0.0),
///     PalpableObject::new(256.0, 250.0),
///     PalpableObject::new(64.0, 500.0),
/// ];
///
/// let difficulty = CatchDifficulty::new().cs(4.0).clock_rate(1.5);
/// let diff_objects = difficulty.create_difficulty_objects(&objects)?;
/// let attrs = difficulty.calculate(&diff_objects)?;
///
/// assert_eq!(attrs.n_objects, 3);
/// assert!(attrs.movement > 0.0);
/// # Ok::<_, rosu_catch_diff::catch::DifficultyError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CatchDifficulty {
    clock_rate: f64,
    half_catcher_width: f32,
    passed_objects: Option<u32>,
}

impl CatchDifficulty {
    pub const DEFAULT_CS: f32 = 5.0;

    /// Create a new difficulty calculator with clock rate 1.0 and the
    /// catcher width of circle size 5.
    pub fn new() -> Self {
        Self {
            clock_rate: 1.0,
            half_catcher_width: Catcher::half_catcher_width(Self::DEFAULT_CS),
            passed_objects: None,
        }
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// Besides object timings, it also scales the catcher's speed. Must be
    /// positive.
    pub const fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.clock_rate = clock_rate;

        self
    }

    /// Specify the half catcher width in normalized playfield units.
    pub const fn half_catcher_width(mut self, half_catcher_width: f32) -> Self {
        self.half_catcher_width = half_catcher_width;

        self
    }

    /// Derive the half catcher width from a circle size.
    pub fn cs(mut self, cs: f32) -> Self {
        self.half_catcher_width = Catcher::half_catcher_width(cs);

        self
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    pub const fn get_clock_rate(&self) -> f64 {
        self.clock_rate
    }

    pub const fn get_half_catcher_width(&self) -> f32 {
        self.half_catcher_width
    }

    pub fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    /// Normalize palpable objects into the stream processed by the movement
    /// skill.
    pub fn create_difficulty_objects(
        &self,
        palpable_objects: &[PalpableObject],
    ) -> DifficultyResult<Box<[CatchDifficultyObject]>> {
        let clock_rate = DifficultyError::check_clock_rate(self.clock_rate)?;
        let half_catcher_width = DifficultyError::check_half_catcher_width(self.half_catcher_width)?;

        Ok(DifficultyValues::create_difficulty_objects(
            half_catcher_width,
            clock_rate,
            palpable_objects,
        ))
    }

    /// Perform the difficulty calculation.
    pub fn calculate(
        &self,
        diff_objects: &[CatchDifficultyObject],
    ) -> DifficultyResult<CatchDifficultyAttributes> {
        let DifficultyValues { movement, mut attrs } =
            DifficultyValues::calculate(self, diff_objects)?;

        DifficultyValues::eval(&mut attrs, movement.into_difficulty_value());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            n_objects = attrs.n_objects,
            movement = attrs.movement,
            "calculated catch difficulty"
        );

        Ok(attrs)
    }

    /// Perform the difficulty calculation but instead of evaluating the skill
    /// strains, return them as is.
    ///
    /// Suitable to plot the difficulty over time.
    pub fn strains(&self, diff_objects: &[CatchDifficultyObject]) -> DifficultyResult<CatchStrains> {
        let DifficultyValues { movement, .. } = DifficultyValues::calculate(self, diff_objects)?;

        Ok(CatchStrains {
            movement: movement.get_curr_strain_peaks().into_vec(),
        })
    }
}

impl Default for CatchDifficulty {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DifficultyValues {
    pub movement: Skill<Movement>,
    pub attrs: CatchDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(
        difficulty: &CatchDifficulty,
        diff_objects: &[CatchDifficultyObject],
    ) -> DifficultyResult<Self> {
        let take = difficulty.get_passed_objects();

        let movement = Movement::new(
            difficulty.get_half_catcher_width(),
            difficulty.get_clock_rate(),
        )?;

        let mut movement = Skill::new(movement);
        let mut n_objects = 0;

        for curr in diff_objects.iter().take(take) {
            movement.process(curr);
            n_objects += 1;
        }

        let attrs = CatchDifficultyAttributes {
            n_objects,
            ..Default::default()
        };

        Ok(Self { movement, attrs })
    }

    /// Process the difficulty values and store the results in `attrs`.
    pub fn eval(attrs: &mut CatchDifficultyAttributes, movement_difficulty_value: f64) {
        attrs.movement = movement_difficulty_value;
    }

    pub fn create_difficulty_objects(
        half_catcher_width: f32,
        clock_rate: f64,
        palpable_objects: &[PalpableObject],
    ) -> Box<[CatchDifficultyObject]> {
        let scaling_factor = CatchDifficultyObject::NORMALIZED_HITOBJECT_RADIUS / half_catcher_width;

        let mut last_object = None;

        palpable_objects
            .iter()
            .enumerate()
            .map(|(i, hit_object)| {
                let diff_object = CatchDifficultyObject::new(
                    hit_object,
                    last_object,
                    clock_rate,
                    scaling_factor,
                    i,
                );
                last_object = Some(hit_object);

                diff_object
            })
            .collect()
    }
}
