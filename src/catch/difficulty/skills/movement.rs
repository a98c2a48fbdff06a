use crate::{
    any::difficulty::skills::{StrainConfig, StrainValueOf},
    catch::{
        difficulty::object::{CatchDifficultyObject, LastObject},
        error::{DifficultyError, DifficultyResult},
    },
};

/// The movement skill of osu!catch.
///
/// Simulates the catcher's position across the stream and rates how much
/// effort every object takes to reach.
#[derive(Clone, Debug)]
pub struct Movement {
    half_catcher_width: f32,
    /// Clock rate adjustments also affect the catcher's speed.
    catcher_speed_multiplier: f64,
    state: MovementState,
}

/// Catcher state carried from one object to the next.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovementState {
    last_player_pos: Option<f32>,
    last_dist_moved: f32,
    last_strain_time: f64,
    is_direction_change: bool,
    last_is_direction_change: bool,
    is_buzz_slider: bool,
    last_hyper_dash: bool,
    last_object: Option<LastObject>,
}

impl MovementState {
    /// Catcher position after the previous object; `None` before the first.
    pub const fn last_player_pos(&self) -> Option<f32> {
        self.last_player_pos
    }

    pub const fn last_dist_moved(&self) -> f32 {
        self.last_dist_moved
    }

    pub const fn last_strain_time(&self) -> f64 {
        self.last_strain_time
    }

    pub const fn is_direction_change(&self) -> bool {
        self.is_direction_change
    }

    pub const fn is_buzz_slider(&self) -> bool {
        self.is_buzz_slider
    }
}

impl Movement {
    const ABSOLUTE_PLAYER_POSITIONING_ERROR: f32 = 16.0;
    const NORMALIZED_HITOBJECT_RADIUS: f32 = CatchDifficultyObject::NORMALIZED_HITOBJECT_RADIUS;

    const DIRECTION_CHANGE_BONUS: f64 = 21.5;
    const BASE_DISTANCE_BONUS: f64 = 12.5;

    const EDGE_DASH_THRESHOLD: f64 = 20.0;
    const EDGE_DASH_BONUS: f64 = 5.7;

    const STRAIN_TIME_WEIGHT: f64 = 16.0;

    pub fn new(half_catcher_width: f32, clock_rate: f64) -> DifficultyResult<Self> {
        Ok(Self {
            half_catcher_width: DifficultyError::check_half_catcher_width(half_catcher_width)?,
            catcher_speed_multiplier: DifficultyError::check_clock_rate(clock_rate)?,
            state: MovementState::default(),
        })
    }

    pub const fn state(&self) -> &MovementState {
        &self.state
    }
}

impl StrainValueOf for Movement {
    type DifficultyObject = CatchDifficultyObject;

    const CONFIG: StrainConfig = StrainConfig {
        skill_multiplier: 900.0,
        strain_decay_base: 0.2,
        decay_weight: 0.94,
        section_length: 750.0,
    };

    #[allow(clippy::float_cmp)]
    fn strain_value_of(&mut self, curr: &CatchDifficultyObject) -> f64 {
        let state = &mut self.state;
        let last_player_pos = *state.last_player_pos.get_or_insert(curr.normalized_pos);

        let term = Self::NORMALIZED_HITOBJECT_RADIUS - Self::ABSOLUTE_PLAYER_POSITIONING_ERROR;
        let mut player_pos =
            last_player_pos.clamp(curr.normalized_pos - term, curr.normalized_pos + term);

        let dist_moved = player_pos - last_player_pos;

        let weighted_strain_time =
            curr.strain_time + Self::STRAIN_TIME_WEIGHT / self.catcher_speed_multiplier;
        let last_weighted_strain_time =
            state.last_strain_time + Self::STRAIN_TIME_WEIGHT / self.catcher_speed_multiplier;

        let weighted_sqrt_strain = weighted_strain_time.sqrt();
        let last_weighted_sqrt_strain = last_weighted_strain_time.sqrt();

        let mut dist_addition = f64::from(dist_moved.abs()).powf(1.3) / 510.0;

        state.is_direction_change = dist_moved.abs() > 0.1
            && state.last_dist_moved.abs() > 0.1
            && dist_moved.signum() != state.last_dist_moved.signum();

        if state.is_direction_change {
            let bonus_factor = f64::from(dist_moved.abs().min(50.0) / 50.0);
            let anti_flow_factor = f64::from(state.last_dist_moved.abs().min(70.0) / 70.0).max(0.1);

            dist_addition += Self::DIRECTION_CHANGE_BONUS / last_weighted_sqrt_strain
                * bonus_factor
                * anti_flow_factor
                * (1.0 - (weighted_strain_time / 1000.0).powf(3.0)).max(0.0);
        }

        // * Base bonus for every movement, giving some weight to streams
        if dist_moved.abs() > 0.1 {
            dist_addition += Self::BASE_DISTANCE_BONUS
                * f64::from(dist_moved.abs().min(Self::NORMALIZED_HITOBJECT_RADIUS * 2.0))
                / f64::from(Self::NORMALIZED_HITOBJECT_RADIUS * 6.0)
                / weighted_sqrt_strain;
        }

        // The first object has no predecessor and thus neither edge dashes
        // nor hyperdashes.
        if let Some(last) = state.last_object {
            let dist_to_hyper_dash = f64::from(last.dist_to_hyper_dash);

            // * Edge dashes are easier at lower ms values
            if dist_to_hyper_dash <= Self::EDGE_DASH_THRESHOLD && !last.hyper_dash {
                dist_addition *= 1.0
                    + Self::EDGE_DASH_BONUS
                        * ((Self::EDGE_DASH_THRESHOLD - dist_to_hyper_dash)
                            / Self::EDGE_DASH_THRESHOLD)
                        * ((curr.strain_time * self.catcher_speed_multiplier).min(265.0) / 265.0)
                            .powf(1.5);
            }

            // * After a hyperdash the player is at the exact position of the next fruit
            if last.hyper_dash {
                player_pos = curr.normalized_pos;

                // * Consecutive hyperdashes in the same direction require no change in input
                if state.last_hyper_dash && !state.is_direction_change {
                    dist_addition *= 0.3;
                }
            }
        }

        // Back and forth sliders within the catcher's width are only rewarded
        // on their first repetition.
        if state.is_direction_change
            && state.last_is_direction_change
            && dist_moved.abs() == state.last_dist_moved.abs()
            && dist_moved.abs() <= self.half_catcher_width
        {
            if state.is_buzz_slider {
                dist_addition *= (curr.strain_time.min(120.0) / 120.0).powf(2.0);
            } else {
                state.is_buzz_slider = true;
            }
        } else {
            state.is_buzz_slider = false;
        }

        state.last_player_pos = Some(player_pos);
        state.last_dist_moved = dist_moved;
        state.last_strain_time = curr.strain_time;
        state.last_is_direction_change = state.is_direction_change;
        state.last_hyper_dash = state.last_object.is_some_and(|last| last.hyper_dash);
        state.last_object = Some(LastObject::from(curr));

        dist_addition / weighted_strain_time
    }
}
