use crate::{any::difficulty::object::IDifficultyObject, catch::object::PalpableObject};

/// A normalized object of the stream processed by the movement skill.
///
/// Positions are in normalized playfield units, times in ms adjusted by the
/// clock rate.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchDifficultyObject {
    pub idx: usize,
    pub start_time: f64,
    pub delta_time: f64,
    pub normalized_pos: f32,
    pub strain_time: f64,
    pub dist_to_hyper_dash: f32,
    pub hyper_dash: bool,
}

impl CatchDifficultyObject {
    pub const NORMALIZED_HITOBJECT_RADIUS: f32 = 41.0;
    pub const MIN_DELTA_TIME: f64 = 40.0;

    /// Normalizes `hit_object`; `last_object` is `None` for the first object.
    pub fn new(
        hit_object: &PalpableObject,
        last_object: Option<&PalpableObject>,
        clock_rate: f64,
        scaling_factor: f32,
        idx: usize,
    ) -> Self {
        let normalized_pos = hit_object.effective_x() * scaling_factor;

        let start_time = hit_object.start_time / clock_rate;
        let delta_time = last_object.map_or(0.0, |last| {
            (hit_object.start_time - last.start_time) / clock_rate
        });
        let strain_time = delta_time.max(Self::MIN_DELTA_TIME);

        Self {
            idx,
            start_time,
            delta_time,
            normalized_pos,
            strain_time,
            dist_to_hyper_dash: hit_object.dist_to_hyper_dash,
            hyper_dash: hit_object.hyper_dash,
        }
    }
}

impl IDifficultyObject for CatchDifficultyObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }

    fn delta_time(&self) -> f64 {
        self.delta_time
    }
}

/// Hyperdash information of the previous object.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LastObject {
    pub hyper_dash: bool,
    pub dist_to_hyper_dash: f32,
}

impl From<&CatchDifficultyObject> for LastObject {
    fn from(obj: &CatchDifficultyObject) -> Self {
        Self {
            hyper_dash: obj.hyper_dash,
            dist_to_hyper_dash: obj.dist_to_hyper_dash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_position_and_time() {
        let last = PalpableObject::new(100.0, 1000.0);
        let curr = PalpableObject::new(200.0, 1300.0).hyper_dash(true, 0.0);

        let obj = CatchDifficultyObject::new(&curr, Some(&last), 1.5, 0.5, 1);

        assert_eq!(obj.normalized_pos, 100.0);
        assert!((obj.start_time - 1300.0 / 1.5).abs() < 1e-9);
        assert!((obj.delta_time - 200.0).abs() < 1e-9);
        assert!((obj.strain_time - 200.0).abs() < 1e-9);
        assert!(obj.hyper_dash);
    }

    #[test]
    fn strain_time_has_lower_bound() {
        let last = PalpableObject::new(0.0, 0.0);
        let curr = PalpableObject::new(0.0, 10.0);

        let obj = CatchDifficultyObject::new(&curr, Some(&last), 1.0, 1.0, 1);
        assert_eq!(obj.delta_time, 10.0);
        assert_eq!(obj.strain_time, CatchDifficultyObject::MIN_DELTA_TIME);

        let first = CatchDifficultyObject::new(&last, None, 1.0, 1.0, 0);
        assert_eq!(first.delta_time, 0.0);
    }
}
