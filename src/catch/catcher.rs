/// Dimensions of the osu!catch catcher.
pub struct Catcher;

const AREA_CATCHER_SIZE: f32 = 106.75;

impl Catcher {
    pub const ALLOWED_CATCH_RANGE: f32 = 0.8;

    /// Width of the catcher in playfield pixels for the given circle size.
    pub fn calculate_catch_width(cs: f32) -> f32 {
        Self::calculate_catch_width_by_scale(Self::calculate_scale(cs))
    }

    /// Half of the catcher's width as used by the movement skill.
    ///
    /// Circle sizes above 5.5 shrink the width further.
    pub fn half_catcher_width(cs: f32) -> f32 {
        let half_catcher_width = Self::calculate_catch_width(cs) * 0.5;

        half_catcher_width * (1.0 - ((cs - 5.5).max(0.0) * 0.0625))
    }

    fn calculate_catch_width_by_scale(scale: f32) -> f32 {
        AREA_CATCHER_SIZE * scale.abs() * Self::ALLOWED_CATCH_RANGE
    }

    fn calculate_scale(cs: f32) -> f32 {
        ((1.0 - 0.7 * ((f64::from(cs) - 5.0) / 5.0)) as f32 / 2.0 * 1.0) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cs5_has_unscaled_width() {
        let width = Catcher::calculate_catch_width(5.0);

        assert!((width - AREA_CATCHER_SIZE * Catcher::ALLOWED_CATCH_RANGE).abs() < 1e-4);
        assert!((Catcher::half_catcher_width(5.0) - width / 2.0).abs() < 1e-4);
    }

    #[test]
    fn higher_cs_shrinks_catcher() {
        assert!(Catcher::half_catcher_width(4.0) > Catcher::half_catcher_width(5.0));
        assert!(Catcher::half_catcher_width(7.0) < Catcher::calculate_catch_width(7.0) / 2.0);
    }
}
