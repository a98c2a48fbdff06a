/// A fruit or droplet as produced by the beatmap conversion.
///
/// Hyperdash detection is done beforehand; this type only carries its
/// results.
#[derive(Clone, Debug, PartialEq)]
pub struct PalpableObject {
    /// Horizontal position in playfield pixels.
    pub x: f32,
    /// Offset applied to `x`, e.g. by HardRock.
    pub x_offset: f32,
    /// Start time in ms, not adjusted by the clock rate.
    pub start_time: f64,
    /// Distance to the position that would have required a hyperdash.
    pub dist_to_hyper_dash: f32,
    /// Whether a hyperdash is required to reach the next object.
    pub hyper_dash: bool,
}

impl PalpableObject {
    /// An object far away from any hyperdash.
    pub const fn new(x: f32, start_time: f64) -> Self {
        Self {
            x,
            x_offset: 0.0,
            start_time,
            dist_to_hyper_dash: f32::INFINITY,
            hyper_dash: false,
        }
    }

    /// Set the hyperdash information.
    #[must_use]
    pub const fn hyper_dash(mut self, hyper_dash: bool, dist_to_hyper_dash: f32) -> Self {
        self.hyper_dash = hyper_dash;
        self.dist_to_hyper_dash = dist_to_hyper_dash;

        self
    }

    pub fn effective_x(&self) -> f32 {
        self.x + self.x_offset
    }
}
