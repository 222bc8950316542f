//! Pointer input normalization

/// Converts a raw pointer coordinate into a horizontal court percent
pub trait InputAdapter {
    /// Map a raw client x to court percent, or `None` if the sample is unusable
    ///
    /// The result is not clamped; the simulation clamps the racket itself.
    fn normalize(&self, client_x: f32) -> Option<f32>;
}

/// A horizontal play area measured in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaInput {
    pub left: f32,
    pub width: f32,
}

impl AreaInput {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }
}

impl InputAdapter for AreaInput {
    fn normalize(&self, client_x: f32) -> Option<f32> {
        if !self.width.is_finite() || self.width <= 0.0 || !client_x.is_finite() {
            return None;
        }
        Some((client_x - self.left) / self.width * 100.0)
    }
}
