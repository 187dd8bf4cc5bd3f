use crate::common::Coordinate;

/// Presentation boundary. The controller reports every outcome through it.
pub trait Renderer {
    /// Show a message to the player.
    fn show_message(&mut self, msg: &str);

    /// Mark `at` as a hit.
    fn mark_hit(&mut self, at: Coordinate);

    /// Mark `at` as a miss.
    fn mark_miss(&mut self, at: Coordinate);
}

/// [`Renderer`] that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn show_message(&mut self, _msg: &str) {}

    fn mark_hit(&mut self, _at: Coordinate) {}

    fn mark_miss(&mut self, _at: Coordinate) {}
}
