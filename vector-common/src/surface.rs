/// The one drawing capability the core asks of the outside world: draw a
/// straight line segment between two points.
///
/// Concrete surfaces (an image canvas, a windowing backend, a plotter) are
/// supplied by the caller; the core never owns one.
pub trait LineSurface {
    /// Draws a straight segment from `from` to `to`, both in surface
    /// coordinates.
    fn draw_segment(&mut self, from: (f64, f64), to: (f64, f64));
}
