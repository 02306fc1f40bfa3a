use rand::Rng;
use std::fmt;

use crate::point::Point;
use crate::surface::LineSurface;

/// A mutable 2D point or displacement with `f64` coordinates.
///
/// The type deliberately does not distinguish "absolute position" from
/// "direction plus magnitude"; callers decide which role a value plays.
/// Every transforming method mutates the receiver in place and returns
/// `&mut Self`, so transformations chain:
///
/// ```
/// use vector_common::Vector2D;
///
/// let mut velocity = Vector2D::new(3.0, 4.0);
/// velocity.normalize().scale(2.0).rotate(90.0);
/// ```
///
/// Pure counterparts that leave their inputs untouched live in
/// [`crate::vecmath`]. Instances are not synchronized; concurrent mutation
/// needs caller-side locking.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    /// Creates a vector with the given coordinates. `Vector2D::default()`
    /// is the zero vector.
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Copies the coordinates of any point-like value.
    pub fn from_point<P: Point>(p: &P) -> Self {
        Vector2D { x: p.x(), y: p.y() }
    }

    /// Squared length. Cheaper than [`length`](Self::length) when only
    /// comparing magnitudes.
    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Length (magnitude) of the vector.
    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    /// Angle from the positive x-axis, in radians in (-PI, PI].
    pub fn direction(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Replaces both coordinates together.
    pub fn set_location(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Replaces both coordinates with those of a point-like value.
    pub fn set_point<P: Point>(&mut self, p: &P) -> &mut Self {
        self.set_location(p.x(), p.y())
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    pub fn add_x(&mut self, dx: f64) -> &mut Self {
        self.x += dx;
        self
    }

    pub fn add_y(&mut self, dy: f64) -> &mut Self {
        self.y += dy;
        self
    }

    /// Moves the vector to a uniformly random location in
    /// `[0, max_x) x [0, max_y)`.
    ///
    /// The random source is passed in by the caller, so seeding stays in
    /// the caller's hands and sketches are reproducible.
    pub fn set_random<R: Rng + ?Sized>(
        &mut self,
        max_x: f64,
        max_y: f64,
        rng: &mut R,
    ) -> &mut Self {
        let x = rng.random::<f64>() * max_x;
        let y = rng.random::<f64>() * max_y;
        self.set_location(x, y)
    }

    /// Rescales to unit length, keeping the direction.
    ///
    /// A zero-length vector has no direction; its components become NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        self.x /= length;
        self.y /= length;
        self
    }

    /// Rescales to the given length, keeping the direction. Same
    /// zero-length behavior as [`normalize`](Self::normalize).
    pub fn set_length(&mut self, length: f64) -> &mut Self {
        self.normalize().scale(length)
    }

    /// Rotates counter-clockwise by the given amount of degrees.
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        let x = self.x * cos - self.y * sin;
        let y = self.x * sin + self.y * cos;
        self.set_location(x, y)
    }

    /// Multiplies both coordinates by `scalar`.
    pub fn scale(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    /// Componentwise addition of a point-like value.
    pub fn add<P: Point>(&mut self, p: &P) -> &mut Self {
        self.set_location(self.x + p.x(), self.y + p.y())
    }

    /// Componentwise subtraction of a point-like value.
    pub fn subtract<P: Point>(&mut self, p: &P) -> &mut Self {
        self.set_location(self.x - p.x(), self.y - p.y())
    }

    /// Draws this vector as a line segment anchored at `origin`, running
    /// to `origin + (x, y)`. The only side-effecting operation on the
    /// type; the surface decides what "drawing" means.
    pub fn draw<S, P>(&self, surface: &mut S, origin: &P)
    where
        S: LineSurface + ?Sized,
        P: Point,
    {
        surface.draw_segment(
            (origin.x(), origin.y()),
            (origin.x() + self.x, origin.y() + self.y),
        );
    }
}

impl Point for Vector2D {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D[{}, {}]", self.x, self.y)
    }
}

#[cfg(test)]
mod test_vector {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Wider margin for results that went through sin/cos.
    const TRIG: F64Margin = F64Margin {
        epsilon: 1e-9,
        ulps: 4,
    };

    #[test]
    fn test_length_matches_length_sq() {
        let v = Vector2D::new(3.0, 4.0);
        assert!(v.length_sq().approx_eq(25.0, F64Margin::default()));
        assert!(v.length().approx_eq(5.0, F64Margin::default()));
        assert!(v
            .length()
            .approx_eq(v.length_sq().sqrt(), F64Margin::default()));
    }

    #[test]
    fn test_direction_of_axes() {
        assert!(Vector2D::new(1.0, 0.0)
            .direction()
            .approx_eq(0.0, F64Margin::default()));
        assert!(Vector2D::new(0.0, 1.0)
            .direction()
            .approx_eq(std::f64::consts::FRAC_PI_2, F64Margin::default()));
        assert!(Vector2D::new(-1.0, 0.0)
            .direction()
            .approx_eq(std::f64::consts::PI, F64Margin::default()));
    }

    #[test]
    fn test_coordinate_setters() {
        let mut v = Vector2D::new(1.0, 2.0);
        v.set_x(5.0).add_y(0.5);
        assert_eq!(v, Vector2D::new(5.0, 2.5));
        v.add_x(-1.0).set_y(4.0);
        assert_eq!(v, Vector2D::new(4.0, 4.0));
        v.set_location(0.25, -0.75);
        assert_eq!(v, Vector2D::new(0.25, -0.75));
        v.set_point(&(9.0, 8.0));
        assert_eq!(v, Vector2D::new(9.0, 8.0));
        assert_eq!(Vector2D::from_point(&v), v);
    }

    #[test]
    fn test_normalize_keeps_direction() {
        let mut v = Vector2D::new(-7.5, 2.25);
        let direction = v.direction();
        v.normalize();
        assert!(v.length().approx_eq(1.0, F64Margin::default()));
        assert!(v.direction().approx_eq(direction, F64Margin::default()));
    }

    #[test]
    fn test_set_length_scales_to_target() {
        let mut v = Vector2D::new(1.0, 1.0);
        v.set_length(10.0);
        assert!(v.length().approx_eq(10.0, F64Margin::default()));
    }

    #[test]
    fn test_scale_multiplies_length() {
        let mut v = Vector2D::new(2.0, -3.0);
        let before = v.length();
        v.scale(-2.5);
        assert!(v.length().approx_eq(2.5 * before, F64Margin::default()));
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let mut v = Vector2D::new(4.0, 1.0);
        v.rotate(360.0);
        assert!(v.x().approx_eq(4.0, TRIG));
        assert!(v.y().approx_eq(1.0, TRIG));
    }

    #[test]
    fn test_rotations_compose() {
        let mut split = Vector2D::new(2.0, -1.0);
        split.rotate(31.0).rotate(59.0);
        let mut whole = Vector2D::new(2.0, -1.0);
        whole.rotate(90.0);
        assert!(split.x().approx_eq(whole.x(), TRIG));
        assert!(split.y().approx_eq(whole.y(), TRIG));
    }

    #[test]
    fn test_add_subtract_are_inverses() {
        let mut v = Vector2D::new(1.25, -2.5);
        let offset = Vector2D::new(0.5, 3.75);
        v.add(&offset).subtract(&offset);
        assert_eq!(v, Vector2D::new(1.25, -2.5));
    }

    #[test]
    fn test_fluent_chain() {
        let mut v = Vector2D::new(3.0, 4.0);
        v.normalize().scale(2.0).rotate(90.0);
        assert!(v.length().approx_eq(2.0, TRIG));
    }

    #[test]
    fn test_set_random_bounded_and_deterministic() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let mut a = Vector2D::default();
        let mut b = Vector2D::default();
        for _ in 0..100 {
            a.set_random(20.0, 5.0, &mut rng_a);
            b.set_random(20.0, 5.0, &mut rng_b);
            assert_eq!(a, b);
            assert!(a.x() >= 0.0 && a.x() < 20.0);
            assert!(a.y() >= 0.0 && a.y() < 5.0);
        }
    }

    #[test]
    fn test_normalize_zero_vector_goes_nan() {
        let mut v = Vector2D::default();
        v.normalize();
        assert!(v.x().is_nan());
        assert!(v.y().is_nan());

        let mut w = Vector2D::default();
        w.set_length(3.0);
        assert!(w.x().is_nan());
        assert!(w.y().is_nan());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Vector2D::new(1.5, -2.0).to_string(), "Vector2D[1.5, -2]");
        assert_eq!(Vector2D::default().to_string(), "Vector2D[0, 0]");
    }

    struct RecordingSurface {
        segments: Vec<((f64, f64), (f64, f64))>,
    }

    impl LineSurface for RecordingSurface {
        fn draw_segment(&mut self, from: (f64, f64), to: (f64, f64)) {
            self.segments.push((from, to));
        }
    }

    #[test]
    fn test_draw_anchors_segment_at_origin() {
        let mut surface = RecordingSurface {
            segments: Vec::new(),
        };
        let v = Vector2D::new(3.0, -1.0);
        v.draw(&mut surface, &(10.0, 20.0));
        assert_eq!(surface.segments, vec![((10.0, 20.0), (13.0, 19.0))]);
    }
}
