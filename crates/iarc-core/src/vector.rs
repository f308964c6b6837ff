//! 2D vector helpers on top of `glam::DVec2`.
//!
//! World coordinates have their origin at the arena's top-left corner with
//! +y pointing down, so a positive angle turns clockwise on screen.

use glam::DVec2;

/// Euclidean length.
pub fn mag(v: DVec2) -> f64 {
    v.length()
}

/// Unit vector in the direction of `v`, or the zero vector if `v` is zero.
pub fn norm(v: DVec2) -> DVec2 {
    v.normalize_or_zero()
}

/// Distance between two points.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Unit vector at `theta` radians from +x.
pub fn from_angle(theta: f64) -> DVec2 {
    DVec2::new(theta.cos(), theta.sin())
}

/// Rotate a heading by `theta` radians, returning a unit vector.
///
/// The angle is recomputed from the current heading, so a zero heading
/// comes back as the unit vector at `theta`.
pub fn rotate(heading: DVec2, theta: f64) -> DVec2 {
    let current = heading.y.atan2(heading.x);
    from_angle(current + theta)
}
