use glam::f64::DVec2;

use crate::PhysicsError;

/// 2D vector used throughout the engine.
///
/// Addition, scalar products (on either side) and `dot` are glam's own.
/// Everything the simulation needs on top lives in [`Vector2DExt`].
pub type Vector2D = DVec2;

pub trait Vector2DExt: Sized {
    /// `u - v`, the vector pointing from `v` to `u`
    fn from_difference(u: Self, v: Self) -> Self;

    /// Length of the vector, always recomputed from its components
    fn magnitude(&self) -> f64;

    /// 2D cross product `ax * by - ay * bx`
    fn cross(&self, other: Self) -> f64;

    /// Scales the vector to unit length.
    /// The vector is left untouched if it has no length.
    fn normalize_in_place(&mut self) -> Result<(), PhysicsError>;

    /// Unit vector with the same direction, without modifying `self`.
    fn unit(&self) -> Result<Self, PhysicsError>;
}

impl Vector2DExt for Vector2D {
    #[inline]
    fn from_difference(u: Self, v: Self) -> Self {
        u - v
    }

    #[inline]
    fn magnitude(&self) -> f64 {
        self.length()
    }

    #[inline]
    fn cross(&self, other: Self) -> f64 {
        self.perp_dot(other)
    }

    fn normalize_in_place(&mut self) -> Result<(), PhysicsError> {
        *self = self.unit()?;
        Ok(())
    }

    fn unit(&self) -> Result<Self, PhysicsError> {
        // try_normalize also rejects non-finite lengths
        self.try_normalize()
            .ok_or(PhysicsError::ZeroLengthVector { context: "Vector2D::unit" })
    }
}
