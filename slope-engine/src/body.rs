use crate::{ PhysicsError, Surface, Vector2D, Vector2DExt };

/// Circular rigid body, simulated as a mass point with a radius.
///
/// There is no notion of "resting" or "grounded": contact with terrain is
/// recomputed from geometry every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub(crate) position: Vector2D,
    pub(crate) velocity: Vector2D,
    pub(crate) acceleration: Vector2D,
    /// Weight of the body. Kept for reference, the integrator advances
    /// `acceleration` directly and never reads it.
    pub(crate) force: Vector2D,
    pub(crate) radius: f64,
    pub(crate) mass: f64,
    /// Magnitude of the gravitational acceleration, pointing towards -y
    pub(crate) gravity: f64,
}

impl Body {
    /// Body at rest in free fall.
    ///
    /// Nothing is checked here: `radius` is expected to be finite and
    /// non-negative, `mass` finite and positive, and every vector finite.
    /// Use [`Body::validate`] when the values come from outside.
    pub fn new(position: Vector2D, radius: f64, mass: f64, gravity: f64) -> Self {
        Self {
            position,
            velocity: Vector2D::ZERO,
            acceleration: Vector2D::new(0., -gravity),
            force: Vector2D::new(0., -mass * gravity),
            radius,
            mass,
            gravity,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2D) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vector2D) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Checks the preconditions of [`Body::new`] on the current state.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.radius.is_finite() && self.radius >= 0.) {
            return Err(PhysicsError::InvalidConfiguration { reason: "body radius must be finite and non-negative" });
        }
        if !(self.mass.is_finite() && self.mass > 0.) {
            return Err(PhysicsError::InvalidConfiguration { reason: "body mass must be finite and positive" });
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfiguration { reason: "gravity must be finite" });
        }
        if !self.position.is_finite() {
            return Err(PhysicsError::InvalidConfiguration { reason: "body position must be finite" });
        }
        if !self.velocity.is_finite() {
            return Err(PhysicsError::InvalidConfiguration { reason: "body velocity must be finite" });
        }
        if !self.acceleration.is_finite() {
            return Err(PhysicsError::InvalidConfiguration { reason: "body acceleration must be finite" });
        }
        Ok(())
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector2D {
        self.acceleration
    }

    pub fn force(&self) -> Vector2D {
        self.force
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Semi-implicit Euler step: velocity first, then position with the new
    /// velocity.
    ///
    /// Always a single step whatever `dt` is, so a large enough `dt` lets a
    /// fast body pass through a surface entirely.
    pub fn integrate(&mut self, dt: f64) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Distance from the body's center to the surface's supporting line.
    ///
    /// The surface is treated as an infinite line, a body beyond either end
    /// of the segment still measures its distance to the extended line.
    pub fn distance_to(&self, surface: &Surface) -> f64 {
        let ap = Vector2D::from_difference(self.position, surface.begin());
        ap.cross(surface.along()).abs()
    }

    /// How far the body sinks into the surface, negative when apart.
    pub fn penetration(&self, surface: &Surface) -> f64 {
        self.radius - self.distance_to(surface)
    }

    /// Touching counts as intersecting.
    pub fn intersects_surface(&self, surface: &Surface) -> bool {
        self.distance_to(surface) <= self.radius
    }

    /// Pushes the body out of the surface and constrains its motion to it.
    ///
    /// Only meaningful when [`Body::intersects_surface`] holds. The body is
    /// moved along the surface normal by the penetration depth, loses its
    /// normal velocity (no bounce) and its acceleration is replaced by the
    /// component of gravity along the slope.
    pub fn react_to_surface(&mut self, surface: &Surface) {
        let penetration = self.penetration(surface);
        self.position += penetration * surface.normal();

        let along = surface.along();
        self.velocity = along * self.velocity.dot(along);
        self.acceleration = along * (surface.angle_sin() * self.gravity);
    }

    /// Whether two bodies overlap, touching included.
    /// Nothing in the simulation reacts to it yet.
    pub fn intersects_body(&self, other: &Body) -> bool {
        let d = Vector2D::from_difference(other.position, self.position);
        d.magnitude() <= self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{ assert_abs_diff_eq, assert_relative_eq };

    const G: f64 = 200.;

    fn floor() -> Surface {
        Surface::new(-100., 0., 100., 0.).unwrap()
    }

    #[test]
    fn test_new_body_is_in_free_fall() {
        let body = Body::new(Vector2D::new(0., 200.), 25., 10., G);
        assert_eq!(body.velocity(), Vector2D::ZERO);
        assert_eq!(body.acceleration(), Vector2D::new(0., -G));
        assert_eq!(body.force(), Vector2D::new(0., -2000.));
    }

    #[test]
    fn test_validate() {
        let body = Body::new(Vector2D::new(0., 200.), 25., 10., G);
        assert_eq!(body.validate(), Ok(()));
        assert_eq!(Body::new(Vector2D::ZERO, 0., 1., G).validate(), Ok(()));

        let invalid = [
            Body::new(Vector2D::ZERO, -1., 1., G),
            Body::new(Vector2D::ZERO, f64::NAN, 1., G),
            Body::new(Vector2D::ZERO, 1., 0., G),
            Body::new(Vector2D::ZERO, 1., 1., f64::INFINITY),
            Body::new(Vector2D::new(f64::NAN, 10.), 1., 1., G),
            body.with_velocity(Vector2D::new(f64::INFINITY, 0.)),
            body.with_acceleration(Vector2D::new(0., f64::NEG_INFINITY)),
        ];
        for body in invalid {
            assert!(matches!(body.validate(), Err(PhysicsError::InvalidConfiguration { .. })), "{body:?}");
        }
    }

    #[test]
    fn test_integrate_updates_velocity_first() {
        let mut body = Body::new(Vector2D::ZERO, 1., 1., 10.)
            .with_velocity(Vector2D::new(1., 0.));
        body.integrate(0.5);
        assert_eq!(body.velocity(), Vector2D::new(1., -5.));
        // uses the already updated velocity
        assert_eq!(body.position(), Vector2D::new(0.5, -2.5));
    }

    #[test]
    fn test_integrate_ignores_force() {
        let mut body = Body::new(Vector2D::ZERO, 1., 3., 10.)
            .with_acceleration(Vector2D::ZERO);
        body.integrate(1.);
        assert_eq!(body.position(), Vector2D::ZERO);
        assert_eq!(body.force(), Vector2D::new(0., -30.));
    }

    #[test]
    fn test_distance_is_unsigned() {
        let above = Body::new(Vector2D::new(7., 4.), 1., 1., G);
        let below = Body::new(Vector2D::new(7., -4.), 1., 1., G);
        assert_eq!(above.distance_to(&floor()), 4.);
        assert_eq!(below.distance_to(&floor()), 4.);
    }

    #[test]
    fn test_distance_ignores_segment_extent() {
        let short = Surface::new(-1., 0., 1., 0.).unwrap();
        let far_away = Body::new(Vector2D::new(1000., 3.), 5., 1., G);
        assert_eq!(far_away.distance_to(&short), 3.);
        assert!(far_away.intersects_surface(&short));
    }

    #[test]
    fn test_intersects_boundary_is_inclusive() {
        let touching = Body::new(Vector2D::new(0., 10.), 10., 1., G);
        let apart = Body::new(Vector2D::new(0., 10.5), 10., 1., G);
        assert!(touching.intersects_surface(&floor()));
        assert!(!apart.intersects_surface(&floor()));
        assert_eq!(touching.penetration(&floor()), 0.);
        assert_eq!(apart.penetration(&floor()), -0.5);
    }

    #[test]
    fn test_reaction_removes_normal_velocity() {
        let mut body = Body::new(Vector2D::new(0., 5.), 10., 1., G)
            .with_velocity(Vector2D::new(3., -4.));
        body.react_to_surface(&floor());

        assert_eq!(body.position(), Vector2D::new(0., 10.));
        assert_eq!(body.velocity(), Vector2D::new(3., 0.));
        assert_eq!(body.acceleration(), Vector2D::ZERO);
    }

    #[test]
    fn test_reaction_on_slope_accelerates_downhill() {
        let slope = Surface::new(0., 0., 4., -3.).unwrap();
        let mut body = Body::new(Vector2D::new(2., -1.), 1., 1., G);
        body.react_to_surface(&slope);

        assert_relative_eq!(body.acceleration(), Vector2D::new(96., -72.), epsilon = 1e-9);
        // same as the gravity component along the slope
        let along = slope.along();
        let projected = along * Vector2D::new(0., -G).dot(along);
        assert_relative_eq!(body.acceleration(), projected, epsilon = 1e-9);
        assert_abs_diff_eq!(body.distance_to(&slope), body.radius(), epsilon = 1e-12);
    }

    #[test]
    fn test_reaction_is_idempotent() {
        let mut body = Body::new(Vector2D::new(0., 5.), 10., 1., G)
            .with_velocity(Vector2D::new(-2., 7.));
        body.react_to_surface(&floor());
        let once = body;
        body.react_to_surface(&floor());

        assert_eq!(body.position(), once.position());
        assert_eq!(body.velocity(), once.velocity());
        assert_eq!(body.acceleration(), once.acceleration());
    }

    #[test]
    fn test_body_intersection() {
        let a = Body::new(Vector2D::new(0., 0.), 2., 1., G);
        let b = Body::new(Vector2D::new(3., 4.), 3., 1., G);
        let c = Body::new(Vector2D::new(3., 4.1), 3., 1., G);
        assert!(a.intersects_body(&b));
        assert!(b.intersects_body(&a));
        assert!(!a.intersects_body(&c));
        assert!(a.intersects_body(&a));
    }
}
