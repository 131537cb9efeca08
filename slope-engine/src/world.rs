use crate::{ Body, PhysicsError, Surface, Vector2D };

use itertools::Itertools;

/// A single body rolling over fixed terrain.
///
/// The terrain is read-only once the world is built; only [`World::step`]
/// ever changes the body.
#[derive(Debug, Clone)]
pub struct World {
    surfaces: Vec<Surface>,
    body: Body,
    elapsed: f64,
    steps: u64,
}

impl World {
    pub fn new(surfaces: Vec<Surface>, body: Body) -> Self {
        Self {
            surfaces,
            body,
            elapsed: 0.,
            steps: 0,
        }
    }

    /// Builds the terrain as a chain of surfaces joining consecutive points.
    pub fn from_polyline(points: &[Vector2D], body: Body) -> Result<Self, PhysicsError> {
        Ok(Self::new(Surface::chain(points)?, body))
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Total simulated time
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// `dt` is used as given. Surfaces are handled one after the other in
    /// list order, each one seeing the body as already corrected by the
    /// previous ones, so reordering the terrain can change the outcome when
    /// the body touches several surfaces at once.
    pub fn step(&mut self, dt: f64) {
        self.body.integrate(dt);

        for surface in &self.surfaces {
            if self.body.intersects_surface(surface) {
                self.body.react_to_surface(surface);
            }
        }

        self.elapsed += dt;
        self.steps += 1;
    }

    /// Indices of the surfaces the body currently intersects.
    pub fn touching(&self) -> impl Iterator<Item = usize> + '_ {
        self.surfaces.iter()
            .positions(|surface| self.body.intersects_surface(surface))
    }
}
