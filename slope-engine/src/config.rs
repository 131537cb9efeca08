//! Serializable description of a scene.
//!
//! A scenario holds everything needed to build a [`World`]: the gravity, the
//! initial state of the body and the terrain. It is meant to be read from
//! YAML by whoever drives the simulation:
//!
//! ```yaml
//! gravity: 200.0            # optional, defaults to 200
//!
//! body:
//!   position: [0.0, 200.0]
//!   velocity: [40.0, 0.0]   # optional, defaults to rest
//!   acceleration: [0, -200] # optional, defaults to free fall
//!   radius: 25.0
//!   mass: 10.0
//!
//! terrain:
//!   segments:               # loose `[x1, y1, x2, y2]` pieces
//!     - [300.0, 50.0, 350.0, 50.0]
//!   polyline:               # chained vertices
//!     - [-300.0, 100.0]
//!     - [100.0, -50.0]
//!     - [200.0, -50.0]
//! ```

use serde::Deserialize;

use crate::{ Body, PhysicsError, Surface, Vector2D, World };

pub const DEFAULT_GRAVITY: f64 = 200.;

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: Option<[f64; 2]>,
    /// Free fall when missing
    #[serde(default)]
    pub acceleration: Option<[f64; 2]>,
    pub radius: f64,
    pub mass: f64,
}

/// Surfaces from both lists are used, segments first.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TerrainConfig {
    /// Independent segments, `[x1, y1, x2, y2]` each
    #[serde(default)]
    pub segments: Vec<[f64; 4]>,
    /// Chain of segments joining consecutive vertices
    #[serde(default)]
    pub polyline: Vec<[f64; 2]>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    pub body: BodyConfig,
    pub terrain: TerrainConfig,
}

impl Default for ScenarioConfig {
    /// A ball dropped above a valley made of a long downhill slope, a flat
    /// bottom and a short uphill slope.
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            body: BodyConfig {
                position: [0., 200.],
                velocity: None,
                acceleration: None,
                radius: 25.,
                mass: 10.,
            },
            terrain: TerrainConfig {
                segments: vec![],
                polyline: vec![
                    [-300., 100.],
                    [100., -50.],
                    [200., -50.],
                    [300., 50.],
                ],
            },
        }
    }
}

impl ScenarioConfig {
    pub fn build(&self) -> Result<World, PhysicsError> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfiguration { reason: "gravity must be finite" });
        }

        let body = self.body.build(self.gravity)?;
        let surfaces = self.terrain.build()?;
        Ok(World::new(surfaces, body))
    }
}

impl TerrainConfig {
    fn build(&self) -> Result<Vec<Surface>, PhysicsError> {
        if self.segments.is_empty() && self.polyline.is_empty() {
            return Err(PhysicsError::InvalidConfiguration { reason: "terrain has no surfaces" });
        }

        let mut surfaces = self.segments.iter()
            .map(|&[x1, y1, x2, y2]| Surface::new(x1, y1, x2, y2))
            .collect::<Result<Vec<_>, _>>()?;

        if !self.polyline.is_empty() {
            let points = self.polyline.iter()
                .map(|&[x, y]| Vector2D::new(x, y))
                .collect::<Vec<_>>();
            surfaces.extend(Surface::chain(&points)?);
        }

        Ok(surfaces)
    }
}

impl BodyConfig {
    fn build(&self, gravity: f64) -> Result<Body, PhysicsError> {
        let [x, y] = self.position;
        let mut body = Body::new(Vector2D::new(x, y), self.radius, self.mass, gravity);
        if let Some([vx, vy]) = self.velocity {
            body = body.with_velocity(Vector2D::new(vx, vy));
        }
        if let Some([ax, ay]) = self.acceleration {
            body = body.with_acceleration(Vector2D::new(ax, ay));
        }
        body.validate()?;
        Ok(body)
    }
}
