use rand::{Rng, SeedableRng};
use slope_engine::{ self as se, config::{ ScenarioConfig, DEFAULT_GRAVITY } };

pub trait Scene {
    fn name(&self) -> &str;
    fn create_world(&self) -> Result<se::World, se::PhysicsError>;
}

/// The ball dropped over the three segment valley
pub struct Valley;

impl Scene for Valley {
    fn name(&self) -> &str {
        "Valley"
    }

    fn create_world(&self) -> Result<se::World, se::PhysicsError> {
        ScenarioConfig::default().build()
    }
}

pub struct FlatFloor;

impl Scene for FlatFloor {
    fn name(&self) -> &str {
        "Thrown on flat floor"
    }

    fn create_world(&self) -> Result<se::World, se::PhysicsError> {
        let floor = se::Surface::new(-400., -200., 400., -200.)?;
        let body = se::Body::new(se::Vector2D::new(-300., 150.), 20., 1., DEFAULT_GRAVITY)
            .with_velocity(se::Vector2D::new(120., 100.));
        Ok(se::World::new(vec![floor], body))
    }
}

pub struct LongRamp;

impl Scene for LongRamp {
    fn name(&self) -> &str {
        "Long ramp"
    }

    fn create_world(&self) -> Result<se::World, se::PhysicsError> {
        let points = [
            se::Vector2D::new(-400., 250.),
            se::Vector2D::new(0., -150.),
            se::Vector2D::new(400., -150.),
        ];
        let body = se::Body::new(se::Vector2D::new(-350., 290.), 15., 1., DEFAULT_GRAVITY);
        se::World::from_polyline(&points, body)
    }
}

/// Ball dropped right above the bottom of a V, touching both sides at once.
/// Swapping `left_first` changes the order corrections are applied in.
pub struct Notch {
    left_first: bool,
}

impl Scene for Notch {
    fn name(&self) -> &str {
        if self.left_first {
            "Notch, left side first"
        }
        else {
            "Notch, right side first"
        }
    }

    fn create_world(&self) -> Result<se::World, se::PhysicsError> {
        let left = se::Surface::new(-300., 300., 0., -100.)?;
        let right = se::Surface::new(0., -100., 200., 100.)?;
        let surfaces = if self.left_first { vec![left, right] } else { vec![right, left] };
        let body = se::Body::new(se::Vector2D::new(0., 100.), 30., 1., DEFAULT_GRAVITY);
        Ok(se::World::new(surfaces, body))
    }
}

pub struct RandomHills {
    seed: u64,
    name: &'static str,
}

impl Scene for RandomHills {
    fn name(&self) -> &str {
        self.name
    }

    fn create_world(&self) -> Result<se::World, se::PhysicsError> {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(self.seed);

        let points = (0..=16)
            .map(|i| se::Vector2D::new(-400. + 50. * i as f64, rng.random_range(-250. ..0.)))
            .collect::<Vec<_>>();
        let body = se::Body::new(se::Vector2D::new(rng.random_range(-300. ..300.), 250.), rng.random_range(8. ..25.), 1., DEFAULT_GRAVITY);
        se::World::from_polyline(&points, body)
    }
}

/// Scene read from a scenario file
pub struct Loaded {
    name: String,
    config: ScenarioConfig,
}

impl Loaded {
    pub fn new(name: String, config: ScenarioConfig) -> Self {
        Self { name, config }
    }
}

impl Scene for Loaded {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_world(&self) -> Result<se::World, se::PhysicsError> {
        self.config.build()
    }
}

pub fn get_all_scenes() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(Valley),
        Box::new(FlatFloor),
        Box::new(LongRamp),
        Box::new(Notch { left_first: true }),
        Box::new(Notch { left_first: false }),
        Box::new(RandomHills {
            seed: 4444,
            name: "Random hills 1",
        }),
        Box::new(RandomHills {
            seed: 4445,
            name: "Random hills 2",
        }),
    ]
}
