use crate::{ PhysicsError, Vector2D, Vector2DExt };

use itertools::Itertools;

/// Oriented straight piece of terrain.
///
/// All derived quantities are computed once by the constructor, a surface is
/// never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    begin: Vector2D,
    end: Vector2D,
    /// Unit tangent, from `begin` towards `end`
    along: Vector2D,
    /// Unit normal, `along` rotated a quarter turn counter-clockwise
    normal: Vector2D,
    /// Sine of the incline, positive when the surface goes down from `begin`
    /// to `end`
    angle_sin: f64,
}

impl Surface {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, PhysicsError> {
        Self::from_points(Vector2D::new(x1, y1), Vector2D::new(x2, y2))
    }

    pub fn from_points(begin: Vector2D, end: Vector2D) -> Result<Self, PhysicsError> {
        let along = Vector2D::from_difference(end, begin).unit()
            .map_err(|_| PhysicsError::DegenerateSurface { begin, end })?;
        let normal = along.perp();

        let dx = end.x - begin.x;
        let dy = begin.y - end.y;
        let angle_sin = dy / (dx * dx + dy * dy).sqrt();

        Ok(Self {
            begin,
            end,
            along,
            normal,
            angle_sin,
        })
    }

    /// Surfaces joining consecutive points, in order.
    pub fn chain(points: &[Vector2D]) -> Result<Vec<Self>, PhysicsError> {
        if points.len() < 2 {
            return Err(PhysicsError::InvalidConfiguration {
                reason: "a chain of surfaces needs at least two points",
            });
        }

        points.iter()
            .tuple_windows()
            .map(|(&begin, &end)| Self::from_points(begin, end))
            .collect()
    }

    pub fn begin(&self) -> Vector2D {
        self.begin
    }

    pub fn end(&self) -> Vector2D {
        self.end
    }

    pub fn along(&self) -> Vector2D {
        self.along
    }

    /// Side the body gets pushed to when it penetrates the surface.
    /// For a surface drawn towards increasing x this points up.
    pub fn normal(&self) -> Vector2D {
        self.normal
    }

    pub fn angle_sin(&self) -> f64 {
        self.angle_sin
    }

    pub fn length(&self) -> f64 {
        Vector2D::from_difference(self.end, self.begin).magnitude()
    }
}
