use slope_engine as se;

use macroquad::prelude::*;
use i_triangle::float::triangulatable::Triangulatable;

/// Depth of the solid band drawn under each surface, in world units
const GROUND_DEPTH: f64 = 40.;

pub fn to_screen(v: se::Vector2D) -> Vec2 {
    vec2(v.x as f32, v.y as f32)
}

pub fn fill_polygon(points: &[Vec2], color: Color) {
    let triangulation = points.triangulate().to_triangulation();

    let mesh = Mesh {
        vertices: triangulation.points.iter().map(|point| {
            Vertex {
                position: Vec3::new(point.x, point.y, 0.0),
                uv: Vec2::default(),
                color: color.into(),
                normal: Vec4::ZERO
            }
        }).collect(),
        indices: triangulation.indices,
        texture: None,
    };

    draw_mesh(&mesh);
}

/// Fills the solid side of a surface, the one opposite to its normal.
pub fn fill_surface_ground(surface: &se::Surface, color: Color) {
    let depth = surface.normal() * GROUND_DEPTH;
    let band = [
        surface.begin(),
        surface.end(),
        surface.end() - depth,
        surface.begin() - depth,
    ].map(to_screen);
    fill_polygon(&band, color);
}
