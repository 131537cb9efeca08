use itertools::Itertools;
use macroquad::prelude::*;
use slope_engine::{ self as se, Vector2DExt };

use crate::draw_polygon::{ fill_surface_ground, to_screen };

const NORMAL_LENGTH: f32 = 15.;
/// World units drawn per unit of velocity
const VELOCITY_SCALE: f32 = 0.2;

pub fn render_world(world: &se::World) {
    // Clear background
    clear_background(BLACK);

    let touching = world.touching().collect_vec();

    // Draw terrain, solid side first so the lines stay on top
    for surface in world.surfaces() {
        fill_surface_ground(surface, Color::new(0.15, 0.15, 0.18, 1.0));
    }
    for (idx, surface) in world.surfaces().iter().enumerate() {
        let begin = to_screen(surface.begin());
        let end = to_screen(surface.end());
        let middle = (begin + end) / 2.;
        let normal = to_screen(surface.normal()) * NORMAL_LENGTH;

        let color = if touching.contains(&idx) { ORANGE } else { WHITE };
        draw_line(middle.x, middle.y, middle.x + normal.x, middle.y + normal.y, 1., GREEN.with_alpha(0.25));
        draw_line(begin.x, begin.y, end.x, end.y, 2., color);
    }

    // Draw the body
    let body = world.body();
    let pos = to_screen(body.position());
    draw_circle(pos.x, pos.y, body.radius() as f32, WHITE);

    if body.velocity().magnitude() > 0. {
        let vel = to_screen(body.velocity()) * VELOCITY_SCALE;
        draw_line(pos.x, pos.y, pos.x + vel.x, pos.y + vel.y, 1.5, RED);
    }
}
