mod draw_polygon;
mod playback_controls;
mod scenes;
mod world_renderer;

use std::fs::File;
use std::io::BufReader;
use std::path::{ Path, PathBuf };

use anyhow::{ Context, Result };
use clap::Parser;
use macroquad::{ prelude::*, ui::{ self, root_ui } };
use slope_engine as se;

use playback_controls::PlaybackControls;
use scenes::{ get_all_scenes, Scene };
use world_renderer::render_world;

const CAMERA_ZOOM_SPEED: f32 = 1.25;
/// Height of the world shown at zoom 1, the width follows the window
const VIEW_HEIGHT: f32 = 600.;

#[derive(Parser, Debug)]
struct Args {
    /// YAML scenario to add after the built-in scenes
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Index of the scene to start with, ignored when a scenario is given
    #[arg(long, default_value_t = 0)]
    scene: usize,

    /// Longest time step handed to the simulation, in seconds.
    /// Frames slower than this slow the simulation down instead of letting
    /// the body jump through the terrain.
    #[arg(long, default_value_t = 0.05, value_parser = parse_max_dt)]
    max_dt: f64,
}

fn parse_max_dt(s: &str) -> Result<f64, String> {
    let max_dt: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if max_dt.is_finite() && max_dt > 0. {
        Ok(max_dt)
    } else {
        Err(format!("{max_dt} is not a positive number of seconds"))
    }
}

fn load_scenario(path: &Path) -> Result<scenes::Loaded> {
    let file = File::open(path)
        .with_context(|| format!("could not open {}", path.display()))?;
    let config: se::config::ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("could not parse {}", path.display()))?;

    // Fail now rather than when switching to it
    config.build()
        .with_context(|| format!("invalid scenario {}", path.display()))?;

    let name = path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Scenario".to_owned());
    Ok(scenes::Loaded::new(name, config))
}

fn create_world(scene: &dyn Scene) -> Option<se::World> {
    match scene.create_world() {
        Ok(world) => {
            println!("Loaded scene \"{}\" ({} surfaces)", scene.name(), world.surfaces().len());
            Some(world)
        }
        Err(err) => {
            eprintln!("Could not create scene \"{}\": {err}", scene.name());
            None
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Slope".to_owned(),
        window_width: 800,
        window_height: 600,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let mut scenes = get_all_scenes();
    let mut scene_idx = args.scene.min(scenes.len() - 1);
    if let Some(path) = &args.scenario {
        match load_scenario(path) {
            Ok(scene) => {
                scenes.push(Box::new(scene));
                scene_idx = scenes.len() - 1;
            }
            Err(err) => eprintln!("Ignoring scenario file: {err:#}"),
        }
    }
    let Some(mut world) = create_world(scenes[scene_idx].as_ref())
    else { return };

    let mut controls = PlaybackControls::new();
    let mut cam_offset = Vec2::ZERO;
    let mut zoom = 1.;
    let mut paused = false;
    let mut speed = 1f32;
    let mut last_mouse = Vec2::from(mouse_position());

    // Setup ui skin
    {
        let label_style = root_ui().style_builder()
            .font_size(20)
            .text_color(WHITE)
            .build();
        let skin = ui::Skin {
            label_style,
            ..root_ui().default_skin()
        };
        root_ui().push_skin(&skin);
    }

    loop {
        // Handle inputs
        let mut next_scene = None;
        if is_key_pressed(KeyCode::R) {
            next_scene = Some(scene_idx);
        }
        if is_key_pressed(KeyCode::Right) {
            next_scene = Some((scene_idx + 1) % scenes.len());
        }
        if is_key_pressed(KeyCode::Left) {
            next_scene = Some((scene_idx + scenes.len() - 1) % scenes.len());
        }
        if let Some(idx) = next_scene {
            if let Some(new_world) = create_world(scenes[idx].as_ref()) {
                scene_idx = idx;
                world = new_world;
            }
        }

        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }

        let mouse_on_controls = controls.handle_input(&mut paused, &mut speed);

        // Step
        if !paused {
            // The engine takes dt as is, keeping it sane is our job
            let dt = (f64::from(get_frame_time()) * f64::from(speed)).clamp(0., args.max_dt);
            world.step(dt);
        }

        // Setup camera
        let view_width = (screen_width() / screen_height()) * VIEW_HEIGHT;
        let mut camera = Camera2D {
            target: cam_offset,
            zoom: vec2(2. / view_width, 2. / VIEW_HEIGHT) * zoom,
            ..Default::default()
        };

        let mouse = Vec2::from(mouse_position());
        if !mouse_on_controls && is_mouse_button_down(MouseButton::Left) {
            cam_offset += camera.screen_to_world(last_mouse) - camera.screen_to_world(mouse);
            camera.target = cam_offset;
        }
        last_mouse = mouse;

        let scroll = mouse_wheel().1;
        if scroll != 0. {
            let mouse_world_before = camera.screen_to_world(mouse);

            zoom *= CAMERA_ZOOM_SPEED.powf(scroll.signum());
            camera.zoom = vec2(2. / view_width, 2. / VIEW_HEIGHT) * zoom;

            let mouse_world_after = camera.screen_to_world(mouse);
            cam_offset += mouse_world_before - mouse_world_after;
            camera.target = cam_offset;
        }

        // Drawing
        set_camera(&camera);
        render_world(&world);

        set_default_camera();
        controls.draw(world.elapsed(), paused, speed);

        let body = world.body();
        root_ui().label(None, &format!("fps: {}", get_fps()));
        root_ui().label(None, &format!("scene {}/{}: {}", scene_idx + 1, scenes.len(), scenes[scene_idx].name()));
        root_ui().label(None, &format!("pos: ({:.1}, {:.1})", body.position().x, body.position().y));
        root_ui().label(None, &format!("vel: ({:.1}, {:.1})", body.velocity().x, body.velocity().y));
        root_ui().label(None, &format!("touching: {:?}", world.touching().collect::<Vec<_>>()));
        if paused {
            root_ui().label(None, "PAUSED");
        }

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_dt_must_be_positive() {
        assert_eq!(parse_max_dt("0.1"), Ok(0.1));
        assert!(parse_max_dt("0").is_err());
        assert!(parse_max_dt("-0.05").is_err());
        assert!(parse_max_dt("inf").is_err());
        assert!(parse_max_dt("NaN").is_err());
        assert!(parse_max_dt("fast").is_err());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["visualisation"]).unwrap();
        assert_eq!(args.max_dt, 0.05);
        assert_eq!(args.scene, 0);
        assert!(args.scenario.is_none());

        let args = Args::try_parse_from(["visualisation", "--max-dt", "0.02", "--scene", "3"]).unwrap();
        assert_eq!(args.max_dt, 0.02);
        assert_eq!(args.scene, 3);

        assert!(Args::try_parse_from(["visualisation", "--max-dt=-1"]).is_err());
    }
}
