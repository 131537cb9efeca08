use macroquad::prelude::*;

/// Bottom bar with a play/pause button and a simulation speed slider.
pub struct PlaybackControls {
    speed_dragging: bool,

    // Layout constants
    height: f32,
    margin: f32,
    play_button_size: f32,
    bar_height: f32,
    speed_slider_width: f32,
    speed_handle_size: f32,

    // Speed range
    min_speed: f32,
    max_speed: f32,
}

const PRESET_SPEEDS: [f32; 4] = [0.25, 0.5, 1.0, 2.0];

impl PlaybackControls {
    pub fn new() -> Self {
        Self {
            speed_dragging: false,

            height: 60.0,
            margin: 40.0,
            play_button_size: 32.0,
            bar_height: 6.0,
            speed_slider_width: 160.0,
            speed_handle_size: 12.0,

            min_speed: 0.1,
            max_speed: 3.0,
        }
    }

    fn bar_y(&self) -> f32 {
        screen_height() - self.height
    }

    fn slider_x(&self) -> f32 {
        screen_width() - self.margin - self.speed_slider_width
    }

    fn normalized_speed(&self, speed: f32) -> f32 {
        ((speed - self.min_speed) / (self.max_speed - self.min_speed)).clamp(0.0, 1.0)
    }

    fn on_play_button(&self, (mouse_x, mouse_y): (f32, f32)) -> bool {
        let center_y = self.bar_y() + 25.0;
        (mouse_x - self.margin).abs() <= self.play_button_size / 2.0 &&
            (mouse_y - center_y).abs() <= self.play_button_size / 2.0
    }

    fn on_speed_slider(&self, (mouse_x, mouse_y): (f32, f32)) -> bool {
        let slider_x = self.slider_x();
        let center_y = self.bar_y() + 25.0;
        mouse_x >= slider_x - self.speed_handle_size / 2.0 &&
            mouse_x <= slider_x + self.speed_slider_width + self.speed_handle_size / 2.0 &&
            (mouse_y - center_y).abs() <= self.speed_handle_size
    }

    /// Returns whether the mouse is over the bar, in which case the caller
    /// should not use it to move the camera.
    pub fn handle_input(&mut self, paused: &mut bool, speed: &mut f32) -> bool {
        let mouse = mouse_position();
        let mouse_in_bar = mouse.1 >= self.bar_y();

        if mouse_in_bar && is_mouse_button_pressed(MouseButton::Left) {
            if self.on_play_button(mouse) {
                *paused = !*paused;
            } else if self.on_speed_slider(mouse) {
                self.speed_dragging = true;
            }
        }

        if self.speed_dragging && is_mouse_button_down(MouseButton::Left) {
            let normalized_x = ((mouse.0 - self.slider_x()) / self.speed_slider_width).clamp(0.0, 1.0);
            let raw_speed = self.min_speed + normalized_x * (self.max_speed - self.min_speed);

            // Snap to preset markers
            *speed = PRESET_SPEEDS.iter().copied()
                .find(|&preset| (normalized_x - self.normalized_speed(preset)).abs() < 0.03)
                .unwrap_or(raw_speed);
        }

        if is_mouse_button_released(MouseButton::Left) {
            self.speed_dragging = false;
        }

        mouse_in_bar || self.speed_dragging
    }

    pub fn draw(&self, sim_t: f64, paused: bool, speed: f32) {
        let bar_y = self.bar_y();
        let center_y = bar_y + 25.0;
        let mouse = mouse_position();

        draw_rectangle(0.0, bar_y, screen_width(), self.height, Color::new(0.1, 0.1, 0.1, 0.9));

        // Play/Pause button
        let play_x = self.margin;
        let button_color = if self.on_play_button(mouse) {
            Color::new(0.8, 0.8, 0.8, 1.0)
        } else {
            Color::new(0.6, 0.6, 0.6, 1.0)
        };
        draw_circle(play_x, center_y, self.play_button_size / 2.0, button_color);

        if paused {
            let triangle_size = 8.0;
            let v1 = Vec2::new(play_x - triangle_size / 2.0, center_y - triangle_size / 2.0);
            let v2 = Vec2::new(play_x - triangle_size / 2.0, center_y + triangle_size / 2.0);
            let v3 = Vec2::new(play_x + triangle_size / 2.0, center_y);
            draw_triangle(v1, v2, v3, BLACK);
        } else {
            let bar_width = 3.0;
            let bar_height = 10.0;
            let bar_spacing = 2.0;
            draw_rectangle(play_x - bar_spacing - bar_width, center_y - bar_height / 2.0, bar_width, bar_height, BLACK);
            draw_rectangle(play_x + bar_spacing, center_y - bar_height / 2.0, bar_width, bar_height, BLACK);
        }

        // Simulated time, there is no end to scrub to
        let time_text = format!("{}:{:05.2}", (sim_t as i64) / 60, sim_t % 60.);
        draw_text(&time_text, play_x + self.play_button_size, center_y + 6.0, 20.0, WHITE);

        // Speed slider
        let slider_x = self.slider_x();
        draw_text("Speed:", slider_x - 50.0, bar_y + 15.0, 14.0, LIGHTGRAY);
        draw_rectangle(slider_x, center_y - self.bar_height / 2.0,
                      self.speed_slider_width, self.bar_height, Color::new(0.4, 0.4, 0.4, 1.0));

        for preset in PRESET_SPEEDS {
            let preset_x = slider_x + self.normalized_speed(preset) * self.speed_slider_width;
            let is_snapped = (speed - preset).abs() < 0.01;
            let (color, line_height) = if is_snapped {
                (Color::new(1.0, 0.7, 0.3, 1.0), 12.0)
            } else {
                (Color::new(0.6, 0.6, 0.6, 0.8), 8.0)
            };
            draw_line(preset_x, center_y - line_height, preset_x, center_y + line_height, 1.0, color);
        }

        let handle_x = slider_x + self.normalized_speed(speed) * self.speed_slider_width;
        let handle_color = if self.speed_dragging {
            Color::new(0.9, 0.6, 0.2, 1.0)
        } else {
            Color::new(0.7, 0.5, 0.2, 1.0)
        };
        draw_circle(handle_x, center_y, self.speed_handle_size / 2.0, handle_color);
        draw_circle(handle_x, center_y, self.speed_handle_size / 2.0 - 2.0, WHITE);

        let speed_text = format!("{:.2}x", speed);
        draw_text(&speed_text, slider_x + self.speed_slider_width - 30.0, bar_y + 15.0, 14.0, WHITE);
    }
}
