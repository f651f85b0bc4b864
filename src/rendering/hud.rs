use macroquad::prelude::*;

use crate::application::Session;
use crate::rendering::GridRenderer;

/// Draw the status overlay in the top-left corner
pub fn draw_hud<R: GridRenderer>(session: &Session<R>) {
    let state = session.engine().state();
    let label_color = Color::from_rgba(180, 180, 180, 255);

    let lines = [
        format!("Rate: {:.0} ticks/s", session.clock().rate()),
        format!("Ticks: {}", session.tick_count()),
        format!("Jumps: {}", session.jump_count()),
        format!("Mask: {:#04x}", state.mask),
        format!("Color: {}", state.color_index()),
        format!("FPS: {}", get_fps()),
    ];

    lines.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, 10.0, 20.0 + i as f32 * 16.0, 16.0, label_color);
    });
}
