//! raylib front end: draws the carousel page and the viewer overlay and turns
//! mouse and keyboard input into carousel calls.

pub mod app;
pub mod slide;
pub mod texture_loader;

use std::time::Duration;

use raylib::prelude::*;

/// Shows `message` for a few seconds so a failed start is visible.
pub fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(message, 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(5));
}
