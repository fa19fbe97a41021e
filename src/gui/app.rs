use std::time::Duration;

use raylib::prelude::*;
use tracing::{debug, warn};

use crate::config::WidgetConfig;
use crate::constants::*;
use crate::engine::Navigate;
use crate::error::CarouselError;
use crate::gui::slide::Slide;
use crate::layout::{FrameHit, FrameLayout, FrameOptions, Point, Rect, ViewerLayout};
use crate::scroll::{Overflow, SharedPage};
use crate::state::ViewState;
use crate::viewer::Key;
use crate::widget::{Carousel, Coupling};

const BACKGROUND: Color = Color::new(10, 10, 10, 255);
const PANEL: Color = Color::new(23, 23, 23, 255);
const ACCENT: Color = Color::new(220, 38, 38, 255);
const MUTED: Color = Color::new(163, 163, 163, 255);
const CONTROL: Color = Color::new(0, 0, 0, 128);
const BACKDROP: Color = Color::new(0, 0, 0, 242);

const KEYS: [(KeyboardKey, Key); 3] = [
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
    (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
    (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
];

pub struct App {
    carousel: Carousel<Slide, SharedPage>,
    page: SharedPage,
    last_state: ViewState,
}

impl App {
    pub fn new(slides: Vec<Slide>, config: WidgetConfig) -> Self {
        let page = SharedPage::new(Overflow::Auto);
        let carousel = Carousel::new(slides, config, page.clone());
        let last_state = carousel.snapshot();
        Self {
            carousel,
            page,
            last_state,
        }
    }

    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        // --- Main Loop ---
        while !rl.window_should_close() {
            let dt = Duration::from_secs_f32(rl.get_frame_time());
            let (sw, sh) = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);

            // --- Input and Timer ---
            // Input runs against the layout the user saw last frame.
            let frame = self.frame_layout(sw, sh);
            self.handle_input(rl, sw, sh, &frame);
            // The autoplay timer only advances on frame deltas.
            self.carousel.update(dt);

            let state = self.carousel.snapshot();
            if state != self.last_state {
                debug!(?state, "view changed");
                self.last_state = state;
            }

            // --- Render ---
            // Recomputed: scrolling or navigation may have moved things.
            let frame = self.frame_layout(sw, sh);
            let mut d = rl.begin_drawing(thread);
            d.clear_background(BACKGROUND);
            self.draw_page(&mut d, &frame);
            // Overlay last, on top of the page.
            self.draw_viewer(&mut d, sw, sh);
        }
    }

    fn frame_layout(&self, sw: f32, sh: f32) -> FrameLayout {
        let config = self.carousel.config();
        let options = FrameOptions {
            aspect_ratio: config.aspect_ratio,
            len: self.carousel.engine().len(),
            show_indicators: config.show_indicators,
            show_play_button: config.show_play_button,
        };
        FrameLayout::compute(sw, sh, options, self.page.offset())
    }

    fn viewer_layout(&self, sw: f32, sh: f32) -> Option<ViewerLayout> {
        let slide = self.carousel.viewed()?;
        let (width, height) = slide.media_size();
        Some(ViewerLayout::compute(
            sw,
            sh,
            width,
            height,
            self.carousel.viewer().has_controls(),
        ))
    }

    fn handle_input(&mut self, rl: &RaylibHandle, sw: f32, sh: f32, frame: &FrameLayout) {
        // --- Keys ---
        for (raylib_key, key) in KEYS {
            if rl.is_key_pressed(raylib_key) {
                self.carousel.handle_key(key);
            }
        }

        // --- Page Scroll ---
        // Inert while the viewer holds the page.
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.page.scroll_by(-wheel * SCROLL_STEP, frame.max_scroll);
        }

        // --- Clicks ---
        if !rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            return;
        }
        let mouse = rl.get_mouse_position();
        let point = Point::new(mouse.x, mouse.y);

        // The overlay swallows every click while open.
        if let Some(viewer) = self.viewer_layout(sw, sh) {
            self.carousel.handle_click(viewer.hit(point));
            return;
        }

        let result = match frame.hit(point) {
            Some(FrameHit::Prev) => {
                self.carousel.retreat();
                Ok(())
            }
            Some(FrameHit::Next) => {
                self.carousel.advance();
                Ok(())
            }
            Some(FrameHit::PlayPause) => {
                self.carousel.toggle_playing();
                Ok(())
            }
            Some(FrameHit::Dot(i)) => self.carousel.goto(i),
            Some(FrameHit::Slide) => self.carousel.open_current(),
            Some(FrameHit::Row(i)) => self.select_row(i),
            None => Ok(()),
        };
        if let Err(e) = result {
            warn!(error = %e, "rejected navigation");
        }
    }

    /// A gallery opens the picked photo; a slideshow jumps to it.
    fn select_row(&mut self, index: usize) -> Result<(), CarouselError> {
        match self.carousel.config().coupling {
            Coupling::Independent => self.carousel.open(index),
            Coupling::PauseWhileOpen => self.carousel.goto(index),
        }
    }

    fn draw_page(&self, d: &mut RaylibDrawHandle, frame: &FrameLayout) {
        d.draw_rectangle_rec(rectangle(frame.frame), PANEL);

        let Some(slide) = self.carousel.current() else {
            d.draw_text(
                "No slides loaded.",
                frame.frame.x as i32 + 20,
                frame.frame.y as i32 + 20,
                20,
                MUTED,
            );
            return;
        };
        let inner = Rect::new(
            frame.frame.x + 8.0,
            frame.frame.y + 8.0,
            frame.frame.width - 16.0,
            frame.frame.height - 16.0,
        );
        slide.draw(d, inner);
        d.draw_text(
            slide.item.label(),
            frame.frame.x as i32 + 24,
            frame.frame.bottom() as i32 - 72,
            24,
            Color::WHITE,
        );

        if let Some(prev) = frame.prev {
            draw_button(d, prev, "<");
        }
        if let Some(next) = frame.next {
            draw_button(d, next, ">");
        }

        let current = self.carousel.engine().index();
        for (i, dot) in frame.dots.iter().enumerate() {
            let color = if i == current { ACCENT } else { MUTED };
            d.draw_rectangle_rec(rectangle(*dot), color);
        }
        if let Some(play) = frame.play {
            let label = if self.carousel.engine().is_playing() { "||" } else { ">" };
            d.draw_text(label, play.x as i32 + 4, play.y as i32, 20, Color::WHITE);
        }

        for (i, row) in frame.rows.iter().enumerate() {
            let color = if i == current { ACCENT } else { MUTED };
            if let Some(slide) = self.carousel.items().get(i) {
                d.draw_text(slide.item.label(), row.x as i32 + 8, row.y as i32 + 4, 20, color);
            }
        }
    }

    fn draw_viewer(&self, d: &mut RaylibDrawHandle, sw: f32, sh: f32) {
        let (Some(layout), Some(slide)) = (self.viewer_layout(sw, sh), self.carousel.viewed())
        else {
            return;
        };
        d.draw_rectangle(0, 0, sw as i32, sh as i32, BACKDROP);
        slide.draw(d, layout.content);

        let caption_x = layout.caption.x as i32;
        let caption_y = layout.caption.y as i32 + 8;
        d.draw_text(slide.item.label(), caption_x, caption_y, 24, Color::WHITE);
        if self.carousel.config().show_counter {
            if let Some(counter) = self.carousel.viewer().counter() {
                d.draw_text(&counter, caption_x, caption_y + 30, 20, MUTED);
            }
        }

        draw_button(d, layout.close, "X");
        if let Some(prev) = layout.prev {
            draw_button(d, prev, "<");
        }
        if let Some(next) = layout.next {
            draw_button(d, next, ">");
        }
    }
}

fn draw_button(d: &mut RaylibDrawHandle, area: Rect, label: &str) {
    let center = area.center();
    d.draw_circle(center.x as i32, center.y as i32, area.width * 0.5, CONTROL);
    d.draw_text(label, center.x as i32 - 6, center.y as i32 - 10, 20, Color::WHITE);
}

fn rectangle(r: Rect) -> Rectangle {
    Rectangle::new(r.x, r.y, r.width, r.height)
}
