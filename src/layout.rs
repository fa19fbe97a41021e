//! Screen geometry for the carousel frame and the viewer overlay, kept free
//! of any drawing backend so hit-testing can be checked directly.

use crate::constants::*;
use crate::viewer::ClickTarget;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    fn centered_square(center: Point, size: f32) -> Rect {
        Rect::new(center.x - size * 0.5, center.y - size * 0.5, size, size)
    }
}

/// Largest rectangle with the media's aspect ratio that fits in `bounds`,
/// centered in it.
pub fn fit_within(media_width: f32, media_height: f32, bounds: Rect) -> Rect {
    if media_width <= 0.0 || media_height <= 0.0 {
        return Rect::new(bounds.center().x, bounds.center().y, 0.0, 0.0);
    }
    let scale = (bounds.width / media_width).min(bounds.height / media_height);
    let (width, height) = (media_width * scale, media_height * scale);
    Rect::new(
        bounds.x + (bounds.width - width) * 0.5,
        bounds.y + (bounds.height - height) * 0.5,
        width,
        height,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHit {
    Prev,
    Next,
    Dot(usize),
    PlayPause,
    Slide,
    /// A row of the item list below the frame.
    Row(usize),
}

const ROW_HEIGHT: f32 = 28.0;

/// The page: carousel frame on top, one list row per item beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub frame: Rect,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub dots: Vec<Rect>,
    pub play: Option<Rect>,
    pub rows: Vec<Rect>,
    /// How far the page can scroll before its end reaches the screen bottom.
    pub max_scroll: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOptions {
    pub aspect_ratio: f32,
    pub len: usize,
    pub show_indicators: bool,
    pub show_play_button: bool,
}

impl FrameLayout {
    pub fn compute(
        screen_width: f32,
        screen_height: f32,
        options: FrameOptions,
        scroll: f32,
    ) -> Self {
        let max_width = (screen_width - 2.0 * PAGE_MARGIN).max(0.0);
        let max_height = (screen_height * 0.75).max(0.0);
        let mut width = max_width;
        let mut height = width / options.aspect_ratio;
        if height > max_height {
            height = max_height;
            width = height * options.aspect_ratio;
        }
        let frame = Rect::new((screen_width - width) * 0.5, PAGE_MARGIN - scroll, width, height);
        let mid_y = frame.center().y;
        let with_controls = options.len > 1;

        let (prev, next) = if with_controls {
            (
                Some(Rect::centered_square(
                    Point::new(frame.x + PAGE_MARGIN, mid_y),
                    CONTROL_SIZE,
                )),
                Some(Rect::centered_square(
                    Point::new(frame.x + frame.width - PAGE_MARGIN, mid_y),
                    CONTROL_SIZE,
                )),
            )
        } else {
            (None, None)
        };

        let dot_y = frame.bottom() - PAGE_MARGIN;
        let dot_count = if with_controls && options.show_indicators {
            options.len
        } else {
            0
        };
        let play_slot = if with_controls && options.show_play_button {
            DOT_SIZE * 2.0 + DOT_GAP
        } else {
            0.0
        };
        let row_width = dot_count as f32 * (DOT_SIZE + DOT_GAP) + play_slot;
        let start_x = frame.center().x - row_width * 0.5;
        let dots = (0..dot_count)
            .map(|i| {
                let x = start_x + i as f32 * (DOT_SIZE + DOT_GAP);
                Rect::new(x, dot_y - DOT_SIZE * 0.5, DOT_SIZE, DOT_SIZE)
            })
            .collect();
        let play = (play_slot > 0.0).then(|| {
            Rect::new(
                start_x + row_width - DOT_SIZE * 2.0,
                dot_y - DOT_SIZE,
                DOT_SIZE * 2.0,
                DOT_SIZE * 2.0,
            )
        });

        let rows_top = frame.bottom() + PAGE_MARGIN;
        let rows: Vec<Rect> = (0..options.len)
            .map(|i| Rect::new(frame.x, rows_top + i as f32 * ROW_HEIGHT, frame.width, ROW_HEIGHT))
            .collect();
        let page_bottom = rows_top + options.len as f32 * ROW_HEIGHT + PAGE_MARGIN + scroll;

        Self {
            frame,
            prev,
            next,
            dots,
            play,
            rows,
            max_scroll: (page_bottom - screen_height).max(0.0),
        }
    }

    /// Controls sit on top of the slide, so they win.
    pub fn hit(&self, p: Point) -> Option<FrameHit> {
        if self.prev.is_some_and(|r| r.contains(p)) {
            return Some(FrameHit::Prev);
        }
        if self.next.is_some_and(|r| r.contains(p)) {
            return Some(FrameHit::Next);
        }
        if let Some(i) = self.dots.iter().position(|r| r.contains(p)) {
            return Some(FrameHit::Dot(i));
        }
        if self.play.is_some_and(|r| r.contains(p)) {
            return Some(FrameHit::PlayPause);
        }
        if self.frame.contains(p) {
            return Some(FrameHit::Slide);
        }
        self.rows.iter().position(|r| r.contains(p)).map(FrameHit::Row)
    }
}

const CAPTION_HEIGHT: f32 = 64.0;

/// Full-screen overlay: media centered, caption band under it, buttons
/// around it, backdrop everywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerLayout {
    pub content: Rect,
    pub caption: Rect,
    pub close: Rect,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
}

impl ViewerLayout {
    pub fn compute(
        screen_width: f32,
        screen_height: f32,
        media_width: f32,
        media_height: f32,
        with_controls: bool,
    ) -> Self {
        let bounds_width = screen_width * VIEWER_FIT;
        let bounds_height = (screen_height * VIEWER_FIT - CAPTION_HEIGHT).max(0.0);
        let bounds = Rect::new(
            (screen_width - bounds_width) * 0.5,
            (screen_height - bounds_height - CAPTION_HEIGHT) * 0.5,
            bounds_width,
            bounds_height,
        );
        let content = fit_within(media_width, media_height, bounds);
        let caption = Rect::new(bounds.x, bounds.bottom(), bounds.width, CAPTION_HEIGHT);
        let close = Rect::new(
            screen_width - CONTROL_SIZE - PAGE_MARGIN * 0.5,
            PAGE_MARGIN * 0.5,
            CONTROL_SIZE,
            CONTROL_SIZE,
        );
        let mid_y = screen_height * 0.5;
        let (prev, next) = if with_controls {
            (
                Some(Rect::centered_square(Point::new(CONTROL_SIZE, mid_y), CONTROL_SIZE)),
                Some(Rect::centered_square(
                    Point::new(screen_width - CONTROL_SIZE, mid_y),
                    CONTROL_SIZE,
                )),
            )
        } else {
            (None, None)
        };
        Self {
            content,
            caption,
            close,
            prev,
            next,
        }
    }

    pub fn hit(&self, p: Point) -> ClickTarget {
        if self.close.contains(p) {
            ClickTarget::CloseButton
        } else if self.prev.is_some_and(|r| r.contains(p)) {
            ClickTarget::PrevButton
        } else if self.next.is_some_and(|r| r.contains(p)) {
            ClickTarget::NextButton
        } else if self.content.contains(p) || self.caption.contains(p) {
            ClickTarget::Content
        } else {
            ClickTarget::Backdrop
        }
    }
}
