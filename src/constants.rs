use std::time::Duration;

pub const WINDOW_WIDTH: i32 = 1280;           // Initial window width
pub const WINDOW_HEIGHT: i32 = 800;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);
pub const MIN_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(100);

pub const CALENDAR_ASPECT: f32 = 1.0 / 1.414; // A4 portrait, width / height
pub const NEWS_ASPECT: f32 = 16.0 / 9.0;
pub const GALLERY_ASPECT: f32 = 1.0;

pub const VIEWER_FIT: f32 = 0.9;              // Share of the screen the viewer image may fill
pub const PAGE_MARGIN: f32 = 32.0;            // Gap around the carousel frame (pixels)
pub const CONTROL_SIZE: f32 = 48.0;           // Arrow / close / play buttons (pixels)
pub const DOT_SIZE: f32 = 10.0;               // Indicator dot diameter (pixels)
pub const DOT_GAP: f32 = 8.0;
pub const SCROLL_STEP: f32 = 40.0;            // Pixels per mouse wheel notch
