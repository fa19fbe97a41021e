use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};

use crate::constants::*;
use crate::slideshow::ManualNavPolicy;
use crate::widget::Coupling;

/// The three widget flavours, differing only in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Portrait pages, autoplay, fullscreen pauses the slideshow.
    Calendar,
    /// 16:9 headlines, autoplay, fullscreen pauses the slideshow.
    News,
    /// Square photos, no autoplay at all.
    Gallery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub variant: Variant,
    pub aspect_ratio: f32,
    pub autoplay: bool,
    pub interval: Duration,
    pub coupling: Coupling,
    pub manual_nav: ManualNavPolicy,
    pub show_indicators: bool,
    pub show_play_button: bool,
    pub show_counter: bool,
}

impl Variant {
    pub fn config(self) -> WidgetConfig {
        let base = WidgetConfig {
            variant: self,
            aspect_ratio: NEWS_ASPECT,
            autoplay: true,
            interval: DEFAULT_AUTOPLAY_INTERVAL,
            coupling: Coupling::PauseWhileOpen,
            manual_nav: ManualNavPolicy::KeepPhase,
            show_indicators: true,
            show_play_button: false,
            show_counter: true,
        };
        match self {
            Variant::Calendar => WidgetConfig {
                aspect_ratio: CALENDAR_ASPECT,
                show_play_button: true,
                show_counter: false,
                ..base
            },
            Variant::News => base,
            Variant::Gallery => WidgetConfig {
                aspect_ratio: GALLERY_ASPECT,
                autoplay: false,
                coupling: Coupling::Independent,
                show_indicators: false,
                ..base
            },
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "carousel",
    version,
    about = "Auto-advancing image carousel with a full-screen viewer"
)]
pub struct Cli {
    /// Directory holding the images to show
    pub image_directory: PathBuf,

    #[arg(long, value_enum, default_value_t = Variant::News)]
    pub variant: Variant,

    /// Autoplay interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Start paused
    #[arg(long)]
    pub no_autoplay: bool,

    /// Restart the autoplay interval after a manual step
    #[arg(long)]
    pub restart_on_manual: bool,

    /// Shuffle the images instead of sorting by file name
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for a reproducible shuffle
    #[arg(long, requires = "shuffle")]
    pub seed: Option<u64>,

    /// -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn widget_config(&self) -> WidgetConfig {
        let mut config = self.variant.config();
        if let Some(ms) = self.interval_ms {
            config.interval = Duration::from_millis(ms);
        }
        if self.no_autoplay {
            config.autoplay = false;
        }
        if self.restart_on_manual {
            config.manual_nav = ManualNavPolicy::RestartTimer;
        }
        config
    }
}
