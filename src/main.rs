use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};

use carousel::catalog::{self, Order};
use carousel::config::Cli;
use carousel::constants::*;
use carousel::gui::app::App;
use carousel::gui::{show_error, texture_loader::load_slides};
use carousel::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = cli.widget_config();
    info!(variant = ?config.variant, dir = %cli.image_directory.display(), "starting");

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape belongs to the viewer, not to the window.
    rl.set_exit_key(None);

    let order = if cli.shuffle {
        Order::Shuffled { seed: cli.seed }
    } else {
        Order::FileName
    };
    let items = match catalog::load_items(&cli.image_directory, order) {
        Ok(items) => items,
        Err(e) => {
            error!(error = %e, "could not load images");
            show_error(&mut rl, &thread, &format!("Error: {e}"));
            return Err(e);
        }
    };

    let slides = load_slides(&mut rl, &thread, items);
    info!(count = slides.len(), "slides ready");

    let mut app = App::new(slides, config);
    app.run(&mut rl, &thread);
    Ok(())
}
