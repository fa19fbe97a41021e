//! Auto-advancing media carousel with a full-screen viewer.
//!
//! [`slideshow::SlideshowEngine`] owns the cursor and the autoplay timer,
//! [`viewer::ModalViewer`] owns the overlay, and [`widget::Carousel`] couples
//! the two. Time only moves when the caller feeds frame deltas to `update`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod item;
pub mod layout;
pub mod logging;
pub mod ring;
pub mod scroll;
pub mod slideshow;
pub mod state;
pub mod timer;
pub mod viewer;
pub mod widget;

#[cfg(feature = "gui")]
pub mod gui;

pub use engine::Navigate;
pub use error::CarouselError;
pub use item::{Item, ItemId};
pub use slideshow::SlideshowEngine;
pub use viewer::ModalViewer;
pub use widget::Carousel;
