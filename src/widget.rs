//! A carousel: slideshow engine and modal viewer over the same items, tied
//! together by a [`Coupling`] policy.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::WidgetConfig;
use crate::engine::Navigate;
use crate::error::CarouselError;
use crate::scroll::ScrollHost;
use crate::slideshow::SlideshowEngine;
use crate::state::ViewState;
use crate::viewer::{ClickTarget, Key, ModalViewer, ViewerAction};

/// How the viewer's open flag drives the slideshow's play flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupling {
    /// Opening always pauses, closing always resumes, whatever the user had
    /// chosen before. Autoplay cannot be switched on while open.
    PauseWhileOpen,
    /// The viewer leaves autoplay alone.
    Independent,
}

impl Coupling {
    fn on_open<T>(self, engine: &mut SlideshowEngine<T>) {
        if self == Coupling::PauseWhileOpen {
            engine.set_playing(false);
        }
    }

    fn on_close<T>(self, engine: &mut SlideshowEngine<T>) {
        if self == Coupling::PauseWhileOpen {
            engine.set_playing(true);
        }
    }
}

#[derive(Debug)]
pub struct Carousel<T, H: ScrollHost> {
    engine: SlideshowEngine<T>,
    viewer: ModalViewer<H>,
    config: WidgetConfig,
}

impl<T, H: ScrollHost> Carousel<T, H> {
    pub fn new(items: Vec<T>, config: WidgetConfig, host: H) -> Self {
        let viewer = ModalViewer::new(items.len(), host);
        Self {
            engine: build_engine(items, &config),
            viewer,
            config,
        }
    }

    pub fn engine(&self) -> &SlideshowEngine<T> {
        &self.engine
    }

    pub fn viewer(&self) -> &ModalViewer<H> {
        &self.viewer
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn items(&self) -> &[T] {
        self.engine.items()
    }

    pub fn current(&self) -> Option<&T> {
        self.engine.current()
    }

    /// The item on screen in the overlay, if it is open.
    pub fn viewed(&self) -> Option<&T> {
        self.viewer.index().and_then(|i| self.engine.items().get(i))
    }

    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    pub fn snapshot(&self) -> ViewState {
        ViewState {
            index: self.engine.position(),
            playing: self.engine.is_playing(),
            open: self.viewer.is_open(),
            viewer_index: self.viewer.index(),
            len: self.engine.len(),
        }
    }

    pub fn advance(&mut self) {
        self.engine.advance();
    }

    pub fn retreat(&mut self) {
        self.engine.retreat();
    }

    pub fn goto(&mut self, target: usize) -> Result<(), CarouselError> {
        self.engine.goto(target)
    }

    pub fn set_playing(&mut self, playing: bool) {
        if playing && self.blocks_autoplay() {
            debug!("autoplay stays off while the viewer is open");
            return;
        }
        self.engine.set_playing(playing);
    }

    pub fn toggle_playing(&mut self) {
        self.set_playing(!self.engine.is_playing());
    }

    /// Keeps the config in step with the engine, which may clamp the value.
    pub fn set_interval(&mut self, interval: Duration) {
        self.engine.set_interval(interval);
        self.config.interval = self.engine.interval();
    }

    pub fn update(&mut self, dt: Duration) -> bool {
        self.engine.update(dt)
    }

    /// Opens the overlay at `at`. Nothing changes if `at` is out of range.
    pub fn open(&mut self, at: usize) -> Result<(), CarouselError> {
        if at >= self.engine.len() {
            return Err(CarouselError::OutOfRange {
                index: at,
                len: self.engine.len(),
            });
        }
        self.config.coupling.on_open(&mut self.engine);
        self.viewer.open(at)
    }

    /// Click on the displayed slide.
    pub fn open_current(&mut self) -> Result<(), CarouselError> {
        self.open(self.engine.index())
    }

    /// Closes the overlay and lets the slideshow continue from the last item
    /// viewed. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        let last = self.viewer.index();
        if !self.viewer.close() {
            return false;
        }
        if let Some(index) = last {
            // Both sides hold the same length; a miss means they drifted apart.
            let synced = self.engine.goto(index);
            debug_assert!(synced.is_ok(), "viewer and slideshow disagree on length");
            if let Err(e) = synced {
                warn!(error = %e, "viewer index out of step with the slideshow");
            }
        }
        self.config.coupling.on_close(&mut self.engine);
        true
    }

    /// Routes a key press through the viewer's bindings. Keys do nothing
    /// while the viewer is closed.
    pub fn handle_key(&mut self, key: Key) -> Option<ViewerAction> {
        let action = self.viewer.binding_for(key)?;
        self.dispatch(action);
        Some(action)
    }

    pub fn handle_click(&mut self, target: ClickTarget) -> Option<ViewerAction> {
        let action = self.viewer.click_action(target)?;
        self.dispatch(action);
        Some(action)
    }

    /// Starts over with a new sequence: the viewer closes and a fresh engine
    /// begins at index 0.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.close();
        self.viewer.reset(items.len());
        self.engine = build_engine(items, &self.config);
        debug!(len = self.engine.len(), "sequence replaced");
    }

    fn dispatch(&mut self, action: ViewerAction) {
        match action {
            ViewerAction::Close => {
                self.close();
            }
            other => self.viewer.apply(other),
        }
    }

    fn blocks_autoplay(&self) -> bool {
        self.config.coupling == Coupling::PauseWhileOpen && self.viewer.is_open()
    }
}

fn build_engine<T>(items: Vec<T>, config: &WidgetConfig) -> SlideshowEngine<T> {
    SlideshowEngine::new(items, config.interval, config.autoplay)
        .with_manual_nav(config.manual_nav)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::constants::MIN_AUTOPLAY_INTERVAL;
    use crate::scroll::{Overflow, SharedPage};
    use pretty_assertions::assert_eq;

    fn carousel(len: usize, variant: Variant) -> (Carousel<usize, SharedPage>, SharedPage) {
        let page = SharedPage::new(Overflow::Auto);
        (Carousel::new((0..len).collect(), variant.config(), page.clone()), page)
    }

    #[test]
    fn open_pauses_and_close_resumes() {
        let (mut carousel, page) = carousel(3, Variant::News);
        carousel.open_current().unwrap();
        assert!(!carousel.engine().is_playing());
        assert_eq!(page.overflow(), Overflow::Hidden);
        assert!(carousel.close());
        assert!(carousel.engine().is_playing());
        assert_eq!(page.overflow(), Overflow::Auto);
    }

    #[test]
    fn manual_pause_is_not_preserved_across_fullscreen() {
        let (mut carousel, _page) = carousel(3, Variant::Calendar);
        carousel.set_playing(false);
        carousel.open(2).unwrap();
        carousel.close();
        assert!(carousel.engine().is_playing());
    }

    #[test]
    fn autoplay_cannot_start_while_open() {
        let (mut carousel, _page) = carousel(3, Variant::News);
        carousel.open(0).unwrap();
        carousel.set_playing(true);
        carousel.toggle_playing();
        assert!(!carousel.engine().is_playing());
        assert!(!carousel.engine().is_timer_armed());
    }

    #[test]
    fn independent_viewer_leaves_autoplay_alone() {
        let (mut carousel, _page) = carousel(3, Variant::Gallery);
        assert!(!carousel.engine().is_playing());
        carousel.open(1).unwrap();
        carousel.close();
        assert!(!carousel.engine().is_playing());

        carousel.set_playing(true);
        carousel.open(1).unwrap();
        assert!(carousel.engine().is_playing());
    }

    #[test]
    fn close_syncs_the_slideshow_to_the_viewer() {
        let (mut carousel, _page) = carousel(4, Variant::News);
        carousel.open(1).unwrap();
        carousel.handle_key(Key::ArrowRight);
        carousel.handle_key(Key::ArrowRight);
        assert_eq!(carousel.viewed(), Some(&3));
        assert_eq!(carousel.current(), Some(&0));
        carousel.handle_key(Key::Escape);
        assert_eq!(carousel.current(), Some(&3));
        assert!(carousel.engine().is_playing());
    }

    #[test]
    fn keys_do_nothing_while_closed() {
        let (mut carousel, _page) = carousel(3, Variant::News);
        assert_eq!(carousel.handle_key(Key::ArrowRight), None);
        assert_eq!(carousel.handle_key(Key::ArrowLeft), None);
        assert_eq!(carousel.snapshot().index, Some(0));
    }

    #[test]
    fn backdrop_click_resumes_but_content_click_does_not() {
        let (mut carousel, _page) = carousel(3, Variant::News);
        carousel.open(0).unwrap();
        assert_eq!(carousel.handle_click(ClickTarget::Content), None);
        assert!(carousel.is_open());
        assert!(!carousel.engine().is_playing());
        assert_eq!(carousel.handle_click(ClickTarget::Backdrop), Some(ViewerAction::Close));
        assert!(!carousel.is_open());
        assert!(carousel.engine().is_playing());
    }

    #[test]
    fn failed_open_does_not_pause() {
        let (mut carousel, page) = carousel(3, Variant::News);
        assert_eq!(carousel.open(3), Err(CarouselError::OutOfRange { index: 3, len: 3 }));
        assert!(carousel.engine().is_playing());
        assert!(!carousel.is_open());
        assert_eq!(page.overflow(), Overflow::Auto);
    }

    #[test]
    fn replace_items_resets_everything() {
        let (mut carousel, page) = carousel(3, Variant::News);
        carousel.advance();
        carousel.open(2).unwrap();
        carousel.replace_items(vec![10, 20]);
        assert_eq!(
            carousel.snapshot(),
            ViewState {
                index: Some(0),
                playing: true,
                open: false,
                viewer_index: None,
                len: 2,
            }
        );
        assert_eq!(page.overflow(), Overflow::Auto);
        carousel.open(1).unwrap();
        assert_eq!(carousel.viewed(), Some(&20));
    }

    #[test]
    fn same_interval_keeps_the_running_phase() {
        let (mut carousel, _page) = carousel(3, Variant::News);
        carousel.update(Duration::from_millis(3000));
        carousel.set_interval(Duration::from_millis(5000));
        assert_eq!(carousel.engine().time_until_tick(), Some(Duration::from_millis(2000)));

        carousel.set_interval(Duration::from_millis(8000));
        assert_eq!(carousel.engine().time_until_tick(), Some(Duration::from_millis(8000)));
        assert_eq!(carousel.config().interval, Duration::from_millis(8000));
    }

    #[test]
    fn too_short_interval_is_stored_clamped() {
        let (mut carousel, _page) = carousel(3, Variant::News);
        carousel.set_interval(Duration::ZERO);
        assert_eq!(carousel.engine().interval(), MIN_AUTOPLAY_INTERVAL);
        assert_eq!(carousel.config().interval, MIN_AUTOPLAY_INTERVAL);
    }

    #[test]
    fn empty_carousel_shows_nothing() {
        let (mut carousel, _page) = carousel(0, Variant::News);
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel.open_current(), Err(CarouselError::OutOfRange { index: 0, len: 0 }));
        assert_eq!(carousel.snapshot().index, None);
    }
}
