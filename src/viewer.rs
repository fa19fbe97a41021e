//! Full-screen modal viewer.
//!
//! Opening captures the page scroll policy and installs the keyboard
//! bindings; closing restores the policy and removes the bindings. Dropping
//! an open viewer does the same teardown.

use tracing::debug;

use crate::engine::Navigate;
use crate::error::CarouselError;
use crate::ring;
use crate::scroll::ScrollHost;
use crate::state::ViewerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Close,
    Advance,
    Retreat,
}

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Area around the media; closes the viewer.
    Backdrop,
    /// The media itself or its caption; never closes.
    Content,
    CloseButton,
    PrevButton,
    NextButton,
}

impl ClickTarget {
    pub fn action(self) -> Option<ViewerAction> {
        match self {
            ClickTarget::Backdrop | ClickTarget::CloseButton => Some(ViewerAction::Close),
            ClickTarget::PrevButton => Some(ViewerAction::Retreat),
            ClickTarget::NextButton => Some(ViewerAction::Advance),
            ClickTarget::Content => None,
        }
    }
}

/// Key table that exists only while the viewer is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    table: [(Key, ViewerAction); 3],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            table: [
                (Key::Escape, ViewerAction::Close),
                (Key::ArrowRight, ViewerAction::Advance),
                (Key::ArrowLeft, ViewerAction::Retreat),
            ],
        }
    }
}

impl KeyBindings {
    pub fn lookup(&self, key: Key) -> Option<ViewerAction> {
        self.table
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| *action)
    }
}

#[derive(Debug)]
pub struct ModalViewer<H: ScrollHost> {
    len: usize,
    host: H,
    state: ViewerState,
    saved_policy: Option<H::Policy>,
    bindings: Option<KeyBindings>,
}

impl<H: ScrollHost> ModalViewer<H> {
    pub fn new(len: usize, host: H) -> Self {
        Self {
            len,
            host,
            state: ViewerState::Closed,
            saved_policy: None,
            bindings: None,
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn index(&self) -> Option<usize> {
        self.state.index()
    }

    pub fn bindings(&self) -> Option<&KeyBindings> {
        self.bindings.as_ref()
    }

    // --- Open / Close ---

    /// Opens at `at`. Opening an already open viewer only moves it.
    pub fn open(&mut self, at: usize) -> Result<(), CarouselError> {
        let index = ring::checked_goto(at, self.len)?;
        if !self.state.is_open() {
            // Capture once; re-targeting while open keeps the first saved policy.
            self.saved_policy = Some(self.host.suppress());
            self.bindings = Some(KeyBindings::default());
            debug!(index, saved = ?self.saved_policy, "viewer opened");
        }
        self.state = ViewerState::Open { index };
        Ok(())
    }

    /// Returns false if the viewer was already closed.
    pub fn close(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        // Unbind before restoring, so no key reaches a closed viewer.
        self.bindings = None;
        if let Some(saved) = self.saved_policy.take() {
            debug!(?saved, "viewer closed, scroll policy restored");
            self.host.restore(saved);
        }
        self.state = ViewerState::Closed;
        true
    }

    // --- Input ---

    /// Resolves a key press through the installed bindings, if any.
    pub fn binding_for(&self, key: Key) -> Option<ViewerAction> {
        self.bindings.as_ref()?.lookup(key)
    }

    pub fn click_action(&self, target: ClickTarget) -> Option<ViewerAction> {
        if !self.state.is_open() {
            return None;
        }
        target.action()
    }

    pub fn apply(&mut self, action: ViewerAction) {
        match action {
            ViewerAction::Close => {
                self.close();
            }
            ViewerAction::Advance => self.advance(),
            ViewerAction::Retreat => self.retreat(),
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Option<ViewerAction> {
        let action = self.binding_for(key)?;
        self.apply(action);
        Some(action)
    }

    pub fn handle_click(&mut self, target: ClickTarget) -> Option<ViewerAction> {
        let action = self.click_action(target)?;
        self.apply(action);
        Some(action)
    }

    /// Points the viewer at a new sequence length, closing it first.
    pub fn reset(&mut self, len: usize) {
        self.close();
        self.len = len;
    }

    fn step(&mut self, step: fn(usize, usize) -> usize) {
        if let ViewerState::Open { index } = self.state {
            self.state = ViewerState::Open {
                index: step(index, self.len),
            };
        }
    }
}

impl<H: ScrollHost> Navigate for ModalViewer<H> {
    fn len(&self) -> usize {
        self.len
    }

    fn position(&self) -> Option<usize> {
        self.state.index()
    }

    fn advance(&mut self) {
        self.step(ring::next);
    }

    fn retreat(&mut self) {
        self.step(ring::prev);
    }
}

impl<H: ScrollHost> Drop for ModalViewer<H> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{Overflow, SharedPage};
    use test_case::test_case;

    fn viewer(len: usize) -> (ModalViewer<SharedPage>, SharedPage) {
        let page = SharedPage::new(Overflow::Scroll);
        (ModalViewer::new(len, page.clone()), page)
    }

    #[test]
    fn open_close_cycle() {
        let (mut viewer, page) = viewer(3);
        pretty_assertions::assert_eq!(viewer.state(), ViewerState::Closed);
        viewer.open(1).unwrap();
        pretty_assertions::assert_eq!(viewer.state(), ViewerState::Open { index: 1 });
        pretty_assertions::assert_eq!(page.overflow(), Overflow::Hidden);
        assert!(viewer.close());
        pretty_assertions::assert_eq!(viewer.state(), ViewerState::Closed);
        pretty_assertions::assert_eq!(page.overflow(), Overflow::Scroll);
    }

    #[test]
    fn restores_exactly_what_was_captured() {
        for before in [Overflow::Auto, Overflow::Scroll, Overflow::Visible, Overflow::Hidden] {
            let page = SharedPage::new(before);
            let mut viewer = ModalViewer::new(2, page.clone());
            viewer.open(0).unwrap();
            viewer.close();
            pretty_assertions::assert_eq!(page.overflow(), before);
        }
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let (mut viewer, page) = viewer(3);
        page.set_overflow(Overflow::Visible);
        assert!(!viewer.close());
        pretty_assertions::assert_eq!(page.overflow(), Overflow::Visible);
    }

    #[test]
    fn reopening_does_not_recapture() {
        let (mut viewer, page) = viewer(3);
        viewer.open(0).unwrap();
        viewer.open(2).unwrap();
        pretty_assertions::assert_eq!(viewer.index(), Some(2));
        viewer.close();
        pretty_assertions::assert_eq!(page.overflow(), Overflow::Scroll);
    }

    #[test]
    fn reopening_does_not_double_bind() {
        let (mut viewer, _page) = viewer(5);
        viewer.open(0).unwrap();
        viewer.open(0).unwrap();
        viewer.handle_key(Key::ArrowRight);
        pretty_assertions::assert_eq!(viewer.index(), Some(1));
    }

    #[test_case(3, 3)]
    #[test_case(0, 0 ; "empty sequence")]
    fn open_out_of_range_changes_nothing(len: usize, at: usize) {
        let (mut viewer, page) = viewer(len);
        pretty_assertions::assert_eq!(viewer.open(at), Err(CarouselError::OutOfRange { index: at, len }));
        assert!(!viewer.is_open());
        pretty_assertions::assert_eq!(viewer.bindings(), None);
        pretty_assertions::assert_eq!(page.overflow(), Overflow::Scroll);
    }

    #[test]
    fn keys_navigate_and_close() {
        let (mut viewer, _page) = viewer(3);
        viewer.open(0).unwrap();
        pretty_assertions::assert_eq!(viewer.handle_key(Key::ArrowLeft), Some(ViewerAction::Retreat));
        pretty_assertions::assert_eq!(viewer.index(), Some(2));
        pretty_assertions::assert_eq!(viewer.handle_key(Key::ArrowRight), Some(ViewerAction::Advance));
        pretty_assertions::assert_eq!(viewer.index(), Some(0));
        pretty_assertions::assert_eq!(viewer.handle_key(Key::Other), None);
        pretty_assertions::assert_eq!(viewer.handle_key(Key::Escape), Some(ViewerAction::Close));
        assert!(!viewer.is_open());
    }

    #[test]
    fn keys_are_inert_before_open_and_after_close() {
        let (mut viewer, _page) = viewer(3);
        pretty_assertions::assert_eq!(viewer.handle_key(Key::ArrowRight), None);
        viewer.open(1).unwrap();
        viewer.close();
        pretty_assertions::assert_eq!(viewer.bindings(), None);
        pretty_assertions::assert_eq!(viewer.handle_key(Key::ArrowRight), None);
        pretty_assertions::assert_eq!(viewer.handle_key(Key::Escape), None);
        pretty_assertions::assert_eq!(viewer.index(), None);
    }

    #[test_case(ClickTarget::Backdrop => (false, None) ; "backdrop closes")]
    #[test_case(ClickTarget::CloseButton => (false, None) ; "close button closes")]
    #[test_case(ClickTarget::Content => (true, Some(1)) ; "content is inert")]
    #[test_case(ClickTarget::NextButton => (true, Some(2)) ; "next stays open")]
    #[test_case(ClickTarget::PrevButton => (true, Some(0)) ; "prev stays open")]
    fn clicks(target: ClickTarget) -> (bool, Option<usize>) {
        let (mut viewer, _page) = viewer(3);
        viewer.open(1).unwrap();
        viewer.handle_click(target);
        (viewer.is_open(), viewer.index())
    }

    #[test]
    fn clicks_are_ignored_while_closed() {
        let (mut viewer, _page) = viewer(3);
        pretty_assertions::assert_eq!(viewer.handle_click(ClickTarget::Backdrop), None);
    }

    #[test]
    fn single_item_never_moves() {
        let (mut viewer, _page) = viewer(1);
        viewer.open(0).unwrap();
        viewer.advance();
        viewer.retreat();
        pretty_assertions::assert_eq!(viewer.index(), Some(0));
        assert!(!viewer.has_controls());
    }

    #[test]
    fn drop_while_open_restores_the_page() {
        let (mut viewer, page) = viewer(3);
        viewer.open(0).unwrap();
        drop(viewer);
        pretty_assertions::assert_eq!(page.overflow(), Overflow::Scroll);
    }

    #[test]
    fn counter_is_one_based() {
        let (mut viewer, _page) = viewer(4);
        pretty_assertions::assert_eq!(viewer.counter(), None);
        viewer.open(3).unwrap();
        pretty_assertions::assert_eq!(viewer.counter().as_deref(), Some("4 / 4"));
    }

    #[test]
    fn works_without_a_page() {
        let mut viewer = ModalViewer::new(2, ());
        viewer.open(1).unwrap();
        viewer.advance();
        pretty_assertions::assert_eq!(viewer.index(), Some(0));
        assert!(viewer.close());
    }
}
