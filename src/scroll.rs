//! Page-scroll suppression as an acquire/release capability.
//!
//! An overlay calls [`ScrollHost::suppress`] when it opens and keeps the
//! returned policy; on close it hands that exact value back to
//! [`ScrollHost::restore`]. Nested overlays therefore unwind to whatever the
//! page had before the outermost one opened.

use std::cell::RefCell;
use std::rc::Rc;

pub trait ScrollHost {
    type Policy: Clone + std::fmt::Debug;

    /// Applies a "no scroll" policy and returns the one it replaced.
    fn suppress(&mut self) -> Self::Policy;

    fn restore(&mut self, saved: Self::Policy);
}

/// For viewers that live without a scrollable page.
impl ScrollHost for () {
    type Policy = ();

    fn suppress(&mut self) -> Self::Policy {}

    fn restore(&mut self, _saved: ()) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Auto,
    Scroll,
    Visible,
    Hidden,
}

impl Overflow {
    pub fn allows_scroll(self) -> bool {
        !matches!(self, Overflow::Hidden)
    }
}

#[derive(Debug, Default)]
struct Page {
    overflow: Overflow,
    offset: f32,
}

/// The scrollable page behind the carousel. Clones share the same page, so
/// several overlays can hold it at once.
#[derive(Debug, Clone, Default)]
pub struct SharedPage(Rc<RefCell<Page>>);

impl SharedPage {
    pub fn new(overflow: Overflow) -> Self {
        Self(Rc::new(RefCell::new(Page {
            overflow,
            offset: 0.0,
        })))
    }

    pub fn overflow(&self) -> Overflow {
        self.0.borrow().overflow
    }

    pub fn set_overflow(&self, overflow: Overflow) {
        self.0.borrow_mut().overflow = overflow;
    }

    pub fn offset(&self) -> f32 {
        self.0.borrow().offset
    }

    /// Scrolls by `delta` pixels within `[0, max_offset]`, unless suppressed.
    /// Returns the resulting offset.
    pub fn scroll_by(&self, delta: f32, max_offset: f32) -> f32 {
        let mut page = self.0.borrow_mut();
        if page.overflow.allows_scroll() {
            page.offset = (page.offset + delta).clamp(0.0, max_offset.max(0.0));
        }
        page.offset
    }
}

impl ScrollHost for SharedPage {
    type Policy = Overflow;

    fn suppress(&mut self) -> Overflow {
        std::mem::replace(&mut self.0.borrow_mut().overflow, Overflow::Hidden)
    }

    fn restore(&mut self, saved: Overflow) {
        self.set_overflow(saved);
    }
}
