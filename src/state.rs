/// Slideshow position and autoplay flag.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cursor {
    pub index: usize,
    pub playing: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ViewerState {
    #[default]
    Closed,            // Initial, and terminal for every open/close cycle
    Open { index: usize },
}

impl ViewerState {
    pub fn is_open(self) -> bool {
        matches!(self, ViewerState::Open { .. })
    }

    pub fn index(self) -> Option<usize> {
        match self {
            ViewerState::Open { index } => Some(index),
            ViewerState::Closed => None,
        }
    }
}

/// Everything the presentation layer needs to re-render after an operation.
/// Compare two snapshots to decide whether anything changed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ViewState {
    /// Active slide, `None` for an empty sequence.
    pub index: Option<usize>,
    pub playing: bool,
    pub open: bool,
    pub viewer_index: Option<usize>,
    pub len: usize,
}
