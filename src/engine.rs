/// Cursor over a fixed-length sequence, shared by the slideshow engine and
/// the modal viewer so the presentation layer can drive either one the same
/// way.
pub trait Navigate {
    fn len(&self) -> usize;

    /// `None` when there is nothing to show.
    fn position(&self) -> Option<usize>;

    fn advance(&mut self);
    fn retreat(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arrows and indicators only make sense with something to move to.
    fn has_controls(&self) -> bool {
        self.len() > 1
    }

    /// One-based "k / N" label.
    fn counter(&self) -> Option<String> {
        self.position().map(|i| format!("{} / {}", i + 1, self.len()))
    }
}
