use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A direct jump or an `open` targeted a position outside `[0, len)`.
    #[error("index {index} is out of range for a sequence of {len} items")]
    OutOfRange { index: usize, len: usize },
}
