use crate::kind::PickerKind;
use crate::navigate::Direction;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("invalid date {input:?}; expected YYYY-MM-DD")]
    ParseDate {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("cell index {index} is outside of a {len}-cell page")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cell {index} is labelled {actual:?}, but the click said {claimed:?}")]
    LabelMismatch {
        index: usize,
        actual: String,
        claimed: String,
    },
    #[error("selection does not fit a {kind} picker")]
    SelectionMismatch { kind: PickerKind },
    #[error(transparent)]
    OutOfTime(#[from] OutOfTimeError),
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;

/// Reasons a page shift can be refused
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum NavigationError {
    #[error("the {0} page is out of bounds")]
    Unavailable(Direction),
    #[error(transparent)]
    OutOfTime(#[from] OutOfTimeError),
}
