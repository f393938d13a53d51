use crate::error::PickerError;
use crate::page::Page;
use crate::selection::{DateRange, Selection};
use time::Date;

/// Which cells of a page show the current selection
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ActiveCells {
    Single(Option<usize>),
    Range {
        start: Option<usize>,
        end: Option<usize>,
    },
}

/// Locate the selection on `page`.  Each boundary of a range is located
/// independently, so one end may be on the page while the other is not.
pub fn active_indices(page: &Page, selection: &Selection) -> Result<ActiveCells, PickerError> {
    let kind = page.kind();
    match (kind.is_range(), selection) {
        (false, Selection::Single(value)) => {
            Ok(ActiveCells::Single(value.and_then(|d| locate(page, d))))
        }
        (true, Selection::Range(DateRange { start, end })) => Ok(ActiveCells::Range {
            start: start.and_then(|d| locate(page, d)),
            end: end.and_then(|d| locate(page, d)),
        }),
        _ => Err(PickerError::SelectionMismatch { kind }),
    }
}

// Dates shown as padding from a neighboring month are not reported, as they
// cannot be picked from this page.
fn locate(page: &Page, date: Date) -> Option<usize> {
    page.index_of(date).filter(|&i| page.is_own_cell(i))
}
