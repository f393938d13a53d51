use crate::error::PickerError;
use crate::kind::{PickerKind, Unit};
use crate::page::Page;
use time::{Date, Month};

/// The selection currently held by whoever owns the picker's value.  The
/// picker itself never stores it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Selection {
    /// Value of a day, month, or year picker.  Month and year values may be
    /// any date within the selected month or year.
    Single(Option<Date>),
    Range(DateRange),
}

impl Selection {
    /// An empty selection of the shape that `kind` expects
    pub fn none(kind: PickerKind) -> Selection {
        if kind.is_range() {
            Selection::Range(DateRange::EMPTY)
        } else {
            Selection::Single(None)
        }
    }
}

/// A possibly partial range of days.  When both ends are set, `start <= end`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateRange {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl DateRange {
    pub const EMPTY: DateRange = DateRange {
        start: None,
        end: None,
    };

    pub fn starting(start: Date) -> DateRange {
        DateRange {
            start: Some(start),
            end: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Start chosen, end still to come
    pub fn is_pending(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// The new value produced by a click, handed to the change handler
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SelectionEvent {
    Day(Date),
    Month { year: i32, month: Month },
    Year(i32),
    Range(DateRange),
}

/// Interpret a click on cell `index` of `page` as a change of `selection`.
///
/// Single-value pickers simply replace their value with the clicked unit.
/// Range pickers step through three states:
///
/// - empty: the click starts a new range;
/// - start only: a click on or after the start completes the range, while a
///   click before it clears the range (the ends are not swapped);
/// - complete: the click clears the range.  It does not also start the next
///   one.
pub fn reduce(
    page: &Page,
    selection: &Selection,
    index: usize,
) -> Result<SelectionEvent, PickerError> {
    let kind = page.kind();
    let clicked = page.date_at(index)?;
    let event = match (kind.layout().unit, selection) {
        (Unit::Day, Selection::Range(range)) if kind.is_range() => {
            SelectionEvent::Range(extend_range(*range, clicked))
        }
        (Unit::Day, Selection::Single(_)) if !kind.is_range() => SelectionEvent::Day(clicked),
        (Unit::Month, Selection::Single(_)) => SelectionEvent::Month {
            year: clicked.year(),
            month: clicked.month(),
        },
        (Unit::Year, Selection::Single(_)) => SelectionEvent::Year(clicked.year()),
        _ => return Err(PickerError::SelectionMismatch { kind }),
    };
    log::trace!(
        target: "datepick::selection",
        "click on {kind} cell {index} ({clicked}) with {selection:?} => {event:?}"
    );
    Ok(event)
}

fn extend_range(range: DateRange, clicked: Date) -> DateRange {
    match (range.start, range.end) {
        (None, None) => DateRange::starting(clicked),
        (Some(start), None) if clicked < start => DateRange::EMPTY,
        (Some(start), None) => DateRange {
            start: Some(start),
            end: Some(clicked),
        },
        (_, Some(_)) => DateRange::EMPTY,
    }
}
