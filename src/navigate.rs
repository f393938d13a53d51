use crate::bounds::Bounds;
use crate::dates::{first_of_month, shift_months, shift_years};
use crate::error::OutOfTimeError;
use crate::kind::{Cutoff, PageSpan, PickerKind, Unit};
use crate::page::Page;
use std::fmt;
use time::Date;

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Forwards,
    Backwards,
}

impl Direction {
    fn sign(self) -> i32 {
        match self {
            Direction::Forwards => 1,
            Direction::Backwards => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forwards => write!(f, "next"),
            Direction::Backwards => write!(f, "previous"),
        }
    }
}

/// Move `anchor` by one page: one month for day kinds, one year for the month
/// kind, twelve years for the year kind.  The day of the month is kept where
/// the target month has it.
pub fn shift(anchor: Date, kind: PickerKind, direction: Direction) -> Result<Date, OutOfTimeError> {
    let shifted = match kind.layout().page_span {
        PageSpan::Months(n) => shift_months(anchor, n * direction.sign()),
        PageSpan::Years(n) => shift_years(anchor, n * direction.sign()),
    };
    log::debug!(
        target: "datepick::navigate",
        "shifting {kind} page from {anchor} to {direction} page: {shifted:?}"
    );
    shifted
}

pub fn advance(anchor: Date, kind: PickerKind) -> Result<Date, OutOfTimeError> {
    shift(anchor, kind, Direction::Forwards)
}

pub fn retreat(anchor: Date, kind: PickerKind) -> Result<Date, OutOfTimeError> {
    shift(anchor, kind, Direction::Backwards)
}

pub fn can_advance(anchor: Date, bounds: &Bounds, kind: PickerKind) -> bool {
    can_shift(anchor, bounds, kind, Direction::Forwards)
}

pub fn can_retreat(anchor: Date, bounds: &Bounds, kind: PickerKind) -> bool {
    can_shift(anchor, bounds, kind, Direction::Backwards)
}

/// Whether the page next to the one containing `anchor` has anything to
/// offer.
///
/// Day pages cut off exactly at the month boundary: the next page is
/// reachable iff `max` is not before its first day, and the previous page iff
/// `min` is not after its last day.  Month and year pages are reachable unless
/// every one of their cells is blocked, either by the bound in the direction
/// of travel or by the disable list.
pub fn can_shift(anchor: Date, bounds: &Bounds, kind: PickerKind, direction: Direction) -> bool {
    let available = match kind.layout().cutoff {
        Cutoff::MonthBoundary => month_boundary_open(anchor, bounds, kind, direction),
        Cutoff::AllBlocked => any_cell_open(anchor, bounds, kind, direction),
    };
    if !available {
        log::debug!(
            target: "datepick::navigate",
            "{direction} {kind} page from {anchor} is unavailable"
        );
    }
    available
}

fn month_boundary_open(
    anchor: Date,
    bounds: &Bounds,
    kind: PickerKind,
    direction: Direction,
) -> bool {
    let first = first_of_month(anchor);
    match direction {
        Direction::Forwards => shift(first, kind, direction)
            .is_ok_and(|next_first| !bounds.after_max(next_first, Unit::Day)),
        Direction::Backwards => first
            .previous_day()
            .is_some_and(|prev_last| !bounds.before_min(prev_last, Unit::Day)),
    }
}

fn any_cell_open(anchor: Date, bounds: &Bounds, kind: PickerKind, direction: Direction) -> bool {
    let Ok(page) = shift(anchor, kind, direction).and_then(|d| Page::build(d, kind)) else {
        return false;
    };
    let unit = kind.layout().unit;
    page.cells().iter().any(|&d| {
        let out_of_bounds = match direction {
            Direction::Forwards => bounds.after_max(d, unit),
            Direction::Backwards => bounds.before_min(d, unit),
        };
        !out_of_bounds && !bounds.is_listed(d, unit)
    })
}
