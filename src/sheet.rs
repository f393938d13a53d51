use datepick::{DateRange, PageView, SelectionEvent, Unit};
use std::fmt;

static WEEKDAY_HEADER: &str = " Su   Mo   Tu   We   Th   Fr   Sa";

/// Plain-text rendering of a page: active cells in brackets, disabled cells
/// in parentheses, and `<`/`>` beside the title for each reachable
/// neighboring page
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Sheet<'a>(pub(crate) &'a PageView);

impl Sheet<'_> {
    fn cell(&self, index: usize, label: &str, width: usize) -> String {
        if self.0.is_active(index) {
            format!("[{label:>width$}]")
        } else if self.0.is_disabled(index) {
            format!("({label:>width$})")
        } else {
            format!(" {label:>width$} ")
        }
    }
}

impl fmt::Display for Sheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let prev = if view.has_prev_page { '<' } else { ' ' };
        let next = if view.has_next_page { '>' } else { ' ' };
        writeln!(f, "{prev} {} {next}", view.title)?;
        if view.kind.layout().unit == Unit::Day {
            writeln!(f, "{WEEKDAY_HEADER}")?;
        }
        let width = view.labels.iter().map(String::len).max().unwrap_or(0);
        let cells = view
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| self.cell(i, label, width))
            .collect::<Vec<_>>();
        for row in cells.chunks(view.columns.max(1)) {
            writeln!(f, "{}", row.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// Describe a selection change for the terminal
pub(crate) fn describe(event: &SelectionEvent) -> String {
    match event {
        SelectionEvent::Day(date) => format!("day: {date}"),
        SelectionEvent::Month { year, month } => format!("month: {month} {year}"),
        SelectionEvent::Year(year) => format!("year: {year}"),
        SelectionEvent::Range(DateRange {
            start: Some(start),
            end: Some(end),
        }) => format!("range: {start} .. {end}"),
        SelectionEvent::Range(DateRange {
            start: Some(start),
            end: None,
        }) => format!("range: {start} .. (pending)"),
        SelectionEvent::Range(_) => String::from("range: (cleared)"),
    }
}
