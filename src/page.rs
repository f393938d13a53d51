use crate::dates::{
    first_of_month, first_of_year, iter_days_from, n_days_before, shift_months, truncate,
    WeekdayExt,
};
use crate::error::{OutOfTimeError, PickerError};
use crate::kind::{PickerKind, Unit};
use time::{Date, Month};

/// One page of cells for an anchor date, with each cell resolved to the
/// absolute date it stands for.
///
/// Day cells hold their own date; month cells hold the first of their month;
/// year cells hold January 1 of their year.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Page {
    kind: PickerKind,
    anchor: Date,
    cells: Vec<Date>,
}

impl Page {
    /// Lay out the page containing `anchor`:
    ///
    /// - day kinds: the anchor's month, preceded by the tail of the previous
    ///   month back to the nearest Sunday and followed by the start of the
    ///   next month up to six full weeks;
    /// - month kind: January through December of the anchor's year;
    /// - year kind: twelve consecutive years starting at the anchor's year
    ///   (not aligned to any multiple of twelve).
    pub fn build(anchor: Date, kind: PickerKind) -> Result<Page, OutOfTimeError> {
        let len = kind.layout().cells;
        let cells = match kind.layout().unit {
            Unit::Day => {
                let first = first_of_month(anchor);
                let start = n_days_before(first, first.weekday().index0())?;
                let cells = iter_days_from(start).take(len).collect::<Vec<_>>();
                if cells.len() < len {
                    return Err(OutOfTimeError);
                }
                cells
            }
            Unit::Month => {
                let january = first_of_year(anchor.year())?;
                (0..len)
                    .map(|i| {
                        let i = i32::try_from(i).map_err(|_| OutOfTimeError)?;
                        shift_months(january, i)
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
            Unit::Year => (0..len)
                .map(|i| {
                    i32::try_from(i)
                        .ok()
                        .and_then(|i| anchor.year().checked_add(i))
                        .ok_or(OutOfTimeError)
                        .and_then(first_of_year)
                })
                .collect::<Result<Vec<_>, _>>()?,
        };
        log::trace!(
            target: "datepick::page",
            "built {kind} page for {anchor}: {:?} .. {:?}",
            cells.first(),
            cells.last()
        );
        Ok(Page {
            kind,
            anchor,
            cells,
        })
    }

    pub fn kind(&self) -> PickerKind {
        self.kind
    }

    pub fn anchor(&self) -> Date {
        self.anchor
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The absolute date of every cell, in row-major order
    pub fn cells(&self) -> &[Date] {
        &self.cells
    }

    pub fn labels(&self) -> Vec<String> {
        self.cells.iter().map(|&d| self.label_for(d)).collect()
    }

    pub fn label(&self, index: usize) -> Result<String, PickerError> {
        self.date_at(index).map(|d| self.label_for(d))
    }

    fn label_for(&self, date: Date) -> String {
        match self.kind.layout().unit {
            Unit::Day => date.day().to_string(),
            Unit::Month => month_abbrev(date.month()).to_owned(),
            Unit::Year => date.year().to_string(),
        }
    }

    /// Resolve a page-relative cell index to the date it stands for
    pub fn date_at(&self, index: usize) -> Result<Date, PickerError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(PickerError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    /// Find the cell standing for the unit that contains `date`
    pub fn index_of(&self, date: Date) -> Option<usize> {
        let date = truncate(date, self.kind.layout().unit);
        self.cells.iter().position(|&d| d == date)
    }

    /// Whether the cell at `index` belongs to the anchor's own month rather
    /// than to the padding from a neighboring month.  Always `true` for the
    /// month and year kinds.
    pub fn is_own_cell(&self, index: usize) -> bool {
        match (self.kind.layout().unit, self.cells.get(index)) {
            (_, None) => false,
            (Unit::Day, Some(d)) => first_of_month(*d) == first_of_month(self.anchor),
            (Unit::Month | Unit::Year, Some(_)) => true,
        }
    }

    /// Human-readable name of the page, e.g. "August 2018"
    pub fn title(&self) -> String {
        match self.kind.layout().unit {
            Unit::Day => format!("{} {}", self.anchor.month(), self.anchor.year()),
            Unit::Month => self.anchor.year().to_string(),
            Unit::Year => match (self.cells.first(), self.cells.last()) {
                (Some(first), Some(last)) => format!("{} - {}", first.year(), last.year()),
                _ => String::new(),
            },
        }
    }
}

/// The cell labels of the page containing `anchor`
pub fn build_grid(anchor: Date, kind: PickerKind) -> Result<Vec<String>, OutOfTimeError> {
    Page::build(anchor, kind).map(|page| page.labels())
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_day_grid() {
        let labels = build_grid(date!(2018 - 08 - 12), PickerKind::Day).unwrap();
        let expected = [
            "29", "30", "31", "1", "2", "3", "4", //
            "5", "6", "7", "8", "9", "10", "11", //
            "12", "13", "14", "15", "16", "17", "18", //
            "19", "20", "21", "22", "23", "24", "25", //
            "26", "27", "28", "29", "30", "31", "1", //
            "2", "3", "4", "5", "6", "7", "8",
        ];
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_range_grid_matches_day_grid() {
        let anchor = date!(2018 - 08 - 12);
        assert_eq!(
            build_grid(anchor, PickerKind::DateRange).unwrap(),
            build_grid(anchor, PickerKind::Day).unwrap()
        );
    }

    #[test]
    fn test_day_grid_month_starting_on_sunday() {
        // July 2018 starts on a Sunday, so there is no leading padding.
        let page = Page::build(date!(2018 - 07 - 20), PickerKind::Day).unwrap();
        assert_eq!(page.cells()[0], date!(2018 - 07 - 01));
        assert_eq!(page.cells()[41], date!(2018 - 08 - 11));
    }

    #[test]
    fn test_day_grid_always_42_cells() {
        let mut anchor = date!(2015 - 01 - 01);
        for _ in 0..60 {
            let page = Page::build(anchor, PickerKind::Day).unwrap();
            assert_eq!(page.len(), 42);
            assert!(page.is_own_cell(page.index_of(anchor).unwrap()));
            anchor = shift_months(anchor, 1).unwrap();
        }
    }

    #[test]
    fn test_year_grid() {
        let labels = build_grid(date!(2015 - 05 - 01), PickerKind::Year).unwrap();
        let expected = (2015..=2026).map(|y| y.to_string()).collect::<Vec<_>>();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_month_grid() {
        let page = Page::build(date!(2018 - 08 - 12), PickerKind::Month).unwrap();
        assert_eq!(
            page.labels(),
            [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"
            ]
        );
        assert_eq!(page.cells()[7], date!(2018 - 08 - 01));
    }

    #[test]
    fn test_index_roundtrip() {
        for kind in PickerKind::ALL {
            let page = Page::build(date!(2018 - 08 - 12), kind).unwrap();
            for i in 0..page.len() {
                let d = page.date_at(i).unwrap();
                assert_eq!(page.index_of(d), Some(i), "{kind} cell {i}");
            }
        }
    }

    #[test]
    fn test_index_of_truncates() {
        let page = Page::build(date!(2015 - 05 - 01), PickerKind::Year).unwrap();
        assert_eq!(page.index_of(date!(2016 - 07 - 04)), Some(1));
        assert_eq!(page.index_of(date!(2027 - 01 - 01)), None);
        let page = Page::build(date!(2018 - 08 - 12), PickerKind::Month).unwrap();
        assert_eq!(page.index_of(date!(2018 - 03 - 17)), Some(2));
        assert_eq!(page.index_of(date!(2019 - 03 - 17)), None);
    }

    #[test]
    fn test_date_at_out_of_range() {
        let page = Page::build(date!(2018 - 08 - 12), PickerKind::Day).unwrap();
        assert!(matches!(
            page.date_at(42),
            Err(PickerError::IndexOutOfRange { index: 42, len: 42 })
        ));
        assert!(page.label(42).is_err());
        assert_eq!(page.label(41).unwrap(), "8");
    }

    #[test]
    fn test_own_cells() {
        let page = Page::build(date!(2018 - 08 - 12), PickerKind::Day).unwrap();
        let own = (0..42).filter(|&i| page.is_own_cell(i)).collect::<Vec<_>>();
        assert_eq!(own, (3..34).collect::<Vec<_>>());
        assert!(!page.is_own_cell(42));
    }

    #[test]
    fn test_titles() {
        let anchor = date!(2018 - 08 - 12);
        let title = |kind| Page::build(anchor, kind).unwrap().title();
        assert_eq!(title(PickerKind::Day), "August 2018");
        assert_eq!(title(PickerKind::DateRange), "August 2018");
        assert_eq!(title(PickerKind::Month), "2018");
        assert_eq!(title(PickerKind::Year), "2018 - 2029");
    }

    #[test]
    fn test_end_of_time() {
        assert_eq!(
            Page::build(Date::MAX, PickerKind::Day),
            Err(OutOfTimeError)
        );
        assert_eq!(
            Page::build(Date::MAX, PickerKind::Year),
            Err(OutOfTimeError)
        );
        assert!(Page::build(Date::MAX, PickerKind::Month).is_ok());
    }
}
