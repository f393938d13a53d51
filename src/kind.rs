use std::fmt;

/// The four interchangeable pickers.  They share one grid engine and differ
/// only in the [`Layout`] each of them selects.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PickerKind {
    /// A single day, picked from a six-week month page
    Day,
    /// A start/end pair of days, picked from a six-week month page
    DateRange,
    /// A single month, picked from the twelve months of a year
    Month,
    /// A single year, picked from a twelve-year page
    Year,
}

impl PickerKind {
    pub const ALL: [PickerKind; 4] = [
        PickerKind::Day,
        PickerKind::DateRange,
        PickerKind::Month,
        PickerKind::Year,
    ];

    pub fn layout(self) -> Layout {
        match self {
            // Six weeks of seven days
            PickerKind::Day | PickerKind::DateRange => Layout {
                cells: 42,
                columns: 7,
                unit: Unit::Day,
                page_span: PageSpan::Months(1),
                cutoff: Cutoff::MonthBoundary,
            },
            PickerKind::Month => Layout {
                cells: 12,
                columns: 3,
                unit: Unit::Month,
                page_span: PageSpan::Years(1),
                cutoff: Cutoff::AllBlocked,
            },
            PickerKind::Year => Layout {
                cells: 12,
                columns: 3,
                unit: Unit::Year,
                // A year page moves by its own width
                page_span: PageSpan::Years(12),
                cutoff: Cutoff::AllBlocked,
            },
        }
    }

    pub fn is_range(self) -> bool {
        self == PickerKind::DateRange
    }

    pub fn name(self) -> &'static str {
        match self {
            PickerKind::Day => "day",
            PickerKind::DateRange => "range",
            PickerKind::Month => "month",
            PickerKind::Year => "year",
        }
    }
}

impl fmt::Display for PickerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PickerKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<PickerKind, ParseKindError> {
        PickerKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or(ParseKindError)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid picker kind; expected one of: day, range, month, year")]
pub struct ParseKindError;

/// The kind-specific strategy record driving the shared grid engine
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Layout {
    /// Number of cells on every page; never varies from page to page
    pub cells: usize,
    /// Number of cells per row when the page is laid out as a table
    pub columns: usize,
    /// What a single cell stands for
    pub unit: Unit,
    /// How far the anchor moves on a page shift
    pub page_span: PageSpan,
    /// When paging towards a bound is refused
    pub cutoff: Cutoff,
}

/// Granularity at which cells are compared to bounds and selections
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Unit {
    Day,
    Month,
    Year,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PageSpan {
    Months(i32),
    Years(i32),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cutoff {
    /// Paging forwards is refused once `maxDate` lies before the first day of
    /// the next page (backwards: `minDate` after the last day of the previous
    /// page).  The explicit disable list is not consulted.
    MonthBoundary,
    /// Paging is refused only when every cell of the target page is blocked
    /// by the bound in that direction or by the explicit disable list.
    AllBlocked,
}
