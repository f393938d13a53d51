use crate::active::{active_indices, ActiveCells};
use crate::bounds::Bounds;
use crate::dates::parse_date;
use crate::disabled::disabled_indices;
use crate::error::{NavigationError, OutOfTimeError, PickerError};
use crate::kind::PickerKind;
use crate::navigate::{can_shift, shift, Direction};
use crate::page::Page;
use crate::selection::{reduce, Selection, SelectionEvent};
use std::collections::{BTreeMap, BTreeSet};
use time::{Date, OffsetDateTime};

/// A date picker of one kind.
///
/// The picker owns nothing but the anchor date deciding which page is on
/// display.  Bounds and the current selection belong to the caller and are
/// passed in as [`Props`] on every render and click.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Picker {
    kind: PickerKind,
    anchor: Date,
}

impl Picker {
    pub fn new(kind: PickerKind, anchor: Date) -> Picker {
        Picker { kind, anchor }
    }

    /// Create a picker anchored at `initialize_with` (a `YYYY-MM-DD` date) or,
    /// if that is `None`, at the current date
    pub fn from_input(
        kind: PickerKind,
        initialize_with: Option<&str>,
    ) -> Result<Picker, PickerError> {
        let picker = Picker::new(kind, today());
        match initialize_with {
            Some(s) => Ok(picker.start_date(parse_date(s)?)),
            None => Ok(picker),
        }
    }

    pub fn start_date(mut self, date: Date) -> Self {
        self.anchor = date;
        self
    }

    pub fn kind(&self) -> PickerKind {
        self.kind
    }

    pub fn anchor(&self) -> Date {
        self.anchor
    }

    pub fn page(&self) -> Result<Page, OutOfTimeError> {
        Page::build(self.anchor, self.kind)
    }

    /// Everything needed to draw the current page
    pub fn view(&self, props: &Props) -> Result<PageView, PickerError> {
        let page = self.page()?;
        Ok(PageView {
            kind: self.kind,
            title: page.title(),
            labels: page.labels(),
            columns: self.kind.layout().columns,
            disabled: disabled_indices(&page, &props.bounds),
            active: active_indices(&page, &props.selection)?,
            has_prev_page: self.has_prev_page(&props.bounds),
            has_next_page: self.has_next_page(&props.bounds),
            extra: props.extra.clone(),
        })
    }

    pub fn has_next_page(&self, bounds: &Bounds) -> bool {
        can_shift(self.anchor, bounds, self.kind, Direction::Forwards)
    }

    pub fn has_prev_page(&self, bounds: &Bounds) -> bool {
        can_shift(self.anchor, bounds, self.kind, Direction::Backwards)
    }

    pub fn next_page(&mut self, bounds: &Bounds) -> Result<(), NavigationError> {
        self.turn_page(bounds, Direction::Forwards)
    }

    pub fn prev_page(&mut self, bounds: &Bounds) -> Result<(), NavigationError> {
        self.turn_page(bounds, Direction::Backwards)
    }

    /// Move to the adjacent page if it is available.  On error, the anchor is
    /// left unchanged.
    pub fn turn_page(
        &mut self,
        bounds: &Bounds,
        direction: Direction,
    ) -> Result<(), NavigationError> {
        if !can_shift(self.anchor, bounds, self.kind, direction) {
            return Err(NavigationError::Unavailable(direction));
        }
        self.anchor = shift(self.anchor, self.kind, direction)?;
        Ok(())
    }

    /// Handle a click on a cell of the current page, passing the resulting
    /// change to `handler`.
    ///
    /// Clicks on disabled cells are ignored.  Returns whether `handler` was
    /// called, which happens at most once per click.
    pub fn click<H: ChangeHandler>(
        &self,
        props: &Props,
        click: &CellClick,
        handler: &mut H,
    ) -> Result<bool, PickerError> {
        let page = self.page()?;
        let actual = page.label(click.index)?;
        if let Some(claimed) = click.label.as_ref().filter(|&lbl| *lbl != actual) {
            return Err(PickerError::LabelMismatch {
                index: click.index,
                actual,
                claimed: claimed.clone(),
            });
        }
        if disabled_indices(&page, &props.bounds).contains(&click.index) {
            log::debug!(
                target: "datepick::picker",
                "ignoring click on disabled {} cell {}",
                self.kind,
                click.index
            );
            return Ok(false);
        }
        let event = reduce(&page, &props.selection, click.index)?;
        handler.on_change(Trigger::Click, event);
        Ok(true)
    }
}

/// The current local date, or the current UTC date if the local offset
/// cannot be determined
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Inputs owned by the picker's caller, supplied afresh on every cycle
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Props {
    pub bounds: Bounds,
    pub selection: Selection,
    /// Properties the picker does not understand; handed to the view as is
    pub extra: BTreeMap<String, String>,
}

impl Props {
    pub fn new(kind: PickerKind) -> Props {
        Props {
            bounds: Bounds::new(),
            selection: Selection::none(kind),
            extra: BTreeMap::new(),
        }
    }

    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn extra<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// What the view needs to draw one page
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageView {
    pub kind: PickerKind,
    pub title: String,
    pub labels: Vec<String>,
    /// Cells per row
    pub columns: usize,
    pub disabled: BTreeSet<usize>,
    pub active: ActiveCells,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub extra: BTreeMap<String, String>,
}

impl PageView {
    pub fn is_active(&self, index: usize) -> bool {
        match self.active {
            ActiveCells::Single(i) => i == Some(index),
            ActiveCells::Range { start, end } => start == Some(index) || end == Some(index),
        }
    }

    pub fn is_disabled(&self, index: usize) -> bool {
        self.disabled.contains(&index)
    }
}

/// A click on a page cell as reported by the view.  The label, if given, must
/// match the cell's label.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CellClick {
    pub index: usize,
    pub label: Option<String>,
}

impl CellClick {
    pub fn new(index: usize) -> CellClick {
        CellClick { index, label: None }
    }

    pub fn labelled<S: Into<String>>(index: usize, label: S) -> CellClick {
        CellClick {
            index,
            label: Some(label.into()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Trigger {
    Click,
}

/// Receiver of selection changes
pub trait ChangeHandler {
    fn on_change(&mut self, trigger: Trigger, event: SelectionEvent);
}

impl<F: FnMut(Trigger, SelectionEvent)> ChangeHandler for F {
    fn on_change(&mut self, trigger: Trigger, event: SelectionEvent) {
        self(trigger, event);
    }
}
