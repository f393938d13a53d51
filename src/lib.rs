//! Calendar grid arithmetic and selection logic for date pickers.
//!
//! Four kinds of picker ([`PickerKind`]) share one engine:
//!
//! - [`Page::build`] lays out the cells of the page containing an anchor
//!   date: six weeks of days, the twelve months of a year, or twelve years.
//! - [`disabled_indices`] and [`active_indices`] work out which cells cannot
//!   be picked and which show the current [`Selection`].
//! - [`can_advance`]/[`can_retreat`] decide whether the neighboring pages
//!   are reachable under the given [`Bounds`], and [`advance`]/[`retreat`]
//!   move the anchor there.
//! - [`reduce`] turns a click on a cell into a [`SelectionEvent`].
//!
//! [`Picker`] ties these together as a controlled component: it owns only the
//! anchor date, takes bounds and selection as [`Props`] on every cycle, and
//! hands selection changes to a [`ChangeHandler`].
//!
//! Rendering is left to the caller.
mod active;
mod bounds;
mod dates;
mod disabled;
mod error;
mod kind;
mod navigate;
mod page;
mod picker;
mod selection;
pub use crate::active::{active_indices, ActiveCells};
pub use crate::bounds::Bounds;
pub use crate::dates::parse_date;
pub use crate::disabled::disabled_indices;
pub use crate::error::{NavigationError, OutOfTimeError, PickerError};
pub use crate::kind::{Cutoff, Layout, PageSpan, ParseKindError, PickerKind, Unit};
pub use crate::navigate::{advance, can_advance, can_retreat, can_shift, retreat, shift, Direction};
pub use crate::page::{build_grid, Page};
pub use crate::picker::{today, CellClick, ChangeHandler, PageView, Picker, Props, Trigger};
pub use crate::selection::{reduce, DateRange, Selection, SelectionEvent};
