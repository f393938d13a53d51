use crate::bounds::Bounds;
use crate::page::Page;
use std::collections::BTreeSet;

/// Indices of the cells of `page` that cannot be picked.
///
/// On day pages, the padding cells borrowed from the neighboring months are
/// always disabled.  Any cell whose unit lies before `bounds.min`, after
/// `bounds.max`, or on the disable list is disabled as well.
pub fn disabled_indices(page: &Page, bounds: &Bounds) -> BTreeSet<usize> {
    let unit = page.kind().layout().unit;
    page.cells()
        .iter()
        .enumerate()
        .filter(|&(i, &date)| !page.is_own_cell(i) || bounds.blocks(date, unit))
        .map(|(i, _)| i)
        .collect()
}
