use crate::dates::truncate;
use crate::kind::Unit;
use time::Date;

/// Constraints on which cells may be picked: an optional earliest date, an
/// optional latest date, and a list of explicitly disabled dates.
///
/// Bounds are compared at the granularity of the picker consulting them, so
/// a `max` of 2018-08-22 still permits the month of August 2018 in a month
/// picker and the year 2018 in a year picker.  Inconsistent bounds (`min`
/// after `max`) are not rejected; they simply block everything.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Bounds {
    pub min: Option<Date>,
    pub max: Option<Date>,
    pub disabled: Vec<Date>,
}

impl Bounds {
    pub fn new() -> Bounds {
        Bounds::default()
    }

    pub fn min(mut self, date: Date) -> Self {
        self.min = Some(date);
        self
    }

    pub fn max(mut self, date: Date) -> Self {
        self.max = Some(date);
        self
    }

    pub fn disable<I: IntoIterator<Item = Date>>(mut self, dates: I) -> Self {
        self.disabled.extend(dates);
        self
    }

    pub(crate) fn before_min(&self, date: Date, unit: Unit) -> bool {
        self.min
            .is_some_and(|min| truncate(date, unit) < truncate(min, unit))
    }

    pub(crate) fn after_max(&self, date: Date, unit: Unit) -> bool {
        self.max
            .is_some_and(|max| truncate(date, unit) > truncate(max, unit))
    }

    pub(crate) fn is_listed(&self, date: Date, unit: Unit) -> bool {
        let date = truncate(date, unit);
        self.disabled.iter().any(|&d| truncate(d, unit) == date)
    }

    /// Whether the unit containing `date` is outside `min`/`max` or on the
    /// disable list
    pub(crate) fn blocks(&self, date: Date, unit: Unit) -> bool {
        self.before_min(date, unit) || self.after_max(date, unit) || self.is_listed(date, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_unbounded() {
        let bounds = Bounds::new();
        assert!(!bounds.blocks(Date::MIN, Unit::Day));
        assert!(!bounds.blocks(Date::MAX, Unit::Year));
    }

    #[test]
    fn test_min_granularity() {
        let bounds = Bounds::new().min(date!(2018 - 08 - 04));
        assert!(bounds.blocks(date!(2018 - 08 - 03), Unit::Day));
        assert!(!bounds.blocks(date!(2018 - 08 - 04), Unit::Day));
        assert!(!bounds.blocks(date!(2018 - 08 - 01), Unit::Month));
        assert!(bounds.blocks(date!(2018 - 07 - 31), Unit::Month));
        assert!(!bounds.blocks(date!(2018 - 01 - 01), Unit::Year));
        assert!(bounds.blocks(date!(2017 - 12 - 31), Unit::Year));
    }

    #[test]
    fn test_max_granularity() {
        let bounds = Bounds::new().max(date!(2018 - 08 - 22));
        assert!(!bounds.blocks(date!(2018 - 08 - 22), Unit::Day));
        assert!(bounds.blocks(date!(2018 - 08 - 23), Unit::Day));
        assert!(!bounds.blocks(date!(2018 - 08 - 31), Unit::Month));
        assert!(bounds.blocks(date!(2018 - 09 - 01), Unit::Month));
        assert!(!bounds.blocks(date!(2018 - 12 - 31), Unit::Year));
        assert!(bounds.blocks(date!(2019 - 01 - 01), Unit::Year));
    }

    #[test]
    fn test_disabled_list() {
        let bounds = Bounds::new().disable([date!(2017 - 01 - 01), date!(2019 - 06 - 15)]);
        assert!(bounds.blocks(date!(2019 - 06 - 15), Unit::Day));
        assert!(!bounds.blocks(date!(2019 - 06 - 16), Unit::Day));
        assert!(bounds.blocks(date!(2019 - 06 - 01), Unit::Month));
        assert!(!bounds.blocks(date!(2019 - 07 - 01), Unit::Month));
        assert!(bounds.blocks(date!(2017 - 05 - 01), Unit::Year));
        assert!(!bounds.blocks(date!(2018 - 01 - 01), Unit::Year));
    }

    #[test]
    fn test_inverted_bounds_block_everything() {
        let bounds = Bounds::new()
            .min(date!(2018 - 09 - 01))
            .max(date!(2018 - 08 - 01));
        assert!(bounds.blocks(date!(2018 - 08 - 15), Unit::Day));
        assert!(bounds.blocks(date!(2018 - 07 - 15), Unit::Day));
        assert!(bounds.blocks(date!(2018 - 09 - 15), Unit::Day));
    }
}
