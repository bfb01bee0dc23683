use crate::core::cause::{Cause, CostRange};
use crate::utils::format::format_cost_range;

/// Fold per-cause cost ranges into one aggregate range: lowest min, highest
/// max. `None` for an empty input.
#[must_use]
pub fn aggregate_range<'a, I>(causes: I) -> Option<CostRange>
where
    I: IntoIterator<Item = &'a Cause>,
{
    let mut iter = causes.into_iter();
    let first = iter.next()?;

    let mut low = first.cost_range.min;
    let mut high = first.cost_range.max;
    for cause in iter {
        low = low.min(cause.cost_range.min);
        high = high.max(cause.cost_range.max);
    }
    Some(CostRange::new(low, high))
}

/// Aggregate cost bounds rendered for display, e.g. `"Rp 50.000 - Rp 400.000"`.
///
/// A single cause still renders as a range.
#[must_use]
pub fn estimate_range<'a, I>(causes: I) -> Option<String>
where
    I: IntoIterator<Item = &'a Cause>,
{
    aggregate_range(causes).map(format_cost_range)
}
