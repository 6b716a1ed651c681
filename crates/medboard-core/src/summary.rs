//! Aggregate price information over a fetched list.

use serde::Serialize;

use crate::item::{Item, format_price};

/// Average price across the items that carry a price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    /// Mean of all present prices.
    pub average_price: f64,
    /// Number of items that contributed a price.
    pub priced_count: usize,
}

impl PriceSummary {
    /// Compute the summary, or `None` when no item has a price.
    ///
    /// Uses a running mean so that large finite prices cannot overflow an
    /// intermediate sum.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Option<Self> {
        let (mean, count) = items
            .into_iter()
            .filter_map(|item| item.price)
            .fold((0.0_f64, 0_usize), |(mean, count), p| {
                let n = (count + 1) as f64;
                (mean + p / n - mean / n, count + 1)
            });

        (count > 0 && mean.is_finite()).then(|| Self {
            average_price: mean,
            priced_count: count,
        })
    }

    /// Human-readable one-line summary.
    pub fn describe(&self) -> String {
        let noun = if self.priced_count == 1 {
            "medicine"
        } else {
            "medicines"
        };
        format!(
            "Average price: {} across {} {noun}",
            format_price(self.average_price),
            self.priced_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(p: Option<f64>) -> Item {
        Item {
            price: p,
            ..Item::default()
        }
    }

    #[test]
    fn summary_empty_list() {
        assert_eq!(PriceSummary::from_items(&Vec::<Item>::new()), None);
    }

    #[test]
    fn summary_no_prices() {
        let items = [priced(None), priced(None)];
        assert_eq!(PriceSummary::from_items(&items), None);
    }

    #[test]
    fn summary_skips_missing_prices() {
        let items = [priced(Some(2.0)), priced(None), priced(Some(4.0))];
        let summary = PriceSummary::from_items(&items).unwrap();
        assert_eq!(summary.priced_count, 2);
        assert!((summary.average_price - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_huge_prices_stay_finite() {
        let items = [priced(Some(1e308)), priced(Some(1e308))];
        let summary = PriceSummary::from_items(&items).unwrap();
        assert!(summary.average_price.is_finite());
        assert!((summary.average_price - 1e308).abs() <= 1e308 * 1e-12);
        assert!(!summary.describe().contains("inf"));
    }

    #[test]
    fn summary_extreme_opposite_prices() {
        let items = [priced(Some(f64::MAX)), priced(Some(-f64::MAX))];
        let summary = PriceSummary::from_items(&items).unwrap();
        assert!(summary.average_price.is_finite());
        assert!(summary.average_price.abs() < 1e300);
    }

    #[test]
    fn describe_plural() {
        let items = [priced(Some(1.0)), priced(Some(2.0))];
        let summary = PriceSummary::from_items(&items).unwrap();
        assert_eq!(summary.describe(), "Average price: $1.50 across 2 medicines");
    }

    #[test]
    fn describe_singular() {
        let items = [priced(Some(9.99))];
        let summary = PriceSummary::from_items(&items).unwrap();
        assert_eq!(summary.describe(), "Average price: $9.99 across 1 medicine");
    }
}
