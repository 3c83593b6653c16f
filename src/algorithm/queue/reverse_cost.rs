use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Display;

/// a scalar cost ordered so that the *smallest* numeric value compares as
/// the *greatest* `ReverseCost`. the `priority_queue` crate is a max-heap;
/// wrapping costs this way turns it into the min-heap Dijkstra needs
/// without reimplementing heap mechanics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReverseCost(OrderedFloat<f64>);

impl ReverseCost {
    pub const ZERO: ReverseCost = ReverseCost(OrderedFloat(0.0));

    pub fn new(value: f64) -> Self {
        ReverseCost(OrderedFloat(value))
    }

    pub fn into_f64(self) -> f64 {
        self.0.into_inner()
    }
}

impl From<f64> for ReverseCost {
    fn from(value: f64) -> Self {
        ReverseCost::new(value)
    }
}

impl From<ReverseCost> for f64 {
    fn from(value: ReverseCost) -> Self {
        value.into_f64()
    }
}

impl PartialOrd for ReverseCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReverseCost {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl Display for ReverseCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smaller_cost_orders_greater() {
        let cheap = ReverseCost::new(1.0);
        let expensive = ReverseCost::new(5.0);
        assert!(cheap > expensive);
    }

    #[test]
    fn round_trips_through_f64() {
        let c = ReverseCost::new(3.5);
        assert_eq!(f64::from(c), 3.5);
    }
}
