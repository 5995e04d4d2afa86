//! LoadBalance for computing unfairness (square root of summed squared deviation).
//!
//! Only keys with a non-zero load take part, so a team that never plays on
//! Sundays is not penalized for it.

use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

/// Decimal places kept for an unfairness value; matches the score scale.
pub const UNFAIRNESS_DIGITS: u32 = 5;

/// Loads per balanced key, maintained incrementally.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use scheduleague_scoring::LoadBalance;
///
/// let mut balance = LoadBalance::new();
/// balance.add("mon");
/// balance.add("mon");
/// balance.add("wed");
/// // loads 2 and 1, mean 1.5: sqrt(0.25 + 0.25)
/// assert_eq!(balance.unfairness(), Decimal::new(70711, 5));
///
/// balance.remove(&"mon");
/// assert_eq!(balance.unfairness(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct LoadBalance<K> {
    loads: HashMap<K, i64>,
}

impl<K: Eq + Hash> Default for LoadBalance<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> LoadBalance<K> {
    pub fn new() -> Self {
        Self {
            loads: HashMap::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        *self.loads.entry(key).or_insert(0) += 1;
    }

    /// Decrements the load of `key`; a key whose load reaches zero is dropped.
    pub fn remove(&mut self, key: &K) {
        if let Some(load) = self.loads.get_mut(key) {
            *load -= 1;
            if *load <= 0 {
                self.loads.remove(key);
            }
        }
    }

    pub fn loads(&self) -> &HashMap<K, i64> {
        &self.loads
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    pub fn unfairness(&self) -> Decimal {
        unfairness(self.loads.values().copied())
    }
}

/// `sqrt(Σ (load − mean)²)` over the non-zero loads, rounded half away from
/// zero to [`UNFAIRNESS_DIGITS`] places.
///
/// The sum of squared deviations is formed exactly in integers as
/// `(n·Σl² − (Σl)²) / n`, so the result does not depend on iteration order.
pub fn unfairness(loads: impl IntoIterator<Item = i64>) -> Decimal {
    let (mut count, mut sum, mut sum_of_squares) = (0i128, 0i128, 0i128);
    for load in loads.into_iter().filter(|l| *l != 0) {
        let load = i128::from(load);
        count += 1;
        sum += load;
        sum_of_squares += load * load;
    }
    if count < 2 {
        return Decimal::ZERO;
    }

    let numerator = count * sum_of_squares - sum * sum;
    if numerator <= 0 {
        return Decimal::ZERO;
    }
    let Ok(numerator) = Decimal::try_from_i128_with_scale(numerator, 0) else {
        return Decimal::MAX;
    };
    let squared_deviation = numerator / Decimal::from(count as i64);
    squared_deviation
        .sqrt()
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(UNFAIRNESS_DIGITS, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_loads_are_fair() {
        assert_eq!(unfairness([3, 3, 3]), Decimal::ZERO);
        assert_eq!(unfairness([5]), Decimal::ZERO);
        assert_eq!(unfairness(std::iter::empty()), Decimal::ZERO);
    }

    #[test]
    fn test_zero_loads_are_ignored() {
        assert_eq!(unfairness([2, 0, 2, 0]), Decimal::ZERO);
        assert_eq!(unfairness([2, 1]), unfairness([0, 2, 0, 1]));
    }

    #[test]
    fn test_exact_square_root() {
        // loads 1, 3: mean 2, deviations 1 and 1 -> sqrt(2)
        assert_eq!(unfairness([1, 3]), Decimal::new(141421, 5));
        // loads 0, 4 ignored zero -> single key
        assert_eq!(unfairness([4]), Decimal::ZERO);
        // loads 1, 5: deviations 2, 2 -> sqrt(8)
        assert_eq!(unfairness([1, 5]), Decimal::new(282843, 5));
    }

    #[test]
    fn test_order_independent() {
        assert_eq!(unfairness([1, 2, 7, 4]), unfairness([7, 4, 1, 2]));
    }

    #[test]
    fn test_incremental_add_remove() {
        let mut balance = LoadBalance::new();
        balance.add(1);
        balance.add(2);
        balance.add(2);
        balance.add(2);
        assert_eq!(balance.unfairness(), unfairness([1, 3]));

        balance.remove(&2);
        balance.remove(&2);
        assert_eq!(balance.unfairness(), Decimal::ZERO);
        assert_eq!(balance.loads().len(), 2);

        balance.remove(&1);
        balance.remove(&2);
        assert!(balance.is_empty());
    }
}
