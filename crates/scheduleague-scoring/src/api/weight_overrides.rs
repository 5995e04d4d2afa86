// Runtime constraint weight configuration.
//
// Allows adjusting rule weights per solve without recompiling.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use scheduleague_core::{BalanceOrder, HardSoftDecimalScore};

use crate::constraint::LeagueConstraint;

// Holds runtime overrides for constraint weights, keyed by constraint name.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConstraintWeightOverrides {
    weights: HashMap<String, HardSoftDecimalScore>,
}

impl Debug for ConstraintWeightOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintWeightOverrides")
            .field("count", &self.weights.len())
            .finish()
    }
}

impl ConstraintWeightOverrides {
    // Creates an empty overrides container.
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    // Creates overrides from an iterator of (name, weight) pairs.
    pub fn from_pairs<I, N>(iter: I) -> Self
    where
        I: IntoIterator<Item = (N, HardSoftDecimalScore)>,
        N: Into<String>,
    {
        let weights = iter.into_iter().map(|(n, w)| (n.into(), w)).collect();
        Self { weights }
    }

    // Weights for the day, day+time and venue balancing rules: one soft
    // unit times the dimension's rank weight.
    pub fn from_balance_order(order: &BalanceOrder) -> Self {
        Self::from_pairs(LeagueConstraint::ALL.into_iter().filter_map(|constraint| {
            let dimension = constraint.balance_dimension()?;
            let weight = constraint
                .default_weight()
                .saturating_mul(order.weight(dimension));
            Some((constraint.name(), weight))
        }))
    }

    // Sets the weight for a constraint.
    pub fn put<N: Into<String>>(&mut self, name: N, weight: HardSoftDecimalScore) {
        self.weights.insert(name.into(), weight);
    }

    pub fn put_constraint(&mut self, constraint: LeagueConstraint, weight: HardSoftDecimalScore) {
        self.put(constraint.name(), weight);
    }

    pub fn remove(&mut self, name: &str) -> Option<HardSoftDecimalScore> {
        self.weights.remove(name)
    }

    // Gets the overridden weight, or returns the default if not overridden.
    pub fn get_or_default(&self, name: &str, default: HardSoftDecimalScore) -> HardSoftDecimalScore {
        self.weights.get(name).copied().unwrap_or(default)
    }

    pub fn get(&self, name: &str) -> Option<&HardSoftDecimalScore> {
        self.weights.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.weights.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    // Creates an Arc-wrapped version for sharing across threads.
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}
