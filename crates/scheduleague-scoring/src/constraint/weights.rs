use scheduleague_core::{Constraints, HardSoftDecimalScore};

use super::LeagueConstraint;
use crate::api::weight_overrides::ConstraintWeightOverrides;

/// Resolved per-unit weight of every league rule for one schedule.
///
/// Resolution order: explicit override, then the balance-order override for
/// the three balance rules, then the rule's default weight. A rule switched
/// off by the league [`Constraints`] always weighs zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintWeights {
    weights: [HardSoftDecimalScore; LeagueConstraint::COUNT],
}

impl ConstraintWeights {
    pub fn for_constraints(constraints: &Constraints) -> Self {
        Self::resolve(constraints, &ConstraintWeightOverrides::new())
    }

    pub fn resolve(constraints: &Constraints, overrides: &ConstraintWeightOverrides) -> Self {
        let balance = ConstraintWeightOverrides::from_balance_order(&constraints.balance_order);
        let mut weights = [HardSoftDecimalScore::ZERO; LeagueConstraint::COUNT];
        for constraint in LeagueConstraint::ALL {
            if !constraint.is_enabled(constraints) {
                continue;
            }
            let name = constraint.name();
            weights[constraint.index()] = overrides
                .get(name)
                .or_else(|| balance.get(name))
                .copied()
                .unwrap_or_else(|| constraint.default_weight());
        }
        Self { weights }
    }

    #[inline]
    pub fn get(&self, constraint: LeagueConstraint) -> HardSoftDecimalScore {
        self.weights[constraint.index()]
    }

    #[inline]
    pub fn is_active(&self, constraint: LeagueConstraint) -> bool {
        self.get(constraint) != HardSoftDecimalScore::ZERO
    }
}
