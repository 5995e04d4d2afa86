//! League constraint rules.
//!
//! Every rule is a pure function over the match list (see [`rules`]). The
//! incremental director in `crate::director` must agree with these
//! functions exactly, so the shared penalty arithmetic lives here.

pub mod load_balance;
pub mod rules;
mod weights;

#[cfg(test)]
mod tests;

use rust_decimal::Decimal;
use scheduleague_core::score::scaled_from_decimal;
use scheduleague_core::{BalanceDimension, Constraints, HardSoftDecimalScore};

pub use weights::ConstraintWeights;

/// The fixed set of league rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeagueConstraint {
    /// A team cannot play itself.
    SelfPlay,
    /// A team cannot play two matches at the same datetime.
    DatetimeConflict,
    /// A team cannot exceed the configured matches per calendar day.
    MaxMatchesPerDay,
    MatchupRepeat,
    MatchupSeparation,
    OpponentBalance,
    DayBalance,
    DayTimeBalance,
    VenueBalance,
}

impl LeagueConstraint {
    pub const COUNT: usize = 9;

    pub const ALL: [LeagueConstraint; Self::COUNT] = [
        LeagueConstraint::SelfPlay,
        LeagueConstraint::DatetimeConflict,
        LeagueConstraint::MaxMatchesPerDay,
        LeagueConstraint::MatchupRepeat,
        LeagueConstraint::MatchupSeparation,
        LeagueConstraint::OpponentBalance,
        LeagueConstraint::DayBalance,
        LeagueConstraint::DayTimeBalance,
        LeagueConstraint::VenueBalance,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            LeagueConstraint::SelfPlay => "Team self play",
            LeagueConstraint::DatetimeConflict => "Team datetime conflict",
            LeagueConstraint::MaxMatchesPerDay => "Team maximum matches per day",
            LeagueConstraint::MatchupRepeat => "Matchup repeat",
            LeagueConstraint::MatchupSeparation => "Matchup separation",
            LeagueConstraint::OpponentBalance => "Team opponent balancing",
            LeagueConstraint::DayBalance => "Team day balancing",
            LeagueConstraint::DayTimeBalance => "Team day+time balancing",
            LeagueConstraint::VenueBalance => "Team venue balancing",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_hard(self) -> bool {
        matches!(
            self,
            LeagueConstraint::SelfPlay
                | LeagueConstraint::DatetimeConflict
                | LeagueConstraint::MaxMatchesPerDay
        )
    }

    /// Score impact of one unit of violation before any override.
    pub const fn default_weight(self) -> HardSoftDecimalScore {
        match self {
            LeagueConstraint::SelfPlay
            | LeagueConstraint::DatetimeConflict
            | LeagueConstraint::MaxMatchesPerDay => HardSoftDecimalScore::ONE_HARD,
            LeagueConstraint::MatchupRepeat => HardSoftDecimalScore::of_soft(100_000),
            LeagueConstraint::MatchupSeparation => HardSoftDecimalScore::of_soft(1_000),
            LeagueConstraint::OpponentBalance => HardSoftDecimalScore::of_soft(10_000),
            LeagueConstraint::DayBalance
            | LeagueConstraint::DayTimeBalance
            | LeagueConstraint::VenueBalance => HardSoftDecimalScore::ONE_SOFT,
        }
    }

    /// The balance dimension ranked by the balance order, if any.
    pub const fn balance_dimension(self) -> Option<BalanceDimension> {
        match self {
            LeagueConstraint::DayBalance => Some(BalanceDimension::Day),
            LeagueConstraint::DayTimeBalance => Some(BalanceDimension::Time),
            LeagueConstraint::VenueBalance => Some(BalanceDimension::Venue),
            _ => None,
        }
    }

    /// Opt-in rules contribute nothing unless switched on.
    pub fn is_enabled(self, constraints: &Constraints) -> bool {
        match self {
            LeagueConstraint::MatchupSeparation => constraints.matchup_separation,
            LeagueConstraint::OpponentBalance => constraints.opponent_balance,
            LeagueConstraint::MaxMatchesPerDay => constraints.max_matches_per_day > 0,
            _ => true,
        }
    }
}

/// Days after which repeated pairings are no longer penalized for closeness.
pub const SEPARATION_CUTOFF_DAYS: i64 = 100;

/// Penalty for `units` whole violations.
#[inline]
pub(crate) fn count_penalty(weight: HardSoftDecimalScore, units: i64) -> HardSoftDecimalScore {
    -weight.saturating_mul(units)
}

/// Penalty for a fractional amount of violation, such as an unfairness.
pub(crate) fn fractional_penalty(
    weight: HardSoftDecimalScore,
    amount: Decimal,
) -> HardSoftDecimalScore {
    if amount.is_zero() || weight == HardSoftDecimalScore::ZERO {
        return HardSoftDecimalScore::ZERO;
    }
    let scale_level = |level: Decimal| {
        level
            .checked_mul(amount)
            .map(scaled_from_decimal)
            .unwrap_or(if level.is_sign_negative() == amount.is_sign_negative() {
                i64::MAX
            } else {
                i64::MIN
            })
    };
    -HardSoftDecimalScore::of_scaled(
        scale_level(weight.hard_decimal()),
        scale_level(weight.soft_decimal()),
    )
}

/// Closeness factor for two repeated pairings `days` apart: 1 when on the
/// same day, falling linearly to 0 at [`SEPARATION_CUTOFF_DAYS`].
pub fn separation_factor(days: i64) -> Decimal {
    let remaining = SEPARATION_CUTOFF_DAYS - days.abs().min(SEPARATION_CUTOFF_DAYS);
    Decimal::from(remaining) / Decimal::from(SEPARATION_CUTOFF_DAYS)
}
