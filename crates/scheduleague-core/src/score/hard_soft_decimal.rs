//! HardSoftDecimalScore - two-level fixed-point score
//!
//! Both levels are `i64` values stored pre-scaled by 100 000, giving five
//! decimal places without heap allocation or binary floating point.
//! Textual conversion goes through `rust_decimal` so `-2.5soft` parses and
//! prints exactly.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::ScoreParseError;

/// Scale factor for 5 decimal places of precision.
pub const SCALE: i64 = 100_000;

const SCALE_DIGITS: u32 = 5;

/// Converts a decimal value into the score's scaled integer representation.
///
/// Rounds half away from zero at the fifth decimal place and saturates at
/// the `i64` bounds.
pub fn scaled_from_decimal(value: Decimal) -> i64 {
    let saturated = if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    };
    value
        .checked_mul(Decimal::from(SCALE))
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|scaled| scaled.to_i64())
        .unwrap_or(saturated)
}

/// A score with separate hard and soft levels, using i64 with ×100000 scaling.
///
/// Use [`of`](Self::of) for unscaled input or [`of_scaled`](Self::of_scaled)
/// for pre-scaled values.
///
/// # Examples
///
/// ```
/// use scheduleague_core::HardSoftDecimalScore;
///
/// let score = HardSoftDecimalScore::of(-1, -100);
/// assert_eq!(score.hard_scaled(), -100000);
/// assert_eq!(score.soft_scaled(), -10000000);
/// assert!(!score.is_feasible());
///
/// let fractional = HardSoftDecimalScore::of_scaled(-150000, -250000);
/// assert_eq!(fractional.to_string(), "-1.5hard/-2.5soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftDecimalScore {
    hard: i64,
    soft: i64,
}

impl HardSoftDecimalScore {
    /// The zero score.
    pub const ZERO: HardSoftDecimalScore = HardSoftDecimalScore { hard: 0, soft: 0 };

    /// One hard constraint unit (scaled).
    pub const ONE_HARD: HardSoftDecimalScore = HardSoftDecimalScore {
        hard: SCALE,
        soft: 0,
    };

    /// One soft constraint unit (scaled).
    pub const ONE_SOFT: HardSoftDecimalScore = HardSoftDecimalScore {
        hard: 0,
        soft: SCALE,
    };

    /// Creates a new score from unscaled values.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftDecimalScore {
            hard: hard * SCALE,
            soft: soft * SCALE,
        }
    }

    /// Creates a new score from pre-scaled values.
    #[inline]
    pub const fn of_scaled(hard: i64, soft: i64) -> Self {
        HardSoftDecimalScore { hard, soft }
    }

    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        Self::of(hard, 0)
    }

    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        Self::of(0, soft)
    }

    #[inline]
    pub const fn of_soft_scaled(soft: i64) -> Self {
        HardSoftDecimalScore { hard: 0, soft }
    }

    /// Returns the scaled hard score component.
    #[inline]
    pub const fn hard_scaled(&self) -> i64 {
        self.hard
    }

    /// Returns the scaled soft score component.
    #[inline]
    pub const fn soft_scaled(&self) -> i64 {
        self.soft
    }

    /// A solution is feasible when no hard rule is violated.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard >= 0
    }

    /// The hard level as an exact decimal.
    pub fn hard_decimal(&self) -> Decimal {
        Decimal::new(self.hard, SCALE_DIGITS)
    }

    /// The soft level as an exact decimal.
    pub fn soft_decimal(&self) -> Decimal {
        Decimal::new(self.soft, SCALE_DIGITS)
    }

    /// Multiplies both levels by an integer constraint weight.
    pub const fn saturating_mul(&self, factor: i64) -> Self {
        HardSoftDecimalScore {
            hard: self.hard.saturating_mul(factor),
            soft: self.soft.saturating_mul(factor),
        }
    }

    /// Parses the `Xhard/Ysoft` form produced by `Display`.
    pub fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let s = s.trim();
        let (hard_part, soft_part) = s.split_once('/').ok_or_else(|| {
            ScoreParseError::new(format!(
                "Invalid HardSoftDecimalScore format '{s}': expected 'Xhard/Ysoft'"
            ))
        })?;

        let hard_str = hard_part.trim().strip_suffix("hard").ok_or_else(|| {
            ScoreParseError::new(format!("Hard score part '{hard_part}' must end with 'hard'"))
        })?;
        let soft_str = soft_part.trim().strip_suffix("soft").ok_or_else(|| {
            ScoreParseError::new(format!("Soft score part '{soft_part}' must end with 'soft'"))
        })?;

        Ok(HardSoftDecimalScore::of_scaled(
            parse_level(hard_str, "hard")?,
            parse_level(soft_str, "soft")?,
        ))
    }
}

fn parse_level(text: &str, level: &str) -> Result<i64, ScoreParseError> {
    let value = Decimal::from_str(text.trim())
        .map_err(|e| ScoreParseError::new(format!("Invalid {level} score '{text}': {e}")))?;
    if value.scale() > SCALE_DIGITS {
        return Err(ScoreParseError::new(format!(
            "{level} score '{text}' has more than {SCALE_DIGITS} decimal places"
        )));
    }
    value
        .checked_mul(Decimal::from(SCALE))
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(|| ScoreParseError::new(format!("{level} score '{text}' is out of range")))
}

impl FromStr for HardSoftDecimalScore {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for HardSoftDecimalScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hard
            .cmp(&other.hard)
            .then_with(|| self.soft.cmp(&other.soft))
    }
}

impl PartialOrd for HardSoftDecimalScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for HardSoftDecimalScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        HardSoftDecimalScore::of_scaled(self.hard + other.hard, self.soft + other.soft)
    }
}

impl AddAssign for HardSoftDecimalScore {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for HardSoftDecimalScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        HardSoftDecimalScore::of_scaled(self.hard - other.hard, self.soft - other.soft)
    }
}

impl SubAssign for HardSoftDecimalScore {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for HardSoftDecimalScore {
    type Output = Self;

    fn neg(self) -> Self {
        HardSoftDecimalScore::of_scaled(-self.hard, -self.soft)
    }
}

impl Sum for HardSoftDecimalScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a HardSoftDecimalScore> for HardSoftDecimalScore {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Debug for HardSoftDecimalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardSoftDecimalScore({}, {})",
            self.hard_decimal().normalize(),
            self.soft_decimal().normalize()
        )
    }
}

impl fmt::Display for HardSoftDecimalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}hard/{}soft",
            self.hard_decimal().normalize(),
            self.soft_decimal().normalize()
        )
    }
}
