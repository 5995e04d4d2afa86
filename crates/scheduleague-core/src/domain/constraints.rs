//! League constraint configuration

/// A dimension along which each team's matches should be spread evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum BalanceDimension {
    /// Day of the week.
    Day,
    /// Day of the week together with the start time.
    Time,
    Venue,
}

impl BalanceDimension {
    pub const ALL: [BalanceDimension; 3] = [
        BalanceDimension::Day,
        BalanceDimension::Time,
        BalanceDimension::Venue,
    ];
}

/// Priority order of the balance dimensions.
///
/// The dimension at index `i` of an order with `n` entries weighs
/// `(n - i) * 10`; dimensions not listed weigh zero. Repeated entries keep
/// only their first position.
///
/// ```
/// use scheduleague_core::{BalanceDimension, BalanceOrder};
///
/// let order = BalanceOrder::default();
/// assert_eq!(order.weight(BalanceDimension::Day), 30);
/// assert_eq!(order.weight(BalanceDimension::Time), 20);
/// assert_eq!(order.weight(BalanceDimension::Venue), 10);
///
/// let venue_only = BalanceOrder::new([BalanceDimension::Venue]);
/// assert_eq!(venue_only.weight(BalanceDimension::Venue), 10);
/// assert_eq!(venue_only.weight(BalanceDimension::Day), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<BalanceDimension>", into = "Vec<BalanceDimension>")
)]
pub struct BalanceOrder(Vec<BalanceDimension>);

impl BalanceOrder {
    pub fn new(dimensions: impl IntoIterator<Item = BalanceDimension>) -> Self {
        let mut order: Vec<BalanceDimension> = Vec::with_capacity(3);
        for dimension in dimensions {
            if !order.contains(&dimension) {
                order.push(dimension);
            }
        }
        Self(order)
    }

    /// An order under which every balance rule weighs zero.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn dimensions(&self) -> &[BalanceDimension] {
        &self.0
    }

    pub fn weight(&self, dimension: BalanceDimension) -> i64 {
        self.0
            .iter()
            .position(|d| *d == dimension)
            .map(|index| (self.0.len() - index) as i64 * 10)
            .unwrap_or(0)
    }
}

impl Default for BalanceOrder {
    fn default() -> Self {
        Self(BalanceDimension::ALL.to_vec())
    }
}

impl From<Vec<BalanceDimension>> for BalanceOrder {
    fn from(dimensions: Vec<BalanceDimension>) -> Self {
        Self::new(dimensions)
    }
}

impl From<BalanceOrder> for Vec<BalanceDimension> {
    fn from(order: BalanceOrder) -> Self {
        order.0
    }
}

/// League rules supplied with the season.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Constraints {
    /// Matches a team may play on one calendar day; 0 means unlimited.
    #[cfg_attr(feature = "serde", serde(alias = "maxMatchPerDay"))]
    pub max_matches_per_day: u32,
    #[cfg_attr(feature = "serde", serde(alias = "balanceOrder"))]
    pub balance_order: BalanceOrder,
    /// Penalize repeated pairings that fall close together.
    pub matchup_separation: bool,
    /// Penalize teams meeting some opponents more often than others.
    pub opponent_balance: bool,
}

impl Constraints {
    pub fn with_max_matches_per_day(mut self, limit: u32) -> Self {
        self.max_matches_per_day = limit;
        self
    }

    pub fn with_balance_order(mut self, order: BalanceOrder) -> Self {
        self.balance_order = order;
        self
    }

    pub fn with_matchup_separation(mut self, enabled: bool) -> Self {
        self.matchup_separation = enabled;
        self
    }

    pub fn with_opponent_balance(mut self, enabled: bool) -> Self {
        self.opponent_balance = enabled;
        self
    }
}
