//! Round-robin partitioner for dividing a season into passes.
//!
//! Each partition holds as many consecutive matches as the base pool has
//! entries, so solving it means placing one round-robin pass.

use std::ops::Range;

use scheduleague_core::{Match, Matchup, MatchupPool};

/// Splits an ordered season into round-robin passes and hands out the
/// pool each pass draws from.
///
/// # Example
///
/// ```
/// use scheduleague_core::{MatchupPool, Team};
/// use scheduleague_solver::partitioned::RoundRobinPartitioner;
///
/// let teams = [Team::new(1, "A"), Team::new(2, "B"), Team::new(3, "C")];
/// let partitioner = RoundRobinPartitioner::new(MatchupPool::round_robin(&teams));
/// let ranges: Vec<_> = partitioner.partition_ranges(7).collect();
/// assert_eq!(ranges, vec![0..3, 3..6, 6..7]);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinPartitioner {
    pool: MatchupPool,
}

impl RoundRobinPartitioner {
    pub fn new(pool: MatchupPool) -> Self {
        Self { pool }
    }

    /// Matches per partition; at least one so an empty pool still
    /// partitions.
    pub fn partition_size(&self) -> usize {
        self.pool.len().max(1)
    }

    pub fn partition_count(&self, match_count: usize) -> usize {
        match_count.div_ceil(self.partition_size())
    }

    /// Index ranges of each partition over `match_count` ordered matches.
    pub fn partition_ranges(&self, match_count: usize) -> impl Iterator<Item = Range<usize>> {
        let size = self.partition_size();
        (0..self.partition_count(match_count))
            .map(move |i| i * size..((i + 1) * size).min(match_count))
    }

    /// Pool for partition `index`, minus the entries its own locked
    /// matches already take.
    ///
    /// Odd partitions use the reversed orientation. A locked match takes
    /// the entry with its exact orientation if present, otherwise a
    /// team-equal one; a locked matchup outside the pool takes nothing.
    pub fn pool_for(&self, index: usize, partition: &[Match]) -> Vec<Matchup> {
        let mut pool = self.pool.for_partition(index).into_vec();
        for matchup in partition
            .iter()
            .filter(|m| m.is_locked())
            .filter_map(Match::matchup)
        {
            let taken = pool
                .iter()
                .position(|v| *v == matchup)
                .or_else(|| pool.iter().position(|v| v.teams_equal(&matchup)));
            if let Some(pos) = taken {
                pool.remove(pos);
            }
        }
        pool
    }
}
