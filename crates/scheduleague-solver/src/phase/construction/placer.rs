//! Matchup placer for the construction heuristic
//!
//! The placer decides which matches need a value and in which order the
//! pool values are offered to them.

use std::collections::HashMap;

use rand::seq::SliceRandom;

use scheduleague_core::{Matchup, Schedule, TeamId};

use crate::heuristic::r#move::ChangeMove;
use crate::scope::SolverRng;

/// A match that needs a matchup, with one candidate move per distinct
/// remaining value.
#[derive(Debug, Clone)]
pub struct Placement {
    pub match_index: usize,
    pub moves: Vec<ChangeMove>,
}

impl Placement {
    pub fn new(match_index: usize, values: &[Matchup]) -> Self {
        let mut distinct: Vec<Matchup> = Vec::with_capacity(values.len());
        for value in values {
            if !distinct.contains(value) {
                distinct.push(*value);
            }
        }
        let moves = distinct
            .into_iter()
            .map(|value| ChangeMove::new(match_index, Some(value)))
            .collect();
        Self { match_index, moves }
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }
}

/// Orders pool values round by round using the circle method.
///
/// Teams are arranged on a circle (plus a bye for an odd count); each
/// rotation pairs every team once, and the pool entry team-equal to each
/// pair is emitted in turn. Consecutive open matches therefore receive
/// disjoint pairings, which keeps matches sharing a date free of team
/// conflicts. Values that match no pairing, for example duplicates, are
/// appended in pool order.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinPlacer {
    shuffle: bool,
}

impl RoundRobinPlacer {
    /// A placer that shuffles the team order before building the rounds.
    pub fn new() -> Self {
        Self { shuffle: true }
    }

    /// A placer that keeps the schedule's team order.
    pub fn in_team_order() -> Self {
        Self { shuffle: false }
    }

    /// Open matches without a matchup, in schedule order.
    pub fn unassigned_indices(&self, schedule: &Schedule) -> Vec<usize> {
        schedule
            .matches
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_locked() && !m.is_assigned())
            .map(|(i, _)| i)
            .collect()
    }

    /// Pool values not held by an open match, in placement order.
    pub fn ordered_values(&self, schedule: &Schedule, rng: &mut SolverRng) -> Vec<Matchup> {
        let mut available = available_values(schedule);
        let mut slots: Vec<Option<TeamId>> = schedule.teams.iter().map(|t| Some(t.id)).collect();
        if self.shuffle {
            slots.shuffle(rng);
        }
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let mut ordered = Vec::with_capacity(available.len());
        let n = slots.len();
        for _ in 0..n.saturating_sub(1) {
            for i in 0..n / 2 {
                let (Some(a), Some(b)) = (slots[i], slots[n - 1 - i]) else {
                    continue;
                };
                if let Some(pos) = available
                    .iter()
                    .position(|m| m.contains(a) && m.contains(b) && !m.is_self_play())
                {
                    ordered.push(available.remove(pos));
                }
            }
            slots[1..].rotate_right(1);
        }
        ordered.extend(available);
        ordered
    }
}

impl Default for RoundRobinPlacer {
    fn default() -> Self {
        Self::new()
    }
}

/// The pool as a multiset, minus one entry per value an open match holds.
fn available_values(schedule: &Schedule) -> Vec<Matchup> {
    let mut held: HashMap<Matchup, usize> = HashMap::new();
    for m in schedule.matches.iter().filter(|m| !m.is_locked()) {
        if let Some(value) = m.matchup() {
            *held.entry(value).or_insert(0) += 1;
        }
    }
    schedule
        .matchups
        .iter()
        .filter(|value| match held.get_mut(*value) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .copied()
        .collect()
}
