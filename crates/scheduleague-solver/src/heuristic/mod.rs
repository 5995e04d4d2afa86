//! Heuristic components for solving
//!
//! This module contains:
//! - Moves: operations that change match assignments
//! - Selectors: components that enumerate the moves a step considers

pub mod r#move;
pub mod selector;

pub use r#move::{ChangeMove, Move, MoveArena, ScheduleMove, SwapMove};
pub use selector::{
    ChangeMoveSelector, MoveSelector, SelectionOrder, SwapMoveSelector, UnionMoveSelector,
};
