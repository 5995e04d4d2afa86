//! Moves for local search.
//!
//! A move changes the matchup of one or two open matches. Moves never touch
//! a locked match: [`Move::is_doable`] is false for them.
//!
//! Undo is handled by `RecordingScoreDirector`, not by the moves.

mod arena;
mod change;
mod schedule_move;
mod swap;
mod traits;


pub use arena::MoveArena;
pub use change::ChangeMove;
pub use schedule_move::ScheduleMove;
pub use swap::SwapMove;
pub use traits::Move;
