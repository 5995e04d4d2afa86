//! Score director implementations.
//!
//! The score director manages the working schedule and its score.
//!
//! # Score Director Types
//!
//! - [`SimpleScoreDirector`] - Full recalculation (reference)
//! - [`IncrementalScoreDirector`] - Per-rule indexes, delta updates
//! - [`RecordingScoreDirector`] - Undo tracking wrapper

mod incremental;
mod simple;
mod traits;

pub mod recording;

#[cfg(test)]
mod tests;

pub use incremental::IncrementalScoreDirector;
pub use recording::RecordingScoreDirector;
pub use simple::SimpleScoreDirector;
pub use traits::ScoreDirector;
