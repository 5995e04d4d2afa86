//! Reusable move buffer.
//!
//! The local search fills the arena with one batch of candidate moves,
//! evaluates them by index and resets it for the next batch without
//! giving back its allocation.

/// Move buffer whose `reset` keeps capacity.
///
/// # Example
///
/// ```
/// use scheduleague_solver::heuristic::r#move::MoveArena;
///
/// let mut arena: MoveArena<i32> = MoveArena::new();
/// arena.extend([1, 2, 3]);
/// assert_eq!(arena.len(), 3);
///
/// arena.reset();
/// assert!(arena.is_empty());
/// arena.push(10);
/// assert_eq!(arena.get(0), Some(&10));
/// ```
#[derive(Debug, Clone)]
pub struct MoveArena<M> {
    moves: Vec<M>,
}

impl<M> MoveArena<M> {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    /// Empties the arena; capacity is kept.
    #[inline]
    pub fn reset(&mut self) {
        self.moves.clear();
    }

    #[inline]
    pub fn push(&mut self, m: M) {
        self.moves.push(m);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.moves.capacity()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&M> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[M] {
        &self.moves
    }
}

impl<M> Default for MoveArena<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Extend<M> for MoveArena<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}
