//! Move selection for an automated seat.

use crate::board::{Board, Color, Point};

/// A source of moves for one side.
///
/// This is the only capability the match controller needs from a policy:
/// propose a coordinate, or admit there is none. Implementations take
/// `&mut self` so stateful policies (a generator, a script, a remote
/// peer) fit behind the same trait. Returned points are not trusted; the
/// controller re-checks them against the board.
pub trait MoveSource {
    /// Pick a move for `color`, or `None` when no move is available.
    fn select_move(&mut self, board: &Board, color: Color) -> Option<Point>;
}

/// Uniform random choice among the legal moves.
pub struct RandomAi {
    rng: fastrand::Rng,
}

impl RandomAi {
    /// A policy seeded from entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A policy with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomAi {
    fn select_move(&mut self, board: &Board, color: Color) -> Option<Point> {
        self.rng.choice(board.legal_moves(color))
    }
}
