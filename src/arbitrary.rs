//! Quickcheck generators. Only compiled for tests.

use quickcheck::{Arbitrary, Gen};

use crate::board::{Board, Color};

/// A board reached by playing some random sequence of legal moves,
/// alternating colors from Black, plus the color whose turn it would be.
///
/// Generating positions this way keeps every sampled board reachable
/// under the rules, so properties never run against states the engine
/// could not produce.
#[derive(Clone, Debug)]
pub struct ReachableBoard {
    pub board: Board,
    pub to_move: Color,
}

impl Arbitrary for ReachableBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = 1 + usize::arbitrary(g) % 6;
        let mut board = Board::new(size);
        let mut to_move = Color::Black;
        let turns = usize::arbitrary(g) % (size * size + 1);
        for _ in 0..turns {
            let moves = board.legal_moves(to_move);
            let Some(&(r, c)) = g.choose(&moves) else {
                break;
            };
            board.place(r, c, to_move);
            to_move = to_move.opponent();
        }
        ReachableBoard { board, to_move }
    }
}
