//! Turn order, termination, and the seam between human input and an
//! automated move source.
//!
//! A match runs until one side has no legal move at the start of its
//! turn; that side forfeits and the opponent wins. There is no pass, no
//! scoring phase, and no draw produced by the engine itself.

use std::fmt;

use tracing::{debug, info};

use crate::ai::MoveSource;
use crate::board::{Board, Color, Point};

/// Terminal state of a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    BlackWins,
    WhiteWins,
    /// Never produced by the engine; kept for front ends that settle
    /// finished games some other way.
    Draw,
}

impl GameResult {
    fn won_against(loser: Color) -> GameResult {
        match loser {
            Color::Black => GameResult::WhiteWins,
            Color::White => GameResult::BlackWins,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "Ongoing"),
            GameResult::BlackWins => write!(f, "Black wins"),
            GameResult::WhiteWins => write!(f, "White wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Why a move attempt was turned down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The match has already ended.
    GameOver,
    /// The other side has the move.
    NotYourTurn,
    /// Off the board, occupied, or suicide.
    Illegal,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "the game is already over"),
            MoveError::NotYourTurn => write!(f, "it is not that side's turn"),
            MoveError::Illegal => write!(f, "illegal move"),
        }
    }
}

impl std::error::Error for MoveError {}

/// What came out of handing the turn to a move source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AiMove {
    /// The source proposed this point and it was played.
    Played(Point),
    /// The source produced nothing usable; its side forfeits.
    Forfeited,
}

/// One match of no-pass Go.
///
/// Owns the board, tracks whose turn it is, and holds the result. The
/// optional `human` color marks the seat driven by typed input; `None`
/// means both sides are automated.
pub struct Game {
    board: Board,
    to_move: Color,
    human: Option<Color>,
    result: GameResult,
}

impl Game {
    /// A fresh match on an empty `size` x `size` board, Black to move.
    pub fn new(size: usize, human: Option<Color>) -> Self {
        Self {
            board: Board::new(size),
            to_move: Color::Black,
            human,
            result: GameResult::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn human_color(&self) -> Option<Color> {
        self.human
    }

    pub fn is_human_turn(&self) -> bool {
        self.human == Some(self.to_move)
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    /// Try to play `color` at `(r, c)`.
    ///
    /// Rejections leave the match untouched: the board, the turn, and the
    /// result all stay as they were. On success the turn passes to the
    /// opponent, and if the opponent then has no legal move the match ends
    /// in their forfeit.
    pub fn attempt_move(&mut self, r: usize, c: usize, color: Color) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if color != self.to_move {
            return Err(MoveError::NotYourTurn);
        }
        if !self.board.place(r, c, color) {
            return Err(MoveError::Illegal);
        }
        debug!(stone = %color, r, c, "move played");
        self.to_move = self.to_move.opponent();
        self.check_game_over();
        Ok(())
    }

    /// Hand the turn to `source`.
    ///
    /// Errors cover caller misuse only (match over, human seat to move).
    /// A source that returns no move, an illegal point, or a point the
    /// board refuses does not error: its side forfeits and the match ends,
    /// reported as `Ok(AiMove::Forfeited)`.
    pub fn play_ai_turn(&mut self, source: &mut dyn MoveSource) -> Result<AiMove, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }
        let mover = self.to_move;
        let Some((r, c)) = source.select_move(&self.board, mover) else {
            self.forfeit(mover);
            return Ok(AiMove::Forfeited);
        };
        // the source is not trusted to hand back a playable point
        if !self.board.place(r, c, mover) {
            info!(stone = %mover, r, c, "move source proposed an unplayable point");
            self.forfeit(mover);
            return Ok(AiMove::Forfeited);
        }
        debug!(stone = %mover, r, c, "move played");
        self.to_move = self.to_move.opponent();
        self.check_game_over();
        Ok(AiMove::Played((r, c)))
    }

    fn forfeit(&mut self, loser: Color) {
        self.result = GameResult::won_against(loser);
        info!(%loser, "no move available, side forfeits");
    }

    /// After a completed move: if the side now holding the turn has no
    /// legal reply, it forfeits on the spot.
    fn check_game_over(&mut self) {
        if self.is_over() {
            return;
        }
        if self.board.legal_moves(self.to_move).is_empty() {
            self.forfeit(self.to_move);
        }
    }
}
