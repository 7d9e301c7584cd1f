//! Sente: a rules engine for no-pass Go.
//!
//! The variant played here drops pass, ko, and scoring: stones are placed
//! under the usual capture and suicide rules, and the first side that
//! starts its turn with no legal move forfeits the match. Suitable for
//! driving a console session or embedding under another front end.
//!
//! ## Modules
//!
//! - [`board`] - Grid state, groups, liberties, legality, capture
//! - [`game`] - Turn order, forfeit termination, move-source integration
//! - [`ai`] - The `MoveSource` trait and a seeded random policy
//! - [`cli`] - Interactive console session and spectator mode
//!
//! ## Example
//!
//! ```
//! use sente::board::Color;
//! use sente::game::{Game, GameResult};
//!
//! let mut game = Game::new(9, Some(Color::Black));
//! game.attempt_move(2, 6, Color::Black).unwrap();
//! assert_eq!(game.to_move(), Color::White);
//! assert_eq!(game.result(), GameResult::Ongoing);
//! ```

pub mod ai;
pub mod board;
pub mod cli;
pub mod game;

#[cfg(test)]
mod arbitrary;
