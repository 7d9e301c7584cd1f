//! Console front end: an interactive match against a move source, and a
//! spectator mode where one source plays both sides.

use std::io::{self, BufRead, Write};

use crate::ai::MoveSource;
use crate::board::{Color, format_point, parse_point};
use crate::game::{AiMove, Game};

enum Input {
    Move(usize, usize),
    Quit,
    Invalid,
}

fn parse_input(line: &str, size: usize) -> Input {
    let t = line.trim();
    if t.eq_ignore_ascii_case("q") || t.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }
    match parse_point(t, size) {
        Some((r, c)) => Input::Move(r, c),
        None => Input::Invalid,
    }
}

/// Run an interactive match; the human plays `human`, `source` takes the
/// other seat. Returns when the match ends, the player quits, or stdin
/// closes.
pub fn play(size: usize, human: Color, source: &mut dyn MoveSource) -> anyhow::Result<()> {
    let mut game = Game::new(size, Some(human));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("No-pass Go on {size}x{size}. You are {human}. Moves like D4; q quits.");
    loop {
        if game.is_over() {
            println!("{}", game.board());
            println!("Result: {}", game.result());
            return Ok(());
        }
        if game.is_human_turn() {
            println!("{}", game.board());
            print!("Your move: ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            match parse_input(&line?, size) {
                Input::Quit => return Ok(()),
                Input::Invalid => println!("Could not read that; try something like D4, or q."),
                Input::Move(r, c) => {
                    if let Err(err) = game.attempt_move(r, c, human) {
                        println!("Rejected: {err}.");
                    }
                }
            }
        } else {
            match game.play_ai_turn(source)? {
                AiMove::Played(pt) => {
                    println!("{} plays {}", human.opponent(), format_point(pt, size));
                }
                // the result line on the next pass announces the forfeit
                AiMove::Forfeited => {}
            }
        }
    }
}

/// Let `source` play both sides and narrate the match, stopping after
/// `max_moves` if nobody has forfeited by then.
pub fn watch(size: usize, source: &mut dyn MoveSource, max_moves: usize) -> anyhow::Result<()> {
    let mut game = Game::new(size, None);
    let mut played = 0usize;
    while !game.is_over() && played < max_moves {
        let mover = game.to_move();
        match game.play_ai_turn(source)? {
            AiMove::Played(pt) => {
                played += 1;
                println!("{played:3}. {} {}", mover, format_point(pt, size));
            }
            AiMove::Forfeited => {}
        }
    }
    println!("{}", game.board());
    if game.is_over() {
        println!("Result: {} after {played} moves", game.result());
    } else {
        println!("Stopped after {played} moves: {}", game.result());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_quits_on_q() {
        assert!(matches!(parse_input("q", 9), Input::Quit));
        assert!(matches!(parse_input("  QUIT ", 9), Input::Quit));
    }

    #[test]
    fn input_accepts_coordinates() {
        assert!(matches!(parse_input("D4", 9), Input::Move(5, 3)));
        assert!(matches!(parse_input("j9", 9), Input::Move(0, 8)));
    }

    #[test]
    fn input_flags_garbage() {
        assert!(matches!(parse_input("", 9), Input::Invalid));
        assert!(matches!(parse_input("pass", 9), Input::Invalid));
        assert!(matches!(parse_input("D99", 9), Input::Invalid));
    }
}
