//! Line-oriented terminal front end.
//!
//! Reads moves from any [`BufRead`] and writes the board to any [`Write`],
//! so the whole loop runs against in-memory buffers in tests.

use crate::games::tictactoe::{Board, Cell, Coordinate, GameResult, GameState};
use crate::session::{Match, PlayerType};
use anyhow::{Context, Result};
use rand::RngCore;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Parses a human move.
///
/// Accepts `row col` (0-based, space or comma separated) or a single cell
/// number `1`-`9` counted row by row from the top left.
pub fn parse_move(line: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    let numbers = parts
        .iter()
        .map(|p| p.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("Not a number: {:?}", line.trim()))?;

    match numbers.as_slice() {
        [cell @ 1..=9] => Coordinate::from_index(cell - 1)
            .ok_or_else(|| format!("Cell {} is off the board", cell)),
        [row, col] => Coordinate::new(*row, *col)
            .ok_or_else(|| format!("Row and column must be 0-2, got {} {}", row, col)),
        _ => Err("Enter a cell 1-9 or a row and column, e.g. \"1 2\"".to_string()),
    }
}

/// Renders the board with row and column labels.
pub fn render(board: &Board) -> String {
    let mut out = String::from("  0 1 2\n");
    for row in 0..3 {
        out.push_str(&row.to_string());
        for col in 0..3 {
            let symbol = Coordinate::new(row, col)
                .map(|coord| match board.get(coord) {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                })
                .unwrap_or_default();
            out.push(' ');
            out.push_str(&symbol);
        }
        out.push('\n');
    }
    out
}

/// The single cell that differs between two consecutive states.
fn placed_cell(before: &GameState, after: &GameState) -> Option<Coordinate> {
    Coordinate::ALL
        .into_iter()
        .find(|&coord| before.board().get(coord) != after.board().get(coord))
}

/// Reads one line; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    Ok((read > 0).then_some(line))
}

/// Drives `game` until the player declines another round or input ends.
///
/// Returns the results of every finished round, in order.
#[instrument(skip_all, fields(round = game.round()))]
pub fn run(
    game: &mut Match,
    rng: &mut dyn RngCore,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<Vec<GameResult>> {
    let mut results = Vec::new();

    loop {
        let Some(result) = play_round(game, rng, &mut input, &mut output)? else {
            info!(rounds = results.len(), "Input closed");
            return Ok(results);
        };
        results.push(result);

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => game.restart(rng),
            _ => {
                info!(rounds = results.len(), "Session finished");
                return Ok(results);
            }
        }
    }
}

/// Plays one round. `None` if input ended before the game did.
fn play_round(
    game: &mut Match,
    rng: &mut dyn RngCore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<GameResult>> {
    loop {
        let state = *game.state();
        if state.result().is_terminal() {
            write!(output, "{}", render(state.board()))?;
            writeln!(output, "{}", state.result())?;
            return Ok(Some(state.result()));
        }

        if game.player_type(state.turn()) == PlayerType::Automated {
            let after = *game.play_automated(rng);
            if let Some(coord) = placed_cell(&state, &after) {
                writeln!(output, "{} plays {}", state.turn(), coord)?;
            }
            continue;
        }

        write!(output, "{}", render(state.board()))?;
        write!(output, "Current turn: {}. Your move: ", state.turn())?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let coord = match parse_move(&line) {
            Ok(coord) => coord,
            Err(message) => {
                debug!(%message, "Unparseable move");
                writeln!(output, "{}", message)?;
                continue;
            }
        };
        if let Err(err) = game.play_human(coord) {
            writeln!(output, "{}", err)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, Mark};
    use crate::session::{MatchSetup, PlayerCount};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    #[test]
    fn test_parse_move_forms() {
        assert_eq!(parse_move("1 2"), Ok(Coordinate::new(1, 2).unwrap()));
        assert_eq!(parse_move("2,0\n"), Ok(Coordinate::new(2, 0).unwrap()));
        assert_eq!(parse_move("5"), Ok(Coordinate::new(1, 1).unwrap()));
        assert_eq!(parse_move("9"), Ok(Coordinate::new(2, 2).unwrap()));
        assert!(parse_move("0").is_err());
        assert!(parse_move("3 1").is_err());
        assert!(parse_move("a b").is_err());
        assert!(parse_move("").is_err());
    }

    #[test]
    fn test_render_labels() {
        let board = Board::new()
            .place(Coordinate::new(1, 2).unwrap(), Mark::O)
            .unwrap();
        assert_eq!(render(&board), "  0 1 2\n0 . . .\n1 . . O\n2 . . .\n");
    }

    #[test]
    fn test_two_player_round_then_quit() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = MatchSetup::new(PlayerCount::Two, Difficulty::Easy, None).resolve(&mut rng);
        // X takes the top row; the occupied retry is reported and ignored.
        let input = Cursor::new("1\n4\n4\n2\n5\n3\nn\n");
        let mut output = Vec::new();

        let results = run(&mut game, &mut rng, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(results, vec![GameResult::Win(Mark::X)]);
        assert!(text.contains("already occupied"));
        assert!(text.contains("The winner is X!"));
        assert!(text.contains("Play again?"));
    }

    #[test]
    fn test_end_of_input_mid_game() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = MatchSetup::new(PlayerCount::Two, Difficulty::Easy, None).resolve(&mut rng);
        let results = run(&mut game, &mut rng, Cursor::new("5\n"), Vec::new()).unwrap();

        assert!(results.is_empty());
        assert_eq!(game.state().board().count(Mark::X), 1);
    }

    #[test]
    fn test_automated_side_moves_between_prompts() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = MatchSetup::new(PlayerCount::One, Difficulty::Impossible, Some(Mark::X))
            .resolve(&mut rng);
        let mut output = Vec::new();

        run(&mut game, &mut rng, Cursor::new("1\n"), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(game.state().board().count(Mark::O), 1);
        assert!(text.contains("O plays (1, 1)"));
    }
}
