//! Tests for the move engine transitions.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::{
    Cell, Coordinate, Difficulty, GameResult, GameState, IllegalMoveError, Mark, rules,
};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).expect("on the board")
}

fn replay(moves: &[(usize, usize)]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &(r, c)| {
        state.apply_player_move(at(r, c)).expect("Valid move")
    })
}

#[test]
fn test_fresh_game_is_neither_won_nor_drawn() {
    let state = GameState::new();
    assert_eq!(rules::detect_winner(state.board()), None);
    assert!(!rules::detect_draw(state.board()));
    assert_eq!(state.turn(), Mark::X);
    assert_eq!(state.result(), GameResult::InProgress);
}

#[test]
fn test_human_vs_easy_scenario() {
    let mut rng = StdRng::seed_from_u64(2024);

    let state = GameState::new().apply_player_move(at(0, 0)).unwrap();
    let state = state.apply_automated_move(Difficulty::Easy, &mut rng);
    assert_eq!(state.board().count(Mark::O), 1);

    // The opponent may have taken the centre; fall back to another cell.
    let human = if state.board().is_legal(at(1, 1)) {
        at(1, 1)
    } else {
        at(2, 2)
    };
    let state = state.apply_player_move(human).unwrap();

    assert_eq!(9 - state.board().empty_cells().len(), 3);
    assert_eq!(state.turn(), Mark::O);
    assert_eq!(state.result(), GameResult::InProgress);
}

#[test]
fn test_occupied_cell_fails_and_state_unchanged() {
    let state = replay(&[(1, 1), (0, 0)]);
    let snapshot = state;

    for coord in [at(1, 1), at(0, 0)] {
        assert_eq!(
            state.apply_player_move(coord),
            Err(IllegalMoveError::CellOccupied(coord))
        );
    }
    assert_eq!(state, snapshot);
}

#[test]
fn test_turn_alternates_each_accepted_move() {
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)];
    let mut state = GameState::new();
    let mut expected = Mark::X;

    for (r, c) in moves {
        assert_eq!(state.turn(), expected);
        state = state.apply_player_move(at(r, c)).unwrap();
        assert_eq!(state.board().get(at(r, c)), Cell::Occupied(expected));
        expected = expected.opponent();
    }
}

#[test]
fn test_terminal_states_reject_further_moves() {
    // X wins the left column.
    let won = replay(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
    assert_eq!(won.result(), GameResult::Win(Mark::X));

    // X O X / X O O / O X X
    let drawn = replay(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert_eq!(drawn.result(), GameResult::Draw);

    let mut rng = StdRng::seed_from_u64(0);
    for state in [won, drawn] {
        for coord in state.board().empty_cells() {
            assert_eq!(
                state.apply_player_move(coord),
                Err(IllegalMoveError::GameOver(state.result()))
            );
        }
        for difficulty in [Difficulty::Easy, Difficulty::Intermediate, Difficulty::Impossible] {
            assert_eq!(state.apply_automated_move(difficulty, &mut rng), state);
        }
    }
}

#[test]
fn test_winning_ninth_move_is_a_win_not_a_draw() {
    // X O X / O X O / O X X: X's last move completes the diagonal.
    let state = replay(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert!(state.board().is_full());
    assert_eq!(state.result(), GameResult::Win(Mark::X));
}

#[test]
fn test_error_messages() {
    let state = replay(&[(1, 1)]);
    let err = state.apply_player_move(at(1, 1)).unwrap_err();
    assert_eq!(err.to_string(), "Cell (1, 1) is already occupied");
}

#[test]
fn test_state_serializes_round_trip() {
    let state = replay(&[(0, 0), (2, 2)]);
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_won_board_claiming_in_progress_is_rejected() {
    let x = r#"{"Occupied":"X"}"#;
    let o = r#"{"Occupied":"O"}"#;
    let e = r#""Empty""#;
    let cells = [x, x, x, o, o, e, e, e, e].join(",");
    let json = format!(r#"{{"board":{{"cells":[{}]}},"turn":"O","result":"InProgress"}}"#, cells);

    assert!(serde_json::from_str::<GameState>(&json).is_err());

    let honest = json.replace(r#""InProgress""#, r#"{"Win":"X"}"#);
    let state: GameState = serde_json::from_str(&honest).unwrap();
    assert_eq!(
        state.apply_player_move(at(1, 2)),
        Err(IllegalMoveError::GameOver(GameResult::Win(Mark::X)))
    );
}

#[test]
fn test_unbalanced_marks_are_rejected() {
    let x = r#"{"Occupied":"X"}"#;
    let e = r#""Empty""#;
    let cells = [x, e, x, e, e, e, e, e, e].join(",");
    let json = format!(r#"{{"board":{{"cells":[{}]}},"turn":"O","result":"InProgress"}}"#, cells);

    let err = serde_json::from_str::<GameState>(&json).unwrap_err();
    assert!(err.to_string().contains("Invalid game state"));
}
