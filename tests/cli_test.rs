use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use skirmish::cli::{run_session, SessionSummary};
use skirmish::ui::coord_to_string;
use skirmish::{Board, Game, GameConfig, Orientation, TOTAL_SHIP_CELLS};

fn fixed_game() -> Game {
    let mut board = Board::new();
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    board.place(1, 2, 0, Orientation::Vertical).unwrap();
    board.place(2, 9, 8, Orientation::Horizontal).unwrap();
    Game::from_board(board, GameConfig::default())
}

fn play(game: &mut Game, script: &str, reveal: bool) -> (SessionSummary, String) {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut out = Vec::new();
    let summary = run_session(game, &mut rng, Cursor::new(script.to_string()), &mut out, reveal)
        .expect("session failed");
    (summary, String::from_utf8(out).expect("non utf8 output"))
}

#[test]
fn test_session_win_banner() {
    let mut game = fixed_game();
    let ship_cells: Vec<_> = game
        .board()
        .ships()
        .flat_map(|s| s.cells().collect::<Vec<_>>())
        .collect();
    let mut script: String = ship_cells
        .iter()
        .map(|&(r, c)| format!("{}\n", coord_to_string(r, c)))
        .collect();
    script.push_str("quit\n");

    let (summary, out) = play(&mut game, &script, false);
    assert!(game.is_won());
    assert_eq!(summary.games_won, 1);
    assert_eq!(summary.shots, TOTAL_SHIP_CELLS);
    assert!(out.contains("YOU WIN"));
    assert!(out.contains("You destroyed the Destroyer!"));
    assert_eq!(out.matches("YOU WIN").count(), 1);
}

#[test]
fn test_session_reports_bad_input_and_repeats() {
    let mut game = fixed_game();
    let (summary, out) = play(&mut game, "Z9\nE5\ne5\nhelp\n", false);
    assert!(out.contains("Column 'Z' out of bounds"));
    assert!(out.contains("E5: miss."));
    assert!(out.contains("E5: already attacked"));
    assert!(out.contains("Commands:"));
    assert!(!out.contains("YOU WIN"));
    assert_eq!(summary.shots, 1);
    assert_eq!(game.shots(), 1);
}

#[test]
fn test_session_reveal_toggle_and_restart() {
    let mut game = fixed_game();
    let (_, hidden) = play(&mut game, "quit\n", false);
    assert!(hidden.contains("║  1 . . . . . . . . . . ║"));

    let (_, shown) = play(&mut game, "reveal\nquit\n", false);
    assert!(shown.contains("║  1 S S S S . . . . . . ║"));
    assert!(shown.contains("║ 10 . . . . . . . . S S ║"));

    game.attack(5, 5).unwrap();
    let (_, out) = play(&mut game, "new\n", true);
    assert!(out.contains("New game started."));
    assert_eq!(game.shots(), 0);
    assert_eq!(game.destroyed_count(), 0);
}
