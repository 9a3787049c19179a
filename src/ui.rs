#![cfg(feature = "std")]

//! Terminal rendering and coordinate parsing.

use std::fmt::Write;

use crate::{
    board::CellView,
    common::AttackOutcome,
    config::{GRID_SIZE, NUM_SHIPS},
    game::GameState,
};

/// Format a 0-based (row, col) as the player types it, e.g. `B7`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse `A1`..`J10` (column letter, 1-based row) into 0-based (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= GRID_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    if row > GRID_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

fn glyph(view: CellView, has_ship: bool, reveal: bool) -> char {
    match view {
        CellView::Untouched if reveal && has_ship => 'S',
        CellView::Untouched => '.',
        CellView::Miss => 'o',
        CellView::Hit => 'X',
        CellView::Destroyed => '#',
    }
}

/// Framed grid followed by the legend and ship status list.
pub fn render_board(state: &GameState, reveal: bool) -> String {
    let mut out = String::new();
    let board = state.board();
    let cells = board.cells();

    let _ = writeln!(out, "    ╔═══════════════════════╗");
    let _ = write!(out, "    ║  ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    let _ = writeln!(out, " ║");
    let _ = writeln!(out, "    ╠═══════════════════════╣");
    for (r, row) in cells.iter().enumerate() {
        let _ = write!(out, "    ║ {:2}", r + 1);
        for cell in row {
            let _ = write!(out, " {}", glyph(cell.view(), cell.has_ship, reveal));
        }
        let _ = writeln!(out, " ║");
    }
    let _ = writeln!(out, "    ╚═══════════════════════╝");

    if reveal {
        let _ = writeln!(out, "    Legend: S=Ship  X=Hit  #=Destroyed  o=Miss  .=Water");
    } else {
        let _ = writeln!(out, "    Legend: X=Hit  #=Destroyed  o=Miss  .=Unknown");
    }

    let _ = writeln!(out, "\n    Ships:");
    for ship in board.ships() {
        let def = ship.ship_type();
        let status = if ship.is_sunk() {
            "SUNK"
        } else if reveal {
            "Afloat"
        } else {
            "Unknown"
        };
        let _ = writeln!(out, "      {} ({}): {}", def.name(), def.length(), status);
    }
    let _ = writeln!(
        out,
        "    Destroyed {}/{}  Shots {}",
        state.destroyed_count(),
        NUM_SHIPS,
        state.shots()
    );
    out
}

/// Win banner, or `None` while the game is still running.
pub fn render_banner(state: &GameState) -> Option<String> {
    if !state.is_won() {
        return None;
    }
    Some(format!(
        "\n╔══════════════════════════════════════╗\n\
         ║               YOU WIN                ║\n\
         ╚══════════════════════════════════════╝\n\
         All ships destroyed in {} shots.\n",
        state.shots()
    ))
}

/// One-line report of an attack result.
pub fn describe_outcome(coord: (usize, usize), outcome: AttackOutcome) -> String {
    let at = coord_to_string(coord.0, coord.1);
    match outcome {
        AttackOutcome::Miss => format!("{}: miss.", at),
        AttackOutcome::Hit => format!("{}: hit!", at),
        AttackOutcome::Sink(name) => format!("{}: hit! You destroyed the {}!", at, name),
        AttackOutcome::Repeat => format!("{}: already attacked, nothing happens.", at),
        AttackOutcome::GameOver => "The game is over. Type 'new' to play again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coord_accepts_corners_and_lowercase() {
        assert_eq!(parse_coord("A1"), Ok((0, 0)));
        assert_eq!(parse_coord("j10"), Ok((9, 9)));
        assert_eq!(parse_coord(" c4 "), Ok((3, 2)));
    }

    #[test]
    fn parse_coord_rejects_bad_input() {
        assert!(parse_coord("").is_err());
        assert!(parse_coord("A").is_err());
        assert!(parse_coord("K1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A11").is_err());
        assert!(parse_coord("1A").is_err());
        assert!(parse_coord("Ax").is_err());
    }

    #[test]
    fn coord_string_matches_parser() {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                assert_eq!(parse_coord(&coord_to_string(r, c)), Ok((r, c)));
            }
        }
    }
}
