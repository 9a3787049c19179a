#![cfg(feature = "std")]

//! Interactive line-based session driving a [`Game`].

use std::io::{BufRead, Write};

use log::debug;
use rand::Rng;

use crate::{
    game::Game,
    ui::{describe_outcome, parse_coord, render_banner, render_board},
};

/// Totals reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_won: usize,
    pub shots: usize,
}

enum Command {
    Attack(usize, usize),
    New,
    Reveal,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    match line.trim().to_ascii_lowercase().as_str() {
        "new" | "n" => Ok(Command::New),
        "reveal" | "r" => Ok(Command::Reveal),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => parse_coord(other).map(|(r, c)| Command::Attack(r, c)),
    }
}

fn print_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\nCommands:")?;
    writeln!(out, "  A1..J10   attack a cell (column letter, row number)")?;
    writeln!(out, "  new       start a new game")?;
    writeln!(out, "  reveal    toggle showing ship positions")?;
    writeln!(out, "  help      show this message")?;
    writeln!(out, "  quit      leave")
}

/// Run the read-attack-render loop until `quit` or end of input.
pub fn run_session<R, I, W>(
    game: &mut Game,
    rng: &mut R,
    input: I,
    mut out: W,
    mut reveal: bool,
) -> anyhow::Result<SessionSummary>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();
    writeln!(out, "Sink all three ships. Type 'help' for commands.")?;
    write!(out, "{}", render_board(game.state(), reveal))?;

    let mut lines = input.lines();
    loop {
        write!(out, "\nTarget: ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Attack(r, c)) => {
                let was_won = game.is_won();
                let outcome = game.attack(r, c).map_err(|e| anyhow::anyhow!(e))?;
                if outcome.is_effective() {
                    summary.shots += 1;
                }
                writeln!(out, "{}", describe_outcome((r, c), outcome))?;
                write!(out, "{}", render_board(game.state(), reveal))?;
                if !was_won && game.is_won() {
                    summary.games_won += 1;
                    if let Some(banner) = render_banner(game.state()) {
                        write!(out, "{}", banner)?;
                    }
                    writeln!(out, "Type 'new' to play again or 'quit' to leave.")?;
                }
            }
            Ok(Command::New) => {
                game.restart(rng).map_err(|e| anyhow::anyhow!(e))?;
                writeln!(out, "New game started.")?;
                write!(out, "{}", render_board(game.state(), reveal))?;
            }
            Ok(Command::Reveal) => {
                reveal = !reveal;
                write!(out, "{}", render_board(game.state(), reveal))?;
            }
            Ok(Command::Help) => print_help(&mut out)?,
            Ok(Command::Quit) => break,
            Err(msg) => {
                debug!("rejected input {:?}", line.trim());
                writeln!(out, "{}", msg)?;
            }
        }
    }
    Ok(summary)
}
