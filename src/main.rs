use std::io;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use skirmish::{cli::run_session, init_logging, Game, GameConfig, SinkMarking};

#[derive(Parser)]
#[command(author, version, about = "Sink three hidden ships on a 10x10 grid", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show ship positions on the board")]
    reveal: bool,
    #[arg(long, value_enum, default_value_t = SinkMarking::WholeShip)]
    sink_marking: SinkMarking,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (layouts will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = GameConfig::default().with_sink_marking(cli.sink_marking);
    let mut game = Game::new(&mut rng, config).map_err(|e| anyhow::anyhow!(e))?;

    let stdin = io::stdin();
    let summary = run_session(&mut game, &mut rng, stdin.lock(), io::stdout(), cli.reveal)?;
    println!(
        "Thanks for playing: {} game(s) won, {} shots fired.",
        summary.games_won, summary.shots
    );
    Ok(())
}
