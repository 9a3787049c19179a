use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;
use skirmish::{Game, GameConfig, GRID_SIZE};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = Game::new(&mut rng, GameConfig::default()).map_err(|e| anyhow::anyhow!(e))?;
    let ships: Vec<_> = game
        .board()
        .ships()
        .map(|s| {
            json!({
                "name": s.ship_type().name(),
                "length": s.len(),
                "cells": s.cells().map(|(r, c)| [r, c]).collect::<Vec<_>>(),
            })
        })
        .collect();

    let mut targets: Vec<(usize, usize)> = (0..GRID_SIZE)
        .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
        .collect();
    targets.shuffle(&mut rng);
    for (r, c) in targets {
        if game.is_won() {
            break;
        }
        game.attack(r, c).map_err(|e| anyhow::anyhow!(e))?;
    }

    let result = json!({
        "seed": seed,
        "shots": game.shots(),
        "won": game.is_won(),
        "destroyed_ships": game.destroyed_count(),
        "ships": ships,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
