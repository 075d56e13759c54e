//! linkage - command-line driver for the More/Less domino engine.

mod cli;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Preset};
use linkage_core::{Board, Inventory, Side};
use linkage_engine::{perft, perft_cached, perft_parallel, PerftCache};
use linkage_eval::RankWeights;
use linkage_game::self_play;
use linkage_search::MoveSelector;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Selfplay {
            games,
            seed,
            weights,
            preset,
            quiet,
        } => run_selfplay(games, seed, weights.as_deref(), preset, quiet),
        Command::Perft {
            depth,
            parallel,
            cached,
        } => run_perft(depth, parallel, cached),
    }
}

fn load_weights(path: Option<&Path>, preset: Option<Preset>) -> Result<RankWeights> {
    if let Some(path) = path {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading weights from {}", path.display()))?;
        let weights = RankWeights::from_toml_str(&source)
            .with_context(|| format!("parsing weights in {}", path.display()))?;
        debug!(?weights, "loaded weights");
        return Ok(weights);
    }
    Ok(match preset.unwrap_or(Preset::Default) {
        Preset::Default => RankWeights::default(),
        Preset::Aggressive => RankWeights::aggressive(),
        Preset::Cautious => RankWeights::cautious(),
    })
}

fn run_selfplay(
    games: u32,
    seed: Option<u64>,
    weights: Option<&Path>,
    preset: Option<Preset>,
    quiet: bool,
) -> Result<()> {
    let selector = MoveSelector::new(load_weights(weights, preset)?);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    info!(games, ?seed, "starting self-play");

    let mut more_wins = 0u32;
    let mut less_wins = 0u32;
    let mut total_regions = 0usize;
    let mut total_skips = 0u32;

    for game in 1..=games {
        let summary = self_play(&selector, &mut rng)
            .with_context(|| format!("game {game} stalled before the board was finished"))?;

        match summary.winner {
            Side::More => more_wins += 1,
            Side::Less => less_wins += 1,
        }
        total_regions += summary.stats.regions;
        total_skips += summary.stats.skips;

        if !quiet {
            println!(
                "game {game}: {} wins with {} regions ({} placements, {} skips)",
                summary.winner, summary.stats.regions, summary.stats.placements, summary.stats.skips
            );
            println!("{}", summary.board);
        }
    }

    if games > 0 {
        println!(
            "More {more_wins} - Less {less_wins}, average {:.2} regions, {total_skips} skips",
            total_regions as f64 / games as f64
        );
    }
    Ok(())
}

fn run_perft(depth: u32, parallel: bool, cached: bool) -> Result<()> {
    let board = Board::new();
    let inventory = Inventory::new();
    let start = Instant::now();

    let nodes = if parallel {
        perft_parallel(&board, None, &inventory, depth)
    } else if cached {
        let mut cache = PerftCache::new();
        let nodes = perft_cached(&board, None, &inventory, depth, &mut cache);
        debug!(entries = cache.len(), "perft cache size");
        nodes
    } else {
        perft(&board, None, &inventory, depth)
    };

    let elapsed = start.elapsed();
    println!("perft({depth}) = {nodes}");
    info!(depth, nodes, elapsed_ms = elapsed.as_millis() as u64, "perft done");
    Ok(())
}
