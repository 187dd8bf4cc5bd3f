use broadside::{init_logging_with, Controller, GameConfig, GameStatus, NullRenderer, ROW_LABELS};
use clap::Parser;
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Plays one game by firing at every cell in random order and prints a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = GameConfig::default().board_size)]
    board_size: usize,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the JSON summary; only warnings go to stderr.
    init_logging_with(Some(log::LevelFilter::Warn));
    let args = Args::parse();

    let config = GameConfig {
        board_size: args.board_size,
        ..GameConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut controller = Controller::new(&mut rng, config)?;

    let size = config.board_size;
    let mut guesses: Vec<String> = (0..size * size)
        .map(|i| format!("{}{}", ROW_LABELS[i / size] as char, i % size))
        .collect();
    guesses.shuffle(&mut rng);

    let mut view = NullRenderer;
    let mut hits = 0u32;
    for guess in &guesses {
        let turn = controller.submit(guess, &mut view)?;
        if turn.outcome.is_hit() {
            hits += 1;
        }
        if let GameStatus::Won { .. } = turn.status {
            break;
        }
    }

    let state = controller.state();
    let ships: Vec<Vec<String>> = state
        .fleet()
        .ships()
        .iter()
        .map(|s| s.cells().iter().map(|c| c.key()).collect())
        .collect();
    let result = json!({
        "seed": args.seed,
        "guesses": state.guesses(),
        "hits": hits,
        "won": matches!(state.status(), GameStatus::Won { .. }),
        "ships": ships,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
