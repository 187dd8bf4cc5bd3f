use std::io::{self, BufRead, Write};

use broadside::{
    draw_fleet, init_logging, Controller, GameConfig, GameError, GameStatus, TerminalRenderer,
    BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIP_LENGTH,
};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameOpts {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE, help = "Rows and columns on the board (1-10)")]
    board_size: usize,
    #[arg(long, default_value_t = NUM_SHIPS)]
    ships: usize,
    #[arg(long, default_value_t = SHIP_LENGTH)]
    ship_length: usize,
    #[arg(long, default_value_t = MAX_PLACEMENT_ATTEMPTS, help = "Placement retries per ship")]
    max_attempts: u32,
}

impl GameOpts {
    fn config(&self) -> GameConfig {
        GameConfig {
            board_size: self.board_size,
            num_ships: self.ships,
            ship_length: self.ship_length,
            max_placement_attempts: self.max_attempts,
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal, one guess per line.
    Play {
        #[command(flatten)]
        opts: GameOpts,
        #[arg(long, help = "Print the fleet layout before the first guess")]
        reveal: bool,
    },
    /// Print a generated fleet layout without playing.
    Layout {
        #[command(flatten)]
        opts: GameOpts,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { opts, reveal } => {
            if let Some(s) = opts.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let controller = Controller::new(&mut opts.rng(), opts.config())?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            if reveal {
                draw_fleet(&mut stdout, controller.state().board())?;
                writeln!(stdout)?;
            }
            play(controller, stdin.lock(), &mut stdout)?;
        }
        Commands::Layout { opts } => {
            let controller = Controller::new(&mut opts.rng(), opts.config())?;
            let mut stdout = io::stdout();
            draw_fleet(&mut stdout, controller.state().board())?;
            for ship in controller.state().fleet().ships() {
                let keys: Vec<_> = ship.cells().iter().map(|c| c.key()).collect();
                writeln!(stdout, "{:?} {}", ship.orientation(), keys.join(" "))?;
            }
        }
    }
    Ok(())
}

fn play<R, W>(mut controller: Controller, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let size = controller.state().config().board_size;
    let mut view = TerminalRenderer::new(size);
    let last_row = broadside::ROW_LABELS[size - 1] as char;
    view.draw(out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "Enter a guess (A0-{}{}), or q to quit: ", last_row, size - 1)?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        match controller.submit(line, &mut view) {
            Ok(_) | Err(GameError::InvalidGuessFormat(_)) => {}
            Err(e) => log::warn!("guess {:?} failed: {}", line, e),
        }
        view.draw(out)?;
        if let GameStatus::Won { .. } = controller.state().status() {
            break;
        }
    }
    Ok(())
}
