#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{
    init_logging, new_game, play_match, CliPlayer, ComputerPlayer, GameEngine, MatchSummary,
    Party, Player, DEFAULT_GRID_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer, or against a friend on the same terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE, help = "Grid size, 10 to 15")]
        size: usize,
        #[arg(long, help = "Two human players take turns at the keyboard")]
        two_player: bool,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play itself.
    Auto {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE, help = "Grid size, 10 to 15")]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            two_player,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let mut engine = new_game(size, two_player)?;
            println!("Welcome to Battleship!");

            let mut one = CliPlayer::stdio("Player 1");
            let mut two: Box<dyn Player> = if two_player {
                Box::new(CliPlayer::stdio("Player 2"))
            } else {
                println!("\nComputer is placing ships...");
                Box::new(ComputerPlayer::new(size)?)
            };
            let summary = play_match(&mut engine, &mut one, two.as_mut(), &mut rng)?;
            report(&engine, &summary, two_player);
        }
        Commands::Auto { size, seed } => {
            let mut rng = make_rng(seed);
            let mut engine = new_game(size, false)?;
            let mut one = ComputerPlayer::new(size)?;
            let mut two = ComputerPlayer::new(size)?;
            let summary = play_match(&mut engine, &mut one, &mut two, &mut rng)?;
            report(&engine, &summary, false);
        }
    }
    println!("\nThanks for playing!");
    Ok(())
}

#[cfg(feature = "std")]
fn report(engine: &GameEngine, summary: &MatchSummary, two_player: bool) {
    println!("\nPlayer 1's Board:\n{}", engine.render(Party::One, true));
    println!("\nPlayer 2's Board:\n{}", engine.render(Party::Two, true));
    println!(
        "\nShots fired: Player 1 {}, Player 2 {}",
        summary.shots_one, summary.shots_two
    );
    if summary.resigned {
        println!("Game aborted!");
    }
    match summary.winner {
        Party::One => println!("Congratulations! Player 1 won!"),
        Party::Two if two_player => println!("Game Over! Player 2 won!"),
        Party::Two => println!("Game Over! Computer won!"),
    }
}
