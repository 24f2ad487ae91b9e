use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{new_game, play_match, ComputerPlayer, Party, Player, DEFAULT_GRID_SIZE};
use serde_json::json;

/// Play the computer against itself and print a JSON summary.
#[derive(Parser)]
struct Args {
    /// Seed for the random source shared by setup and play.
    seed1: u64,
    /// Seed mixed into the second player's placement.
    seed2: u64,
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut rng = SmallRng::seed_from_u64(args.seed1);
    let mut rng2 = SmallRng::seed_from_u64(args.seed2);

    let mut engine = new_game(args.size, false)?;
    let mut p1 = ComputerPlayer::new(args.size)?;
    let mut p2 = ComputerPlayer::new(args.size)?;

    // Party two lays out its fleet from its own seed before play begins.
    p1.place_ships(&mut rng, &mut engine, Party::One)?;
    p2.place_ships(&mut rng2, &mut engine, Party::Two)?;

    let summary = play_match(&mut engine, &mut p1, &mut p2, &mut rng)?;

    let winner = match summary.winner {
        Party::One => "player1",
        Party::Two => "player2",
    };
    let result = json!({
        "size": args.size,
        "player1": {"guesses": summary.shots_one, "ships_left": engine.remaining_ships(Party::One)},
        "player2": {"guesses": summary.shots_two, "ships_left": engine.remaining_ships(Party::Two)},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
