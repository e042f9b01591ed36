//! Dice Game CLI
//!
//! Interactive, provably-fair non-transitive dice game: every random
//! decision runs through a commit-reveal exchange the user can verify.
//!
//! Usage: `dice-game 2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7`

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use dice_game_core::{parse_dice, DiceGame};

mod table;
mod ui;

use ui::{ConsolePrompt, ConsoleView};

#[derive(Parser)]
#[command(
    name = "dice-game",
    version,
    about = "Provably-fair non-transitive dice game"
)]
struct Args {
    /// Die face lists, comma-separated (at least 3 dice of 6+ faces
    /// each), e.g. 2,2,4,4,9,9
    #[arg(required = true, value_name = "FACES")]
    dice: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let dice = match parse_dice(&args.dice) {
        Ok(dice) => dice,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(count = dice.len(), faces = dice[0].len(), "dice validated");

    let mut prompt = ConsolePrompt::new(dice.clone());
    let mut view = ConsoleView;
    let mut game = DiceGame::new(dice);
    match game.play(&mut prompt, &mut view) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) if error.is_cancellation() => {
            println!("Bye.");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
