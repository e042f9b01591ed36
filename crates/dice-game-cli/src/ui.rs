//! Interactive terminal front end: prompt loop, menus, and the
//! commitment/reveal display.

use console::style;
use std::io::{self, BufRead, Write};

use dice_game_core::{Commitment, Die, GameError, GameEvent, GameOutcome, Player, Prompt, Reveal, View};

use crate::table::probability_table;

/// Command tokens recognized anywhere a number is solicited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    /// `q`: quit immediately.
    Quit,
    /// `h`: redisplay the probability table.
    Help,
}

impl Command {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "q" => Some(Command::Quit),
            "h" => Some(Command::Help),
            _ => None,
        }
    }
}

/// Terminal implementation of [`Prompt`].
///
/// Keeps a copy of the full starting pool so the `h` command can
/// redisplay the advisory table mid-prompt.
pub struct ConsolePrompt {
    dice: Vec<Die>,
}

impl ConsolePrompt {
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    fn read_line(&self) -> Result<Option<String>, GameError> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // Closed input can never satisfy a prompt.
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl Prompt for ConsolePrompt {
    fn prompt_number(&mut self, message: &str, range: u32) -> Result<u32, GameError> {
        loop {
            print!("{} ", message);
            io::stdout().flush()?;

            let token = match self.read_line()? {
                Some(token) => token,
                None => return Err(GameError::Cancelled),
            };

            match Command::parse(&token) {
                Some(Command::Quit) => return Err(GameError::Cancelled),
                Some(Command::Help) => {
                    println!("{}", probability_table(&self.dice));
                    continue;
                }
                None => {}
            }

            match token.parse::<u32>() {
                Ok(number) if number < range => return Ok(number),
                _ => println!(
                    "Enter a number between 0 and {} (q to quit, h for the table).",
                    range - 1
                ),
            }
        }
    }
}

/// Terminal implementation of [`View`].
pub struct ConsoleView;

impl View for ConsoleView {
    fn show_probability_table(&mut self, dice: &[Die]) {
        println!("Win probability of the row die against the column die:");
        println!("{}", probability_table(dice));
    }

    fn show_dice_menu(&mut self, pool: &[Die]) {
        println!("Available dice:");
        for (index, die) in pool.iter().enumerate() {
            println!("{}: {}", index, die);
        }
        println!("q: quit, h: probability table");
    }

    fn show_roll_menu(&mut self, die: &Die) {
        println!("Faces of {}:", die);
        for (index, face) in die.faces().iter().enumerate() {
            println!("{}: {}", index, face);
        }
        println!("q: quit, h: probability table");
    }

    fn show_commitment(&mut self, range: u32, commitment: &Commitment) {
        println!(
            "I picked a random value in range [0, {}] (HMAC={}).",
            range - 1,
            commitment
        );
    }

    fn show_reveal(&mut self, reveal: &Reveal) {
        println!("My value was {} (secret: {}).", reveal.random_value, reveal.secret);
        println!(
            "Fair number: ({} + {}) % {} = {}.",
            reveal.selected, reveal.random_value, reveal.range, reveal.result
        );
    }

    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::DecidingFirstMove => {
                println!("\nLet's decide who picks a die first.");
                println!("If (your number + mine) mod 2 is 1, you pick first.");
            }
            GameEvent::FirstMove { first } => match first {
                Player::Human => {
                    println!("{}", style("The first move is yours.").green().bold())
                }
                Player::Computer => {
                    println!("{}", style("The first move is mine.").blue().bold())
                }
            },
            GameEvent::DieChosen { by, die } => match by {
                Player::Human => println!("You selected: {}", die),
                Player::Computer => println!("I selected: {}", die),
            },
            GameEvent::RollBegins { roller } => match roller {
                Player::Human => println!("\n{}", style("Your turn to roll").bold()),
                Player::Computer => println!("\n{}", style("My turn to roll").blue().bold()),
            },
            GameEvent::Rolled { roller, face } => match roller {
                Player::Human => println!("Your result: {}", face),
                Player::Computer => println!("My result: {}", face),
            },
            GameEvent::Finished {
                outcome,
                human_face,
                computer_face,
            } => {
                let line = match outcome {
                    GameOutcome::HumanWins => style(format!(
                        "You win! ({} > {})",
                        human_face, computer_face
                    ))
                    .green()
                    .bold(),
                    GameOutcome::ComputerWins => style(format!(
                        "You lose! ({} < {})",
                        human_face, computer_face
                    ))
                    .red()
                    .bold(),
                    GameOutcome::Tie => style(format!(
                        "It's a tie! ({} = {})",
                        human_face, computer_face
                    ))
                    .yellow()
                    .bold(),
                };
                println!("{}", line);
            }
        }
    }
}
