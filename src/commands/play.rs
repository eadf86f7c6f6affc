//! Code-breaker mode
//!
//! The engine hides a secret and the human guesses it.

use super::simple::get_user_input;
use crate::codebook::pick_random;
use crate::config::GameConfig;
use crate::core::Code;
use crate::logging::LogSink;
use crate::output::formatters::{code_swatches, palette_legend, response_pegs};
use crate::solver::{Oracle, Status};
use colored::Colorize;
use rand::Rng;
use std::io;
use std::rc::Rc;

/// Choose the secret for a new game
///
/// Draws from `presets` when any are given, otherwise generates a uniform
/// random code.
pub fn choose_secret<R: Rng + ?Sized>(
    presets: &[Code],
    config: &GameConfig,
    rng: &mut R,
) -> Code {
    pick_random(presets, rng)
        .cloned()
        .unwrap_or_else(|| Code::random(config, rng))
}

/// Run the code-breaker loop until the player quits
///
/// # Errors
///
/// Returns an error if reading user input or writing the prompt fails.
pub fn run_play<R: Rng + ?Sized>(
    config: &GameConfig,
    presets: &[Code],
    rng: &mut R,
    sink: Option<Rc<dyn LogSink>>,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Mastermind - Code Breaker Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "I've picked a secret of {} pegs. Colors may repeat:",
        config.code_length()
    );
    println!("  {}\n", palette_legend(config));
    println!("Enter guesses as digits ('0123') or color names ('green red blue yellow').");
    println!("● is a right color in the right place, ○ a right color in the wrong place.");
    println!("Commands: 'quit' to exit, 'new' for new game, 'reveal' to give up\n");

    'game: loop {
        let secret = choose_secret(presets, config, rng);
        let mut oracle = match Oracle::new(secret.clone(), *config) {
            Ok(oracle) => oracle,
            Err(e) => {
                println!("{}", format!("❌ {e}").red());
                return Ok(());
            }
        };
        if let Some(sink) = &sink {
            oracle = oracle.with_sink(Rc::clone(sink));
        }

        loop {
            let prompt = format!(
                "Guess {} of {}",
                oracle.attempts() + 1,
                config.max_guesses()
            );
            let input = get_user_input(&prompt)?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    println!("\n🔄 New game started!\n");
                    continue 'game;
                }
                "reveal" => {
                    println!("The secret was {}\n", code_swatches(&secret));
                    continue 'game;
                }
                "" => continue,
                _ => {}
            }

            let guess = match Code::parse(&input, config) {
                Ok(guess) => guess,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            };

            let verdict = match oracle.validate(&guess) {
                Ok(verdict) => verdict,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            };

            if let Some(response) = verdict.response {
                println!(
                    "   {}  {}",
                    code_swatches(&guess),
                    response_pegs(response, config)
                );
            }

            match verdict.status {
                Status::Won => {
                    println!(
                        "\n{} Cracked in {} {}\n",
                        "🎉".bright_green(),
                        oracle.attempts().to_string().bright_cyan().bold(),
                        if oracle.attempts() == 1 { "guess" } else { "guesses" }
                    );
                }
                Status::Lost => {
                    println!(
                        "\n{} The secret was {}\n",
                        "😞 Out of guesses.".yellow().bold(),
                        code_swatches(&secret)
                    );
                }
                Status::NotStarted | Status::InProgress => continue,
            }

            let again = get_user_input("Play again? (yes/no)")?.to_lowercase();
            if matches!(again.as_str(), "yes" | "y") {
                println!("\n🔄 New game started!\n");
                continue 'game;
            }
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}
