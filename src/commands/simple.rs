//! Code-maker mode
//!
//! The human picks a secret and scores the engine's guesses.

use crate::config::GameConfig;
use crate::core::Response;
use crate::error::MastermindError;
use crate::logging::LogSink;
use crate::output::formatters::{code_swatches, palette_legend, response_pegs};
use crate::solver::{Solver, Status, StrategyType};
use colored::Colorize;
use std::io::{self, Write};
use std::rc::Rc;

/// What the player typed at the feedback prompt
enum Feedback {
    Quit,
    NewGame,
    Score(Response),
}

/// Run the code-maker loop until the player quits
///
/// # Errors
///
/// Returns an error if reading user input or writing the prompt fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(
    strategy_name: &str,
    config: &GameConfig,
    sink: Option<Rc<dyn LogSink>>,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Mastermind - Code Maker Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Think of a secret of {} pegs using these colors:",
        config.code_length()
    );
    println!("  {}\n", palette_legend(config));
    println!("After each guess, enter the score:");
    println!("  - Two numbers, black then white: '2 1' or '2,1'");
    println!("  - Or pegs: B for each exact match, W for each misplaced one ('BBW')");
    println!("  - Or type 'win' if I got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    'game: loop {
        let mut solver = Solver::new(StrategyType::from_name(strategy_name, config), *config);
        if let Some(sink) = &sink {
            solver = solver.with_sink(Rc::clone(sink));
        }

        let mut guess = match solver.first_guess() {
            Ok(guess) => guess,
            Err(e) => {
                println!("{}", format!("❌ {e}").red());
                return Ok(());
            }
        };

        loop {
            println!("────────────────────────────────────────────────────────────");
            match solver.remaining_candidates() {
                Some(count) => println!(
                    "Guess {} of {}: {count} codes still possible",
                    solver.attempts(),
                    config.max_guesses()
                ),
                None => println!("Guess {} of {}", solver.attempts(), config.max_guesses()),
            }
            println!("────────────────────────────────────────────────────────────");
            println!("\n🎯 My guess: {}\n", code_swatches(&guess));

            let response = match read_feedback(config)? {
                Feedback::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Feedback::NewGame => {
                    println!("\n🔄 New game started!\n");
                    continue 'game;
                }
                Feedback::Score(response) => response,
            };

            match solver.guess(response) {
                Ok(result) if result.status == Status::InProgress => {
                    println!("   {}\n", response_pegs(response, config));
                    guess = result.code;
                }
                Ok(result) => {
                    if result.status == Status::Won {
                        println!("\n{}", "═".repeat(60).bright_cyan());
                        println!(
                            "  {} Your code was {}",
                            "🎉 Cracked it!".bright_green().bold(),
                            code_swatches(&result.code)
                        );
                        println!(
                            "  Solved in {} {}",
                            solver.attempts().to_string().bright_cyan().bold(),
                            if solver.attempts() == 1 { "guess" } else { "guesses" }
                        );
                        println!("{}", "═".repeat(60).bright_cyan());
                    } else {
                        println!(
                            "\n{}",
                            format!(
                                "😞 Out of guesses after {}. You win this one!",
                                solver.attempts()
                            )
                            .yellow()
                            .bold()
                        );
                    }

                    let again = get_user_input("Play again? (yes/no)")?.to_lowercase();
                    if matches!(again.as_str(), "yes" | "y") {
                        println!("\n🔄 New game started!\n");
                        continue 'game;
                    }
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Err(MastermindError::InvalidHints(_)) => {
                    println!(
                        "{}",
                        "❌ The hints you entered were inconsistent: no code fits all of them."
                            .red()
                    );
                    println!("   Re-enter the score for this guess, or type 'new'.\n");
                }
                Err(e) => {
                    println!("{}", format!("❌ {e}").red());
                    return Ok(());
                }
            }
        }
    }
}

/// Prompt until the player enters a usable score or a command
fn read_feedback(config: &GameConfig) -> io::Result<Feedback> {
    loop {
        let input = get_user_input("Enter score (e.g. '2 1', 'BBW', 'win', or command)")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Feedback::Quit),
            "new" | "n" => return Ok(Feedback::NewGame),
            "win" | "correct" | "yes" | "solved" => {
                return Ok(Feedback::Score(Response::perfect(config)));
            }
            "" => {}
            _ => match Response::parse(&input, config) {
                Ok(response) => return Ok(Feedback::Score(response)),
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }
}

/// Get user input with a prompt
///
/// End of input reads as `quit`.
pub(crate) fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
