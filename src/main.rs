//! Mastermind - CLI
//!
//! Play Mastermind in the terminal on either side of the board, or measure
//! the solving strategies. The default strategy is Knuth's minimax, which
//! breaks any 6-color, 4-peg code within 5 guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    codebook::load_from_file,
    commands::{
        analyze_guess, parse_history_entry, print_test_all_statistics, run_benchmark, run_play,
        run_simple, run_test_all, solve_code,
    },
    config::GameConfig,
    core::Code,
    logging::{LogSink, TracingSink, WriterSink},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyType},
};
use std::fs::OpenOptions;
use std::path::Path;
use std::rc::Rc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code maker and code breaker with a minimax solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: knuth (default), medium, easy
    #[arg(short, long, global = true, default_value = "knuth")]
    strategy: String,

    /// Number of colors in play
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_TOTAL_COLORS)]
    colors: u8,

    /// Pegs per code
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_MAX_GUESSES)]
    max_guesses: u32,

    /// Show solver diagnostics
    #[arg(short, long, global = true)]
    debug: bool,

    /// Append the game log to this file (e.g. mastermind.log)
    #[arg(long, global = true)]
    log_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Break a secret picked by the computer (default)
    Play {
        /// File of preset secrets, one per line
        #[arg(short = 'f', long)]
        codes: Option<String>,

        /// Seed for picking the secret
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pick a secret and let the computer break it
    Simple,

    /// Solve a specific secret code
    Solve {
        /// The secret, as digits ("0123") or color names
        code: String,

        /// Show candidate counts per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the possible codes
    Analyze {
        /// Guess to analyze
        code: String,

        /// Earlier turns as code=response, e.g. 0011=1,0
        #[arg(short, long)]
        after: Vec<String>,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for the random secrets
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = GameConfig::new(cli.colors, cli.length, cli.max_guesses)?;
    info!(
        colors = config.total_colors(),
        length = config.code_length(),
        max_guesses = config.max_guesses(),
        "Game configured"
    );

    let sink = open_game_log(cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        codes: None,
        seed: None,
    });

    match command {
        Commands::Play { codes, seed } => run_play_command(&config, codes.as_deref(), seed, sink),
        Commands::Simple => run_simple(&cli.strategy, &config, Some(sink)).map_err(Into::into),
        Commands::Solve { code, verbose } => {
            run_solve_command(&cli.strategy, &code, verbose, &config, sink)
        }
        Commands::Analyze { code, after } => run_analyze_command(&code, &after, &config),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&cli.strategy, count, seed, &config)
        }
        Commands::TestAll { limit } => run_test_all_command(&cli.strategy, limit, &config),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` applies unless `--debug` is given
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Game events go to the log file when given, otherwise to tracing
fn open_game_log(path: Option<&str>) -> Result<Rc<dyn LogSink>> {
    let Some(path) = path else {
        return Ok(Rc::new(TracingSink));
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {path}"))?;
    info!(path, "Game log enabled");

    Ok(Rc::new(WriterSink::new(file)))
}

fn run_play_command(
    config: &GameConfig,
    codes: Option<&str>,
    seed: Option<u64>,
    sink: Rc<dyn LogSink>,
) -> Result<()> {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let presets = match codes {
        Some(path) => {
            let presets = load_from_file(Path::new(path), config)
                .with_context(|| format!("cannot read codes from {path}"))?;
            if presets.is_empty() {
                anyhow::bail!(
                    "{path} holds no codes for {} colors and {} pegs",
                    config.total_colors(),
                    config.code_length()
                );
            }
            presets
        }
        None => Vec::new(),
    };

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    run_play(config, &presets, &mut rng, Some(sink))?;
    Ok(())
}

fn run_solve_command(
    strategy_name: &str,
    code: &str,
    verbose: bool,
    config: &GameConfig,
    sink: Rc<dyn LogSink>,
) -> Result<()> {
    let secret = Code::parse(code, config)?;
    let strategy = StrategyType::from_name(strategy_name, config);
    let mut solver = Solver::new(strategy, *config).with_sink(sink);

    let result = solve_code(&secret, &mut solver)?;
    print_solve_result(&result, config, verbose);
    Ok(())
}

fn run_analyze_command(code: &str, after: &[String], config: &GameConfig) -> Result<()> {
    let guess = Code::parse(code, config)?;
    let history = after
        .iter()
        .map(|entry| parse_history_entry(entry, config))
        .collect::<Result<Vec<_>, _>>()?;

    let result = analyze_guess(&guess, &history, config)?;
    print_analysis_result(&result, config);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    count: usize,
    seed: u64,
    config: &GameConfig,
) -> Result<()> {
    println!("Running benchmark on {count} random secrets (seed {seed})...");

    let result = run_benchmark(strategy_name, config, count, seed)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    strategy_name: &str,
    limit: Option<usize>,
    config: &GameConfig,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets",
        limit.map_or(config.universe_size(), |n| n.min(config.universe_size()))
    );
    println!("Strategy: {strategy_name}");
    println!();

    let stats = run_test_all(strategy_name, config, limit, true)?;
    print_test_all_statistics(&stats);

    if stats.has_regressions() {
        anyhow::bail!(
            "{} secrets exceeded the minimax bound",
            stats.regressions.len()
        );
    }
    Ok(())
}
