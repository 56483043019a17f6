//! Wordle AI - CLI
//!
//! Plays Wordle with a letter-coverage solver, benchmarks it against whole
//! dictionaries, lets a human play in the console, or suggests guesses for a
//! game played elsewhere.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_ai::{
    commands::{RunConfig, Target, play_ai, run_assist, run_prompt, run_sim, run_test_all},
    game::DEFAULT_MAX_TURNS,
    output::{print_play_result, print_test_all_result, write_report},
    solver::StrategyType,
    wordlists::{DictionaryKind, DictionarySource},
};

#[derive(Parser)]
#[command(
    name = "wordle_ai",
    about = "Wordle simulator and letter-coverage solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: alternate (default), coverage, random
    #[arg(short, long, global = true, default_value = "alternate", value_parser = parse_strategy)]
    strategy: StrategyType,

    /// Maximum guesses per game
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_MAX_TURNS, value_parser = parse_max_turns)]
    max_turns: usize,

    /// Read dictionary files from this directory instead of the bundled lists
    #[arg(short, long, global = true)]
    dict_dir: Option<PathBuf>,

    /// Directory benchmark reports are written to
    #[arg(short = 'o', long, global = true, default_value = "Tests")]
    report_dir: PathBuf,

    /// Count repeated letters at half weight when scoring guesses
    #[arg(long, global = true)]
    halve_repeats: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive command prompt (default)
    Prompt,

    /// Let the AI play a single game
    Play {
        /// Dictionary: wordle or scrabble
        dictionary: DictionaryKind,

        /// Word length for a random word, or the word to play against
        target: Option<Target>,
    },

    /// Test the AI on every answer and write a report
    Test {
        /// Dictionary: wordle or scrabble
        dictionary: DictionaryKind,

        /// Only test words of this length
        length: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Play a game yourself
    Sim {
        /// Dictionary: wordle or scrabble
        dictionary: DictionaryKind,

        /// Word length for a random word, or the word to play against
        target: Option<Target>,
    },

    /// Suggest guesses for a game played elsewhere, reading typed feedback
    Assist {
        /// Dictionary: wordle or scrabble
        dictionary: DictionaryKind,

        /// Length of the hidden word (default 5)
        length: Option<usize>,
    },
}

fn parse_strategy(name: &str) -> Result<StrategyType, String> {
    StrategyType::from_name(name).ok_or_else(|| {
        format!(
            "unknown strategy '{name}' (expected one of: {})",
            StrategyType::NAMES.join(", ")
        )
    })
}

fn parse_max_turns(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("turn cap must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            source: self
                .dict_dir
                .clone()
                .map_or(DictionarySource::Embedded, DictionarySource::Directory),
            strategy: self.strategy.with_halved_repeats(self.halve_repeats),
            max_turns: self.max_turns,
            report_dir: self.report_dir.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.run_config();
    log::debug!("{config:?}");

    match cli.command.unwrap_or(Commands::Prompt) {
        Commands::Prompt => run_prompt(&config, &mut io::stdin().lock(), &mut io::stdout()),
        Commands::Play { dictionary, target } => {
            let result = play_ai(&config, dictionary, &target.unwrap_or_default())?;
            print_play_result(&result)?;
            Ok(())
        }
        Commands::Test {
            dictionary,
            length,
            no_progress,
        } => run_test_command(&config, dictionary, length, !no_progress),
        Commands::Sim { dictionary, target } => {
            run_sim(
                &config,
                dictionary,
                &target.unwrap_or_default(),
                &mut io::stdin().lock(),
                &mut io::stdout(),
            )?;
            Ok(())
        }
        Commands::Assist { dictionary, length } => {
            run_assist(
                &config,
                dictionary,
                length,
                &mut io::stdin().lock(),
                &mut io::stdout(),
            )?;
            Ok(())
        }
    }
}

fn run_test_command(
    config: &RunConfig,
    dictionary: DictionaryKind,
    length: Option<usize>,
    show_progress: bool,
) -> Result<()> {
    println!(
        "\nTesting AI on all words in '{}'...",
        dictionary.display_name(length)
    );

    let result = run_test_all(config, dictionary, length, show_progress)?;
    let path = write_report(&config.report_dir, &result).with_context(|| {
        format!(
            "unable to write report to '{}'",
            config.report_dir.display()
        )
    })?;
    print_test_all_result(&result, Some(&path))?;
    Ok(())
}
