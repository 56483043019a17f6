//! Interactive command prompt
//!
//! Reads `play`, `test`, `assist` and `quit` commands line by line. Bad input and
//! failed commands print an error and prompt again; only I/O failures on
//! the console end the loop early.

use super::{RunConfig, Target, play_ai, run_assist, run_test_all};
use crate::output::{write_play_result, write_report, write_test_all_result};
use crate::wordlists::DictionaryKind;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use thiserror::Error;

pub const HELP_MESSAGE: &str = r"
================ Wordle AI - Help ================

==== DICTIONARIES ====

-- Wordle --
Description: A sample of the Wordle answer and guess lists (5-letter words).

-- Scrabble --
Description: A Scrabble word list with words of various lengths.


==== COMMANDS ====

-- play --
Description: Has the AI play a single game and prints the full game out to the console.
Syntax: play <Dictionary> [Word Length or Word]
(REQUIRED) <Dictionary>  : One of the two dictionaries listed above.
(OPTIONAL) [Word Length] : If specified, picks a random word of the specified length.
(OPTIONAL) [Word]        : If specified, plays the AI against the given word.
Ex: play Wordle
Ex: play Scrabble heaps

-- test --
Description: Tests the AI against every word in a dictionary and writes the statistics to a file.
Syntax: test <Dictionary> [Word Length]
(REQUIRED) <Dictionary>  : One of the two dictionaries listed above.
(OPTIONAL) [Word Length] : If specified, only tests words of the specified length.
Ex: test Wordle
Ex: test Scrabble 5

-- assist --
Description: Suggests guesses for a game played elsewhere; type back the feedback it shows.
Syntax: assist <Dictionary> [Word Length]
(REQUIRED) <Dictionary>  : One of the two dictionaries listed above.
(OPTIONAL) [Word Length] : Length of the hidden word (default 5).
Feedback: one mark per letter, O (correct), - (present), X (absent).
Ex: assist Wordle
Ex: assist Scrabble 6

-- help --
Description: Shows this message.

-- quit --
Description: Terminates the program.

==================================================
";

/// A parsed prompt command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play {
        kind: DictionaryKind,
        target: Target,
    },
    Test {
        kind: DictionaryKind,
        length: Option<usize>,
    },
    Assist {
        kind: DictionaryKind,
        length: Option<usize>,
    },
    Help,
    Quit,
}

/// Why a prompt line could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("No command was specified.")]
    NoCommand,

    #[error("Invalid command specified: '{0}'.")]
    InvalidCommand(String),

    #[error("No dictionary was specified.")]
    NoDictionary,

    #[error("Too many arguments provided.")]
    TooManyArguments,

    #[error("Invalid dictionary specified: '{0}'.")]
    InvalidDictionary(String),

    #[error("Invalid argument specified: '{0}'.")]
    InvalidArgument(String),
}

/// Parse one prompt line
///
/// Syntax: `play <dictionary> [length|word]`, `test <dictionary> [length]`,
/// `assist <dictionary> [length]`, `help` or `quit`. Matching is case-insensitive.
///
/// # Errors
/// The first [`CommandError`] that applies, checked in the order command,
/// dictionary presence, argument count, dictionary name, argument.
///
/// # Examples
/// ```
/// use wordle_ai::commands::{Command, Target, parse_command};
/// use wordle_ai::wordlists::DictionaryKind;
///
/// let cmd = parse_command("play Scrabble heaps").unwrap();
/// assert_eq!(
///     cmd,
///     Command::Play { kind: DictionaryKind::Scrabble, target: Target::Word("heaps".into()) }
/// );
/// ```
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.to_ascii_lowercase();
    let mut tokens = line.split_whitespace();

    let command = tokens.next().ok_or(CommandError::NoCommand)?;
    match command {
        "quit" => return Ok(Command::Quit),
        "help" => return Ok(Command::Help),
        "play" | "test" | "assist" => {}
        other => return Err(CommandError::InvalidCommand(other.to_string())),
    }

    let dictionary = tokens.next().ok_or(CommandError::NoDictionary)?;
    let arg = tokens.next();
    if tokens.next().is_some() {
        return Err(CommandError::TooManyArguments);
    }

    let kind: DictionaryKind = dictionary
        .parse()
        .map_err(|_| CommandError::InvalidDictionary(dictionary.to_string()))?;
    let target = arg
        .map(str::parse::<Target>)
        .transpose()
        .map_err(|_| CommandError::InvalidArgument(arg.unwrap_or_default().to_string()))?
        .unwrap_or_default();

    if command == "play" {
        return Ok(Command::Play { kind, target });
    }
    let length = match target {
        Target::Any => None,
        Target::Length(n) => Some(n),
        Target::Word(word) => return Err(CommandError::InvalidArgument(word)),
    };
    if command == "assist" {
        Ok(Command::Assist { kind, length })
    } else {
        Ok(Command::Test { kind, length })
    }
}

/// Run the prompt until `quit` or end of input
///
/// # Errors
/// Only I/O errors on `input` or `out`; command failures are reported and
/// the prompt continues.
pub fn run_prompt(config: &RunConfig, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{HELP_MESSAGE}")?;

    loop {
        write!(out, "\nPlease enter a command: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::debug!("prompt input closed");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                log::warn!("rejected command {:?}: {e}", line.trim());
                writeln!(out, "{} {e}", "ERROR:".red().bold())?;
                continue;
            }
        };

        if let Err(e) = execute(config, &command, input, out) {
            log::warn!("{command:?} failed: {e:#}");
            writeln!(out, "{} {e:#}", "ERROR:".red().bold())?;
        }

        if command == Command::Quit {
            writeln!(out, "\nTerminating Wordle-AI program...")?;
            return Ok(());
        }
    }
}

fn execute(
    config: &RunConfig,
    command: &Command,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Play { kind, target } => {
            let result = play_ai(config, *kind, target)?;
            write_play_result(out, &result)?;
        }
        Command::Test { kind, length } => {
            writeln!(
                out,
                "\nTesting AI on all words in '{}'...",
                kind.display_name(*length)
            )?;
            let result = run_test_all(config, *kind, *length, true)?;
            let path = write_report(&config.report_dir, &result)?;
            write_test_all_result(out, &result, Some(&path))?;
        }
        Command::Assist { kind, length } => {
            run_assist(config, *kind, *length, input, out)?;
        }
        Command::Help => writeln!(out, "{HELP_MESSAGE}")?,
        Command::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use test_case::test_case;

    #[test_case("", CommandError::NoCommand ; "empty line")]
    #[test_case("solve wordle", CommandError::InvalidCommand("solve".into()) ; "unknown command")]
    #[test_case("play", CommandError::NoDictionary ; "missing dictionary")]
    #[test_case("test wordle 5 extra", CommandError::TooManyArguments ; "excess arguments")]
    #[test_case("play webster", CommandError::InvalidDictionary("webster".into()) ; "unknown dictionary")]
    #[test_case("play wordle cr4ne", CommandError::InvalidArgument("cr4ne".into()) ; "mixed argument")]
    #[test_case("test wordle crane", CommandError::InvalidArgument("crane".into()) ; "word for test")]
    #[test_case("assist wordle crane", CommandError::InvalidArgument("crane".into()) ; "word for assist")]
    fn parse_errors(line: &str, expected: CommandError) {
        assert_eq!(parse_command(line), Err(expected));
    }

    #[test]
    fn parse_valid_commands() {
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("  help "), Ok(Command::Help));
        assert_eq!(
            parse_command("play wordle"),
            Ok(Command::Play {
                kind: DictionaryKind::Wordle,
                target: Target::Any
            })
        );
        assert_eq!(
            parse_command("Play Scrabble 6"),
            Ok(Command::Play {
                kind: DictionaryKind::Scrabble,
                target: Target::Length(6)
            })
        );
        assert_eq!(
            parse_command("Assist Scrabble 6"),
            Ok(Command::Assist {
                kind: DictionaryKind::Scrabble,
                length: Some(6)
            })
        );
        assert_eq!(
            parse_command("test scrabble 5"),
            Ok(Command::Test {
                kind: DictionaryKind::Scrabble,
                length: Some(5)
            })
        );
    }

    fn run(lines: &str) -> String {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut out = Vec::new();
        run_prompt(&RunConfig::default(), &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn errors_reprompt_and_quit_stops() {
        let text = run("bogus\nplay\n\nplay wordle zzzzz\nplay wordle crane\nquit\nplay wordle\n");

        assert!(text.contains("Invalid command specified: 'bogus'."));
        assert!(text.contains("No dictionary was specified."));
        assert!(text.contains("\"zzzzz\" could not be found in dictionary"));
        assert!(text.contains("==== WORDLE AI ===="));
        assert!(text.contains("Terminating Wordle-AI program..."));
        // nothing after quit is executed
        assert_eq!(text.matches("==== WORDLE AI ====").count(), 1);
    }

    #[test]
    fn assist_reads_feedback_from_the_prompt_input() {
        let text = run("assist wordle
OOZOO
OOOOO
quit
");

        assert!(text.contains("==== WORDLE ASSIST ===="));
        assert!(text.contains("feedback must be 5 marks"));
        assert!(text.contains("solved in 1 guess"));
        assert!(text.contains("Terminating Wordle-AI program..."));
    }

    #[test]
    fn help_describes_bundled_wordle_lists_as_a_sample() {
        assert!(HELP_MESSAGE.contains("A sample of the Wordle answer and guess lists"));
        assert!(HELP_MESSAGE.contains("Syntax: assist <Dictionary> [Word Length]"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let text = run("help\n");
        assert_eq!(text.matches("Wordle AI - Help").count(), 2);
    }
}
