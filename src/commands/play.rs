//! Interactive practice game on the terminal
//!
//! Line-based: one guess per line, `quit` to stop.

use crate::LanguageSession;
use crate::core::Word;
use crate::game::{Game, GameStatus, MAX_ATTEMPTS};
use crate::output::{print_keyboard, print_row, share_text};
use crate::stats::{GameOutcome, OutcomeLog};
use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use colored::Colorize;
use rand::prelude::IndexedRandom;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Options for `play`
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Fixed target instead of a random primary word
    pub target: Option<String>,
    /// JSON outcome log to append finished games to
    pub log_path: Option<PathBuf>,
}

/// Pick a random target from the primary list, skipping blocklisted words
#[must_use]
pub fn pick_target(session: &LanguageSession) -> Option<Word> {
    session
        .targets()
        .choose(&mut rand::rng())
        .and_then(|text| Word::new(text).ok())
}

/// Run practice games on stdin until the player quits
///
/// # Errors
/// Returns an error on I/O failure, when no target can be chosen, or when the
/// outcome log cannot be written.
pub fn run_play(session: &LanguageSession, config: &PlayConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!(
        "║ {:^60} ║",
        format!("Wordle - {}", session.name())
    );
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in {MAX_ATTEMPTS} tries.");
    println!("Letters with accents can be typed without them.");
    println!("Commands: 'quit' to exit\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let target = match &config.target {
            Some(text) => Word::new(session.prepare_input(text))
                .with_context(|| format!("Invalid target '{text}'"))?,
            None => pick_target(session)
                .ok_or_else(|| anyhow!("No playable words for '{}'", session.code()))?,
        };
        log::debug!("[{}] new game", session.code());

        let mut game = Game::new(session, target);
        let Some(outcome) = play_game(&mut game, &mut input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        if let Some(path) = &config.log_path {
            append_outcome(path, outcome)?;
        }

        if config.target.is_some()
            || !matches!(read_line("Play again? (yes/no)", &mut input)?.as_deref(), Some("yes" | "y"))
        {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        println!("\n🔄 New game started!\n");
    }
}

/// Play one game from `input`
///
/// Returns the outcome when the game finishes, or `None` if the player quit
/// or input ended first.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn play_game<R: BufRead>(game: &mut Game<'_>, input: &mut R) -> Result<Option<GameOutcome>> {
    while game.status() == GameStatus::InProgress {
        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", game.attempts().len() + 1);
        let Some(line) = read_line(&prompt, input)? else {
            return Ok(None);
        };

        match line.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(None),
            guess => match game.submit(guess).map(|_| ()) {
                Ok(()) => {
                    println!();
                    let right_to_left = game.session().right_to_left();
                    for attempt in game.attempts() {
                        print_row(attempt, right_to_left);
                    }
                    println!();
                    print_keyboard(game.session(), game.keyboard());
                    println!();
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }

    match game.status() {
        GameStatus::Won => {
            let tries = game.attempts().len();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {tries} {}!",
                    if tries == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost | GameStatus::InProgress => println!(
            "{} {}",
            "The word was".red().bold(),
            game.target().text().to_uppercase().bright_white().bold()
        ),
    }
    println!("\n{}\n", share_text(game));

    Ok(game.outcome(Utc::now()))
}

fn append_outcome(path: &Path, outcome: GameOutcome) -> Result<()> {
    let mut log = OutcomeLog::load(path)?;
    log.append(outcome);
    log.save(path)
        .with_context(|| format!("Failed to record game in {}", path.display()))
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LanguageRules;
    use crate::wordlists::Dictionary;
    use std::io::Cursor;

    fn session() -> LanguageSession {
        let words = ["slate", "crane", "house"];
        let dictionary = Dictionary::new(words.iter().map(|w| (*w).to_string()).collect(), vec![]);
        LanguageSession::new("en", LanguageRules::new(), dictionary)
    }

    #[test]
    fn plays_to_a_win() {
        let session = session();
        let mut game = Game::new(&session, Word::new("slate").unwrap());
        let mut input = Cursor::new("crane\nnotaword\n\nslate\n");

        let outcome = play_game(&mut game, &mut input).unwrap().unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.attempts, 2);
    }

    #[test]
    fn quitting_has_no_outcome() {
        let session = session();
        let mut game = Game::new(&session, Word::new("slate").unwrap());
        let mut input = Cursor::new("crane\nquit\nslate\n");

        assert!(play_game(&mut game, &mut input).unwrap().is_none());
        assert_eq!(game.attempts().len(), 1);
    }

    #[test]
    fn end_of_input_has_no_outcome() {
        let session = session();
        let mut game = Game::new(&session, Word::new("slate").unwrap());
        let mut input = Cursor::new("house\n");

        assert!(play_game(&mut game, &mut input).unwrap().is_none());
    }

    #[test]
    fn random_target_comes_from_primary() {
        let session = session();
        let target = pick_target(&session).unwrap();
        assert!(session.dictionary().primary().iter().any(|w| w == target.text()));
    }

    #[test]
    fn random_target_skips_blocklist() {
        let session = session().with_blocklist(["slate".to_string(), "crane".to_string()]);
        for _ in 0..50 {
            assert_eq!(pick_target(&session).unwrap().text(), "house");
        }
        assert_eq!(session.check_word("slate").as_deref(), Some("slate"));

        let everything_blocked = session.with_blocklist(["slate", "crane", "house"].map(String::from));
        assert!(pick_target(&everything_blocked).is_none());
    }
}
