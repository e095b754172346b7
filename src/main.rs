//! Wordle Global - CLI
//!
//! Practice games, dictionary checks, scoring, statistics and word-list
//! audits for every bundled language.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use wordle_global::{
    LanguageSession,
    commands::{PlayConfig, check_word, load_stats, run_audit, run_play, score_words},
    logging::init_logger,
    output::{print_audit_report, print_check_result, print_languages, print_score_result, print_stats},
    wordlists::{LanguagePack, load_packs},
};

#[derive(Parser)]
#[command(
    name = "wordle_global",
    about = "Multilingual Wordle with diacritic-aware matching and scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language code (en, de, he, ...)
    #[arg(short, long, global = true, default_value = "en")]
    lang: String,

    /// Directory of language packs instead of the bundled ones
    #[arg(short = 'd', long, global = true, env = "WORDLE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play practice games (default)
    Play {
        /// Play this word instead of a random one
        #[arg(short, long)]
        target: Option<String>,

        /// Append finished games to this JSON log
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Check whether a word is accepted, and how it is spelled
    Check {
        /// Word to look up
        word: String,
    },

    /// Score a guess against a target
    Score {
        guess: String,
        target: String,
    },

    /// Show statistics from an outcome log
    Stats {
        /// JSON log written by `play --log`
        #[arg(long)]
        log: PathBuf,

        /// Only games in the selected language
        #[arg(long)]
        only_lang: bool,
    },

    /// Audit the word lists of every language
    Audit,

    /// List available languages
    Languages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let packs = load_packs(cli.data_dir.as_deref())?;
    log::debug!("Loaded {} language packs", packs.len());

    match cli.command.unwrap_or(Commands::Play {
        target: None,
        log: None,
    }) {
        Commands::Play { target, log } => {
            let session = open_session(&packs, &cli.lang)?;
            run_play(
                &session,
                &PlayConfig {
                    target,
                    log_path: log,
                },
            )
        }
        Commands::Check { word } => {
            let session = open_session(&packs, &cli.lang)?;
            print_check_result(&check_word(&session, &word));
            Ok(())
        }
        Commands::Score { guess, target } => {
            let session = open_session(&packs, &cli.lang)?;
            let result = score_words(&session, &guess, &target)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Stats { log, only_lang } => run_stats_command(&log, only_lang.then_some(cli.lang.as_str())),
        Commands::Audit => {
            run_audit_command(&packs);
            Ok(())
        }
        Commands::Languages => {
            print_languages(&packs);
            Ok(())
        }
    }
}

fn open_session(packs: &[LanguagePack], code: &str) -> Result<LanguageSession> {
    let Some(pack) = packs.iter().find(|pack| pack.code == code) else {
        let available: Vec<&str> = packs.iter().map(|pack| pack.code.as_str()).collect();
        bail!(
            "Unknown language '{code}' (available: {})",
            available.join(", ")
        );
    };

    LanguageSession::from_pack(pack)
        .with_context(|| format!("Invalid configuration for language '{code}'"))
}

fn run_stats_command(log: &Path, language: Option<&str>) -> Result<()> {
    let report = load_stats(log, language)?;

    let title = match language {
        Some(code) => format!("STATISTICS: {code}"),
        None => "STATISTICS: all languages".to_string(),
    };
    print_stats(&title, &report.overall);

    if language.is_none() && report.by_language.len() > 1 {
        for (code, snapshot) in &report.by_language {
            print_stats(&format!("STATISTICS: {code}"), snapshot);
        }
    }
    Ok(())
}

fn run_audit_command(packs: &[LanguagePack]) {
    println!("\n{}", "═".repeat(70));
    println!(" Word List Audit ");
    println!("{}", "═".repeat(70));
    println!("\nAuditing {} languages", packs.len());

    let summary = run_audit(packs, true);
    for report in &summary.reports {
        print_audit_report(report);
    }

    let failing = summary.failing();
    println!(
        "\n{} words checked in {:.2}s",
        summary.total_words,
        summary.duration.as_secs_f64()
    );
    if failing.is_empty() {
        println!("{}", "✅ All word lists are clean".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "⚠ {} issues in {} languages",
                summary.total_issues,
                failing.len()
            )
            .yellow()
            .bold()
        );
    }
}
