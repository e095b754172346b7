//! Display functions for command results

use super::formatters::{create_progress_bar, key_label};
use crate::LanguageSession;
use crate::commands::{CheckResult, ScoreResult};
use crate::core::{KeyboardState, Tag};
use crate::game::GuessAttempt;
use crate::stats::StatsSnapshot;
use crate::wordlists::{AuditReport, LanguagePack, MIN_WORD_COUNT};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn tile(letter: char, tag: Option<Tag>) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match tag {
        Some(Tag::Correct) => text.black().on_green().bold(),
        Some(Tag::Present) => text.black().on_yellow().bold(),
        Some(Tag::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Print a scored row
///
/// Right-to-left languages fill the row from the right.
pub fn print_row(attempt: &GuessAttempt, right_to_left: bool) {
    let feedback = attempt.feedback();
    let mut tiles: Vec<String> = feedback
        .display()
        .iter()
        .zip(feedback.tags())
        .map(|(&letter, &tag)| tile(letter, Some(tag)).to_string())
        .collect();
    if right_to_left {
        tiles.reverse();
    }
    println!("  {}", tiles.join(" "));
}

/// Print the keyboard with per-key state and diacritic hints
pub fn print_keyboard(session: &LanguageSession, keyboard: &KeyboardState) {
    let (keys, hints) = session.keyboard();
    let norm = session.normalization();

    for chunk in keys.chunks(10) {
        let row: Vec<String> = chunk
            .iter()
            .map(|&key| {
                let label = key_label(key, hints.get(&key));
                match keyboard.get(key, norm) {
                    Some(Tag::Correct) => label.green().bold().to_string(),
                    Some(Tag::Present) => label.yellow().bold().to_string(),
                    Some(Tag::Absent) => label.bright_black().to_string(),
                    None => label,
                }
            })
            .collect();
        println!("  {}", row.join(" "));
    }
}

/// Print the result of a dictionary check
pub fn print_check_result(result: &CheckResult) {
    match &result.accepted {
        Some(word) if *word == result.input => {
            println!("{} {}", "✓".green().bold(), word.bright_white().bold());
        }
        Some(word) => println!(
            "{} {} → {}",
            "✓".green().bold(),
            result.input,
            word.bright_white().bold()
        ),
        None => println!(
            "{} {}",
            "✗".red().bold(),
            format!("'{}' is not in the word list", result.input).red()
        ),
    }
}

/// Print a scored guess against a target
pub fn print_score_result(result: &ScoreResult) {
    let tiles: Vec<String> = result
        .feedback
        .display()
        .iter()
        .zip(result.feedback.tags())
        .map(|(&letter, &tag)| tile(letter, Some(tag)).to_string())
        .collect();

    println!(
        "\n{} vs {}",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("  {}", tiles.join(" "));
    println!("  {}", result.feedback.to_emoji());
}

/// Print a statistics snapshot under a title
pub fn print_stats(title: &str, snapshot: &StatsSnapshot) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Played:          {}", snapshot.games);
    println!(
        "   Win %:           {}",
        format!("{:.0}", snapshot.win_percentage).bright_yellow().bold()
    );
    println!("   Wins / losses:   {} / {}", snapshot.wins, snapshot.losses);
    println!("   Current streak:  {}", snapshot.current_streak);
    println!("   Max streak:      {}", snapshot.longest_streak);
    println!("   Avg attempts:    {:.2}", snapshot.avg_attempts);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = snapshot.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in snapshot.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}

/// Print one audit report
pub fn print_audit_report(report: &AuditReport) {
    let status = if report.is_clean() {
        "clean".green().bold()
    } else {
        format!("{} issues", report.issue_count()).yellow().bold()
    };
    println!(
        "\n{} {} ({} words, {} supplement)",
        report.code.bright_cyan().bold(),
        status,
        report.primary_count,
        report.supplement_count
    );

    print_findings("Wrong length", &report.wrong_length);
    print_findings("Wrong length (supplement)", &report.supplement_wrong_length);
    print_findings("Not lowercase", &report.not_lowercase);
    print_findings("Duplicates", &report.duplicates);
    print_findings("Non-letters", &report.non_alphabetic);

    if !report.invalid_characters.is_empty() {
        let entries: Vec<String> = report
            .invalid_characters
            .iter()
            .map(|(word, chars)| format!("{word} [{}]", chars.iter().collect::<String>()))
            .collect();
        print_findings("Outside character set", &entries);
    }
    if !report.overlapping_letters.is_empty() {
        let letters: Vec<String> = report
            .overlapping_letters
            .iter()
            .map(char::to_string)
            .collect();
        print_findings("In both diacritic and final-form maps", &letters);
    }
    if let Some(error) = &report.rules_error {
        println!("   {} {}", "Config:".red(), error);
    }
    if let Some(code) = &report.code_mismatch {
        println!(
            "   {} language_code '{code}' does not match folder '{}'",
            "Config:".red(),
            report.code
        );
    }
    print_findings("Empty config names", &report.missing_names);
    if report.low_word_count {
        println!(
            "   {} only {} words (fewer than {MIN_WORD_COUNT})",
            "Warning:".yellow(),
            report.primary_count
        );
    }
}

fn print_findings(label: &str, items: &[String]) {
    const SHOWN: usize = 10;

    if items.is_empty() {
        return;
    }
    let mut line = items
        .iter()
        .take(SHOWN)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > SHOWN {
        line.push_str(&format!(", … ({} more)", items.len() - SHOWN));
    }
    println!("   {} {line}", format!("{label}:").yellow());
}

/// Print the available languages
pub fn print_languages(packs: &[LanguagePack]) {
    println!("\n{}", "Available languages".bright_cyan().bold());
    for pack in packs {
        let direction = if pack.config.right_to_left { " (rtl)" } else { "" };
        let native = if pack.config.name_native.is_empty() {
            String::new()
        } else {
            format!(" / {}", pack.config.name_native)
        };
        println!(
            "  {:<4} {}{native}{direction}  {} words",
            pack.code.bright_white().bold(),
            pack.display_name(),
            pack.primary.len()
        );
    }
}
