//! Word list quality checks
//!
//! Reports problems in a raw [`LanguagePack`] without modifying it: entries
//! of the wrong length, uppercase entries, duplicates, entries with
//! non-letters, letters outside the declared character set, letters that take
//! part in both equivalence axes, and config metadata that does not match the
//! pack.

use super::LanguagePack;
use crate::core::WORD_LENGTH;
use rustc_hash::FxHashSet;
use unicode_normalization::UnicodeNormalization;

/// Below this many primary words a language is flagged as running out quickly
pub const MIN_WORD_COUNT: usize = 100;

/// Findings for one language
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub code: String,
    pub primary_count: usize,
    pub supplement_count: usize,
    pub wrong_length: Vec<String>,
    pub supplement_wrong_length: Vec<String>,
    pub not_lowercase: Vec<String>,
    pub duplicates: Vec<String>,
    /// Entries of either list containing whitespace, digits or punctuation
    pub non_alphabetic: Vec<String>,
    /// Word and the letters it uses that are not in the character set
    pub invalid_characters: Vec<(String, Vec<char>)>,
    /// Letters that are both a diacritic variant and part of a final-form pair
    pub overlapping_letters: Vec<char>,
    /// Config entries that could not be turned into rules
    pub rules_error: Option<String>,
    /// `language_code` from the config when it differs from the pack code
    pub code_mismatch: Option<String>,
    /// Config name fields that are empty
    pub missing_names: Vec<String>,
    /// Fewer than [`MIN_WORD_COUNT`] primary words; a warning, not an issue
    pub low_word_count: bool,
}

impl AuditReport {
    /// Total number of findings
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.wrong_length.len()
            + self.supplement_wrong_length.len()
            + self.not_lowercase.len()
            + self.duplicates.len()
            + self.non_alphabetic.len()
            + self.invalid_characters.len()
            + self.overlapping_letters.len()
            + usize::from(self.rules_error.is_some())
            + usize::from(self.code_mismatch.is_some())
            + self.missing_names.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}

/// Audit one language pack
#[must_use]
pub fn audit(pack: &LanguagePack) -> AuditReport {
    let mut report = AuditReport {
        code: pack.code.clone(),
        primary_count: pack.primary.len(),
        supplement_count: pack.supplement.len(),
        low_word_count: pack.primary.len() < MIN_WORD_COUNT,
        ..AuditReport::default()
    };

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for word in &pack.primary {
        if letter_count(word) != WORD_LENGTH {
            report.wrong_length.push(word.clone());
        }
        if word.to_lowercase() != *word {
            report.not_lowercase.push(word.clone());
        }
        if !seen.insert(word.as_str()) {
            report.duplicates.push(word.clone());
        }
    }

    for word in &pack.supplement {
        if letter_count(word) != WORD_LENGTH {
            report.supplement_wrong_length.push(word.clone());
        }
    }

    report.non_alphabetic = pack
        .primary
        .iter()
        .chain(&pack.supplement)
        .filter(|word| !word.nfc().all(char::is_alphabetic))
        .cloned()
        .collect();

    if !pack.characters.is_empty() {
        for word in &pack.primary {
            let invalid: Vec<char> = word
                .nfc()
                .flat_map(char::to_lowercase)
                .filter(|c| c.is_alphabetic() && !pack.characters.contains(c))
                .collect();
            if !invalid.is_empty() {
                report.invalid_characters.push((word.clone(), invalid));
            }
        }
    }

    match pack.config.rules() {
        Ok(rules) => report.overlapping_letters = rules.overlapping_letters(),
        Err(e) => report.rules_error = Some(e.to_string()),
    }

    if pack.config.language_code != pack.code {
        report.code_mismatch = Some(pack.config.language_code.clone());
    }
    for (field, value) in [
        ("name", &pack.config.name),
        ("name_native", &pack.config.name_native),
    ] {
        if value.trim().is_empty() {
            report.missing_names.push(field.to_string());
        }
    }

    report
}

fn letter_count(word: &str) -> usize {
    word.nfc().count()
}
