//! Language pack loading
//!
//! A language lives in a directory named after its code:
//!
//! ```text
//! <code>/<code>_5words.txt             primary list, one word per line
//! <code>/<code>_5words_supplement.txt  optional, accepted guesses only
//! <code>/<code>_characters.txt         optional, one allowed letter per line
//! <code>/<code>_blocklist.txt          optional, guesses never used as targets
//! <code>/language_config.json          optional, names and equivalence maps
//! ```
//!
//! Packs come either from the embedded table or from a data directory.

use super::{Dictionary, EmbeddedLanguage, LANGUAGES};
use crate::core::{LanguageRules, RulesError, WORD_LENGTH};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Contents of `language_config.json`
///
/// Unknown keys (UI strings, meta tags) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageConfig {
    /// Should equal the directory name
    #[serde(default)]
    pub language_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_native: String,
    #[serde(default, deserialize_with = "flag")]
    pub right_to_left: bool,
    /// Base letter → diacritic variants
    #[serde(default)]
    pub diacritic_map: BTreeMap<String, Vec<String>>,
    /// Regular letter → word-final form
    #[serde(default)]
    pub final_form_map: BTreeMap<String, String>,
    /// Accept any five-letter input as a guess
    #[serde(default, deserialize_with = "flag")]
    pub allow_any_word: bool,
}

impl LanguageConfig {
    /// Parse a config document; an empty document yields the defaults
    ///
    /// # Errors
    /// Returns an error if the document is not valid JSON for this shape.
    pub fn parse(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).context("Invalid language config")
    }

    /// Equivalence rules described by this config
    ///
    /// # Errors
    /// Returns `RulesError` if a map entry is not a single letter.
    pub fn rules(&self) -> Result<LanguageRules, RulesError> {
        LanguageRules::from_maps(&self.diacritic_map, &self.final_form_map)
    }
}

/// Accepts `true`/`false` as JSON booleans or as the strings `"true"`/`"false"`
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

/// Raw data of one language, before any word filtering
#[derive(Debug, Clone)]
pub struct LanguagePack {
    pub code: String,
    pub config: LanguageConfig,
    pub primary: Vec<String>,
    pub supplement: Vec<String>,
    /// Allowed letters; empty means no restriction
    pub characters: Vec<char>,
    /// Valid guesses never picked as a target, lowercased
    pub blocklist: Vec<String>,
}

impl LanguagePack {
    /// Build a pack from the embedded table
    ///
    /// # Errors
    /// Returns an error if the embedded config is not valid JSON.
    pub fn from_embedded(language: &EmbeddedLanguage) -> Result<Self> {
        let config = LanguageConfig::parse(language.config)
            .with_context(|| format!("Embedded language '{}'", language.code))?;

        Ok(Self {
            code: language.code.to_string(),
            config,
            primary: to_owned_lines(language.primary),
            supplement: to_owned_lines(language.supplement),
            characters: parse_characters(language.characters),
            blocklist: to_lowercase_lines(language.blocklist),
        })
    }

    /// Load a pack from its directory; the directory name is the language code
    ///
    /// # Errors
    /// Returns an error if the primary word list is missing or unreadable, or
    /// if the config exists but cannot be parsed.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_global::wordlists::LanguagePack;
    ///
    /// let pack = LanguagePack::load_from_dir("data/languages/de").unwrap();
    /// println!("Loaded {} words", pack.primary.len());
    /// ```
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let Some(code) = dir.file_name().and_then(|name| name.to_str()) else {
            bail!("Cannot derive a language code from {}", dir.display());
        };

        let primary_path = dir.join(format!("{code}_5words.txt"));
        let primary = read_lines(&primary_path)
            .with_context(|| format!("Failed to read {}", primary_path.display()))?;

        let supplement = read_optional_lines(&dir.join(format!("{code}_5words_supplement.txt")))?;
        let characters = read_optional_lines(&dir.join(format!("{code}_characters.txt")))?;
        let blocklist = read_optional_lines(&dir.join(format!("{code}_blocklist.txt")))?;

        let config_path = dir.join("language_config.json");
        let config = if config_path.exists() {
            let json = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            LanguageConfig::parse(&json)
                .with_context(|| format!("In {}", config_path.display()))?
        } else {
            LanguageConfig::default()
        };

        Ok(Self {
            code: code.to_string(),
            config,
            primary,
            supplement,
            characters: parse_characters(&characters),
            blocklist: to_lowercase_lines(&blocklist),
        })
    }

    /// English name from the config, falling back to the code
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.config.name.is_empty() {
            &self.code
        } else {
            &self.config.name
        }
    }

    /// Dictionary of the words that pass basic checks
    ///
    /// Words are NFC-composed and lowercased; words that are not five letters,
    /// contain non-letters, or use a letter outside the character set are
    /// skipped with a warning.
    #[must_use]
    pub fn dictionary(&self) -> Dictionary {
        let primary = self.clean_list(&self.primary, "primary");
        let supplement = self.clean_list(&self.supplement, "supplement");
        Dictionary::new(primary, supplement)
    }

    fn clean_list(&self, words: &[String], list: &str) -> Vec<String> {
        let mut skipped = 0;
        let cleaned: Vec<String> = words
            .iter()
            .filter_map(|raw| {
                let word = clean_word(raw, &self.characters);
                if word.is_none() {
                    log::debug!("[{}] skipping {list} word '{raw}'", self.code);
                    skipped += 1;
                }
                word
            })
            .collect();

        if skipped > 0 {
            log::warn!("[{}] skipped {skipped} invalid {list} words", self.code);
        }
        cleaned
    }
}

/// Normalize a raw list entry, or reject it
///
/// Returns the NFC-composed, lowercased word if it has exactly five letters,
/// all alphabetic and (when `characters` is non-empty) all in `characters`.
#[must_use]
pub fn clean_word(raw: &str, characters: &[char]) -> Option<String> {
    let word: String = raw.trim().nfc().collect::<String>().to_lowercase();

    let valid = word.chars().count() == WORD_LENGTH
        && word.chars().all(char::is_alphabetic)
        && (characters.is_empty() || word.chars().all(|c| characters.contains(&c)));

    valid.then_some(word)
}

/// All embedded packs, in code order
///
/// # Errors
/// Returns an error if an embedded config is malformed.
pub fn embedded_packs() -> Result<Vec<LanguagePack>> {
    LANGUAGES.iter().map(LanguagePack::from_embedded).collect()
}

/// All packs found under `data_dir`, in code order
///
/// # Errors
/// Returns an error if the directory cannot be read or a pack fails to load.
pub fn load_packs_from_dir<P: AsRef<Path>>(data_dir: P) -> Result<Vec<LanguagePack>> {
    let data_dir = data_dir.as_ref();
    let mut dirs: Vec<_> = fs::read_dir(data_dir)
        .with_context(|| format!("Failed to read {}", data_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    dirs.iter().map(LanguagePack::load_from_dir).collect()
}

/// Packs from `data_dir` when given, otherwise the embedded ones
///
/// # Errors
/// Propagates loading errors.
pub fn load_packs(data_dir: Option<&Path>) -> Result<Vec<LanguagePack>> {
    match data_dir {
        Some(dir) => load_packs_from_dir(dir),
        None => embedded_packs(),
    }
}

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|&line| line.to_string()).collect()
}

fn to_lowercase_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().nfc().collect::<String>().to_lowercase())
        .collect()
}

/// First letter of each entry, NFC-composed
fn parse_characters<S: AsRef<str>>(lines: &[S]) -> Vec<char> {
    lines
        .iter()
        .filter_map(|line| line.as_ref().trim().nfc().next())
        .collect()
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn read_optional_lines(path: &Path) -> Result<Vec<String>> {
    if path.exists() {
        read_lines(path).with_context(|| format!("Failed to read {}", path.display()))
    } else {
        Ok(Vec::new())
    }
}
