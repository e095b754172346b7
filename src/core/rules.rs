//! Per-language character equivalence rules
//!
//! Two independent axes are supported:
//! - diacritic folding (`ä` → `a`), configured per base letter
//! - word-final letter forms (Hebrew `ך` → `כ`, Greek `ς` → `σ`)
//!
//! A letter without a diacritic group is a distinct letter. Norwegian, for
//! example, lists no groups at all, so `æ`, `ø` and `å` never match `a`/`o`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Immutable equivalence configuration for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRules {
    diacritic_groups: BTreeMap<char, Vec<char>>,
    final_forms: BTreeMap<char, char>,
}

/// Error type for rule entries that cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// An entry is empty or spans more than one code point after NFC composition
    NotSingleLetter(String),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSingleLetter(entry) => {
                write!(f, "Rule entry '{entry}' is not a single letter")
            }
        }
    }
}

impl std::error::Error for RulesError {}

impl LanguageRules {
    /// Rules with no folding at all
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diacritic group: every variant folds to `base`
    ///
    /// # Examples
    /// ```
    /// use wordle_global::core::LanguageRules;
    ///
    /// let rules = LanguageRules::new().with_diacritics('a', ['ä', 'á']);
    /// assert_eq!(rules.diacritic_groups()[&'a'], vec!['ä', 'á']);
    /// ```
    #[must_use]
    pub fn with_diacritics(mut self, base: char, variants: impl IntoIterator<Item = char>) -> Self {
        self.diacritic_groups
            .entry(base)
            .or_default()
            .extend(variants);
        self
    }

    /// Add a positional pair: `final_form` is the word-final variant of `regular`
    #[must_use]
    pub fn with_final_form(mut self, regular: char, final_form: char) -> Self {
        self.final_forms.insert(regular, final_form);
        self
    }

    /// Build rules from the string maps found in `language_config.json`
    ///
    /// Entries are NFC-composed first, so a decomposed `a` + U+0308 is accepted
    /// as `ä`. Keys are stored sorted; the order they appear in the file has no
    /// effect on [`NormalizationMap::build`](crate::core::NormalizationMap::build).
    ///
    /// # Errors
    /// Returns `RulesError::NotSingleLetter` if any key or value is not exactly
    /// one code point after composition.
    pub fn from_maps(
        diacritic_map: &BTreeMap<String, Vec<String>>,
        final_form_map: &BTreeMap<String, String>,
    ) -> Result<Self, RulesError> {
        let mut rules = Self::new();

        for (base, variants) in diacritic_map {
            let base = single_letter(base)?;
            let variants = variants
                .iter()
                .map(String::as_str)
                .map(single_letter)
                .collect::<Result<Vec<_>, _>>()?;
            rules = rules.with_diacritics(base, variants);
        }

        for (regular, final_form) in final_form_map {
            rules = rules.with_final_form(single_letter(regular)?, single_letter(final_form)?);
        }

        Ok(rules)
    }

    /// Base letter → diacritic variants
    #[inline]
    #[must_use]
    pub const fn diacritic_groups(&self) -> &BTreeMap<char, Vec<char>> {
        &self.diacritic_groups
    }

    /// Regular letter → word-final variant
    #[inline]
    #[must_use]
    pub const fn final_forms(&self) -> &BTreeMap<char, char> {
        &self.final_forms
    }

    /// True when the language folds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diacritic_groups.values().all(Vec::is_empty) && self.final_forms.is_empty()
    }

    /// Positional display conversion for a typed letter
    ///
    /// Returns the final form when `is_word_final` is set and a mapping exists,
    /// otherwise `letter` unchanged. Display only: matching always goes through
    /// full normalization regardless of position.
    ///
    /// # Examples
    /// ```
    /// use wordle_global::core::LanguageRules;
    ///
    /// let rules = LanguageRules::new().with_final_form('כ', 'ך');
    /// assert_eq!(rules.to_final_form('כ', true), 'ך');
    /// assert_eq!(rules.to_final_form('כ', false), 'כ');
    /// ```
    #[must_use]
    pub fn to_final_form(&self, letter: char, is_word_final: bool) -> char {
        if is_word_final {
            self.final_forms.get(&letter).copied().unwrap_or(letter)
        } else {
            letter
        }
    }

    /// Inverse of [`Self::to_final_form`], for a final form typed mid-word
    #[must_use]
    pub fn to_regular_form(&self, letter: char) -> char {
        self.final_forms
            .iter()
            .find(|&(_, &final_form)| final_form == letter)
            .map_or(letter, |(&regular, _)| regular)
    }

    /// Letters that take part in both equivalence axes
    ///
    /// A letter listed as a diacritic variant must not also be a final form or
    /// the regular side of a final-form pair; otherwise the normalization chain
    /// is ambiguous. Such overlaps are not rejected, only reported.
    #[must_use]
    pub fn overlapping_letters(&self) -> Vec<char> {
        let variants: BTreeSet<char> = self.diacritic_groups.values().flatten().copied().collect();

        let positional: BTreeSet<char> = self
            .final_forms
            .iter()
            .flat_map(|(&regular, &final_form)| [regular, final_form])
            .collect();

        variants.intersection(&positional).copied().collect()
    }
}

/// Compose `entry` to NFC and require exactly one code point
fn single_letter(entry: &str) -> Result<char, RulesError> {
    let composed: String = entry.trim().nfc().collect();
    let mut chars = composed.chars();

    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(RulesError::NotSingleLetter(entry.to_string())),
    }
}
