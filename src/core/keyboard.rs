//! On-screen keyboard state
//!
//! One [`Tag`] per normalized letter, merged monotonically across submitted
//! rows: once a letter is correct it stays correct.

use super::{Feedback, LanguageRules, NormalizationMap, Tag, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Variants shown on a key beyond this count are elided
const MAX_HINT_VARIANTS: usize = 5;

/// Hints with this many variants or more are drawn above the key
const HINT_ABOVE_THRESHOLD: usize = 4;

/// Best known state of every letter guessed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<char, Tag>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored row into the state
    ///
    /// Keys are stored under their normalized letter, so `ä` and `a` share a
    /// key in languages that fold them.
    ///
    /// # Examples
    /// ```
    /// use wordle_global::core::{Feedback, KeyboardState, NormalizationMap, Tag, Word};
    ///
    /// let norm = NormalizationMap::default();
    /// let target = Word::new("slate").unwrap();
    /// let mut keyboard = KeyboardState::new();
    ///
    /// let guess = Word::new("crane").unwrap();
    /// keyboard.merge_row(&guess, &Feedback::score(&guess, &target, &norm), &norm);
    /// assert_eq!(keyboard.get('a', &norm), Some(Tag::Correct));
    /// assert_eq!(keyboard.get('c', &norm), Some(Tag::Absent));
    /// assert_eq!(keyboard.get('z', &norm), None);
    /// ```
    pub fn merge_row(&mut self, guess: &Word, feedback: &Feedback, norm: &NormalizationMap) {
        for (&letter, &tag) in guess.letters().iter().zip(feedback.tags()) {
            self.merge(norm.normalize_char(letter), tag);
        }
    }

    /// Merge a single observation for an already normalized letter
    pub fn merge(&mut self, normalized: char, tag: Tag) {
        self.keys
            .entry(normalized)
            .and_modify(|current| *current = current.merge(tag))
            .or_insert(tag);
    }

    /// State of a key, looked up through normalization
    #[must_use]
    pub fn get(&self, letter: char, norm: &NormalizationMap) -> Option<Tag> {
        self.keys.get(&norm.normalize_char(letter)).copied()
    }

    /// Number of distinct letters with a known state
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Diacritic hint drawn on a base-letter key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Up to five variants, followed by `…` when there are more
    pub text: String,
    /// Draw above the letter instead of beside it
    pub above: bool,
}

/// Hints for every key on `keys` that has diacritic variants
///
/// # Examples
/// ```
/// use wordle_global::core::{LanguageRules, diacritic_hints};
///
/// let rules = LanguageRules::new().with_diacritics('a', ['ä', 'à']);
/// let hints = diacritic_hints(&rules, ['a', 'b']);
/// assert_eq!(hints[&'a'].text, "äà");
/// assert!(!hints.contains_key(&'b'));
/// ```
pub fn diacritic_hints(
    rules: &LanguageRules,
    keys: impl IntoIterator<Item = char>,
) -> BTreeMap<char, KeyHint> {
    let keys: Vec<char> = keys.into_iter().flat_map(char::to_lowercase).collect();

    rules
        .diacritic_groups()
        .iter()
        .filter(|&(base, variants)| !variants.is_empty() && keys.contains(base))
        .map(|(&base, variants)| {
            let mut text: String = variants.iter().take(MAX_HINT_VARIANTS).collect();
            if variants.len() > MAX_HINT_VARIANTS {
                text.push('…');
            }
            let hint = KeyHint {
                text,
                above: variants.len() >= HINT_ABOVE_THRESHOLD,
            };
            (base, hint)
        })
        .collect()
}
