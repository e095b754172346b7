//! Per-language session
//!
//! Bundles everything derived from one language pack: rules, normalization
//! map, dictionary and canonical index. Built once on language load and
//! read-only afterwards; switching language means building a new session.

use crate::core::{
    Feedback, KeyHint, LanguageRules, NormalizationMap, RulesError, WORD_LENGTH, Word,
    diacritic_hints,
};
use crate::wordlists::{CanonicalIndex, Dictionary, LanguagePack, check_word};
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};
use unicode_normalization::UnicodeNormalization;

/// Immutable state for playing one language
#[derive(Debug, Clone)]
pub struct LanguageSession {
    code: String,
    name: String,
    right_to_left: bool,
    allow_any_word: bool,
    rules: LanguageRules,
    norm: NormalizationMap,
    dictionary: Dictionary,
    index: CanonicalIndex,
    /// Primary words never drawn as targets
    blocklist: FxHashSet<String>,
}

impl LanguageSession {
    /// Build a session from rules and a dictionary
    ///
    /// # Examples
    /// ```
    /// use wordle_global::LanguageSession;
    /// use wordle_global::core::LanguageRules;
    /// use wordle_global::wordlists::Dictionary;
    ///
    /// let rules = LanguageRules::new().with_diacritics('u', ['ü']);
    /// let dictionary = Dictionary::new(vec!["grüne".to_string()], vec![]);
    /// let session = LanguageSession::new("de", rules, dictionary);
    ///
    /// assert_eq!(session.check_word("GRUNE").as_deref(), Some("grüne"));
    /// ```
    #[must_use]
    pub fn new(code: impl Into<String>, rules: LanguageRules, dictionary: Dictionary) -> Self {
        let code = code.into();
        let norm = NormalizationMap::build(&rules);
        let index = CanonicalIndex::build(dictionary.primary(), dictionary.supplement(), &norm);

        log::debug!(
            "[{code}] session ready: {} words, {} folded letters, {} index keys, {} collisions",
            dictionary.len(),
            norm.len(),
            index.len(),
            index.collisions()
        );

        let overlapping = rules.overlapping_letters();
        if !overlapping.is_empty() {
            log::warn!("[{code}] letters in both equivalence axes: {overlapping:?}");
        }

        Self {
            name: code.clone(),
            code,
            right_to_left: false,
            allow_any_word: false,
            rules,
            norm,
            dictionary,
            index,
            blocklist: FxHashSet::default(),
        }
    }

    /// Build a session from a loaded language pack
    ///
    /// # Errors
    /// Returns `RulesError` if the pack's equivalence maps are malformed.
    pub fn from_pack(pack: &LanguagePack) -> Result<Self, RulesError> {
        let rules = pack.config.rules()?;
        let session = Self::new(pack.code.clone(), rules, pack.dictionary())
            .with_name(pack.display_name())
            .with_right_to_left(pack.config.right_to_left)
            .with_allow_any_word(pack.config.allow_any_word)
            .with_blocklist(pack.blocklist.iter().cloned());
        Ok(session)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub const fn with_right_to_left(mut self, right_to_left: bool) -> Self {
        self.right_to_left = right_to_left;
        self
    }

    /// Accept any five-letter input, for languages without a full dictionary
    #[must_use]
    pub const fn with_allow_any_word(mut self, allow_any_word: bool) -> Self {
        self.allow_any_word = allow_any_word;
        self
    }

    /// Words still accepted as guesses but never picked as the target
    #[must_use]
    pub fn with_blocklist(mut self, words: impl IntoIterator<Item = String>) -> Self {
        self.blocklist = words
            .into_iter()
            .map(|word| word.trim().nfc().collect::<String>().to_lowercase())
            .collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn right_to_left(&self) -> bool {
        self.right_to_left
    }

    #[inline]
    #[must_use]
    pub const fn allow_any_word(&self) -> bool {
        self.allow_any_word
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &LanguageRules {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub const fn normalization(&self) -> &NormalizationMap {
        &self.norm
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &CanonicalIndex {
        &self.index
    }

    /// Primary words eligible as the hidden word
    ///
    /// # Examples
    /// ```
    /// use wordle_global::LanguageSession;
    /// use wordle_global::core::LanguageRules;
    /// use wordle_global::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(vec!["crane".to_string(), "abase".to_string()], vec![]);
    /// let session = LanguageSession::new("en", LanguageRules::new(), dictionary)
    ///     .with_blocklist(["ABASE".to_string()]);
    ///
    /// assert_eq!(session.targets(), vec!["crane"]);
    /// assert_eq!(session.check_word("abase").as_deref(), Some("abase"));
    /// ```
    #[must_use]
    pub fn targets(&self) -> Vec<&str> {
        self.dictionary
            .primary()
            .iter()
            .map(String::as_str)
            .filter(|word| !self.blocklist.contains(*word))
            .collect()
    }

    /// Trim, NFC-compose and lowercase raw user input
    #[must_use]
    pub fn prepare_input(&self, raw: &str) -> String {
        raw.trim().nfc().collect::<String>().to_lowercase()
    }

    /// Validate a guess, returning the dictionary spelling to submit
    ///
    /// Input is prepared with [`Self::prepare_input`] first, so decomposed
    /// accents and uppercase letters are accepted.
    #[must_use]
    pub fn check_word(&self, input: &str) -> Option<String> {
        let input = self.prepare_input(input);
        check_word(
            &input,
            &self.dictionary,
            &self.index,
            &self.norm,
            self.allow_any_word,
        )
    }

    /// Score a guess against the target under this language's equivalences
    #[must_use]
    pub fn score(&self, guess: &Word, target: &Word) -> Feedback {
        Feedback::score(guess, target, &self.norm)
    }

    /// Positional display form of partially typed input
    ///
    /// The letter in the last slot takes its final form, letters elsewhere
    /// take their regular form. Matching is unaffected.
    ///
    /// # Examples
    /// ```
    /// use wordle_global::LanguageSession;
    /// use wordle_global::core::LanguageRules;
    /// use wordle_global::wordlists::Dictionary;
    ///
    /// let rules = LanguageRules::new().with_final_form('מ', 'ם');
    /// let session = LanguageSession::new("he", rules, Dictionary::default());
    ///
    /// assert_eq!(session.display_form("ילדימ"), "ילדים");
    /// assert_eq!(session.display_form("םל"), "מל");
    /// ```
    #[must_use]
    pub fn display_form(&self, typed: &str) -> String {
        typed
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if i + 1 == WORD_LENGTH {
                    self.rules.to_final_form(self.rules.to_regular_form(c), true)
                } else {
                    self.rules.to_regular_form(c)
                }
            })
            .collect()
    }

    /// Letters used by the primary word list, sorted
    #[must_use]
    pub fn characters(&self) -> Vec<char> {
        self.dictionary
            .primary()
            .iter()
            .flat_map(|word| word.chars())
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect()
    }

    /// Keyboard letters: used letters folded to their base, with diacritic hints
    #[must_use]
    pub fn keyboard(&self) -> (Vec<char>, BTreeMap<char, KeyHint>) {
        let keys: Vec<char> = self
            .characters()
            .into_iter()
            .map(|c| self.norm.normalize_char(c))
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect();
        let hints = diacritic_hints(&self.rules, keys.iter().copied());
        (keys, hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tag;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn german() -> LanguageSession {
        let rules = LanguageRules::new()
            .with_diacritics('a', ['ä'])
            .with_diacritics('o', ['ö'])
            .with_diacritics('u', ['ü']);
        let dictionary = Dictionary::new(
            strings(&["grüne", "bären", "apfel"]),
            strings(&["mühle"]),
        );
        LanguageSession::new("de", rules, dictionary).with_name("German")
    }

    #[test]
    fn check_word_folds_and_prepares_input() {
        let session = german();
        assert_eq!(session.check_word("grune").as_deref(), Some("grüne"));
        assert_eq!(session.check_word(" Baren ").as_deref(), Some("bären"));
        assert_eq!(session.check_word("muhle").as_deref(), Some("mühle"));
        assert_eq!(session.check_word("gru\u{0308}ne").as_deref(), Some("grüne"));
        assert_eq!(session.check_word("zzzzz"), None);
    }

    #[test]
    fn allow_any_word_accepts_everything() {
        let session = german().with_allow_any_word(true);
        assert!(session.allow_any_word());
        assert_eq!(session.check_word("qwert").as_deref(), Some("qwert"));
    }

    #[test]
    fn score_uses_language_equivalences() {
        let session = german();
        let guess = Word::new("grune").unwrap();
        let target = Word::new("grüne").unwrap();

        let feedback = session.score(&guess, &target);
        assert_eq!(feedback.tags(), &[Tag::Correct; 5]);
        assert_eq!(feedback.display_word(), "grüne");
    }

    #[test]
    fn display_form_is_identity_without_final_forms() {
        let session = german();
        assert_eq!(session.display_form("grün"), "grün");
    }

    #[test]
    fn display_form_handles_greek_sigma() {
        let rules = LanguageRules::new().with_final_form('σ', 'ς');
        let session = LanguageSession::new("el", rules, Dictionary::default());
        assert_eq!(session.display_form("λογοσ"), "λογος");
        assert_eq!(session.display_form("ςοφο"), "σοφο");
    }

    #[test]
    fn keyboard_lists_base_letters_with_hints() {
        let session = german();
        let (keys, hints) = session.keyboard();

        assert!(keys.contains(&'u'));
        assert!(!keys.contains(&'ü'));
        assert_eq!(hints[&'u'].text, "ü");
        assert_eq!(hints[&'a'].text, "ä");
        assert!(!hints.contains_key(&'o')); // no o in the primary list
    }

    #[test]
    fn session_metadata() {
        let session = german().with_right_to_left(true);
        assert_eq!(session.code(), "de");
        assert_eq!(session.name(), "German");
        assert!(session.right_to_left());
        assert_eq!(session.dictionary().len(), 4);
        assert_eq!(session.index().len(), 4);
        assert_eq!(session.normalization().len(), 3);
        assert_eq!(session.rules().diacritic_groups().len(), 3);
    }

    #[test]
    fn blocklisted_words_are_guesses_but_not_targets() {
        let session = german().with_blocklist(strings(&["Bären", "mühle"]));

        assert_eq!(session.targets(), vec!["grüne", "apfel"]);
        assert_eq!(session.check_word("baren").as_deref(), Some("bären"));
        assert_eq!(german().targets().len(), 3);
    }

    #[test]
    fn from_pack_carries_blocklist() {
        let packs = crate::wordlists::embedded_packs().unwrap();
        let english = packs.iter().find(|p| p.code == "en").unwrap();
        let session = LanguageSession::from_pack(english).unwrap();

        assert!(!session.targets().contains(&"abase"));
        assert_eq!(session.targets().len(), english.primary.len() - 1);
        assert_eq!(session.check_word("abase").as_deref(), Some("abase"));
    }

    #[test]
    fn from_pack_reads_config() {
        let packs = crate::wordlists::embedded_packs().unwrap();
        let hebrew = packs.iter().find(|p| p.code == "he").unwrap();
        let session = LanguageSession::from_pack(hebrew).unwrap();

        assert_eq!(session.name(), "Hebrew");
        assert!(session.right_to_left());
        assert_eq!(session.normalization().normalize_char('ם'), 'מ');
    }
}
