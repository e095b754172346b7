//! Dictionary lookup with equivalence-aware matching
//!
//! A [`Dictionary`] holds the two ordered lists of a language: `primary`
//! (words that may be chosen as the target) and `supplement` (accepted as
//! guesses only). A [`CanonicalIndex`] maps the normalized form of every word
//! to its properly accented spelling.

use crate::core::NormalizationMap;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

/// Primary and supplement word lists with exact membership
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    primary: Vec<String>,
    supplement: Vec<String>,
    members: FxHashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new(primary: Vec<String>, supplement: Vec<String>) -> Self {
        let members = primary.iter().chain(&supplement).cloned().collect();
        Self {
            primary,
            supplement,
            members,
        }
    }

    /// Words eligible as the target, in list order
    #[inline]
    #[must_use]
    pub fn primary(&self) -> &[String] {
        &self.primary
    }

    /// Words accepted only as guesses, in list order
    #[inline]
    #[must_use]
    pub fn supplement(&self) -> &[String] {
        &self.supplement
    }

    /// Exact membership in either list
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    /// Number of distinct words across both lists
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Normalized form → first-seen canonical spelling
#[derive(Debug, Clone, Default)]
pub struct CanonicalIndex {
    entries: FxHashMap<String, String>,
    collisions: usize,
}

impl CanonicalIndex {
    /// Build the index over `primary` then `supplement`, in list order
    ///
    /// The first word to claim a normalized key keeps it; later words with the
    /// same normalized form are counted as collisions and otherwise ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_global::core::{LanguageRules, NormalizationMap};
    /// use wordle_global::wordlists::CanonicalIndex;
    ///
    /// let norm = NormalizationMap::build(&LanguageRules::new().with_diacritics('a', ['ä']));
    /// let index = CanonicalIndex::build(&["bären"], &["baren"], &norm);
    ///
    /// assert_eq!(index.lookup("baren"), Some("bären"));
    /// assert_eq!(index.collisions(), 1);
    /// ```
    #[must_use]
    pub fn build<S: AsRef<str>>(primary: &[S], supplement: &[S], norm: &NormalizationMap) -> Self {
        let mut entries: FxHashMap<String, String> =
            FxHashMap::with_capacity_and_hasher(primary.len() + supplement.len(), FxBuildHasher);
        let mut collisions = 0;

        for word in primary.iter().chain(supplement).map(AsRef::<str>::as_ref) {
            let key = norm.normalize(word);
            match entries.get(&key) {
                Some(existing) if existing != word => collisions += 1,
                Some(_) => {}
                None => {
                    entries.insert(key, word.to_string());
                }
            }
        }

        Self {
            entries,
            collisions,
        }
    }

    /// Canonical spelling for an already normalized key
    #[inline]
    #[must_use]
    pub fn lookup(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(String::as_str)
    }

    /// Number of distinct normalized keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words that lost their key to an earlier, different spelling
    #[inline]
    #[must_use]
    pub const fn collisions(&self) -> usize {
        self.collisions
    }
}

/// Validate a guess and return the spelling to submit
///
/// 1. `allow_any_word` accepts the input unchanged
/// 2. An exact entry of either list is returned as typed
/// 3. Otherwise the normalized input is looked up and the canonical, accented
///    spelling is returned, so `grun` is accepted as `grün`
/// 4. Anything else is rejected with `None`
///
/// # Examples
/// ```
/// use wordle_global::core::{LanguageRules, NormalizationMap};
/// use wordle_global::wordlists::{CanonicalIndex, Dictionary, check_word};
///
/// let norm = NormalizationMap::build(&LanguageRules::new().with_diacritics('u', ['ü']));
/// let dictionary = Dictionary::new(vec!["grün".to_string()], vec![]);
/// let index = CanonicalIndex::build(dictionary.primary(), dictionary.supplement(), &norm);
///
/// assert_eq!(check_word("grun", &dictionary, &index, &norm, false).as_deref(), Some("grün"));
/// assert_eq!(check_word("xxxx", &dictionary, &index, &norm, false), None);
/// assert_eq!(check_word("xxxx", &dictionary, &index, &norm, true).as_deref(), Some("xxxx"));
/// ```
#[must_use]
pub fn check_word(
    input: &str,
    dictionary: &Dictionary,
    index: &CanonicalIndex,
    norm: &NormalizationMap,
    allow_any_word: bool,
) -> Option<String> {
    if allow_any_word || dictionary.contains(input) {
        return Some(input.to_string());
    }

    index.lookup(&norm.normalize(input)).map(str::to_string)
}
