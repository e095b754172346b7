//! Character normalization derived from [`LanguageRules`]
//!
//! The map is a reverse index from every variant letter to its canonical base,
//! covering both diacritic folding and word-final forms. Unmapped letters
//! normalize to themselves.

use super::LanguageRules;
use rustc_hash::FxHashMap;

/// Reverse index from variant letter to canonical base
///
/// Built once per language and never mutated; rebuild it if the rules change.
/// Normalization is idempotent: `normalize_char(normalize_char(c)) ==
/// normalize_char(c)` for every `c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationMap {
    canonical: FxHashMap<char, char>,
}

impl NormalizationMap {
    /// Build the map for a language
    ///
    /// Every diacritic variant maps to its base, every final form maps to its
    /// regular letter (never the reverse). When entries chain (a final form
    /// whose regular letter is itself a variant) the chain is resolved to its
    /// end, so the result stays idempotent. The first mapping of a letter wins
    /// and an entry that would close a cycle is dropped.
    ///
    /// "First" is a fixed order, not config order: diacritic groups by base
    /// letter in code-point order (variants in listed order), then final forms
    /// by regular letter in code-point order. A variant listed under both `a`
    /// and `o` therefore always folds to `a`.
    ///
    /// # Examples
    /// ```
    /// use wordle_global::core::{LanguageRules, NormalizationMap};
    ///
    /// let rules = LanguageRules::new()
    ///     .with_diacritics('a', ['ä'])
    ///     .with_final_form('σ', 'ς');
    /// let map = NormalizationMap::build(&rules);
    ///
    /// assert_eq!(map.normalize("bär"), "bar");
    /// assert_eq!(map.normalize_char('ς'), 'σ');
    /// assert!(map.chars_match('a', 'ä'));
    /// ```
    #[must_use]
    pub fn build(rules: &LanguageRules) -> Self {
        let mut edges: FxHashMap<char, char> = FxHashMap::default();

        for (&base, variants) in rules.diacritic_groups() {
            for &variant in variants {
                insert_edge(&mut edges, variant, base);
            }
        }

        for (&regular, &final_form) in rules.final_forms() {
            insert_edge(&mut edges, final_form, regular);
        }

        let canonical = edges
            .keys()
            .map(|&variant| (variant, resolve(&edges, variant)))
            .collect();

        Self { canonical }
    }

    /// Canonical base of a single letter
    #[inline]
    #[must_use]
    pub fn normalize_char(&self, letter: char) -> char {
        self.canonical.get(&letter).copied().unwrap_or(letter)
    }

    /// Canonical form of a word, one code point at a time
    #[must_use]
    pub fn normalize(&self, word: &str) -> String {
        word.chars().map(|c| self.normalize_char(c)).collect()
    }

    /// Whether two letters belong to the same equivalence class
    #[inline]
    #[must_use]
    pub fn chars_match(&self, a: char, b: char) -> bool {
        self.normalize_char(a) == self.normalize_char(b)
    }

    /// Number of letters that fold to something other than themselves
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

/// Add `variant → base` unless `variant` is already mapped or the edge closes a cycle
fn insert_edge(edges: &mut FxHashMap<char, char>, variant: char, base: char) {
    if let Some(&existing) = edges.get(&variant) {
        if existing != base {
            log::warn!("'{variant}' already folds to '{existing}', ignoring mapping to '{base}'");
        }
        return;
    }

    if resolve(edges, base) == variant {
        if variant != base {
            log::warn!("Mapping '{variant}' to '{base}' would create a cycle, ignoring");
        }
        return;
    }

    edges.insert(variant, base);
}

/// Follow edges to the root letter. The edge set is kept acyclic by `insert_edge`.
fn resolve(edges: &FxHashMap<char, char>, mut letter: char) -> char {
    while let Some(&next) = edges.get(&letter) {
        letter = next;
    }
    letter
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> NormalizationMap {
        NormalizationMap::build(
            &LanguageRules::new()
                .with_diacritics('a', ['ä'])
                .with_diacritics('o', ['ö'])
                .with_diacritics('u', ['ü']),
        )
    }

    #[test]
    fn identity_for_unmapped_letters() {
        let map = NormalizationMap::default();
        assert!(map.is_empty());
        assert_eq!(map.normalize_char('ä'), 'ä');
        assert_eq!(map.normalize("grün"), "grün");
    }

    #[test]
    fn diacritics_fold_to_base() {
        let map = german();
        assert_eq!(map.len(), 3);
        assert_eq!(map.normalize("grün"), "grun");
        assert_eq!(map.normalize("größe"), "große"); // ß has no group
    }

    #[test]
    fn chars_match_is_symmetric_and_reflexive() {
        let map = german();
        assert!(map.chars_match('a', 'ä'));
        assert!(map.chars_match('ä', 'a'));
        assert!(map.chars_match('ä', 'ä'));
        assert!(!map.chars_match('a', 'o'));
    }

    #[test]
    fn no_folding_without_a_group() {
        // Norwegian keeps æ, ø and å as distinct letters
        let map = NormalizationMap::build(&LanguageRules::new());
        assert!(!map.chars_match('æ', 'a'));
        assert!(!map.chars_match('ø', 'o'));
        assert!(!map.chars_match('å', 'a'));
    }

    #[test]
    fn final_forms_fold_toward_regular() {
        let map = NormalizationMap::build(
            &LanguageRules::new()
                .with_final_form('כ', 'ך')
                .with_final_form('מ', 'ם'),
        );
        assert_eq!(map.normalize_char('ך'), 'כ');
        assert_eq!(map.normalize_char('כ'), 'כ');
        assert_eq!(map.normalize("שלום"), "שלומ");
    }

    #[test]
    fn normalization_is_idempotent() {
        let rules = LanguageRules::new()
            .with_diacritics('ι', ['ί', 'ϊ', 'ΐ'])
            .with_diacritics('σ', ['ς']) // overlaps with the final-form axis
            .with_final_form('σ', 'ς')
            .with_final_form('x', 'ί'); // chains through a diacritic variant
        let map = NormalizationMap::build(&rules);

        for c in ['ι', 'ί', 'ϊ', 'ΐ', 'σ', 'ς', 'x', 'a'] {
            let once = map.normalize_char(c);
            assert_eq!(map.normalize_char(once), once, "not idempotent for {c}");
        }
    }

    #[test]
    fn chained_entries_resolve_to_root() {
        let rules = LanguageRules::new()
            .with_diacritics('a', ['b'])
            .with_final_form('b', 'c');
        let map = NormalizationMap::build(&rules);
        assert_eq!(map.normalize_char('c'), 'a');
        assert!(map.chars_match('c', 'a'));
    }

    #[test]
    fn cycles_are_broken() {
        let rules = LanguageRules::new()
            .with_diacritics('a', ['b'])
            .with_diacritics('b', ['a']);
        let map = NormalizationMap::build(&rules);

        assert!(map.chars_match('a', 'b'));
        for c in ['a', 'b'] {
            let once = map.normalize_char(c);
            assert_eq!(map.normalize_char(once), once);
        }
    }

    #[test]
    fn shared_variant_folds_to_lowest_base() {
        let later_first = LanguageRules::new()
            .with_diacritics('o', ['ä'])
            .with_diacritics('a', ['ä']);
        let map = NormalizationMap::build(&later_first);
        assert_eq!(map.normalize_char('ä'), 'a');

        let earlier_first = LanguageRules::new()
            .with_diacritics('a', ['ä'])
            .with_diacritics('o', ['ä']);
        assert_eq!(NormalizationMap::build(&earlier_first), map);
    }
}
