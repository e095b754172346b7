//! Guess feedback calculation
//!
//! Feedback is one [`Tag`] per position plus the letters to display. Letter
//! comparison goes through a [`NormalizationMap`], so `a` and `ä` count as the
//! same letter in languages that fold them, including for duplicate handling.

use super::{NormalizationMap, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for one letter
///
/// Ordered by strength: `Absent < Present < Correct`. The ordering is the key
/// state lattice, see [`Tag::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Letter not in the target (or all its occurrences are already claimed)
    Absent,
    /// Letter in the target at another position
    Present,
    /// Letter in the correct position
    Correct,
}

impl Tag {
    /// Combine two observations of the same letter, keeping the stronger one
    ///
    /// # Examples
    /// ```
    /// use wordle_global::core::Tag;
    ///
    /// assert_eq!(Tag::Correct.merge(Tag::Present), Tag::Correct);
    /// assert_eq!(Tag::Absent.merge(Tag::Present), Tag::Present);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Emoji square used in share grids
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Scored row: tags plus the letters to render
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    tags: [Tag; WORD_LENGTH],
    display: [char; WORD_LENGTH],
}

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. Count the normalized letters of the target
    /// 2. First pass: mark every position whose letters match under
    ///    normalization as correct and take that letter out of the pool
    /// 3. Second pass: for each remaining position, mark present if the pool
    ///    still holds the normalized letter (and take it), absent otherwise
    ///
    /// The first pass finishes before the second begins, so a correct match
    /// always reserves its occurrence ahead of a present match elsewhere.
    ///
    /// Correct tiles display the target's letter: typing `a` against a target
    /// `ä` shows `ä`. Other tiles show the guessed letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_global::core::{Feedback, NormalizationMap, Tag, Word};
    ///
    /// let norm = NormalizationMap::default();
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &target, &norm);
    ///
    /// use Tag::{Absent, Correct};
    /// assert_eq!(feedback.tags(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word, norm: &NormalizationMap) -> Self {
        let guess_letters = guess.letters();
        let target_letters = target.letters();
        debug_assert_eq!(guess_letters.len(), target_letters.len());

        let mut tags = [Tag::Absent; WORD_LENGTH];
        let mut display = *guess_letters;

        let mut available: FxHashMap<char, u8> = FxHashMap::default();
        for &letter in target_letters {
            *available.entry(norm.normalize_char(letter)).or_insert(0) += 1;
        }

        // First pass: correct positions reserve their occurrence
        // Allow: Index needed to access guess[i], target[i], and set tags[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if norm.chars_match(guess_letters[i], target_letters[i]) {
                tags[i] = Tag::Correct;
                display[i] = target_letters[i];

                if let Some(count) = available.get_mut(&norm.normalize_char(guess_letters[i])) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters drawn from what is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if tags[i] == Tag::Correct {
                continue;
            }

            if let Some(count) = available.get_mut(&norm.normalize_char(guess_letters[i]))
                && *count > 0
            {
                tags[i] = Tag::Present;
                *count -= 1;
            }
        }

        Self { tags, display }
    }

    /// Per-position tags
    #[inline]
    #[must_use]
    pub const fn tags(&self) -> &[Tag; WORD_LENGTH] {
        &self.tags
    }

    /// Per-position display letters
    #[inline]
    #[must_use]
    pub const fn display(&self) -> &[char; WORD_LENGTH] {
        &self.display
    }

    /// Display letters as a string
    #[must_use]
    pub fn display_word(&self) -> String {
        self.display.iter().collect()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.tags.iter().all(|&tag| tag == Tag::Correct)
    }

    /// Count the positions carrying `tag`
    #[must_use]
    pub fn count(&self, tag: Tag) -> usize {
        self.tags.iter().filter(|&&t| t == tag).count()
    }

    /// Convert the row to an emoji string like "⬜⬜🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.tags.iter().map(|tag| tag.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
