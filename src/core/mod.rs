//! Core domain types for multilingual Wordle
//!
//! Equivalence rules, normalization, words and feedback scoring. Everything
//! here is pure and operates on immutable, per-language structures.

mod feedback;
mod keyboard;
mod normalize;
mod rules;
mod word;

pub use feedback::{Feedback, Tag};
pub use keyboard::{KeyHint, KeyboardState, diacritic_hints};
pub use normalize::NormalizationMap;
pub use rules::{LanguageRules, RulesError};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;
