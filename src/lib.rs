//! Wordle Global
//!
//! Multilingual Wordle evaluation: dictionary matching and guess scoring under
//! per-language letter equivalences (diacritics, Hebrew final letters, Greek
//! final sigma), plus statistics over completed games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_global::{Game, GameStatus, LanguageSession};
//! use wordle_global::core::{LanguageRules, Tag, Word};
//! use wordle_global::wordlists::Dictionary;
//!
//! let rules = LanguageRules::new().with_diacritics('u', ['ü']);
//! let dictionary = Dictionary::new(vec!["grüne".to_string(), "apfel".to_string()], vec![]);
//! let session = LanguageSession::new("de", rules, dictionary);
//!
//! let mut game = Game::new(&session, Word::new("grüne").unwrap());
//! let attempt = game.submit("grune").unwrap();
//!
//! assert_eq!(attempt.feedback().tags(), &[Tag::Correct; 5]);
//! assert_eq!(attempt.feedback().display_word(), "grüne");
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word lists and language packs
pub mod wordlists;

// Per-language state
pub mod session;

// Game controller
pub mod game;

// Outcome log and aggregation
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;

pub use game::{Game, GameStatus, GuessAttempt, GuessError, MAX_ATTEMPTS};
pub use session::LanguageSession;
