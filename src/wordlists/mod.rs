//! Word lists for every supported language
//!
//! Embedded language packs, directory loading, dictionary lookup and list
//! auditing.

pub mod audit;
mod dictionary;
mod embedded;
pub mod loader;

pub use audit::{AuditReport, MIN_WORD_COUNT, audit};
pub use dictionary::{CanonicalIndex, Dictionary, check_word};
pub use embedded::{EmbeddedLanguage, LANGUAGES};
pub use loader::{LanguageConfig, LanguagePack, embedded_packs, load_packs};
