//! Embedded language pack
//!
//! Word lists and configs compiled into the binary at build time from
//! `data/languages/<code>/`.

/// One language as found on disk at build time
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedLanguage {
    pub code: &'static str,
    pub primary: &'static [&'static str],
    pub supplement: &'static [&'static str],
    pub characters: &'static [&'static str],
    /// Words accepted as guesses but never drawn as targets
    pub blocklist: &'static [&'static str],
    /// Raw `language_config.json`, empty when the language has none
    pub config: &'static str,
}

// Include generated language table from build script
include!(concat!(env!("OUT_DIR"), "/languages.rs"));
