//! Dictionary lookup for a single word

use crate::LanguageSession;

/// Outcome of checking one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Input after trimming, composition and lowercasing
    pub input: String,
    /// Spelling the game would submit, `None` if rejected
    pub accepted: Option<String>,
}

/// Check `input` against the session's dictionary
#[must_use]
pub fn check_word(session: &LanguageSession, input: &str) -> CheckResult {
    let input = session.prepare_input(input);
    let accepted = session.check_word(&input);
    log::debug!("[{}] check '{input}' -> {accepted:?}", session.code());
    CheckResult { input, accepted }
}
