//! End-to-end scenarios against the bundled language packs

use chrono::{Duration, TimeZone, Utc};
use wordle_global::core::{Tag, Word};
use wordle_global::stats::{GameOutcome, OutcomeLog, aggregate};
use wordle_global::wordlists::embedded_packs;
use wordle_global::{Game, GameStatus, GuessError, LanguageSession};

use Tag::{Absent, Correct, Present};

fn session(code: &str) -> LanguageSession {
    let packs = embedded_packs().unwrap();
    let pack = packs.iter().find(|pack| pack.code == code).unwrap();
    LanguageSession::from_pack(pack).unwrap()
}

#[test]
fn english_crane_against_slate() {
    let en = session("en");
    let mut game = Game::new(&en, Word::new("slate").unwrap());

    let attempt = game.submit("crane").unwrap();
    assert_eq!(
        attempt.feedback().tags(),
        &[Absent, Absent, Correct, Absent, Correct]
    );

    game.submit("slate").unwrap();
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn english_duplicate_letters() {
    let en = session("en");
    let feedback = en.score(&Word::new("abase").unwrap(), &Word::new("aback").unwrap());
    assert_eq!(feedback.tags(), &[Correct, Correct, Correct, Absent, Absent]);
}

#[test]
fn english_supplement_is_guess_only() {
    let en = session("en");
    assert_eq!(en.check_word("salet").as_deref(), Some("salet"));
    assert!(!en.dictionary().primary().iter().any(|w| w == "salet"));
}

#[test]
fn german_plain_letters_reach_umlauts() {
    let de = session("de");
    assert_eq!(de.check_word("grune").as_deref(), Some("grüne"));
    assert_eq!(de.check_word("große").as_deref(), Some("größe"));
    assert_eq!(de.check_word("grosse"), None);

    let mut game = Game::new(&de, Word::new("grüne").unwrap());
    let attempt = game.submit("grune").unwrap();
    assert_eq!(attempt.word().text(), "grüne");
    assert_eq!(attempt.feedback().display_word(), "grüne");
    assert_eq!(game.status(), GameStatus::Won);

    let norm = de.normalization();
    assert_eq!(game.keyboard().get('ü', norm), Some(Correct));
    assert_eq!(game.keyboard().get('u', norm), Some(Correct));
}

#[test]
fn german_scoring_folds_umlauts() {
    let de = session("de");
    let feedback = de.score(&Word::new("abend").unwrap(), &Word::new("bären").unwrap());
    assert_eq!(feedback.tags(), &[Present, Present, Present, Present, Absent]);
}

#[test]
fn norwegian_letters_are_distinct() {
    let nb = session("nb");
    assert_eq!(nb.check_word("først").as_deref(), Some("først"));
    assert_eq!(nb.check_word("forst"), None);

    let mut game = Game::new(&nb, Word::new("først").unwrap());
    assert_eq!(
        game.submit("forst").unwrap_err(),
        GuessError::NotInWordList("forst".to_string())
    );
    assert!(game.attempts().is_empty());
}

#[test]
fn hebrew_final_letters_match_regular_forms() {
    let he = session("he");
    assert!(he.right_to_left());

    // Final mem typed as a regular mem
    assert_eq!(he.check_word("ילדימ").as_deref(), Some("ילדים"));
    assert_eq!(he.display_form("ילדימ"), "ילדים");

    let feedback = he.score(&Word::new("מלכים").unwrap(), &Word::new("ילדים").unwrap());
    assert_eq!(feedback.tags(), &[Absent, Correct, Absent, Correct, Correct]);
}

#[test]
fn greek_accents_and_final_sigma() {
    let el = session("el");
    assert_eq!(el.check_word("λογοσ").as_deref(), Some("λόγος"));
    assert_eq!(el.check_word("ΛΟΓΟΣ").as_deref(), Some("λόγος"));

    let mut game = Game::new(&el, Word::new("λόγος").unwrap());
    let attempt = game.submit("φιλος").unwrap();
    assert_eq!(attempt.word().text(), "φίλος");
    assert_eq!(attempt.feedback().tags(), &[Absent, Absent, Present, Correct, Correct]);
}

#[test]
fn streaks_across_a_log() {
    let start = Utc.with_ymd_and_hms(2026, 2, 1, 20, 0, 0).unwrap();
    let mut log = OutcomeLog::new();
    for (day, won) in [true, true, false, true, true, true].into_iter().enumerate() {
        log.append(GameOutcome {
            language: "en".to_string(),
            target: "crane".to_string(),
            won,
            attempts: if won { 3 } else { 6 },
            played_at: start + Duration::days(day as i64),
        });
    }

    let snapshot = aggregate(log.outcomes());
    assert_eq!(snapshot.current_streak, 3);
    assert_eq!(snapshot.longest_streak, 3);
    assert_eq!(snapshot.distribution[2], 5);
    assert_eq!(aggregate(&[]).games, 0);
}

#[test]
fn finished_game_feeds_statistics() {
    let en = session("en");
    let mut game = Game::new(&en, Word::new("party").unwrap());
    game.submit("apple").unwrap();
    game.submit("party").unwrap();

    let mut log = OutcomeLog::new();
    log.append(game.outcome(Utc::now()).unwrap());

    let snapshot = aggregate(log.outcomes());
    assert_eq!(snapshot.wins, 1);
    assert_eq!(snapshot.distribution[1], 1);
    assert!((snapshot.avg_attempts - 2.0).abs() < f64::EPSILON);
}
