//! Build script to generate the embedded language pack
//!
//! Reads every `data/languages/<code>/` directory and generates Rust source
//! with const arrays for the word lists and the raw language config.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LANGUAGES_DIR: &str = "data/languages";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("languages.rs");

    let mut codes: Vec<String> = fs::read_dir(LANGUAGES_DIR)
        .unwrap_or_else(|e| panic!("Failed to read {LANGUAGES_DIR}: {e}"))
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    codes.sort();

    let mut file = fs::File::create(&dest).unwrap();
    writeln!(file, "/// Languages bundled from `{LANGUAGES_DIR}` ({} languages)", codes.len()).unwrap();
    writeln!(file, "pub const LANGUAGES: &[EmbeddedLanguage] = &[").unwrap();

    for code in &codes {
        let dir = Path::new(LANGUAGES_DIR).join(code);
        let primary = read_lines(&dir.join(format!("{code}_5words.txt")));
        let supplement = read_lines(&dir.join(format!("{code}_5words_supplement.txt")));
        let characters = read_lines(&dir.join(format!("{code}_characters.txt")));
        let blocklist = read_lines(&dir.join(format!("{code}_blocklist.txt")));
        let config = fs::read_to_string(dir.join("language_config.json")).unwrap_or_default();

        writeln!(file, "    EmbeddedLanguage {{").unwrap();
        writeln!(file, "        code: {code:?},").unwrap();
        writeln!(file, "        primary: &{primary:?},").unwrap();
        writeln!(file, "        supplement: &{supplement:?},").unwrap();
        writeln!(file, "        characters: &{characters:?},").unwrap();
        writeln!(file, "        blocklist: &{blocklist:?},").unwrap();
        writeln!(file, "        config: {config:?},").unwrap();
        writeln!(file, "    }},").unwrap();
    }

    writeln!(file, "];").unwrap();

    // Rebuild if the language pack changes
    println!("cargo:rerun-if-changed={LANGUAGES_DIR}");
    for code in &codes {
        println!("cargo:rerun-if-changed={LANGUAGES_DIR}/{code}");
    }
}

/// Non-empty, trimmed lines of a file; a missing file yields no lines
fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|content| {
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
