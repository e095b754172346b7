//! Audit every language pack's word lists
//!
//! Languages are independent, so they are audited in parallel.

use crate::wordlists::{AuditReport, LanguagePack, audit};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Reports for all audited languages plus totals
#[derive(Debug, Default)]
pub struct AuditSummary {
    /// One report per language, in code order
    pub reports: Vec<AuditReport>,
    pub total_words: usize,
    pub total_issues: usize,
    pub duration: Duration,
}

impl AuditSummary {
    /// Languages with at least one finding
    #[must_use]
    pub fn failing(&self) -> Vec<&AuditReport> {
        self.reports.iter().filter(|r| !r.is_clean()).collect()
    }
}

/// Audit `packs`, optionally drawing a progress bar on stderr
#[must_use]
pub fn run_audit(packs: &[LanguagePack], show_progress: bool) -> AuditSummary {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(packs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} languages | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut reports: Vec<AuditReport> = packs
        .par_iter()
        .map(|pack| {
            let report = audit(pack);
            pb.set_message(pack.code.clone());
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("Complete!");

    reports.sort_by(|a, b| a.code.cmp(&b.code));
    let total_words = reports
        .iter()
        .map(|r| r.primary_count + r.supplement_count)
        .sum();
    let total_issues = reports.iter().map(AuditReport::issue_count).sum();

    log::debug!(
        "Audited {} languages ({total_words} words) in {:?}",
        reports.len(),
        start.elapsed()
    );

    AuditSummary {
        reports,
        total_words,
        total_issues,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{LanguageConfig, embedded_packs};

    #[test]
    fn embedded_packs_pass() {
        let packs = embedded_packs().unwrap();
        let summary = run_audit(&packs, false);

        assert_eq!(summary.reports.len(), packs.len());
        assert_eq!(summary.total_issues, 0);
        assert!(summary.failing().is_empty());
        assert!(summary.total_words > 0);
    }

    #[test]
    fn reports_are_sorted_and_summed() {
        let pack = |code: &str, primary: &[&str]| LanguagePack {
            code: code.to_string(),
            config: LanguageConfig {
                language_code: code.to_string(),
                name: code.to_uppercase(),
                name_native: code.to_uppercase(),
                ..LanguageConfig::default()
            },
            primary: primary.iter().map(|w| (*w).to_string()).collect(),
            supplement: Vec::new(),
            characters: Vec::new(),
            blocklist: Vec::new(),
        };
        let packs = vec![
            pack("zz", &["crane", "toolong"]),
            pack("aa", &["slate", "slate"]),
        ];

        let summary = run_audit(&packs, false);
        let codes: Vec<&str> = summary.reports.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["aa", "zz"]);
        assert_eq!(summary.total_words, 4);
        assert_eq!(summary.total_issues, 2);
        assert_eq!(summary.failing().len(), 2);
    }
}
