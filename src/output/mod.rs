//! Terminal output formatting
//!
//! Colored tiles, keyboard, statistics and audit reports for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit_report, print_check_result, print_keyboard, print_languages, print_row,
    print_score_result, print_stats,
};
pub use formatters::share_text;
