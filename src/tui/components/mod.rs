//! # TUI Components
//!
//! ## Stateless (props only)
//! - `Header`: signed-in user and section tabs
//! - `InternshipDetail`: one internship plus its shortlist
//! - `DashboardSummary`, `CompaniesView`, `ReportsView`: aggregates
//!
//! ## Stateful (persistent state + transient render wrapper)
//! - `LoginForm`
//! - `InternshipTable` / `InternshipTableState`
//! - `CandidateTable` / `CandidateTableState`
//!
//! Stateful components implement `EventHandler` and emit high-level events;
//! `tui::mod` turns those into core `Action`s. No component touches `App`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod candidate_table;
pub mod header;
pub mod internship_detail;
pub mod internship_table;
pub mod login_form;
pub mod summary;
pub mod text_field;

pub use candidate_table::{CandidateTable, CandidateTableEvent, CandidateTableState};
pub use header::Header;
pub use internship_detail::InternshipDetail;
pub use internship_table::{InternshipTable, InternshipTableEvent, InternshipTableState};
pub use login_form::{LoginEvent, LoginForm};
pub use summary::{CompaniesView, DashboardSummary, ReportsView};

/// Truncates `text` to at most `width` display columns, ending in `…` when cut.
pub fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_short_text_unchanged() {
        assert_eq!(fit("Delhi", 10), "Delhi");
        assert_eq!(fit("Delhi", 5), "Delhi");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("Software Development Intern", 8), "Softwar…");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn test_fit_counts_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(fit("日本語テキスト", 5), "日本…");
    }
}
