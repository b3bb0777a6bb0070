//! # Application State
//!
//! Core state for the console. Domain logic only - no TUI-specific types.
//! Presentation state (search boxes, cursors) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ConsoleBackend>  // where screens fetch from
//! ├── shell: Shell                      // current screen + session + selection
//! ├── status_message: String            // status bar text
//! ├── login_error: Option<String>       // last failed login
//! ├── login_pending: bool               // credential check in flight
//! ├── generation: u64                   // bumps on every screen mount
//! └── page: PageData                    // data fetched by the current screen
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;
use std::sync::Arc;

use crate::api::ConsoleBackend;
use crate::core::config::ResolvedConfig;
use crate::core::models::{Candidate, Internship};
use crate::core::shell::{Screen, Shell};

/// Something a screen fetches when it mounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Internships,
    Internship(String),
    Applicants(String),
    Candidates,
    Shortlist(String),
}

impl Resource {
    /// What `screen` fetches on mount, given the selected internship.
    pub fn for_screen(screen: Screen, selected_id: Option<&str>) -> Vec<Resource> {
        match (screen, selected_id) {
            (Screen::Login, _) => vec![],
            (Screen::Dashboard, _) => vec![Resource::Internships, Resource::Candidates],
            (Screen::Internships, _) | (Screen::Companies, _) => vec![Resource::Internships],
            (Screen::CandidatesDb, _) => vec![Resource::Candidates],
            (Screen::Reports, _) => vec![Resource::Internships, Resource::Candidates],
            (Screen::InternshipDetail, Some(id)) => vec![Resource::Internship(id.to_string())],
            (Screen::Candidates, Some(id)) => vec![Resource::Applicants(id.to_string())],
            (Screen::InternshipDetail, None) | (Screen::Candidates, None) => vec![],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Internships => write!(f, "internships"),
            Resource::Internship(id) => write!(f, "internship {id}"),
            Resource::Applicants(id) => write!(f, "applicants for {id}"),
            Resource::Candidates => write!(f, "candidates"),
            Resource::Shortlist(id) => write!(f, "shortlist for {id}"),
        }
    }
}

/// A successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Internships(Vec<Internship>),
    Internship(Internship),
    Candidates(Vec<Candidate>),
    Shortlist(Vec<Candidate>),
}

/// Data owned by the mounted screen. Reset to empty on every mount; failed
/// fetches leave the empty value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageData {
    pub internships: Vec<Internship>,
    pub internship: Option<Internship>,
    pub candidates: Vec<Candidate>,
    pub shortlist: Vec<Candidate>,
    /// True once a shortlist run has been requested on this mount.
    pub shortlist_requested: bool,
    pub pending: Vec<Resource>,
}

impl PageData {
    pub fn is_loading(&self) -> bool {
        self.pending
            .iter()
            .any(|r| !matches!(r, Resource::Shortlist(_)))
    }

    pub fn is_shortlisting(&self) -> bool {
        self.pending
            .iter()
            .any(|r| matches!(r, Resource::Shortlist(_)))
    }

    pub(crate) fn settle(&mut self, resource: &Resource) {
        self.pending.retain(|r| r != resource);
    }

    pub(crate) fn store(&mut self, payload: Payload) {
        match payload {
            Payload::Internships(items) => self.internships = items,
            Payload::Internship(item) => self.internship = Some(item),
            Payload::Candidates(items) => self.candidates = items,
            Payload::Shortlist(items) => self.shortlist = items,
        }
    }
}

pub struct App {
    pub backend: Arc<dyn ConsoleBackend>,
    pub shell: Shell,
    pub api_base: String,
    pub status_message: String,
    pub login_error: Option<String>,
    pub login_pending: bool,
    /// Bumped on every mount. Fetch results tagged with an older generation
    /// belong to a screen that is gone and are dropped.
    pub generation: u64,
    pub page: PageData,
    /// Prefills the login form.
    pub default_username: Option<String>,
}

impl App {
    pub fn new(backend: Arc<dyn ConsoleBackend>, api_base: String) -> Self {
        Self {
            backend,
            shell: Shell::new(),
            api_base,
            status_message: String::from("Sign in to continue"),
            login_error: None,
            login_pending: false,
            generation: 0,
            page: PageData::default(),
            default_username: None,
        }
    }

    pub fn from_config(backend: Arc<dyn ConsoleBackend>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(backend, config.api_base.clone());
        app.default_username = config.username.clone();
        app
    }

    pub fn screen(&self) -> Screen {
        self.shell.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.status_message, "Sign in to continue");
        assert!(!app.login_pending);
        assert_eq!(app.generation, 0);
        assert_eq!(app.page, PageData::default());
    }

    #[test]
    fn test_resources_per_screen() {
        assert!(Resource::for_screen(Screen::Login, None).is_empty());
        assert_eq!(
            Resource::for_screen(Screen::InternshipDetail, Some("42")),
            vec![Resource::Internship("42".to_string())]
        );
        assert_eq!(
            Resource::for_screen(Screen::Candidates, Some("42")),
            vec![Resource::Applicants("42".to_string())]
        );
        assert_eq!(
            Resource::for_screen(Screen::CandidatesDb, None),
            vec![Resource::Candidates]
        );
        assert!(Resource::for_screen(Screen::Candidates, None).is_empty());
    }

    #[test]
    fn test_shortlist_does_not_count_as_page_loading() {
        let page = PageData {
            pending: vec![Resource::Shortlist("1".to_string())],
            ..Default::default()
        };
        assert!(!page.is_loading());
        assert!(page.is_shortlisting());
    }
}
