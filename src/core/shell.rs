//! # View-State Shell
//!
//! The single source of truth for which screen is visible, who is signed in,
//! and which internship is drilled into.
//!
//! ```text
//!              LoginSucceeded
//!   login ─────────────────────▶ dashboard ◀──── Back ──── candidates
//!     ▲                            │    │                       ▲
//!     │ Logout (from anywhere)     │    └── ViewApplicants(id) ─┘
//!     │                            │ SelectInternship(id)
//!     │                            ▼
//!     │     internships ◀── Back ── internship-detail
//!     │           └── SelectInternship(id) ──▲
//!
//!   Navigate(page): any signed-in screen → a top-level page
//!                   ("candidates" lands on candidates-db)
//! ```
//!
//! Transitions are pure: `shell.transition(&event)` returns the next shell
//! and never touches the network.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Dashboard,
    Internships,
    InternshipDetail,
    /// Global candidate directory.
    CandidatesDb,
    /// Applicants for the selected internship.
    Candidates,
    Companies,
    Reports,
}

impl Screen {
    pub const TOP_LEVEL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Internships,
        Screen::CandidatesDb,
        Screen::Companies,
        Screen::Reports,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Dashboard => "dashboard",
            Screen::Internships => "internships",
            Screen::InternshipDetail => "internship-detail",
            Screen::CandidatesDb => "candidates-db",
            Screen::Candidates => "candidates",
            Screen::Companies => "companies",
            Screen::Reports => "reports",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Dashboard => "Dashboard",
            Screen::Internships => "Internships",
            Screen::InternshipDetail => "Internship",
            Screen::CandidatesDb => "Candidates",
            Screen::Candidates => "Applicants",
            Screen::Companies => "Companies",
            Screen::Reports => "Reports",
        }
    }

    /// Screens that only make sense with a selected internship.
    pub fn needs_selection(self) -> bool {
        matches!(self, Screen::InternshipDetail | Screen::Candidates)
    }

    /// The top-level tab this screen belongs to, for header highlighting.
    pub fn section(self) -> Screen {
        match self {
            Screen::InternshipDetail => Screen::Internships,
            Screen::Candidates => Screen::Dashboard,
            other => other,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScreen(pub String);

impl fmt::Display for UnknownScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown screen: {}", self.0)
    }
}

impl std::error::Error for UnknownScreen {}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let screen = match s.trim() {
            "login" => Screen::Login,
            "dashboard" => Screen::Dashboard,
            "internships" => Screen::Internships,
            "internship-detail" => Screen::InternshipDetail,
            "candidates-db" => Screen::CandidatesDb,
            "candidates" => Screen::Candidates,
            "companies" => Screen::Companies,
            "reports" => Screen::Reports,
            other => return Err(UnknownScreen(other.to_string())),
        };
        Ok(screen)
    }
}

/// The signed-in administrator.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub signed_in_at: DateTime<Local>,
}

/// Everything that can move the shell between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    LoginSucceeded { username: String },
    LoginFailed,
    Logout,
    SelectInternship(String),
    ViewApplicants(String),
    Back,
    /// Top-level navigation by page name.
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    pub screen: Screen,
    pub session: Option<Session>,
    /// Present only while on a screen that `needs_selection`.
    pub selected_id: Option<String>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            session: None,
            selected_id: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    /// Maps a requested page name to a screen.
    ///
    /// `"candidates"` from top-level navigation means the global directory,
    /// never the per-internship applicant list.
    pub fn resolve_page(page: &str) -> Option<Screen> {
        match page.trim().parse::<Screen>() {
            Ok(Screen::Candidates) => Some(Screen::CandidatesDb),
            Ok(screen) if screen.needs_selection() => None,
            Ok(screen) => Some(screen),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    /// Computes the next shell for `event`. Events that do not apply in the
    /// current state return an unchanged copy.
    pub fn transition(&self, event: &NavEvent) -> Shell {
        let next = self.next(event);
        if next.screen != self.screen {
            debug!("Shell: {} -> {} via {:?}", self.screen, next.screen, event);
        }
        next
    }

    fn next(&self, event: &NavEvent) -> Shell {
        if !self.is_authenticated() {
            return match event {
                NavEvent::LoginSucceeded { username } => Shell {
                    screen: Screen::Dashboard,
                    session: Some(Session {
                        username: username.clone(),
                        signed_in_at: Local::now(),
                    }),
                    selected_id: None,
                },
                _ => self.clone(),
            };
        }

        match event {
            NavEvent::Logout => Shell::new(),
            NavEvent::LoginSucceeded { .. } | NavEvent::LoginFailed => self.clone(),
            NavEvent::SelectInternship(id) => match self.screen {
                Screen::Dashboard | Screen::Internships => self.drill_into(Screen::InternshipDetail, id),
                _ => self.clone(),
            },
            NavEvent::ViewApplicants(id) => match self.screen {
                Screen::Dashboard | Screen::Internships | Screen::InternshipDetail => {
                    self.drill_into(Screen::Candidates, id)
                }
                _ => self.clone(),
            },
            NavEvent::Back => match self.screen {
                Screen::InternshipDetail => self.land_on(Screen::Internships),
                Screen::Candidates => self.land_on(Screen::Dashboard),
                _ => self.clone(),
            },
            NavEvent::Navigate(page) if page.trim() == "login" => Shell::new(),
            NavEvent::Navigate(page) => match Self::resolve_page(page) {
                Some(screen) => self.land_on(screen),
                None => self.clone(),
            },
        }
    }

    fn drill_into(&self, screen: Screen, id: &str) -> Shell {
        let id = id.trim();
        if id.is_empty() {
            warn!("Ignoring {} without an internship id", screen);
            return self.clone();
        }
        Shell {
            screen,
            session: self.session.clone(),
            selected_id: Some(id.to_string()),
        }
    }

    fn land_on(&self, screen: Screen) -> Shell {
        Shell {
            screen,
            session: self.session.clone(),
            selected_id: None,
        }
    }
}
