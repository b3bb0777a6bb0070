//! # Actions
//!
//! Everything that can happen in the console becomes an `Action`.
//! User submits the login form? That's `Action::SubmitLogin`.
//! A fetch comes back? That's `Action::Loaded { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the adapter should perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::ApiError;
use crate::core::models::LoginOutcome;
use crate::core::shell::{NavEvent, Screen};
use crate::core::state::{App, PageData, Payload, Resource};

#[derive(Debug)]
pub enum Action {
    SubmitLogin {
        username: String,
        password: String,
    },
    LoginCompleted(Result<LoginOutcome, ApiError>),
    Nav(NavEvent),
    /// A fetch finished. `generation` is the mount that requested it.
    Loaded {
        generation: u64,
        resource: Resource,
        result: Result<Payload, ApiError>,
    },
    RunShortlist,
    Refresh,
    Notify(String),
    Quit,
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Login {
        username: String,
        password: String,
    },
    Load {
        generation: u64,
        resources: Vec<Resource>,
    },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SubmitLogin { username, password } => submit_login(app, username, password),
        Action::LoginCompleted(result) => complete_login(app, result),
        Action::Nav(event) => navigate(app, event),
        Action::Loaded {
            generation,
            resource,
            result,
        } => loaded(app, generation, resource, result),
        Action::RunShortlist => run_shortlist(app),
        Action::Refresh => {
            if app.shell.is_authenticated() {
                app.status_message = format!("Refreshed {}", app.screen().title());
                mount(app)
            } else {
                Effect::None
            }
        }
        Action::Notify(message) => {
            app.status_message = message;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit_login(app: &mut App, username: String, password: String) -> Effect {
    if app.shell.is_authenticated() || app.login_pending {
        return Effect::None;
    }
    let username = username.trim().to_string();
    if username.is_empty() || password.is_empty() {
        app.login_error = Some("Enter both username and password".to_string());
        return Effect::None;
    }
    app.login_pending = true;
    app.login_error = None;
    app.status_message = String::from("Signing In...");
    Effect::Login { username, password }
}

fn complete_login(app: &mut App, result: Result<LoginOutcome, ApiError>) -> Effect {
    app.login_pending = false;
    if app.shell.is_authenticated() {
        debug!("Ignoring login result: already signed in");
        return Effect::None;
    }
    match result {
        Ok(outcome) if outcome.success => {
            info!("Signed in as '{}'", outcome.username);
            app.login_error = None;
            app.status_message = format!("Welcome, {}", outcome.username);
            app.shell = app.shell.transition(&NavEvent::LoginSucceeded {
                username: outcome.username,
            });
            mount(app)
        }
        Ok(outcome) => {
            info!("Login rejected for '{}'", outcome.username);
            app.shell = app.shell.transition(&NavEvent::LoginFailed);
            app.login_error = Some(
                outcome
                    .message
                    .unwrap_or_else(|| "Invalid username or password".to_string()),
            );
            app.status_message = String::from("Sign in to continue");
            Effect::None
        }
        Err(e) => {
            warn!("Login request failed: {}", e);
            app.shell = app.shell.transition(&NavEvent::LoginFailed);
            app.login_error = Some(e.to_string());
            app.status_message = String::from("Sign in to continue");
            Effect::None
        }
    }
}

fn navigate(app: &mut App, event: NavEvent) -> Effect {
    let next = app.shell.transition(&event);
    if next == app.shell {
        return Effect::None;
    }
    let signed_out = next.screen == Screen::Login;
    app.shell = next;
    if signed_out {
        info!("Signed out");
        app.login_error = None;
        app.login_pending = false;
        app.status_message = String::from("Signed out");
    }
    mount(app)
}

/// Enters the current screen: fresh generation, empty data, and the fetches
/// that screen needs.
fn mount(app: &mut App) -> Effect {
    app.generation += 1;
    let resources = Resource::for_screen(app.screen(), app.shell.selected_id.as_deref());
    app.page = PageData {
        pending: resources.clone(),
        ..Default::default()
    };
    debug!(
        "Mounted {} (generation {}) fetching {:?}",
        app.screen(),
        app.generation,
        resources
    );
    if resources.is_empty() {
        Effect::None
    } else {
        Effect::Load {
            generation: app.generation,
            resources,
        }
    }
}

fn loaded(
    app: &mut App,
    generation: u64,
    resource: Resource,
    result: Result<Payload, ApiError>,
) -> Effect {
    if generation != app.generation {
        debug!(
            "Dropping {} from generation {} (current {})",
            resource, generation, app.generation
        );
        return Effect::None;
    }
    app.page.settle(&resource);
    match result {
        Ok(payload) => app.page.store(payload),
        Err(e) => warn!("Error fetching {}: {}", resource, e),
    }
    Effect::None
}

fn run_shortlist(app: &mut App) -> Effect {
    if app.screen() != Screen::InternshipDetail || app.page.is_shortlisting() {
        return Effect::None;
    }
    let Some(id) = app.shell.selected_id.clone() else {
        return Effect::None;
    };
    info!("Running AI shortlisting for internship {}", id);
    let resource = Resource::Shortlist(id);
    app.page.shortlist.clear();
    app.page.shortlist_requested = true;
    app.page.pending.push(resource.clone());
    Effect::Load {
        generation: app.generation,
        resources: vec![resource],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Candidate, Internship};
    use crate::test_support::test_app;

    fn login_ok(app: &mut App, username: &str) -> Effect {
        update(
            app,
            Action::LoginCompleted(Ok(LoginOutcome {
                success: true,
                username: username.to_string(),
                message: None,
            })),
        )
    }

    fn signed_in_app() -> App {
        let mut app = test_app();
        update(
            &mut app,
            Action::SubmitLogin {
                username: "admin".to_string(),
                password: "pw".to_string(),
            },
        );
        login_ok(&mut app, "admin");
        app
    }

    #[test]
    fn test_submit_login_requests_credential_check() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::SubmitLogin {
                username: " admin ".to_string(),
                password: "pw".to_string(),
            },
        );
        assert_eq!(
            effect,
            Effect::Login {
                username: "admin".to_string(),
                password: "pw".to_string()
            }
        );
        assert!(app.login_pending);
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_submit_login_rejects_blank_fields() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::SubmitLogin {
                username: "admin".to_string(),
                password: String::new(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(app.login_error.is_some());
        assert!(!app.login_pending);
    }

    #[test]
    fn test_successful_login_mounts_dashboard() {
        let mut app = test_app();
        let effect = login_ok(&mut app, "admin");

        assert_eq!(app.screen(), Screen::Dashboard);
        assert_eq!(app.shell.username(), Some("admin"));
        assert_eq!(
            effect,
            Effect::Load {
                generation: 1,
                resources: vec![Resource::Internships, Resource::Candidates],
            }
        );
        assert!(app.page.is_loading());
    }

    #[test]
    fn test_rejected_login_stays_on_login_with_message() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::LoginCompleted(Ok(LoginOutcome {
                success: false,
                username: "admin".to_string(),
                message: Some("Invalid credentials".to_string()),
            })),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.login_error.as_deref(), Some("Invalid credentials"));
        assert!(app.shell.session.is_none());
    }

    #[test]
    fn test_login_transport_error_stays_on_login() {
        let mut app = test_app();
        update(
            &mut app,
            Action::LoginCompleted(Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            })),
        );
        assert_eq!(app.screen(), Screen::Login);
        assert!(app.login_error.as_deref().unwrap().contains("500"));
    }

    #[test]
    fn test_logout_resets_everything() {
        let mut app = signed_in_app();
        update(&mut app, Action::Nav(NavEvent::SelectInternship("42".to_string())));
        let effect = update(&mut app, Action::Nav(NavEvent::Logout));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.screen(), Screen::Login);
        assert!(app.shell.session.is_none());
        assert!(app.shell.selected_id.is_none());
        assert_eq!(app.page, PageData::default());
    }

    #[test]
    fn test_selecting_internship_fetches_detail() {
        let mut app = signed_in_app();
        update(&mut app, Action::Nav(NavEvent::Navigate("internships".to_string())));
        let effect = update(&mut app, Action::Nav(NavEvent::SelectInternship("42".to_string())));

        assert_eq!(app.screen(), Screen::InternshipDetail);
        assert_eq!(app.shell.selected_id.as_deref(), Some("42"));
        assert_eq!(
            effect,
            Effect::Load {
                generation: app.generation,
                resources: vec![Resource::Internship("42".to_string())],
            }
        );
    }

    #[test]
    fn test_unchanged_navigation_does_not_refetch() {
        let mut app = signed_in_app();
        let generation = app.generation;
        let effect = update(&mut app, Action::Nav(NavEvent::Navigate("dashboard".to_string())));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.generation, generation);
    }

    #[test]
    fn test_loaded_result_is_stored() {
        let mut app = signed_in_app();
        let generation = app.generation;
        update(
            &mut app,
            Action::Loaded {
                generation,
                resource: Resource::Internships,
                result: Ok(Payload::Internships(vec![Internship {
                    id: "1".to_string(),
                    ..Default::default()
                }])),
            },
        );
        assert_eq!(app.page.internships.len(), 1);
        assert_eq!(app.page.pending, vec![Resource::Candidates]);
    }

    #[test]
    fn test_stale_result_is_dropped_after_navigation() {
        let mut app = signed_in_app();
        let stale = app.generation;
        update(&mut app, Action::Nav(NavEvent::Navigate("reports".to_string())));
        update(
            &mut app,
            Action::Loaded {
                generation: stale,
                resource: Resource::Candidates,
                result: Ok(Payload::Candidates(vec![Candidate::default()])),
            },
        );
        assert!(app.page.candidates.is_empty());
        assert_eq!(
            app.page.pending,
            vec![Resource::Internships, Resource::Candidates]
        );
    }

    #[test]
    fn test_failed_fetch_leaves_empty_sentinel() {
        let mut app = signed_in_app();
        let generation = app.generation;
        let effect = update(
            &mut app,
            Action::Loaded {
                generation,
                resource: Resource::Internships,
                result: Err(ApiError::Network("connection refused".to_string())),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.screen(), Screen::Dashboard);
        assert!(app.page.internships.is_empty());
        assert!(!app.page.pending.contains(&Resource::Internships));
    }

    #[test]
    fn test_run_shortlist_only_on_detail() {
        let mut app = signed_in_app();
        assert_eq!(update(&mut app, Action::RunShortlist), Effect::None);

        update(&mut app, Action::Nav(NavEvent::SelectInternship("42".to_string())));
        let effect = update(&mut app, Action::RunShortlist);
        assert_eq!(
            effect,
            Effect::Load {
                generation: app.generation,
                resources: vec![Resource::Shortlist("42".to_string())],
            }
        );
        assert!(app.page.is_shortlisting());
        assert!(app.page.shortlist_requested);

        // A second press while running is ignored.
        assert_eq!(update(&mut app, Action::RunShortlist), Effect::None);
    }

    #[test]
    fn test_refresh_remounts_current_screen() {
        let mut app = signed_in_app();
        let before = app.generation;
        let effect = update(&mut app, Action::Refresh);
        assert_eq!(app.generation, before + 1);
        assert!(matches!(effect, Effect::Load { .. }));

        let mut signed_out = test_app();
        assert_eq!(update(&mut signed_out, Action::Refresh), Effect::None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
