//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into `core::Action` values and executes the
//! `Effect`s that `update()` hands back.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetching
//!
//! Every `Effect::Load` becomes one tokio task per resource. Tasks report
//! back over an mpsc channel as `Action::Loaded`, tagged with the mount
//! generation that asked for them. When the generation moves on (the user
//! left the screen) the outstanding tasks are aborted, and anything that
//! still slips through is dropped by the reducer.
//!
//! ## Redraw Strategy
//!
//! While something is in flight the loop redraws every ~80ms so the spinner
//! moves. Otherwise it sleeps up to 500ms and only redraws on input or when
//! a task reports back.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::api::{ApiClient, ApiError, ConsoleBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::shell::{NavEvent, Screen};
use crate::core::state::{App, Payload, Resource};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CandidateTableEvent, CandidateTableState, InternshipTableEvent, InternshipTableState,
    LoginEvent, LoginForm,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub login_form: LoginForm,
    pub internship_table: InternshipTableState,
    pub candidate_table: CandidateTableState,
    /// Generation the per-screen states above were built for.
    mounted_generation: u64,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            login_form: LoginForm::new(app.default_username.as_deref()),
            internship_table: InternshipTableState::new(),
            candidate_table: CandidateTableState::new(),
            mounted_generation: app.generation,
        }
    }

    /// Fresh per-screen state after the app mounted a new screen.
    fn remount(&mut self, app: &App) {
        self.internship_table = InternshipTableState::new();
        self.candidate_table = CandidateTableState::new();
        if app.screen() == Screen::Login {
            self.login_form = LoginForm::new(app.default_username.as_deref());
        }
        self.mounted_generation = app.generation;
    }

    /// Whether the current screen has a text field capturing keys.
    fn is_editing(&self, screen: Screen) -> bool {
        match screen {
            Screen::Login => true,
            Screen::Dashboard | Screen::Internships => self.internship_table.is_editing(),
            Screen::CandidatesDb | Screen::Candidates => self.candidate_table.is_editing(),
            _ => false,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Build the HTTP backend for a resolved config.
pub fn build_backend(config: &ResolvedConfig) -> Arc<dyn ConsoleBackend> {
    Arc::new(ApiClient::new(Some(&config.api_base)))
}

/// Tasks spawned for the current mount (plus any login check).
#[derive(Default)]
struct Tasks {
    handles: Vec<AbortHandle>,
}

impl Tasks {
    fn abort_all(&mut self) {
        let running = self.handles.iter().filter(|h| !h.is_finished()).count();
        if running > 0 {
            debug!("Aborting {} outstanding task(s)", running);
        }
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = build_backend(&config);
    info!("Using backend '{}' at {}", backend.name(), config.api_base);
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut tasks = Tasks::default();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true;

    'outer: loop {
        let busy = app.login_pending || app.page.is_loading() || app.page.is_shortlisting();
        if busy {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if busy {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = handle_key(&app, &mut tui, &event)
                && dispatch(&mut app, &mut tui, &mut tasks, &tx, action)
            {
                break 'outer;
            }
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, &mut tasks, &tx, action) {
                break 'outer;
            }
        }
    }

    tasks.abort_all();
    ratatui::restore();
    Ok(())
}

/// Applies `action`, keeps TUI state in step with the app, and runs the
/// resulting effect. Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    tasks: &mut Tasks,
    tx: &mpsc::Sender<Action>,
    action: Action,
) -> bool {
    let was_pending = app.login_pending;
    let effect = update(app, action);

    if app.generation != tui.mounted_generation {
        tasks.abort_all();
        tui.remount(app);
    }

    tui.login_form.pending = app.login_pending;
    tui.login_form.error = app.login_error.clone();
    if was_pending && !app.login_pending && !app.shell.is_authenticated() {
        tui.login_form.reset_password();
    }

    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::Login { username, password } => {
            tasks
                .handles
                .push(spawn_login(app.backend.clone(), username, password, tx.clone()));
        }
        Effect::Load {
            generation,
            resources,
        } => {
            for resource in resources {
                tasks.handles.push(spawn_fetch(
                    app.backend.clone(),
                    generation,
                    resource,
                    tx.clone(),
                ));
            }
        }
    }
    false
}

/// Maps a terminal event to an action for the current screen.
fn handle_key(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    let screen = app.screen();
    if screen == Screen::Login {
        return match tui.login_form.handle_event(event)? {
            LoginEvent::Submit { username, password } => {
                Some(Action::SubmitLogin { username, password })
            }
        };
    }

    match event {
        TuiEvent::Logout => return Some(Action::Nav(NavEvent::Logout)),
        TuiEvent::Refresh => return Some(Action::Refresh),
        TuiEvent::NavKey(i) => return navigate_to(*i),
        _ => {}
    }

    if !tui.is_editing(screen) {
        match event {
            TuiEvent::InputChar(c @ '1'..='5') => {
                let index = c.to_digit(10).map(|d| d as usize - 1)?;
                return navigate_to(index);
            }
            TuiEvent::Escape | TuiEvent::Backspace => return Some(Action::Nav(NavEvent::Back)),
            _ => {}
        }
    }

    match screen {
        Screen::Dashboard | Screen::Internships => {
            match tui.internship_table.handle_event(event)? {
                InternshipTableEvent::Open(id) => Some(Action::Nav(NavEvent::SelectInternship(id))),
                InternshipTableEvent::Applicants(id) => {
                    Some(Action::Nav(NavEvent::ViewApplicants(id)))
                }
            }
        }
        Screen::CandidatesDb | Screen::Candidates => {
            match tui.candidate_table.handle_event(event)? {
                CandidateTableEvent::Shortlisted(n) => Some(Action::Notify(format!(
                    "Shortlisted {} candidate{}",
                    n,
                    if n == 1 { "" } else { "s" }
                ))),
                CandidateTableEvent::NothingSelected => {
                    Some(Action::Notify("No candidates selected".to_string()))
                }
            }
        }
        Screen::InternshipDetail => match event {
            TuiEvent::InputChar('r') => Some(Action::RunShortlist),
            TuiEvent::InputChar('a') => app
                .shell
                .selected_id
                .clone()
                .map(|id| Action::Nav(NavEvent::ViewApplicants(id))),
            _ => None,
        },
        Screen::Login | Screen::Companies | Screen::Reports => None,
    }
}

fn navigate_to(index: usize) -> Option<Action> {
    let screen = Screen::TOP_LEVEL.get(index)?;
    Some(Action::Nav(NavEvent::Navigate(screen.name().to_string())))
}

/// Runs one fetch against the backend.
pub async fn fetch_resource(
    backend: &dyn ConsoleBackend,
    resource: &Resource,
) -> Result<Payload, ApiError> {
    match resource {
        Resource::Internships => backend.internships().await.map(Payload::Internships),
        Resource::Internship(id) => backend.internship(id).await.map(Payload::Internship),
        Resource::Applicants(id) => backend.applicants(id).await.map(Payload::Candidates),
        Resource::Candidates => backend.candidates().await.map(Payload::Candidates),
        Resource::Shortlist(id) => backend.shortlist(id).await.map(Payload::Shortlist),
    }
}

fn spawn_fetch(
    backend: Arc<dyn ConsoleBackend>,
    generation: u64,
    resource: Resource,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    debug!("Spawning fetch of {} (generation {})", resource, generation);
    let handle = tokio::spawn(async move {
        let result = fetch_resource(backend.as_ref(), &resource).await;
        let label = resource.to_string();
        if tx
            .send(Action::Loaded {
                generation,
                resource,
                result,
            })
            .is_err()
        {
            warn!("Failed to deliver {}: receiver dropped", label);
        }
    });
    handle.abort_handle()
}

fn spawn_login(
    backend: Arc<dyn ConsoleBackend>,
    username: String,
    password: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Checking credentials for '{}'", username);
    let handle = tokio::spawn(async move {
        let result = backend.login(&username, &password).await;
        if tx.send(Action::LoginCompleted(result)).is_err() {
            warn!("Failed to deliver login result: receiver dropped");
        }
    });
    handle.abort_handle()
}
