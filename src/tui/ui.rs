use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::shell::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CandidateTable, CompaniesView, DashboardSummary, Header, InternshipDetail, InternshipTable,
    ReportsView,
};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    if app.screen() == Screen::Login {
        let [main_area, status_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());
        tui.login_form.render(frame, main_area);
        draw_status_line(frame, status_area, app, spinner_frame);
        return;
    }

    let [header_area, body_area, status_area] =
        Layout::vertical([Length(2), Min(0), Length(1)]).areas(frame.area());

    let session = app.shell.session.as_ref();
    Header {
        username: session.map(|s| s.username.as_str()).unwrap_or(""),
        signed_in_at: session.map(|s| s.signed_in_at),
        api_base: &app.api_base,
        screen: app.screen(),
    }
    .render(frame, header_area);

    draw_body(frame, body_area, app, tui);
    draw_status_line(frame, status_area, app, spinner_frame);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let page = &app.page;
    let loading = page.is_loading();
    match app.screen() {
        Screen::Login => {}
        Screen::Dashboard => {
            let [cards, table] =
                Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);
            DashboardSummary::new(&page.internships, &page.candidates).render(frame, cards);
            InternshipTable::new(
                &mut tui.internship_table,
                &page.internships,
                loading,
                "Recent Internships",
            )
            .render(frame, table);
        }
        Screen::Internships => {
            InternshipTable::new(&mut tui.internship_table, &page.internships, loading, "Internships")
                .render(frame, area);
        }
        Screen::InternshipDetail => {
            InternshipDetail {
                internship: page.internship.as_ref(),
                loading,
                shortlist: &page.shortlist,
                shortlisting: page.is_shortlisting(),
                shortlist_requested: page.shortlist_requested,
            }
            .render(frame, area);
        }
        Screen::CandidatesDb => {
            CandidateTable::new(
                &mut tui.candidate_table,
                &page.candidates,
                loading,
                "Candidate Database",
            )
            .render(frame, area);
        }
        Screen::Candidates => {
            let title = format!(
                "Applicants for internship {}",
                app.shell.selected_id.as_deref().unwrap_or("?")
            );
            CandidateTable::new(&mut tui.candidate_table, &page.candidates, loading, &title)
                .render(frame, area);
        }
        Screen::Companies => {
            CompaniesView {
                internships: &page.internships,
                loading,
            }
            .render(frame, area);
        }
        Screen::Reports => {
            ReportsView {
                internships: &page.internships,
                candidates: &page.candidates,
                loading,
            }
            .render(frame, area);
        }
    }
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => "Tab switch field  Enter sign in  Ctrl+C quit",
        Screen::Dashboard | Screen::Internships => {
            "Enter open  a applicants  / search  f status  Ctrl+R refresh  Ctrl+L logout"
        }
        Screen::InternshipDetail => "r shortlist  a applicants  Esc back  Ctrl+L logout",
        Screen::CandidatesDb => "/ search  space select  s shortlist  Ctrl+L logout",
        Screen::Candidates => "/ search  space select  s shortlist  Esc back",
        Screen::Companies | Screen::Reports => "F1-F5 pages  Ctrl+R refresh  Ctrl+L logout",
    }
}

fn draw_status_line(frame: &mut Frame, area: Rect, app: &App, spinner_frame: usize) {
    let busy = app.login_pending || app.page.is_loading() || app.page.is_shortlisting();
    let mut spans = Vec::new();
    if busy {
        spans.push(Span::styled(
            format!("{} ", SPINNER[spinner_frame % SPINNER.len()]),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::raw(app.status_message.clone()));
    spans.push(Span::styled(
        format!("  |  {}", key_hints(app.screen())),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
