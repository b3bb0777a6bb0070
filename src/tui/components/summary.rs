//! Aggregate views: dashboard stat cards, the companies rollup and the
//! reports screen. All stateless; numbers come from `core::filter`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Row, Table};

use crate::core::filter::{
    CandidateStats, InternshipStats, candidate_stats, company_rollups, internship_stats,
    location_breakdown,
};
use crate::core::models::{Candidate, Internship};
use crate::tui::component::Component;
use crate::tui::components::fit;

fn stat_card(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let text = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label.to_string(), Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(text).block(Block::bordered()), area);
}

fn placeholder(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::bordered().title(format!(" {title} "))),
        area,
    );
}

/// Four stat cards across the top of the dashboard.
pub struct DashboardSummary {
    pub internships: InternshipStats,
    pub candidates: CandidateStats,
}

impl DashboardSummary {
    pub fn new(internships: &[Internship], candidates: &[Candidate]) -> Self {
        Self {
            internships: internship_stats(internships),
            candidates: candidate_stats(candidates),
        }
    }
}

impl Component for DashboardSummary {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cards: [Rect; 4] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area);
        stat_card(
            frame,
            cards[0],
            "Active Internships",
            format!("{} / {}", self.internships.open, self.internships.total),
            Color::Green,
        );
        stat_card(
            frame,
            cards[1],
            "Total Applicants",
            self.internships.applicants.to_string(),
            Color::Cyan,
        );
        stat_card(
            frame,
            cards[2],
            "Registered Candidates",
            self.candidates.total.to_string(),
            Color::Yellow,
        );
        stat_card(
            frame,
            cards[3],
            "Partner Companies",
            self.internships.companies.to_string(),
            Color::Magenta,
        );
    }
}

pub struct CompaniesView<'a> {
    pub internships: &'a [Internship],
    pub loading: bool,
}

impl Component for CompaniesView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rollups = company_rollups(self.internships);
        if rollups.is_empty() {
            let text = if self.loading {
                "Loading companies..."
            } else {
                "No companies to show."
            };
            placeholder(frame, area, "Companies", text);
            return;
        }

        let name_width = usize::from(area.width.saturating_sub(2)) / 2;
        let rows: Vec<Row> = rollups
            .iter()
            .map(|r| {
                Row::new(vec![
                    fit(&r.company, name_width),
                    r.internships.to_string(),
                    r.open.to_string(),
                    r.capacity.to_string(),
                    r.applicants.to_string(),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(50),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(vec!["Company", "Internships", "Active", "Positions", "Applicants"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::bordered().title(format!(" Companies ({}) ", rollups.len())));
        frame.render_widget(table, area);
    }
}

pub struct ReportsView<'a> {
    pub internships: &'a [Internship],
    pub candidates: &'a [Candidate],
    pub loading: bool,
}

impl ReportsView<'_> {
    fn overview_lines(&self) -> Vec<Line<'static>> {
        let i = internship_stats(self.internships);
        let c = candidate_stats(self.candidates);
        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<24}"), Style::default().fg(Color::DarkGray)),
                Span::raw(value),
            ])
        };
        vec![
            row("Internships", i.total.to_string()),
            row("  Active", i.open.to_string()),
            row("  Closed", i.closed.to_string()),
            row("  Other", (i.total - i.open - i.closed).to_string()),
            row("Positions offered", i.capacity.to_string()),
            row("Applicants (listed)", i.applicants.to_string()),
            row("Companies", i.companies.to_string()),
            row("Candidates", c.total.to_string()),
            row("Candidate applications", c.applications.to_string()),
            row("Candidate locations", c.locations.to_string()),
        ]
    }
}

impl Component for ReportsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.loading && self.internships.is_empty() && self.candidates.is_empty() {
            placeholder(frame, area, "Reports", "Loading reports...");
            return;
        }

        let [overview_area, chart_area] =
            Layout::horizontal([Constraint::Length(36), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Paragraph::new(self.overview_lines()).block(Block::bordered().title(" Overview ")),
            overview_area,
        );

        let locations = location_breakdown(self.internships);
        if locations.is_empty() {
            placeholder(frame, chart_area, "Internships by Location", "No data.");
            return;
        }
        let max = locations.first().map(|(_, n)| *n).unwrap_or(1).max(1);
        let bar_room = usize::from(chart_area.width.saturating_sub(2)).saturating_sub(28);
        let rows: Vec<Row> = locations
            .iter()
            .map(|(location, n)| {
                let len = (n * bar_room / max).max(1);
                Row::new(vec![
                    fit(location, 18),
                    n.to_string(),
                    "█".repeat(len),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [Constraint::Length(18), Constraint::Length(5), Constraint::Min(0)],
        )
        .style(Style::default().fg(Color::Blue))
        .block(Block::bordered().title(" Internships by Location "));
        frame.render_widget(table, chart_area);
    }
}
