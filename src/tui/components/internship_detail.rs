//! # Internship Detail
//!
//! Stateless view of one internship and, once requested, its AI-ranked
//! shortlist. Keys are handled by the caller: `r` runs shortlisting, `a`
//! opens applicants, Esc/Backspace goes back.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, Wrap};

use crate::core::models::{Candidate, Internship, InternshipStatus, RankTier};
use crate::tui::component::Component;

pub struct InternshipDetail<'a> {
    pub internship: Option<&'a Internship>,
    pub loading: bool,
    pub shortlist: &'a [Candidate],
    pub shortlisting: bool,
    pub shortlist_requested: bool,
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn tier_style(tier: RankTier) -> Style {
    match tier {
        RankTier::Top => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        RankTier::Recommended => Style::default().fg(Color::Cyan),
        RankTier::Considerable => Style::default().fg(Color::Gray),
    }
}

impl InternshipDetail<'_> {
    fn info_lines(internship: &Internship) -> Vec<Line<'static>> {
        let status_style = match internship.status {
            InternshipStatus::Open => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::Yellow),
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    internship.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("[{}]", internship.status.label()), status_style),
            ]),
            field("Company", internship.company.clone()),
            field("Location", internship.location.clone()),
        ];
        let applicants = match internship.capacity {
            Some(capacity) => format!("{} / {} positions", internship.applicants, capacity),
            None => internship.applicants.to_string(),
        };
        lines.push(field("Applicants", applicants));
        if let Some(category) = &internship.category {
            lines.push(field("Sector", category.clone()));
        }
        if let Some(stipend) = &internship.stipend {
            lines.push(field("Stipend", format!("₹{stipend}/month")));
        }
        if let Some(months) = internship.duration_months {
            lines.push(field("Duration", format!("{months} months")));
        }
        if !internship.skills.is_empty() {
            lines.push(field("Skills", internship.skills.join(", ")));
        }
        if let Some(description) = &internship.description {
            lines.push(Line::raw(""));
            lines.push(Line::raw(description.clone()));
        }
        if !internship.responsibilities.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "Responsibilities",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            lines.extend(
                internship
                    .responsibilities
                    .iter()
                    .map(|r| Line::raw(format!("  • {r}"))),
            );
        }
        lines
    }

    fn render_shortlist(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" AI Shortlist ");
        let placeholder = if self.shortlisting {
            Some("Running AI shortlisting...")
        } else if !self.shortlist_requested {
            Some("Press r to run AI shortlisting.")
        } else if self.shortlist.is_empty() {
            Some("No ranked candidates returned.")
        } else {
            None
        };
        if let Some(text) = placeholder {
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }

        let rows: Vec<Row> = self
            .shortlist
            .iter()
            .map(|c| {
                let (rank, tier) = match c.rank {
                    Some(rank) => {
                        let tier = RankTier::for_rank(rank);
                        (format!("#{rank}"), Cell::from(tier.to_string()).style(tier_style(tier)))
                    }
                    None => ("-".to_string(), Cell::from("")),
                };
                let score = c.score.map(|s| format!("{s:.2}")).unwrap_or_default();
                Row::new(vec![
                    Cell::from(rank),
                    Cell::from(c.name.clone()),
                    tier,
                    Cell::from(score),
                    Cell::from(c.location.clone()),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Percentage(30),
                Constraint::Length(14),
                Constraint::Length(7),
                Constraint::Min(10),
            ],
        )
        .header(
            Row::new(vec!["Rank", "Name", "Tier", "Score", "Location"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block);
        frame.render_widget(table, area);
    }
}

impl Component for InternshipDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(internship) = self.internship else {
            let text = if self.loading {
                "Loading internship..."
            } else {
                "Internship not found."
            };
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(Block::bordered().title(" Internship ")),
                area,
            );
            return;
        };

        let [info_area, shortlist_area] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

        frame.render_widget(
            Paragraph::new(Self::info_lines(internship))
                .wrap(Wrap { trim: false })
                .block(
                    Block::bordered()
                        .title(" Internship ")
                        .title_bottom(" r shortlist  a applicants  Esc back "),
                ),
            info_area,
        );
        self.render_shortlist(frame, shortlist_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_candidates, sample_internships};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(detail: &mut InternshipDetail) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| detail.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_missing_internship_states() {
        let mut detail = InternshipDetail {
            internship: None,
            loading: true,
            shortlist: &[],
            shortlisting: false,
            shortlist_requested: false,
        };
        assert!(render_text(&mut detail).contains("Loading internship..."));
        detail.loading = false;
        assert!(render_text(&mut detail).contains("Internship not found."));
    }

    #[test]
    fn test_shortlist_prompt_before_run() {
        let internships = sample_internships();
        let mut detail = InternshipDetail {
            internship: internships.first(),
            loading: false,
            shortlist: &[],
            shortlisting: false,
            shortlist_requested: false,
        };
        let text = render_text(&mut detail);
        assert!(text.contains("Software Development Intern"));
        assert!(text.contains("React, Node.js"));
        assert!(text.contains("Press r to run AI shortlisting."));
    }

    #[test]
    fn test_ranked_list_shows_tiers() {
        let internships = sample_internships();
        let shortlist = sample_candidates();
        let mut detail = InternshipDetail {
            internship: internships.first(),
            loading: false,
            shortlist: &shortlist,
            shortlisting: false,
            shortlist_requested: true,
        };
        let text = render_text(&mut detail);
        assert!(text.contains("#1"));
        assert!(text.contains("Top Candidate"));
        assert!(text.contains("Recommended"));
    }
}
