use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let quest = match app.active_quest() {
        Some(q) => q,
        None => {
            // Unreachable while the session invariant holds.
            let msg = Paragraph::new("No active quest")
                .block(Block::default().title(" Quest ").borders(Borders::ALL));
            frame.render_widget(msg, area);
            return;
        }
    };

    let step = app.session.step;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Progress bar
            Constraint::Min(0),    // Step card
        ])
        .split(area);

    // Header: exit affordance on the left, quest title after it
    let header = Line::from(vec![
        Span::styled("✕ Exit (Esc)", Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled(quest.title.clone(), Style::default().fg(Color::White).bold()),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    // Progress: one third per step
    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(app.session.progress())
        .label(format!("Step {} of 3 — {}%", step.number(), step.percent()));
    frame.render_widget(gauge, chunks[1]);

    // Step card: label, prompt, action hint
    let lines = vec![
        Line::from(Span::styled(
            step.label(),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            step.prompt(quest),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                step.action_label(),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", quest.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(card, chunks[2]);
}
