use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Quest list
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_list(frame, app, chunks[1]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            app.library.meta.name.clone(),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(Span::styled(
            app.library.meta.tagline.clone(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

fn draw_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .library
        .quests()
        .iter()
        .map(|quest| {
            let line = Line::from(vec![
                Span::styled(
                    quest.subject.to_string().to_uppercase(),
                    Style::default().fg(Color::Blue).bold(),
                ),
                Span::raw("  "),
                Span::styled(quest.title.clone(), Style::default().fg(Color::White).bold()),
                Span::raw("  "),
                Span::styled(
                    format!("Duration: {}", quest.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = format!(" Quests ({}) ", app.library.len());

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.list_cursor));

    frame.render_stateful_widget(list, area, &mut state);
}
