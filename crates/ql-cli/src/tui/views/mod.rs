pub mod library;
pub mod quest;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use ql_core::View;

use super::app::App;

pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = match app.session.view {
        View::Library => {
            format!(
                "'{}' | {} quests | j/k:navigate Enter:start ?:help q:quit",
                app.library.meta.name,
                app.library.len()
            )
        }
        View::Quest => {
            let title = app
                .active_quest()
                .map(|q| q.title.as_str())
                .unwrap_or("<unknown>");
            format!(
                "{title} | step {} of 3 | Enter:{} Esc:exit q:quit",
                app.session.step.number(),
                app.session.step.action_label().to_lowercase()
            )
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Library"),
        Line::from("  j / ↓       Move down"),
        Line::from("  k / ↑       Move up"),
        Line::from("  g / G       Go to top / bottom"),
        Line::from("  Enter       Start the selected quest"),
        Line::from(""),
        Line::from("Quest"),
        Line::from("  Enter       Next step / complete quest"),
        Line::from("  Esc         Exit to the library"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q           Quit"),
        Line::from("  Ctrl+C      Force quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
