use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        " flagquiz ",
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    // Key hints or the last warning
    let status_style = if state.status_message.is_some() {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    } else {
        Theme::status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), status_style));

    // Mode indicator, right aligned
    let mode = match state.dialog() {
        Some(Dialog::RoundResult { .. }) => "RESULT",
        Some(Dialog::FinalScore { .. }) => "GAME OVER",
        None => "PLAYING",
    };
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + mode.len() + 4);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", mode),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
