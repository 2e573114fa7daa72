use crate::app::state::AppState;
use crate::quiz::ROUNDS_PER_GAME;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    // Stays on the last round while the final dialog is up.
    let round = session.round_number().min(ROUNDS_PER_GAME);

    let lines = vec![
        Line::from(Span::styled(
            format!("Round: {} / {}", round, ROUNDS_PER_GAME),
            Theme::score_text(),
        )),
        Line::from(Span::styled(
            format!("Score: {}", session.score()),
            Theme::score_text(),
        )),
        Line::from(Span::styled(
            format!("Streak: {}", session.streak()),
            Theme::score_text(),
        )),
        Line::from(Span::styled(
            format!("Max Streak: {}", session.max_streak()),
            Theme::score_text(),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Theme::BAND_BOTTOM));
    frame.render_widget(paragraph, area);
}
