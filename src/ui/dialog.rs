use crate::app::state::{AppState, Dialog};
use crate::quiz::session::AnswerOutcome;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(dialog) = state.dialog() else {
        return;
    };

    let (title, title_style, lines, hint) = match dialog {
        Dialog::RoundResult { outcome, score } => {
            let style = if outcome.is_correct() {
                Theme::correct_text()
            } else {
                Theme::wrong_text()
            };
            let mut lines = Vec::new();
            if let AnswerOutcome::Incorrect { correct, .. } = outcome {
                lines.push(Line::from(format!("Correct country was {}", correct)));
            }
            lines.push(Line::from(format!("Your score is {}", score)));
            (outcome.title(), style, lines, "Enter: Continue")
        }
        Dialog::FinalScore { score, max_streak } => (
            "Your final score".to_string(),
            Theme::title(),
            vec![
                Line::from(format!("Your final score is {}", score)),
                Line::from(format!("Highest Streak: {}", max_streak)),
            ],
            "Enter: Restart",
        ),
    };

    let area = frame.area();

    // Center the popup: at most 44x8
    let popup_w = 44.min(area.width.saturating_sub(4));
    let popup_h = (lines.len() as u16 + 5).min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(title_style)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let mut body = vec![Line::default()];
    body.extend(lines);
    body.push(Line::default());
    body.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Theme::TEXT_MUTED),
    )));

    let paragraph = Paragraph::new(body)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
