mod dialog;
mod flag;
mod layout;
mod scoreboard;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.flag_width);

    render_background(frame, area);
    render_title(frame, app_layout.title);
    render_prompt(frame, app_layout.prompt, state);
    flag::render_cards(frame, &app_layout.flags, state);
    scoreboard::render(frame, app_layout.scoreboard, state);
    status_bar::render(frame, app_layout.status_bar, state);
    dialog::render(frame, state);
}

fn render_background(frame: &mut Frame, area: Rect) {
    let third = area.height / 3;
    let bands = [
        (Theme::BAND_TOP, area.y, third),
        (Theme::BAND_MIDDLE, area.y + third, third),
        (Theme::BAND_BOTTOM, area.y + 2 * third, area.height - 2 * third),
    ];
    for (color, y, height) in bands {
        let band = Rect::new(area.x, y, area.width, height);
        frame.render_widget(Block::default().style(Style::default().bg(color)), band);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled("Guess the Flag", Theme::title())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, state: &AppState) {
    let country = state.session.round().correct_country();
    let prompt = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled("Pick the flag of:", Theme::prompt_label())),
        Line::from(Span::styled(country, Theme::prompt_country())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(prompt, area);
}
