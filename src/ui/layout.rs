use crate::quiz::CHOICES;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub title: Rect,
    pub prompt: Rect,
    pub flags: [Rect; CHOICES],
    pub scoreboard: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, flag_width: u16) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Content: title | prompt | flag row | scoreboard
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Prompt
            Constraint::Min(6),    // Flags
            Constraint::Length(6), // Scoreboard
        ])
        .split(content);

    let title = v_chunks[0];
    let prompt = v_chunks[1];
    let flag_row = v_chunks[2];
    let scoreboard = v_chunks[3];

    // Flag row: three equal cards, centered, never wider than the screen allows
    let max_width = flag_row.width.saturating_sub(2 * (CHOICES as u16 - 1)) / CHOICES as u16;
    let card_width = flag_width.clamp(6, max_width.max(6));
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .spacing(2)
        .constraints([Constraint::Length(card_width); CHOICES])
        .split(flag_row);

    AppLayout {
        title,
        prompt,
        flags: [cards[0], cards[1], cards[2]],
        scoreboard,
        status_bar,
    }
}
