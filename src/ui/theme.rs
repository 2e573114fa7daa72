use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    // Background bands, top to bottom: pink, purple, blue.
    pub const BAND_TOP: Color = Color::Rgb(232, 74, 128);
    pub const BAND_MIDDLE: Color = Color::Rgb(102, 38, 148);
    pub const BAND_BOTTOM: Color = Color::Rgb(0, 115, 189);

    pub const BG_SURFACE: Color = Color::Rgb(30, 30, 40);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 150, 165);
    pub const ACCENT: Color = Color::Cyan;

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_highlighted() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn border_correct() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn border_wrong() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn prompt_label() -> Style {
        Style::default().fg(Self::TEXT_MUTED).add_modifier(Modifier::BOLD)
    }

    pub fn prompt_country() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn flag_name() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn score_text() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn correct_text() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn wrong_text() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
