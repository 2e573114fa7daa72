//! Flag cards drawn with coloured terminal cells.
//!
//! Each country in the pool maps to a simplified pattern: plain horizontal or
//! vertical stripes, a centred cross, or stripes with a canton. The
//! patterns only need to be recognisable at a few dozen cells.

use crate::app::state::AppState;
use crate::quiz::{Country, CHOICES};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlagPattern {
    /// Equal bands, top to bottom.
    Horizontal(&'static [Color]),
    /// Equal bands, left to right.
    Vertical(&'static [Color]),
    /// Centred cross with a border line around it.
    Cross {
        field: Color,
        border: Color,
        cross: Color,
    },
    /// Horizontal stripes with a block in the upper hoist.
    Canton {
        stripes: &'static [Color],
        canton: Color,
    },
}

const WHITE: Color = Color::Rgb(255, 255, 255);
const BLACK: Color = Color::Rgb(0, 0, 0);

pub fn pattern(country: Country) -> FlagPattern {
    match country {
        "Estonia" => FlagPattern::Horizontal(&[Color::Rgb(0, 114, 206), BLACK, WHITE]),
        "France" => {
            FlagPattern::Vertical(&[Color::Rgb(0, 85, 164), WHITE, Color::Rgb(239, 65, 53)])
        }
        "Germany" => FlagPattern::Horizontal(&[
            BLACK,
            Color::Rgb(221, 0, 0),
            Color::Rgb(255, 206, 0),
        ]),
        "Ireland" => FlagPattern::Vertical(&[
            Color::Rgb(22, 155, 98),
            WHITE,
            Color::Rgb(255, 136, 62),
        ]),
        "Italy" => {
            FlagPattern::Vertical(&[Color::Rgb(0, 146, 70), WHITE, Color::Rgb(206, 43, 55)])
        }
        "Nigeria" => {
            FlagPattern::Vertical(&[Color::Rgb(0, 135, 81), WHITE, Color::Rgb(0, 135, 81)])
        }
        "Poland" => FlagPattern::Horizontal(&[WHITE, Color::Rgb(220, 20, 60)]),
        // 1:2:1 bands
        "Spain" => FlagPattern::Horizontal(&[
            Color::Rgb(170, 21, 27),
            Color::Rgb(241, 191, 0),
            Color::Rgb(241, 191, 0),
            Color::Rgb(170, 21, 27),
        ]),
        "UK" => FlagPattern::Cross {
            field: Color::Rgb(1, 33, 105),
            border: WHITE,
            cross: Color::Rgb(200, 16, 46),
        },
        "Ukraine" => FlagPattern::Horizontal(&[Color::Rgb(0, 87, 183), Color::Rgb(255, 215, 0)]),
        "US" => FlagPattern::Canton {
            stripes: &[
                Color::Rgb(178, 34, 52),
                WHITE,
                Color::Rgb(178, 34, 52),
                WHITE,
                Color::Rgb(178, 34, 52),
                WHITE,
                Color::Rgb(178, 34, 52),
            ],
            canton: Color::Rgb(60, 59, 110),
        },
        _ => FlagPattern::Horizontal(&[Color::DarkGray]),
    }
}

impl FlagPattern {
    /// Colour of cell (`x`, `y`) in a flag `width` x `height` cells large.
    pub fn color_at(&self, x: u16, y: u16, width: u16, height: u16) -> Color {
        let width = width.max(1);
        let height = height.max(1);
        match self {
            FlagPattern::Horizontal(bands) => bands[band(y, height, bands.len())],
            FlagPattern::Vertical(bands) => bands[band(x, width, bands.len())],
            FlagPattern::Cross {
                field,
                border,
                cross,
            } => {
                let dx = (2 * x as i32 + 1 - width as i32).abs();
                let dy = (2 * y as i32 + 1 - height as i32).abs();
                // Distances are in half-cells; cells are twice as tall as wide.
                if dx <= 2 || dy <= 1 {
                    *cross
                } else if dx <= 5 || dy <= 2 {
                    *border
                } else {
                    *field
                }
            }
            FlagPattern::Canton { stripes, canton } => {
                if x < width * 2 / 5 && y < height.div_ceil(2) {
                    *canton
                } else {
                    stripes[band(y, height, stripes.len())]
                }
            }
        }
    }
}

fn band(pos: u16, extent: u16, bands: usize) -> usize {
    (pos as usize * bands / extent as usize).min(bands - 1)
}

/// Fills its area with the flag of one country.
pub struct FlagWidget {
    pattern: FlagPattern,
}

impl FlagWidget {
    pub fn new(country: Country) -> Self {
        Self {
            pattern: pattern(country),
        }
    }
}

impl Widget for FlagWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..area.height {
            for x in 0..area.width {
                let color = self.pattern.color_at(x, y, area.width, area.height);
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_symbol(" ").set_bg(color);
                }
            }
        }
    }
}

/// Draw the three flag cards of the current round.
pub fn render_cards(frame: &mut Frame, areas: &[Rect; CHOICES], state: &AppState) {
    let round = state.session.round();
    let answered = round.is_answered();
    let show_names = state.show_flag_names();

    for (i, (area, &country)) in areas.iter().zip(round.choices()).enumerate() {
        let border_style = if answered && i == round.correct_index() {
            Theme::border_correct()
        } else if answered && round.selected_index() == Some(i) {
            Theme::border_wrong()
        } else if !answered && i == state.highlighted {
            Theme::border_highlighted()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(format!(" {} ", i + 1))
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(border_style);
        let inner = block.inner(*area);
        frame.render_widget(block, *area);

        if inner.height < 2 || inner.width < 2 || !state.flag_visible(i) {
            continue;
        }

        // Flag fills the card, leaving one row for the name.
        let flag_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
        frame.render_widget(FlagWidget::new(country), flag_area);

        if show_names {
            let name_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            let name = Paragraph::new(Span::styled(country, Theme::flag_name()))
                .alignment(Alignment::Center);
            frame.render_widget(name, name_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::COUNTRIES;

    #[test]
    fn test_every_country_has_a_pattern() {
        let fallback = FlagPattern::Horizontal(&[Color::DarkGray]);
        for country in COUNTRIES {
            assert_ne!(pattern(country), fallback, "{} has no flag", country);
        }
    }

    #[test]
    fn test_patterns_are_distinct() {
        for (i, &a) in COUNTRIES.iter().enumerate() {
            for &b in &COUNTRIES[i + 1..] {
                assert_ne!(pattern(a), pattern(b), "{} and {} look the same", a, b);
            }
        }
    }

    #[test]
    fn test_horizontal_bands() {
        let germany = pattern("Germany");
        assert_eq!(germany.color_at(0, 0, 12, 6), BLACK);
        assert_eq!(germany.color_at(5, 2, 12, 6), Color::Rgb(221, 0, 0));
        assert_eq!(germany.color_at(11, 5, 12, 6), Color::Rgb(255, 206, 0));
    }

    #[test]
    fn test_vertical_bands() {
        let france = pattern("France");
        assert_eq!(france.color_at(0, 3, 12, 6), Color::Rgb(0, 85, 164));
        assert_eq!(france.color_at(6, 0, 12, 6), WHITE);
        assert_eq!(france.color_at(11, 5, 12, 6), Color::Rgb(239, 65, 53));
    }

    #[test]
    fn test_cross_and_canton() {
        let uk = pattern("UK");
        assert_eq!(uk.color_at(0, 0, 16, 8), Color::Rgb(1, 33, 105));
        assert_eq!(uk.color_at(8, 0, 16, 8), Color::Rgb(200, 16, 46));
        assert_eq!(uk.color_at(0, 4, 16, 8), Color::Rgb(200, 16, 46));

        let us = pattern("US");
        assert_eq!(us.color_at(0, 0, 20, 7), Color::Rgb(60, 59, 110));
        assert_eq!(us.color_at(19, 0, 20, 7), Color::Rgb(178, 34, 52));
        assert_eq!(us.color_at(0, 6, 20, 7), Color::Rgb(178, 34, 52));
    }

    #[test]
    fn test_widget_fills_area() {
        let area = Rect::new(0, 0, 9, 3);
        let mut buf = Buffer::empty(area);
        FlagWidget::new("Italy").render(area, &mut buf);
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 146, 70));
        assert_eq!(buf[(4, 1)].bg, WHITE);
        assert_eq!(buf[(8, 2)].bg, Color::Rgb(206, 43, 55));
    }
}
