use ratatui::{prelude::*, widgets::*};

use crate::{
    render::{QCell, QGridView},
    viz::util::pad_glyph,
};

const CELL_WIDTH: usize = 3;

/// Greedy action per state, shaded by its value
pub struct QGridPanel<'a> {
    pub view: Option<&'a QGridView>,
}

fn cell_span(cell: Option<&QCell>) -> Span<'static> {
    match cell {
        Some(cell) => {
            let (r, g, b) = cell.rgb();
            Span::styled(
                pad_glyph(cell.best.arrow(), CELL_WIDTH),
                Style::default().fg(Color::Black).bg(Color::Rgb(r, g, b)),
            )
        }
        None => Span::styled(pad_glyph("·", CELL_WIDTH), Style::default().fg(Color::DarkGray)),
    }
}

impl Widget for QGridPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Q-Values");

        let lines: Vec<Line> = match self.view {
            Some(view) => view
                .rows()
                .map(|row| row.iter().map(|c| cell_span(c.as_ref())).collect::<Vec<_>>().into())
                .collect(),
            None => vec![Line::from("No environment").dark_gray()],
        };

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::q_table::Action;

    #[test]
    fn shades_by_value() {
        let span = cell_span(Some(&QCell::from_values(Action::Down, 15.5)));
        assert_eq!(span.content, " ↓ ");
        assert_eq!(span.style.bg, Some(Color::Rgb(0, 255, 0)));

        let span = cell_span(Some(&QCell::from_values(Action::Left, -10.0)));
        assert_eq!(span.style.bg, Some(Color::Rgb(255, 255, 255)));

        let span = cell_span(None);
        assert_eq!(span.content, " · ");
        assert_eq!(span.style.bg, None);
    }
}
