use ratatui::{prelude::*, widgets::*};

use crate::{
    render::{CellKind, GridCell, GridView},
    viz::util::pad_glyph,
};

const CELL_WIDTH: usize = 3;

/// The environment grid, or a hint when there is none yet
pub struct GridPanel<'a> {
    pub view: Option<&'a GridView>,
}

fn cell_style(cell: &GridCell) -> Style {
    if cell.agent {
        return Style::default().fg(Color::Black).bg(Color::LightMagenta).bold();
    }
    match cell.kind {
        CellKind::Start => Style::default().fg(Color::Black).bg(Color::LightGreen).bold(),
        CellKind::Goal => Style::default().fg(Color::Black).bg(Color::LightYellow).bold(),
        CellKind::Obstacle => Style::default().fg(Color::DarkGray),
        CellKind::Empty if cell.visited => Style::default().fg(Color::White).bg(Color::Blue),
        CellKind::Empty => Style::default().fg(Color::DarkGray),
    }
}

pub(crate) fn grid_lines(view: &GridView) -> Vec<Line<'static>> {
    view.rows()
        .map(|row| {
            row.iter()
                .map(|cell| Span::styled(pad_glyph(cell.glyph(), CELL_WIDTH), cell_style(cell)))
                .collect::<Vec<_>>()
                .into()
        })
        .collect()
}

impl Widget for GridPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Environment");

        let paragraph = match self.view {
            Some(view) => Paragraph::new(grid_lines(view)),
            None => Paragraph::new("Press i to initialize an environment").dark_gray(),
        };

        paragraph
            .block(block)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
