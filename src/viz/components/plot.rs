use ratatui::{prelude::*, style::Stylize, widgets::*};

use crate::chart::RewardHistory;

/// Reward per episode across all training runs since the last initialization
pub struct RewardPlot<'a> {
    pub history: &'a RewardHistory,
}

fn labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    bounds.iter().map(|x| format!("{x:.1}").bold()).collect()
}

impl Widget for RewardPlot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Rewards")
            .padding(Padding::horizontal(1));

        if self.history.is_empty() {
            Paragraph::new("No training data yet")
                .dark_gray()
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let dataset = Dataset::default()
            .name("Episode Reward")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .cyan()
            .data(self.history.points());

        let x_bounds = self.history.x_bounds();
        let y_bounds = self.history.y_bounds();

        let x_axis = Axis::default()
            .title("Episode")
            .dark_gray()
            .labels(
                x_bounds
                    .iter()
                    .map(|x| format!("{x:.0}").bold())
                    .collect(),
            )
            .bounds(x_bounds);

        let y_axis = Axis::default()
            .title("Reward")
            .dark_gray()
            .labels(labels(y_bounds))
            .bounds(y_bounds);

        Chart::new(vec![dataset])
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopLeft))
            .render(area, buf);
    }
}
