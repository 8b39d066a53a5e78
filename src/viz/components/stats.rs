use ratatui::{prelude::*, widgets::*};

use crate::session::Stats;

/// The scalar readouts
pub struct StatsPanel<'a> {
    pub stats: &'a Stats,
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stats = self.stats;
        let goal_style = match stats.goal_reached {
            Some(true) => Style::default().light_green().bold(),
            Some(false) => Style::default().light_red().bold(),
            None => Style::default(),
        };

        let rows = [
            ("Total episodes", stats.total_episodes.to_string(), Style::default()),
            ("Exploration rate", stats.epsilon_label(), Style::default()),
            ("Last reward", stats.last_reward_label(), Style::default()),
            ("Goal reached", stats.goal_reached_label().to_string(), goal_style),
            ("Last steps", stats.last_steps_label(), Style::default()),
            ("Server episodes", stats.server_episodes_label(), Style::default().dark_gray()),
        ]
        .into_iter()
        .map(|(name, value, style)| {
            Row::new(vec![
                Cell::from(Span::from(name).light_cyan()),
                Cell::from(value).style(style),
            ])
        });

        let table = Table::new(rows, [Constraint::Length(18), Constraint::Fill(1)]).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("Statistics"),
        );
        Widget::render(table, area, buf);
    }
}
