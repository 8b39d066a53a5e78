use ratatui::{prelude::*, widgets::*};

use super::log::LOG_KEYS;
use crate::viz::util::centered_rect;

const GLOBAL_KEYS: [(&str, &str); 4] = [
    ("  q  ", "Quit the dashboard"),
    ("  h  ", "Toggle this help"),
    (" Tab ", "Switch between dashboard and logs"),
    ("Enter", "Dismiss a notice"),
];

const DASHBOARD_KEYS: [(&str, &str); 6] = [
    ("⬅ / ➡", "Choose grid size"),
    ("  i  ", "Initialize a new environment (clears chart and statistics)"),
    ("⬆ / ⬇", "Choose number of training episodes"),
    ("  t  ", "Train the agent"),
    ("  e  ", "Evaluate the greedy policy and replay its path"),
    ("  s  ", "Fetch the service's episode count"),
];

fn key_line<'a>(key: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::from(key).light_cyan().bold(),
        Span::raw(" : "),
        Span::raw(action),
    ])
}

/// Popup listing the keys of the selected tab
pub fn render_help(area: Rect, buf: &mut Buffer, selected_tab: usize) {
    let tab_keys: Vec<(&str, &str)> = match selected_tab {
        0 => DASHBOARD_KEYS.to_vec(),
        1 => LOG_KEYS.iter().map(|&(_, key, _, help)| (key, help)).collect(),
        _ => Vec::new(),
    };

    let lines: Vec<Line> = GLOBAL_KEYS
        .iter()
        .chain(tab_keys.iter())
        .map(|&(key, action)| key_line(key, action))
        .collect();

    let center = centered_rect(area, 90, (lines.len() + 4) as u16);

    Clear.render(center, buf);

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .padding(Padding::proportional(1))
                .title("Help"),
        )
        .wrap(Wrap { trim: false })
        .render(center, buf);
}
