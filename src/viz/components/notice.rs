use ratatui::{prelude::*, widgets::*};

use crate::viz::util::centered_rect;

/// Popup width for `message`, between 30 and 80 columns
fn notice_width(message: &str) -> u16 {
    let wanted = message.chars().count().saturating_add(6).clamp(30, 80);
    u16::try_from(wanted).unwrap_or(u16::MAX)
}

/// Blocking popup for a failed or refused action
pub fn render_notice(area: Rect, buf: &mut Buffer, message: &str) {
    let text = vec![
        Line::from(message.to_string()),
        Line::default(),
        Line::from(vec![
            Span::raw("Press "),
            Span::from("Enter").light_cyan().bold(),
            Span::raw(" to dismiss"),
        ])
        .dark_gray(),
    ];

    let width = notice_width(message);
    let center = centered_rect(area, width, 7);

    Clear.render(center, buf);

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().light_red())
                .title("Notice"),
        )
        .render(center, buf);
}
