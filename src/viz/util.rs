use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Takes an event, checks if it is a key press event, and returns the [`KeyCode`]
pub(super) fn event_keycode(event: &Event) -> Option<KeyCode> {
    let Event::Key(key) = event else {
        return None;
    };

    if key.kind != KeyEventKind::Press {
        return None;
    }

    Some(key.code)
}

/// Center `glyph` in a field `width` columns wide, by display width
pub(super) fn pad_glyph(glyph: &str, width: usize) -> String {
    let used = glyph.width();
    if used >= width {
        return glyph.to_string();
    }
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{glyph}{}", " ".repeat(left), " ".repeat(right))
}

/// A `width x height` rectangle centered in `area`, clipped to it
pub(super) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, center_vert, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(center_vert);

    center
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn keycode_only_for_presses() {
        let press = Event::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
        assert_eq!(event_keycode(&press), Some(KeyCode::Char('t')));

        let mut release = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(event_keycode(&Event::Key(release)), None);
        assert_eq!(event_keycode(&Event::FocusGained), None);
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_glyph("S", 3), " S ");
        assert_eq!(pad_glyph("↑", 3), " ↑ ");
        assert_eq!(pad_glyph("", 2), "  ");
        assert_eq!(pad_glyph("wide", 2), "wide");
    }

    #[test]
    fn centered_rect_fits_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(area, 80, 20), area);
    }
}
