use crossterm::event::{Event, KeyCode};
use ratatui::{prelude::*, widgets::WidgetRef};
use tui_logger::{TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::viz::util::event_keycode;

use super::Component;

/// Key bindings of the log tab as `(key, label, event, help)`
pub const LOG_KEYS: [(KeyCode, &str, TuiWidgetEvent, &str); 8] = [
    (KeyCode::Up, "  ⬆  ", TuiWidgetEvent::UpKey, "Previous log target"),
    (KeyCode::Down, "  ⬇  ", TuiWidgetEvent::DownKey, "Next log target"),
    (KeyCode::Left, "  ⬅  ", TuiWidgetEvent::LeftKey, "Show one level less of the target"),
    (KeyCode::Right, "  ➡  ", TuiWidgetEvent::RightKey, "Show one level more of the target"),
    (KeyCode::Char('-'), "  -  ", TuiWidgetEvent::MinusKey, "Capture one level less"),
    (KeyCode::Char('+'), "  +  ", TuiWidgetEvent::PlusKey, "Capture one level more"),
    (KeyCode::PageUp, "PgUp ", TuiWidgetEvent::PrevPageKey, "Scroll back through requests"),
    (KeyCode::PageDown, "PgDn ", TuiWidgetEvent::NextPageKey, "Scroll forward, Esc to follow again"),
];

/// Request, response and state-change messages captured by `tui-logger`
pub struct Logs {
    state: TuiWidgetState,
}

impl Logs {
    pub fn new(level: log::LevelFilter) -> Self {
        Self {
            state: TuiWidgetState::new().set_default_display_level(level),
        }
    }
}

fn widget_event(key: KeyCode) -> Option<TuiWidgetEvent> {
    match key {
        KeyCode::Esc => Some(TuiWidgetEvent::EscapeKey),
        KeyCode::Char('=') => Some(TuiWidgetEvent::PlusKey),
        KeyCode::Char('_') => Some(TuiWidgetEvent::MinusKey),
        _ => LOG_KEYS
            .iter()
            .find(|(code, ..)| *code == key)
            .map(|(_, _, event, _)| event.clone()),
    }
}

impl WidgetRef for Logs {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        TuiLoggerSmartWidget::default()
            .title_target("Targets")
            .title_log("Service log")
            .style(Style::default().white())
            .style_error(Style::default().light_red().bold())
            .style_warn(Style::default().light_yellow())
            .style_info(Style::default().light_green())
            .style_debug(Style::default().dark_gray())
            .output_separator('|')
            .state(&self.state)
            .render(area, buf);
    }
}

impl Component for Logs {
    fn handle_ui_event(&mut self, event: &Event) -> bool {
        match event_keycode(event).and_then(widget_event) {
            Some(widget_event) => {
                self.state.transition(widget_event);
                true
            }
            None => false,
        }
    }
}
