use ratatui::{prelude::*, widgets::*};

use crate::session::Controls;

/// A bounded choice stepped with arrow keys
#[derive(Debug, Clone, PartialEq)]
pub struct Selector<T> {
    options: Vec<T>,
    selected: usize,
}

impl<T: Copy + PartialEq> Selector<T> {
    /// Select `initial` if present, else the first option
    ///
    /// With no options at all, `initial` becomes the only one.
    pub fn new(mut options: Vec<T>, initial: T) -> Self {
        if options.is_empty() {
            options.push(initial);
        }
        let selected = options.iter().position(|&o| o == initial).unwrap_or(0);
        Self { options, selected }
    }

    pub fn value(&self) -> T {
        self.options[self.selected]
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1).min(self.options.len() - 1);
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// The control bar along the bottom of the dashboard
pub struct ControlBar<'a> {
    pub controls: &'a Controls,
    pub grid_size: usize,
    pub episodes: u32,
}

fn key(k: &'static str) -> Span<'static> {
    Span::from(k).light_cyan().bold()
}

fn action(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::from(label).white().bold()
    } else {
        Span::from(label).dark_gray()
    }
}

impl Widget for ControlBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let controls = self.controls;
        let line = Line::from(vec![
            key("←/→"),
            Span::raw(format!(" Grid size {} ", self.grid_size)),
            key("i"),
            Span::raw(" "),
            action("Initialize", true),
            Span::raw("   "),
            key("↑/↓"),
            Span::raw(format!(" Episodes {} ", self.episodes)),
            key("t"),
            Span::raw(" "),
            action(controls.train_label(), controls.can_train()),
            Span::raw("   "),
            key("e"),
            Span::raw(" "),
            action("Evaluate", controls.evaluate_enabled),
            Span::raw("   "),
            key("h"),
            Span::raw(" Help"),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("Controls"),
            )
            .render(area, buf);
    }
}
