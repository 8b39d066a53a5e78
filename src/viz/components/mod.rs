pub mod controls;
pub mod grid;
pub mod help;
pub mod log;
pub mod notice;
pub mod plot;
pub mod q_grid;
pub mod stats;

pub use controls::{ControlBar, Selector};
pub use grid::GridPanel;
use crossterm::event::Event;
pub use log::Logs;
pub use plot::RewardPlot;
pub use q_grid::QGridPanel;
use ratatui::widgets::WidgetRef;
pub use stats::StatsPanel;

pub trait Component: WidgetRef {
    fn handle_ui_event(&mut self, event: &Event) -> bool;
}
