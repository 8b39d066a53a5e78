mod app;
pub mod components;
pub mod tui;
mod util;

pub use app::{App, State};
