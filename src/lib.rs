/// Timed replay of evaluation paths
pub mod animation;

/// Client for the grid-world training service
pub mod api;

/// Per-episode reward history
pub mod chart;

/// Client configuration
pub mod config;

/// Background execution of service calls
pub mod dispatch;

/// Environment geometry
pub mod env;

pub mod error;

/// Learned action values
pub mod q_table;

/// Projection of session state into displayable grids
pub mod render;

/// Dashboard state and its transitions
pub mod session;

/// Terminal dashboard
pub mod viz;
