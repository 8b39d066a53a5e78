pub mod grid;
pub mod q_values;

pub use grid::{render_grid, CellKind, GridCell, GridView};
pub use q_values::{render_q_values, QCell, QGridView};
