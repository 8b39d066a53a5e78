use crate::q_table::{Action, QTable};

/// Display of one state's action values
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QCell {
    pub best: Action,
    pub max_q: f64,
    pub intensity: u8,
}

impl QCell {
    pub fn from_values(best: Action, max_q: f64) -> Self {
        Self {
            best,
            max_q,
            intensity: intensity(max_q),
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        rgb(self.intensity)
    }
}

/// `clamp(floor((max_q + 10) * 10), 0, 255)`
pub fn intensity(max_q: f64) -> u8 {
    ((max_q + 10.0) * 10.0).floor().clamp(0.0, 255.0) as u8
}

/// Green stays saturated while red and blue fade, so higher values turn greener
pub fn rgb(intensity: u8) -> (u8, u8, u8) {
    (255 - intensity, 255, 255 - intensity)
}

/// One optional cell per state, row-major
#[derive(Clone, PartialEq, Debug)]
pub struct QGridView {
    size: usize,
    cells: Vec<Option<QCell>>,
}

impl QGridView {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&QCell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col].as_ref()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<QCell>]> {
        self.cells.chunks(self.size.max(1))
    }
}

/// Build the Q-value grid; without a table every cell is blank
pub fn render_q_values(size: usize, table: Option<&QTable>) -> QGridView {
    let cells = (0..size * size)
        .map(|state| {
            table
                .and_then(|t| t.best(state))
                .map(|(best, max_q)| QCell::from_values(best, max_q))
        })
        .collect();
    QGridView { size, cells }
}
