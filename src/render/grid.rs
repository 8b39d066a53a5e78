use crate::env::{Coord, EnvContext};

/// What a grid cell holds, before any path overlay
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellKind {
    Start,
    Goal,
    Obstacle,
    Empty,
}

impl CellKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            CellKind::Start => "S",
            CellKind::Goal => "G",
            CellKind::Obstacle => "█",
            CellKind::Empty => " ",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridCell {
    pub kind: CellKind,
    /// The path passed through this cell (never set on start or goal)
    pub visited: bool,
    /// The path ends on this cell (never set on the goal)
    pub agent: bool,
}

impl GridCell {
    pub const AGENT_GLYPH: &'static str = "@";
    pub const VISITED_GLYPH: &'static str = "·";

    pub fn glyph(&self) -> &'static str {
        if self.agent {
            Self::AGENT_GLYPH
        } else if self.visited && self.kind == CellKind::Empty {
            Self::VISITED_GLYPH
        } else {
            self.kind.glyph()
        }
    }
}

/// A classified `size x size` grid, row-major
#[derive(Clone, PartialEq, Debug)]
pub struct GridView {
    size: usize,
    cells: Vec<GridCell>,
}

impl GridView {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, pos: Coord) -> Option<&GridCell> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        self.cells.get(pos.state_index(self.size))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.size)
    }

    pub fn count(&self, pred: impl Fn(&GridCell) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }
}

/// Classify every cell of the environment and overlay `path`
///
/// Start wins over goal, goal over obstacle. The overlay marks every path cell
/// except start and goal as visited, and puts the agent on the last coordinate
/// unless it is the goal. Coordinates off the grid are ignored.
pub fn render_grid(ctx: &EnvContext, path: Option<&[Coord]>) -> GridView {
    let env = &ctx.descriptor;
    let size = env.size();

    let mut cells: Vec<GridCell> = (0..size * size)
        .map(|ix| {
            let pos = Coord::new(ix / size, ix % size);
            let kind = if pos == env.start() {
                CellKind::Start
            } else if pos == env.goal() {
                CellKind::Goal
            } else if env.is_obstacle(pos) {
                CellKind::Obstacle
            } else {
                CellKind::Empty
            };
            GridCell {
                kind,
                visited: false,
                agent: false,
            }
        })
        .collect();

    let path = path.unwrap_or_default();
    for &pos in path.iter().filter(|p| env.contains(**p)) {
        let cell = &mut cells[pos.state_index(size)];
        if !matches!(cell.kind, CellKind::Start | CellKind::Goal) {
            cell.visited = true;
        }
    }

    if let Some(&last) = path.last() {
        if env.contains(last) && last != env.goal() {
            cells[last.state_index(size)].agent = true;
        }
    }

    GridView { size, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvDescriptor;

    fn ctx(size: usize, obstacles: &[(usize, usize)]) -> EnvContext {
        let mut mask = vec![vec![false; size]; size];
        for &(r, c) in obstacles {
            mask[r][c] = true;
        }
        let env = EnvDescriptor::new(
            size,
            Coord::new(0, 0),
            Coord::new(size - 1, size - 1),
            mask,
        )
        .unwrap();
        EnvContext::new(env, 1)
    }

    fn path(coords: &[(usize, usize)]) -> Vec<Coord> {
        coords.iter().map(|&(r, c)| Coord::new(r, c)).collect()
    }

    #[test]
    fn classifies_cells_without_path() {
        let view = render_grid(&ctx(3, &[(1, 1)]), None);
        assert_eq!(view.size(), 3);
        assert_eq!(view.rows().count(), 3);
        assert!(view.rows().all(|row| row.len() == 3));
        assert_eq!(view.cell(Coord::new(0, 0)).unwrap().kind, CellKind::Start);
        assert_eq!(view.cell(Coord::new(2, 2)).unwrap().kind, CellKind::Goal);
        assert_eq!(view.cell(Coord::new(1, 1)).unwrap().kind, CellKind::Obstacle);
        assert_eq!(view.count(|c| c.kind == CellKind::Empty), 6);
        assert_eq!(view.count(|c| c.visited || c.agent), 0);
    }

    #[test]
    fn start_wins_over_obstacle_mask() {
        let view = render_grid(&ctx(3, &[(0, 0), (2, 2)]), None);
        assert_eq!(view.cell(Coord::new(0, 0)).unwrap().kind, CellKind::Start);
        assert_eq!(view.cell(Coord::new(2, 2)).unwrap().kind, CellKind::Goal);
    }

    #[test]
    fn single_cell_grid_shows_start() {
        let env = ctx(1, &[(0, 0)]);
        let view = render_grid(&env, None);
        assert_eq!(view.size(), 1);
        assert_eq!(view.rows().count(), 1);
        assert_eq!(view.count(|c| c.kind == CellKind::Start), 1);
        assert_eq!(view.count(|c| c.kind == CellKind::Goal), 0);

        // the only cell is both start and goal, so no agent and no trail
        let view = render_grid(&env, Some(path(&[(0, 0)]).as_slice()));
        let cell = view.cell(Coord::new(0, 0)).unwrap();
        assert_eq!(cell.kind, CellKind::Start);
        assert!(!cell.visited);
        assert!(!cell.agent);
        assert_eq!(cell.glyph(), "S");
    }

    #[test]
    fn empty_path_draws_no_overlay() {
        let env = ctx(3, &[]);
        assert_eq!(render_grid(&env, Some(&[][..])), render_grid(&env, None));
    }

    #[test]
    fn path_never_marks_start_or_goal() {
        let env = ctx(3, &[]);
        let walk = path(&[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]);
        let view = render_grid(&env, Some(walk.as_slice()));

        let start = view.cell(Coord::new(0, 0)).unwrap();
        let goal = view.cell(Coord::new(2, 2)).unwrap();
        assert!(!start.visited && !goal.visited);
        assert_eq!(view.count(|c| c.visited), 3);
    }

    #[test]
    fn agent_marks_last_coordinate() {
        let env = ctx(4, &[]);
        let walk = path(&[(0, 0), (1, 0), (1, 1)]);
        let view = render_grid(&env, Some(walk.as_slice()));
        let cell = view.cell(Coord::new(1, 1)).unwrap();
        assert!(cell.agent);
        assert_eq!(cell.glyph(), GridCell::AGENT_GLYPH);
        assert_eq!(view.count(|c| c.agent), 1);
        assert_eq!(view.cell(Coord::new(1, 0)).unwrap().glyph(), GridCell::VISITED_GLYPH);
    }

    #[test]
    fn no_agent_when_path_ends_on_goal() {
        let env = ctx(2, &[]);
        let walk = path(&[(0, 0), (0, 1), (1, 1)]);
        let view = render_grid(&env, Some(walk.as_slice()));
        assert_eq!(view.count(|c| c.agent), 0);
        assert_eq!(view.cell(Coord::new(1, 1)).unwrap().glyph(), "G");
    }

    #[test]
    fn agent_may_sit_on_start() {
        let env = ctx(3, &[]);
        let view = render_grid(&env, Some(path(&[(0, 0)]).as_slice()));
        let start = view.cell(Coord::new(0, 0)).unwrap();
        assert!(start.agent && !start.visited);
    }

    #[test]
    fn ignores_coordinates_off_the_grid() {
        let env = ctx(3, &[]);
        let view = render_grid(&env, Some(path(&[(0, 1), (5, 5)]).as_slice()));
        assert_eq!(view.count(|c| c.visited), 1);
        assert_eq!(view.count(|c| c.agent), 0);
    }

    #[test]
    fn does_not_touch_the_descriptor() {
        let env = ctx(3, &[(1, 2)]);
        let before = env.clone();
        let _ = render_grid(&env, Some(path(&[(0, 1), (1, 2), (2, 1)]).as_slice()));
        assert_eq!(env, before);
    }
}
