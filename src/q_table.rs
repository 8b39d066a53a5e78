use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Agent moves, in the order the service indexes its action values
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumCount)]
pub enum Action {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Action {
    pub fn from_index(ix: usize) -> Option<Self> {
        Action::iter().nth(ix)
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Action::Up => "↑",
            Action::Right => "→",
            Action::Down => "↓",
            Action::Left => "←",
        }
    }
}

/// Action values for every state, indexed row-major by `(row, col)`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QTable(Vec<[f64; Action::COUNT]>);

impl QTable {
    pub fn new(values: Vec<[f64; Action::COUNT]>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self, state: usize) -> Option<&[f64; Action::COUNT]> {
        self.0.get(state)
    }

    /// The greedy action for `state` and its value
    ///
    /// Ties go to the action listed first, so `[2, 5, 5, 1]` picks `Right`.
    pub fn best(&self, state: usize) -> Option<(Action, f64)> {
        let values = self.values(state)?;
        let (ix, max) = values
            .iter()
            .enumerate()
            .fold((0, values[0]), |(best_ix, best), (ix, &v)| {
                if v > best {
                    (ix, v)
                } else {
                    (best_ix, best)
                }
            });
        Action::from_index(ix).map(|action| (action, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_order_matches_service() {
        let order: Vec<_> = Action::iter().collect();
        assert_eq!(order, [Action::Up, Action::Right, Action::Down, Action::Left]);
        assert_eq!(Action::from_index(1), Some(Action::Right));
        assert_eq!(Action::from_index(4), None);
    }

    #[test]
    fn best_breaks_ties_by_first_index() {
        let table = QTable::new(vec![[2.0, 5.0, 5.0, 1.0]]);
        assert_eq!(table.best(0), Some((Action::Right, 5.0)));
    }

    #[test]
    fn best_handles_all_equal_and_negative() {
        let table = QTable::new(vec![[0.0; 4], [-3.0, -1.0, -2.0, -1.0]]);
        assert_eq!(table.best(0), Some((Action::Up, 0.0)));
        assert_eq!(table.best(1), Some((Action::Right, -1.0)));
        assert_eq!(table.best(2), None);
    }

    #[test]
    fn deserializes_from_nested_arrays() {
        let table: QTable = serde_json::from_str("[[0, 1.5, -2, 3], [1, 1, 1, 1]]").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.best(0), Some((Action::Left, 3.0)));
    }
}
