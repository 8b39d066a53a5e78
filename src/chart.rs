/// Rewards per training episode, labelled with a running 1-based episode index
///
/// Training appends; only a new environment clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardHistory {
    points: Vec<(f64, f64)>,
    y_bounds: [f64; 2],
}

impl RewardHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append `rewards`, continuing the labels from the current length
    pub fn extend(&mut self, rewards: &[f64]) {
        for &reward in rewards {
            let label = (self.points.len() + 1) as f64;
            if self.points.is_empty() {
                self.y_bounds = [reward, reward];
            } else {
                self.y_bounds[0] = self.y_bounds[0].min(reward);
                self.y_bounds[1] = self.y_bounds[1].max(reward);
            }
            self.points.push((label, reward));
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.y_bounds = [0.0, 0.0];
    }

    pub fn labels(&self) -> impl Iterator<Item = usize> + '_ {
        self.points.iter().map(|&(label, _)| label as usize)
    }

    pub fn rewards(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, reward)| reward)
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.points.len().max(1) as f64]
    }

    /// Reward range, always including zero so the axis has a baseline
    pub fn y_bounds(&self) -> [f64; 2] {
        let [lo, hi] = self.y_bounds;
        let (lo, hi) = (lo.min(0.0), hi.max(0.0));
        if lo == hi {
            [lo - 1.0, hi + 1.0]
        } else {
            [lo, hi]
        }
    }
}
