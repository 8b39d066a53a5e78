#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use gridworld_viz::{
    api::{EvaluationReport, GridService, ServerStats, TrainReport},
    env::{Coord, EnvDescriptor},
    error::ApiError,
    q_table::QTable,
};

/// Canned stand-in for the grid-world service
///
/// Start is the top-left corner, goal the bottom-right, and the single
/// obstacle sits at `(1, 1)`. Each call can be delayed to force completions
/// to arrive out of order.
#[derive(Clone, Default)]
pub struct FakeService {
    pub init_delay: Duration,
    pub train_delay: Duration,
    pub fail_train: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeService {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

pub fn descriptor(size: usize) -> EnvDescriptor {
    let mut obstacles = vec![vec![false; size]; size];
    obstacles[1][1] = true;
    EnvDescriptor::new(
        size,
        Coord::new(0, 0),
        Coord::new(size - 1, size - 1),
        obstacles,
    )
    .unwrap()
}

/// Walk along the top row, then down the right column
pub fn corner_path(size: usize) -> Vec<Coord> {
    let top = (0..size).map(|col| Coord::new(0, col));
    let right = (1..size).map(|row| Coord::new(row, size - 1));
    top.chain(right).collect()
}

pub fn train_report(size: usize, episodes: u32) -> TrainReport {
    TrainReport {
        episode_rewards: (0..episodes).map(|i| i as f64 - 5.0).collect(),
        final_epsilon: 0.1,
        q_table: QTable::new(vec![[0.0, 1.0, 0.5, -1.0]; size * size]),
        paths: vec![vec![Coord::new(0, 0), Coord::new(0, 1)]],
        episode_steps: vec![12; episodes as usize],
    }
}

impl GridService for FakeService {
    async fn initialize(&self, grid_size: usize) -> Result<EnvDescriptor, ApiError> {
        self.record(format!("initialize {grid_size}"));
        tokio::time::sleep(self.init_delay).await;
        Ok(descriptor(grid_size))
    }

    async fn train(&self, episodes: u32) -> Result<TrainReport, ApiError> {
        self.record(format!("train {episodes}"));
        tokio::time::sleep(self.train_delay).await;
        if let Some(message) = &self.fail_train {
            return Err(ApiError::Application(message.clone()));
        }
        Ok(train_report(5, episodes))
    }

    async fn evaluate(&self) -> Result<EvaluationReport, ApiError> {
        self.record("evaluate".to_string());
        Ok(EvaluationReport {
            path: corner_path(5),
            total_reward: 1.5,
            reached_goal: true,
            steps: Some(8),
        })
    }

    async fn stats(&self) -> Result<ServerStats, ApiError> {
        self.record("stats".to_string());
        Ok(ServerStats {
            training_history: vec![1.0, 2.0],
            total_episodes: 2,
        })
    }
}

/// Run `step` until it reports done, failing the test after two seconds
pub fn wait_until<T>(target: &mut T, mut step: impl FnMut(&mut T) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while !step(target) {
        assert!(Instant::now() < deadline, "timed out waiting for completion");
        std::thread::sleep(Duration::from_millis(5));
    }
}
