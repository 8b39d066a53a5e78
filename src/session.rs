use std::collections::VecDeque;

use log::{error, info, warn};

use crate::{
    api::{EvaluationReport, ServerStats, TrainReport},
    chart::RewardHistory,
    env::{Coord, EnvContext, EnvDescriptor, Path},
    error::{ApiError, SessionError},
    q_table::QTable,
    render::{render_grid, render_q_values, GridView, QGridView},
};

pub const TRAIN_LABEL: &str = "Train Agent";
pub const TRAINING_LABEL: &str = "Training...";
pub const PLACEHOLDER: &str = "-";

/// The remote operations a session drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    Train,
    Evaluate,
    Stats,
}

impl Operation {
    fn failure_prefix(&self) -> &'static str {
        match self {
            Operation::Initialize => "Failed to initialize environment",
            Operation::Train => "Training failed",
            Operation::Evaluate => "Evaluation failed",
            Operation::Stats => "Fetching server statistics failed",
        }
    }

    fn transport_message(&self) -> &'static str {
        match self {
            Operation::Initialize => "Error initializing environment. Please try again.",
            Operation::Train => "Error training agent. Please try again.",
            Operation::Evaluate => "Error evaluating agent. Please try again.",
            Operation::Stats => "Error fetching server statistics. Please try again.",
        }
    }

    fn log_label(&self) -> &'static str {
        match self {
            Operation::Initialize => "initializing environment",
            Operation::Train => "training agent",
            Operation::Evaluate => "evaluating agent",
            Operation::Stats => "fetching server statistics",
        }
    }

    /// The text shown to the user for a failed call
    pub fn failure_message(&self, err: &ApiError) -> String {
        match err {
            ApiError::Application(message) => format!("{}: {message}", self.failure_prefix()),
            _ => self.transport_message().to_string(),
        }
    }
}

/// Identifies the environment a request was issued against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub epoch: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub train_enabled: bool,
    pub train_busy: bool,
    pub evaluate_enabled: bool,
}

impl Controls {
    pub fn can_train(&self) -> bool {
        self.train_enabled && !self.train_busy
    }

    pub fn train_label(&self) -> &'static str {
        if self.train_busy {
            TRAINING_LABEL
        } else {
            TRAIN_LABEL
        }
    }
}

/// The readouts under the charts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub total_episodes: usize,
    /// `None` until the first training run reports one
    pub epsilon: Option<f64>,
    pub last_reward: Option<f64>,
    pub goal_reached: Option<bool>,
    pub last_steps: Option<u32>,
    pub server_episodes: Option<usize>,
}

impl Stats {
    pub fn epsilon_label(&self) -> String {
        match self.epsilon {
            Some(epsilon) => format!("{epsilon:.3}"),
            None => format!("{:.2}", 1.0),
        }
    }

    pub fn last_reward_label(&self) -> String {
        self.last_reward
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn goal_reached_label(&self) -> &'static str {
        match self.goal_reached {
            Some(true) => "Yes",
            Some(false) => "No",
            None => PLACEHOLDER,
        }
    }

    pub fn last_steps_label(&self) -> String {
        self.last_steps
            .map(|s| s.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn server_episodes_label(&self) -> String {
        self.server_episodes
            .map(|n| n.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// Everything the dashboard shows
///
/// All updates go through the `begin_*` / `apply_*` pairs. A failed call only
/// ever adds a notice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    env: Option<EnvContext>,
    epoch: u64,
    overlay: Option<Path>,
    q_table: Option<QTable>,
    chart: RewardHistory,
    stats: Stats,
    controls: Controls,
    notices: VecDeque<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env(&self) -> Option<&EnvContext> {
        self.env.as_ref()
    }

    pub fn chart(&self) -> &RewardHistory {
        &self.chart
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn overlay(&self) -> Option<&[Coord]> {
        self.overlay.as_deref()
    }

    pub fn grid_view(&self) -> Option<GridView> {
        self.env
            .as_ref()
            .map(|ctx| render_grid(ctx, self.overlay.as_deref()))
    }

    pub fn q_grid_view(&self) -> Option<QGridView> {
        self.env
            .as_ref()
            .map(|ctx| render_q_values(ctx.size(), self.q_table.as_ref()))
    }

    /// Install a new environment
    ///
    /// **Returns** whether the displayed environment was replaced
    pub fn apply_initialize(&mut self, result: Result<EnvDescriptor, ApiError>) -> bool {
        let descriptor = match result {
            Ok(descriptor) => descriptor,
            Err(err) => {
                self.fail(Operation::Initialize, &err);
                return false;
            }
        };

        self.epoch += 1;
        info!(
            "initialized {size}x{size} environment with {} obstacles",
            descriptor.obstacle_count(),
            size = descriptor.size(),
        );
        self.env = Some(EnvContext::new(descriptor, self.epoch));
        self.overlay = None;
        self.q_table = None;
        self.chart.clear();
        self.stats = Stats {
            server_episodes: self.stats.server_episodes,
            ..Stats::default()
        };
        self.controls.train_enabled = true;
        self.controls.evaluate_enabled = false;
        true
    }

    /// Claim the train control for a request
    pub fn begin_train(&mut self) -> Result<Ticket, SessionError> {
        let ctx = self.env.as_ref().ok_or(SessionError::NotInitialized)?;
        if self.controls.train_busy {
            return Err(SessionError::TrainingInProgress);
        }
        if !self.controls.train_enabled {
            return Err(SessionError::NotInitialized);
        }
        self.controls.train_busy = true;
        Ok(Ticket { epoch: ctx.epoch })
    }

    /// Apply a training result and release the train control
    ///
    /// **Returns** whether the grid overlay was replaced
    pub fn apply_train(&mut self, ticket: Ticket, result: Result<TrainReport, ApiError>) -> bool {
        self.controls.train_busy = false;

        if !self.is_current(ticket) {
            self.drop_stale(Operation::Train, ticket, result.err());
            return false;
        }

        let report = match result {
            Ok(report) => report,
            Err(err) => {
                self.fail(Operation::Train, &err);
                return false;
            }
        };

        self.chart.extend(&report.episode_rewards);
        self.stats.total_episodes = self.chart.len();
        self.stats.epsilon = Some(report.final_epsilon);
        if let Some(&reward) = report.episode_rewards.last() {
            self.stats.last_reward = Some(reward);
        }
        if let Some(&steps) = report.episode_steps.last() {
            self.stats.last_steps = Some(steps);
        }
        self.q_table = Some(report.q_table);
        self.controls.evaluate_enabled = true;
        info!(
            "trained {} episodes, epsilon now {:.3}",
            report.episode_rewards.len(),
            report.final_epsilon
        );

        match report.paths.into_iter().last() {
            Some(path) => {
                self.overlay = Some(path);
                true
            }
            None => false,
        }
    }

    pub fn begin_evaluate(&self) -> Result<Ticket, SessionError> {
        let ctx = self.env.as_ref().ok_or(SessionError::NotInitialized)?;
        if !self.controls.evaluate_enabled {
            return Err(SessionError::NotTrained);
        }
        Ok(Ticket { epoch: ctx.epoch })
    }

    /// Apply an evaluation result
    ///
    /// **Returns** the path to replay
    pub fn apply_evaluate(
        &mut self,
        ticket: Ticket,
        result: Result<EvaluationReport, ApiError>,
    ) -> Option<Path> {
        if !self.is_current(ticket) {
            self.drop_stale(Operation::Evaluate, ticket, result.err());
            return None;
        }

        let report = match result {
            Ok(report) => report,
            Err(err) => {
                self.fail(Operation::Evaluate, &err);
                return None;
            }
        };

        self.stats.last_reward = Some(report.total_reward);
        self.stats.goal_reached = Some(report.reached_goal);
        if report.steps.is_some() {
            self.stats.last_steps = report.steps;
        }
        info!(
            "evaluation finished with reward {:.1} ({})",
            report.total_reward,
            if report.reached_goal {
                "goal reached"
            } else {
                "goal missed"
            }
        );
        Some(report.path)
    }

    pub fn apply_stats(&mut self, result: Result<ServerStats, ApiError>) {
        match result {
            Ok(stats) => {
                if stats.total_episodes != self.chart.len() {
                    warn!(
                        "service reports {} training episodes, dashboard shows {}",
                        stats.total_episodes,
                        self.chart.len()
                    );
                }
                self.stats.server_episodes = Some(stats.total_episodes);
            }
            Err(err) => self.fail(Operation::Stats, &err),
        }
    }

    /// Draw `path` over the grid, e.g. a replay frame
    pub fn show_path(&mut self, path: Path) {
        if self.env.is_some() {
            self.overlay = Some(path);
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.env.is_some() && ticket.epoch == self.epoch
    }

    pub fn reject(&mut self, err: SessionError) {
        warn!("{err}");
        self.notices.push_back(capitalize(&err.to_string()));
    }

    pub fn notice(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    pub fn dismiss_notice(&mut self) -> Option<String> {
        self.notices.pop_front()
    }

    /// A completion for a replaced environment only leaves a log line
    fn drop_stale(&self, op: Operation, ticket: Ticket, err: Option<ApiError>) {
        match err {
            Some(err) => warn!(
                "{} for environment #{} failed after it was replaced (current is #{}): {err}",
                op.log_label(),
                ticket.epoch,
                self.epoch
            ),
            None => warn!(
                "dropping result of {} for environment #{} (current is #{})",
                op.log_label(),
                ticket.epoch,
                self.epoch
            ),
        }
    }

    fn fail(&mut self, op: Operation, err: &ApiError) {
        if err.is_transport() {
            error!("Error {}: {err}", op.log_label());
        } else {
            warn!("Error {}: {err}", op.log_label());
        }
        self.notices.push_back(op.failure_message(err));
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
