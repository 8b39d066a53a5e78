use std::future::Future;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    env::{Coord, EnvDescriptor, Path},
    error::ApiError,
    q_table::QTable,
};

mod http;

pub use http::HttpService;

/// Message used when the service reports a failure without saying why
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// The remote grid-world service
///
/// Implementations decode the uniform `{success, error?}` envelope so callers
/// only ever see the payload or an [`ApiError`].
pub trait GridService: Send + Sync + 'static {
    /// `POST /initialize`
    fn initialize(
        &self,
        grid_size: usize,
    ) -> impl Future<Output = Result<EnvDescriptor, ApiError>> + Send;

    /// `POST /train`
    fn train(&self, episodes: u32) -> impl Future<Output = Result<TrainReport, ApiError>> + Send;

    /// `POST /evaluate`
    fn evaluate(&self) -> impl Future<Output = Result<EvaluationReport, ApiError>> + Send;

    /// `GET /stats`
    fn stats(&self) -> impl Future<Output = Result<ServerStats, ApiError>> + Send;
}

#[derive(Debug, Clone, Serialize)]
pub struct InitializeRequest {
    pub grid_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainRequest {
    pub episodes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluateRequest {}

#[derive(Debug, Clone, Deserialize)]
pub struct InitializeReport {
    #[serde(default)]
    pub grid_size: Option<usize>,
    pub start_pos: Coord,
    pub goal_pos: Coord,
    pub obstacles: Vec<Vec<bool>>,
}

impl InitializeReport {
    /// Validate the reported layout against the size that was requested
    pub fn into_descriptor(self, requested: usize) -> Result<EnvDescriptor, ApiError> {
        if let Some(reported) = self.grid_size {
            if reported != requested {
                return Err(ApiError::Malformed(format!(
                    "requested a {requested}x{requested} grid but the service built {reported}x{reported}"
                )));
            }
        }
        EnvDescriptor::new(requested, self.start_pos, self.goal_pos, self.obstacles)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainReport {
    pub episode_rewards: Vec<f64>,
    pub final_epsilon: f64,
    pub q_table: QTable,
    pub paths: Vec<Path>,
    #[serde(default)]
    pub episode_steps: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvaluationReport {
    pub path: Path,
    pub total_reward: f64,
    pub reached_goal: bool,
    #[serde(default)]
    pub steps: Option<u32>,
}

/// Reply of `GET /stats`, which is not wrapped in the envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerStats {
    pub training_history: Vec<f64>,
    pub total_episodes: usize,
}

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

/// Decode an enveloped response body into its payload
///
/// `success: false` becomes [`ApiError::Application`] carrying the service's
/// message, or [`UNKNOWN_ERROR`] when it sent none.
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    if !envelope.success {
        return Err(ApiError::Application(
            envelope.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        ));
    }
    Ok(serde_json::from_value(Value::Object(envelope.payload))?)
}
