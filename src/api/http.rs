use log::debug;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use super::{
    decode_envelope, EvaluateRequest, EvaluationReport, GridService, InitializeReport,
    InitializeRequest, ServerStats, TrainReport, TrainRequest,
};
use crate::{env::EnvDescriptor, error::ApiError};

/// [`GridService`] over HTTP with JSON bodies
#[derive(Debug, Clone)]
pub struct HttpService {
    client: Client,
    base_url: String,
}

impl HttpService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = join_url(&self.base_url, path);
        debug!("POST {url}");
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        decode_reply(status, &bytes)
    }
}

impl GridService for HttpService {
    async fn initialize(&self, grid_size: usize) -> Result<EnvDescriptor, ApiError> {
        let report: InitializeReport = self
            .post("/initialize", &InitializeRequest { grid_size })
            .await?;
        report.into_descriptor(grid_size)
    }

    async fn train(&self, episodes: u32) -> Result<TrainReport, ApiError> {
        self.post("/train", &TrainRequest { episodes }).await
    }

    async fn evaluate(&self) -> Result<EvaluationReport, ApiError> {
        self.post("/evaluate", &EvaluateRequest {}).await
    }

    async fn stats(&self) -> Result<ServerStats, ApiError> {
        let url = join_url(&self.base_url, "/stats");
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Any non-2xx reply is a transport failure, whatever its body says
fn decode_reply<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    decode_envelope(body)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Operation;

    #[test]
    fn error_status_wins_over_envelope() {
        let body = br#"{"success": false, "error": "Grid size must be between 3 and 10"}"#;
        let err = decode_reply::<TrainReport>(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(matches!(err, ApiError::Status(400)));
        assert!(err.is_transport());
        assert_eq!(
            Operation::Initialize.failure_message(&err),
            "Error initializing environment. Please try again."
        );

        let err = decode_reply::<TrainReport>(StatusCode::BAD_GATEWAY, b"<html>").unwrap_err();
        assert!(matches!(err, ApiError::Status(502)));
    }

    #[test]
    fn success_status_goes_through_the_envelope() {
        let err = decode_reply::<TrainReport>(
            StatusCode::OK,
            br#"{"success": false, "error": "Environment not initialized"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Application(m) if m == "Environment not initialized"));

        let ok = decode_reply::<ServerStats>(
            StatusCode::OK,
            br#"{"success": true, "training_history": [], "total_episodes": 0}"#,
        )
        .unwrap();
        assert_eq!(ok.total_episodes, 0);
    }

    #[test]
    fn joins_urls() {
        assert_eq!(join_url("http://localhost:5000", "/train"), "http://localhost:5000/train");
        assert_eq!(join_url("http://localhost:5000/", "/train"), "http://localhost:5000/train");
        assert_eq!(join_url("http://host/api", "stats"), "http://host/api/stats");
    }

    #[test]
    fn keeps_base_url() {
        let service = HttpService::new("http://127.0.0.1:5000").unwrap();
        assert_eq!(service.base_url(), "http://127.0.0.1:5000");
    }
}
