//! HTTP move advisor for numerge.
//!
//! [`SuggestionClient`] implements [`MoveAdvisor`] by POSTing the board prompt
//! to a language-model service and logging the reply:
//!
//! ```text
//! POST {base_url}/api/fabric/v1/ai/suggest-move
//! {"question": "<prompt>", "model": "<model>"}
//!
//! 200 OK
//! {"data": {"message": "<suggestion>"}}
//! ```
//!
//! At most one suggestion request is outstanding per client (clones share the
//! slot): starting a new request cancels the previous one, which then resolves
//! to [`AdvisorError::Cancelled`].

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use bytes::Bytes;
use futures_channel::oneshot;
use http_body_util::{BodyExt as _, Full};
use hyper::{
    Method, Request, StatusCode, Uri,
    header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE},
};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use log::{debug, info};
use numerge_game::MoveAdvisor;
use serde::{Deserialize, Serialize};

/// Path of the suggestion endpoint, relative to the base URL.
pub const SUGGEST_MOVE_PATH: &str = "/api/fabric/v1/ai/suggest-move";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Model identifier used when none is configured.
pub const DEFAULT_MODEL: &str = "llama3.2:3b-instruct-q8_0";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Connection settings for a [`SuggestionClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Scheme, host and port of the service, e.g. `http://localhost:11434`.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Upper bound on a single request, including reading the reply.
    pub timeout: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AdvisorConfig {
    /// Returns the full suggestion endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{SUGGEST_MOVE_PATH}", self.base_url.trim_end_matches('/'))
    }
}

/// Errors produced while asking for a suggestion.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AdvisorError {
    /// The configured endpoint is not a valid URI.
    #[display("invalid advisor endpoint: {_0}")]
    InvalidEndpoint(#[from] hyper::http::uri::InvalidUri),
    /// The HTTP request could not be built.
    #[display("failed to build request: {_0}")]
    Request(#[from] hyper::http::Error),
    /// The request could not be sent or no response arrived.
    #[display("request failed: {_0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
    /// The response body could not be read.
    #[display("failed to read response body: {_0}")]
    Body(#[from] hyper::Error),
    /// The service answered with a non-success status.
    #[display("advisor responded with status {status}")]
    UnexpectedStatus {
        /// Status returned by the service.
        status: StatusCode,
    },
    /// The request or the response body was not valid JSON.
    #[display("invalid JSON payload: {_0}")]
    Json(#[from] serde_json::Error),
    /// The request did not complete within the configured timeout.
    #[display("advisor request timed out after {timeout:?}")]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },
    /// A newer request replaced this one before it completed.
    #[display("advisor request was cancelled")]
    Cancelled,
}

#[derive(Debug, Serialize)]
struct SuggestMoveRequest<'a> {
    question: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuggestMoveResponse {
    data: Option<SuggestMoveData>,
}

#[derive(Debug, Deserialize)]
struct SuggestMoveData {
    message: Option<String>,
}

/// A [`MoveAdvisor`] backed by an HTTP language-model service.
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    config: Arc<AdvisorConfig>,
    endpoint: Arc<str>,
    http: Client<HttpConnector, Full<Bytes>>,
    in_flight: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl SuggestionClient {
    /// Creates a client for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::InvalidEndpoint`] if the endpoint URL does not parse.
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let endpoint = config.endpoint();
        endpoint.parse::<Uri>()?;
        Ok(Self {
            config: Arc::new(config),
            endpoint: endpoint.into(),
            http: Client::builder(TokioExecutor::new()).build_http(),
            in_flight: Arc::new(Mutex::new(None)),
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Cancels the outstanding request, if any.
    pub fn cancel(&self) {
        let previous = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(previous) = previous {
            let _ = previous.send(());
        }
    }

    fn replace_in_flight(&self) -> oneshot::Receiver<()> {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let previous = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(cancel_tx);
        if let Some(previous) = previous
            && previous.send(()).is_ok()
        {
            debug!("cancelled previous suggestion request");
        }
        cancel_rx
    }

    /// Sends `question` and returns the suggested move text, if the reply carried one.
    ///
    /// Any request still in flight from this client (or a clone) is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, a malformed
    /// reply, a timeout, or if a newer request cancels this one.
    pub async fn request_suggestion(&self, question: &str) -> Result<Option<String>, AdvisorError> {
        let cancelled = self.replace_in_flight();
        let timeout = self.config.timeout;
        tokio::select! {
            result = tokio::time::timeout(timeout, self.post(question)) => {
                result.map_err(|_| AdvisorError::Timeout { timeout })?
            }
            _ = cancelled => Err(AdvisorError::Cancelled),
        }
    }

    async fn post(&self, question: &str) -> Result<Option<String>, AdvisorError> {
        let body = serde_json::to_vec(&SuggestMoveRequest {
            question,
            model: &self.config.model,
        })?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(&*self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json, text/plain")
            .header(CACHE_CONTROL, "no-cache")
            .body(Full::new(Bytes::from(body)))?;

        debug!(
            "POST {} (model={}, {} prompt bytes)",
            self.endpoint,
            self.config.model,
            question.len()
        );
        let response = self.http.request(request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();
        debug!("advisor replied {status} with {} bytes", body.len());

        if !status.is_success() {
            return Err(AdvisorError::UnexpectedStatus { status });
        }
        let reply: SuggestMoveResponse = serde_json::from_slice(&body)?;
        Ok(reply.data.and_then(|data| data.message))
    }
}

impl MoveAdvisor for SuggestionClient {
    type Error = AdvisorError;

    async fn suggest_move(&self, prompt: String) -> Result<(), AdvisorError> {
        match self.request_suggestion(&prompt).await? {
            Some(message) => {
                info!("AI Suggest Move Response:");
                info!("{message}");
            }
            None => debug!("AI Suggest Move Response received but no data found"),
        }
        Ok(())
    }
}
