//! HTTP client half of the course API.
//!
//! The client owns two background tasks: a [`monitor`] that verifies
//! the server's identity before anything else happens, and a single
//! request worker that issues queued requests one at a time. Requests
//! are submitted with a continuation; the continuation always receives
//! an [`Outcome`] envelope, whether the request produced a value or
//! died on the way.

pub mod error;
pub mod monitor;
pub mod outcome;

pub use error::RequestError;
pub use monitor::ConnectionState;
pub use outcome::Outcome;

use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::core::config::Config;
use crate::core::types::Summary;

/// Hands a fetched body, or the failure that prevented one, to the
/// typed decoding step captured at submission time.
type Deliver = Box<dyn FnOnce(Result<Vec<u8>, RequestError>) + Send>;

struct Job {
    path: &'static str,
    deliver: Deliver,
}

/// Asynchronous client for the course API server.
///
/// Construction spawns the connection monitor and the request worker,
/// so a [`Client`] must be created inside a Tokio runtime. Requests
/// submitted before the connection resolves are held in the queue and
/// released once it does; if the monitor gives up instead, every held
/// and later request is answered with a
/// [`RequestError::ConnectFailed`] envelope.
pub struct Client {
    jobs: mpsc::UnboundedSender<Job>,
    state: watch::Receiver<ConnectionState>,
    connect_attempts: u32,
}

impl Client {
    /// Build the client and start its background tasks.
    pub fn new(config: &Config) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        let base_url = config.base_url();
        let attempts = config.client.connect_attempts;
        let (state_tx, state_rx) = watch::channel(ConnectionState::Unresolved);
        let (jobs_tx, jobs_rx) = mpsc::unbounded_channel();

        tokio::spawn(monitor::establish(
            http.clone(),
            base_url.clone(),
            attempts,
            config.retry_delay(),
            state_tx,
        ));
        tokio::spawn(run_requests(
            http,
            base_url,
            state_rx.clone(),
            jobs_rx,
            attempts,
        ));

        Ok(Self {
            jobs: jobs_tx,
            state: state_rx,
            connect_attempts: attempts,
        })
    }

    /// The connection state as of right now, without waiting.
    pub fn connection_state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// Wait for the connection to resolve.
    ///
    /// Returns `Ok(true)` once the monitor has verified the server, or
    /// [`RequestError::ConnectFailed`] if it exhausted its attempts.
    pub async fn connected(&self) -> Result<bool, RequestError> {
        let mut state = self.state.clone();
        let resolved = state
            .wait_for(|s| *s != ConnectionState::Unresolved)
            .await;
        match resolved {
            Ok(s) if *s == ConnectionState::Connected => Ok(true),
            _ => Err(RequestError::ConnectFailed {
                attempts: self.connect_attempts,
            }),
        }
    }

    /// Fetch the course summary list.
    ///
    /// Returns immediately; the continuation runs on the request worker
    /// once the request completes, receiving an envelope with either
    /// the summaries or the captured failure. The single worker issues
    /// requests one at a time, so continuations run in submission
    /// order.
    pub fn get_summary<F>(&self, continuation: F)
    where
        F: FnOnce(Outcome<Vec<Summary>>) + Send + 'static,
    {
        self.submit("/summary/", continuation);
    }

    fn submit<T, F>(&self, path: &'static str, continuation: F)
    where
        T: DeserializeOwned + 'static,
        F: FnOnce(Outcome<T>) + Send + 'static,
    {
        let deliver: Deliver = Box::new(move |fetched| {
            let outcome = match fetched {
                Ok(body) => match serde_json::from_slice::<T>(&body) {
                    Ok(value) => Outcome::success(value),
                    Err(e) => Outcome::failure(RequestError::Deserialize(e)),
                },
                Err(e) => Outcome::failure(e),
            };
            continuation(outcome);
        });
        if let Err(mpsc::error::SendError(job)) = self.jobs.send(Job { path, deliver }) {
            warn!("Request queue closed; delivering failure");
            (job.deliver)(Err(RequestError::QueueClosed));
        }
    }
}

/// The request worker: waits for the connection to resolve, then issues
/// queued jobs strictly one at a time.
async fn run_requests(
    http: reqwest::Client,
    base_url: String,
    mut state: watch::Receiver<ConnectionState>,
    mut jobs: mpsc::UnboundedReceiver<Job>,
    attempts: u32,
) {
    let connected = match state
        .wait_for(|s| *s != ConnectionState::Unresolved)
        .await
    {
        Ok(s) => *s == ConnectionState::Connected,
        Err(_) => false,
    };

    while let Some(job) = jobs.recv().await {
        if !connected {
            (job.deliver)(Err(RequestError::ConnectFailed { attempts }));
            continue;
        }
        let url = format!("{}{}", base_url, job.path);
        debug!(%url, "Issuing request");
        let fetched = fetch(&http, &url).await;
        (job.deliver)(fetched);
    }
}

async fn fetch(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, RequestError> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Status { status });
    }
    let body = response.bytes().await?;
    Ok(body.to_vec())
}
