//! Error types for the client half.

use reqwest::StatusCode;
use thiserror::Error;

/// Ways an issued request, or the connection it rides on, can fail.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The transport failed outright: connection refused, reset, timeout.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with a success status.
    #[error("Server answered with status {status}")]
    Status { status: StatusCode },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response body: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Something answered the identity probe, but not with the expected
    /// body, so it is not a course API server.
    #[error("Service at {url} is not a course API server")]
    ForeignService { url: String },

    /// The connection monitor exhausted its attempts without ever
    /// verifying a course API server.
    #[error("Could not reach the course server after {attempts} attempts")]
    ConnectFailed { attempts: u32 },

    /// The request queue shut down before the request could be issued.
    #[error("Request queue is closed")]
    QueueClosed,
}

impl RequestError {
    /// True for failures of the transport itself, including non-success
    /// statuses, as opposed to failures interpreting a good response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }

    /// True when a response arrived but its body could not be decoded.
    pub fn is_deserialize(&self) -> bool {
        matches!(self, Self::Deserialize(_))
    }

    /// True when the connection monitor gave up before this request ran.
    pub fn is_connect_failed(&self) -> bool {
        matches!(self, Self::ConnectFailed { .. })
    }
}
