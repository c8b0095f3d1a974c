use thiserror::Error;

/// Error surfaced by a single list provider's fetch.
///
/// These never escape the fetch aggregator; a failed provider is logged and
/// folded into the cycle's any-failure flag so the other providers keep
/// going.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status code {status} from list endpoint")]
    UnexpectedStatus { status: u16 },

    #[error("failed to parse list response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("list service reported an error: {0}")]
    Remote(String),
}
