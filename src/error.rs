use thiserror::Error;

use crate::page::PageError;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to upvote. HTTP Status: {status}")]
    UpvoteRejected { status: u16 },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Page(#[from] PageError),
}
