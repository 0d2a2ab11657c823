pub mod state;

use thiserror::Error;

pub use state::{Page, ProjectHandle, UpvoteIcon, UpvoteWidget};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("No element with id `{0}` on the page")]
    UnknownElement(String),
}
