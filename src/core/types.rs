use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Opaque project identifier, rendered verbatim into paths and element ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn count_element_id(&self) -> String {
        format!("upvote-count-{}", self.0)
    }

    pub fn icon_element_id(&self) -> String {
        format!("upvote-icon-{}", self.0)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum UpvoteStatus {
    Added,
    Removed,
    Unrecognized,
}

impl From<Value> for UpvoteStatus {
    fn from(status: Value) -> Self {
        match status.as_str() {
            Some("added") => UpvoteStatus::Added,
            Some("removed") => UpvoteStatus::Removed,
            _ => UpvoteStatus::Unrecognized,
        }
    }
}

// Response of POST /project/{id}/upvote/
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpvoteResponse {
    pub upvotes: i64,
    #[serde(default)]
    pub status: Option<UpvoteStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionJobRef {
    pub job_name: String,
    pub file_id: String,
}

impl TranscriptionJobRef {
    pub fn new(job_name: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            file_id: file_id.into(),
        }
    }

    pub fn status_path(&self) -> String {
        format!("/refresh-transcription/{}/{}", self.job_name, self.file_id)
    }
}

/// Job status as reported by the site. Only two literals are recognized;
/// everything else, whatever its JSON type, lands in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum TranscriptionStatus {
    Completed,
    Transcribing,
    Unrecognized(Value),
}

impl Default for TranscriptionStatus {
    fn default() -> Self {
        TranscriptionStatus::Unrecognized(Value::Null)
    }
}

impl From<Value> for TranscriptionStatus {
    fn from(status: Value) -> Self {
        match status.as_str() {
            Some("completed") => TranscriptionStatus::Completed,
            Some("Transcribing...") => TranscriptionStatus::Transcribing,
            _ => TranscriptionStatus::Unrecognized(status),
        }
    }
}

// Response of GET /refresh-transcription/{job}/{file}
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranscriptionResponse {
    #[serde(default)]
    pub status: TranscriptionStatus,
    #[serde(default)]
    pub transcription: Option<String>,
}
