pub mod transcription;
pub mod upvote;
