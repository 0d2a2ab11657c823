pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";
pub const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";

pub const TRANSCRIPTION_ELEMENT_ID: &str = "transcription-text";
pub const TRANSCRIPTION_IN_PROGRESS_HTML: &str =
    "<p>Transcription in progress. Come back in a few minutes.</p>";
pub const TRANSCRIPTION_FAILED_HTML: &str = "<p>Transcription failed.</p>";

pub const FILLED_ICON_CLASS: &str = "filled";
pub const FILLED_ICON_COLOR: &str = "green";
