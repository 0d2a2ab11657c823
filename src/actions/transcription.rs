use std::time::Duration;
use tracing::{error, info};

use crate::core::site_client::SiteClient;
use crate::core::types::{TranscriptionJobRef, TranscriptionResponse, TranscriptionStatus};
use crate::error::ActionError;
use crate::page::Page;
use crate::utils::constants::{TRANSCRIPTION_FAILED_HTML, TRANSCRIPTION_IN_PROGRESS_HTML};
use crate::utils::html::paragraph;

/// Markup for the transcription panel. Any status other than the two known
/// literals is shown as a failure.
pub fn render_transcription(response: &TranscriptionResponse) -> String {
    match response.status {
        TranscriptionStatus::Completed => {
            paragraph(response.transcription.as_deref().unwrap_or_default())
        }
        TranscriptionStatus::Transcribing => TRANSCRIPTION_IN_PROGRESS_HTML.to_string(),
        TranscriptionStatus::Unrecognized(_) => TRANSCRIPTION_FAILED_HTML.to_string(),
    }
}

/// Checks a transcription job once and renders the result into the panel.
///
/// If the request or the body fails, the failure is logged and the panel
/// keeps whatever it showed before. The visitor is not alerted.
pub async fn refresh_transcription_status(
    client: &SiteClient,
    page: &Page,
    job: &TranscriptionJobRef,
) -> Result<TranscriptionStatus, ActionError> {
    match client.fetch_transcription_status(job).await {
        Ok(data) => {
            page.set_transcription_html(render_transcription(&data)).await;
            Ok(data.status)
        }
        Err(e) => {
            error!("Error fetching transcription status: {}", e);
            Err(e)
        }
    }
}

/// Repeats the one-shot check every `interval` while the job is still
/// transcribing. Stops at the first failure.
pub async fn watch_transcription(
    client: &SiteClient,
    page: &Page,
    job: &TranscriptionJobRef,
    interval: Duration,
) -> Result<TranscriptionStatus, ActionError> {
    loop {
        let status = refresh_transcription_status(client, page, job).await?;
        if status != TranscriptionStatus::Transcribing {
            return Ok(status);
        }
        info!("{} still transcribing, checking again in {:?}", job.job_name, interval);
        tokio::time::sleep(interval).await;
    }
}
