use tracing::error;

use crate::core::site_client::SiteClient;
use crate::core::types::{ProjectId, UpvoteResponse};
use crate::error::ActionError;
use crate::page::{Page, ProjectHandle};

/// Toggles the upvote on a registered project and mirrors the server's count
/// and state into its widget.
///
/// The widget is written only after a successful response. On any failure the
/// error is logged, the visitor is alerted with its message and the widget is
/// left as it was.
pub async fn toggle_upvote(
    client: &SiteClient,
    page: &Page,
    project: &ProjectHandle,
) -> Result<UpvoteResponse, ActionError> {
    match client.post_upvote(project.id()).await {
        Ok(data) => {
            project.apply(&data).await;
            Ok(data)
        }
        Err(e) => {
            error!("Error upvoting project {}: {}", project.id(), e);
            page.alert(format!("Upvote failed: {}", e)).await;
            Err(e)
        }
    }
}

/// Same as [`toggle_upvote`] for a project known only by id. An id that was
/// never registered on the page fails before any request is sent.
pub async fn toggle_upvote_by_id(
    client: &SiteClient,
    page: &Page,
    id: &ProjectId,
) -> Result<UpvoteResponse, ActionError> {
    let project = page.project(id).await.map_err(|e| {
        error!("Error upvoting project {}: {}", id, e);
        ActionError::from(e)
    })?;
    toggle_upvote(client, page, &project).await
}
