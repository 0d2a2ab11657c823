use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::core::types::{ProjectId, UpvoteResponse, UpvoteStatus};
use crate::page::PageError;
use crate::utils::constants::{FILLED_ICON_CLASS, FILLED_ICON_COLOR, TRANSCRIPTION_ELEMENT_ID};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpvoteIcon {
    pub classes: BTreeSet<String>,
    pub color: String,
}

impl UpvoteIcon {
    pub fn is_filled(&self) -> bool {
        self.classes.contains(FILLED_ICON_CLASS)
    }

    fn fill(&mut self) {
        self.classes.insert(FILLED_ICON_CLASS.to_string());
        self.color = FILLED_ICON_COLOR.to_string();
    }

    fn clear(&mut self) {
        self.classes.remove(FILLED_ICON_CLASS);
        self.color.clear();
    }
}

/// The counter and icon shown next to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpvoteWidget {
    pub count_element_id: String,
    pub icon_element_id: String,
    pub count_text: String,
    pub icon: UpvoteIcon,
}

/// Registered upvote widget. Holding one guarantees both elements exist.
#[derive(Debug, Clone)]
pub struct ProjectHandle {
    id: ProjectId,
    widget: Arc<RwLock<UpvoteWidget>>,
}

impl ProjectHandle {
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub async fn widget(&self) -> UpvoteWidget {
        self.widget.read().await.clone()
    }

    /// Mirrors the server's answer: the count always, the icon only for a
    /// status it recognizes.
    pub async fn apply(&self, response: &UpvoteResponse) {
        let mut widget = self.widget.write().await;
        widget.count_text = response.upvotes.to_string();
        match response.status {
            Some(UpvoteStatus::Added) => widget.icon.fill(),
            Some(UpvoteStatus::Removed) => widget.icon.clear(),
            Some(UpvoteStatus::Unrecognized) | None => {}
        }
    }
}

/// In-process model of the page the actions write into.
#[derive(Debug, Default)]
pub struct Page {
    projects: RwLock<HashMap<ProjectId, ProjectHandle>>,
    transcription_html: RwLock<String>,
    alerts: RwLock<Vec<String>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the counter and icon for a project, rendered with its current
    /// state. Registering the same id again returns the existing handle.
    pub async fn register_project(
        &self,
        id: impl Into<ProjectId>,
        upvotes: i64,
        upvoted: bool,
    ) -> ProjectHandle {
        let id = id.into();
        let mut projects = self.projects.write().await;
        if let Some(existing) = projects.get(&id) {
            return existing.clone();
        }

        let mut icon = UpvoteIcon::default();
        if upvoted {
            icon.fill();
        }
        let widget = UpvoteWidget {
            count_element_id: id.count_element_id(),
            icon_element_id: id.icon_element_id(),
            count_text: upvotes.to_string(),
            icon,
        };
        let handle = ProjectHandle {
            id: id.clone(),
            widget: Arc::new(RwLock::new(widget)),
        };
        projects.insert(id, handle.clone());
        handle
    }

    pub async fn project(&self, id: &ProjectId) -> Result<ProjectHandle, PageError> {
        self.projects
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| PageError::UnknownElement(id.count_element_id()))
    }

    pub fn transcription_element_id(&self) -> &'static str {
        TRANSCRIPTION_ELEMENT_ID
    }

    pub async fn transcription_html(&self) -> String {
        self.transcription_html.read().await.clone()
    }

    pub async fn set_transcription_html(&self, html: String) {
        *self.transcription_html.write().await = html;
    }

    /// Blocking user notification. Every alert is also logged.
    pub async fn alert(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("alert: {}", message);
        self.alerts.write().await.push(message);
    }

    pub async fn alerts(&self) -> Vec<String> {
        self.alerts.read().await.clone()
    }
}
