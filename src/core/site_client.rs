use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::core::cookies::{CookieStore, StaticCookies, get_cookie};
use crate::core::types::{ProjectId, TranscriptionJobRef, TranscriptionResponse, UpvoteResponse};
use crate::error::ActionError;
use crate::utils::constants::{CSRF_HEADER_NAME, DEFAULT_CSRF_COOKIE_NAME};
use crate::utils::urls::site_url;

/// HTTP access to the site's page endpoints, carrying the visitor's cookies.
#[derive(Clone)]
pub struct SiteClient {
    http_client: Client,
    base_url: Url,
    cookies: Arc<dyn CookieStore>,
    csrf_cookie_name: String,
}

pub fn init_site_client(config: &Config) -> Result<SiteClient, anyhow::Error> {
    Ok(SiteClient::new(
        config.base_url()?,
        Arc::new(StaticCookies::new(config.cookies.clone())),
    )
    .with_csrf_cookie_name(&config.csrf_cookie_name))
}

impl SiteClient {
    pub fn new(base_url: Url, cookies: Arc<dyn CookieStore>) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
            cookies,
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_string(),
        }
    }

    pub fn with_csrf_cookie_name(mut self, name: &str) -> Self {
        self.csrf_cookie_name = name.to_string();
        self
    }

    pub fn csrf_token(&self) -> Option<String> {
        get_cookie(self.cookies.as_ref(), &self.csrf_cookie_name)
    }

    // same-origin requests carry the whole jar, as a browser would
    fn with_cookies(&self, request: RequestBuilder) -> RequestBuilder {
        let raw = self.cookies.cookie_string();
        if raw.is_empty() {
            request
        } else {
            request.header(COOKIE, raw)
        }
    }

    /// Toggles the visitor's upvote on a project. Any non-2xx answer is an
    /// `UpvoteRejected` error and the body is not read.
    pub async fn post_upvote(&self, project: &ProjectId) -> Result<UpvoteResponse, ActionError> {
        let url = site_url(&self.base_url, &format!("/project/{}/upvote/", project))?;

        let mut request = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json");
        match self.csrf_token() {
            Some(token) => request = request.header(CSRF_HEADER_NAME, token),
            None => debug!("no {} cookie, sending upvote without csrf token", self.csrf_cookie_name),
        }

        let response = self.with_cookies(request).send().await?;
        let status = response.status();
        info!("Response Status: {}", status.as_u16());

        if !status.is_success() {
            return Err(ActionError::UpvoteRejected {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let data: UpvoteResponse = serde_json::from_slice(&body)?;
        debug!("Server Response: {:?}", data);
        Ok(data)
    }

    /// One status check for a transcription job. The HTTP status is ignored;
    /// only the body decides the outcome.
    pub async fn fetch_transcription_status(
        &self,
        job: &TranscriptionJobRef,
    ) -> Result<TranscriptionResponse, ActionError> {
        let url = site_url(&self.base_url, &job.status_path())?;

        let request = self.http_client.get(url);
        let response = self.with_cookies(request).send().await?;
        info!(
            "transcription status for {} answered {}",
            job.job_name,
            response.status().as_u16()
        );

        let body = response.bytes().await?;
        let data: TranscriptionResponse = serde_json::from_slice(&body)?;
        debug!("Server Response: {:?}", data);
        Ok(data)
    }
}

#[cfg(test)]
mod cfg_tests {
    use super::*;
    use crate::booter::Booter;
    use axum::Router;
    use axum::extract::State;
    use axum::http::HeaderMap;
    use axum::routing::{get, post};
    use axum::Json;
    use serde_json::{Value, json};
    use tokio::sync::Mutex;

    type Seen = Arc<Mutex<Option<HeaderMap>>>;

    async fn record_upvote(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
        *seen.lock().await = Some(headers);
        Json(json!({"upvotes": 1, "status": "added"}))
    }

    async fn record_refresh(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
        *seen.lock().await = Some(headers);
        Json(json!({"status": "Transcribing...", "transcription": ""}))
    }

    async fn recording_site() -> (Url, Seen) {
        let seen: Seen = Arc::new(Mutex::new(None));
        let router = Router::new()
            .route("/project/{project_id}/upvote/", post(record_upvote))
            .route("/refresh-transcription/{job_name}/{file_id}", get(record_refresh))
            .with_state(seen.clone());
        let base_url = Booter::new().await.start(router);
        (base_url, seen)
    }

    #[tokio::test]
    async fn test_upvote_request_headers() {
        let (base_url, seen) = recording_site().await;
        let cookies = Arc::new(StaticCookies::new("sessionid=s1; csrftoken=abc%3D%3D"));
        let client = SiteClient::new(base_url, cookies);

        let data = client.post_upvote(&ProjectId::from(3u64)).await.unwrap();
        assert_eq!(data.upvotes, 1);

        let headers = seen.lock().await.clone().unwrap();
        assert_eq!(headers.get("x-csrftoken").unwrap(), "abc==");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(
            headers.get("cookie").unwrap(),
            "sessionid=s1; csrftoken=abc%3D%3D"
        );
    }

    #[tokio::test]
    async fn test_custom_csrf_cookie_name() {
        let (base_url, seen) = recording_site().await;
        let cookies = Arc::new(StaticCookies::new("csrftoken=wrong; xsrf=right"));
        let client = SiteClient::new(base_url, cookies).with_csrf_cookie_name("xsrf");

        client.post_upvote(&ProjectId::from("p")).await.unwrap();
        let headers = seen.lock().await.clone().unwrap();
        assert_eq!(headers.get("x-csrftoken").unwrap(), "right");
    }

    #[tokio::test]
    async fn test_empty_jar_sends_no_cookie_headers() {
        let (base_url, seen) = recording_site().await;
        let client = SiteClient::new(base_url, Arc::new(StaticCookies::default()));

        client.post_upvote(&ProjectId::from(3u64)).await.unwrap();
        let headers = seen.lock().await.clone().unwrap();
        assert!(headers.get("x-csrftoken").is_none());
        assert!(headers.get("cookie").is_none());
    }

    #[tokio::test]
    async fn test_refresh_is_a_plain_get() {
        let (base_url, seen) = recording_site().await;
        let client = SiteClient::new(base_url, Arc::new(StaticCookies::new("sessionid=s1")));

        let data = client
            .fetch_transcription_status(&TranscriptionJobRef::new("job-a", "4"))
            .await
            .unwrap();
        assert_eq!(data.status, crate::core::types::TranscriptionStatus::Transcribing);

        let headers = seen.lock().await.clone().unwrap();
        assert!(headers.get("x-csrftoken").is_none());
        assert_eq!(headers.get("cookie").unwrap(), "sessionid=s1");
    }
}
