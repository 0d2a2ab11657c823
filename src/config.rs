use anyhow::{Context, Error, anyhow};
use url::Url;

use crate::utils::constants::DEFAULT_CSRF_COOKIE_NAME;
use crate::utils::get_env::get_env_var_or;
use crate::utils::urls::to_url;

#[derive(Debug, Clone)]
pub struct Config {
    base_url: Option<String>,
    pub cookies: String,
    pub csrf_cookie_name: String,
}

impl Config {
    // Reads SITE_BASE_URL, SITE_COOKIES and CSRF_COOKIE_NAME (.env honoured).
    // The base url is only checked once something asks for it.
    pub fn load() -> Self {
        let base_url = get_env_var_or("SITE_BASE_URL", "");

        Self {
            base_url: (!base_url.is_empty()).then_some(base_url),
            cookies: get_env_var_or("SITE_COOKIES", ""),
            csrf_cookie_name: get_env_var_or("CSRF_COOKIE_NAME", DEFAULT_CSRF_COOKIE_NAME),
        }
    }

    pub fn base_url(&self) -> Result<Url, Error> {
        let raw = self
            .base_url
            .as_deref()
            .ok_or_else(|| anyhow!("SITE_BASE_URL is not set"))?;
        let url = to_url(raw).with_context(|| format!("SITE_BASE_URL is not a valid url: {}", raw))?;
        if url.cannot_be_a_base() {
            return Err(anyhow!("SITE_BASE_URL must be an http(s) url: {}", raw));
        }
        Ok(url)
    }
}
