use percent_encoding::percent_decode_str;

/// Read-only access to a browser-style cookie string (`a=1; b=2`).
pub trait CookieStore: Send + Sync {
    fn cookie_string(&self) -> String;
}

/// A cookie jar fixed at construction, e.g. from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticCookies {
    raw: String,
}

impl StaticCookies {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl CookieStore for StaticCookies {
    fn cookie_string(&self) -> String {
        self.raw.clone()
    }
}

/// Returns the percent-decoded value of the first cookie named exactly `name`.
///
/// Segments are split on `;` and trimmed before matching. A missing cookie or
/// an empty jar yields `None`; undecodable bytes are replaced rather than
/// reported.
pub fn get_cookie(store: &dyn CookieStore, name: &str) -> Option<String> {
    let raw = store.cookie_string();
    if raw.is_empty() {
        return None;
    }

    let prefix = format!("{}=", name);
    raw.split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|value| percent_decode_str(value).decode_utf8_lossy().into_owned())
}
