use url::{ParseError, Url};

pub fn to_url(host: &str) -> Result<Url, ParseError> {
    Url::parse(host)
}

/// Appends a site-absolute path to the base url. Any path prefix on the base
/// (a site mounted under `/app`) is kept, the path is used verbatim and the
/// base's query and fragment are dropped.
pub fn site_url(base: &Url, path: &str) -> Result<Url, ParseError> {
    if base.cannot_be_a_base() {
        return Err(ParseError::RelativeUrlWithCannotBeABaseBase);
    }

    let mut url = base.clone();
    url.set_path(&format!("{}{}", base.path().trim_end_matches('/'), path));
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
