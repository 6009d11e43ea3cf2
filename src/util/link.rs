use thiserror::Error;
use url::Url;

/// Errors that can occur while turning a menu link into an openable URL.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBase(url::ParseError),
    /// The link could not be joined onto the base URL.
    #[error("Invalid link '{link}': {source}")]
    InvalidLink {
        link: String,
        source: url::ParseError,
    },
    /// The resolved URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
}

/// Resolve a menu link against `base`, the way an anchor's href resolves
/// against the page it sits on.
///
/// Absolute links replace the base entirely. Only http and https results are
/// accepted so a menu entry can never launch a local file or other handler.
///
/// # Examples
///
/// ```
/// use cascade::util::resolve_link;
///
/// let url = resolve_link("https://shop.example.com/", "/about").unwrap();
/// assert_eq!(url.as_str(), "https://shop.example.com/about");
///
/// assert!(resolve_link("https://shop.example.com/", "file:///etc/passwd").is_err());
/// ```
pub fn resolve_link(base: &str, link: &str) -> Result<Url, LinkError> {
    let base = Url::parse(base).map_err(LinkError::InvalidBase)?;
    let url = base.join(link).map_err(|source| LinkError::InvalidLink {
        link: link.to_owned(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(LinkError::UnsupportedScheme(scheme.to_owned())),
    }
}
