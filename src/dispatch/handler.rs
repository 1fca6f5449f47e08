/// Scheme prefix reserved for in-application links
pub const HANDLER_PROTOCOL: &str = "rssowl://";

/// Capability that acts on a reserved link
///
/// Receives the handler id it was registered under and the original,
/// undecoded link. Failures stay inside the handler.
pub trait LinkHandler: Send + Sync {
    fn handle(&self, id: &str, link: &str);
}

impl<F> LinkHandler for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn handle(&self, id: &str, link: &str) {
        self(id, link)
    }
}

/// Handler that only records the link in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl LinkHandler for TracingHandler {
    fn handle(&self, id: &str, link: &str) {
        tracing::info!(handler = %id, %link, "Link handled");
    }
}

/// Handler id of a reserved link.
///
/// The id is everything between the scheme prefix and the first `/`, `?` or
/// `#`. Returns `None` for links outside the reserved scheme.
pub fn handler_id(link: &str) -> Option<&str> {
    let rest = link.strip_prefix(HANDLER_PROTOCOL)?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_id_extraction() {
        assert_eq!(handler_id("rssowl://feed/123"), Some("feed"));
        assert_eq!(handler_id("rssowl://feed"), Some("feed"));
        assert_eq!(handler_id("rssowl://toggleRead?id=5"), Some("toggleRead"));
        assert_eq!(handler_id("rssowl://label#top"), Some("label"));
        assert_eq!(handler_id("rssowl://"), Some(""));
    }

    #[test]
    fn test_other_schemes_have_no_id() {
        assert_eq!(handler_id("http://example.com"), None);
        assert_eq!(handler_id("RSSOWL://feed/1"), None);
        assert_eq!(handler_id("about:blank"), None);
        assert_eq!(handler_id(""), None);
    }
}
