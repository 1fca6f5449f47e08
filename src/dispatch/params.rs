use thiserror::Error;
use url::Url;

use super::handler::handler_id;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("not a reserved link: {0}")]
    NotReserved(String),

    #[error("malformed link: {0}")]
    Malformed(#[from] url::ParseError),
}

/// Parameters carried by a reserved link
///
/// `rssowl://news/42/attachments?index=1` yields id `news`, segments
/// `["42", "attachments"]` and query `index=1`. Segments are kept
/// percent-encoded; query values are decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParams {
    id: String,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl LinkParams {
    pub fn parse(link: &str) -> Result<Self, ParamsError> {
        let id = handler_id(link).ok_or_else(|| ParamsError::NotReserved(link.to_string()))?;
        let url = Url::parse(link)?;

        let segments = url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let query = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        Ok(Self {
            id: id.to_string(),
            segments,
            query,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First value of query parameter `name`
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments_and_query() {
        let params = LinkParams::parse("rssowl://news/42/attachments?index=1&name=a%20b").unwrap();

        assert_eq!(params.id(), "news");
        assert_eq!(params.segments(), ["42", "attachments"]);
        assert_eq!(params.query("index"), Some("1"));
        assert_eq!(params.query("name"), Some("a b"));
        assert_eq!(params.query("missing"), None);
    }

    #[test]
    fn test_parse_bare_id() {
        let params = LinkParams::parse("rssowl://feed").unwrap();
        assert_eq!(params.id(), "feed");
        assert!(params.segments().is_empty());
    }

    #[test]
    fn test_rejects_other_schemes() {
        let result = LinkParams::parse("http://example.com/feed");
        assert!(matches!(result, Err(ParamsError::NotReserved(_))));
    }

    #[test]
    fn test_rejects_malformed_link() {
        let result = LinkParams::parse("rssowl://feed:notaport/1");
        assert!(matches!(result, Err(ParamsError::Malformed(_))));
    }
}
