use std::hash::{Hash, Hasher};

use super::encode::url_encode;
use crate::model::NewsItem;

/// Template-based link rewriter
///
/// Identity is the `id` alone: two transformers with the same id compare and
/// hash equal whatever their name or template.
#[derive(Debug, Clone)]
pub struct LinkTransformer {
    id: String,
    name: String,
    url_template: String,
}

impl LinkTransformer {
    /// Token in the template replaced by the encoded link
    pub const PLACEHOLDER: &'static str = "[L]";

    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url_template: url_template.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Whether the template contains the placeholder at all.
    ///
    /// A template without it turns the transformer into a passthrough that
    /// always yields the template itself.
    pub fn has_placeholder(&self) -> bool {
        self.url_template.contains(Self::PLACEHOLDER)
    }

    /// Rewrite `link` through the template.
    ///
    /// An unset or empty link is treated as `""`. Every occurrence of the
    /// placeholder receives the same encoded value.
    pub fn to_transformed_url(&self, link: Option<&str>) -> String {
        let link = link.unwrap_or_default();

        if !self.has_placeholder() {
            return self.url_template.clone();
        }

        self.url_template.replace(Self::PLACEHOLDER, &url_encode(link))
    }

    /// Rewrite the canonical link of `item`
    pub fn transform_item(&self, item: &NewsItem) -> String {
        self.to_transformed_url(item.canonical_link())
    }
}

impl PartialEq for LinkTransformer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LinkTransformer {}

impl Hash for LinkTransformer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
