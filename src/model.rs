//! News domain entities consumed by link transformation

use serde::{Deserialize, Serialize};

use crate::transform::is_set;

/// Item identifier as published by the feed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Guid {
    pub value: String,
    /// Whether `value` is itself a resolvable link
    #[serde(default)]
    pub is_permalink: bool,
}

/// A single news entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub guid: Option<Guid>,
}

impl NewsItem {
    pub fn with_link(link: impl Into<String>) -> Self {
        Self {
            link: Some(link.into()),
            ..Self::default()
        }
    }

    /// Primary link of the item.
    ///
    /// The explicit `link` wins; a permalink guid is used when no link was
    /// published.
    pub fn canonical_link(&self) -> Option<&str> {
        if is_set(self.link.as_deref()) {
            return self.link.as_deref();
        }

        self.guid
            .as_ref()
            .filter(|guid| guid.is_permalink && is_set(Some(&guid.value)))
            .map(|guid| guid.value.as_str())
    }
}
