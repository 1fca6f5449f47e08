use std::collections::BTreeMap;
use thiserror::Error;

use super::transformer::LinkTransformer;
use crate::config::Config;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("link transformer not found: {0}")]
    NotFound(String),

    #[error("no default link transformer configured")]
    NoDefault,
}

/// Immutable lookup of link transformers by id
///
/// Built once at startup and handed to whoever needs it; there is no
/// process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct TransformerRegistry {
    transformers: BTreeMap<String, LinkTransformer>,
    default_id: Option<String>,
}

/// Collects contributions before freezing them into a [`TransformerRegistry`]
#[derive(Debug, Default)]
pub struct TransformerRegistryBuilder {
    transformers: BTreeMap<String, LinkTransformer>,
    default_id: Option<String>,
}

impl TransformerRegistryBuilder {
    /// Add a transformer; a later contribution with the same id replaces
    /// the earlier one.
    pub fn contribute(mut self, transformer: LinkTransformer) -> Self {
        let id = transformer.id().to_string();
        if let Some(previous) = self.transformers.insert(id, transformer) {
            tracing::debug!(id = %previous.id(), "Link transformer replaced");
        }
        self
    }

    pub fn default_transformer(mut self, id: impl Into<String>) -> Self {
        self.default_id = Some(id.into());
        self
    }

    pub fn build(self) -> TransformerRegistry {
        TransformerRegistry {
            transformers: self.transformers,
            default_id: self.default_id,
        }
    }
}

impl TransformerRegistry {
    pub fn builder() -> TransformerRegistryBuilder {
        TransformerRegistryBuilder::default()
    }

    /// Build the registry from the `[transformers.*]` configuration tables
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::builder();

        for (id, transformer) in &config.transformers {
            builder = builder.contribute(LinkTransformer::new(
                id.clone(),
                transformer.name.clone(),
                transformer.url_template.clone(),
            ));
        }

        if let Some(ref id) = config.reader.default_transformer {
            builder = builder.default_transformer(id.clone());
        }

        let registry = builder.build();
        tracing::debug!(count = registry.len(), "Link transformers registered");
        registry
    }

    pub fn get(&self, id: &str) -> Result<&LinkTransformer, RegistryError> {
        self.transformers
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Transformer selected by `reader.default_transformer`
    pub fn default_transformer(&self) -> Result<&LinkTransformer, RegistryError> {
        let id = self.default_id.as_deref().ok_or(RegistryError::NoDefault)?;
        self.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.transformers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Transformers ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &LinkTransformer> {
        self.transformers.values()
    }
}
