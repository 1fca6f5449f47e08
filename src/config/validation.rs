use super::models::Config;
use crate::transform::LinkTransformer;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Link transformer id must not be blank")]
    BlankTransformerId,

    #[error("Link transformer '{id}' has an empty url_template")]
    EmptyTemplate { id: String },

    #[error("Default transformer '{id}' is not configured")]
    UnknownDefaultTransformer { id: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_transformers(config)?;
    validate_reader(config)?;
    Ok(())
}

/// Templates may legitimately lack the placeholder (the transformer then
/// always yields the template), so that case is only reported.
fn validate_transformers(config: &Config) -> Result<(), ValidationError> {
    let transformers: BTreeMap<_, _> = config.transformers.iter().collect();

    for (id, transformer) in transformers {
        if id.trim().is_empty() {
            return Err(ValidationError::BlankTransformerId);
        }

        if transformer.url_template.trim().is_empty() {
            return Err(ValidationError::EmptyTemplate { id: id.clone() });
        }

        match transformer
            .url_template
            .matches(LinkTransformer::PLACEHOLDER)
            .count()
        {
            0 => tracing::warn!(
                id = %id,
                "Link transformer template has no {} placeholder, links pass through unchanged",
                LinkTransformer::PLACEHOLDER
            ),
            1 => {}
            n => tracing::debug!(id = %id, occurrences = n, "Template repeats the placeholder"),
        }
    }

    Ok(())
}

fn validate_reader(config: &Config) -> Result<(), ValidationError> {
    if let Some(ref id) = config.reader.default_transformer {
        if !config.transformers.contains_key(id) {
            return Err(ValidationError::UnknownDefaultTransformer { id: id.clone() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::models::*;
    use super::*;
    use std::collections::HashMap;

    fn create_test_config() -> Config {
        let mut transformers = HashMap::new();
        transformers.insert(
            "reader".to_string(),
            TransformerConfig {
                name: "Reader".to_string(),
                url_template: "https://reader.example/view?url=[L]".to_string(),
            },
        );

        Config {
            transformers,
            reader: ReaderConfig {
                default_transformer: Some("reader".to_string()),
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = create_test_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_template_without_placeholder_is_valid() {
        let mut config = create_test_config();
        config.transformers.get_mut("reader").unwrap().url_template =
            "https://reader.example/".to_string();

        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_template_rejected() {
        let mut config = create_test_config();
        config.transformers.get_mut("reader").unwrap().url_template = "  ".to_string();

        let result = validate(&config);
        assert!(matches!(
            result,
            Err(ValidationError::EmptyTemplate { ref id }) if id == "reader"
        ));
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut config = create_test_config();
        config.reader.default_transformer = None;
        config.transformers.insert(
            " ".to_string(),
            TransformerConfig {
                name: String::new(),
                url_template: "[L]".to_string(),
            },
        );

        assert!(matches!(
            validate(&config),
            Err(ValidationError::BlankTransformerId)
        ));
    }

    #[test]
    fn test_first_invalid_id_is_reported() {
        let mut config = create_test_config();
        for id in ["delta", "alpha", "charlie", "bravo"] {
            config.transformers.insert(
                id.to_string(),
                TransformerConfig {
                    name: String::new(),
                    url_template: String::new(),
                },
            );
        }

        for _ in 0..8 {
            assert!(matches!(
                validate(&config),
                Err(ValidationError::EmptyTemplate { ref id }) if id == "alpha"
            ));
        }
    }

    #[test]
    fn test_unknown_default_rejected() {
        let mut config = create_test_config();
        config.reader.default_transformer = Some("missing".to_string());

        assert!(matches!(
            validate(&config),
            Err(ValidationError::UnknownDefaultTransformer { ref id }) if id == "missing"
        ));
    }
}
