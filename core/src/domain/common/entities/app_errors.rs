use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("failed to generate recipe: {0}")]
    Generation(#[source] Box<CoreError>),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Wraps a failure raised while generating, keeping the cause as source.
    pub fn generation(source: CoreError) -> Self {
        CoreError::Generation(Box::new(source))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_keeps_cause() {
        let err = CoreError::generation(CoreError::ExternalServiceError(
            "LLM API returned error: 503".to_string(),
        ));

        assert_eq!(
            err.to_string(),
            "failed to generate recipe: LLM API returned error: 503"
        );
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("LLM API returned error: 503"));
    }
}
