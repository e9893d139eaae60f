//! Error type for generator operations.

/// Errors raised while sampling attributes or generating entity batches.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Bounds, choice set, weights or probability are unusable
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// A dependent entity was requested without the records it references
    #[error("Missing dependency: {0}")]
    MissingDependency(String),
}
