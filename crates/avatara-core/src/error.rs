//! Core error types for the Avatara engine.

/// A specialized Result type for Avatara operations.
pub type AvataraResult<T> = Result<T, AvataraError>;

/// Top-level error type encompassing all Avatara subsystems.
///
/// A lowering pass aborts on the first error; nothing is retried
/// internally, and a failed pass publishes no layers.
#[derive(Debug, thiserror::Error)]
pub enum AvataraError {
    /// The IR document is structurally invalid. Raised before lowering starts.
    #[error("declaration error: {0}")]
    Declaration(String),

    /// A parameter was referenced with an unknown name or a mismatched type.
    #[error("internal consistency error: {0}")]
    InternalConsistency(String),

    /// An external asset key was not found in any container.
    #[error("asset resolution error: {0}")]
    AssetResolution(String),

    /// A scene-relative path did not resolve to the required node kind.
    #[error("scene resolution error: {0}")]
    SceneResolution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AvataraError {
    /// Create a declaration error.
    pub fn declaration(message: impl Into<String>) -> Self {
        AvataraError::Declaration(message.into())
    }

    /// Create an internal-consistency error for a bad parameter reference.
    pub fn parameter_not_found(name: &str, expected: &str) -> Self {
        AvataraError::InternalConsistency(format!("parameter '{name}' ({expected}) not found"))
    }

    /// Create an asset-resolution error.
    pub fn asset_not_found(class: &str, key: &str) -> Self {
        AvataraError::AssetResolution(format!("{class} '{key}' not defined"))
    }

    /// Create a scene-resolution error.
    pub fn node_not_found(kind: &str, path: &str) -> Self {
        AvataraError::SceneResolution(format!("{kind} '{path}' not found"))
    }
}
