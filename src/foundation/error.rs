/// Convenience result type used across mirage.
pub type MirageResult<T> = Result<T, MirageError>;

/// Top-level error taxonomy shared by every tool.
#[derive(thiserror::Error, Debug)]
pub enum MirageError {
    /// Input the tools cannot interpret (malformed hex, unknown hash algorithm).
    #[error("unsupported input: {0}")]
    Unsupported(String),

    /// A required environment capability is missing (GPU adapter, clipboard access).
    #[error("capability missing: {0}")]
    Capability(String),

    /// A precondition on the inputs does not hold (mismatched or zero dimensions).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MirageError {
    /// Build a [`MirageError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`MirageError::Capability`] value.
    pub fn capability(msg: impl Into<String>) -> Self {
        Self::Capability(msg.into())
    }

    /// Build a [`MirageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Message suitable for showing inline in place of a result.
    ///
    /// Unlike `Display`, this drops the taxonomy prefix.
    pub fn display_text(&self) -> String {
        match self {
            Self::Unsupported(m) | Self::Capability(m) | Self::Validation(m) => m.clone(),
            Self::Other(e) => format!("{e:#}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
