use crate::foundation::core::ApproachId;

/// Convenience result type used across Storeshot.
pub type StoreshotResult<T> = Result<T, StoreshotError>;

/// Top-level error taxonomy used by runner APIs.
#[derive(thiserror::Error, Debug)]
pub enum StoreshotError {
    /// No approach in the catalog carries the requested id.
    #[error("unknown approach {0}")]
    NotFound(ApproachId),

    /// A generator could not be started (missing script, missing interpreter,
    /// spawn failure).
    #[error("launch error: {0}")]
    Launch(String),

    /// A generator started but exited with a non-zero status.
    #[error("execution error: {0}")]
    Execution(String),

    /// Invalid user-provided configuration or project state.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreshotError {
    /// Build a [`StoreshotError::Launch`] value.
    pub fn launch(msg: impl Into<String>) -> Self {
        Self::Launch(msg.into())
    }

    /// Build a [`StoreshotError::Execution`] value.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Build a [`StoreshotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
