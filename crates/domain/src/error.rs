//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BistroError`] via `From`.

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum BistroError {
    /// A request parameter could not be interpreted.
    #[error("invalid parameter")]
    InvalidParam(#[from] InvalidParamError),

    /// The requested entity does not exist.
    #[error("entity not found")]
    NotFound(#[from] NotFoundError),

    /// The underlying store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// One or more parameters carried an unusable value.
#[derive(Debug, thiserror::Error)]
#[error("Incorrect value for parameter: {}", .params.join(", "))]
pub struct InvalidParamError {
    pub params: Vec<&'static str>,
}

impl InvalidParamError {
    /// Build the error for a single offending parameter.
    #[must_use]
    pub fn param(name: &'static str) -> Self {
        Self {
            params: vec![name],
        }
    }
}

/// No row of kind `entity` exists with identifier `id`.
#[derive(Debug, thiserror::Error)]
#[error("No '{entity}' found for Id: '{id}'")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
