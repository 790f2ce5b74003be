/// Convenience result type used across procgen.
pub type ProcgenResult<T> = Result<T, ProcgenError>;

/// Top-level error taxonomy used by procgen APIs.
#[derive(thiserror::Error, Debug)]
pub enum ProcgenError {
    /// Invalid user-provided or configuration data (degenerate ranges, bad ids, bad sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// A preset id that is not part of the active catalog.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    /// A parameter name that is not part of the schema.
    #[error("unknown parameter '{0}'")]
    UnknownParam(String),

    /// Errors while setting up or running the raster executor.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProcgenError {
    /// Build a [`ProcgenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProcgenError::UnknownPreset`] value.
    pub fn unknown_preset(id: impl Into<String>) -> Self {
        Self::UnknownPreset(id.into())
    }

    /// Build a [`ProcgenError::UnknownParam`] value.
    pub fn unknown_param(name: impl Into<String>) -> Self {
        Self::UnknownParam(name.into())
    }

    /// Build a [`ProcgenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ProcgenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ProcgenError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
