/// Result alias used across the crate.
pub type TracemapResult<T> = Result<T, TracemapError>;

/// Error type for decoding, validation, rendering and export.
#[derive(thiserror::Error, Debug)]
pub enum TracemapError {
    /// Malformed encoded path. `offset` is the byte position where decoding stopped.
    #[error("format error at byte {offset}: {msg}")]
    Format {
        /// Byte offset into the encoded string.
        offset: usize,
        /// Human-readable description.
        msg: String,
    },

    /// Invalid canvas, style or point values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster surface failure.
    #[error("render error: {0}")]
    Render(String),

    /// PNG encoding or file output failure.
    #[error("export error: {0}")]
    Export(String),

    /// Scene or style JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TracemapError {
    /// Build a [`TracemapError::Format`].
    pub fn format(offset: usize, msg: impl Into<String>) -> Self {
        Self::Format {
            offset,
            msg: msg.into(),
        }
    }

    /// Build a [`TracemapError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TracemapError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TracemapError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`TracemapError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
