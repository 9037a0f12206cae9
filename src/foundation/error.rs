/// Convenience result type used across item-thumb.
pub type ThumbResult<T> = Result<T, ThumbError>;

/// Top-level error taxonomy used by the pipeline and its codecs.
///
/// Every variant is fatal for the invocation that produced it: nothing in the
/// crate retries or recovers partially.
#[derive(thiserror::Error, Debug)]
pub enum ThumbError {
    /// Unreadable, unsupported, or corrupt encoded image data.
    #[error("decode error: {0}")]
    Decode(String),

    /// Image or raw buffer with unusable bounds.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Failure while producing encoded output.
    #[error("encode error: {0}")]
    Encode(String),

    /// File open/create/flush failures at the IO boundary.
    #[error("io error: {context}: {source}")]
    Io {
        /// What was being attempted, including the path involved.
        context: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl ThumbError {
    /// Build a [`ThumbError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ThumbError::InvalidImage`] value.
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    /// Build a [`ThumbError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ThumbError::Io`] value.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
