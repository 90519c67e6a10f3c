//! Error types for rs-zsxq-render.
//!
//! Rendering itself never fails: these errors surface only from the
//! fallible building blocks (`percent::try_decode`, `Options::validate`,
//! highlight pattern construction) and are recovered internally by the
//! public render functions.

/// Error type for the fallible building blocks of the renderer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `%` was not followed by two hexadecimal digits.
    #[error("malformed percent escape at byte {position} in {input:?}")]
    MalformedEscape {
        /// The encoded input that failed to decode.
        input: String,
        /// Byte offset of the offending `%`.
        position: usize,
    },

    /// The percent-decoded bytes are not valid UTF-8.
    #[error("percent-decoded bytes are not valid UTF-8: {0:?}")]
    InvalidUtf8(String),

    /// The search highlight pattern could not be compiled.
    #[error("invalid highlight pattern: {0}")]
    InvalidPattern(String),

    /// A configuration value is unusable.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for renderer building blocks.
pub type Result<T> = std::result::Result<T, Error>;
