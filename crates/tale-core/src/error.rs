use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating or persisting story state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Reading or writing a save file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A save file exists but does not contain a valid save record.
    #[error("{} is not a valid save file: {source}", path.display())]
    Malformed {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying decoding error.
        source: serde_json::Error,
    },

    /// The story state could not be encoded.
    #[error("could not encode save data: {0}")]
    Encode(#[source] serde_json::Error),

    /// A flag holds a value that cannot be used as a counter.
    #[error("flag \"{key}\" holds {found:?}, not a number")]
    FlagType {
        /// The flag key.
        key: String,
        /// The value found under the key.
        found: crate::flag::FlagValue,
    },
}
