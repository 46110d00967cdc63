use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    /// A record is missing `root`, `partOfSpeech` or `definition`, has a field
    /// of the wrong shape, or reuses a root already in the index.
    #[error("malformed entry `{key}`: {reason}")]
    MalformedEntry { key: String, reason: String },

    /// The payload is not a JSON object of records.
    #[error("invalid dictionary payload: {0}")]
    Payload(#[from] serde_json::Error),
}
