use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredoError {
    #[error("unknown practice '{requested}': supported practices are {supported}")]
    UnknownPractice { requested: String, supported: String },

    #[error("begin marker has no matching end marker before end of file")]
    MissingEndMarker,

    #[error("multiple begin markers found: document carries a corrupted prior installation")]
    MultipleBlocks,

    #[error("malformed begin marker line: {0}")]
    InvalidMarker(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CredoError>;
