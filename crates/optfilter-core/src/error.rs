use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("select control not found in container: {0}")]
    ControlNotFound(String),
    #[error("invalid joiner glyph: {0:?}")]
    InvalidJoiner(char),
    #[error("invalid prefix token: {0:?}")]
    InvalidPrefixToken(String),
}
