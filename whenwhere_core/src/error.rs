use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Base time out of range: {0} ms")]
    BaseTimeOutOfRange(i64),

    #[error("Invalid extraction result JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
