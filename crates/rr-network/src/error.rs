use rr_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network parse error: {0}")]
    Parse(String),

    #[error("segment references unknown station {0:?}")]
    UnknownStation(String),

    #[error("duplicate station {0}")]
    DuplicateStation(String),

    #[error("segment table is full: no id left for segment #{0}")]
    TableFull(usize),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
