use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed row: {0}")]
    MalformedRow(String),
    #[error("the first partition must have an explicit offset")]
    MissingFirstOffset,
    #[error("offset mismatch for partition '{name}': expected 0x{expected:X}, got 0x{actual:X}")]
    OffsetMismatch {
        name: String,
        expected: u64,
        actual: u64,
    },
    #[error("invalid size literal '{0}'")]
    InvalidSizeLiteral(String),
    #[error("invalid offset literal '{0}'")]
    InvalidOffsetLiteral(String),
    #[error("offset overflow after partition '{0}'")]
    OffsetOverflow(String),
    #[error("partition '{0}' not found")]
    PartitionNotFound(String),
}
