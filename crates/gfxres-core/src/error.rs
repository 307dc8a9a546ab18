//! Error types for gfxres

use crate::format::Format;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid handle: {0}")]
    InvalidHandle(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown resource kind")]
    UnknownKind,

    #[error("unsupported format: {0:?}")]
    UnsupportedFormat(Format),

    #[error("unknown error: {0}")]
    Unknown(String),

    #[error("out of memory: failed to allocate {size} bytes for {name}")]
    OutOfMemory { name: String, size: u64 },

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("resource is not allocated")]
    NotAllocated,

    #[error("swizzle error: {0}")]
    Swizzle(String),

    #[error("shared memory error: {0}")]
    SharedMemory(String),
}

impl Error {
    /// Numeric status reported in trace records
    pub fn status_code(&self) -> u32 {
        match self {
            Error::InvalidHandle(_) => 2,
            Error::InvalidParameter(_) => 1,
            Error::UnknownKind | Error::Unknown(_) => 3,
            Error::UnsupportedFormat(_) => 5,
            Error::OutOfMemory { .. } => 4,
            Error::InvalidState(_) | Error::NotAllocated => 6,
            Error::Swizzle(_) => 7,
            Error::SharedMemory(_) => 8,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Status code for a result, 0 on success
pub fn status_of<T>(result: &Result<T>) -> u32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.status_code(),
    }
}
