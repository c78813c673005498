use std::{error, fmt};

use serde::Serialize;

use crate::error::{Error, Result};

/// One decoded log line. Field declaration order is the serialization order.
///
/// `timestamp` is kept as opaque text: the grammar only delimits it, a higher
/// layer decides what to make of it. `message` is the raw remainder of the
/// line, preserved verbatim.
#[derive(Debug, PartialEq, Serialize)]
pub struct Record {
    pub priority: u32,
    pub version: u32,
    pub timestamp: String,
    pub host: String,
    pub app: String,
    pub pid: u16,
    pub message_id: String,
    pub message: String,
}

/// Why a line was rejected. Decoding is all-or-nothing: any of these means
/// no record was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    HeaderMalformed,
    VersionMissing,
    FieldMissing,
    InvalidPid,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            DecodeError::HeaderMalformed => "malformed <priority> header",
            DecodeError::VersionMissing => "no version digit after the priority header",
            DecodeError::FieldMissing => "line ended before all header fields were present",
            DecodeError::InvalidPid => "pid is neither an integer in [0, 65535] nor \"-\"",
        };
        write!(f, "{}", message)
    }
}

impl error::Error for DecodeError {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::new(&err.to_string())
    }
}

pub trait Decoder {
    fn decode(&self, buf: &[u8]) -> Result<Record>;
}
