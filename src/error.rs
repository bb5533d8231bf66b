// ABOUTME: Crate-level error combining PDU structure failures and text decoding failures
// ABOUTME: ErrorKind groups them into framing, structural and coding classes for callers

use crate::codec::CodecError;
use crate::text::TextError;
use thiserror::Error;

/// Broad class of a decoding failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The length prefix disagrees with the buffer
    Framing,
    /// Unknown command, truncated body, missing terminator, bad field
    Structural,
    /// Payload could not be decoded to text
    Coding,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Text(#[from] TextError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Codec(e) => e.kind(),
            Error::Text(_) => ErrorKind::Coding,
        }
    }

    /// Byte offset where decoding failed. Codec offsets are relative to the
    /// PDU, text offsets to the payload.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Codec(e) => e.offset(),
            Error::Text(e) => e.offset(),
        }
    }
}
