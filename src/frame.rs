//! Stream framing for SMPP v3.4
//!
//! A transport reading from a socket calls [`check`] on its buffer to learn
//! whether a whole PDU has arrived before handing the bytes to
//! [`crate::codec::parse`].

use crate::codec::{CodecError, MAX_PDU_SIZE, PduHeader};
use bytes::Buf;
use std::io::Cursor;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Not enough data is available to parse a message
    #[error("Incomplete frame")]
    Incomplete,
    /// The length prefix can never describe a valid PDU
    #[error("Frame error: {0}")]
    Other(#[from] CodecError),
}

/// Check whether `buf` starts with a complete PDU and return its length.
///
/// Only the length prefix is inspected; the cursor is left after the PDU on
/// success and untouched otherwise.
pub fn check(buf: &mut Cursor<&[u8]>) -> Result<usize, Error> {
    if buf.remaining() < 4 {
        return Err(Error::Incomplete);
    }

    let start = buf.position();
    let command_length = buf.get_u32();
    buf.set_position(start);

    if command_length < PduHeader::SIZE as u32 || command_length > MAX_PDU_SIZE {
        return Err(CodecError::InvalidPduLength {
            length: command_length,
            min: PduHeader::SIZE as u32,
            max: MAX_PDU_SIZE,
        }
        .into());
    }

    let len = command_length as usize;
    if buf.remaining() < len {
        return Err(Error::Incomplete);
    }

    buf.advance(len);
    Ok(len)
}
