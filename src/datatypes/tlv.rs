// ABOUTME: Lazy reader over the optional parameter (TLV) block that trails a PDU body
// ABOUTME: Bodies keep the block as raw bytes; this iterator walks it only when asked

use crate::codec::CodecError;
use bytes::Bytes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tlv {
    /// The Tag field is used to uniquely identify the particular optional parameter in question.
    pub tag: u16,

    /// The Value field contains the actual data for the optional parameter in question.
    /// Its length is the Length field of the wire form.
    pub value: Bytes,
}

impl Tlv {
    /// Value read as a C-Octet String, dropping the terminator when present
    pub fn value_as_str(&self) -> String {
        let raw = self.value.as_ref();
        let raw = raw.strip_suffix(&[0]).unwrap_or(raw);
        raw.iter().map(|&b| b as char).collect()
    }

    pub fn value_as_u8(&self) -> Option<u8> {
        match self.value.as_ref() {
            [value] => Some(*value),
            _ => None,
        }
    }
}

/// Well-known optional parameter tags (Section 5.3.2)
pub mod tags {
    pub const DEST_ADDR_SUBUNIT: u16 = 0x0005;
    pub const SOURCE_PORT: u16 = 0x020A;
    pub const DESTINATION_PORT: u16 = 0x020B;
    pub const SAR_MSG_REF_NUM: u16 = 0x020C;
    pub const SAR_TOTAL_SEGMENTS: u16 = 0x020E;
    pub const SAR_SEGMENT_SEQNUM: u16 = 0x020F;
    pub const SC_INTERFACE_VERSION: u16 = 0x0210;
    pub const RECEIPTED_MESSAGE_ID: u16 = 0x001E;
    pub const NETWORK_ERROR_CODE: u16 = 0x0423;
    pub const MESSAGE_PAYLOAD: u16 = 0x0424;
    pub const MESSAGE_STATE: u16 = 0x0427;
}

/// Iterator over a TLV block. Yields an error once and then stops if a
/// parameter overruns the block.
#[derive(Clone, Debug)]
pub struct TlvIter {
    block: Bytes,
    pos: usize,
    base_offset: usize,
    failed: bool,
}

impl TlvIter {
    /// `base_offset` is where the block starts in the PDU, used in errors.
    pub fn new(block: Bytes, base_offset: usize) -> Self {
        Self {
            block,
            pos: 0,
            base_offset,
            failed: false,
        }
    }

    fn truncated(&mut self, needed: usize) -> Option<Result<Tlv, CodecError>> {
        self.failed = true;
        Some(Err(CodecError::TruncatedBody {
            field: "tlv",
            offset: self.base_offset + self.pos,
            needed,
            remaining: self.block.len() - self.pos,
        }))
    }
}

impl Iterator for TlvIter {
    type Item = Result<Tlv, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.block.len() {
            return None;
        }

        let rest = &self.block[self.pos..];
        if rest.len() < 4 {
            return self.truncated(4);
        }

        let tag = u16::from_be_bytes([rest[0], rest[1]]);
        let length = u16::from_be_bytes([rest[2], rest[3]]) as usize;
        if rest.len() < 4 + length {
            return self.truncated(4 + length);
        }

        let start = self.pos + 4;
        let value = self.block.slice(start..start + length);
        self.pos = start + length;
        Some(Ok(Tlv { tag, value }))
    }
}
