// SMPP v3.4 inbound codec
//
// Splits parsing into the fixed 16-byte header and a per-command body decoder
// looked up in a registry, so each body type owns its own field layout
// instead of one monolithic frame parser.

use crate::datatypes::{CommandId, CommandStatus};
use crate::error::ErrorKind;
use crate::pdu::{Body, Pdu};
use bytes::{Buf, Bytes};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum allowed PDU size to prevent memory exhaustion attacks
pub const MAX_PDU_SIZE: u32 = 65536; // 64KB

/// SMPP v3.4 PDU Header (16 bytes, common to all PDUs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PduHeader {
    pub command_length: u32,
    pub command_id: CommandId,
    /// Raw status; vendor codes outside [`CommandStatus`] are legal.
    pub command_status: u32,
    pub sequence_number: u32,
}

impl PduHeader {
    pub const SIZE: usize = 16;

    /// Decode the header fields. The caller has already checked framing.
    pub fn decode(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let command_length = decode_u32(buf, "command_length")?;
        let command_id_raw = decode_u32(buf, "command_id")?;
        let command_id = CommandId::try_from(command_id_raw)
            .map_err(|_| CodecError::UnknownCommand(command_id_raw))?;
        let command_status = decode_u32(buf, "command_status")?;
        let sequence_number = decode_u32(buf, "sequence_number")?;

        Ok(PduHeader {
            command_length,
            command_id,
            command_status,
            sequence_number,
        })
    }

    /// The status as a published SMPP error code, if it is one
    pub fn status(&self) -> Option<CommandStatus> {
        CommandStatus::try_from(self.command_status).ok()
    }

    pub fn is_ok(&self) -> bool {
        self.command_status == CommandStatus::Ok as u32
    }
}

/// Trait for body types that can be decoded after the header
pub trait Decodable: Sized {
    /// Decode this body from the buffer positioned just after the header
    fn decode(header: &PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError>;

    /// Number of body octets this value occupies on the wire
    fn encoded_len(&self) -> usize;
}

/// Codec errors with the byte offset where decoding stopped
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("command_length {declared} does not match buffer length {actual}")]
    LengthMismatch { declared: u32, actual: usize },

    #[error("Invalid PDU length: {length}, must be {min}-{max}")]
    InvalidPduLength { length: u32, min: u32, max: u32 },

    #[error("Unknown command_id: {0:#010x}")]
    UnknownCommand(u32),

    #[error("Truncated body: field '{field}' at offset {offset} needs {needed} bytes, {remaining} remain")]
    TruncatedBody {
        field: &'static str,
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Malformed string: field '{field}' starting at offset {offset} has no NUL terminator")]
    MalformedString { field: &'static str, offset: usize },

    #[error("Field '{field}' validation failed at offset {offset}: {reason}")]
    FieldValidation {
        field: &'static str,
        offset: usize,
        reason: String,
    },
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::LengthMismatch { .. } | CodecError::InvalidPduLength { .. } => {
                ErrorKind::Framing
            }
            _ => ErrorKind::Structural,
        }
    }

    /// Byte offset in the PDU where decoding failed, when known
    pub fn offset(&self) -> Option<usize> {
        match self {
            CodecError::LengthMismatch { .. } | CodecError::InvalidPduLength { .. } => Some(0),
            CodecError::UnknownCommand(_) => Some(4),
            CodecError::TruncatedBody { offset, .. }
            | CodecError::MalformedString { offset, .. }
            | CodecError::FieldValidation { offset, .. } => Some(*offset),
        }
    }

    /// The command_status a peer should see in the generic_nack for this failure
    pub fn to_command_status(&self) -> CommandStatus {
        match self {
            CodecError::LengthMismatch { .. } | CodecError::InvalidPduLength { .. } => {
                CommandStatus::InvalidCommandLength
            }
            CodecError::UnknownCommand(_) => CommandStatus::InvalidCommandId,
            CodecError::TruncatedBody { field, .. } | CodecError::MalformedString { field, .. } => {
                match *field {
                    "short_message" => CommandStatus::InvalidMsgLength,
                    "source_addr" => CommandStatus::InvalidSourceAddress,
                    "destination_addr" => CommandStatus::InvalidDestinationAddress,
                    "service_type" => CommandStatus::InvalidServiceType,
                    "tlv" => CommandStatus::InvalidParameterLength,
                    _ => CommandStatus::InvalidCommandLength,
                }
            }
            CodecError::FieldValidation { .. } => CommandStatus::SystemError,
        }
    }
}

fn ensure_remaining(
    buf: &Cursor<&[u8]>,
    needed: usize,
    field: &'static str,
) -> Result<(), CodecError> {
    if buf.remaining() < needed {
        return Err(CodecError::TruncatedBody {
            field,
            offset: buf.position() as usize,
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

/// Decode a single byte
pub fn decode_u8(buf: &mut Cursor<&[u8]>, field: &'static str) -> Result<u8, CodecError> {
    ensure_remaining(buf, 1, field)?;
    Ok(buf.get_u8())
}

/// Decode a 16-bit big-endian integer
pub fn decode_u16(buf: &mut Cursor<&[u8]>, field: &'static str) -> Result<u16, CodecError> {
    ensure_remaining(buf, 2, field)?;
    Ok(buf.get_u16())
}

/// Decode a 32-bit big-endian integer
pub fn decode_u32(buf: &mut Cursor<&[u8]>, field: &'static str) -> Result<u32, CodecError> {
    ensure_remaining(buf, 4, field)?;
    Ok(buf.get_u32())
}

/// Copy exactly `len` bytes out of the buffer
pub fn decode_bytes(
    buf: &mut Cursor<&[u8]>,
    len: usize,
    field: &'static str,
) -> Result<Bytes, CodecError> {
    ensure_remaining(buf, len, field)?;
    Ok(buf.copy_to_bytes(len))
}

/// Decode a C-Octet String: bytes up to and including a NUL, which is not
/// part of the value.
///
/// Octets are taken as Latin-1, so ASCII content reads unchanged and no
/// byte value can fail the parse.
pub fn decode_c_octet_string(
    buf: &mut Cursor<&[u8]>,
    field: &'static str,
) -> Result<String, CodecError> {
    let start = buf.position() as usize;
    let chunk = buf.chunk();
    let end = chunk
        .iter()
        .position(|&b| b == 0)
        .ok_or(CodecError::MalformedString {
            field,
            offset: start,
        })?;

    let value = chunk[..end].iter().map(|&b| b as char).collect();
    buf.advance(end + 1);
    Ok(value)
}

/// Like [`decode_c_octet_string`] but maps the empty string to `None`
pub fn decode_optional_c_octet_string(
    buf: &mut Cursor<&[u8]>,
    field: &'static str,
) -> Result<Option<String>, CodecError> {
    let value = decode_c_octet_string(buf, field)?;
    Ok((!value.is_empty()).then_some(value))
}

/// Wire size of a C-Octet String value including its NUL
pub fn c_octet_string_len(value: &str) -> usize {
    value.chars().count() + 1
}

/// Check the length prefix against the buffer before anything else is read
fn check_framing(buf: &[u8]) -> Result<u32, CodecError> {
    if buf.len() < 4 {
        return Err(CodecError::InvalidPduLength {
            length: buf.len() as u32,
            min: PduHeader::SIZE as u32,
            max: MAX_PDU_SIZE,
        });
    }

    let declared = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);
    if declared as usize != buf.len() {
        return Err(CodecError::LengthMismatch {
            declared,
            actual: buf.len(),
        });
    }

    if declared < PduHeader::SIZE as u32 || declared > MAX_PDU_SIZE {
        return Err(CodecError::InvalidPduLength {
            length: declared,
            min: PduHeader::SIZE as u32,
            max: MAX_PDU_SIZE,
        });
    }

    Ok(declared)
}

/// Registry of body decoders for extensible parsing
type DecoderFn = Box<dyn Fn(&PduHeader, &mut Cursor<&[u8]>) -> Result<Body, CodecError> + Send + Sync>;

pub struct PduRegistry {
    decoders: HashMap<CommandId, DecoderFn>,
}

static DEFAULT_REGISTRY: LazyLock<PduRegistry> = LazyLock::new(PduRegistry::new);

impl PduRegistry {
    /// Create a new registry with the standard SMPP v3.4 bodies registered
    pub fn new() -> Self {
        use crate::datatypes::{BindRequest, BindResponse, EmptyBody, MessageBody, MessageResponse};

        let mut registry = Self {
            decoders: HashMap::new(),
        };

        // Header-only PDUs
        for command_id in [
            CommandId::EnquireLink,
            CommandId::EnquireLinkResp,
            CommandId::Unbind,
            CommandId::UnbindResp,
            CommandId::GenericNack,
        ] {
            registry.register::<EmptyBody, _>(command_id, Body::Empty);
        }

        // Bind PDUs
        for command_id in [
            CommandId::BindTransmitter,
            CommandId::BindReceiver,
            CommandId::BindTransceiver,
        ] {
            registry.register::<BindRequest, _>(command_id, Body::Bind);
        }
        for command_id in [
            CommandId::BindTransmitterResp,
            CommandId::BindReceiverResp,
            CommandId::BindTransceiverResp,
        ] {
            registry.register::<BindResponse, _>(command_id, Body::BindResp);
        }

        // Message PDUs (boxed for large structs)
        registry.register::<MessageBody, _>(CommandId::SubmitSm, |body| {
            Body::SubmitSm(Box::new(body))
        });
        registry.register::<MessageBody, _>(CommandId::DeliverSm, |body| {
            Body::DeliverSm(Box::new(body))
        });
        registry.register::<MessageResponse, _>(CommandId::SubmitSmResp, Body::SubmitSmResp);
        registry.register::<MessageResponse, _>(CommandId::DeliverSmResp, Body::DeliverSmResp);

        registry
    }

    /// Register a body type for a command_id, replacing any previous decoder
    pub fn register<T, F>(&mut self, command_id: CommandId, body_constructor: F)
    where
        T: Decodable + 'static,
        F: Fn(T) -> Body + Send + Sync + 'static,
    {
        let decoder = Box::new(move |header: &PduHeader, buf: &mut Cursor<&[u8]>| {
            let body = T::decode(header, buf)?;
            Ok(body_constructor(body))
        });
        self.decoders.insert(command_id, decoder);
    }

    /// Decode a body given its header
    pub fn decode_body(
        &self,
        header: &PduHeader,
        buf: &mut Cursor<&[u8]>,
    ) -> Result<Body, CodecError> {
        match self.decoders.get(&header.command_id) {
            Some(decoder) => decoder(header, buf),
            None => {
                // Recognized command without a body decoder: keep it opaque
                let body = buf.copy_to_bytes(buf.remaining());
                tracing::warn!(
                    "No body decoder for {:?} ({:#x}), carrying {} bytes as opaque data",
                    header.command_id,
                    header.command_id.as_u32(),
                    body.len()
                );
                Ok(Body::Opaque(body))
            }
        }
    }

    /// Parse one complete PDU
    pub fn parse(&self, buf: &[u8]) -> Result<Pdu, CodecError> {
        check_framing(buf)?;

        let mut cursor = Cursor::new(buf);
        let header = PduHeader::decode(&mut cursor)?;
        let body = self.decode_body(&header, &mut cursor)?;

        tracing::debug!(
            command_id = ?header.command_id,
            sequence_number = header.sequence_number,
            command_length = header.command_length,
            "parsed PDU"
        );

        Ok(Pdu { header, body })
    }

    /// Check if a command_id is registered
    pub fn is_registered(&self, command_id: CommandId) -> bool {
        self.decoders.contains_key(&command_id)
    }

    /// Get all registered command_ids
    pub fn registered_commands(&self) -> Vec<CommandId> {
        self.decoders.keys().copied().collect()
    }
}

impl std::fmt::Debug for PduRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PduRegistry")
            .field("commands", &self.registered_commands().len())
            .finish()
    }
}

impl Default for PduRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one complete PDU with the standard registry.
///
/// The buffer must hold exactly one PDU: its `command_length` prefix is
/// compared with `buf.len()` before any other field is read.
pub fn parse(buf: &[u8]) -> Result<Pdu, CodecError> {
    DEFAULT_REGISTRY.parse(buf)
}
