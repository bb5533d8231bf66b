use crate::codec::{CodecError, Decodable, PduHeader, c_octet_string_len, decode_c_octet_string};
use bytes::{Buf, Bytes};
use std::io::Cursor;

/// Body of submit_sm_resp and deliver_sm_resp.
///
/// deliver_sm_resp carries an unused, empty message_id. Either response may
/// arrive with no body at all when command_status is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    pub message_id: Option<String>,
    pub optional_parameters: Bytes,
}

impl Decodable for MessageResponse {
    fn decode(_header: &PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        if !buf.has_remaining() {
            return Ok(MessageResponse {
                message_id: None,
                optional_parameters: Bytes::new(),
            });
        }

        let message_id = decode_c_octet_string(buf, "message_id")?;
        let optional_parameters = buf.copy_to_bytes(buf.remaining());
        Ok(MessageResponse {
            message_id: Some(message_id),
            optional_parameters,
        })
    }

    fn encoded_len(&self) -> usize {
        self.message_id.as_deref().map_or(0, c_octet_string_len) + self.optional_parameters.len()
    }
}

/// Body of PDUs that consist of the header alone: enquire_link,
/// enquire_link_resp, unbind, unbind_resp and generic_nack.
///
/// Octets after the header are kept rather than rejected, like the
/// optional parameters of other bodies.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EmptyBody {
    pub trailing: Bytes,
}

impl Decodable for EmptyBody {
    fn decode(header: &PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        if buf.has_remaining() {
            tracing::debug!(
                command_id = ?header.command_id,
                trailing = buf.remaining(),
                "header-only PDU carries trailing octets"
            );
        }
        Ok(EmptyBody {
            trailing: buf.copy_to_bytes(buf.remaining()),
        })
    }

    fn encoded_len(&self) -> usize {
        self.trailing.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::CommandId;

    fn header(command_id: CommandId, status: u32) -> PduHeader {
        PduHeader {
            command_length: 0,
            command_id,
            command_status: status,
            sequence_number: 3,
        }
    }

    #[test]
    fn submit_sm_resp_message_id() {
        let data = b"5f3a9c01\0";
        let mut cursor = Cursor::new(&data[..]);
        let resp = MessageResponse::decode(&header(CommandId::SubmitSmResp, 0), &mut cursor).unwrap();
        assert_eq!(resp.message_id.as_deref(), Some("5f3a9c01"));
        assert_eq!(resp.encoded_len(), 9);
    }

    #[test]
    fn deliver_sm_resp_empty_message_id() {
        let data = [0x00];
        let mut cursor = Cursor::new(&data[..]);
        let resp =
            MessageResponse::decode(&header(CommandId::DeliverSmResp, 0), &mut cursor).unwrap();
        assert_eq!(resp.message_id.as_deref(), Some(""));
        assert_eq!(resp.encoded_len(), 1);
    }

    #[test]
    fn error_response_without_body() {
        let empty: [u8; 0] = [];
        let mut cursor = Cursor::new(&empty[..]);
        let resp =
            MessageResponse::decode(&header(CommandId::SubmitSmResp, 0x45), &mut cursor).unwrap();
        assert_eq!(resp.message_id, None);
    }

    #[test]
    fn header_only_keeps_stray_bytes() {
        let data = [0xAA, 0xBB];
        let mut cursor = Cursor::new(&data[..]);
        let body = EmptyBody::decode(&header(CommandId::EnquireLink, 0), &mut cursor).unwrap();
        assert_eq!(body.trailing.as_ref(), &[0xAA, 0xBB]);
        assert_eq!(body.encoded_len(), 2);
        assert!(!cursor.has_remaining());
    }

    #[test]
    fn header_only_without_body() {
        let empty: [u8; 0] = [];
        let mut cursor = Cursor::new(&empty[..]);
        let body = EmptyBody::decode(&header(CommandId::Unbind, 0), &mut cursor).unwrap();
        assert_eq!(body, EmptyBody::default());
        assert_eq!(body.encoded_len(), 0);
    }
}
