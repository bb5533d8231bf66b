// ABOUTME: Parsed PDU value: the shared 16-byte header plus a flat body variant per command
// ABOUTME: Recomputes command_length from parsed fields and exposes the short message body

use crate::codec::{Decodable, PduHeader};
use crate::datatypes::{
    BindRequest, BindResponse, CommandId, EmptyBody, MessageBody, MessageResponse,
};
use bytes::Bytes;

/// One decoded PDU
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pdu {
    pub header: PduHeader,
    pub body: Body,
}

/// Command-specific body. Which bind or response flavour a value belongs to
/// is carried by `header.command_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Bind(BindRequest),
    BindResp(BindResponse),
    SubmitSm(Box<MessageBody>),
    SubmitSmResp(MessageResponse),
    DeliverSm(Box<MessageBody>),
    DeliverSmResp(MessageResponse),
    /// Header-only PDUs
    Empty(EmptyBody),
    /// Recognized command without a body decoder
    Opaque(Bytes),
}

impl Body {
    pub fn encoded_len(&self) -> usize {
        match self {
            Body::Bind(body) => body.encoded_len(),
            Body::BindResp(body) => body.encoded_len(),
            Body::SubmitSm(body) | Body::DeliverSm(body) => body.encoded_len(),
            Body::SubmitSmResp(body) | Body::DeliverSmResp(body) => body.encoded_len(),
            Body::Empty(body) => body.encoded_len(),
            Body::Opaque(body) => body.len(),
        }
    }
}

impl Pdu {
    pub fn command_id(&self) -> CommandId {
        self.header.command_id
    }

    pub fn sequence_number(&self) -> u32 {
        self.header.sequence_number
    }

    /// The wire length implied by the parsed fields. Equals the declared
    /// `command_length` for every PDU that parsed successfully.
    pub fn command_length(&self) -> u32 {
        (PduHeader::SIZE + self.body.encoded_len()) as u32
    }

    /// The submit_sm / deliver_sm body, if this PDU carries one
    pub fn message_body(&self) -> Option<&MessageBody> {
        match &self.body {
            Body::SubmitSm(body) | Body::DeliverSm(body) => Some(&**body),
            _ => None,
        }
    }
}
