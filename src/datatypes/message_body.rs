// ABOUTME: Shared body layout of submit_sm and deliver_sm (Sections 4.4.1 and 4.6.1)
// ABOUTME: Keeps the raw short_message plus its position so text decoding happens on demand

use crate::codec::{
    CodecError, Decodable, PduHeader, c_octet_string_len, decode_bytes, decode_c_octet_string,
    decode_optional_c_octet_string, decode_u8,
};
use crate::datatypes::tlv::{TlvIter, tags};
use crate::datatypes::{Address, DataCoding, EsmClass, PriorityFlag};
use crate::text::{TextDecoder, TextError};
use bytes::{Buf, Bytes};
use std::io::Cursor;
use std::ops::Range;

/// Mandatory fields of a short message PDU, in wire order, followed by the
/// undecoded optional parameter block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBody {
    pub service_type: String,
    pub source: Address,
    pub destination: Address,
    pub esm_class: EsmClass,
    pub protocol_id: u8,
    pub priority_flag: PriorityFlag,
    pub schedule_delivery_time: Option<String>,
    pub validity_period: Option<String>,
    pub registered_delivery: u8,
    pub replace_if_present_flag: u8,
    pub data_coding: DataCoding,
    pub sm_default_msg_id: u8,
    /// Exactly sm_length raw octets
    pub short_message: Bytes,
    /// Offset of short_message within the PDU
    pub sm_offset: usize,
    pub optional_parameters: Bytes,
    tlv_offset: usize,
}

impl MessageBody {
    pub fn sm_length(&self) -> usize {
        self.short_message.len()
    }

    /// Position of the raw short_message octets in the original PDU buffer
    pub fn payload_span(&self) -> Range<usize> {
        self.sm_offset..self.sm_offset + self.short_message.len()
    }

    pub fn tlvs(&self) -> TlvIter {
        TlvIter::new(self.optional_parameters.clone(), self.tlv_offset)
    }

    /// The message_payload parameter, used instead of short_message for
    /// long content.
    pub fn message_payload(&self) -> Option<Bytes> {
        self.tlvs()
            .filter_map(Result::ok)
            .find(|tlv| tlv.tag == tags::MESSAGE_PAYLOAD)
            .map(|tlv| tlv.value)
    }

    /// The octets that carry the message text: short_message, or the
    /// message_payload parameter when short_message is empty.
    pub fn text_payload(&self) -> Bytes {
        if self.short_message.is_empty() {
            if let Some(payload) = self.message_payload() {
                return payload;
            }
        }
        self.short_message.clone()
    }

    /// Decode the message text according to data_coding
    pub fn decode_text(&self, decoder: &TextDecoder) -> Result<String, TextError> {
        decoder.decode(&self.text_payload(), self.data_coding)
    }

    pub fn is_delivery_receipt(&self) -> bool {
        self.esm_class.is_delivery_receipt()
    }
}

impl Decodable for MessageBody {
    fn decode(_header: &PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let service_type = decode_c_octet_string(buf, "service_type")?;
        let source = Address::decode(buf, "source_addr")?;
        let destination = Address::decode(buf, "destination_addr")?;
        let esm_class = EsmClass::new(decode_u8(buf, "esm_class")?);
        let protocol_id = decode_u8(buf, "protocol_id")?;
        let priority_flag = PriorityFlag::from(decode_u8(buf, "priority_flag")?);
        let schedule_delivery_time = decode_optional_c_octet_string(buf, "schedule_delivery_time")?;
        let validity_period = decode_optional_c_octet_string(buf, "validity_period")?;
        let registered_delivery = decode_u8(buf, "registered_delivery")?;
        let replace_if_present_flag = decode_u8(buf, "replace_if_present_flag")?;
        let data_coding = DataCoding::from(decode_u8(buf, "data_coding")?);
        let sm_default_msg_id = decode_u8(buf, "sm_default_msg_id")?;
        let sm_length = decode_u8(buf, "sm_length")? as usize;

        let sm_offset = buf.position() as usize;
        let short_message = decode_bytes(buf, sm_length, "short_message")?;

        // Trailing TLVs are kept raw
        let tlv_offset = buf.position() as usize;
        let optional_parameters = buf.copy_to_bytes(buf.remaining());

        Ok(MessageBody {
            service_type,
            source,
            destination,
            esm_class,
            protocol_id,
            priority_flag,
            schedule_delivery_time,
            validity_period,
            registered_delivery,
            replace_if_present_flag,
            data_coding,
            sm_default_msg_id,
            short_message,
            sm_offset,
            optional_parameters,
            tlv_offset,
        })
    }

    fn encoded_len(&self) -> usize {
        let optional_len = |value: &Option<String>| value.as_deref().map_or(1, c_octet_string_len);

        c_octet_string_len(&self.service_type)
            + self.source.encoded_len()
            + self.destination.encoded_len()
            + 3 // esm_class, protocol_id, priority_flag
            + optional_len(&self.schedule_delivery_time)
            + optional_len(&self.validity_period)
            + 5 // registered_delivery .. sm_length
            + self.short_message.len()
            + self.optional_parameters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{CommandId, MessageType, NumericPlanIndicator, TypeOfNumber};

    fn header() -> PduHeader {
        PduHeader {
            command_length: 0,
            command_id: CommandId::DeliverSm,
            command_status: 0,
            sequence_number: 1,
        }
    }

    fn body_bytes(short_message: &[u8], tlvs: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"CMT\0");
        data.extend_from_slice(&[0x01, 0x01]);
        data.extend_from_slice(b"447700900123\0");
        data.extend_from_slice(&[0x05, 0x00]);
        data.extend_from_slice(b"BANK\0");
        data.extend_from_slice(&[0x00, 0x00, 0x01]); // esm_class, protocol_id, priority
        data.push(0x00); // schedule_delivery_time
        data.extend_from_slice(b"000001000000000R\0");
        data.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
        data.push(short_message.len() as u8);
        data.extend_from_slice(short_message);
        data.extend_from_slice(tlvs);
        data
    }

    #[test]
    fn decodes_fields_in_order() {
        let data = body_bytes(b"hi there", &[]);
        let mut cursor = Cursor::new(data.as_slice());
        let body = MessageBody::decode(&header(), &mut cursor).unwrap();

        assert_eq!(body.service_type, "CMT");
        assert_eq!(
            body.source,
            Address::new(TypeOfNumber::International, NumericPlanIndicator::Isdn, "447700900123")
        );
        assert_eq!(body.destination.ton, TypeOfNumber::Alphanumeric);
        assert_eq!(body.destination.addr, "BANK");
        assert_eq!(body.esm_class.message_type(), MessageType::Default);
        assert_eq!(body.priority_flag, PriorityFlag::Level1);
        assert_eq!(body.schedule_delivery_time, None);
        assert_eq!(body.validity_period.as_deref(), Some("000001000000000R"));
        assert_eq!(body.registered_delivery, 1);
        assert_eq!(body.data_coding, DataCoding::SmscDefault);
        assert_eq!(body.short_message.as_ref(), b"hi there");
        assert_eq!(&data[body.payload_span()], b"hi there");
        assert!(body.optional_parameters.is_empty());
        assert_eq!(body.encoded_len(), data.len());
    }

    #[test]
    fn short_message_overrun_is_truncation() {
        let mut data = body_bytes(b"abc", &[]);
        let len_index = data.len() - 4;
        data[len_index] = 10;
        let mut cursor = Cursor::new(data.as_slice());

        let err = MessageBody::decode(&header(), &mut cursor).unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedBody {
                field: "short_message",
                offset: len_index + 1,
                needed: 10,
                remaining: 3
            }
        );
    }

    #[test]
    fn missing_terminator_is_malformed() {
        let data = b"CMT";
        let mut cursor = Cursor::new(&data[..]);
        let err = MessageBody::decode(&header(), &mut cursor).unwrap_err();
        assert!(matches!(
            err,
            CodecError::MalformedString {
                field: "service_type",
                offset: 0
            }
        ));
    }

    #[test]
    fn trailing_tlvs_are_kept() {
        let tlvs = [0x04, 0x24, 0x00, 0x05, b'h', b'e', b'l', b'l', b'o'];
        let data = body_bytes(b"", &tlvs);
        let mut cursor = Cursor::new(data.as_slice());
        let body = MessageBody::decode(&header(), &mut cursor).unwrap();

        assert_eq!(body.sm_length(), 0);
        assert_eq!(body.optional_parameters.as_ref(), &tlvs);
        assert_eq!(body.message_payload().as_deref(), Some(&b"hello"[..]));
        assert_eq!(body.text_payload().as_ref(), b"hello");
        assert_eq!(body.decode_text(&TextDecoder::default()).unwrap(), "hello");
        assert_eq!(body.encoded_len(), data.len());
    }
}
