use crate::codec::{
    CodecError, Decodable, PduHeader, c_octet_string_len, decode_c_octet_string, decode_u8,
};
use crate::datatypes::{NumericPlanIndicator, TypeOfNumber};
use bytes::{Buf, Bytes};
use std::io::Cursor;

/// Body shared by bind_transmitter, bind_receiver and bind_transceiver
/// (Section 4.1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindRequest {
    pub system_id: String,
    pub password: String,
    pub system_type: String,
    pub interface_version: u8,
    pub addr_ton: TypeOfNumber,
    pub addr_npi: NumericPlanIndicator,
    pub address_range: String,
}

impl Decodable for BindRequest {
    fn decode(_header: &PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        Ok(BindRequest {
            system_id: decode_c_octet_string(buf, "system_id")?,
            password: decode_c_octet_string(buf, "password")?,
            system_type: decode_c_octet_string(buf, "system_type")?,
            interface_version: decode_u8(buf, "interface_version")?,
            addr_ton: TypeOfNumber::from(decode_u8(buf, "addr_ton")?),
            addr_npi: NumericPlanIndicator::from(decode_u8(buf, "addr_npi")?),
            address_range: decode_c_octet_string(buf, "address_range")?,
        })
    }

    fn encoded_len(&self) -> usize {
        c_octet_string_len(&self.system_id)
            + c_octet_string_len(&self.password)
            + c_octet_string_len(&self.system_type)
            + 3
            + c_octet_string_len(&self.address_range)
    }
}

/// Body shared by the three bind responses. An SMSC rejecting a bind may
/// send the header alone, in which case `system_id` is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindResponse {
    pub system_id: Option<String>,
    /// Optional parameters such as sc_interface_version, undecoded
    pub optional_parameters: Bytes,
}

impl Decodable for BindResponse {
    fn decode(_header: &PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        if !buf.has_remaining() {
            return Ok(BindResponse {
                system_id: None,
                optional_parameters: Bytes::new(),
            });
        }

        let system_id = decode_c_octet_string(buf, "system_id")?;
        let optional_parameters = buf.copy_to_bytes(buf.remaining());
        Ok(BindResponse {
            system_id: Some(system_id),
            optional_parameters,
        })
    }

    fn encoded_len(&self) -> usize {
        self.system_id.as_deref().map_or(0, c_octet_string_len) + self.optional_parameters.len()
    }
}
