use crate::codec::{CodecError, c_octet_string_len, decode_c_octet_string, decode_u8};
use crate::datatypes::{NumericPlanIndicator, TypeOfNumber};
use std::io::Cursor;

/// An SME address as it appears in message bodies: TON, NPI, then a
/// C-Octet String.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    pub ton: TypeOfNumber,
    pub npi: NumericPlanIndicator,
    pub addr: String,
}

impl Address {
    pub fn new(ton: TypeOfNumber, npi: NumericPlanIndicator, addr: impl Into<String>) -> Self {
        Self {
            ton,
            npi,
            addr: addr.into(),
        }
    }

    /// Decode `<prefix>_addr_ton`, `<prefix>_addr_npi` and `<prefix>_addr`.
    pub(crate) fn decode(
        buf: &mut Cursor<&[u8]>,
        addr_field: &'static str,
    ) -> Result<Self, CodecError> {
        let ton = TypeOfNumber::from(decode_u8(buf, "addr_ton")?);
        let npi = NumericPlanIndicator::from(decode_u8(buf, "addr_npi")?);
        let addr = decode_c_octet_string(buf, addr_field)?;
        Ok(Self { ton, npi, addr })
    }

    pub(crate) fn encoded_len(&self) -> usize {
        2 + c_octet_string_len(&self.addr)
    }

    pub fn is_empty(&self) -> bool {
        self.addr.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_address() {
        let data = [0x01, 0x01, b'4', b'4', b'7', b'7', 0x00, 0xFF];
        let mut cursor = Cursor::new(&data[..]);
        let address = Address::decode(&mut cursor, "source_addr").unwrap();

        assert_eq!(address.ton, TypeOfNumber::International);
        assert_eq!(address.npi, NumericPlanIndicator::Isdn);
        assert_eq!(address.addr, "4477");
        assert_eq!(address.encoded_len(), 7);
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn unterminated_address_names_field() {
        let data = [0x05, 0x00, b'A', b'C', b'M', b'E'];
        let mut cursor = Cursor::new(&data[..]);
        let err = Address::decode(&mut cursor, "destination_addr").unwrap_err();
        assert_eq!(
            err,
            CodecError::MalformedString {
                field: "destination_addr",
                offset: 2
            }
        );
    }
}
