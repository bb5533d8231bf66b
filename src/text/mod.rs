//! Short message text decoding.
//!
//! The `data_coding` of a message selects one of four alphabets:
//!
//! - GSM 03.38 default alphabet, unpacked, with the 0x1B escape extension
//! - HP Roman-8 for 8-bit data codings
//! - UCS-2 (big-endian UTF-16)
//! - pass-through, where every octet is the code point of the same value
//!   (ASCII and Latin-1)
//!
//! Every branch produces an owned `String`.

mod gsm7;
mod roman8;
mod ucs2;

use crate::datatypes::DataCoding;
use thiserror::Error;

/// Source alphabet of a payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alphabet {
    Gsm7,
    Roman8,
    Ucs2,
    PassThrough,
}

impl Alphabet {
    fn decode(self, payload: &[u8]) -> Result<String, TextError> {
        match self {
            Alphabet::Gsm7 => gsm7::decode(payload),
            Alphabet::Roman8 => Ok(roman8::decode(payload)),
            Alphabet::Ucs2 => ucs2::decode(payload),
            Alphabet::PassThrough => Ok(payload.iter().map(|&b| b as char).collect()),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("UCS-2 payload has odd length {len}")]
    OddLengthUcs2 { len: usize },

    #[error("Unsupported data_coding {0:#04x}")]
    UnsupportedCoding(u8),

    #[error("Octet {value:#04x} at offset {offset} is not a GSM 7-bit septet")]
    InvalidSeptet { offset: usize, value: u8 },

    #[error("Unpaired UTF-16 surrogate {unit:#06x} at offset {offset}")]
    UnpairedSurrogate { offset: usize, unit: u16 },
}

impl TextError {
    /// Payload offset of the failure, when it points at a specific octet
    pub fn offset(&self) -> Option<usize> {
        match self {
            TextError::InvalidSeptet { offset, .. } | TextError::UnpairedSurrogate { offset, .. } => {
                Some(*offset)
            }
            TextError::OddLengthUcs2 { len } => Some(len.saturating_sub(1)),
            TextError::UnsupportedCoding(_) => None,
        }
    }
}

/// What to do with a data_coding that has no known alphabet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnknownCodingPolicy {
    /// Fail with [`TextError::UnsupportedCoding`]
    #[default]
    Reject,
    /// Decode octet for octet as Latin-1
    PassThrough,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    pub unknown_coding: UnknownCodingPolicy,
}

/// Decodes payloads to text according to a [`DecoderConfig`]
#[derive(Clone, Debug, Default)]
pub struct TextDecoder {
    config: DecoderConfig,
}

impl TextDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> TextDecoderBuilder {
        TextDecoderBuilder::default()
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Resolve the alphabet for a data_coding under this decoder's policy
    pub fn alphabet_for(&self, data_coding: DataCoding) -> Result<Alphabet, TextError> {
        match (data_coding.alphabet(), self.config.unknown_coding) {
            (Some(alphabet), _) => Ok(alphabet),
            (None, UnknownCodingPolicy::PassThrough) => {
                tracing::debug!(
                    data_coding = data_coding.to_byte(),
                    "no alphabet for data_coding, passing octets through"
                );
                Ok(Alphabet::PassThrough)
            }
            (None, UnknownCodingPolicy::Reject) => {
                Err(TextError::UnsupportedCoding(data_coding.to_byte()))
            }
        }
    }

    /// Decode a payload written in the alphabet `data_coding` selects
    pub fn decode(&self, payload: &[u8], data_coding: DataCoding) -> Result<String, TextError> {
        self.alphabet_for(data_coding)?.decode(payload)
    }
}

/// Builder for [`TextDecoder`]
#[derive(Clone, Debug, Default)]
pub struct TextDecoderBuilder {
    config: DecoderConfig,
}

impl TextDecoderBuilder {
    pub fn unknown_coding(mut self, policy: UnknownCodingPolicy) -> Self {
        self.config.unknown_coding = policy;
        self
    }

    pub fn build(self) -> TextDecoder {
        TextDecoder::new(self.config)
    }
}

/// Decode a payload with the default policy, which rejects unknown codings
pub fn decode(payload: &[u8], data_coding: u8) -> Result<String, TextError> {
    TextDecoder::default().decode(payload, DataCoding::from(data_coding))
}

/// Decode a payload in a known alphabet, bypassing data_coding resolution
pub fn decode_as(payload: &[u8], alphabet: Alphabet) -> Result<String, TextError> {
    alphabet.decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_on_data_coding() {
        assert_eq!(decode(b"Hi", 0x00).unwrap(), "Hi");
        assert_eq!(decode(&[0x00, 0x48, 0x00, 0x69], 0x08).unwrap(), "Hi");
        assert_eq!(decode(&[0xBB], 0x04).unwrap(), "£");
        assert_eq!(decode(&[0xBB], 0x02).unwrap(), "£");
        assert_eq!(decode(&[0xE9], 0x03).unwrap(), "é");
        assert_eq!(decode(&[0x1B, 0x65], 0xF1).unwrap(), "€");
    }

    #[test]
    fn odd_ucs2_produces_no_text() {
        let result = decode(&[0x00, 0x48, 0x00], 0x08);
        assert_eq!(result, Err(TextError::OddLengthUcs2 { len: 3 }));
    }

    #[test]
    fn unknown_coding_is_rejected_by_default() {
        assert_eq!(
            decode(b"abc", 0x06),
            Err(TextError::UnsupportedCoding(0x06))
        );
        assert_eq!(
            decode(b"abc", 0x0B),
            Err(TextError::UnsupportedCoding(0x0B))
        );
    }

    #[test]
    fn unknown_coding_pass_through_policy() {
        let decoder = TextDecoder::builder()
            .unknown_coding(UnknownCodingPolicy::PassThrough)
            .build();

        assert_eq!(decoder.config().unknown_coding, UnknownCodingPolicy::PassThrough);
        assert_eq!(
            decoder.decode(&[0x61, 0xE9], DataCoding::Custom(0x0B)).unwrap(),
            "aé"
        );
        // Known codings are unaffected by the policy
        assert_eq!(decoder.decode(&[0x00], DataCoding::SmscDefault).unwrap(), "@");
    }

    #[test]
    fn decode_as_skips_resolution() {
        assert_eq!(decode_as(&[0xBB], Alphabet::Roman8).unwrap(), "£");
        assert_eq!(decode_as(&[0xBB], Alphabet::PassThrough).unwrap(), "»");
    }

    #[test]
    fn error_offsets() {
        assert_eq!(TextError::OddLengthUcs2 { len: 5 }.offset(), Some(4));
        assert_eq!(TextError::UnsupportedCoding(0x0B).offset(), None);
    }
}
