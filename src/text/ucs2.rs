use super::TextError;

/// Decode big-endian 16-bit code units. Surrogate pairs are combined into a
/// single code point.
pub fn decode(input: &[u8]) -> Result<String, TextError> {
    if input.len() % 2 != 0 {
        return Err(TextError::OddLengthUcs2 { len: input.len() });
    }

    let units = input
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));

    let mut text = String::with_capacity(input.len());
    let mut index = 0;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(ch) => {
                index += ch.len_utf16();
                text.push(ch);
            }
            Err(err) => {
                return Err(TextError::UnpairedSurrogate {
                    offset: index * 2,
                    unit: err.unpaired_surrogate(),
                });
            }
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_extended() {
        let input = [
            0x00, 0xDB, 0x00, 0xF1, 0x00, 0xEF, 0x00, 0xE7, 0x00, 0xF8, 0x00, 0x64, 0x01, 0x13,
        ];
        assert_eq!(decode(&input).unwrap(), "Ûñïçødē");
    }

    #[test]
    fn odd_length() {
        assert_eq!(
            decode(&[0x00, 0x41, 0x00]),
            Err(TextError::OddLengthUcs2 { len: 3 })
        );
    }

    #[test]
    fn surrogate_pair() {
        // U+1F600
        assert_eq!(decode(&[0xD8, 0x3D, 0xDE, 0x00]).unwrap(), "\u{1F600}");
    }

    #[test]
    fn lone_surrogate() {
        let err = decode(&[0x00, 0x41, 0xD8, 0x3D, 0x00, 0x42]).unwrap_err();
        assert_eq!(
            err,
            TextError::UnpairedSurrogate {
                offset: 2,
                unit: 0xD83D
            }
        );
    }
}
