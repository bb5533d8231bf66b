// ABOUTME: GSM 03.38 default alphabet decoder for unpacked septets, one septet per octet
// ABOUTME: Handles the 0x1B escape into the extension table with a single lookahead

use super::TextError;

pub(crate) const ESCAPE: u8 = 0x1B;

/// Base table indexed by septet value
#[rustfmt::skip]
static BASE_TABLE: [char; 128] = [
    // 0x00
    '@', '\u{00A3}', '$', '\u{00A5}', 'è', 'é', 'ù', 'ì',
    'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å',
    // 0x10, 0x1B is shown as a space when it does not start a known escape
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ',
    'Σ', 'Θ', 'Ξ', ' ', 'Æ', 'æ', 'ß', 'É',
    // 0x20
    ' ', '!', '"', '#', '¤', '%', '&', '\'',
    '(', ')', '*', '+', ',', '-', '.', '/',
    // 0x30
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', ':', ';', '<', '=', '>', '?',
    // 0x40
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G',
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    // 0x50
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§',
    // 0x60
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    // 0x70
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
    'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à',
];

/// Extension table: septet following 0x1B. Sorted by septet.
///
/// Besides the GSM 03.38 positions, SMSCs in the field send the ASCII code
/// of the wanted character after the escape, so those are accepted too.
/// 0x2F yields '[' as those SMSCs emit it.
static ESCAPE_TABLE: [(u8, char); 15] = [
    (0x0A, '\u{000C}'),
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '['),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x5B, '['),
    (0x5C, '\\'),
    (0x5D, ']'),
    (0x65, '\u{20AC}'),
    (0x7C, '|'),
    (0x7E, '~'),
];

fn lookup_escape(septet: u8) -> Option<char> {
    ESCAPE_TABLE
        .binary_search_by_key(&septet, |&(key, _)| key)
        .ok()
        .map(|index| ESCAPE_TABLE[index].1)
}

/// Decode unpacked GSM 7-bit septets.
///
/// Every octet must be a septet; the first one with the high bit set is
/// reported before any escape handling. An escape followed by a septet
/// outside the extension table consumes both octets and yields their base
/// table characters. An escape as the last octet is a single base lookup.
pub fn decode(input: &[u8]) -> Result<String, TextError> {
    if let Some(offset) = input.iter().position(|&b| b >= 0x80) {
        return Err(TextError::InvalidSeptet {
            offset,
            value: input[offset],
        });
    }

    let mut text = String::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let septet = input[i];

        if septet == ESCAPE {
            if let Some(&next) = input.get(i + 1) {
                match lookup_escape(next) {
                    Some(ch) => text.push(ch),
                    None => {
                        tracing::trace!(offset = i, septet = next, "unknown GSM escape, decoding both octets from base table");
                        text.push(BASE_TABLE[ESCAPE as usize]);
                        text.push(BASE_TABLE[next as usize]);
                    }
                }
                i += 2;
                continue;
            }
        }

        text.push(BASE_TABLE[septet as usize]);
        i += 1;
    }

    Ok(text)
}
