//! HP Roman-8, the 8-bit table SMSCs apply to 8-bit data codings.

/// 0xA0-0xFF. 0x00-0x9F map to the same code point.
#[rustfmt::skip]
const UPPER_HALF: [char; 96] = [
    // 0xA0
    '\u{00A0}', 'À', 'Â', 'È', 'Ê', 'Ë', 'Î', 'Ï',
    '\u{00B4}', '\u{02CB}', '\u{02C6}', '\u{00A8}', '\u{02DC}', 'Ù', 'Û', '\u{20A4}',
    // 0xB0
    '\u{00AF}', 'Ý', 'ý', '°', 'Ç', 'ç', 'Ñ', 'ñ',
    '¡', '¿', '¤', '£', '¥', '§', 'ƒ', '¢',
    // 0xC0
    'â', 'ê', 'ô', 'û', 'á', 'é', 'ó', 'ú',
    'à', 'è', 'ò', 'ù', 'ä', 'ë', 'ö', 'ü',
    // 0xD0
    'Å', 'î', 'Ø', 'Æ', 'å', 'í', 'ø', 'æ',
    'Ä', 'ì', 'Ö', 'Ü', 'É', 'ï', 'ß', 'Ô',
    // 0xE0
    'Á', 'Ã', 'ã', 'Ð', 'ð', 'Í', 'Ì', 'Ó',
    'Ò', 'Õ', 'õ', 'Š', 'š', 'Ú', 'Ÿ', 'ÿ',
    // 0xF0, 0xFF is unassigned
    'Þ', 'þ', '·', 'µ', '¶', '¾', '\u{2014}', '¼',
    '½', 'ª', 'º', '«', '\u{25A0}', '»', '±', '\u{FFFD}',
];

const fn build_table() -> [char; 256] {
    let mut table = ['\u{FFFD}'; 256];
    let mut i = 0;
    while i < 0xA0 {
        table[i] = i as u8 as char;
        i += 1;
    }
    let mut j = 0;
    while j < UPPER_HALF.len() {
        table[0xA0 + j] = UPPER_HALF[j];
        j += 1;
    }
    table
}

static TABLE: [char; 256] = build_table();

pub fn decode(input: &[u8]) -> String {
    input.iter().map(|&b| TABLE[b as usize]).collect()
}
