// ABOUTME: Strongly-typed SMPP data_coding scheme covering the SMPP table and GSM coding groups
// ABOUTME: Resolves each scheme to the text alphabet used to decode the short_message payload

use crate::text::Alphabet;
use std::fmt;

/// Data coding scheme of a short message (Section 5.2.19).
///
/// Values 0x00-0x0E follow the SMPP v3.4 table. The 0xC0-0xFF range follows
/// the GSM 03.38 coding groups that SMSCs forward unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataCoding {
    /// SMSC Default Alphabet (GSM 03.38 default alphabet)
    #[default]
    SmscDefault,
    /// IA5 (CCITT T.50)/ASCII
    Ascii,
    /// 0x02: octet unspecified (8-bit binary)
    Binary,
    /// Latin-1 (ISO-8859-1)
    Latin1,
    /// 0x04: octet unspecified (8-bit binary), second code point
    OctetUnspecified,
    /// JIS (X 0208-1990)
    Jis,
    /// Cyrillic (ISO-8859-5)
    Cyrillic,
    /// Latin/Hebrew (ISO-8859-8)
    LatinHebrew,
    /// UCS-2 (ISO/IEC-10646)
    Ucs2,
    Pictogram,
    /// Music codes (ISO-2022-JP)
    MusicCodes,
    /// Extended Kanji JIS (X 0212-1990)
    ExtendedKanji,
    /// KS C 5601
    Ksc5601,
    /// Message waiting indication groups 0xC0-0xEF
    MessageWaiting(u8),
    /// GSM default alphabet with message class (0xF0-0xF3)
    Gsm7BitWithClass(MessageClass),
    /// 8-bit data with message class (0xF4-0xF7)
    EightBitWithClass(MessageClass),
    /// Reserved or vendor value
    Custom(u8),
}

impl DataCoding {
    pub fn from_byte(value: u8) -> Self {
        match value {
            0x00 => DataCoding::SmscDefault,
            0x01 => DataCoding::Ascii,
            0x02 => DataCoding::Binary,
            0x03 => DataCoding::Latin1,
            0x04 => DataCoding::OctetUnspecified,
            0x05 => DataCoding::Jis,
            0x06 => DataCoding::Cyrillic,
            0x07 => DataCoding::LatinHebrew,
            0x08 => DataCoding::Ucs2,
            0x09 => DataCoding::Pictogram,
            0x0A => DataCoding::MusicCodes,
            0x0D => DataCoding::ExtendedKanji,
            0x0E => DataCoding::Ksc5601,
            0xC0..=0xEF => DataCoding::MessageWaiting(value),
            0xF0..=0xF3 => DataCoding::Gsm7BitWithClass(MessageClass::from_bits(value)),
            0xF4..=0xF7 => DataCoding::EightBitWithClass(MessageClass::from_bits(value)),
            _ => DataCoding::Custom(value),
        }
    }

    /// Returns the raw u8 value for wire protocol
    pub fn to_byte(&self) -> u8 {
        match self {
            DataCoding::SmscDefault => 0x00,
            DataCoding::Ascii => 0x01,
            DataCoding::Binary => 0x02,
            DataCoding::Latin1 => 0x03,
            DataCoding::OctetUnspecified => 0x04,
            DataCoding::Jis => 0x05,
            DataCoding::Cyrillic => 0x06,
            DataCoding::LatinHebrew => 0x07,
            DataCoding::Ucs2 => 0x08,
            DataCoding::Pictogram => 0x09,
            DataCoding::MusicCodes => 0x0A,
            DataCoding::ExtendedKanji => 0x0D,
            DataCoding::Ksc5601 => 0x0E,
            DataCoding::MessageWaiting(raw) => *raw,
            DataCoding::Gsm7BitWithClass(class) => 0xF0 | *class as u8,
            DataCoding::EightBitWithClass(class) => 0xF4 | *class as u8,
            DataCoding::Custom(raw) => *raw,
        }
    }

    /// The alphabet the short_message payload is written in, or `None` when
    /// no decoder exists for this scheme.
    pub fn alphabet(&self) -> Option<Alphabet> {
        match self {
            DataCoding::SmscDefault | DataCoding::Gsm7BitWithClass(_) => Some(Alphabet::Gsm7),
            DataCoding::Ucs2 => Some(Alphabet::Ucs2),
            DataCoding::Binary
            | DataCoding::OctetUnspecified
            | DataCoding::EightBitWithClass(_) => Some(Alphabet::Roman8),
            DataCoding::Ascii | DataCoding::Latin1 => Some(Alphabet::PassThrough),
            // 0xC0-0xDF carry the default alphabet, 0xE0-0xEF carry UCS-2
            DataCoding::MessageWaiting(raw) if *raw < 0xE0 => Some(Alphabet::Gsm7),
            DataCoding::MessageWaiting(_) => Some(Alphabet::Ucs2),
            _ => None,
        }
    }

    /// Returns the message class if this coding scheme includes one
    pub fn message_class(&self) -> Option<MessageClass> {
        match self {
            DataCoding::Gsm7BitWithClass(class) | DataCoding::EightBitWithClass(class) => {
                Some(*class)
            }
            _ => None,
        }
    }

    /// Returns the character set name for this encoding
    pub fn charset_name(&self) -> &'static str {
        match self {
            DataCoding::SmscDefault | DataCoding::Gsm7BitWithClass(_) => "GSM 7-bit Default",
            DataCoding::Ascii => "ASCII/IA5",
            DataCoding::Binary | DataCoding::OctetUnspecified => "Binary",
            DataCoding::EightBitWithClass(_) => "8-bit Data",
            DataCoding::Latin1 => "ISO-8859-1",
            DataCoding::Jis => "JIS X 0208-1990",
            DataCoding::Cyrillic => "ISO-8859-5",
            DataCoding::LatinHebrew => "ISO-8859-8",
            DataCoding::Ucs2 => "UCS-2",
            DataCoding::Pictogram => "Pictogram",
            DataCoding::MusicCodes => "ISO-2022-JP",
            DataCoding::ExtendedKanji => "JIS X 0212-1990",
            DataCoding::Ksc5601 => "KS C 5601",
            DataCoding::MessageWaiting(_) => "Message Waiting Indication",
            DataCoding::Custom(_) => "Custom/Reserved",
        }
    }
}

/// Message class for SMS delivery (bits 1-0 of the 0xF0 coding group)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum MessageClass {
    /// Class 0: flash SMS (displayed immediately, not stored)
    Flash = 0,
    /// Class 1: Mobile Equipment specific
    MobileEquipment = 1,
    /// Class 2: SIM specific
    SimSpecific = 2,
    /// Class 3: Terminal Equipment specific
    TerminalEquipment = 3,
}

impl MessageClass {
    fn from_bits(value: u8) -> Self {
        match value & 0x03 {
            0 => MessageClass::Flash,
            1 => MessageClass::MobileEquipment,
            2 => MessageClass::SimSpecific,
            _ => MessageClass::TerminalEquipment,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MessageClass::Flash => "Flash SMS (immediate display)",
            MessageClass::MobileEquipment => "Mobile Equipment specific",
            MessageClass::SimSpecific => "SIM card storage",
            MessageClass::TerminalEquipment => "Terminal Equipment specific",
        }
    }
}

impl fmt::Display for DataCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.charset_name())?;
        if let Some(class) = self.message_class() {
            write!(f, " ({})", class.description())?;
        }
        Ok(())
    }
}

impl fmt::Debug for DataCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataCoding({}, 0x{:02X})", self.charset_name(), self.to_byte())
    }
}

impl From<u8> for DataCoding {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<DataCoding> for u8 {
    fn from(data_coding: DataCoding) -> Self {
        data_coding.to_byte()
    }
}
