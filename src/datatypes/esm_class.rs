// ABOUTME: SMPP esm_class bitfield (messaging mode, message type, GSM network features)
// ABOUTME: Keeps the raw octet and exposes typed views so parsing never rejects the field

use std::fmt;

/// The `esm_class` octet (Section 5.2.12).
///
/// ```text
///  7 6 | 5 4 3 2 | 1 0
///  GSM |  type   | mode
/// ```
///
/// The raw octet is kept as received. The accessors decode the three
/// sub-fields according to the deliver_sm / submit_sm tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EsmClass(u8);

impl EsmClass {
    const MODE_MASK: u8 = 0b0000_0011;
    const TYPE_MASK: u8 = 0b0011_1100;
    const UDHI: u8 = 0b0100_0000;
    const REPLY_PATH: u8 = 0b1000_0000;

    pub fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Converts to the raw u8 value for wire protocol
    pub fn to_byte(&self) -> u8 {
        self.0
    }

    /// Bits 1-0
    pub fn message_mode(&self) -> MessageMode {
        match self.0 & Self::MODE_MASK {
            0b00 => MessageMode::Default,
            0b01 => MessageMode::Datagram,
            0b10 => MessageMode::Forward,
            _ => MessageMode::StoreAndForward,
        }
    }

    /// Bits 5-2
    pub fn message_type(&self) -> MessageType {
        match (self.0 & Self::TYPE_MASK) >> 2 {
            0b0000 => MessageType::Default,
            0b0001 => MessageType::SmscDeliveryReceipt,
            0b0010 => MessageType::EsmeDeliveryAcknowledgement,
            0b0100 => MessageType::UserAcknowledgement,
            0b0110 => MessageType::ConversationAbort,
            0b1000 => MessageType::IntermediateDeliveryNotification,
            other => MessageType::Reserved(other),
        }
    }

    /// User Data Header Indicator: the short_message starts with a UDH.
    pub fn has_udhi(&self) -> bool {
        self.0 & Self::UDHI != 0
    }

    pub fn has_reply_path(&self) -> bool {
        self.0 & Self::REPLY_PATH != 0
    }

    /// True when a deliver_sm carries an SMSC delivery receipt rather than
    /// a mobile originated message.
    pub fn is_delivery_receipt(&self) -> bool {
        matches!(
            self.message_type(),
            MessageType::SmscDeliveryReceipt | MessageType::IntermediateDeliveryNotification
        )
    }
}

/// Messaging modes (submit_sm only; deliver_sm leaves these bits clear)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MessageMode {
    /// Default SMSC mode (e.g. store and forward)
    Default,
    Datagram,
    /// Forward (transaction) mode
    Forward,
    /// Store and forward mode (explicit)
    StoreAndForward,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MessageType {
    Default,
    SmscDeliveryReceipt,
    EsmeDeliveryAcknowledgement,
    UserAcknowledgement,
    ConversationAbort,
    IntermediateDeliveryNotification,
    Reserved(u8),
}

impl From<u8> for EsmClass {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<EsmClass> for u8 {
    fn from(esm_class: EsmClass) -> Self {
        esm_class.0
    }
}

impl fmt::Debug for EsmClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EsmClass")
            .field("raw", &format_args!("0x{:02X}", self.0))
            .field("mode", &self.message_mode())
            .field("type", &self.message_type())
            .field("udhi", &self.has_udhi())
            .field("reply_path", &self.has_reply_path())
            .finish()
    }
}
