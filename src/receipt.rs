// ABOUTME: SMSC delivery receipts carried in deliver_sm (SMPP v3.4 Appendix B)
// ABOUTME: Reads the conventional "id:... stat:..." text and the receipt TLVs

use crate::datatypes::MessageBody;
use crate::datatypes::tlv::tags;
use crate::text::{TextDecoder, TextError};
use num_enum::TryFromPrimitive;

/// Final or intermediate state of a message (Section 5.2.28)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageState {
    Enroute = 1,
    Delivered = 2,
    Expired = 3,
    Deleted = 4,
    Undeliverable = 5,
    Accepted = 6,
    Unknown = 7,
    Rejected = 8,
}

impl MessageState {
    /// Parse the `stat:` value of a receipt text
    pub fn from_stat(stat: &str) -> Option<Self> {
        let state = match stat.to_ascii_uppercase().as_str() {
            "ENROUTE" => MessageState::Enroute,
            "DELIVRD" => MessageState::Delivered,
            "EXPIRED" => MessageState::Expired,
            "DELETED" => MessageState::Deleted,
            "UNDELIV" => MessageState::Undeliverable,
            "ACCEPTD" => MessageState::Accepted,
            "UNKNOWN" => MessageState::Unknown,
            "REJECTD" => MessageState::Rejected,
            _ => return None,
        };
        Some(state)
    }

    pub fn as_stat(&self) -> &'static str {
        match self {
            MessageState::Enroute => "ENROUTE",
            MessageState::Delivered => "DELIVRD",
            MessageState::Expired => "EXPIRED",
            MessageState::Deleted => "DELETED",
            MessageState::Undeliverable => "UNDELIV",
            MessageState::Accepted => "ACCEPTD",
            MessageState::Unknown => "UNKNOWN",
            MessageState::Rejected => "REJECTD",
        }
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, MessageState::Enroute | MessageState::Accepted)
    }
}

/// A delivery receipt.
///
/// Fields the SMSC left out are `None`. The format is only a convention, so
/// values are kept as the SMSC wrote them.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DeliveryReceipt {
    pub id: String,
    pub submitted: Option<String>,
    pub delivered: Option<String>,
    pub submit_date: Option<String>,
    pub done_date: Option<String>,
    pub state: Option<MessageState>,
    pub error: Option<String>,
    pub text: Option<String>,
}

const KEYS: [&str; 8] = [
    "id:",
    "sub:",
    "dlvrd:",
    "submit date:",
    "done date:",
    "stat:",
    "err:",
    "text:",
];

/// Find `key` at the start of `lower` or after a space
fn find_key(lower: &str, key: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = lower[from..].find(key) {
        let start = from + found;
        if start == 0 || lower.as_bytes()[start - 1] == b' ' {
            return Some(start + key.len());
        }
        from = start + key.len();
    }
    None
}

impl DeliveryReceipt {
    /// Parse receipt text. Returns `None` unless an `id:` field is present.
    pub fn parse(text: &str) -> Option<Self> {
        let lower = text.to_ascii_lowercase();

        let field = |key: &str| -> Option<String> {
            let start = find_key(&lower, key)?;
            let rest = &text[start..];
            let value = if key == "text:" {
                rest
            } else {
                rest.split(' ').next().unwrap_or_default()
            };
            Some(value.to_string())
        };

        let [id, sub, dlvrd, submit_date, done_date, stat, err, body] = KEYS.map(field);

        Some(DeliveryReceipt {
            id: id?,
            submitted: sub,
            delivered: dlvrd,
            submit_date,
            done_date,
            state: stat.as_deref().and_then(MessageState::from_stat),
            error: err,
            text: body,
        })
    }

    /// Extract a receipt from a deliver_sm body flagged as one.
    ///
    /// The receipted_message_id and message_state parameters, when present,
    /// take precedence over the same values in the text.
    pub fn from_body(
        body: &MessageBody,
        decoder: &TextDecoder,
    ) -> Result<Option<Self>, TextError> {
        if !body.is_delivery_receipt() {
            return Ok(None);
        }

        let text = body.decode_text(decoder)?;
        let mut receipt = DeliveryReceipt::parse(&text);

        let mut receipted_id = None;
        let mut state = None;
        for tlv in body.tlvs().filter_map(Result::ok) {
            match tlv.tag {
                tags::RECEIPTED_MESSAGE_ID => receipted_id = Some(tlv.value_as_str()),
                tags::MESSAGE_STATE => {
                    state = tlv
                        .value_as_u8()
                        .and_then(|raw| MessageState::try_from(raw).ok())
                        .or(state);
                }
                _ => {}
            }
        }

        // TLVs may come in any order; the id decides whether there is a receipt
        if let Some(id) = receipted_id {
            receipt.get_or_insert_with(DeliveryReceipt::default).id = id;
        }
        if let (Some(receipt), Some(state)) = (receipt.as_mut(), state) {
            receipt.state = Some(state);
        }

        if receipt.is_none() {
            tracing::debug!(text = %text, "deliver_sm flagged as receipt but text has no id");
        }
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECEIPT: &str = "id:0123456789 sub:001 dlvrd:001 submit date:2410181200 done date:2410181201 stat:DELIVRD err:000 Text:Hello world";

    #[test]
    fn parse_conventional_receipt() {
        let receipt = DeliveryReceipt::parse(RECEIPT).unwrap();
        assert_eq!(receipt.id, "0123456789");
        assert_eq!(receipt.submitted.as_deref(), Some("001"));
        assert_eq!(receipt.delivered.as_deref(), Some("001"));
        assert_eq!(receipt.submit_date.as_deref(), Some("2410181200"));
        assert_eq!(receipt.done_date.as_deref(), Some("2410181201"));
        assert_eq!(receipt.state, Some(MessageState::Delivered));
        assert_eq!(receipt.error.as_deref(), Some("000"));
        assert_eq!(receipt.text.as_deref(), Some("Hello world"));
    }

    #[test]
    fn partial_receipt() {
        let receipt = DeliveryReceipt::parse("id:abc stat:undeliv").unwrap();
        assert_eq!(receipt.id, "abc");
        assert_eq!(receipt.state, Some(MessageState::Undeliverable));
        assert_eq!(receipt.submit_date, None);
        assert_eq!(receipt.text, None);
    }

    #[test]
    fn text_without_id_is_not_a_receipt() {
        assert_eq!(DeliveryReceipt::parse("hello there"), None);
        // "sid:" must not be mistaken for "id:"
        assert_eq!(DeliveryReceipt::parse("sid:5 stat:DELIVRD"), None);
    }

    #[test]
    fn message_states() {
        for raw in 1u8..=8 {
            let state = MessageState::try_from(raw).unwrap();
            assert_eq!(MessageState::from_stat(state.as_stat()), Some(state));
        }
        assert!(MessageState::try_from(0u8).is_err());
        assert!(MessageState::Delivered.is_final());
        assert!(!MessageState::Enroute.is_final());
        assert_eq!(MessageState::from_stat("BOGUS"), None);
    }
}
