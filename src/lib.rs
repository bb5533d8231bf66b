//! Inbound SMPP v3.4 PDU decoding and short message text normalization.
//!
//! [`codec::parse`] turns one complete PDU into a [`Pdu`]; the short message
//! payload of a submit_sm or deliver_sm is then decoded to a `String` by a
//! [`TextDecoder`] according to its `data_coding`.
//!
//! ```rust
//! use smpp_decode::{TextDecoder, parse};
//!
//! let pdu = parse(&[
//!     0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x15,
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
//! ])?;
//! assert_eq!(pdu.command_length(), 16);
//!
//! if let Some(body) = pdu.message_body() {
//!     println!("{}", body.decode_text(&TextDecoder::default())?);
//! }
//! # Ok::<(), smpp_decode::Error>(())
//! ```

pub mod codec;
pub mod connection;
pub mod datatypes;
pub mod error;
pub mod frame;
pub mod pdu;
pub mod receipt;
pub mod text;


pub use codec::{CodecError, Decodable, PduHeader, PduRegistry, parse};
pub use connection::PduReader;
pub use error::{Error, ErrorKind};
pub use pdu::{Body, Pdu};
pub use receipt::{DeliveryReceipt, MessageState};
pub use text::{Alphabet, DecoderConfig, TextDecoder, TextError, UnknownCodingPolicy};

/// Error returned by the stream reader, which mixes I/O and decode failures.
///
/// For performance reasons, boxing is avoided in the parser itself, which
/// returns [`CodecError`]; it converts into `BoxError` when a reader
/// surfaces it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A specialized `Result` type for stream operations.
pub type Result<T> = std::result::Result<T, BoxError>;
