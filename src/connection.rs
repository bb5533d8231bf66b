// ABOUTME: Reads length-prefixed SMPP PDUs from any async byte stream
// ABOUTME: Buffers partial data until a whole PDU is present, then hands it to the parser

use crate::codec::{self, PduRegistry};
use crate::frame;
use crate::pdu::Pdu;
use bytes::{Buf, BytesMut};
use std::io::Cursor;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Inbound half of an SMPP transport.
///
/// Does not track session state; the caller decides what to do with each
/// PDU and with parse failures. A parse failure consumes the offending PDU,
/// so the stream stays aligned and the next call continues after it.
#[derive(Debug)]
pub struct PduReader<R> {
    stream: R,

    // The buffer for reading frames.
    buffer: BytesMut,

    registry: Option<Arc<PduRegistry>>,
}

impl<R: AsyncRead + Unpin> PduReader<R> {
    /// Create a new `PduReader` with a 4KB read buffer
    pub fn new(stream: R) -> Self {
        PduReader {
            stream,
            buffer: BytesMut::with_capacity(4 * 1024),
            registry: None,
        }
    }

    /// Use a custom registry instead of the standard one
    pub fn with_registry(stream: R, registry: Arc<PduRegistry>) -> Self {
        PduReader {
            registry: Some(registry),
            ..Self::new(stream)
        }
    }

    /// Read a single PDU from the underlying stream.
    ///
    /// Returns `None` when the stream closes cleanly between PDUs.
    pub async fn read_pdu(&mut self) -> crate::Result<Option<Pdu>> {
        loop {
            if let Some(pdu) = self.parse_pdu()? {
                return Ok(Some(pdu));
            }

            // `0` indicates "end of stream"
            if 0 == self.stream.read_buf(&mut self.buffer).await? {
                if self.buffer.is_empty() {
                    tracing::debug!("stream closed");
                    return Ok(None);
                }
                tracing::warn!(buffered = self.buffer.len(), "stream closed mid-PDU");
                return Err("connection reset by peer".into());
            }
        }
    }

    fn parse_pdu(&mut self) -> crate::Result<Option<Pdu>> {
        let mut buf = Cursor::new(&self.buffer[..]);

        match frame::check(&mut buf) {
            Ok(len) => {
                let result = match &self.registry {
                    Some(registry) => registry.parse(&self.buffer[..len]),
                    None => codec::parse(&self.buffer[..len]),
                };

                // Discard the PDU whether or not it parsed
                self.buffer.advance(len);

                match result {
                    Ok(pdu) => Ok(Some(pdu)),
                    Err(e) => {
                        tracing::warn!(error = %e, "discarding malformed PDU");
                        Err(e.into())
                    }
                }
            }
            Err(frame::Error::Incomplete) => Ok(None),
            // A bad length prefix leaves no way to find the next PDU
            Err(frame::Error::Other(e)) => Err(e.into()),
        }
    }

    /// Bytes received but not yet consumed
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn into_inner(self) -> R {
        self.stream
    }
}
