//! Literal Data packet construction
//!
//! Produces a single packet of the form:
//! - tag: 1 byte (0xCB, Literal Data)
//! - length: 1, 2 or 5 bytes describing the body length
//! - body: format(1) + filename length(1) + filename + timestamp(4, big-endian) + data

use crate::error::{ErrorCategory, ErrorKind, InjectError, Result};

/// Packet tag byte for Literal Data (tag 11).
pub const LITERAL_DATA_TAG: u8 = 0xCB;

/// Literal data format byte for UTF-8 text (`'u'`).
pub const LITERAL_MODE_UTF8: u8 = 0x75;

/// Largest body length representable in a one-byte length field.
pub const ONE_OCTET_MAX: usize = 191;

/// Largest body length representable in a two-byte length field.
pub const TWO_OCTET_MAX: usize = 8383;

/// First byte of a five-byte length field.
pub const FIVE_OCTET_MARKER: u8 = 0xFF;

/// Offset subtracted from two-byte lengths before encoding.
const TWO_OCTET_BIAS: usize = 192;

/// Length of the fixed portion of the body (format, filename length, timestamp).
const BODY_PREFIX_LEN: usize = 1 + 1 + 4;

/// Encode a body length using the 1/2/5-byte scheme.
///
/// Fails only when `len` does not fit into the 4-byte form.
pub fn encode_length(len: usize) -> Result<Vec<u8>> {
    if len <= ONE_OCTET_MAX {
        return Ok(vec![len as u8]);
    }
    if len <= TWO_OCTET_MAX {
        let biased = len - TWO_OCTET_BIAS;
        return Ok(vec![((biased >> 8) + TWO_OCTET_BIAS) as u8, (biased & 0xFF) as u8]);
    }
    let len = u32::try_from(len).map_err(|e| {
        InjectError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::PacketTooLarge,
            format!("packet body of {} bytes exceeds the 4-byte length field", len),
            e,
        )
    })?;
    let mut out = Vec::with_capacity(5);
    out.push(FIVE_OCTET_MARKER);
    out.extend_from_slice(&len.to_be_bytes());
    Ok(out)
}

/// A Literal Data packet prior to serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralPacket<'a> {
    pub format: u8,
    pub filename: &'a [u8],
    pub timestamp: u32,
    pub data: &'a [u8],
}

impl<'a> LiteralPacket<'a> {
    /// Text packet with no filename and a zero timestamp.
    pub fn text(data: &'a [u8]) -> Self {
        Self {
            format: LITERAL_MODE_UTF8,
            filename: &[],
            timestamp: 0,
            data,
        }
    }

    fn body_len(&self) -> usize {
        BODY_PREFIX_LEN + self.filename.len() + self.data.len()
    }

    /// Serialize to header + body.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let filename_len = u8::try_from(self.filename.len()).map_err(|e| {
            InjectError::with_kind_and_source(
                ErrorCategory::User,
                ErrorKind::PacketTooLarge,
                format!(
                    "literal filename of {} bytes exceeds 255 bytes",
                    self.filename.len()
                ),
                e,
            )
        })?;

        let body_len = self.body_len();
        let length = encode_length(body_len)?;

        let mut out = Vec::with_capacity(1 + length.len() + body_len);
        out.push(LITERAL_DATA_TAG);
        out.extend_from_slice(&length);
        out.push(self.format);
        out.push(filename_len);
        out.extend_from_slice(self.filename);
        out.extend_from_slice(&self.timestamp.to_be_bytes());
        out.extend_from_slice(self.data);

        Ok(out)
    }
}

/// Wrap `payload` in a text Literal Data packet.
pub fn build_literal_packet(payload: &[u8]) -> Result<Vec<u8>> {
    LiteralPacket::text(payload).to_bytes()
}
