//! Literal packet injection into armored blocks
//!
//! The injected packet goes in front of the original bytes so that parsers
//! reading packets left to right see it first. The original bytes are never
//! inspected.

use crate::armor;
use crate::error::Result;
use crate::packet;
use crate::payload::PayloadProvider;
use tracing::debug;

/// Prepend a literal packet carrying `payload` to the data in `original_armor`
/// and re-armor the result.
pub fn inject(original_armor: &str, payload: &[u8]) -> Result<String> {
    let original =
        armor::decode_armor(original_armor).map_err(|e| e.with_context("failed to unarmor input"))?;
    Ok(armor::encode_armor(&combine(&original, payload)?))
}

/// Same as [`inject`], with the payload produced by `provider`.
pub fn inject_with(
    original_armor: &str,
    caption: &str,
    provider: &dyn PayloadProvider,
) -> Result<String> {
    let payload = provider
        .payload(caption)
        .map_err(|e| e.with_context("payload provider failed"))?;
    inject(original_armor, &payload)
}

/// Packet for `payload` followed by `original`.
pub(crate) fn combine(original: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    let packet = packet::build_literal_packet(payload)?;
    debug!(
        payload_len = payload.len(),
        packet_len = packet.len(),
        original_len = original.len(),
        "building combined blob"
    );

    let mut blob = Vec::with_capacity(packet.len() + original.len());
    blob.extend_from_slice(&packet);
    blob.extend_from_slice(original);
    Ok(blob)
}
