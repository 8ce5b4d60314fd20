//! keyinject - prepend an OpenPGP literal data packet to an armored key block

#![forbid(unsafe_code)]

pub mod armor;
pub mod crc24;
pub mod designs;
pub mod error;
pub mod file_ops;
pub mod inject;
pub mod logging;
pub mod packet;
pub mod payload;

pub use armor::{decode_armor, encode_armor};
pub use crc24::crc24;
pub use inject::{inject, inject_with};
pub use packet::build_literal_packet;
