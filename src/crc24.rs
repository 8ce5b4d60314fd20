//! CRC-24 checksum used by the armor checksum line
//!
//! This is the CRC-24/OPENPGP variant: init 0xB704CE, polynomial 0x864CFB,
//! no reflection, no final xor.

/// Initial accumulator value.
pub const CRC24_INIT: u32 = 0xB7_04CE;

/// Generator polynomial including the implicit x^24 term.
pub const CRC24_POLY: u32 = 0x186_4CFB;

/// Mask selecting the low 24 bits.
pub const CRC24_MASK: u32 = 0xFF_FFFF;

/// Bit that signals the accumulator overflowed past 24 bits.
const CRC24_CARRY: u32 = 0x100_0000;

/// Compute the CRC-24 of `data`.
pub fn crc24(data: &[u8]) -> u32 {
    data.iter().fold(CRC24_INIT, |crc, &byte| update(crc, byte)) & CRC24_MASK
}

fn update(crc: u32, byte: u8) -> u32 {
    (0..8).fold(crc ^ (u32::from(byte) << 16), |acc, _| {
        let shifted = acc << 1;
        if shifted & CRC24_CARRY != 0 {
            shifted ^ CRC24_POLY
        } else {
            shifted
        }
    })
}
