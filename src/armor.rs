//! ASCII armor for binary data
//!
//! The armored format is:
//! - a `-----BEGIN PGP PUBLIC KEY BLOCK-----` line
//! - a blank line
//! - Radix-64 (standard base64) body, wrapped at 64 columns
//! - a `=XXXX` line holding the Radix-64 CRC-24 of the decoded body
//! - a `-----END PGP PUBLIC KEY BLOCK-----` line
//!
//! Decoding is deliberately lenient: the checksum line is read but never
//! enforced, so that already-damaged input can still be re-armored.

use crate::crc24::crc24;
use crate::error::{ErrorCategory, ErrorKind, InjectError, Result};
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine, alphabet};

/// Envelope header written on encode
pub const ARMOR_HEADER: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----";

/// Envelope footer written on encode
pub const ARMOR_FOOTER: &str = "-----END PGP PUBLIC KEY BLOCK-----";

/// Width of every body line except the last
pub const LINE_WIDTH: usize = 64;

const DELIMITER: &str = "-----";
const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";
const CHECKSUM_PREFIX: char = '=';

/// Standard alphabet, padded output, tolerant of missing padding and
/// non-canonical trailing bits on input.
const RADIX64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Result of taking an armored block apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unarmored {
    /// Text between `-----BEGIN ` and the closing dashes.
    pub label: String,
    /// Decoded body.
    pub data: Vec<u8>,
    /// Contents of the `=` line without the marker, if one was present.
    pub checksum: Option<String>,
}

/// How the embedded checksum relates to the decoded body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// The `=` line matches the CRC-24 of the body.
    Valid,
    /// The `=` line decodes, but to a different CRC-24 than the body's.
    Mismatch { expected: u32, actual: u32 },
    /// The `=` line is not four Radix-64 characters encoding three bytes.
    Malformed,
    /// No `=` line was present.
    Missing,
}

impl Unarmored {
    /// Compare the embedded checksum line against the decoded body.
    ///
    /// Purely diagnostic; decoding never fails on the checksum.
    pub fn checksum_status(&self) -> ChecksumStatus {
        let Some(encoded) = self.checksum.as_deref() else {
            return ChecksumStatus::Missing;
        };
        let actual = crc24(&self.data);
        match RADIX64.decode(encoded) {
            Ok(bytes) if bytes.len() == 3 => {
                let expected = u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]);
                if expected == actual {
                    ChecksumStatus::Valid
                } else {
                    ChecksumStatus::Mismatch { expected, actual }
                }
            }
            _ => ChecksumStatus::Malformed,
        }
    }
}

/// Armor `data`, returning the complete envelope text.
///
/// The footer is not followed by a newline.
pub fn encode_armor(data: &[u8]) -> String {
    let encoded = RADIX64.encode(data);
    let crc = crc24(data).to_be_bytes();
    let checksum = RADIX64.encode(&crc[1..]);

    let mut out = String::with_capacity(
        ARMOR_HEADER.len() + ARMOR_FOOTER.len() + encoded.len() * (LINE_WIDTH + 1) / LINE_WIDTH + 16,
    );
    out.push_str(ARMOR_HEADER);
    out.push_str("\n\n");

    let mut rest = encoded.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }

    out.push(CHECKSUM_PREFIX);
    out.push_str(&checksum);
    out.push('\n');
    out.push_str(ARMOR_FOOTER);
    out
}

/// Decode an armored block to its raw bytes, ignoring the checksum line.
pub fn decode_armor(text: &str) -> Result<Vec<u8>> {
    parse_armor(text).map(|unarmored| unarmored.data)
}

/// Take an armored block apart into label, body, and checksum line.
///
/// Only the first BEGIN/END pair is considered; anything after the END line
/// is ignored.
pub fn parse_armor(text: &str) -> Result<Unarmored> {
    let mut lines = text.lines().map(str::trim);

    let label = lines
        .by_ref()
        .find_map(|line| line.strip_prefix(BEGIN_PREFIX))
        .map(|rest| rest.trim_end_matches('-').trim().to_string())
        .ok_or_else(|| {
            InjectError::with_kind(
                ErrorCategory::User,
                ErrorKind::ArmoringInvalid,
                "no armor header line found",
            )
        })?;

    let mut body = String::new();
    let mut checksum = None;
    let mut in_headers = true;
    let mut found_end = false;

    for line in lines {
        if line.starts_with(END_PREFIX) {
            found_end = true;
            break;
        }
        if line.is_empty() {
            in_headers = false;
            continue;
        }
        if line.starts_with(DELIMITER) {
            continue;
        }
        if let Some(sum) = line.strip_prefix(CHECKSUM_PREFIX) {
            checksum = Some(sum.to_string());
            continue;
        }
        // Key: Value headers such as "Version:" or "Comment:".
        if in_headers && line.contains(':') {
            continue;
        }
        in_headers = false;
        body.push_str(line);
    }

    if !found_end {
        return Err(InjectError::with_kind(
            ErrorCategory::User,
            ErrorKind::ArmoringInvalid,
            format!("no armor footer line found for {}", label),
        ));
    }

    let data = RADIX64.decode(&body).map_err(|e| {
        InjectError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::ArmoringDecode,
            format!("base64 decoding failed: {}", e),
            e,
        )
    })?;

    Ok(Unarmored {
        label,
        data,
        checksum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_lines(armored: &str) -> Vec<&str> {
        armored
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with("-----") && !l.starts_with('='))
            .collect()
    }

    #[test]
    fn test_empty_bytes() {
        let armored = encode_armor(b"");
        assert_eq!(
            armored,
            "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\n=twTO\n-----END PGP PUBLIC KEY BLOCK-----"
        );
        assert!(body_lines(&armored).is_empty());
        assert_eq!(decode_armor(&armored).unwrap(), b"");
    }

    #[test]
    fn test_simple_bytes() {
        let armored = encode_armor(&[0x01, 0x02, 0x03]);
        assert_eq!(
            armored,
            "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\nAQID\n=Z2GT\n-----END PGP PUBLIC KEY BLOCK-----"
        );
    }

    #[test]
    fn test_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        let armored = encode_armor(&bytes);

        assert_eq!(
            armored,
            "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\
             \n\
             AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4v\n\
             MDEyMzQ1Njc4OTo7PD0+P0BBQkNERUZHSElKS0xNTk9QUVJTVFVWV1hZWltcXV5f\n\
             YGFiY2RlZmdoaWprbG1ub3BxcnN0dXZ3eHl6e3x9fn+AgYKDhIWGh4iJiouMjY6P\n\
             kJGSk5SVlpeYmZqbnJ2en6ChoqOkpaanqKmqq6ytrq+wsbKztLW2t7i5uru8vb6/\n\
             wMHCw8TFxsfIycrLzM3Oz9DR0tPU1dbX2Nna29zd3t/g4eLj5OXm5+jp6uvs7e7v\n\
             8PHy8/T19vf4+fr7/P3+/w==\n\
             =W700\n\
             -----END PGP PUBLIC KEY BLOCK-----"
        );

        assert_eq!(decode_armor(&armored).unwrap(), bytes);
    }

    #[test]
    fn test_line_width() {
        for len in [1usize, 47, 48, 49, 96, 1000, 4097] {
            let bytes = vec![0xA5u8; len];
            let armored = encode_armor(&bytes);
            let lines = body_lines(&armored);
            let (last, full) = lines.split_last().unwrap();
            assert!(full.iter().all(|l| l.len() == LINE_WIDTH), "len {}", len);
            assert!(!last.is_empty() && last.len() <= LINE_WIDTH);
            assert_eq!(decode_armor(&armored).unwrap(), bytes);
        }
    }

    #[test]
    fn test_checksum_line_shape() {
        let armored = encode_armor(b"some data");
        let checksum = armored
            .lines()
            .find(|l| l.starts_with('='))
            .unwrap();
        assert_eq!(checksum.len(), 5);
    }

    #[test]
    fn test_missing_checksum_tolerated() {
        let bytes = b"tolerant decode".to_vec();
        let armored = encode_armor(&bytes);
        let stripped: String = armored
            .lines()
            .filter(|l| !l.starts_with('='))
            .collect::<Vec<_>>()
            .join("\n");

        let unarmored = parse_armor(&stripped).unwrap();
        assert_eq!(unarmored.data, bytes);
        assert_eq!(unarmored.checksum_status(), ChecksumStatus::Missing);
    }

    #[test]
    fn test_corrupt_checksum_tolerated() {
        let bytes = b"tolerant decode".to_vec();
        let armored = encode_armor(&bytes);
        let good = armored.lines().find(|l| l.starts_with('=')).unwrap();

        let mismatched = armored.replace(good, "=AAAA");
        let unarmored = parse_armor(&mismatched).unwrap();
        assert_eq!(unarmored.data, bytes);
        assert!(matches!(
            unarmored.checksum_status(),
            ChecksumStatus::Mismatch { expected: 0, .. }
        ));

        let garbage = armored.replace(good, "=not base64!");
        let unarmored = parse_armor(&garbage).unwrap();
        assert_eq!(unarmored.data, bytes);
        assert_eq!(unarmored.checksum_status(), ChecksumStatus::Malformed);
    }

    #[test]
    fn test_valid_checksum_status() {
        let unarmored = parse_armor(&encode_armor(b"abc")).unwrap();
        assert_eq!(unarmored.checksum_status(), ChecksumStatus::Valid);
        assert_eq!(unarmored.label, "PGP PUBLIC KEY BLOCK");
    }

    #[test]
    fn test_armor_headers_and_crlf() {
        let text = "-----BEGIN PGP PUBLIC KEY BLOCK-----\r\n\
                    Version: GnuPG v2\r\n\
                    Comment: test key\r\n\
                    \r\n\
                    AQID\r\n\
                    =Z2GT\r\n\
                    -----END PGP PUBLIC KEY BLOCK-----\r\n";
        assert_eq!(decode_armor(text).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_surrounding_text_ignored() {
        let text = format!(
            "leading notes\n{}\ntrailing notes\n",
            encode_armor(b"payload")
        );
        assert_eq!(decode_armor(&text).unwrap(), b"payload");
    }

    #[test]
    fn test_other_label_accepted() {
        let text = "-----BEGIN PGP SIGNATURE-----\n\nAQID\n-----END PGP SIGNATURE-----";
        let unarmored = parse_armor(text).unwrap();
        assert_eq!(unarmored.label, "PGP SIGNATURE");
        assert_eq!(unarmored.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_unpadded_body() {
        let text = "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\naGk\n-----END PGP PUBLIC KEY BLOCK-----";
        assert_eq!(decode_armor(text).unwrap(), b"hi");
    }

    #[test]
    fn test_no_header() {
        let err = decode_armor("just some text").expect_err("expected missing header");
        assert_eq!(err.kind, Some(ErrorKind::ArmoringInvalid));
    }

    #[test]
    fn test_no_footer() {
        let err = decode_armor("-----BEGIN PGP PUBLIC KEY BLOCK-----\n\nAQID\n")
            .expect_err("expected missing footer");
        assert_eq!(err.kind, Some(ErrorKind::ArmoringInvalid));
    }

    #[test]
    fn test_bad_alphabet() {
        let text = "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\nAQ$D\n-----END PGP PUBLIC KEY BLOCK-----";
        let err = decode_armor(text).expect_err("expected decode error");
        assert_eq!(err.kind, Some(ErrorKind::ArmoringDecode));
    }

    #[test]
    fn test_partial_trailing_byte() {
        let text = "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\nAQIDB\n-----END PGP PUBLIC KEY BLOCK-----";
        let err = decode_armor(text).expect_err("expected decode error");
        assert_eq!(err.kind, Some(ErrorKind::ArmoringDecode));
    }
}
