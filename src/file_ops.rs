//! File-level injection
//!
//! Reads an armored block from disk, prepends a literal packet and writes the
//! re-armored result. Nothing is written unless every step before the write
//! succeeded.

use crate::armor::{self, ChecksumStatus};
use crate::error::{ErrorCategory, ErrorKind, InjectError, Result};
use crate::inject;
use crate::payload::PayloadProvider;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Inject a payload into the armored block at `input_path`
///
/// The payload is produced by `provider` from `caption`, prepended to the
/// decoded contents of `input_path` as a literal packet, and the re-armored
/// result is written atomically to `output_path` (tempfile + fsync + rename).
pub fn inject_file(
    input_path: &Path,
    output_path: &Path,
    caption: &str,
    provider: &dyn PayloadProvider,
) -> Result<()> {
    let payload = provider
        .payload(caption)
        .map_err(|e| e.with_context("failed to produce payload"))?;
    debug!(payload_len = payload.len(), "payload ready");

    let armored_bytes = fs::read(input_path).map_err(|e| read_error(input_path, e))?;
    let armored = String::from_utf8(armored_bytes).map_err(|e| {
        InjectError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::Io,
            "input file is not valid UTF-8",
            e,
        )
    })?;

    let unarmored = armor::parse_armor(&armored).map_err(|e| {
        e.with_context(format!("failed to unarmor {}", input_path.display()))
    })?;
    match unarmored.checksum_status() {
        ChecksumStatus::Valid => {}
        ChecksumStatus::Mismatch { expected, actual } => warn!(
            expected = format_args!("{:06X}", expected),
            actual = format_args!("{:06X}", actual),
            "input checksum does not match its body; re-armoring anyway"
        ),
        ChecksumStatus::Malformed => warn!("input checksum line is malformed; ignoring it"),
        ChecksumStatus::Missing => debug!("input has no checksum line"),
    }
    info!(
        label = %unarmored.label,
        original_len = unarmored.data.len(),
        "decoded input armor"
    );

    let blob = inject::combine(&unarmored.data, &payload)?;
    let output = armor::encode_armor(&blob);

    write_file_atomic(output_path, output.as_bytes())
        .map_err(|e| e.with_context(format!("failed to write to {}", output_path.display())))?;
    info!(path = %output_path.display(), bytes = output.len(), "wrote injected armor");

    Ok(())
}

/// Write `contents` to `path` via a tempfile in the same directory.
///
/// Either the previous file (if any) or the complete new file exists
/// afterwards, never a partial one.
fn write_file_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        InjectError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::Io,
            format!("failed to create tempfile in {}", dir.display()),
            e,
        )
    })?;

    temp_file.write_all(contents).map_err(|e| {
        InjectError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to write to tempfile",
            e,
        )
    })?;
    // Flush and fsync() such that the rename later, if it succeeds, will
    // always point to a valid file.
    temp_file.flush().map_err(|e| {
        InjectError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to flush tempfile",
            e,
        )
    })?;
    temp_file.as_file().sync_all().map_err(|e| {
        InjectError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to sync file prior to rename",
            e,
        )
    })?;

    temp_file.persist(path).map_err(|e| {
        InjectError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            format!("failed to rename to target file {}", path.display()),
            e,
        )
    })?;
    Ok(())
}

fn read_error(path: &Path, err: io::Error) -> InjectError {
    let category = if err.kind() == io::ErrorKind::NotFound {
        ErrorCategory::User
    } else {
        ErrorCategory::Internal
    };
    InjectError::with_kind_and_source(
        category,
        ErrorKind::Io,
        format!("failed to read from {}", path.display()),
        err,
    )
}
