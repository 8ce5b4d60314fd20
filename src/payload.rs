//! Payload providers
//!
//! A provider turns an optional caption into the bytes that end up inside
//! the literal packet.

use crate::designs::Design;
use crate::error::{ErrorCategory, ErrorKind, InjectError, Result};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Trait for producing payload bytes from a caption
pub trait PayloadProvider {
    /// Produce the payload. `caption` is empty when none was given.
    fn payload(&self, caption: &str) -> Result<Vec<u8>>;
}

impl PayloadProvider for Design {
    fn payload(&self, caption: &str) -> Result<Vec<u8>> {
        Ok(self.render(caption).into_bytes())
    }
}

/// Adapts a plain function or closure (e.g. for tests or embedding)
pub struct FnProvider<F>(pub F);

impl<F> PayloadProvider for FnProvider<F>
where
    F: Fn(&str) -> Vec<u8>,
{
    fn payload(&self, caption: &str) -> Result<Vec<u8>> {
        Ok((self.0)(caption))
    }
}

/// Reads a prepared payload from a file
///
/// A non-empty caption is appended on its own line.
pub struct TextFileProvider {
    path: PathBuf,
}

impl TextFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PayloadProvider for TextFileProvider {
    fn payload(&self, caption: &str) -> Result<Vec<u8>> {
        let mut data = fs::read(&self.path).map_err(|e| {
            let category = if e.kind() == io::ErrorKind::NotFound {
                ErrorCategory::User
            } else {
                ErrorCategory::Internal
            };
            InjectError::with_kind_and_source(
                category,
                ErrorKind::PayloadProvider,
                format!("failed to read payload from {}", self.path.display()),
                e,
            )
        })?;
        if !caption.is_empty() {
            if !data.is_empty() && !data.ends_with(b"\n") {
                data.push(b'\n');
            }
            data.extend_from_slice(caption.as_bytes());
            data.push(b'\n');
        }
        Ok(data)
    }
}
