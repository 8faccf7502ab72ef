// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cloneable in-memory destination for capturing redirected output.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Shared in-memory byte buffer usable as an override destination.
///
/// Clones share the same storage, so a test keeps one handle and installs
/// another as the override, then asserts on the captured bytes.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured bytes
    pub fn contents(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Captured bytes decoded as UTF-8, lossily
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Number of captured bytes
    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    /// Check if nothing has been captured yet
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// Discard everything captured so far
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
