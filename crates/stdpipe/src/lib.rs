// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped redirection of standard output and error for test assertions.
//!
//! This crate wraps the process output streams in named pipes that can have
//! at most one temporary override installed at a time. Tests install an
//! override around a unit of work and assert on the captured bytes; the
//! override is cleared on every exit path, including panics, so a failing
//! test never leaves the process streams redirected.
//!
//! ```
//! use stdpipe::{SharedBuffer, Standard};
//!
//! # fn main() -> Result<(), stdpipe::PipeError> {
//! let buffer = SharedBuffer::new();
//! Standard::out()
//!     .with_override(Box::new(buffer.clone()))
//!     .execute(|| Standard::out().println(Some("captured")))??;
//! assert_eq!(buffer.as_string(), "captured\n");
//! # Ok(())
//! # }
//! ```

mod buffer;
mod error;
mod pipe;
mod plan;
mod registry;
mod standard;

pub use buffer::SharedBuffer;
pub use error::PipeError;
pub use pipe::{Destination, Pipe, PipeWriter};
pub use plan::OverridePlan;
pub use registry::Registry;
pub use standard::Standard;
