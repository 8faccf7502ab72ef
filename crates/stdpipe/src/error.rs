// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pipe construction and override control.

use thiserror::Error;

/// Errors raised by pipe construction and override control
#[derive(Debug, Error)]
pub enum PipeError {
    /// An override was requested while another is still active on the pipe.
    #[error("Double override of standard pipe: {name}")]
    DoubleOverride {
        /// Display name of the pipe that rejected the override
        name: String,
    },

    /// A pipe was constructed with an empty or whitespace-only display name.
    #[error("standard pipe name must not be blank")]
    BlankName,

    /// The operation was retired and intentionally always fails.
    #[error("bulk reset is retired; use a scoped override or a registry")]
    Unsupported,

    /// The destination failed to accept a write or flush.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
