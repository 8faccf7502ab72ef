// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Well-known process-wide pipes for standard output and standard error.

use crate::error::PipeError;
use crate::pipe::{Destination, Pipe, PipeWriter};
use crate::plan::OverridePlan;
use crate::registry::Registry;
use std::io;
use std::sync::{Arc, LazyLock};

static OUT: LazyLock<Standard> =
    LazyLock::new(|| Standard::well_known("OUT", Box::new(io::stdout())));

static ERROR: LazyLock<Standard> =
    LazyLock::new(|| Standard::well_known("ERROR", Box::new(io::stderr())));

/// Facade over a named [`Pipe`].
///
/// The two well-known instances, [`Standard::out`] and [`Standard::err`],
/// are bound to the process streams on first use and live until process
/// exit. Code that writes through them can be redirected by tests via
/// [`Standard::with_override`] without swapping the process-level streams.
pub struct Standard {
    pipe: Arc<Pipe>,
}

impl Standard {
    /// The process-wide standard output pipe, named `OUT`
    pub fn out() -> &'static Standard {
        &OUT
    }

    /// The process-wide standard error pipe, named `ERROR`
    pub fn err() -> &'static Standard {
        &ERROR
    }

    /// Build a standalone facade over a caller-supplied destination, for
    /// tests that should not touch the process-wide pipes.
    ///
    /// Fails with [`PipeError::BlankName`] when `name` is blank.
    pub fn custom(name: impl Into<String>, default: Destination) -> Result<Self, PipeError> {
        Ok(Self {
            pipe: Arc::new(Pipe::new(name, default)?),
        })
    }

    /// Like [`Standard::custom`], additionally tracking the pipe in
    /// `registry` for bulk reset.
    pub fn custom_in(
        name: impl Into<String>,
        default: Destination,
        registry: &Registry,
    ) -> Result<Self, PipeError> {
        let standard = Self::custom(name, default)?;
        registry.register(Arc::clone(&standard.pipe));
        Ok(standard)
    }

    fn well_known(name: &'static str, default: Destination) -> Self {
        Self {
            pipe: Arc::new(Pipe::unchecked(name.to_string(), default)),
        }
    }

    /// Display name of the underlying pipe
    pub fn name(&self) -> &str {
        self.pipe.name()
    }

    /// Write `value` through the active destination, rendering `None` as
    /// the literal text `null`.
    pub fn print(&self, value: Option<&str>) -> Result<(), PipeError> {
        self.pipe.print(value)
    }

    /// Like [`Standard::print`], with a trailing newline.
    pub fn println(&self, value: Option<&str>) -> Result<(), PipeError> {
        self.pipe.println(value)
    }

    /// Install `destination` as the active override.
    ///
    /// Prefer [`Standard::with_override`], which pairs the override with
    /// its reset. Fails with [`PipeError::DoubleOverride`] when an override
    /// is already active.
    pub fn divert(&self, destination: Destination) -> Result<(), PipeError> {
        self.pipe.divert(destination)
    }

    /// Clear the active override. A no-op when none is active.
    pub fn reset(&self) {
        self.pipe.reset();
    }

    /// Check whether an override is currently active
    pub fn is_diverted(&self) -> bool {
        self.pipe.is_diverted()
    }

    /// Flush the default destination, plus the override when one is active.
    pub fn flush_all(&self) -> Result<(), PipeError> {
        self.pipe.flush_all()
    }

    /// Create a one-shot plan that overrides this pipe around a unit of
    /// work and clears the override afterwards.
    pub fn with_override(&self, destination: Destination) -> OverridePlan<'_> {
        self.pipe.with_override(destination)
    }

    /// Cloneable writer handle resolving to the currently effective
    /// destination, for handing to third-party formatters.
    pub fn writer(&self) -> PipeWriter {
        PipeWriter::new(Arc::clone(&self.pipe))
    }

    /// Retired bulk reset of all well-known pipes.
    ///
    /// Always fails with [`PipeError::Unsupported`]; the signature is kept
    /// for call sites migrating to scoped overrides or
    /// [`Registry::reset_all`].
    #[deprecated(note = "use a scoped override, or track pipes in a `Registry` and reset those")]
    pub fn reset_all() -> Result<(), PipeError> {
        Err(PipeError::Unsupported)
    }
}

#[cfg(test)]
#[path = "standard_tests.rs"]
mod tests;
