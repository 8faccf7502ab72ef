// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named diverging writer routing output to a default or override destination.

use crate::error::PipeError;
use crate::plan::OverridePlan;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Boxed destination accepted by a pipe.
pub type Destination = Box<dyn Write + Send>;

/// Routing state guarded by one lock: the override transition and the
/// per-write destination resolution must never observe each other halfway.
struct Routing {
    default: Destination,
    diverted: Option<Destination>,
}

impl Routing {
    fn target(&mut self) -> &mut dyn Write {
        match self.diverted.as_mut() {
            Some(destination) => destination.as_mut(),
            None => self.default.as_mut(),
        }
    }
}

/// A named output endpoint wrapping a default destination, with at most one
/// temporary override installed at a time.
///
/// Writes go to the override while one is active and to the default
/// destination otherwise. Installing a second override without an
/// intervening [`Pipe::reset`] is an error; the first stays in place.
pub struct Pipe {
    name: String,
    routing: Mutex<Routing>,
}

impl Pipe {
    /// Create a pipe from a display name and a default destination.
    ///
    /// Fails with [`PipeError::BlankName`] when `name` is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>, default: Destination) -> Result<Self, PipeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PipeError::BlankName);
        }
        Ok(Self::unchecked(name, default))
    }

    /// Construct without the name check, for names known non-blank.
    pub(crate) fn unchecked(name: String, default: Destination) -> Self {
        Self {
            name,
            routing: Mutex::new(Routing {
                default,
                diverted: None,
            }),
        }
    }

    /// Display name of this pipe
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install `destination` as the active override.
    ///
    /// Every subsequent write goes to `destination` until [`Pipe::reset`]
    /// is called. Fails with [`PipeError::DoubleOverride`] when an override
    /// is already active; the existing override stays in place.
    pub fn divert(&self, destination: Destination) -> Result<(), PipeError> {
        let mut routing = self.routing.lock();
        if routing.diverted.is_some() {
            return Err(PipeError::DoubleOverride {
                name: self.name.clone(),
            });
        }
        routing.diverted = Some(destination);
        Ok(())
    }

    /// Clear the active override, reverting writes to the default
    /// destination. Calling this with no override active is a no-op.
    pub fn reset(&self) {
        self.routing.lock().diverted = None;
    }

    /// Check whether an override is currently active
    pub fn is_diverted(&self) -> bool {
        self.routing.lock().diverted.is_some()
    }

    /// Write `value` through the active destination, rendering `None` as
    /// the literal text `null`.
    pub fn print(&self, value: Option<&str>) -> Result<(), PipeError> {
        let mut routing = self.routing.lock();
        write!(routing.target(), "{}", value.unwrap_or("null"))?;
        Ok(())
    }

    /// Like [`Pipe::print`], with a trailing newline.
    pub fn println(&self, value: Option<&str>) -> Result<(), PipeError> {
        let mut routing = self.routing.lock();
        writeln!(routing.target(), "{}", value.unwrap_or("null"))?;
        Ok(())
    }

    /// Flush the default destination, plus the override when one is active,
    /// so neither path loses buffered output during teardown.
    pub fn flush_all(&self) -> Result<(), PipeError> {
        let mut routing = self.routing.lock();
        routing.default.flush()?;
        if let Some(destination) = routing.diverted.as_mut() {
            destination.flush()?;
        }
        Ok(())
    }

    /// Create a one-shot plan that overrides this pipe around a unit of
    /// work and clears the override afterwards.
    pub fn with_override(&self, destination: Destination) -> OverridePlan<'_> {
        OverridePlan::new(self, destination)
    }
}

impl Write for &Pipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Resolved once under the routing lock: a concurrent divert or
        // reset cannot split a single write across destinations.
        let mut routing = self.routing.lock();
        routing.target().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut routing = self.routing.lock();
        routing.default.flush()?;
        if let Some(destination) = routing.diverted.as_mut() {
            destination.flush()?;
        }
        Ok(())
    }
}

impl fmt::Display for Pipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Pipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe")
            .field("name", &self.name)
            .field("diverted", &self.is_diverted())
            .finish_non_exhaustive()
    }
}

/// Cheap cloneable writer handle that always resolves to a pipe's currently
/// effective destination, for handing to third-party formatters.
#[derive(Clone)]
pub struct PipeWriter {
    pipe: Arc<Pipe>,
}

impl PipeWriter {
    pub(crate) fn new(pipe: Arc<Pipe>) -> Self {
        Self { pipe }
    }

    /// The pipe this handle routes through
    pub fn pipe(&self) -> &Pipe {
        &self.pipe
    }
}

impl Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut through: &Pipe = &self.pipe;
        through.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut through: &Pipe = &self.pipe;
        through.flush()
    }
}

#[cfg(test)]
#[path = "pipe_tests.rs"]
mod tests;
