// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot scoped override of a pipe around a unit of work.

use crate::error::PipeError;
use crate::pipe::{Destination, Pipe};
use std::io::Write;

/// One-shot plan that installs an override on a [`Pipe`], runs a unit of
/// work, and clears the override again on every exit path.
///
/// Created via [`Pipe::with_override`] or
/// [`Standard::with_override`](crate::Standard::with_override); consumed by
/// [`OverridePlan::execute`].
pub struct OverridePlan<'p> {
    pipe: &'p Pipe,
    destination: Destination,
}

/// Clears the override when dropped, so unwinding out of the unit of work
/// cannot leave the pipe redirected.
struct ResetOnDrop<'p> {
    pipe: &'p Pipe,
}

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.pipe.reset();
    }
}

impl<'p> OverridePlan<'p> {
    pub(crate) fn new(pipe: &'p Pipe, destination: Destination) -> Self {
        Self { pipe, destination }
    }

    /// Run `work` with the override installed, clearing it afterwards.
    ///
    /// The override is active for exactly the duration of `work`. Fails
    /// with [`PipeError::DoubleOverride`] when an override is already
    /// active on the pipe, in which case `work` is not invoked. Nested
    /// overrides on the same pipe are disallowed, not stacked. A panic in
    /// `work` continues unwinding after the override has been cleared.
    pub fn execute<R>(self, work: impl FnOnce() -> R) -> Result<R, PipeError> {
        self.execute_with(|_| work())
    }

    /// Run `work` with the override installed, handing it a writer that
    /// resolves to the active destination.
    pub fn execute_with<R>(
        self,
        work: impl FnOnce(&mut dyn Write) -> R,
    ) -> Result<R, PipeError> {
        self.pipe.divert(self.destination)?;
        let _reset = ResetOnDrop { pipe: self.pipe };
        let mut through = self.pipe;
        Ok(work(&mut through))
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
