// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bulk reset over an explicit collection of pipes.

use crate::pipe::Pipe;
use parking_lot::Mutex;
use std::sync::Arc;

/// Explicit membership set of pipes supporting a bulk reset.
///
/// Scoped overrides are the primary mechanism; a registry is a convenience
/// for suites that install overrides manually and want one teardown call.
/// Membership is guarded separately from each pipe's own routing, so
/// registering from one thread never blocks writes on another.
#[derive(Default)]
pub struct Registry {
    pipes: Mutex<Vec<Arc<Pipe>>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `pipe` for bulk reset
    pub fn register(&self, pipe: Arc<Pipe>) {
        self.pipes.lock().push(pipe);
    }

    /// Number of registered pipes
    pub fn len(&self) -> usize {
        self.pipes.lock().len()
    }

    /// Check if no pipes are registered
    pub fn is_empty(&self) -> bool {
        self.pipes.lock().is_empty()
    }

    /// Clear the active override on every registered pipe, in no
    /// particular order.
    pub fn reset_all(&self) {
        // Snapshot membership first; a pipe's reset never runs under the
        // registry lock.
        let pipes: Vec<Arc<Pipe>> = self.pipes.lock().clone();
        for pipe in pipes {
            pipe.reset();
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
