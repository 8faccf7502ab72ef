// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::buffer::SharedBuffer;
use std::thread;

fn registered_pipe(name: &str, registry: &Registry) -> Arc<Pipe> {
    let pipe = Arc::new(Pipe::new(name, Box::new(SharedBuffer::new())).unwrap());
    registry.register(Arc::clone(&pipe));
    pipe
}

#[test]
fn test_starts_empty() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_register_tracks_membership() {
    let registry = Registry::new();
    registered_pipe("A", &registry);
    registered_pipe("B", &registry);

    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}

#[test]
fn test_reset_all_clears_every_override() {
    let registry = Registry::new();
    let first = registered_pipe("A", &registry);
    let second = registered_pipe("B", &registry);
    let third = registered_pipe("C", &registry);

    first.divert(Box::new(SharedBuffer::new())).unwrap();
    third.divert(Box::new(SharedBuffer::new())).unwrap();

    registry.reset_all();

    assert!(!first.is_diverted());
    assert!(!second.is_diverted());
    assert!(!third.is_diverted());
}

#[test]
fn test_reset_all_on_empty_registry_is_a_no_op() {
    Registry::new().reset_all();
}

#[test]
fn test_reset_all_leaves_membership_intact() {
    let registry = Registry::new();
    let pipe = registered_pipe("A", &registry);

    pipe.divert(Box::new(SharedBuffer::new())).unwrap();
    registry.reset_all();
    pipe.divert(Box::new(SharedBuffer::new())).unwrap();
    registry.reset_all();

    assert_eq!(registry.len(), 1);
    assert!(!pipe.is_diverted());
}

#[test]
fn test_concurrent_registration() {
    let registry = Arc::new(Registry::new());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..25 {
                    registered_pipe(&format!("{}-{}", worker, i), &registry);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 100);
}
