//! sluice core: message model and error surface shared across crates.
//!
//! This crate defines the multi-part message primitives and the unified
//! error type shared by the pipeline layer and embedding applications.
//! It intentionally carries no runtime dependencies so it can be reused
//! in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SluiceError`/`Result` so
//! production pipelines do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod message;

/// Shared result type.
pub use error::{Result, SluiceError};
pub use message::Message;
