//! sluice pipeline layer.
//!
//! This crate wires configuration, observability, and the condition
//! layer into a cohesive admission stack. It is intended to be
//! consumed by pipeline hosts and by integration tests.

pub mod condition;
pub mod config;
pub mod obs;
