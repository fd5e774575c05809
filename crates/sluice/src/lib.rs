//! Top-level facade crate for sluice.
//!
//! Re-exports the core types and the pipeline library so users can depend on a single crate.

pub mod core {
    pub use sluice_core::*;
}

pub mod pipeline {
    pub use sluice_pipeline::*;
}
