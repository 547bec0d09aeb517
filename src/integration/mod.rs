//! Integration testing module
//!
//! End-to-end runs of the offset tool against subtitle files on disk:
//! - Shifting forward and backward
//! - Zero-offset passthrough
//! - Every error path and its exit code

pub mod e2e;
pub mod fixtures;
