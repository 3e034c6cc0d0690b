//! Simple pgwire client library.
//!
//! Exposes configuration, the error type, the observer seam and the
//! provisioning flow so the binary entrypoint and integration tests share
//! them.

pub mod config;
pub mod error;
pub mod observer;
pub mod provision;

pub use provision::{run, ReadSummary};
