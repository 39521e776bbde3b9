//! `snapguard-lambda` library crate.
//!
//! Re-exports the invocation handler for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod handler;
