//! `snapguard-core` -- domain types shared by the snapshot trigger.
//!
//! Holds everything that does not talk to a cloud provider: process
//! configuration, snapshot naming rules, the clock seam, and the
//! summary structure returned by a backup run.

pub mod clock;
pub mod config;
pub mod error;
pub mod naming;
pub mod result;
