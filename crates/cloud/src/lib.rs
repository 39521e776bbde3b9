//! `snapguard-cloud` -- snapshot operations against the cloud provider.
//!
//! [`provider`] defines the service seams, [`aws`] implements them with
//! the AWS SDK, [`snapshot`] holds the per-resource operations, and
//! [`orchestrator`] walks the configured resources.

pub mod aws;
pub mod error;
pub mod orchestrator;
pub mod provider;
pub mod snapshot;

pub use error::CloudError;
pub use orchestrator::BackupOrchestrator;
