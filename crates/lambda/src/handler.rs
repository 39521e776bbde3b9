//! Invocation handler.
//!
//! Every invocation runs one full backup pass with the configuration
//! captured at startup. The incoming event carries no instructions and
//! is ignored.

use serde::{Deserialize, Serialize};
use snapguard_cloud::BackupOrchestrator;
use snapguard_core::config::BackupConfig;
use snapguard_core::result::BackupResult;

/// Opaque invocation payload (e.g. a scheduler event).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationEvent(pub serde_json::Value);

/// Binds an orchestrator to the startup configuration.
pub struct BackupHandler {
    orchestrator: BackupOrchestrator,
    config: BackupConfig,
}

impl BackupHandler {
    pub fn new(orchestrator: BackupOrchestrator, config: BackupConfig) -> Self {
        Self {
            orchestrator,
            config,
        }
    }

    /// Run one backup pass. Never fails; per-resource errors are logged
    /// by the orchestrator and left out of the result.
    pub async fn handle(&self, _event: InvocationEvent) -> BackupResult {
        tracing::info!(
            databases = self.config.rds_instance_ids.len(),
            instances = self.config.ec2_instance_ids.len(),
            "Backup invocation received",
        );
        self.orchestrator.run(&self.config).await
    }
}
