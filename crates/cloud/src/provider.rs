//! Provider-agnostic service traits used by the snapshot operations.
//!
//! The AWS implementations live in [`crate::aws`]; tests supply
//! in-memory fakes.

use async_trait::async_trait;
use snapguard_core::config::SnapshotTag;

use crate::error::CloudError;

/// Outcome of a successful database snapshot request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDbSnapshot {
    /// Resource reference used for tagging, if the provider returned one.
    pub arn: Option<String>,
}

/// A storage volume attached to a compute instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedVolume {
    pub volume_id: String,
}

/// Database snapshot API (RDS).
#[async_trait]
pub trait DatabaseSnapshotService: Send + Sync {
    /// Request a snapshot of `db_instance_id` named `snapshot_id`.
    async fn create_db_snapshot(
        &self,
        db_instance_id: &str,
        snapshot_id: &str,
    ) -> Result<CreatedDbSnapshot, CloudError>;

    /// Attach `tag` to the resource identified by `resource_arn`.
    async fn add_tag_to_resource(
        &self,
        resource_arn: &str,
        tag: &SnapshotTag,
    ) -> Result<(), CloudError>;
}

/// Compute volume snapshot API (EC2/EBS).
#[async_trait]
pub trait VolumeSnapshotService: Send + Sync {
    /// List volumes whose attachment references `instance_id`, in
    /// provider order.
    async fn list_attached_volumes(
        &self,
        instance_id: &str,
    ) -> Result<Vec<AttachedVolume>, CloudError>;

    /// Snapshot `volume_id` and return the new snapshot id.
    async fn create_volume_snapshot(
        &self,
        volume_id: &str,
        description: &str,
    ) -> Result<String, CloudError>;

    /// Attach `tag` to the resource `resource_id`.
    async fn create_tags(&self, resource_id: &str, tag: &SnapshotTag) -> Result<(), CloudError>;
}
