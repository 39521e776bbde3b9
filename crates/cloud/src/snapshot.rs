//! Per-resource snapshot operations.
//!
//! Each function handles one database or one compute instance and is
//! strictly sequential. Failures are returned to the caller; only the
//! best-effort tagging steps are logged and swallowed here.

use snapguard_core::clock::Clock;
use snapguard_core::config::{SnapshotTag, TagPolicy};
use snapguard_core::naming::{db_snapshot_identifier, volume_snapshot_description};

use crate::error::CloudError;
use crate::provider::{DatabaseSnapshotService, VolumeSnapshotService};

/// Snapshot one database instance and return the generated snapshot id.
///
/// The id is `{db_id}-{YYYYMMDDHHMMSS}` in UTC. A failed create is
/// returned as an error. A failed tag (or a create response without an
/// ARN) is logged and does not affect the result.
pub async fn snapshot_database(
    service: &dyn DatabaseSnapshotService,
    tag: &SnapshotTag,
    clock: &dyn Clock,
    db_id: &str,
) -> Result<String, CloudError> {
    let snapshot_id = db_snapshot_identifier(db_id, clock.now());

    tracing::debug!(db_id, snapshot_id = %snapshot_id, "Requesting database snapshot");
    let created = service.create_db_snapshot(db_id, &snapshot_id).await?;

    match created.arn.as_deref() {
        Some(arn) => {
            if let Err(e) = service.add_tag_to_resource(arn, tag).await {
                tracing::warn!(db_id, snapshot_id = %snapshot_id, error = %e, "Tagging database snapshot failed");
            }
        }
        None => {
            tracing::warn!(db_id, snapshot_id = %snapshot_id, "Database snapshot has no ARN, skipping tag");
        }
    }

    Ok(snapshot_id)
}

/// Snapshot every volume attached to `instance_id`.
///
/// Returns the created snapshot ids in the order the provider listed
/// the volumes; an instance without volumes yields an empty list. The
/// first failing volume aborts the rest. Snapshots already created for
/// earlier volumes are left in place.
///
/// With [`TagPolicy::Strict`] a tagging failure aborts like a create
/// failure. With [`TagPolicy::BestEffort`] it is logged and the snapshot
/// is still returned.
pub async fn snapshot_volumes_for_instance(
    service: &dyn VolumeSnapshotService,
    tag: &SnapshotTag,
    policy: TagPolicy,
    clock: &dyn Clock,
    instance_id: &str,
) -> Result<Vec<String>, CloudError> {
    let volumes = service.list_attached_volumes(instance_id).await?;
    tracing::debug!(instance_id, volume_count = volumes.len(), "Listed attached volumes");

    let mut created = Vec::with_capacity(volumes.len());
    for volume in &volumes {
        let description = volume_snapshot_description(instance_id, &volume.volume_id, clock.now());
        let snapshot_id = service
            .create_volume_snapshot(&volume.volume_id, &description)
            .await?;

        if let Err(e) = service.create_tags(&snapshot_id, tag).await {
            match policy {
                TagPolicy::Strict => return Err(e),
                TagPolicy::BestEffort => {
                    tracing::warn!(
                        instance_id,
                        volume_id = %volume.volume_id,
                        snapshot_id = %snapshot_id,
                        error = %e,
                        "Tagging volume snapshot failed",
                    );
                }
            }
        }

        created.push(snapshot_id);
    }

    Ok(created)
}
