//! Backup run across all configured databases and instances.
//!
//! Walks the database list, then the instance list, one entry at a time.
//! A failing entry is logged and left out of the result; it never stops
//! the remaining entries. The run itself cannot fail.

use std::sync::Arc;

use snapguard_core::clock::Clock;
use snapguard_core::config::BackupConfig;
use snapguard_core::result::{BackupResult, DbSnapshotResult, InstanceSnapshotResult};

use crate::provider::{DatabaseSnapshotService, VolumeSnapshotService};
use crate::snapshot::{snapshot_database, snapshot_volumes_for_instance};

/// Holds the provider services and the clock for repeated runs.
///
/// Stateless between runs: every call to [`run`](Self::run) starts over.
#[derive(Clone)]
pub struct BackupOrchestrator {
    databases: Arc<dyn DatabaseSnapshotService>,
    volumes: Arc<dyn VolumeSnapshotService>,
    clock: Arc<dyn Clock>,
}

impl BackupOrchestrator {
    pub fn new(
        databases: Arc<dyn DatabaseSnapshotService>,
        volumes: Arc<dyn VolumeSnapshotService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            databases,
            volumes,
            clock,
        }
    }

    /// Snapshot every configured resource and return what was created.
    ///
    /// Empty identifiers are skipped.
    pub async fn run(&self, config: &BackupConfig) -> BackupResult {
        let mut result = BackupResult::default();
        let mut db_failures = 0usize;
        let mut instance_failures = 0usize;

        let db_ids: Vec<&str> = non_empty(&config.rds_instance_ids).collect();
        for &db_id in &db_ids {
            match snapshot_database(
                self.databases.as_ref(),
                &config.tag,
                self.clock.as_ref(),
                db_id,
            )
            .await
            {
                Ok(snapshot) => {
                    tracing::info!(db_id, snapshot = %snapshot, "Database snapshot requested");
                    result.rds.push(DbSnapshotResult {
                        db: db_id.to_string(),
                        snapshot,
                    });
                }
                Err(e) => {
                    db_failures += 1;
                    tracing::error!(db_id, error = %e, "RDS snapshot error");
                }
            }
        }

        let instance_ids: Vec<&str> = non_empty(&config.ec2_instance_ids).collect();
        for &instance_id in &instance_ids {
            match snapshot_volumes_for_instance(
                self.volumes.as_ref(),
                &config.tag,
                config.volume_tag_policy,
                self.clock.as_ref(),
                instance_id,
            )
            .await
            {
                Ok(snapshots) => {
                    tracing::info!(
                        instance_id,
                        snapshot_count = snapshots.len(),
                        "Volume snapshots requested",
                    );
                    result.ebs.push(InstanceSnapshotResult {
                        instance: instance_id.to_string(),
                        snapshots,
                    });
                }
                Err(e) => {
                    instance_failures += 1;
                    tracing::error!(instance_id, error = %e, "EBS snapshot error");
                }
            }
        }

        tracing::info!(
            databases_attempted = db_ids.len(),
            databases_failed = db_failures,
            instances_attempted = instance_ids.len(),
            instances_failed = instance_failures,
            results = ?result,
            "Backup results",
        );

        result
    }
}

fn non_empty(ids: &[String]) -> impl Iterator<Item = &str> {
    ids.iter().map(String::as_str).filter(|id| !id.is_empty())
}
