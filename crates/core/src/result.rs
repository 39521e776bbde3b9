//! Summary of a single backup run.
//!
//! Serialises to the invocation response shape:
//! `{"rds": [{"db", "snapshot"}], "ebs": [{"instance", "snapshots"}]}`.
//! Only snapshots the provider actually created appear here; a failed
//! resource contributes no entry.

use serde::{Deserialize, Serialize};

/// One successfully created database snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbSnapshotResult {
    /// Source database instance identifier.
    pub db: String,
    /// Identifier of the created snapshot.
    pub snapshot: String,
}

/// Snapshots created for the attached volumes of one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSnapshotResult {
    /// Source compute instance identifier.
    pub instance: String,
    /// Snapshot ids in volume processing order.
    pub snapshots: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupResult {
    pub rds: Vec<DbSnapshotResult>,
    pub ebs: Vec<InstanceSnapshotResult>,
}

impl BackupResult {
    pub fn is_empty(&self) -> bool {
        self.rds.is_empty() && self.ebs.is_empty()
    }

    /// Total number of snapshots across both categories.
    pub fn snapshot_count(&self) -> usize {
        self.rds.len() + self.ebs.iter().map(|e| e.snapshots.len()).sum::<usize>()
    }
}
