//! Shared fakes for the cloud integration tests.
//!
//! Both services record every call in order and fail on demand.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use snapguard_cloud::provider::{
    AttachedVolume, CreatedDbSnapshot, DatabaseSnapshotService, VolumeSnapshotService,
};
use snapguard_cloud::CloudError;
use snapguard_core::clock::FixedClock;
use snapguard_core::config::SnapshotTag;

/// 2024-01-02T03:04:05Z
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

pub fn test_clock() -> FixedClock {
    FixedClock(test_instant())
}

// ---------------------------------------------------------------------------
// Database fake
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbCall {
    CreateSnapshot { db_id: String, snapshot_id: String },
    AddTag { arn: String, key: String, value: String },
}

#[derive(Default)]
pub struct FakeDatabaseService {
    /// Database ids whose create call fails.
    pub fail_create: HashSet<String>,
    /// Every tag call fails.
    pub fail_tag: bool,
    /// Create responses carry no ARN.
    pub omit_arn: bool,
    pub calls: Mutex<Vec<DbCall>>,
}

impl FakeDatabaseService {
    pub fn failing_for(ids: &[&str]) -> Self {
        Self {
            fail_create: ids.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<DbCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                DbCall::CreateSnapshot { db_id, .. } => Some(db_id),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl DatabaseSnapshotService for FakeDatabaseService {
    async fn create_db_snapshot(
        &self,
        db_instance_id: &str,
        snapshot_id: &str,
    ) -> Result<CreatedDbSnapshot, CloudError> {
        self.calls.lock().unwrap().push(DbCall::CreateSnapshot {
            db_id: db_instance_id.to_string(),
            snapshot_id: snapshot_id.to_string(),
        });

        if self.fail_create.contains(db_instance_id) {
            return Err(CloudError::api("CreateDBSnapshot", "DBInstanceNotFound"));
        }

        Ok(CreatedDbSnapshot {
            arn: (!self.omit_arn)
                .then(|| format!("arn:aws:rds:eu-west-1:123456789012:snapshot:{snapshot_id}")),
        })
    }

    async fn add_tag_to_resource(
        &self,
        resource_arn: &str,
        tag: &SnapshotTag,
    ) -> Result<(), CloudError> {
        self.calls.lock().unwrap().push(DbCall::AddTag {
            arn: resource_arn.to_string(),
            key: tag.key.clone(),
            value: tag.value.clone(),
        });

        if self.fail_tag {
            return Err(CloudError::api("AddTagsToResource", "AccessDenied"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Volume fake
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeCall {
    List { instance_id: String },
    CreateSnapshot { volume_id: String, description: String },
    CreateTags { resource_id: String, key: String, value: String },
}

/// Snapshot ids are `snap-{volume_id}`.
#[derive(Default)]
pub struct FakeVolumeService {
    /// Attached volumes per instance, in listing order.
    pub volumes: HashMap<String, Vec<String>>,
    /// Instances whose listing fails.
    pub fail_list: HashSet<String>,
    /// Volumes whose snapshot fails.
    pub fail_snapshot: HashSet<String>,
    /// Snapshot ids whose tagging fails.
    pub fail_tag: HashSet<String>,
    pub calls: Mutex<Vec<VolumeCall>>,
}

impl FakeVolumeService {
    pub fn with_volumes(pairs: &[(&str, &[&str])]) -> Self {
        Self {
            volumes: pairs
                .iter()
                .map(|(instance, vols)| {
                    (
                        instance.to_string(),
                        vols.iter().map(|v| v.to_string()).collect(),
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<VolumeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn snapshot_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                VolumeCall::CreateSnapshot { volume_id, .. } => Some(volume_id),
                _ => None,
            })
            .collect()
    }

    pub fn listed_instances(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                VolumeCall::List { instance_id } => Some(instance_id),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl VolumeSnapshotService for FakeVolumeService {
    async fn list_attached_volumes(
        &self,
        instance_id: &str,
    ) -> Result<Vec<AttachedVolume>, CloudError> {
        self.calls.lock().unwrap().push(VolumeCall::List {
            instance_id: instance_id.to_string(),
        });

        if self.fail_list.contains(instance_id) {
            return Err(CloudError::api("DescribeVolumes", "UnauthorizedOperation"));
        }

        Ok(self
            .volumes
            .get(instance_id)
            .into_iter()
            .flatten()
            .map(|v| AttachedVolume {
                volume_id: v.clone(),
            })
            .collect())
    }

    async fn create_volume_snapshot(
        &self,
        volume_id: &str,
        description: &str,
    ) -> Result<String, CloudError> {
        self.calls.lock().unwrap().push(VolumeCall::CreateSnapshot {
            volume_id: volume_id.to_string(),
            description: description.to_string(),
        });

        if self.fail_snapshot.contains(volume_id) {
            return Err(CloudError::api("CreateSnapshot", "IncorrectState"));
        }
        Ok(format!("snap-{volume_id}"))
    }

    async fn create_tags(&self, resource_id: &str, tag: &SnapshotTag) -> Result<(), CloudError> {
        self.calls.lock().unwrap().push(VolumeCall::CreateTags {
            resource_id: resource_id.to_string(),
            key: tag.key.clone(),
            value: tag.value.clone(),
        });

        if self.fail_tag.contains(resource_id) {
            return Err(CloudError::api("CreateTags", "RequestLimitExceeded"));
        }
        Ok(())
    }
}
