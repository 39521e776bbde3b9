//! Backup configuration loaded once at process start.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Env var holding comma-separated RDS instance identifiers.
pub const ENV_RDS_INSTANCE_IDS: &str = "RDS_INSTANCE_IDS";
/// Env var holding comma-separated EC2 instance identifiers.
pub const ENV_EC2_INSTANCE_IDS: &str = "EC2_INSTANCE_IDS";
/// Env var overriding the tag key. A blank value is passed through; the
/// provider rejects it at tagging time like any other tag failure.
pub const ENV_TAG_KEY: &str = "TAG_KEY";
/// Env var overriding the tag value.
pub const ENV_TAG_VALUE: &str = "TAG_VALUE";
/// Env var selecting how volume snapshot tagging failures are treated.
pub const ENV_VOLUME_TAG_POLICY: &str = "VOLUME_TAG_POLICY";

/// Default tag key applied to created snapshots.
pub const DEFAULT_TAG_KEY: &str = "CreatedBy";
/// Default tag value applied to created snapshots.
pub const DEFAULT_TAG_VALUE: &str = "lambda-backup";

/// Key/value tag attached to every snapshot the trigger creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotTag {
    pub key: String,
    pub value: String,
}

impl Default for SnapshotTag {
    fn default() -> Self {
        Self {
            key: DEFAULT_TAG_KEY.to_string(),
            value: DEFAULT_TAG_VALUE.to_string(),
        }
    }
}

/// What happens when tagging a freshly created volume snapshot fails.
///
/// Database snapshot tagging is always best-effort. Volume snapshot
/// tagging defaults to `Strict`, which aborts the remaining volumes of
/// that instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// Tag failure fails the instance.
    #[default]
    Strict,
    /// Tag failure is logged and the snapshot is still reported.
    BestEffort,
}

impl TagPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::BestEffort => "best-effort",
        }
    }
}

impl fmt::Display for TagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "best-effort" | "best_effort" => Ok(Self::BestEffort),
            other => Err(CoreError::Config {
                key: ENV_VOLUME_TAG_POLICY,
                message: format!("unknown policy '{other}', expected 'strict' or 'best-effort'"),
            }),
        }
    }
}

/// Immutable configuration for a backup run.
///
/// Built once at startup and passed by reference to the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct BackupConfig {
    /// RDS instance identifiers to snapshot, in order.
    pub rds_instance_ids: Vec<String>,
    /// EC2 instance identifiers whose attached volumes are snapshotted.
    pub ec2_instance_ids: Vec<String>,
    /// Tag applied to every created snapshot.
    pub tag: SnapshotTag,
    /// Handling of volume snapshot tag failures.
    pub volume_tag_policy: TagPolicy,
}

impl BackupConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default         |
    /// |----------------------|-----------------|
    /// | `RDS_INSTANCE_IDS`   | (empty)         |
    /// | `EC2_INSTANCE_IDS`   | (empty)         |
    /// | `TAG_KEY`            | `CreatedBy`     |
    /// | `TAG_VALUE`          | `lambda-backup` |
    /// | `VOLUME_TAG_POLICY`  | `strict`        |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rds_instance_ids = lookup(ENV_RDS_INSTANCE_IDS)
            .map(|raw| parse_id_list(&raw))
            .unwrap_or_default();

        let ec2_instance_ids = lookup(ENV_EC2_INSTANCE_IDS)
            .map(|raw| parse_id_list(&raw))
            .unwrap_or_default();

        let tag = SnapshotTag {
            key: lookup(ENV_TAG_KEY).unwrap_or_else(|| DEFAULT_TAG_KEY.into()),
            value: lookup(ENV_TAG_VALUE).unwrap_or_else(|| DEFAULT_TAG_VALUE.into()),
        };

        let volume_tag_policy = match lookup(ENV_VOLUME_TAG_POLICY) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => TagPolicy::default(),
        };

        Ok(Self {
            rds_instance_ids,
            ec2_instance_ids,
            tag,
            volume_tag_policy,
        })
    }

    /// `true` when neither list names anything to back up.
    pub fn is_empty(&self) -> bool {
        self.rds_instance_ids.iter().all(|id| id.is_empty())
            && self.ec2_instance_ids.iter().all(|id| id.is_empty())
    }
}

/// Split a comma-separated identifier list, trimming whitespace and
/// dropping empty segments.
pub fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
