//! Deterministic snapshot names and descriptions.

use chrono::{DateTime, Utc};

/// `strftime` pattern for the timestamp suffix of database snapshot ids.
pub const DB_SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Prefix of every volume snapshot description.
pub const VOLUME_SNAPSHOT_DESCRIPTION_PREFIX: &str = "snapshot";

/// Build a database snapshot identifier: `{db_id}-{YYYYMMDDHHMMSS}`.
///
/// The timestamp is always rendered in UTC.
pub fn db_snapshot_identifier(db_id: &str, now: DateTime<Utc>) -> String {
    format!("{db_id}-{}", now.format(DB_SNAPSHOT_TIMESTAMP_FORMAT))
}

/// Build a volume snapshot description:
/// `snapshot-{instance_id}-{volume_id}-{epoch_seconds}`.
pub fn volume_snapshot_description(
    instance_id: &str,
    volume_id: &str,
    now: DateTime<Utc>,
) -> String {
    format!(
        "{VOLUME_SNAPSHOT_DESCRIPTION_PREFIX}-{instance_id}-{volume_id}-{}",
        now.timestamp()
    )
}
