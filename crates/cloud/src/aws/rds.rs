use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rds::types::Tag;
use aws_sdk_rds::Client;
use snapguard_core::config::SnapshotTag;

use super::sdk_error;
use crate::error::CloudError;
use crate::provider::{CreatedDbSnapshot, DatabaseSnapshotService};

const OP_CREATE_DB_SNAPSHOT: &str = "CreateDBSnapshot";
const OP_ADD_TAGS_TO_RESOURCE: &str = "AddTagsToResource";

/// [`DatabaseSnapshotService`] backed by the RDS API.
#[derive(Debug, Clone)]
pub struct RdsSnapshotService {
    client: Client,
}

impl RdsSnapshotService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl DatabaseSnapshotService for RdsSnapshotService {
    async fn create_db_snapshot(
        &self,
        db_instance_id: &str,
        snapshot_id: &str,
    ) -> Result<CreatedDbSnapshot, CloudError> {
        let output = self
            .client
            .create_db_snapshot()
            .db_snapshot_identifier(snapshot_id)
            .db_instance_identifier(db_instance_id)
            .send()
            .await
            .map_err(|e| sdk_error(OP_CREATE_DB_SNAPSHOT, e))?;

        Ok(CreatedDbSnapshot {
            arn: output
                .db_snapshot()
                .and_then(|s| s.db_snapshot_arn())
                .map(str::to_string),
        })
    }

    async fn add_tag_to_resource(
        &self,
        resource_arn: &str,
        tag: &SnapshotTag,
    ) -> Result<(), CloudError> {
        self.client
            .add_tags_to_resource()
            .resource_name(resource_arn)
            .tags(Tag::builder().key(&tag.key).value(&tag.value).build())
            .send()
            .await
            .map_err(|e| sdk_error(OP_ADD_TAGS_TO_RESOURCE, e))?;
        Ok(())
    }
}
