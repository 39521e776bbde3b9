use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ec2::types::{Filter, Tag};
use aws_sdk_ec2::Client;
use snapguard_core::config::SnapshotTag;

use super::sdk_error;
use crate::error::CloudError;
use crate::provider::{AttachedVolume, VolumeSnapshotService};

const OP_DESCRIBE_VOLUMES: &str = "DescribeVolumes";
const OP_CREATE_SNAPSHOT: &str = "CreateSnapshot";
const OP_CREATE_TAGS: &str = "CreateTags";

/// Volume filter matching the instance a volume is attached to.
const FILTER_ATTACHMENT_INSTANCE_ID: &str = "attachment.instance-id";

/// [`VolumeSnapshotService`] backed by the EC2 API.
#[derive(Debug, Clone)]
pub struct Ec2SnapshotService {
    client: Client,
}

impl Ec2SnapshotService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl VolumeSnapshotService for Ec2SnapshotService {
    async fn list_attached_volumes(
        &self,
        instance_id: &str,
    ) -> Result<Vec<AttachedVolume>, CloudError> {
        let output = self
            .client
            .describe_volumes()
            .filters(
                Filter::builder()
                    .name(FILTER_ATTACHMENT_INSTANCE_ID)
                    .values(instance_id)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| sdk_error(OP_DESCRIBE_VOLUMES, e))?;

        output
            .volumes()
            .iter()
            .map(|v| {
                v.volume_id()
                    .map(|id| AttachedVolume {
                        volume_id: id.to_string(),
                    })
                    .ok_or(CloudError::MissingField {
                        operation: OP_DESCRIBE_VOLUMES,
                        field: "VolumeId",
                    })
            })
            .collect()
    }

    async fn create_volume_snapshot(
        &self,
        volume_id: &str,
        description: &str,
    ) -> Result<String, CloudError> {
        let output = self
            .client
            .create_snapshot()
            .volume_id(volume_id)
            .description(description)
            .send()
            .await
            .map_err(|e| sdk_error(OP_CREATE_SNAPSHOT, e))?;

        output
            .snapshot_id()
            .map(str::to_string)
            .ok_or(CloudError::MissingField {
                operation: OP_CREATE_SNAPSHOT,
                field: "SnapshotId",
            })
    }

    async fn create_tags(&self, resource_id: &str, tag: &SnapshotTag) -> Result<(), CloudError> {
        self.client
            .create_tags()
            .resources(resource_id)
            .tags(Tag::builder().key(&tag.key).value(&tag.value).build())
            .send()
            .await
            .map_err(|e| sdk_error(OP_CREATE_TAGS, e))?;
        Ok(())
    }
}
