//! AWS SDK implementations of the provider traits.

mod ec2;
mod rds;

pub use ec2::Ec2SnapshotService;
pub use rds::RdsSnapshotService;

use aws_config::SdkConfig;
use aws_smithy_types::error::display::DisplayErrorContext;

use crate::error::CloudError;

/// Resolve region and credentials via the default provider chain.
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::load_from_env().await
}

/// Render an SDK error with its full source chain.
pub(crate) fn sdk_error<E>(operation: &'static str, err: E) -> CloudError
where
    E: std::error::Error,
{
    CloudError::api(operation, DisplayErrorContext(&err).to_string())
}
