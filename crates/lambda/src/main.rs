//! `snapguard-lambda` -- scheduled RDS and EBS snapshot trigger.
//!
//! Deployed as an AWS Lambda function invoked by a periodic schedule.
//! Each invocation snapshots the configured RDS instances and every
//! volume attached to the configured EC2 instances, tags the snapshots,
//! and returns a summary. Outside Lambda it performs a single run and
//! prints the summary as JSON.
//!
//! # Environment variables
//!
//! | Variable            | Required | Default         | Description                                   |
//! |---------------------|----------|-----------------|-----------------------------------------------|
//! | `RDS_INSTANCE_IDS`  | no       | --              | Comma-separated RDS instance identifiers      |
//! | `EC2_INSTANCE_IDS`  | no       | --              | Comma-separated EC2 instance identifiers      |
//! | `TAG_KEY`           | no       | `CreatedBy`     | Tag key applied to every snapshot             |
//! | `TAG_VALUE`         | no       | `lambda-backup` | Tag value applied to every snapshot           |
//! | `VOLUME_TAG_POLICY` | no       | `strict`        | `strict` or `best-effort` volume tag handling |
//! | `RUST_LOG`          | no       | `info`          | Log filter                                    |
//!
//! Region and credentials come from the standard AWS provider chain.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use snapguard_cloud::aws::{self, Ec2SnapshotService, RdsSnapshotService};
use snapguard_cloud::BackupOrchestrator;
use snapguard_core::clock::SystemClock;
use snapguard_core::config::BackupConfig;
use snapguard_lambda::handler::{BackupHandler, InvocationEvent};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Set by the Lambda execution environment.
const ENV_LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "snapguard_lambda=info,snapguard_cloud=info";

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    let in_lambda = std::env::var(ENV_LAMBDA_RUNTIME_API).is_ok();

    // CloudWatch timestamps every line and does not render ANSI.
    let fmt_layer = tracing_subscriber::fmt::layer().with_ansi(!in_lambda);
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    );
    if in_lambda {
        registry.with(fmt_layer.without_time()).init();
    } else {
        registry.with(fmt_layer).init();
    }

    let config = BackupConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(
        databases = ?config.rds_instance_ids,
        instances = ?config.ec2_instance_ids,
        tag_key = %config.tag.key,
        tag_value = %config.tag.value,
        volume_tag_policy = %config.volume_tag_policy,
        in_lambda,
        "Starting snapguard",
    );

    if config.is_empty() {
        tracing::warn!("No RDS or EC2 instance ids configured; runs will be no-ops");
    }

    let sdk_config = aws::load_sdk_config().await;
    let orchestrator = BackupOrchestrator::new(
        Arc::new(RdsSnapshotService::new(&sdk_config)),
        Arc::new(Ec2SnapshotService::new(&sdk_config)),
        Arc::new(SystemClock),
    );
    let handler = Arc::new(BackupHandler::new(orchestrator, config));

    if in_lambda {
        lambda_runtime::run(service_fn(move |event: LambdaEvent<InvocationEvent>| {
            let handler = Arc::clone(&handler);
            async move { Ok::<_, Error>(handler.handle(event.payload).await) }
        }))
        .await
    } else {
        let result = handler.handle(InvocationEvent::default()).await;
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }
}
