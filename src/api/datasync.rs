//! AWS DataSync bindings.
//!
//! `TransferApi` is the seam between the migration client and the managed
//! service; `DataSyncApi` is the production implementation on top of the
//! AWS SDK. Tests substitute their own implementations through
//! `MigrationClient::with_api`.

use crate::config::MigrationConfig;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_datasync::Client as DataSyncClient;
use log::debug;

/// Everything a DataSync transfer task is created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub source_location_arn: String,
    pub destination_location_arn: String,
    pub log_group_arn: String,
    pub name: String,
}

impl TaskSpec {
    pub fn from_config(config: &MigrationConfig) -> Self {
        Self {
            source_location_arn: config.source_location_arn.clone(),
            destination_location_arn: config.destination_location_arn.clone(),
            log_group_arn: config.log_group_arn.clone(),
            name: config.task_name.clone(),
        }
    }
}

/// The three external operations the migration needs from the transfer
/// service: obtain a handle, create a task, start it.
#[async_trait]
pub trait TransferApi: Send + Sync {
    /// Create a transfer task and return its ARN.
    async fn create_task(&self, spec: &TaskSpec) -> Result<String>;

    /// Start execution of a previously created task. The transfer itself
    /// runs inside the service; this call only kicks it off.
    async fn start_task(&self, task_arn: &str) -> Result<()>;
}

/// Production `TransferApi` backed by `aws_sdk_datasync`.
pub struct DataSyncApi {
    client: DataSyncClient,
}

impl DataSyncApi {
    /// Build a DataSync client from migration settings.
    pub async fn connect(config: &MigrationConfig) -> Result<Self> {
        let client = build_datasync_client(config).await?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TransferApi for DataSyncApi {
    async fn create_task(&self, spec: &TaskSpec) -> Result<String> {
        debug!("CreateTask: name={} source={}", spec.name, spec.source_location_arn);

        let response = self
            .client
            .create_task()
            .source_location_arn(&spec.source_location_arn)
            .destination_location_arn(&spec.destination_location_arn)
            .cloud_watch_log_group_arn(&spec.log_group_arn)
            .name(&spec.name)
            .send()
            .await
            .context("CreateTask request failed")?;

        response
            .task_arn()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("CreateTask response contained no task ARN"))
    }

    async fn start_task(&self, task_arn: &str) -> Result<()> {
        debug!("StartTaskExecution: {}", task_arn);

        self.client
            .start_task_execution()
            .task_arn(task_arn)
            .send()
            .await
            .context("StartTaskExecution request failed")?;

        Ok(())
    }
}

/// Create a DataSync client from configuration.
async fn build_datasync_client(config: &MigrationConfig) -> Result<DataSyncClient> {
    use aws_config::Region;

    let mut aws_config_loader = aws_config::defaults(BehaviorVersion::latest());

    // Set region if provided
    if let Some(region) = &config.region {
        aws_config_loader = aws_config_loader.region(Region::new(region.clone()));
    }

    // Set custom endpoint if provided (for LocalStack)
    if let Some(endpoint) = &config.endpoint {
        aws_config_loader = aws_config_loader.endpoint_url(endpoint);
    }

    // Set explicit credentials if provided; otherwise the default provider
    // chain (env, profile, instance metadata) applies
    if !config.access_key.is_empty() && !config.secret_key.is_empty() {
        let credentials = aws_sdk_datasync::config::Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "datasync-cli",
        );
        aws_config_loader = aws_config_loader.credentials_provider(credentials);
    }

    let aws_config = aws_config_loader.load().await;
    Ok(DataSyncClient::new(&aws_config))
}
