use super::datasync::{DataSyncApi, TaskSpec, TransferApi};
use crate::config::MigrationConfig;
use log::{error, info};

/// Client for one NFS to S3 migration driven through a managed transfer
/// service.
///
/// The handle to the service is acquired once at construction. If that
/// fails the client stays usable, but `create_task` and `start_task`
/// become no-ops: every failure at this boundary is logged and converted
/// to an absent result, never propagated.
pub struct MigrationClient {
    config: MigrationConfig,
    api: Option<Box<dyn TransferApi>>,
}

impl MigrationClient {
    /// Connect to DataSync with the given settings. A connection failure
    /// is logged and leaves the handle absent.
    pub async fn new(config: MigrationConfig) -> Self {
        let api: Option<Box<dyn TransferApi>> = match DataSyncApi::connect(&config).await {
            Ok(api) => Some(Box::new(api)),
            Err(e) => {
                error!("Failed to create DataSync client: {:#}", e);
                None
            }
        };

        Self { config, api }
    }

    /// Create a client with a custom transfer-service implementation.
    pub fn with_api(config: MigrationConfig, api: Box<dyn TransferApi>) -> Self {
        Self {
            config,
            api: Some(api),
        }
    }

    /// Create a client whose handle is absent, as after a failed
    /// construction. Both operations are safe no-ops on it.
    pub fn disconnected(config: MigrationConfig) -> Self {
        Self { config, api: None }
    }

    pub fn is_connected(&self) -> bool {
        self.api.is_some()
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Create the transfer task for this migration.
    ///
    /// Returns the task ARN assigned by the service, or `None` if the
    /// handle is absent or the call failed.
    pub async fn create_task(&self) -> Option<String> {
        let api = self.api.as_ref()?;

        let spec = TaskSpec::from_config(&self.config);
        match api.create_task(&spec).await {
            Ok(task_arn) => {
                info!("Created DataSync task {}", task_arn);
                Some(task_arn)
            }
            Err(e) => {
                error!("Failed to create DataSync task: {:#}", e);
                None
            }
        }
    }

    /// Start execution of the task named by `task_arn`, verbatim.
    ///
    /// The transfer runs asynchronously inside the service; success here
    /// only means the start request was accepted. Outcome is logged, not
    /// returned.
    pub async fn start_task(&self, task_arn: &str) {
        let Some(api) = self.api.as_ref() else {
            return;
        };

        match api.start_task(task_arn).await {
            Ok(()) => info!("DataSync task {} started", task_arn),
            Err(e) => error!("Failed to start DataSync task: {:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FailingApi {
        start_calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TransferApi for FailingApi {
        async fn create_task(&self, _spec: &TaskSpec) -> anyhow::Result<String> {
            Err(anyhow!("service unavailable"))
        }

        async fn start_task(&self, task_arn: &str) -> anyhow::Result<()> {
            self.start_calls.lock().unwrap().push(task_arn.to_string());
            Err(anyhow!("service unavailable"))
        }
    }

    #[tokio::test]
    async fn disconnected_client_is_a_safe_no_op() {
        let client = MigrationClient::disconnected(MigrationConfig::default());

        assert!(!client.is_connected());
        assert_eq!(client.create_task().await, None);
        // Must not panic or call anything
        client.start_task("arn:aws:datasync:us-east-1:123:task/task-1").await;
    }

    #[tokio::test]
    async fn api_errors_become_absent_results() {
        let client =
            MigrationClient::with_api(MigrationConfig::default(), Box::new(FailingApi::default()));

        assert!(client.is_connected());
        assert_eq!(client.create_task().await, None);
        // A failing start is logged, not propagated
        client.start_task("some-arn").await;
    }
}
