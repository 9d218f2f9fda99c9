//! Integration tests for the migration client against a mocked transfer
//! service.

use async_trait::async_trait;
use datasync_cli::api::{MigrationClient, TaskSpec, TransferApi};
use datasync_cli::config::MigrationConfig;
use std::sync::{Arc, Mutex};

/// Call log shared between a mock and the test that owns it.
#[derive(Default)]
struct CallLog {
    create: Mutex<Vec<TaskSpec>>,
    start: Mutex<Vec<String>>,
}

struct MockTransferApi {
    task_arn: String,
    fail_create: bool,
    calls: Arc<CallLog>,
}

impl MockTransferApi {
    fn returning(task_arn: &str) -> (Box<Self>, Arc<CallLog>) {
        let calls = Arc::new(CallLog::default());
        let api = Box::new(Self {
            task_arn: task_arn.to_string(),
            fail_create: false,
            calls: Arc::clone(&calls),
        });
        (api, calls)
    }

    fn failing() -> (Box<Self>, Arc<CallLog>) {
        let calls = Arc::new(CallLog::default());
        let api = Box::new(Self {
            task_arn: String::new(),
            fail_create: true,
            calls: Arc::clone(&calls),
        });
        (api, calls)
    }
}

#[async_trait]
impl TransferApi for MockTransferApi {
    async fn create_task(&self, spec: &TaskSpec) -> anyhow::Result<String> {
        self.calls.create.lock().unwrap().push(spec.clone());
        if self.fail_create {
            anyhow::bail!("InvalidRequestException: location not found");
        }
        Ok(self.task_arn.clone())
    }

    async fn start_task(&self, task_arn: &str) -> anyhow::Result<()> {
        self.calls.start.lock().unwrap().push(task_arn.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn create_task_returns_service_task_arn() {
    let (api, _calls) = MockTransferApi::returning("mocked-task-arn");
    let client = MigrationClient::with_api(MigrationConfig::default(), api);

    let task_arn = client.create_task().await;

    assert_eq!(task_arn.as_deref(), Some("mocked-task-arn"));
}

#[tokio::test]
async fn create_task_sends_configured_resource_identifiers() {
    let (api, calls) = MockTransferApi::returning("mocked-task-arn");
    let config = MigrationConfig {
        source_location_arn: "arn:aws:datasync:us-east-1:123:location/loc-src".to_string(),
        destination_location_arn: "arn:aws:datasync:us-east-1:123:location/loc-dst".to_string(),
        log_group_arn: "arn:aws:logs:us-east-1:123:log-group:/datasync".to_string(),
        task_name: "nightly-sync".to_string(),
        ..Default::default()
    };
    let expected = TaskSpec::from_config(&config);

    let client = MigrationClient::with_api(config, api);
    client.create_task().await;

    let create_calls = calls.create.lock().unwrap();
    assert_eq!(create_calls.len(), 1);
    assert_eq!(create_calls[0], expected);
}

#[tokio::test]
async fn create_task_returns_none_when_handle_absent() {
    let client = MigrationClient::disconnected(MigrationConfig::default());

    assert_eq!(client.create_task().await, None);
}

#[tokio::test]
async fn create_task_returns_none_on_service_failure() {
    let (api, calls) = MockTransferApi::failing();
    let client = MigrationClient::with_api(MigrationConfig::default(), api);

    assert_eq!(client.create_task().await, None);
    // The request was attempted once; the failure was absorbed
    assert_eq!(calls.create.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn start_task_passes_arn_through_unmodified() {
    let (api, calls) = MockTransferApi::returning("mocked-task-arn");
    let client = MigrationClient::with_api(MigrationConfig::default(), api);

    client.start_task("test-task-arn").await;

    let start_calls = calls.start.lock().unwrap();
    assert_eq!(*start_calls, vec!["test-task-arn".to_string()]);
}

#[tokio::test]
async fn start_task_is_a_no_op_when_handle_absent() {
    let client = MigrationClient::disconnected(MigrationConfig::default());

    // Must return without panicking and without any service interaction
    client.start_task("test-task-arn").await;
    assert!(!client.is_connected());
}

#[tokio::test]
async fn full_flow_creates_then_starts_the_same_task() {
    let (api, calls) = MockTransferApi::returning("mocked-task-arn");
    let client = MigrationClient::with_api(MigrationConfig::default(), api);

    let task_arn = client.create_task().await.unwrap();
    client.start_task(&task_arn).await;

    assert_eq!(task_arn, "mocked-task-arn");
    assert_eq!(calls.create.lock().unwrap().len(), 1);
    assert_eq!(*calls.start.lock().unwrap(), vec!["mocked-task-arn".to_string()]);
}
