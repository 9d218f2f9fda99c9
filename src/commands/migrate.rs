use crate::api::MigrationClient;
use crate::config::MigrationConfig;
use anyhow::{Context, Result};
use log::info;

/// Run the full migration flow: create the transfer task, and if the
/// service handed back an ARN, start it.
///
/// Call failures are reported through the log and leave the process with a
/// clean exit; only an invalid configuration is an error here.
pub async fn run_command(migration_config: MigrationConfig) -> Result<()> {
    migration_config
        .validate()
        .context("Invalid migration configuration")?;

    info!(
        "Migrating {} to s3://{}",
        migration_config.nfs_path, migration_config.s3_bucket
    );

    let client = MigrationClient::new(migration_config).await;

    match client.create_task().await {
        Some(task_arn) => {
            println!("Created transfer task: {}", task_arn);
            client.start_task(&task_arn).await;
        }
        None => println!("No transfer task was created; nothing to start."),
    }

    Ok(())
}
