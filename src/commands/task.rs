use crate::api::MigrationClient;
use crate::config::MigrationConfig;
use anyhow::{Context, Result};

/// `task create`: create a transfer task and print its ARN.
pub async fn create_command(migration_config: MigrationConfig) -> Result<()> {
    migration_config
        .validate()
        .context("Invalid migration configuration")?;

    let client = MigrationClient::new(migration_config).await;

    match client.create_task().await {
        Some(task_arn) => println!("{}", task_arn),
        None => println!("No transfer task was created."),
    }

    Ok(())
}

/// `task start`: start execution of an existing transfer task.
pub async fn start_command(migration_config: MigrationConfig, task_arn: &str) -> Result<()> {
    let client = MigrationClient::new(migration_config).await;
    client.start_task(task_arn).await;
    Ok(())
}
