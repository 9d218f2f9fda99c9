use anyhow::Result;
use clap::Parser;
use log::info;

use datasync_cli::cli::{Cli, Commands, TaskSubcommands};
use datasync_cli::commands::{migrate, profile, task};
use datasync_cli::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up AWS credentials from a local .env if present
    dotenvy::dotenv().ok();
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting datasync-cli");

    let mut config = Config::load()?;

    match cli.command {
        Commands::Migrate(args) => {
            let migration_config = config.resolve(args.profile.as_deref())?;
            migrate::run_command(migration_config).await?;
        }
        Commands::Task(task_commands) => match task_commands.command {
            TaskSubcommands::Create { profile } => {
                let migration_config = config.resolve(profile.as_deref())?;
                task::create_command(migration_config).await?;
            }
            TaskSubcommands::Start { task_arn, profile } => {
                let migration_config = config.resolve(profile.as_deref())?;
                task::start_command(migration_config, &task_arn).await?;
            }
        },
        Commands::Profile(profile_commands) => {
            profile::run_command(&mut config, profile_commands.command)?;
        }
    }

    Ok(())
}
