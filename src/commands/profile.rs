use crate::cli::ProfileSubcommands;
use crate::config::{Config, MigrationConfig};
use anyhow::{Context, Result};

pub fn run_command(config: &mut Config, command: ProfileSubcommands) -> Result<()> {
    match command {
        ProfileSubcommands::Set {
            name,
            nfs_path,
            s3_bucket,
            source_location_arn,
            destination_location_arn,
            log_group_arn,
            task_name,
            region,
            endpoint,
        } => {
            let defaults = MigrationConfig::default();
            let migration_config = MigrationConfig {
                nfs_path,
                s3_bucket,
                access_key: String::new(),
                secret_key: String::new(),
                source_location_arn: source_location_arn.unwrap_or(defaults.source_location_arn),
                destination_location_arn: destination_location_arn
                    .unwrap_or(defaults.destination_location_arn),
                log_group_arn: log_group_arn.unwrap_or(defaults.log_group_arn),
                task_name: task_name.unwrap_or(defaults.task_name),
                region,
                endpoint,
            };
            config.add_profile(name.clone(), migration_config)?;
            println!("Profile '{}' saved.", name);
        }
        ProfileSubcommands::Show { name } => {
            let (name, profile) = match &name {
                Some(name) => (
                    name.as_str(),
                    config
                        .get_profile(name)
                        .with_context(|| format!("Profile '{}' not found", name))?,
                ),
                None => {
                    let name = config
                        .current_profile
                        .as_deref()
                        .context("No current profile set")?;
                    (
                        name,
                        config
                            .get_profile(name)
                            .with_context(|| format!("Profile '{}' not found", name))?,
                    )
                }
            };
            println!("Profile: {}", name);
            println!("  NFS path:       {}", profile.nfs_path);
            println!("  S3 bucket:      {}", profile.s3_bucket);
            println!("  Source ARN:     {}", profile.source_location_arn);
            println!("  Destination ARN {}", profile.destination_location_arn);
            println!("  Log group ARN:  {}", profile.log_group_arn);
            println!("  Task name:      {}", profile.task_name);
            if let Some(region) = &profile.region {
                println!("  Region:         {}", region);
            }
            if let Some(endpoint) = &profile.endpoint {
                println!("  Endpoint:       {}", endpoint);
            }
        }
        ProfileSubcommands::List => {
            if config.profiles.is_empty() {
                println!("No profiles configured.");
            }
            let mut names: Vec<&String> = config.profiles.keys().collect();
            names.sort();
            for name in names {
                let marker = if config.current_profile.as_deref() == Some(name.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{} {}", marker, name);
            }
        }
        ProfileSubcommands::Use { name } => {
            config.set_current_profile(&name)?;
            println!("Current profile set to '{}'.", name);
        }
    }

    Ok(())
}
