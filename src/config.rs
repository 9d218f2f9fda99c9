use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one NFS to S3 migration: where the data lives, which
/// DataSync resources describe the transfer, and how to reach AWS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Local path of the NFS directory being migrated.
    pub nfs_path: String,
    /// Destination S3 bucket name.
    pub s3_bucket: String,
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: String,
    /// DataSync location ARN for the NFS source.
    #[serde(default = "default_source_location_arn")]
    pub source_location_arn: String,
    /// DataSync location ARN for the S3 destination.
    #[serde(default = "default_destination_location_arn")]
    pub destination_location_arn: String,
    /// CloudWatch log group ARN the task writes transfer logs to.
    #[serde(default = "default_log_group_arn")]
    pub log_group_arn: String,
    #[serde(default = "default_task_name")]
    pub task_name: String,
    pub region: Option<String>,
    /// Custom endpoint URL (for LocalStack/testing).
    pub endpoint: Option<String>,
}

fn default_source_location_arn() -> String {
    "YourNFSLocationArn".to_string()
}

fn default_destination_location_arn() -> String {
    "YourS3LocationArn".to_string()
}

fn default_log_group_arn() -> String {
    "YourCloudWatchLogGroupArn".to_string()
}

fn default_task_name() -> String {
    "NFS-to-S3-Migration-Task".to_string()
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            nfs_path: "/path/to/nfs/folder".to_string(),
            s3_bucket: "your-s3-bucket-name".to_string(),
            access_key: String::new(),
            secret_key: String::new(),
            source_location_arn: default_source_location_arn(),
            destination_location_arn: default_destination_location_arn(),
            log_group_arn: default_log_group_arn(),
            task_name: default_task_name(),
            region: None,
            endpoint: None,
        }
    }
}

impl MigrationConfig {
    /// Replace stored credentials with `AWS_ACCESS_KEY_ID` /
    /// `AWS_SECRET_ACCESS_KEY` when those are set, so secrets never have
    /// to live in the config file.
    pub fn apply_env_credentials(&mut self) {
        self.apply_credential_overrides(
            std::env::var("AWS_ACCESS_KEY_ID").ok(),
            std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
        );
    }

    pub(crate) fn apply_credential_overrides(
        &mut self,
        access_key: Option<String>,
        secret_key: Option<String>,
    ) {
        if let Some(access_key) = access_key {
            debug!("Using access key from environment");
            self.access_key = access_key;
        }
        if let Some(secret_key) = secret_key {
            self.secret_key = secret_key;
        }
    }

    /// Preflight check before any API call is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.nfs_path.is_empty() {
            bail!("nfs_path must not be empty");
        }
        if self.s3_bucket.is_empty() {
            bail!("s3_bucket must not be empty");
        }
        if self.source_location_arn.is_empty() || self.destination_location_arn.is_empty() {
            bail!("source and destination location ARNs must not be empty");
        }
        if self.task_name.is_empty() {
            bail!("task_name must not be empty");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub current_profile: Option<String>,
    pub profiles: HashMap<String, MigrationConfig>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("datasync-cli")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".datasync-cli")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config with {} profiles", config.profiles.len());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn add_profile(&mut self, name: String, migration_config: MigrationConfig) -> Result<()> {
        info!("Adding profile: {}", name);
        self.profiles.insert(name.clone(), migration_config);

        // Set as current profile if it's the first one
        if self.current_profile.is_none() {
            self.current_profile = Some(name.clone());
            info!("Set {} as current profile", name);
        }

        self.save()
    }

    pub fn set_current_profile(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            bail!("Profile '{}' not found", name);
        }
        self.current_profile = Some(name.to_string());
        self.save()
    }

    pub fn get_profile(&self, name: &str) -> Option<&MigrationConfig> {
        self.profiles.get(name)
    }

    pub fn get_current(&self) -> Option<&MigrationConfig> {
        let current = self.current_profile.as_ref()?;
        self.profiles.get(current)
    }

    /// Pick the migration settings for a run: an explicitly named profile,
    /// else the current one, else the built-in placeholder defaults. Env
    /// credentials are applied on top either way.
    pub fn resolve(&self, profile: Option<&str>) -> Result<MigrationConfig> {
        let mut migration_config = match profile {
            Some(name) => self
                .get_profile(name)
                .cloned()
                .with_context(|| format!("Profile '{}' not found", name))?,
            None => self.get_current().cloned().unwrap_or_default(),
        };
        migration_config.apply_env_credentials();
        Ok(migration_config)
    }
}
