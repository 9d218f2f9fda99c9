use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "datasync-cli")]
#[command(about = "A CLI tool for driving NFS to S3 migrations with AWS DataSync")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a transfer task and start it
    Migrate(MigrateArgs),
    /// Individual transfer-task operations
    Task(TaskCommands),
    /// Migration profile management
    Profile(ProfileCommands),
}

#[derive(Args)]
pub struct MigrateArgs {
    /// Profile to migrate with (defaults to the current profile)
    #[arg(long)]
    pub profile: Option<String>,
}

#[derive(Args)]
pub struct TaskCommands {
    #[command(subcommand)]
    pub command: TaskSubcommands,
}

#[derive(Subcommand)]
pub enum TaskSubcommands {
    /// Create a transfer task and print its ARN
    Create {
        /// Profile to use (defaults to the current profile)
        #[arg(long)]
        profile: Option<String>,
    },
    /// Start execution of an existing transfer task
    Start {
        /// ARN of the task to start
        task_arn: String,
        /// Profile to use (defaults to the current profile)
        #[arg(long)]
        profile: Option<String>,
    },
}

#[derive(Args)]
pub struct ProfileCommands {
    #[command(subcommand)]
    pub command: ProfileSubcommands,
}

#[derive(Subcommand)]
pub enum ProfileSubcommands {
    /// Add or replace a migration profile
    Set {
        /// Profile name
        name: String,
        /// Local path of the NFS directory
        #[arg(long)]
        nfs_path: String,
        /// Destination S3 bucket name
        #[arg(long)]
        s3_bucket: String,
        /// DataSync location ARN for the NFS source
        #[arg(long)]
        source_location_arn: Option<String>,
        /// DataSync location ARN for the S3 destination
        #[arg(long)]
        destination_location_arn: Option<String>,
        /// CloudWatch log group ARN for transfer logs
        #[arg(long)]
        log_group_arn: Option<String>,
        /// Name given to created transfer tasks
        #[arg(long)]
        task_name: Option<String>,
        /// AWS region
        #[arg(long)]
        region: Option<String>,
        /// Custom endpoint URL (for LocalStack/testing)
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Show a profile (defaults to the current one)
    Show { name: Option<String> },
    /// List all profiles
    List,
    /// Select the current profile
    Use { name: String },
}
