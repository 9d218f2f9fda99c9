pub mod app;

pub use app::{
    Cli, Commands, MigrateArgs, ProfileCommands, ProfileSubcommands, TaskCommands, TaskSubcommands,
};
