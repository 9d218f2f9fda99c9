pub mod migrate;
pub mod profile;
pub mod task;
