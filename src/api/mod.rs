//! Transfer-service API layer.
//!
//! `MigrationClient` owns the configuration and an optional handle to the
//! managed transfer service; `datasync` holds the service bindings behind
//! the `TransferApi` seam.

pub mod client;
pub mod datasync;

pub use client::MigrationClient;
pub use datasync::{DataSyncApi, TaskSpec, TransferApi};
