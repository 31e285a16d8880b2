//! Data layer for the home inventory client
//!
//! Turns raw HTTP exchanges into domain values:
//!
//! - [`adapter`]: status and body discrimination for every call
//! - [`policy`]: per-endpoint message remapping and empty-collection rules
//! - [`dto`]: wire shapes and their mapping to domain models
//! - [`sources`]: one remote data source per entity
//! - [`repositories`]: cold `Loading → terminal` streams over the sources

pub mod adapter;
pub mod dto;
pub mod endpoints;
pub mod messages;
pub mod policy;
pub mod repositories;
pub mod sources;

pub use adapter::{safe_call, safe_call_no_body};
pub use policy::{EmptyPolicy, ErrorPolicy};
pub use repositories::{remote_repositories, resource_stream};
pub use sources::RemoteSource;
