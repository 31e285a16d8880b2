//! Home inventory domain layer
//!
//! Models for the Home → Room → Furniture → Compartment → Item tree, the
//! three-state [`Resource`] every remote operation reports through, and the
//! repository traits the data layer implements.
//!
//! The domain layer defines only contracts. Transport, mapping and state
//! handling live in the outer crates.

pub mod errors;
pub mod models;
pub mod repositories;
pub mod resource;

pub use errors::{Failure, FailureKind};
pub use models::*;
pub use resource::{Resource, ResourceStream};
