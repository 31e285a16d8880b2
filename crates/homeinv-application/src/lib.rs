//! Home inventory application layer
//!
//! Use cases sit between the screens and the repositories. Each one exposes a
//! single `execute` returning the repository's resource stream; some assemble
//! domain values from primitives on the way.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Presentation (screens)                    │
//! └──────────────────────────────────────────────────────────────┘
//!                              │ execute(..)
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Application: use cases  │  SessionContext                    │
//! └──────────────────────────────────────────────────────────────┘
//!                              │ ResourceStream<T>
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │         Domain: models, Resource, repository traits           │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod errors;
pub mod session;
pub mod usecases;

pub use errors::{ApplicationError, ApplicationResult};
pub use session::SessionContext;
pub use usecases::UseCases;
