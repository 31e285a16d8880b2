//! Presentation layer for the home inventory client
//!
//! One state container per screen. A screen receives events through
//! [`Screen::dispatch`], runs use cases in tasks it owns and exposes:
//!
//! - its state as a `watch` channel, re-published on every change
//! - one-shot effects (navigation, confirmations) delivered exactly once
//!
//! Rendering is left to the caller.

pub mod screens;
pub mod store;

pub use screens::*;
pub use store::{Store, StoreHandle, ViewState};
