//! Use cases, one struct per operation
//!
//! Each use case wraps a single repository and exposes `execute`. They hold no
//! state beyond the repository handle, so they are cheap to clone and share.

/// Declares a use case struct holding one repository handle
macro_rules! use_case {
    ($(#[$meta:meta])* $name:ident, $repository:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            repository: std::sync::Arc<dyn homeinv_domain::repositories::$repository>,
        }

        impl $name {
            pub fn new(repository: std::sync::Arc<dyn homeinv_domain::repositories::$repository>) -> Self {
                Self { repository }
            }
        }
    };
}

mod compartment;
mod furniture;
mod home;
mod invitation;
mod item;
mod room;
mod user;

use homeinv_domain::repositories::Repositories;

use crate::errors::{ApplicationError, ApplicationResult};

pub use compartment::*;
pub use furniture::*;
pub use home::*;
pub use invitation::*;
pub use item::*;
pub use room::*;
pub use user::*;

/// Trimmed, non-empty display name
pub fn require_name(name: &str) -> ApplicationResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::ValidationFailed(
            "name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Every use case, grouped by entity
#[derive(Clone)]
pub struct UseCases {
    pub homes: HomeUseCases,
    pub rooms: RoomUseCases,
    pub furniture: FurnitureUseCases,
    pub compartments: CompartmentUseCases,
    pub items: ItemUseCases,
    pub users: UserUseCases,
    pub invitations: InvitationUseCases,
}

impl UseCases {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            homes: HomeUseCases::new(repositories.homes.clone()),
            rooms: RoomUseCases::new(repositories.rooms.clone()),
            furniture: FurnitureUseCases::new(repositories.furniture.clone()),
            compartments: CompartmentUseCases::new(repositories.compartments.clone()),
            items: ItemUseCases::new(repositories.items.clone()),
            users: UserUseCases::new(repositories.users.clone()),
            invitations: InvitationUseCases::new(repositories.invitations.clone()),
        }
    }
}
