//! Repository interfaces
//!
//! Each method returns a cold [`ResourceStream`]: subscribing performs the
//! remote call once and yields `Loading` followed by one terminal state.
//! Implementations live in the data crate.

use std::sync::Arc;

use crate::{
    models::*,
    resource::ResourceStream,
};

/// Homes and their lifecycle
pub trait HomeRepository: Send + Sync {
    /// Homes the user owns or is a member of
    fn homes_by_user(&self, user_id: EntityId) -> ResourceStream<MyHomes>;

    fn home_by_id(&self, id: EntityId) -> ResourceStream<Home>;

    fn save_home(&self, home: Home) -> ResourceStream<Home>;

    fn update_home(&self, home: Home) -> ResourceStream<Home>;

    fn delete_home(&self, id: EntityId) -> ResourceStream<()>;
}

pub trait RoomRepository: Send + Sync {
    fn rooms_by_home(&self, home_id: EntityId) -> ResourceStream<Vec<Room>>;

    fn room_by_id(&self, id: EntityId) -> ResourceStream<Room>;

    fn save_room(&self, room: Room) -> ResourceStream<Room>;

    fn update_room(&self, room: Room) -> ResourceStream<Room>;

    fn delete_room(&self, id: EntityId) -> ResourceStream<()>;
}

pub trait FurnitureRepository: Send + Sync {
    fn furniture_by_room(&self, room_id: EntityId) -> ResourceStream<Vec<Furniture>>;

    fn furniture_by_id(&self, id: EntityId) -> ResourceStream<Furniture>;

    fn save_furniture(&self, furniture: Furniture) -> ResourceStream<Furniture>;

    fn update_furniture(&self, furniture: Furniture) -> ResourceStream<Furniture>;

    fn delete_furniture(&self, id: EntityId) -> ResourceStream<()>;
}

pub trait CompartmentRepository: Send + Sync {
    fn compartments_by_furniture(&self, furniture_id: EntityId)
        -> ResourceStream<Vec<Compartment>>;

    fn compartment_by_id(&self, id: EntityId) -> ResourceStream<Compartment>;

    fn save_compartment(&self, compartment: Compartment) -> ResourceStream<Compartment>;

    fn update_compartment(&self, compartment: Compartment) -> ResourceStream<Compartment>;

    fn delete_compartment(&self, id: EntityId) -> ResourceStream<()>;
}

pub trait ItemRepository: Send + Sync {
    fn items_by_compartment(&self, compartment_id: EntityId) -> ResourceStream<Vec<Item>>;

    /// Items of a home whose name matches `word`
    fn items_by_search(&self, home_id: EntityId, word: String) -> ResourceStream<Vec<Item>>;

    fn item_by_id(&self, id: EntityId) -> ResourceStream<ItemDetail>;

    fn save_item(&self, item: NewItem) -> ResourceStream<ItemDetail>;

    fn update_item(&self, item: ItemDetail) -> ResourceStream<ItemDetail>;

    fn delete_item(&self, id: EntityId) -> ResourceStream<()>;

    fn move_item(&self, item_move: ItemMove) -> ResourceStream<()>;

    /// Human-readable location path of an item, e.g. `Home > Room > Shelf > Box`
    fn item_route(&self, id: EntityId) -> ResourceStream<String>;
}

pub trait UserRepository: Send + Sync {
    /// Resolves to the id of the logged-in user
    fn login(&self, credentials: Credentials) -> ResourceStream<EntityId>;

    fn register(&self, registration: Registration) -> ResourceStream<()>;

    fn user_by_id(&self, id: EntityId) -> ResourceStream<User>;

    fn user_by_username(&self, username: String) -> ResourceStream<User>;

    fn home_users(&self, home_id: EntityId) -> ResourceStream<HomeUsers>;

    fn delete_user(&self, id: EntityId) -> ResourceStream<()>;
}

pub trait InvitationRepository: Send + Sync {
    fn send_invitation(&self, invitation: InvitationToSend) -> ResourceStream<()>;

    fn invitations_by_user(&self, user_id: EntityId) -> ResourceStream<Vec<Invitation>>;

    fn invitation_info(&self, id: EntityId) -> ResourceStream<InvitationInfo>;

    fn accept_invitation(&self, id: EntityId) -> ResourceStream<()>;

    fn decline_invitation(&self, id: EntityId) -> ResourceStream<()>;
}

/// One handle per repository, shared by everything above the data layer
#[derive(Clone)]
pub struct Repositories {
    pub homes: Arc<dyn HomeRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub furniture: Arc<dyn FurnitureRepository>,
    pub compartments: Arc<dyn CompartmentRepository>,
    pub items: Arc<dyn ItemRepository>,
    pub users: Arc<dyn UserRepository>,
    pub invitations: Arc<dyn InvitationRepository>,
}
