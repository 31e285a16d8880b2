//! REST paths, relative to the configured base URL

use homeinv_domain::EntityId;

pub const HOMES: &str = "homes";
pub const ROOMS: &str = "rooms";
pub const FURNITURE: &str = "furniture";
pub const COMPARTMENTS: &str = "compartments";
pub const ITEMS: &str = "items";
pub const ITEMS_MOVE: &str = "items/move";
pub const USERS: &str = "users";
pub const USERS_LOGIN: &str = "users/login";
pub const INVITATIONS_SEND: &str = "invitations/send";

/// Query parameter of the item search endpoint
pub const SEARCH_WORD_PARAM: &str = "search_word";

pub fn homes_by_user(user_id: EntityId) -> String {
    format!("homes/{user_id}")
}

pub fn home_by_id(id: EntityId) -> String {
    format!("homes/single/{id}")
}

pub fn home(id: EntityId) -> String {
    format!("homes/{id}")
}

pub fn rooms_by_home(home_id: EntityId) -> String {
    format!("rooms/home/{home_id}")
}

pub fn room(id: EntityId) -> String {
    format!("rooms/{id}")
}

pub fn furniture_by_room(room_id: EntityId) -> String {
    format!("furniture/room/{room_id}")
}

pub fn furniture(id: EntityId) -> String {
    format!("furniture/{id}")
}

pub fn compartments_by_furniture(furniture_id: EntityId) -> String {
    format!("compartments/furniture/{furniture_id}")
}

pub fn compartment(id: EntityId) -> String {
    format!("compartments/{id}")
}

pub fn items_by_compartment(compartment_id: EntityId) -> String {
    format!("items/comp/{compartment_id}")
}

pub fn items_by_home(home_id: EntityId) -> String {
    format!("items/home/{home_id}")
}

pub fn item(id: EntityId) -> String {
    format!("items/{id}")
}

pub fn item_route(id: EntityId) -> String {
    format!("items/route/{id}")
}

pub fn user(id: EntityId) -> String {
    format!("users/{id}")
}

/// Username is percent-encoded so it stays a single path segment
pub fn user_by_username(username: &str) -> String {
    format!("users/name/{}", urlencoding::encode(username))
}

pub fn users_by_home(home_id: EntityId) -> String {
    format!("users/home/{home_id}")
}

pub fn invitations_by_user(user_id: EntityId) -> String {
    format!("invitations/{user_id}")
}

pub fn invitation_info(id: EntityId) -> String {
    format!("invitations/info/{id}")
}

pub fn accept_invitation(id: EntityId) -> String {
    format!("invitations/accept/{id}")
}

pub fn decline_invitation(id: EntityId) -> String {
    format!("invitations/decline/{id}")
}
