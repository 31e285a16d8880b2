//! Domain models
//!
//! Ids are assigned by the server. A model built on the client carries id `0`
//! until the server answers with the persisted copy.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier
pub type EntityId = i64;

/// Id of a model that has not been persisted yet
pub const UNSAVED_ID: EntityId = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Home {
    pub id: EntityId,
    pub name: String,
    /// Id of the owning user
    pub owner: EntityId,
}

impl Home {
    pub fn new(name: impl Into<String>, owner: EntityId) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            owner,
        }
    }

    pub fn is_owned_by(&self, user_id: EntityId) -> bool {
        self.owner == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: EntityId,
    pub name: String,
    pub home_id: EntityId,
}

impl Room {
    pub fn new(name: impl Into<String>, home_id: EntityId) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            home_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Furniture {
    pub id: EntityId,
    pub name: String,
    pub room_id: EntityId,
}

impl Furniture {
    pub fn new(name: impl Into<String>, room_id: EntityId) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            room_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compartment {
    pub id: EntityId,
    pub name: String,
    pub furniture_id: EntityId,
}

impl Compartment {
    pub fn new(name: impl Into<String>, furniture_id: EntityId) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            furniture_id,
        }
    }
}

/// Item as it appears in lists (no tags)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub compartment_id: EntityId,
}

/// Tag shared by items of one home
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: EntityId,
    pub name: String,
    pub home_id: EntityId,
}

/// Full item with its tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: EntityId,
    pub name: String,
    pub compartment_id: EntityId,
    pub tags: Vec<Tag>,
}

impl ItemDetail {
    pub fn summary(&self) -> Item {
        Item {
            id: self.id,
            name: self.name.clone(),
            compartment_id: self.compartment_id,
        }
    }
}

/// Item to be created. Tags are sent by name and resolved by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub compartment_id: EntityId,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMove {
    pub item_id: EntityId,
    pub compartment_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
}

/// Homes of a user split by role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyHomes {
    pub owned: Vec<Home>,
    pub member: Vec<Home>,
}

impl MyHomes {
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty() && self.member.is_empty()
    }
}

/// Users of one home split by role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeUsers {
    pub owner: User,
    pub members: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: EntityId,
    pub inviter_id: EntityId,
    pub invitee_id: EntityId,
    pub home_id: EntityId,
}

/// Human-readable summary of an invitation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationInfo {
    pub id: EntityId,
    pub inviter_name: String,
    pub home_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationToSend {
    pub inviter_id: EntityId,
    pub invitee_username: String,
    pub home_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
}
