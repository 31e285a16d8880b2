//! Wire representations
//!
//! Field names follow the service's camelCase JSON. Each response shape maps
//! into its domain model; each request shape is built from domain values.

use homeinv_domain::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDto {
    pub id: EntityId,
    pub home_name: String,
    pub owned_by: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHomeDto {
    pub home_name: String,
    pub owned_by: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeUpdateDto {
    pub id: EntityId,
    pub home_name: String,
}

/// Homes of a user keyed by role. Either partition may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MyHomesDto {
    #[serde(rename = "OWNER", default)]
    pub owner: Option<Vec<HomeDto>>,
    #[serde(rename = "MEMBER", default)]
    pub member: Option<Vec<HomeDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: EntityId,
    pub room_name: String,
    pub home_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoomDto {
    pub room_name: String,
    pub home_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureDto {
    pub id: EntityId,
    pub furn_name: String,
    pub room_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFurnitureDto {
    pub furn_name: String,
    pub room_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureUpdateDto {
    pub id: EntityId,
    pub furn_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompartmentDto {
    pub id: EntityId,
    pub comp_name: String,
    pub furn_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompartmentDto {
    pub comp_name: String,
    pub furn_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompartmentUpdateDto {
    pub id: EntityId,
    pub comp_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: EntityId,
    pub item_name: String,
    pub comp_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: EntityId,
    pub tag_name: String,
    pub home_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetailDto {
    pub id: EntityId,
    pub item_name: String,
    pub comp_id: EntityId,
    #[serde(default)]
    pub tags: Option<Vec<TagDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemDto {
    pub item_name: String,
    pub comp_id: EntityId,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMoveDto {
    pub item_id: EntityId,
    pub comp_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// The service sends the owner either as one object or as a list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.into_iter().next(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HomeUsersDto {
    #[serde(rename = "OWNER", default)]
    pub owner: Option<OneOrMany<UserDto>>,
    #[serde(rename = "MEMBER", default)]
    pub member: Option<Vec<UserDto>>,
}

impl HomeUsersDto {
    /// No owner and no members
    pub fn is_empty(&self) -> bool {
        let no_owner = match &self.owner {
            None => true,
            Some(OneOrMany::Many(owners)) => owners.is_empty(),
            Some(OneOrMany::One(_)) => false,
        };
        no_owner && self.member.as_ref().map_or(true, Vec::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDto {
    pub id: EntityId,
    pub inviter_id: EntityId,
    pub invitee_id: EntityId,
    pub home_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationInfoDto {
    pub id: EntityId,
    pub inviter_name: String,
    pub home_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationToSendDto {
    pub inviter_id: EntityId,
    pub invitee_username: String,
    pub home_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
    pub email: String,
}

// Responses into the domain

impl From<HomeDto> for Home {
    fn from(dto: HomeDto) -> Self {
        Home {
            id: dto.id,
            name: dto.home_name,
            owner: dto.owned_by,
        }
    }
}

impl From<MyHomesDto> for MyHomes {
    fn from(dto: MyHomesDto) -> Self {
        MyHomes {
            owned: dto.owner.unwrap_or_default().into_iter().map(Home::from).collect(),
            member: dto.member.unwrap_or_default().into_iter().map(Home::from).collect(),
        }
    }
}

impl From<RoomDto> for Room {
    fn from(dto: RoomDto) -> Self {
        Room {
            id: dto.id,
            name: dto.room_name,
            home_id: dto.home_id,
        }
    }
}

impl From<FurnitureDto> for Furniture {
    fn from(dto: FurnitureDto) -> Self {
        Furniture {
            id: dto.id,
            name: dto.furn_name,
            room_id: dto.room_id,
        }
    }
}

impl From<CompartmentDto> for Compartment {
    fn from(dto: CompartmentDto) -> Self {
        Compartment {
            id: dto.id,
            name: dto.comp_name,
            furniture_id: dto.furn_id,
        }
    }
}

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        Item {
            id: dto.id,
            name: dto.item_name,
            compartment_id: dto.comp_id,
        }
    }
}

impl From<TagDto> for Tag {
    fn from(dto: TagDto) -> Self {
        Tag {
            id: dto.id,
            name: dto.tag_name,
            home_id: dto.home_id,
        }
    }
}

impl From<ItemDetailDto> for ItemDetail {
    fn from(dto: ItemDetailDto) -> Self {
        ItemDetail {
            id: dto.id,
            name: dto.item_name,
            compartment_id: dto.comp_id,
            tags: dto.tags.unwrap_or_default().into_iter().map(Tag::from).collect(),
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.id,
            username: dto.username,
            email: dto.email,
        }
    }
}

impl TryFrom<HomeUsersDto> for HomeUsers {
    type Error = Failure;

    fn try_from(dto: HomeUsersDto) -> Result<Self, Self::Error> {
        let owner = dto
            .owner
            .and_then(OneOrMany::into_first)
            .ok_or_else(|| Failure::decode("home users response has no owner"))?;

        Ok(HomeUsers {
            owner: owner.into(),
            members: dto.member.unwrap_or_default().into_iter().map(User::from).collect(),
        })
    }
}

impl From<InvitationDto> for Invitation {
    fn from(dto: InvitationDto) -> Self {
        Invitation {
            id: dto.id,
            inviter_id: dto.inviter_id,
            invitee_id: dto.invitee_id,
            home_id: dto.home_id,
        }
    }
}

impl From<InvitationInfoDto> for InvitationInfo {
    fn from(dto: InvitationInfoDto) -> Self {
        InvitationInfo {
            id: dto.id,
            inviter_name: dto.inviter_name,
            home_name: dto.home_name,
        }
    }
}

// Domain into requests

impl From<&Home> for NewHomeDto {
    fn from(home: &Home) -> Self {
        NewHomeDto {
            home_name: home.name.clone(),
            owned_by: home.owner,
        }
    }
}

impl From<&Home> for HomeUpdateDto {
    fn from(home: &Home) -> Self {
        HomeUpdateDto {
            id: home.id,
            home_name: home.name.clone(),
        }
    }
}

impl From<&Room> for NewRoomDto {
    fn from(room: &Room) -> Self {
        NewRoomDto {
            room_name: room.name.clone(),
            home_id: room.home_id,
        }
    }
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        RoomDto {
            id: room.id,
            room_name: room.name.clone(),
            home_id: room.home_id,
        }
    }
}

impl From<&Furniture> for NewFurnitureDto {
    fn from(furniture: &Furniture) -> Self {
        NewFurnitureDto {
            furn_name: furniture.name.clone(),
            room_id: furniture.room_id,
        }
    }
}

impl From<&Furniture> for FurnitureUpdateDto {
    fn from(furniture: &Furniture) -> Self {
        FurnitureUpdateDto {
            id: furniture.id,
            furn_name: furniture.name.clone(),
        }
    }
}

impl From<&Compartment> for NewCompartmentDto {
    fn from(compartment: &Compartment) -> Self {
        NewCompartmentDto {
            comp_name: compartment.name.clone(),
            furn_id: compartment.furniture_id,
        }
    }
}

impl From<&Compartment> for CompartmentUpdateDto {
    fn from(compartment: &Compartment) -> Self {
        CompartmentUpdateDto {
            id: compartment.id,
            comp_name: compartment.name.clone(),
        }
    }
}

impl From<&NewItem> for NewItemDto {
    fn from(item: &NewItem) -> Self {
        NewItemDto {
            item_name: item.name.clone(),
            comp_id: item.compartment_id,
            tags: item.tags.clone(),
        }
    }
}

impl From<&ItemDetail> for ItemDetailDto {
    fn from(item: &ItemDetail) -> Self {
        ItemDetailDto {
            id: item.id,
            item_name: item.name.clone(),
            comp_id: item.compartment_id,
            tags: Some(
                item.tags
                    .iter()
                    .map(|tag| TagDto {
                        id: tag.id,
                        tag_name: tag.name.clone(),
                        home_id: tag.home_id,
                    })
                    .collect(),
            ),
        }
    }
}

impl From<ItemMove> for ItemMoveDto {
    fn from(item_move: ItemMove) -> Self {
        ItemMoveDto {
            item_id: item_move.item_id,
            comp_id: item_move.compartment_id,
        }
    }
}

impl From<&InvitationToSend> for InvitationToSendDto {
    fn from(invitation: &InvitationToSend) -> Self {
        InvitationToSendDto {
            inviter_id: invitation.inviter_id,
            invitee_username: invitation.invitee_username.clone(),
            home_id: invitation.home_id,
        }
    }
}

impl From<&Credentials> for LoginDto {
    fn from(credentials: &Credentials) -> Self {
        LoginDto {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}

impl From<&Registration> for RegisterDto {
    fn from(registration: &Registration) -> Self {
        RegisterDto {
            username: registration.username.clone(),
            password: registration.password.clone(),
            email: registration.email.clone(),
        }
    }
}
