use homeinv_domain::{EntityId, Failure, Room};
use homeinv_http::ApiRequest;

use super::{with_body, RemoteSource};
use crate::{
    dto::{NewRoomDto, RoomDto},
    endpoints, messages, policy,
    policy::{EmptyPolicy, ErrorPolicy},
};

#[derive(Clone)]
pub struct RoomRemoteDataSource {
    remote: RemoteSource,
}

impl RoomRemoteDataSource {
    pub fn new(remote: RemoteSource) -> Self {
        Self { remote }
    }

    pub async fn rooms_by_home(&self, home_id: EntityId) -> Result<Vec<Room>, Failure> {
        let rooms: Vec<RoomDto> = self
            .remote
            .fetch_list(
                ApiRequest::get(endpoints::rooms_by_home(home_id)),
                ErrorPolicy::NONE,
                EmptyPolicy::Allow,
                messages::RETRIEVING_ROOMS_BY_HOME,
            )
            .await?;
        Ok(rooms.into_iter().map(Room::from).collect())
    }

    pub async fn room_by_id(&self, id: EntityId) -> Result<Room, Failure> {
        let dto: RoomDto = self
            .remote
            .fetch(
                ApiRequest::get(endpoints::room(id)),
                policy::ROOM_BY_ID,
                messages::RETRIEVING_ROOM_BY_ID,
            )
            .await?;
        Ok(dto.into())
    }

    pub async fn save_room(&self, room: &Room) -> Result<Room, Failure> {
        let request = with_body(ApiRequest::post(endpoints::ROOMS), &NewRoomDto::from(room))?;
        let dto: RoomDto = self
            .remote
            .fetch(request, policy::SAVE_ROOM, messages::SAVING_ROOM)
            .await?;
        Ok(dto.into())
    }

    pub async fn update_room(&self, room: &Room) -> Result<Room, Failure> {
        let request = with_body(ApiRequest::put(endpoints::room(room.id)), &RoomDto::from(room))?;
        let dto: RoomDto = self
            .remote
            .fetch(request, policy::UPDATE_ROOM, messages::UPDATING_ROOM)
            .await?;
        Ok(dto.into())
    }

    pub async fn delete_room(&self, id: EntityId) -> Result<(), Failure> {
        self.remote
            .execute(
                ApiRequest::delete(endpoints::room(id)),
                policy::DELETE_ROOM,
                messages::DELETING_ROOM,
            )
            .await
    }
}
