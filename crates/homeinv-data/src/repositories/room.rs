use homeinv_domain::{models::*, repositories::RoomRepository, ResourceStream};

use super::resource_stream;
use crate::sources::RoomRemoteDataSource;

pub struct RoomRepositoryImpl {
    source: RoomRemoteDataSource,
}

impl RoomRepositoryImpl {
    pub fn new(source: RoomRemoteDataSource) -> Self {
        Self { source }
    }
}

impl RoomRepository for RoomRepositoryImpl {
    fn rooms_by_home(&self, home_id: EntityId) -> ResourceStream<Vec<Room>> {
        let source = self.source.clone();
        resource_stream(move || async move { source.rooms_by_home(home_id).await })
    }

    fn room_by_id(&self, id: EntityId) -> ResourceStream<Room> {
        let source = self.source.clone();
        resource_stream(move || async move { source.room_by_id(id).await })
    }

    fn save_room(&self, room: Room) -> ResourceStream<Room> {
        let source = self.source.clone();
        resource_stream(move || async move { source.save_room(&room).await })
    }

    fn update_room(&self, room: Room) -> ResourceStream<Room> {
        let source = self.source.clone();
        resource_stream(move || async move { source.update_room(&room).await })
    }

    fn delete_room(&self, id: EntityId) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.delete_room(id).await })
    }
}
