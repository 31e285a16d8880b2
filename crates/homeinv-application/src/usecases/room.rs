use std::sync::Arc;

use homeinv_domain::{repositories::RoomRepository, EntityId, ResourceStream, Room};

use_case!(GetRoomsByHome, RoomRepository);

impl GetRoomsByHome {
    pub fn execute(&self, home_id: EntityId) -> ResourceStream<Vec<Room>> {
        self.repository.rooms_by_home(home_id)
    }
}

use_case!(GetRoomById, RoomRepository);

impl GetRoomById {
    pub fn execute(&self, id: EntityId) -> ResourceStream<Room> {
        self.repository.room_by_id(id)
    }
}

use_case!(SaveRoom, RoomRepository);

impl SaveRoom {
    pub fn execute(&self, name: &str, home_id: EntityId) -> ResourceStream<Room> {
        self.repository.save_room(Room::new(name, home_id))
    }
}

use_case!(UpdateRoom, RoomRepository);

impl UpdateRoom {
    pub fn execute(&self, room: Room) -> ResourceStream<Room> {
        self.repository.update_room(room)
    }
}

use_case!(DeleteRoom, RoomRepository);

impl DeleteRoom {
    pub fn execute(&self, id: EntityId) -> ResourceStream<()> {
        self.repository.delete_room(id)
    }
}

#[derive(Clone)]
pub struct RoomUseCases {
    pub get_rooms: GetRoomsByHome,
    pub get_room: GetRoomById,
    pub save_room: SaveRoom,
    pub update_room: UpdateRoom,
    pub delete_room: DeleteRoom,
}

impl RoomUseCases {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self {
            get_rooms: GetRoomsByHome::new(repository.clone()),
            get_room: GetRoomById::new(repository.clone()),
            save_room: SaveRoom::new(repository.clone()),
            update_room: UpdateRoom::new(repository.clone()),
            delete_room: DeleteRoom::new(repository),
        }
    }
}
