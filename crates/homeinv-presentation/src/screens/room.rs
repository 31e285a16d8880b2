use homeinv_application::usecases::{require_name, FurnitureUseCases, RoomUseCases};
use homeinv_domain::{EntityId, Furniture, Room};

use super::{precondition, Screen};
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomState {
    pub room: Option<Room>,
    pub furniture: Vec<Furniture>,
    pub show_create_dialog: bool,
    pub show_rename_dialog: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(RoomState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    GetRoom(EntityId),
    GetRoomFurniture(EntityId),
    CreateFurniture(String),
    FurnitureClicked(EntityId),
    RenameRoom(String),
    DeleteRoom,
    ShowCreateDialog,
    ShowRenameDialog,
    ClearDialogs,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomEffect {
    OpenFurniture(EntityId),
    RoomDeleted,
}

/// A room and the furniture in it
pub struct RoomScreen {
    store: Store<RoomState, RoomEffect>,
    rooms: RoomUseCases,
    furniture: FurnitureUseCases,
}

impl RoomScreen {
    pub fn new(rooms: RoomUseCases, furniture: FurnitureUseCases) -> Self {
        Self {
            store: Store::new(RoomState::default()),
            rooms,
            furniture,
        }
    }

    fn loaded_room(&self) -> Option<Room> {
        let room = self.store.snapshot().room;
        if room.is_none() {
            self.store.update(|s| s.error = Some("No room is loaded".to_string()));
        }
        room
    }

    fn create_furniture(&self, name: String) {
        let Some(room) = self.loaded_room() else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let stream = self.furniture.save_furniture.execute(&name, room.id);
        self.store.spawn(|handle| async move {
            let created = handle
                .collect(stream, |state, furniture| {
                    let id = furniture.id;
                    state.furniture.push(furniture);
                    state.show_create_dialog = false;
                    id
                })
                .await;
            if let Some(id) = created {
                handle.emit(RoomEffect::OpenFurniture(id));
            }
        });
    }

    fn rename_room(&self, name: String) {
        let Some(room) = self.loaded_room() else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let stream = self.rooms.update_room.execute(Room { name, ..room });
        self.store.spawn(|handle| async move {
            handle
                .collect(stream, |state, room| {
                    state.room = Some(room);
                    state.show_rename_dialog = false;
                })
                .await;
        });
    }

    fn delete_room(&self) {
        let Some(room) = self.loaded_room() else {
            return;
        };

        let stream = self.rooms.delete_room.execute(room.id);
        self.store.spawn(|handle| async move {
            if handle.collect(stream, |state, ()| state.room = None).await.is_some() {
                handle.emit(RoomEffect::RoomDeleted);
            }
        });
    }
}

impl Screen for RoomScreen {
    type State = RoomState;
    type Event = RoomEvent;
    type Effect = RoomEffect;

    fn store(&self) -> &Store<RoomState, RoomEffect> {
        &self.store
    }

    fn dispatch(&self, event: RoomEvent) {
        match event {
            RoomEvent::GetRoom(id) => {
                let stream = self.rooms.get_room.execute(id);
                self.store.spawn(|handle| async move {
                    handle.collect(stream, |state, room| state.room = Some(room)).await;
                });
            }
            RoomEvent::GetRoomFurniture(room_id) => {
                let stream = self.furniture.get_by_room.execute(room_id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, furniture| state.furniture = furniture)
                        .await;
                });
            }
            RoomEvent::CreateFurniture(name) => self.create_furniture(name),
            RoomEvent::FurnitureClicked(id) => self.store.emit(RoomEffect::OpenFurniture(id)),
            RoomEvent::RenameRoom(name) => self.rename_room(name),
            RoomEvent::DeleteRoom => self.delete_room(),
            RoomEvent::ShowCreateDialog => self.store.update(|s| s.show_create_dialog = true),
            RoomEvent::ShowRenameDialog => self.store.update(|s| s.show_rename_dialog = true),
            RoomEvent::ClearDialogs => self.store.update(|s| {
                s.show_create_dialog = false;
                s.show_rename_dialog = false;
            }),
            RoomEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
