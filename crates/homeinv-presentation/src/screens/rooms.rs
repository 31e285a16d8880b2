use std::sync::Arc;

use homeinv_application::{
    usecases::{require_name, RoomUseCases},
    SessionContext,
};
use homeinv_domain::{EntityId, Room};

use super::{precondition, Screen};
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomsState {
    pub rooms: Vec<Room>,
    pub show_create_dialog: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(RoomsState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomsEvent {
    GetRooms(EntityId),
    RoomClicked(EntityId),
    CreateRoom(String),
    ShowCreateDialog,
    ClearDialog,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomsEffect {
    OpenRoom(EntityId),
}

/// Rooms of the opened home. A created room is opened right away.
pub struct RoomsScreen {
    store: Store<RoomsState, RoomsEffect>,
    rooms: RoomUseCases,
    session: Arc<SessionContext>,
}

impl RoomsScreen {
    pub fn new(rooms: RoomUseCases, session: Arc<SessionContext>) -> Self {
        Self {
            store: Store::new(RoomsState::default()),
            rooms,
            session,
        }
    }

    fn create_room(&self, name: String) {
        let Some(home_id) = precondition(&self.store, self.session.require_home()) else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let stream = self.rooms.save_room.execute(&name, home_id);
        self.store.spawn(|handle| async move {
            let created = handle
                .collect(stream, |state, room| {
                    let id = room.id;
                    state.rooms.push(room);
                    state.show_create_dialog = false;
                    id
                })
                .await;
            if let Some(id) = created {
                handle.emit(RoomsEffect::OpenRoom(id));
            }
        });
    }
}

impl Screen for RoomsScreen {
    type State = RoomsState;
    type Event = RoomsEvent;
    type Effect = RoomsEffect;

    fn store(&self) -> &Store<RoomsState, RoomsEffect> {
        &self.store
    }

    fn dispatch(&self, event: RoomsEvent) {
        match event {
            RoomsEvent::GetRooms(home_id) => {
                let stream = self.rooms.get_rooms.execute(home_id);
                self.store.spawn(|handle| async move {
                    handle.collect(stream, |state, rooms| state.rooms = rooms).await;
                });
            }
            RoomsEvent::RoomClicked(id) => self.store.emit(RoomsEffect::OpenRoom(id)),
            RoomsEvent::CreateRoom(name) => self.create_room(name),
            RoomsEvent::ShowCreateDialog => self.store.update(|s| s.show_create_dialog = true),
            RoomsEvent::ClearDialog => self.store.update(|s| s.show_create_dialog = false),
            RoomsEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
