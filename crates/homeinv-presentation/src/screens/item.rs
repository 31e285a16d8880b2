use std::sync::Arc;

use homeinv_application::{
    usecases::{
        require_name, CompartmentUseCases, FurnitureUseCases, ItemUseCases, RoomUseCases,
    },
    SessionContext,
};
use homeinv_domain::{Compartment, EntityId, Furniture, ItemDetail, Room, Tag, UNSAVED_ID};

use super::{clean_tags, precondition, Screen};
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemState {
    pub item: Option<ItemDetail>,
    pub route: Option<String>,
    /// Move dialog choices, narrowed room by room
    pub rooms: Vec<Room>,
    pub furniture: Vec<Furniture>,
    pub compartments: Vec<Compartment>,
    pub show_edit_dialog: bool,
    pub show_move_dialog: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(ItemState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEvent {
    GetItem(EntityId),
    GetItemRoute(EntityId),
    /// Rooms of the session's home
    GetRooms,
    GetFurniture(EntityId),
    GetCompartments(EntityId),
    MoveItem(EntityId),
    UpdateItem { name: String, tags: Vec<String> },
    DeleteItem,
    ShowEditDialog,
    ShowMoveDialog,
    ClearDialogs,
    ClearDialogData,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    ItemMoved,
    ItemDeleted,
}

/// One item: details, location route, edit and move
pub struct ItemScreen {
    store: Store<ItemState, ItemEffect>,
    items: ItemUseCases,
    rooms: RoomUseCases,
    furniture: FurnitureUseCases,
    compartments: CompartmentUseCases,
    session: Arc<SessionContext>,
}

impl ItemScreen {
    pub fn new(
        items: ItemUseCases,
        rooms: RoomUseCases,
        furniture: FurnitureUseCases,
        compartments: CompartmentUseCases,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            store: Store::new(ItemState::default()),
            items,
            rooms,
            furniture,
            compartments,
            session,
        }
    }

    fn loaded_item(&self) -> Option<ItemDetail> {
        let item = self.store.snapshot().item;
        if item.is_none() {
            self.store.update(|s| s.error = Some("No item is loaded".to_string()));
        }
        item
    }

    fn get_rooms(&self) {
        let Some(home_id) = precondition(&self.store, self.session.require_home()) else {
            return;
        };

        let stream = self.rooms.get_rooms.execute(home_id);
        self.store.spawn(|handle| async move {
            handle
                .collect(stream, |state, rooms| {
                    state.rooms = rooms;
                    state.furniture.clear();
                    state.compartments.clear();
                })
                .await;
        });
    }

    fn move_item(&self, compartment_id: EntityId) {
        let Some(item) = self.loaded_item() else {
            return;
        };

        let stream = self.items.move_item.execute(item.id, compartment_id);
        self.store.spawn(|handle| async move {
            let moved = handle
                .collect(stream, |state, ()| {
                    if let Some(item) = state.item.as_mut() {
                        item.compartment_id = compartment_id;
                    }
                    state.route = None;
                    state.show_move_dialog = false;
                    clear_choices(state);
                })
                .await;
            if moved.is_some() {
                handle.emit(ItemEffect::ItemMoved);
            }
        });
    }

    /// Keeps known tags by name. Unknown names become new tags of the
    /// session's home.
    fn update_item(&self, name: String, tags: Vec<String>) {
        let Some(item) = self.loaded_item() else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let mut updated_tags = Vec::new();
        for tag_name in clean_tags(tags) {
            if let Some(tag) = item.tags.iter().find(|t| t.name == tag_name) {
                updated_tags.push(tag.clone());
                continue;
            }
            let Some(home_id) = precondition(&self.store, self.session.require_home()) else {
                return;
            };
            updated_tags.push(Tag {
                id: UNSAVED_ID,
                name: tag_name,
                home_id,
            });
        }

        let stream = self.items.update_item.execute(ItemDetail {
            name,
            tags: updated_tags,
            ..item
        });
        self.store.spawn(|handle| async move {
            handle
                .collect(stream, |state, item| {
                    state.item = Some(item);
                    state.show_edit_dialog = false;
                })
                .await;
        });
    }

    fn delete_item(&self) {
        let Some(item) = self.loaded_item() else {
            return;
        };

        let stream = self.items.delete_item.execute(item.id);
        self.store.spawn(|handle| async move {
            if handle.collect(stream, |state, ()| state.item = None).await.is_some() {
                handle.emit(ItemEffect::ItemDeleted);
            }
        });
    }
}

fn clear_choices(state: &mut ItemState) {
    state.rooms.clear();
    state.furniture.clear();
    state.compartments.clear();
}

impl Screen for ItemScreen {
    type State = ItemState;
    type Event = ItemEvent;
    type Effect = ItemEffect;

    fn store(&self) -> &Store<ItemState, ItemEffect> {
        &self.store
    }

    fn dispatch(&self, event: ItemEvent) {
        match event {
            ItemEvent::GetItem(id) => {
                let stream = self.items.get_item.execute(id);
                self.store.spawn(|handle| async move {
                    handle.collect(stream, |state, item| state.item = Some(item)).await;
                });
            }
            ItemEvent::GetItemRoute(id) => {
                let stream = self.items.get_route.execute(id);
                self.store.spawn(|handle| async move {
                    handle.collect(stream, |state, route| state.route = Some(route)).await;
                });
            }
            ItemEvent::GetRooms => self.get_rooms(),
            ItemEvent::GetFurniture(room_id) => {
                let stream = self.furniture.get_by_room.execute(room_id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, furniture| {
                            state.furniture = furniture;
                            state.compartments.clear();
                        })
                        .await;
                });
            }
            ItemEvent::GetCompartments(furniture_id) => {
                let stream = self.compartments.get_by_furniture.execute(furniture_id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, compartments| state.compartments = compartments)
                        .await;
                });
            }
            ItemEvent::MoveItem(compartment_id) => self.move_item(compartment_id),
            ItemEvent::UpdateItem { name, tags } => self.update_item(name, tags),
            ItemEvent::DeleteItem => self.delete_item(),
            ItemEvent::ShowEditDialog => self.store.update(|s| s.show_edit_dialog = true),
            ItemEvent::ShowMoveDialog => self.store.update(|s| s.show_move_dialog = true),
            ItemEvent::ClearDialogs => self.store.update(|s| {
                s.show_edit_dialog = false;
                s.show_move_dialog = false;
            }),
            ItemEvent::ClearDialogData => self.store.update(clear_choices),
            ItemEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
