use homeinv_application::usecases::{require_name, CompartmentUseCases, FurnitureUseCases};
use homeinv_domain::{Compartment, EntityId, Furniture};

use super::{precondition, Screen};
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurnitureState {
    pub furniture: Option<Furniture>,
    pub compartments: Vec<Compartment>,
    pub show_create_dialog: bool,
    pub show_rename_dialog: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(FurnitureState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FurnitureEvent {
    GetFurniture(EntityId),
    GetFurnitureCompartments(EntityId),
    CreateCompartment(String),
    CompartmentClicked(EntityId),
    RenameFurniture(String),
    DeleteFurniture,
    ShowCreateDialog,
    ShowRenameDialog,
    ClearDialogs,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnitureEffect {
    OpenCompartment(EntityId),
    FurnitureDeleted,
}

pub struct FurnitureScreen {
    store: Store<FurnitureState, FurnitureEffect>,
    furniture: FurnitureUseCases,
    compartments: CompartmentUseCases,
}

impl FurnitureScreen {
    pub fn new(furniture: FurnitureUseCases, compartments: CompartmentUseCases) -> Self {
        Self {
            store: Store::new(FurnitureState::default()),
            furniture,
            compartments,
        }
    }

    fn loaded_furniture(&self) -> Option<Furniture> {
        let furniture = self.store.snapshot().furniture;
        if furniture.is_none() {
            self.store
                .update(|s| s.error = Some("No piece of furniture is loaded".to_string()));
        }
        furniture
    }

    fn create_compartment(&self, name: String) {
        let Some(furniture) = self.loaded_furniture() else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let stream = self.compartments.save_compartment.execute(&name, furniture.id);
        self.store.spawn(|handle| async move {
            let created = handle
                .collect(stream, |state, compartment| {
                    let id = compartment.id;
                    state.compartments.push(compartment);
                    state.show_create_dialog = false;
                    id
                })
                .await;
            if let Some(id) = created {
                handle.emit(FurnitureEffect::OpenCompartment(id));
            }
        });
    }

    fn rename_furniture(&self, name: String) {
        let Some(furniture) = self.loaded_furniture() else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let stream = self
            .furniture
            .update_furniture
            .execute(Furniture { name, ..furniture });
        self.store.spawn(|handle| async move {
            handle
                .collect(stream, |state, furniture| {
                    state.furniture = Some(furniture);
                    state.show_rename_dialog = false;
                })
                .await;
        });
    }

    fn delete_furniture(&self) {
        let Some(furniture) = self.loaded_furniture() else {
            return;
        };

        let stream = self.furniture.delete_furniture.execute(furniture.id);
        self.store.spawn(|handle| async move {
            if handle.collect(stream, |state, ()| state.furniture = None).await.is_some() {
                handle.emit(FurnitureEffect::FurnitureDeleted);
            }
        });
    }
}

impl Screen for FurnitureScreen {
    type State = FurnitureState;
    type Event = FurnitureEvent;
    type Effect = FurnitureEffect;

    fn store(&self) -> &Store<FurnitureState, FurnitureEffect> {
        &self.store
    }

    fn dispatch(&self, event: FurnitureEvent) {
        match event {
            FurnitureEvent::GetFurniture(id) => {
                let stream = self.furniture.get_furniture.execute(id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, furniture| state.furniture = Some(furniture))
                        .await;
                });
            }
            FurnitureEvent::GetFurnitureCompartments(furniture_id) => {
                let stream = self.compartments.get_by_furniture.execute(furniture_id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, compartments| state.compartments = compartments)
                        .await;
                });
            }
            FurnitureEvent::CreateCompartment(name) => self.create_compartment(name),
            FurnitureEvent::CompartmentClicked(id) => {
                self.store.emit(FurnitureEffect::OpenCompartment(id))
            }
            FurnitureEvent::RenameFurniture(name) => self.rename_furniture(name),
            FurnitureEvent::DeleteFurniture => self.delete_furniture(),
            FurnitureEvent::ShowCreateDialog => self.store.update(|s| s.show_create_dialog = true),
            FurnitureEvent::ShowRenameDialog => self.store.update(|s| s.show_rename_dialog = true),
            FurnitureEvent::ClearDialogs => self.store.update(|s| {
                s.show_create_dialog = false;
                s.show_rename_dialog = false;
            }),
            FurnitureEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
