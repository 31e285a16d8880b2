use homeinv_application::usecases::{require_name, CompartmentUseCases, ItemUseCases};
use homeinv_domain::{Compartment, EntityId, Item};

use super::{precondition, Screen};
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompartmentState {
    pub compartment: Option<Compartment>,
    pub items: Vec<Item>,
    pub show_create_dialog: bool,
    pub show_rename_dialog: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(CompartmentState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompartmentEvent {
    GetCompartment(EntityId),
    GetCompartmentItems(EntityId),
    CreateItem { name: String, tags: Vec<String> },
    ItemClicked(EntityId),
    RenameCompartment(String),
    DeleteCompartment,
    ShowCreateDialog,
    ShowRenameDialog,
    ClearDialogs,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompartmentEffect {
    OpenItem(EntityId),
    CompartmentDeleted,
}

pub struct CompartmentScreen {
    store: Store<CompartmentState, CompartmentEffect>,
    compartments: CompartmentUseCases,
    items: ItemUseCases,
}

/// Trimmed tag names without blanks or repeats, in input order
pub fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !cleaned.iter().any(|t| t == tag) {
            cleaned.push(tag.to_string());
        }
    }
    cleaned
}

impl CompartmentScreen {
    pub fn new(compartments: CompartmentUseCases, items: ItemUseCases) -> Self {
        Self {
            store: Store::new(CompartmentState::default()),
            compartments,
            items,
        }
    }

    fn loaded_compartment(&self) -> Option<Compartment> {
        let compartment = self.store.snapshot().compartment;
        if compartment.is_none() {
            self.store
                .update(|s| s.error = Some("No compartment is loaded".to_string()));
        }
        compartment
    }

    fn create_item(&self, name: String, tags: Vec<String>) {
        let Some(compartment) = self.loaded_compartment() else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let stream = self
            .items
            .save_item
            .execute(&name, compartment.id, clean_tags(tags));
        self.store.spawn(|handle| async move {
            let created = handle
                .collect(stream, |state, item| {
                    let id = item.id;
                    state.items.push(item.summary());
                    state.show_create_dialog = false;
                    id
                })
                .await;
            if let Some(id) = created {
                handle.emit(CompartmentEffect::OpenItem(id));
            }
        });
    }

    fn rename_compartment(&self, name: String) {
        let Some(compartment) = self.loaded_compartment() else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let stream = self
            .compartments
            .update_compartment
            .execute(Compartment { name, ..compartment });
        self.store.spawn(|handle| async move {
            handle
                .collect(stream, |state, compartment| {
                    state.compartment = Some(compartment);
                    state.show_rename_dialog = false;
                })
                .await;
        });
    }

    fn delete_compartment(&self) {
        let Some(compartment) = self.loaded_compartment() else {
            return;
        };

        let stream = self.compartments.delete_compartment.execute(compartment.id);
        self.store.spawn(|handle| async move {
            let deleted = handle
                .collect(stream, |state, ()| state.compartment = None)
                .await;
            if deleted.is_some() {
                handle.emit(CompartmentEffect::CompartmentDeleted);
            }
        });
    }
}

impl Screen for CompartmentScreen {
    type State = CompartmentState;
    type Event = CompartmentEvent;
    type Effect = CompartmentEffect;

    fn store(&self) -> &Store<CompartmentState, CompartmentEffect> {
        &self.store
    }

    fn dispatch(&self, event: CompartmentEvent) {
        match event {
            CompartmentEvent::GetCompartment(id) => {
                let stream = self.compartments.get_compartment.execute(id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, compartment| {
                            state.compartment = Some(compartment)
                        })
                        .await;
                });
            }
            CompartmentEvent::GetCompartmentItems(compartment_id) => {
                let stream = self.items.get_by_compartment.execute(compartment_id);
                self.store.spawn(|handle| async move {
                    handle.collect(stream, |state, items| state.items = items).await;
                });
            }
            CompartmentEvent::CreateItem { name, tags } => self.create_item(name, tags),
            CompartmentEvent::ItemClicked(id) => self.store.emit(CompartmentEffect::OpenItem(id)),
            CompartmentEvent::RenameCompartment(name) => self.rename_compartment(name),
            CompartmentEvent::DeleteCompartment => self.delete_compartment(),
            CompartmentEvent::ShowCreateDialog => {
                self.store.update(|s| s.show_create_dialog = true)
            }
            CompartmentEvent::ShowRenameDialog => {
                self.store.update(|s| s.show_rename_dialog = true)
            }
            CompartmentEvent::ClearDialogs => self.store.update(|s| {
                s.show_create_dialog = false;
                s.show_rename_dialog = false;
            }),
            CompartmentEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_tags() {
        let tags = vec![
            " clothes ".to_string(),
            "".to_string(),
            "wool".to_string(),
            "clothes".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(clean_tags(tags), vec!["clothes", "wool"]);
    }
}
