use std::sync::Arc;

use homeinv_application::{
    usecases::{require_name, HomeUseCases},
    SessionContext,
};
use homeinv_domain::{EntityId, Home};

use super::{precondition, Screen};
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MyHomesState {
    pub owned: Vec<Home>,
    pub member: Vec<Home>,
    pub show_create_dialog: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(MyHomesState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MyHomesEvent {
    GetHomes(EntityId),
    CreateHome(String),
    HomeClicked(EntityId),
    ShowCreateDialog,
    ClearDialog,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MyHomesEffect {
    OpenHome(EntityId),
}

/// Homes the user owns and homes they were invited into
pub struct MyHomesScreen {
    store: Store<MyHomesState, MyHomesEffect>,
    homes: HomeUseCases,
    session: Arc<SessionContext>,
}

impl MyHomesScreen {
    pub fn new(homes: HomeUseCases, session: Arc<SessionContext>) -> Self {
        Self {
            store: Store::new(MyHomesState::default()),
            homes,
            session,
        }
    }

    fn create_home(&self, name: String) {
        let Some(owner) = precondition(&self.store, self.session.require_user()) else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let stream = self.homes.save_home.execute(&name, owner);
        self.store.spawn(|handle| async move {
            let created = handle
                .collect(stream, |state, home| {
                    let id = home.id;
                    state.owned.push(home);
                    state.show_create_dialog = false;
                    id
                })
                .await;
            if let Some(id) = created {
                handle.emit(MyHomesEffect::OpenHome(id));
            }
        });
    }
}

impl Screen for MyHomesScreen {
    type State = MyHomesState;
    type Event = MyHomesEvent;
    type Effect = MyHomesEffect;

    fn store(&self) -> &Store<MyHomesState, MyHomesEffect> {
        &self.store
    }

    fn dispatch(&self, event: MyHomesEvent) {
        match event {
            MyHomesEvent::GetHomes(user_id) => {
                let stream = self.homes.get_user_homes.execute(user_id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, homes| {
                            state.owned = homes.owned;
                            state.member = homes.member;
                        })
                        .await;
                });
            }
            MyHomesEvent::CreateHome(name) => self.create_home(name),
            MyHomesEvent::HomeClicked(id) => self.store.emit(MyHomesEffect::OpenHome(id)),
            MyHomesEvent::ShowCreateDialog => self.store.update(|s| s.show_create_dialog = true),
            MyHomesEvent::ClearDialog => self.store.update(|s| s.show_create_dialog = false),
            MyHomesEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
