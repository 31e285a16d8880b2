use std::sync::Arc;

use homeinv_application::{
    usecases::{require_name, HomeUseCases, InvitationUseCases, UserUseCases},
    SessionContext,
};
use homeinv_domain::{EntityId, Home, User};

use super::{precondition, Screen};
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub home: Option<Home>,
    pub owner: Option<User>,
    pub members: Vec<User>,
    pub is_owner: bool,
    pub show_edit_dialog: bool,
    pub show_invite_dialog: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(HomeState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    GetHome(EntityId),
    GetHomeUsers(EntityId),
    UpdateHome(String),
    DeleteHome,
    InviteUser(String),
    UserClicked(EntityId),
    ShowEditDialog,
    ShowInviteDialog,
    ClearDialogs,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEffect {
    OpenUser(EntityId),
    InvitationSent,
    HomeDeleted,
}

/// A single home with its owner and members
pub struct HomeScreen {
    store: Store<HomeState, HomeEffect>,
    homes: HomeUseCases,
    users: UserUseCases,
    invitations: InvitationUseCases,
    session: Arc<SessionContext>,
}

impl HomeScreen {
    pub fn new(
        homes: HomeUseCases,
        users: UserUseCases,
        invitations: InvitationUseCases,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            store: Store::new(HomeState::default()),
            homes,
            users,
            invitations,
            session,
        }
    }

    /// Loaded home, or the session's home when nothing is loaded yet
    fn current_home(&self) -> Option<(EntityId, EntityId)> {
        if let Some(home) = &self.store.snapshot().home {
            return Some((home.id, home.owner));
        }
        self.store.update(|s| s.error = Some("No home is loaded".to_string()));
        None
    }

    fn get_home(&self, id: EntityId) {
        let stream = self.homes.get_home.execute(id);
        let ownership = self
            .session
            .user_id()
            .map(|user_id| self.homes.check_ownership.execute(id, user_id));
        let session = Arc::clone(&self.session);

        self.store.spawn(|handle| async move {
            let loaded = handle
                .collect(stream, |state, home| {
                    let id = home.id;
                    state.home = Some(home);
                    state.is_owner = false;
                    id
                })
                .await;
            let Some(id) = loaded else {
                return;
            };
            session.set_home(id);

            if let Some(ownership) = ownership {
                handle
                    .collect(ownership, |state, owned| state.is_owner = owned)
                    .await;
            }
        });
    }

    fn update_home(&self, name: String) {
        let Some((id, owner)) = self.current_home() else {
            return;
        };
        let Some(name) = precondition(&self.store, require_name(&name)) else {
            return;
        };

        let stream = self.homes.update_home.execute(id, &name, owner);
        self.store.spawn(|handle| async move {
            handle
                .collect(stream, |state, home| {
                    state.home = Some(home);
                    state.show_edit_dialog = false;
                })
                .await;
        });
    }

    fn delete_home(&self) {
        let Some((id, _)) = self.current_home() else {
            return;
        };

        let stream = self.homes.delete_home.execute(id);
        let session = Arc::clone(&self.session);
        self.store.spawn(|handle| async move {
            if handle.collect(stream, |state, ()| state.home = None).await.is_some() {
                session.clear_home();
                handle.emit(HomeEffect::HomeDeleted);
            }
        });
    }

    fn invite_user(&self, username: String) {
        let Some(inviter) = precondition(&self.store, self.session.require_user()) else {
            return;
        };
        let Some(home_id) = precondition(&self.store, self.session.require_home()) else {
            return;
        };
        let Some(username) = precondition(&self.store, require_name(&username)) else {
            return;
        };

        let stream = self.invitations.send.execute(inviter, &username, home_id);
        self.store.spawn(|handle| async move {
            let sent = handle
                .collect(stream, |state, ()| state.show_invite_dialog = false)
                .await;
            if sent.is_some() {
                handle.emit(HomeEffect::InvitationSent);
            }
        });
    }
}

impl Screen for HomeScreen {
    type State = HomeState;
    type Event = HomeEvent;
    type Effect = HomeEffect;

    fn store(&self) -> &Store<HomeState, HomeEffect> {
        &self.store
    }

    fn dispatch(&self, event: HomeEvent) {
        match event {
            HomeEvent::GetHome(id) => self.get_home(id),
            HomeEvent::GetHomeUsers(home_id) => {
                let stream = self.users.get_home_users.execute(home_id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, users| {
                            state.owner = Some(users.owner);
                            state.members = users.members;
                        })
                        .await;
                });
            }
            HomeEvent::UpdateHome(name) => self.update_home(name),
            HomeEvent::DeleteHome => self.delete_home(),
            HomeEvent::InviteUser(username) => self.invite_user(username),
            HomeEvent::UserClicked(id) => self.store.emit(HomeEffect::OpenUser(id)),
            HomeEvent::ShowEditDialog => self.store.update(|s| s.show_edit_dialog = true),
            HomeEvent::ShowInviteDialog => self.store.update(|s| s.show_invite_dialog = true),
            HomeEvent::ClearDialogs => self.store.update(|s| {
                s.show_edit_dialog = false;
                s.show_invite_dialog = false;
            }),
            HomeEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
