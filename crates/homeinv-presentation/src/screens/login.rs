use std::sync::Arc;

use homeinv_application::{usecases::UserUseCases, SessionContext};
use homeinv_domain::EntityId;

use super::Screen;
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(LoginState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    UsernameChanged(String),
    PasswordChanged(String),
    Login,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginEffect {
    LoggedIn(EntityId),
}

/// Login screen. A successful login records the user in the session.
pub struct LoginScreen {
    store: Store<LoginState, LoginEffect>,
    users: UserUseCases,
    session: Arc<SessionContext>,
}

impl LoginScreen {
    pub fn new(users: UserUseCases, session: Arc<SessionContext>) -> Self {
        Self {
            store: Store::new(LoginState::default()),
            users,
            session,
        }
    }

    fn login(&self) {
        let state = self.store.snapshot();
        let stream = self.users.login.execute(state.username.trim(), &state.password);
        let session = Arc::clone(&self.session);

        self.store.spawn(|handle| async move {
            if let Some(user_id) = handle.collect(stream, |_, user_id| user_id).await {
                session.set_user(user_id);
                handle.emit(LoginEffect::LoggedIn(user_id));
            }
        });
    }
}

impl Screen for LoginScreen {
    type State = LoginState;
    type Event = LoginEvent;
    type Effect = LoginEffect;

    fn store(&self) -> &Store<LoginState, LoginEffect> {
        &self.store
    }

    fn dispatch(&self, event: LoginEvent) {
        match event {
            LoginEvent::UsernameChanged(username) => self.store.update(|s| s.username = username),
            LoginEvent::PasswordChanged(password) => self.store.update(|s| s.password = password),
            LoginEvent::Login => self.login(),
            LoginEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
