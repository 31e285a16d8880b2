use homeinv_application::usecases::UserUseCases;

use super::Screen;
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterState {
    pub username: String,
    pub password: String,
    pub email: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(RegisterState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterEvent {
    UsernameChanged(String),
    PasswordChanged(String),
    EmailChanged(String),
    Register,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterEffect {
    Registered,
}

pub struct RegisterScreen {
    store: Store<RegisterState, RegisterEffect>,
    users: UserUseCases,
}

impl RegisterScreen {
    pub fn new(users: UserUseCases) -> Self {
        Self {
            store: Store::new(RegisterState::default()),
            users,
        }
    }
}

impl Screen for RegisterScreen {
    type State = RegisterState;
    type Event = RegisterEvent;
    type Effect = RegisterEffect;

    fn store(&self) -> &Store<RegisterState, RegisterEffect> {
        &self.store
    }

    fn dispatch(&self, event: RegisterEvent) {
        match event {
            RegisterEvent::UsernameChanged(v) => self.store.update(|s| s.username = v),
            RegisterEvent::PasswordChanged(v) => self.store.update(|s| s.password = v),
            RegisterEvent::EmailChanged(v) => self.store.update(|s| s.email = v),
            RegisterEvent::Register => {
                let state = self.store.snapshot();
                let stream = self.users.register.execute(
                    state.username.trim(),
                    &state.password,
                    state.email.trim(),
                );
                self.store.spawn(|handle| async move {
                    if handle.collect(stream, |_, ()| ()).await.is_some() {
                        handle.emit(RegisterEffect::Registered);
                    }
                });
            }
            RegisterEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
