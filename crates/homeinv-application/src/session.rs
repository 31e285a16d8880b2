//! Session context
//!
//! Holds the logged-in user and the currently opened home. Shared as
//! `Arc<SessionContext>` and handed explicitly to the screens that need it.

use homeinv_domain::EntityId;
use parking_lot::RwLock;
use tracing::debug;

use crate::errors::{ApplicationError, ApplicationResult};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SessionState {
    user_id: Option<EntityId>,
    home_id: Option<EntityId>,
}

/// Thread-safe user and home selection for one client session
#[derive(Debug, Default)]
pub struct SessionContext {
    state: RwLock<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<EntityId> {
        self.state.read().user_id
    }

    pub fn home_id(&self) -> Option<EntityId> {
        self.state.read().home_id
    }

    /// Logged-in user or [`ApplicationError::NotLoggedIn`]
    pub fn require_user(&self) -> ApplicationResult<EntityId> {
        self.user_id().ok_or(ApplicationError::NotLoggedIn)
    }

    /// Opened home or [`ApplicationError::NoHomeSelected`]
    pub fn require_home(&self) -> ApplicationResult<EntityId> {
        self.home_id().ok_or(ApplicationError::NoHomeSelected)
    }

    /// Record a login. Any previously opened home is forgotten.
    pub fn set_user(&self, user_id: EntityId) {
        debug!(user_id, "Session user set");
        let mut state = self.state.write();
        if state.user_id != Some(user_id) {
            state.home_id = None;
        }
        state.user_id = Some(user_id);
    }

    pub fn set_home(&self, home_id: EntityId) {
        debug!(home_id, "Session home set");
        self.state.write().home_id = Some(home_id);
    }

    pub fn clear_home(&self) {
        self.state.write().home_id = None;
    }

    /// Forget user and home (logout, account deletion)
    pub fn clear(&self) {
        debug!("Session cleared");
        *self.state.write() = SessionState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_empty_session() {
        let session = SessionContext::new();
        assert_eq!(session.require_user(), Err(ApplicationError::NotLoggedIn));
        assert_eq!(session.require_home(), Err(ApplicationError::NoHomeSelected));
    }

    #[test]
    fn test_user_and_home() {
        let session = SessionContext::new();
        session.set_user(7);
        session.set_home(5);
        assert_eq!(session.require_user(), Ok(7));
        assert_eq!(session.require_home(), Ok(5));
    }

    #[test]
    fn test_switching_user_forgets_home() {
        let session = SessionContext::new();
        session.set_user(7);
        session.set_home(5);

        session.set_user(7);
        assert_eq!(session.home_id(), Some(5));

        session.set_user(8);
        assert_eq!(session.home_id(), None);
    }

    #[test]
    fn test_clear() {
        let session = SessionContext::new();
        session.set_user(7);
        session.set_home(5);
        session.clear();
        assert_eq!(session.user_id(), None);
        assert_eq!(session.home_id(), None);
    }

    #[test]
    fn test_concurrent_updates() {
        let session = Arc::new(SessionContext::new());
        let handles: Vec<_> = (1..=8)
            .map(|id| {
                let session = Arc::clone(&session);
                std::thread::spawn(move || {
                    session.set_user(7);
                    session.set_home(id);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(session.user_id(), Some(7));
        assert!(session.home_id().is_some_and(|id| (1..=8).contains(&id)));
    }
}
