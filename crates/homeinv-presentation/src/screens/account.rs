use std::sync::Arc;

use homeinv_application::{
    usecases::{InvitationUseCases, UserUseCases},
    SessionContext,
};
use homeinv_domain::{EntityId, Invitation, InvitationInfo, User};

use super::{precondition, Screen};
use crate::store::{view_state, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountState {
    pub user: Option<User>,
    pub invitations: Vec<Invitation>,
    pub invitation_info: Option<InvitationInfo>,
    pub show_invitation_dialog: bool,
    pub show_delete_dialog: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(AccountState);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    GetUser(EntityId),
    GetInvitations(EntityId),
    GetInvitationInfo(EntityId),
    AcceptInvitation(EntityId),
    RejectInvitation(EntityId),
    DeleteUser,
    ShowDeleteDialog,
    ClearDialogs,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEffect {
    InvitationResolved(EntityId),
    AccountDeleted,
}

/// The logged-in user's account and pending invitations
pub struct AccountScreen {
    store: Store<AccountState, AccountEffect>,
    users: UserUseCases,
    invitations: InvitationUseCases,
    session: Arc<SessionContext>,
}

impl AccountScreen {
    pub fn new(
        users: UserUseCases,
        invitations: InvitationUseCases,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            store: Store::new(AccountState::default()),
            users,
            invitations,
            session,
        }
    }

    fn resolve_invitation(&self, id: EntityId, accept: bool) {
        let stream = if accept {
            self.invitations.accept.execute(id)
        } else {
            self.invitations.decline.execute(id)
        };

        self.store.spawn(|handle| async move {
            let resolved = handle
                .collect(stream, |state, ()| {
                    state.invitations.retain(|invitation| invitation.id != id);
                    if state.invitation_info.as_ref().is_some_and(|info| info.id == id) {
                        state.invitation_info = None;
                        state.show_invitation_dialog = false;
                    }
                })
                .await;
            if resolved.is_some() {
                handle.emit(AccountEffect::InvitationResolved(id));
            }
        });
    }

    fn delete_user(&self) {
        let Some(user_id) = precondition(&self.store, self.session.require_user()) else {
            return;
        };

        let stream = self.users.delete_user.execute(user_id);
        let session = Arc::clone(&self.session);
        self.store.spawn(|handle| async move {
            let deleted = handle
                .collect(stream, |state, ()| {
                    state.user = None;
                    state.invitations.clear();
                    state.show_delete_dialog = false;
                })
                .await;
            if deleted.is_some() {
                session.clear();
                handle.emit(AccountEffect::AccountDeleted);
            }
        });
    }
}

impl Screen for AccountScreen {
    type State = AccountState;
    type Event = AccountEvent;
    type Effect = AccountEffect;

    fn store(&self) -> &Store<AccountState, AccountEffect> {
        &self.store
    }

    fn dispatch(&self, event: AccountEvent) {
        match event {
            AccountEvent::GetUser(id) => {
                let stream = self.users.get_user.execute(id);
                self.store.spawn(|handle| async move {
                    handle.collect(stream, |state, user| state.user = Some(user)).await;
                });
            }
            AccountEvent::GetInvitations(user_id) => {
                let stream = self.invitations.get_by_user.execute(user_id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, invitations| state.invitations = invitations)
                        .await;
                });
            }
            AccountEvent::GetInvitationInfo(id) => {
                let stream = self.invitations.get_info.execute(id);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, info| {
                            state.invitation_info = Some(info);
                            state.show_invitation_dialog = true;
                        })
                        .await;
                });
            }
            AccountEvent::AcceptInvitation(id) => self.resolve_invitation(id, true),
            AccountEvent::RejectInvitation(id) => self.resolve_invitation(id, false),
            AccountEvent::DeleteUser => self.delete_user(),
            AccountEvent::ShowDeleteDialog => self.store.update(|s| s.show_delete_dialog = true),
            AccountEvent::ClearDialogs => self.store.update(|s| {
                s.show_invitation_dialog = false;
                s.show_delete_dialog = false;
                s.invitation_info = None;
            }),
            AccountEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
