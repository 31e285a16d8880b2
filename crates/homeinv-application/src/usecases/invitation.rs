use std::sync::Arc;

use homeinv_domain::{
    repositories::InvitationRepository, EntityId, Invitation, InvitationInfo, InvitationToSend,
    ResourceStream,
};

use_case!(SendInvitation, InvitationRepository);

impl SendInvitation {
    pub fn execute(&self, inviter_id: EntityId, invitee_username: &str, home_id: EntityId) -> ResourceStream<()> {
        self.repository.send_invitation(InvitationToSend {
            inviter_id,
            invitee_username: invitee_username.to_string(),
            home_id,
        })
    }
}

use_case!(GetInvitationsByUser, InvitationRepository);

impl GetInvitationsByUser {
    pub fn execute(&self, user_id: EntityId) -> ResourceStream<Vec<Invitation>> {
        self.repository.invitations_by_user(user_id)
    }
}

use_case!(GetInvitationInfo, InvitationRepository);

impl GetInvitationInfo {
    pub fn execute(&self, id: EntityId) -> ResourceStream<InvitationInfo> {
        self.repository.invitation_info(id)
    }
}

use_case!(
    /// Accepting an invitation that was already resolved fails
    AcceptInvitation,
    InvitationRepository
);

impl AcceptInvitation {
    pub fn execute(&self, id: EntityId) -> ResourceStream<()> {
        self.repository.accept_invitation(id)
    }
}

use_case!(DeclineInvitation, InvitationRepository);

impl DeclineInvitation {
    pub fn execute(&self, id: EntityId) -> ResourceStream<()> {
        self.repository.decline_invitation(id)
    }
}

#[derive(Clone)]
pub struct InvitationUseCases {
    pub send: SendInvitation,
    pub get_by_user: GetInvitationsByUser,
    pub get_info: GetInvitationInfo,
    pub accept: AcceptInvitation,
    pub decline: DeclineInvitation,
}

impl InvitationUseCases {
    pub fn new(repository: Arc<dyn InvitationRepository>) -> Self {
        Self {
            send: SendInvitation::new(repository.clone()),
            get_by_user: GetInvitationsByUser::new(repository.clone()),
            get_info: GetInvitationInfo::new(repository.clone()),
            accept: AcceptInvitation::new(repository.clone()),
            decline: DeclineInvitation::new(repository),
        }
    }
}
