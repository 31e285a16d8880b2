use homeinv_domain::{models::*, repositories::InvitationRepository, ResourceStream};

use super::resource_stream;
use crate::sources::InvitationRemoteDataSource;

pub struct InvitationRepositoryImpl {
    source: InvitationRemoteDataSource,
}

impl InvitationRepositoryImpl {
    pub fn new(source: InvitationRemoteDataSource) -> Self {
        Self { source }
    }
}

impl InvitationRepository for InvitationRepositoryImpl {
    fn send_invitation(&self, invitation: InvitationToSend) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.send_invitation(&invitation).await })
    }

    fn invitations_by_user(&self, user_id: EntityId) -> ResourceStream<Vec<Invitation>> {
        let source = self.source.clone();
        resource_stream(move || async move { source.invitations_by_user(user_id).await })
    }

    fn invitation_info(&self, id: EntityId) -> ResourceStream<InvitationInfo> {
        let source = self.source.clone();
        resource_stream(move || async move { source.invitation_info(id).await })
    }

    fn accept_invitation(&self, id: EntityId) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.accept_invitation(id).await })
    }

    fn decline_invitation(&self, id: EntityId) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.decline_invitation(id).await })
    }
}
