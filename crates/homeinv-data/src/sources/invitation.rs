use homeinv_domain::{EntityId, Failure, Invitation, InvitationInfo, InvitationToSend};
use homeinv_http::ApiRequest;

use super::{with_body, RemoteSource};
use crate::{
    dto::{InvitationDto, InvitationInfoDto, InvitationToSendDto},
    endpoints, messages, policy,
    policy::{EmptyPolicy, ErrorPolicy},
};

#[derive(Clone)]
pub struct InvitationRemoteDataSource {
    remote: RemoteSource,
}

impl InvitationRemoteDataSource {
    pub fn new(remote: RemoteSource) -> Self {
        Self { remote }
    }

    /// The service answers 201 with no body
    pub async fn send_invitation(&self, invitation: &InvitationToSend) -> Result<(), Failure> {
        let request = with_body(
            ApiRequest::post(endpoints::INVITATIONS_SEND),
            &InvitationToSendDto::from(invitation),
        )?;
        self.remote
            .execute(request, policy::SEND_INVITATION, messages::SENDING_INVITATION)
            .await
    }

    pub async fn invitations_by_user(&self, user_id: EntityId) -> Result<Vec<Invitation>, Failure> {
        let invitations: Vec<InvitationDto> = self
            .remote
            .fetch_list(
                ApiRequest::get(endpoints::invitations_by_user(user_id)),
                ErrorPolicy::NONE,
                EmptyPolicy::Allow,
                messages::RETRIEVING_INVITATIONS,
            )
            .await?;
        Ok(invitations.into_iter().map(Invitation::from).collect())
    }

    pub async fn invitation_info(&self, id: EntityId) -> Result<InvitationInfo, Failure> {
        let dto: InvitationInfoDto = self
            .remote
            .fetch(
                ApiRequest::get(endpoints::invitation_info(id)),
                policy::INVITATION_INFO,
                messages::RETRIEVING_INVITATION_INFO,
            )
            .await?;
        Ok(dto.into())
    }

    /// A second accept of the same invitation fails with a not-found failure
    pub async fn accept_invitation(&self, id: EntityId) -> Result<(), Failure> {
        self.remote
            .execute(
                ApiRequest::post(endpoints::accept_invitation(id)),
                policy::RESOLVE_INVITATION,
                messages::ACCEPTING_INVITATION,
            )
            .await
    }

    pub async fn decline_invitation(&self, id: EntityId) -> Result<(), Failure> {
        self.remote
            .execute(
                ApiRequest::delete(endpoints::decline_invitation(id)),
                policy::RESOLVE_INVITATION,
                messages::DECLINING_INVITATION,
            )
            .await
    }
}
