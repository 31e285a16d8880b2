use homeinv_domain::{Credentials, EntityId, Failure, HomeUsers, Registration, User};
use homeinv_http::ApiRequest;

use super::{with_body, RemoteSource};
use crate::{
    dto::{HomeUsersDto, LoginDto, RegisterDto, UserDto},
    endpoints, messages, policy,
    policy::ErrorPolicy,
};

#[derive(Clone)]
pub struct UserRemoteDataSource {
    remote: RemoteSource,
}

impl UserRemoteDataSource {
    pub fn new(remote: RemoteSource) -> Self {
        Self { remote }
    }

    /// Returns the id of the authenticated user
    pub async fn login(&self, credentials: &Credentials) -> Result<EntityId, Failure> {
        let request = with_body(ApiRequest::post(endpoints::USERS_LOGIN), &LoginDto::from(credentials))?;
        self.remote
            .fetch(request, policy::LOGIN, messages::LOGGING_IN)
            .await
    }

    pub async fn register(&self, registration: &Registration) -> Result<(), Failure> {
        let request = with_body(ApiRequest::post(endpoints::USERS), &RegisterDto::from(registration))?;
        self.remote
            .execute(request, policy::REGISTER, messages::REGISTERING)
            .await
    }

    pub async fn user_by_id(&self, id: EntityId) -> Result<User, Failure> {
        let dto: UserDto = self
            .remote
            .fetch(
                ApiRequest::get(endpoints::user(id)),
                policy::USER_LOOKUP,
                messages::RETRIEVING_USER_BY_ID,
            )
            .await?;
        Ok(dto.into())
    }

    pub async fn user_by_username(&self, username: &str) -> Result<User, Failure> {
        let dto: UserDto = self
            .remote
            .fetch(
                ApiRequest::get(endpoints::user_by_username(username)),
                policy::USER_LOOKUP,
                messages::RETRIEVING_USER_BY_USERNAME,
            )
            .await?;
        Ok(dto.into())
    }

    /// Owner and members of a home. A home without any users is an error.
    pub async fn home_users(&self, home_id: EntityId) -> Result<HomeUsers, Failure> {
        self.remote
            .fetch_non_empty_map(
                ApiRequest::get(endpoints::users_by_home(home_id)),
                ErrorPolicy::NONE,
                policy::HOME_USERS_EMPTY,
                HomeUsersDto::is_empty,
                |dto: HomeUsersDto| HomeUsers::try_from(dto),
                messages::RETRIEVING_USERS_BY_HOME,
            )
            .await
    }

    pub async fn delete_user(&self, id: EntityId) -> Result<(), Failure> {
        self.remote
            .execute(
                ApiRequest::delete(endpoints::user(id)),
                policy::USER_LOOKUP,
                messages::DELETING_USER,
            )
            .await
    }
}
