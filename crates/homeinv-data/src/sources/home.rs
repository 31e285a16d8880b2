use homeinv_domain::{EntityId, Failure, Home, MyHomes};
use homeinv_http::ApiRequest;

use super::{with_body, RemoteSource};
use crate::{
    dto::{HomeDto, HomeUpdateDto, MyHomesDto, NewHomeDto},
    endpoints, messages, policy,
};

#[derive(Clone)]
pub struct HomeRemoteDataSource {
    remote: RemoteSource,
}

impl HomeRemoteDataSource {
    pub fn new(remote: RemoteSource) -> Self {
        Self { remote }
    }

    /// Owned and member homes of a user. Both partitions empty is an error.
    pub async fn homes_by_user(&self, user_id: EntityId) -> Result<MyHomes, Failure> {
        let dto: MyHomesDto = self
            .remote
            .fetch_non_empty(
                ApiRequest::get(endpoints::homes_by_user(user_id)),
                policy::HOMES_BY_USER,
                policy::HOMES_BY_USER_EMPTY,
                |homes: &MyHomesDto| {
                    homes.owner.as_ref().map_or(true, Vec::is_empty)
                        && homes.member.as_ref().map_or(true, Vec::is_empty)
                },
                messages::RETRIEVING_HOMES_BY_USER,
            )
            .await?;
        Ok(dto.into())
    }

    pub async fn home_by_id(&self, id: EntityId) -> Result<Home, Failure> {
        let dto: HomeDto = self
            .remote
            .fetch(
                ApiRequest::get(endpoints::home_by_id(id)),
                policy::HOME_BY_ID,
                messages::RETRIEVING_HOME_BY_ID,
            )
            .await?;
        Ok(dto.into())
    }

    pub async fn save_home(&self, home: &Home) -> Result<Home, Failure> {
        let request = with_body(ApiRequest::post(endpoints::HOMES), &NewHomeDto::from(home))
            .map_err(|failure| policy::SAVE_HOME.apply(failure))?;
        let dto: HomeDto = self
            .remote
            .fetch(request, policy::SAVE_HOME, messages::SAVING_HOME_CONTEXT)
            .await?;
        Ok(dto.into())
    }

    pub async fn update_home(&self, home: &Home) -> Result<Home, Failure> {
        let request = with_body(ApiRequest::put(endpoints::home(home.id)), &HomeUpdateDto::from(home))?;
        let dto: HomeDto = self
            .remote
            .fetch(request, policy::UPDATE_HOME, messages::UPDATING_HOME_CONTEXT)
            .await?;
        Ok(dto.into())
    }

    pub async fn delete_home(&self, id: EntityId) -> Result<(), Failure> {
        self.remote
            .execute(
                ApiRequest::delete(endpoints::home(id)),
                policy::DELETE_HOME,
                messages::DELETING_HOME_CONTEXT,
            )
            .await
    }
}
