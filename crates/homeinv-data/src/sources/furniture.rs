use homeinv_domain::{EntityId, Failure, Furniture};
use homeinv_http::ApiRequest;

use super::{with_body, RemoteSource};
use crate::{
    dto::{FurnitureDto, FurnitureUpdateDto, NewFurnitureDto},
    endpoints, messages, policy,
    policy::{EmptyPolicy, ErrorPolicy},
};

#[derive(Clone)]
pub struct FurnitureRemoteDataSource {
    remote: RemoteSource,
}

impl FurnitureRemoteDataSource {
    pub fn new(remote: RemoteSource) -> Self {
        Self { remote }
    }

    pub async fn furniture_by_room(&self, room_id: EntityId) -> Result<Vec<Furniture>, Failure> {
        let furniture: Vec<FurnitureDto> = self
            .remote
            .fetch_list(
                ApiRequest::get(endpoints::furniture_by_room(room_id)),
                ErrorPolicy::NONE,
                EmptyPolicy::Allow,
                messages::RETRIEVING_FURNITURE_BY_ROOM,
            )
            .await?;
        Ok(furniture.into_iter().map(Furniture::from).collect())
    }

    pub async fn furniture_by_id(&self, id: EntityId) -> Result<Furniture, Failure> {
        let dto: FurnitureDto = self
            .remote
            .fetch(
                ApiRequest::get(endpoints::furniture(id)),
                policy::FURNITURE_BY_ID,
                messages::RETRIEVING_FURNITURE_BY_ID,
            )
            .await?;
        Ok(dto.into())
    }

    pub async fn save_furniture(&self, furniture: &Furniture) -> Result<Furniture, Failure> {
        let request = with_body(
            ApiRequest::post(endpoints::FURNITURE),
            &NewFurnitureDto::from(furniture),
        )?;
        let dto: FurnitureDto = self
            .remote
            .fetch(request, policy::SAVE_FURNITURE, messages::SAVING_FURNITURE)
            .await?;
        Ok(dto.into())
    }

    pub async fn update_furniture(&self, furniture: &Furniture) -> Result<Furniture, Failure> {
        let request = with_body(
            ApiRequest::put(endpoints::furniture(furniture.id)),
            &FurnitureUpdateDto::from(furniture),
        )?;
        let dto: FurnitureDto = self
            .remote
            .fetch(request, policy::UPDATE_FURNITURE, messages::UPDATING_FURNITURE)
            .await?;
        Ok(dto.into())
    }

    pub async fn delete_furniture(&self, id: EntityId) -> Result<(), Failure> {
        self.remote
            .execute(
                ApiRequest::delete(endpoints::furniture(id)),
                policy::DELETE_FURNITURE,
                messages::DELETING_FURNITURE,
            )
            .await
    }
}
