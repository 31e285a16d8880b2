use homeinv_domain::{Compartment, EntityId, Failure};
use homeinv_http::ApiRequest;

use super::{with_body, RemoteSource};
use crate::{
    dto::{CompartmentDto, CompartmentUpdateDto, NewCompartmentDto},
    endpoints, messages, policy,
    policy::{EmptyPolicy, ErrorPolicy},
};

#[derive(Clone)]
pub struct CompartmentRemoteDataSource {
    remote: RemoteSource,
}

impl CompartmentRemoteDataSource {
    pub fn new(remote: RemoteSource) -> Self {
        Self { remote }
    }

    pub async fn compartments_by_furniture(&self, furniture_id: EntityId) -> Result<Vec<Compartment>, Failure> {
        let compartments: Vec<CompartmentDto> = self
            .remote
            .fetch_list(
                ApiRequest::get(endpoints::compartments_by_furniture(furniture_id)),
                ErrorPolicy::NONE,
                EmptyPolicy::Allow,
                messages::RETRIEVING_COMPARTMENTS_BY_FURNITURE,
            )
            .await?;
        Ok(compartments.into_iter().map(Compartment::from).collect())
    }

    pub async fn compartment_by_id(&self, id: EntityId) -> Result<Compartment, Failure> {
        let dto: CompartmentDto = self
            .remote
            .fetch(
                ApiRequest::get(endpoints::compartment(id)),
                policy::COMPARTMENT_BY_ID,
                messages::RETRIEVING_COMPARTMENT_BY_ID,
            )
            .await?;
        Ok(dto.into())
    }

    pub async fn save_compartment(&self, compartment: &Compartment) -> Result<Compartment, Failure> {
        let request = with_body(
            ApiRequest::post(endpoints::COMPARTMENTS),
            &NewCompartmentDto::from(compartment),
        )?;
        let dto: CompartmentDto = self
            .remote
            .fetch(request, policy::SAVE_COMPARTMENT, messages::SAVING_COMPARTMENT)
            .await?;
        Ok(dto.into())
    }

    pub async fn update_compartment(&self, compartment: &Compartment) -> Result<Compartment, Failure> {
        let request = with_body(
            ApiRequest::put(endpoints::compartment(compartment.id)),
            &CompartmentUpdateDto::from(compartment),
        )?;
        let dto: CompartmentDto = self
            .remote
            .fetch(request, policy::UPDATE_COMPARTMENT, messages::UPDATING_COMPARTMENT)
            .await?;
        Ok(dto.into())
    }

    pub async fn delete_compartment(&self, id: EntityId) -> Result<(), Failure> {
        self.remote
            .execute(
                ApiRequest::delete(endpoints::compartment(id)),
                policy::DELETE_COMPARTMENT,
                messages::DELETING_COMPARTMENT,
            )
            .await
    }
}
