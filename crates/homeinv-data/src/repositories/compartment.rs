use homeinv_domain::{models::*, repositories::CompartmentRepository, ResourceStream};

use super::resource_stream;
use crate::sources::CompartmentRemoteDataSource;

pub struct CompartmentRepositoryImpl {
    source: CompartmentRemoteDataSource,
}

impl CompartmentRepositoryImpl {
    pub fn new(source: CompartmentRemoteDataSource) -> Self {
        Self { source }
    }
}

impl CompartmentRepository for CompartmentRepositoryImpl {
    fn compartments_by_furniture(&self, furniture_id: EntityId) -> ResourceStream<Vec<Compartment>> {
        let source = self.source.clone();
        resource_stream(move || async move { source.compartments_by_furniture(furniture_id).await })
    }

    fn compartment_by_id(&self, id: EntityId) -> ResourceStream<Compartment> {
        let source = self.source.clone();
        resource_stream(move || async move { source.compartment_by_id(id).await })
    }

    fn save_compartment(&self, compartment: Compartment) -> ResourceStream<Compartment> {
        let source = self.source.clone();
        resource_stream(move || async move { source.save_compartment(&compartment).await })
    }

    fn update_compartment(&self, compartment: Compartment) -> ResourceStream<Compartment> {
        let source = self.source.clone();
        resource_stream(move || async move { source.update_compartment(&compartment).await })
    }

    fn delete_compartment(&self, id: EntityId) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.delete_compartment(id).await })
    }
}
