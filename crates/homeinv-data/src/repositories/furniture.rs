use homeinv_domain::{models::*, repositories::FurnitureRepository, ResourceStream};

use super::resource_stream;
use crate::sources::FurnitureRemoteDataSource;

pub struct FurnitureRepositoryImpl {
    source: FurnitureRemoteDataSource,
}

impl FurnitureRepositoryImpl {
    pub fn new(source: FurnitureRemoteDataSource) -> Self {
        Self { source }
    }
}

impl FurnitureRepository for FurnitureRepositoryImpl {
    fn furniture_by_room(&self, room_id: EntityId) -> ResourceStream<Vec<Furniture>> {
        let source = self.source.clone();
        resource_stream(move || async move { source.furniture_by_room(room_id).await })
    }

    fn furniture_by_id(&self, id: EntityId) -> ResourceStream<Furniture> {
        let source = self.source.clone();
        resource_stream(move || async move { source.furniture_by_id(id).await })
    }

    fn save_furniture(&self, furniture: Furniture) -> ResourceStream<Furniture> {
        let source = self.source.clone();
        resource_stream(move || async move { source.save_furniture(&furniture).await })
    }

    fn update_furniture(&self, furniture: Furniture) -> ResourceStream<Furniture> {
        let source = self.source.clone();
        resource_stream(move || async move { source.update_furniture(&furniture).await })
    }

    fn delete_furniture(&self, id: EntityId) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.delete_furniture(id).await })
    }
}
