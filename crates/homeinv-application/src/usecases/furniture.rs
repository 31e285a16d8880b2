use std::sync::Arc;

use homeinv_domain::{repositories::FurnitureRepository, EntityId, Furniture, ResourceStream};

use_case!(GetFurnitureByRoom, FurnitureRepository);

impl GetFurnitureByRoom {
    pub fn execute(&self, room_id: EntityId) -> ResourceStream<Vec<Furniture>> {
        self.repository.furniture_by_room(room_id)
    }
}

use_case!(GetFurnitureById, FurnitureRepository);

impl GetFurnitureById {
    pub fn execute(&self, id: EntityId) -> ResourceStream<Furniture> {
        self.repository.furniture_by_id(id)
    }
}

use_case!(SaveFurniture, FurnitureRepository);

impl SaveFurniture {
    pub fn execute(&self, name: &str, room_id: EntityId) -> ResourceStream<Furniture> {
        self.repository.save_furniture(Furniture::new(name, room_id))
    }
}

use_case!(UpdateFurniture, FurnitureRepository);

impl UpdateFurniture {
    pub fn execute(&self, furniture: Furniture) -> ResourceStream<Furniture> {
        self.repository.update_furniture(furniture)
    }
}

use_case!(DeleteFurniture, FurnitureRepository);

impl DeleteFurniture {
    pub fn execute(&self, id: EntityId) -> ResourceStream<()> {
        self.repository.delete_furniture(id)
    }
}

#[derive(Clone)]
pub struct FurnitureUseCases {
    pub get_by_room: GetFurnitureByRoom,
    pub get_furniture: GetFurnitureById,
    pub save_furniture: SaveFurniture,
    pub update_furniture: UpdateFurniture,
    pub delete_furniture: DeleteFurniture,
}

impl FurnitureUseCases {
    pub fn new(repository: Arc<dyn FurnitureRepository>) -> Self {
        Self {
            get_by_room: GetFurnitureByRoom::new(repository.clone()),
            get_furniture: GetFurnitureById::new(repository.clone()),
            save_furniture: SaveFurniture::new(repository.clone()),
            update_furniture: UpdateFurniture::new(repository.clone()),
            delete_furniture: DeleteFurniture::new(repository),
        }
    }
}
