use std::sync::Arc;

use homeinv_domain::{repositories::CompartmentRepository, Compartment, EntityId, ResourceStream};

use_case!(GetCompartmentsByFurniture, CompartmentRepository);

impl GetCompartmentsByFurniture {
    pub fn execute(&self, furniture_id: EntityId) -> ResourceStream<Vec<Compartment>> {
        self.repository.compartments_by_furniture(furniture_id)
    }
}

use_case!(GetCompartmentById, CompartmentRepository);

impl GetCompartmentById {
    pub fn execute(&self, id: EntityId) -> ResourceStream<Compartment> {
        self.repository.compartment_by_id(id)
    }
}

use_case!(SaveCompartment, CompartmentRepository);

impl SaveCompartment {
    pub fn execute(&self, name: &str, furniture_id: EntityId) -> ResourceStream<Compartment> {
        self.repository.save_compartment(Compartment::new(name, furniture_id))
    }
}

use_case!(UpdateCompartment, CompartmentRepository);

impl UpdateCompartment {
    pub fn execute(&self, compartment: Compartment) -> ResourceStream<Compartment> {
        self.repository.update_compartment(compartment)
    }
}

use_case!(DeleteCompartment, CompartmentRepository);

impl DeleteCompartment {
    pub fn execute(&self, id: EntityId) -> ResourceStream<()> {
        self.repository.delete_compartment(id)
    }
}

#[derive(Clone)]
pub struct CompartmentUseCases {
    pub get_by_furniture: GetCompartmentsByFurniture,
    pub get_compartment: GetCompartmentById,
    pub save_compartment: SaveCompartment,
    pub update_compartment: UpdateCompartment,
    pub delete_compartment: DeleteCompartment,
}

impl CompartmentUseCases {
    pub fn new(repository: Arc<dyn CompartmentRepository>) -> Self {
        Self {
            get_by_furniture: GetCompartmentsByFurniture::new(repository.clone()),
            get_compartment: GetCompartmentById::new(repository.clone()),
            save_compartment: SaveCompartment::new(repository.clone()),
            update_compartment: UpdateCompartment::new(repository.clone()),
            delete_compartment: DeleteCompartment::new(repository),
        }
    }
}
