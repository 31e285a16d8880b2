use std::sync::Arc;

use homeinv_domain::{
    repositories::ItemRepository, EntityId, Item, ItemDetail, ItemMove, NewItem, ResourceStream,
};

use_case!(GetItemsByCompartment, ItemRepository);

impl GetItemsByCompartment {
    pub fn execute(&self, compartment_id: EntityId) -> ResourceStream<Vec<Item>> {
        self.repository.items_by_compartment(compartment_id)
    }
}

use_case!(
    /// Items of a home matching a search word. No match is an empty list.
    GetItemsBySearchWord,
    ItemRepository
);

impl GetItemsBySearchWord {
    pub fn execute(&self, home_id: EntityId, word: &str) -> ResourceStream<Vec<Item>> {
        self.repository.items_by_search(home_id, word.to_string())
    }
}

use_case!(GetItemById, ItemRepository);

impl GetItemById {
    pub fn execute(&self, id: EntityId) -> ResourceStream<ItemDetail> {
        self.repository.item_by_id(id)
    }
}

use_case!(SaveItem, ItemRepository);

impl SaveItem {
    pub fn execute(&self, name: &str, compartment_id: EntityId, tags: Vec<String>) -> ResourceStream<ItemDetail> {
        self.repository.save_item(NewItem {
            name: name.to_string(),
            compartment_id,
            tags,
        })
    }
}

use_case!(UpdateItem, ItemRepository);

impl UpdateItem {
    pub fn execute(&self, item: ItemDetail) -> ResourceStream<ItemDetail> {
        self.repository.update_item(item)
    }
}

use_case!(DeleteItem, ItemRepository);

impl DeleteItem {
    pub fn execute(&self, id: EntityId) -> ResourceStream<()> {
        self.repository.delete_item(id)
    }
}

use_case!(MoveItem, ItemRepository);

impl MoveItem {
    pub fn execute(&self, item_id: EntityId, compartment_id: EntityId) -> ResourceStream<()> {
        self.repository.move_item(ItemMove {
            item_id,
            compartment_id,
        })
    }
}

use_case!(GetItemRoute, ItemRepository);

impl GetItemRoute {
    pub fn execute(&self, id: EntityId) -> ResourceStream<String> {
        self.repository.item_route(id)
    }
}

#[derive(Clone)]
pub struct ItemUseCases {
    pub get_by_compartment: GetItemsByCompartment,
    pub search: GetItemsBySearchWord,
    pub get_item: GetItemById,
    pub save_item: SaveItem,
    pub update_item: UpdateItem,
    pub delete_item: DeleteItem,
    pub move_item: MoveItem,
    pub get_route: GetItemRoute,
}

impl ItemUseCases {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self {
            get_by_compartment: GetItemsByCompartment::new(repository.clone()),
            search: GetItemsBySearchWord::new(repository.clone()),
            get_item: GetItemById::new(repository.clone()),
            save_item: SaveItem::new(repository.clone()),
            update_item: UpdateItem::new(repository.clone()),
            delete_item: DeleteItem::new(repository.clone()),
            move_item: MoveItem::new(repository.clone()),
            get_route: GetItemRoute::new(repository),
        }
    }
}
