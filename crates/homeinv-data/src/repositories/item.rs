use homeinv_domain::{models::*, repositories::ItemRepository, ResourceStream};

use super::resource_stream;
use crate::sources::ItemRemoteDataSource;

pub struct ItemRepositoryImpl {
    source: ItemRemoteDataSource,
}

impl ItemRepositoryImpl {
    pub fn new(source: ItemRemoteDataSource) -> Self {
        Self { source }
    }
}

impl ItemRepository for ItemRepositoryImpl {
    fn items_by_compartment(&self, compartment_id: EntityId) -> ResourceStream<Vec<Item>> {
        let source = self.source.clone();
        resource_stream(move || async move { source.items_by_compartment(compartment_id).await })
    }

    fn items_by_search(&self, home_id: EntityId, word: String) -> ResourceStream<Vec<Item>> {
        let source = self.source.clone();
        resource_stream(move || async move { source.items_by_search(home_id, &word).await })
    }

    fn item_by_id(&self, id: EntityId) -> ResourceStream<ItemDetail> {
        let source = self.source.clone();
        resource_stream(move || async move { source.item_by_id(id).await })
    }

    fn save_item(&self, item: NewItem) -> ResourceStream<ItemDetail> {
        let source = self.source.clone();
        resource_stream(move || async move { source.save_item(&item).await })
    }

    fn update_item(&self, item: ItemDetail) -> ResourceStream<ItemDetail> {
        let source = self.source.clone();
        resource_stream(move || async move { source.update_item(&item).await })
    }

    fn delete_item(&self, id: EntityId) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.delete_item(id).await })
    }

    fn move_item(&self, item_move: ItemMove) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.move_item(item_move).await })
    }

    fn item_route(&self, id: EntityId) -> ResourceStream<String> {
        let source = self.source.clone();
        resource_stream(move || async move { source.item_route(id).await })
    }
}
