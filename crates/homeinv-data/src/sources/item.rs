use homeinv_domain::{EntityId, Failure, Item, ItemDetail, ItemMove, NewItem};
use homeinv_http::ApiRequest;

use super::{with_body, RemoteSource};
use crate::{
    dto::{ItemDetailDto, ItemDto, ItemMoveDto, NewItemDto},
    endpoints, messages, policy,
    policy::{EmptyPolicy, ErrorPolicy},
};

#[derive(Clone)]
pub struct ItemRemoteDataSource {
    remote: RemoteSource,
}

impl ItemRemoteDataSource {
    pub fn new(remote: RemoteSource) -> Self {
        Self { remote }
    }

    pub async fn items_by_compartment(&self, compartment_id: EntityId) -> Result<Vec<Item>, Failure> {
        let items: Vec<ItemDto> = self
            .remote
            .fetch_list(
                ApiRequest::get(endpoints::items_by_compartment(compartment_id)),
                ErrorPolicy::NONE,
                EmptyPolicy::Allow,
                messages::RETRIEVING_ITEMS_BY_COMPARTMENT,
            )
            .await?;
        Ok(items.into_iter().map(Item::from).collect())
    }

    /// No match is `Ok(vec![])`, never an error
    pub async fn items_by_search(&self, home_id: EntityId, word: &str) -> Result<Vec<Item>, Failure> {
        let request = ApiRequest::get(endpoints::items_by_home(home_id))
            .query(endpoints::SEARCH_WORD_PARAM, word);
        let items: Vec<ItemDto> = self
            .remote
            .fetch_list(request, ErrorPolicy::NONE, EmptyPolicy::Allow, messages::SEARCHING_ITEMS)
            .await?;
        Ok(items.into_iter().map(Item::from).collect())
    }

    pub async fn item_by_id(&self, id: EntityId) -> Result<ItemDetail, Failure> {
        let dto: ItemDetailDto = self
            .remote
            .fetch(
                ApiRequest::get(endpoints::item(id)),
                policy::ITEM_BY_ID,
                messages::RETRIEVING_ITEM_BY_ID,
            )
            .await?;
        Ok(dto.into())
    }

    pub async fn save_item(&self, item: &NewItem) -> Result<ItemDetail, Failure> {
        let request = with_body(ApiRequest::post(endpoints::ITEMS), &NewItemDto::from(item))?;
        let dto: ItemDetailDto = self
            .remote
            .fetch(request, policy::SAVE_ITEM, messages::SAVING_ITEM)
            .await?;
        Ok(dto.into())
    }

    pub async fn update_item(&self, item: &ItemDetail) -> Result<ItemDetail, Failure> {
        let request = with_body(ApiRequest::put(endpoints::item(item.id)), &ItemDetailDto::from(item))?;
        let dto: ItemDetailDto = self
            .remote
            .fetch(request, policy::UPDATE_ITEM, messages::UPDATING_ITEM)
            .await?;
        Ok(dto.into())
    }

    pub async fn delete_item(&self, id: EntityId) -> Result<(), Failure> {
        self.remote
            .execute(
                ApiRequest::delete(endpoints::item(id)),
                policy::ITEM_BY_ID,
                messages::DELETING_ITEM,
            )
            .await
    }

    pub async fn move_item(&self, item_move: ItemMove) -> Result<(), Failure> {
        let request = with_body(ApiRequest::put(endpoints::ITEMS_MOVE), &ItemMoveDto::from(item_move))?;
        self.remote
            .execute(request, policy::ITEM_BY_ID, messages::MOVING_ITEM)
            .await
    }

    pub async fn item_route(&self, id: EntityId) -> Result<String, Failure> {
        self.remote
            .fetch(
                ApiRequest::get(endpoints::item_route(id)),
                policy::ITEM_ROUTE,
                messages::RETRIEVING_ITEM_ROUTE,
            )
            .await
    }
}
