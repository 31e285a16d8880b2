use homeinv_domain::{models::*, repositories::HomeRepository, ResourceStream};

use super::resource_stream;
use crate::sources::HomeRemoteDataSource;

pub struct HomeRepositoryImpl {
    source: HomeRemoteDataSource,
}

impl HomeRepositoryImpl {
    pub fn new(source: HomeRemoteDataSource) -> Self {
        Self { source }
    }
}

impl HomeRepository for HomeRepositoryImpl {
    fn homes_by_user(&self, user_id: EntityId) -> ResourceStream<MyHomes> {
        let source = self.source.clone();
        resource_stream(move || async move { source.homes_by_user(user_id).await })
    }

    fn home_by_id(&self, id: EntityId) -> ResourceStream<Home> {
        let source = self.source.clone();
        resource_stream(move || async move { source.home_by_id(id).await })
    }

    fn save_home(&self, home: Home) -> ResourceStream<Home> {
        let source = self.source.clone();
        resource_stream(move || async move { source.save_home(&home).await })
    }

    fn update_home(&self, home: Home) -> ResourceStream<Home> {
        let source = self.source.clone();
        resource_stream(move || async move { source.update_home(&home).await })
    }

    fn delete_home(&self, id: EntityId) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.delete_home(id).await })
    }
}
