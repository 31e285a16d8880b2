use homeinv_domain::{models::*, repositories::UserRepository, ResourceStream};

use super::resource_stream;
use crate::sources::UserRemoteDataSource;

pub struct UserRepositoryImpl {
    source: UserRemoteDataSource,
}

impl UserRepositoryImpl {
    pub fn new(source: UserRemoteDataSource) -> Self {
        Self { source }
    }
}

impl UserRepository for UserRepositoryImpl {
    fn login(&self, credentials: Credentials) -> ResourceStream<EntityId> {
        let source = self.source.clone();
        resource_stream(move || async move { source.login(&credentials).await })
    }

    fn register(&self, registration: Registration) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.register(&registration).await })
    }

    fn user_by_id(&self, id: EntityId) -> ResourceStream<User> {
        let source = self.source.clone();
        resource_stream(move || async move { source.user_by_id(id).await })
    }

    fn user_by_username(&self, username: String) -> ResourceStream<User> {
        let source = self.source.clone();
        resource_stream(move || async move { source.user_by_username(&username).await })
    }

    fn home_users(&self, home_id: EntityId) -> ResourceStream<HomeUsers> {
        let source = self.source.clone();
        resource_stream(move || async move { source.home_users(home_id).await })
    }

    fn delete_user(&self, id: EntityId) -> ResourceStream<()> {
        let source = self.source.clone();
        resource_stream(move || async move { source.delete_user(id).await })
    }
}
