use std::sync::Arc;

use futures::StreamExt;
use homeinv_domain::{repositories::HomeRepository, EntityId, Home, MyHomes, ResourceStream};

use_case!(
    /// Homes a user owns or is a member of
    GetUserHomes,
    HomeRepository
);

impl GetUserHomes {
    pub fn execute(&self, user_id: EntityId) -> ResourceStream<MyHomes> {
        self.repository.homes_by_user(user_id)
    }
}

use_case!(GetHome, HomeRepository);

impl GetHome {
    pub fn execute(&self, id: EntityId) -> ResourceStream<Home> {
        self.repository.home_by_id(id)
    }
}

use_case!(
    /// Creates a home owned by `owner_id`
    SaveHome,
    HomeRepository
);

impl SaveHome {
    pub fn execute(&self, name: &str, owner_id: EntityId) -> ResourceStream<Home> {
        self.repository.save_home(Home::new(name, owner_id))
    }
}

use_case!(UpdateHome, HomeRepository);

impl UpdateHome {
    /// Rename a home. The owner is not sent on update.
    pub fn execute(&self, id: EntityId, name: &str, owner_id: EntityId) -> ResourceStream<Home> {
        self.repository.update_home(Home {
            id,
            name: name.to_string(),
            owner: owner_id,
        })
    }
}

use_case!(DeleteHome, HomeRepository);

impl DeleteHome {
    pub fn execute(&self, id: EntityId) -> ResourceStream<()> {
        self.repository.delete_home(id)
    }
}

use_case!(
    /// Whether a user owns a home, derived from the home's owner id
    CheckHomeOwnership,
    HomeRepository
);

impl CheckHomeOwnership {
    pub fn execute(&self, home_id: EntityId, user_id: EntityId) -> ResourceStream<bool> {
        Box::pin(
            self.repository
                .home_by_id(home_id)
                .map(move |state| state.map(|home| home.is_owned_by(user_id))),
        )
    }
}

/// Home use cases sharing one repository
#[derive(Clone)]
pub struct HomeUseCases {
    pub get_user_homes: GetUserHomes,
    pub get_home: GetHome,
    pub save_home: SaveHome,
    pub update_home: UpdateHome,
    pub delete_home: DeleteHome,
    pub check_ownership: CheckHomeOwnership,
}

impl HomeUseCases {
    pub fn new(repository: Arc<dyn HomeRepository>) -> Self {
        Self {
            get_user_homes: GetUserHomes::new(repository.clone()),
            get_home: GetHome::new(repository.clone()),
            save_home: SaveHome::new(repository.clone()),
            update_home: UpdateHome::new(repository.clone()),
            delete_home: DeleteHome::new(repository.clone()),
            check_ownership: CheckHomeOwnership::new(repository),
        }
    }
}
