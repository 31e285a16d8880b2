use std::sync::Arc;

use homeinv_domain::{
    repositories::UserRepository, Credentials, EntityId, HomeUsers, Registration, ResourceStream,
    User,
};

use_case!(
    /// Resolves to the id of the authenticated user
    Login,
    UserRepository
);

impl Login {
    pub fn execute(&self, username: &str, password: &str) -> ResourceStream<EntityId> {
        self.repository.login(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

use_case!(Register, UserRepository);

impl Register {
    pub fn execute(&self, username: &str, password: &str, email: &str) -> ResourceStream<()> {
        self.repository.register(Registration {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        })
    }
}

use_case!(GetUserById, UserRepository);

impl GetUserById {
    pub fn execute(&self, id: EntityId) -> ResourceStream<User> {
        self.repository.user_by_id(id)
    }
}

use_case!(GetUserByUsername, UserRepository);

impl GetUserByUsername {
    pub fn execute(&self, username: &str) -> ResourceStream<User> {
        self.repository.user_by_username(username.to_string())
    }
}

use_case!(GetHomeUsers, UserRepository);

impl GetHomeUsers {
    pub fn execute(&self, home_id: EntityId) -> ResourceStream<HomeUsers> {
        self.repository.home_users(home_id)
    }
}

use_case!(DeleteUser, UserRepository);

impl DeleteUser {
    pub fn execute(&self, id: EntityId) -> ResourceStream<()> {
        self.repository.delete_user(id)
    }
}

#[derive(Clone)]
pub struct UserUseCases {
    pub login: Login,
    pub register: Register,
    pub get_user: GetUserById,
    pub get_by_username: GetUserByUsername,
    pub get_home_users: GetHomeUsers,
    pub delete_user: DeleteUser,
}

impl UserUseCases {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            login: Login::new(repository.clone()),
            register: Register::new(repository.clone()),
            get_user: GetUserById::new(repository.clone()),
            get_by_username: GetUserByUsername::new(repository.clone()),
            get_home_users: GetHomeUsers::new(repository.clone()),
            delete_user: DeleteUser::new(repository),
        }
    }
}
