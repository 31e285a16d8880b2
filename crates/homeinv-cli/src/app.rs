// Composition root: configuration → HTTP client → repositories → use cases → screens

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use homeinv_application::{SessionContext, UseCases};
use homeinv_config::{AppConfig, ConfigManager};
use homeinv_data::remote_repositories;
use homeinv_domain::repositories::Repositories;
use homeinv_http::HttpClient;
use homeinv_presentation::*;
use tracing::debug;

/// Config manager for `--config`, or the default location
pub fn config_manager(path: Option<PathBuf>) -> ConfigManager {
    match path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    }
}

/// Load the layered configuration and apply `--base-url`
pub fn load_config(manager: &ConfigManager, base_url: Option<&str>) -> Result<AppConfig> {
    let mut config = manager.load_config().with_context(|| {
        format!("failed to load configuration from {}", manager.config_path().display())
    })?;
    if let Some(base_url) = base_url {
        config.api.base_url = base_url.to_string();
        manager.validate_config(&config)?;
    }
    Ok(config)
}

/// Use cases and session shared by every screen of one run
pub struct App {
    use_cases: UseCases,
    session: Arc<SessionContext>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = HttpClient::new(config.api.to_http_config())
            .context("failed to build the HTTP client")?;
        debug!(base_url = %config.api.base_url, "Remote repositories ready");
        Ok(Self::from_repositories(&remote_repositories(Arc::new(client))))
    }

    pub fn from_repositories(repositories: &Repositories) -> Self {
        Self {
            use_cases: UseCases::new(repositories),
            session: Arc::new(SessionContext::new()),
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn login_screen(&self) -> LoginScreen {
        LoginScreen::new(self.use_cases.users.clone(), Arc::clone(&self.session))
    }

    pub fn register_screen(&self) -> RegisterScreen {
        RegisterScreen::new(self.use_cases.users.clone())
    }

    pub fn my_homes_screen(&self) -> MyHomesScreen {
        MyHomesScreen::new(self.use_cases.homes.clone(), Arc::clone(&self.session))
    }

    pub fn home_screen(&self) -> HomeScreen {
        HomeScreen::new(
            self.use_cases.homes.clone(),
            self.use_cases.users.clone(),
            self.use_cases.invitations.clone(),
            Arc::clone(&self.session),
        )
    }

    pub fn rooms_screen(&self) -> RoomsScreen {
        RoomsScreen::new(self.use_cases.rooms.clone(), Arc::clone(&self.session))
    }

    pub fn room_screen(&self) -> RoomScreen {
        RoomScreen::new(self.use_cases.rooms.clone(), self.use_cases.furniture.clone())
    }

    pub fn furniture_screen(&self) -> FurnitureScreen {
        FurnitureScreen::new(
            self.use_cases.furniture.clone(),
            self.use_cases.compartments.clone(),
        )
    }

    pub fn compartment_screen(&self) -> CompartmentScreen {
        CompartmentScreen::new(
            self.use_cases.compartments.clone(),
            self.use_cases.items.clone(),
        )
    }

    pub fn item_screen(&self) -> ItemScreen {
        ItemScreen::new(
            self.use_cases.items.clone(),
            self.use_cases.rooms.clone(),
            self.use_cases.furniture.clone(),
            self.use_cases.compartments.clone(),
            Arc::clone(&self.session),
        )
    }

    pub fn search_screen(&self) -> SearchScreen {
        SearchScreen::new(self.use_cases.items.clone())
    }

    pub fn account_screen(&self) -> AccountScreen {
        AccountScreen::new(
            self.use_cases.users.clone(),
            self.use_cases.invitations.clone(),
            Arc::clone(&self.session),
        )
    }
}
