//! Screens and their shared contract

mod account;
mod compartment;
mod furniture;
mod home;
mod item;
mod login;
mod my_homes;
mod register;
mod room;
mod rooms;
mod search;

use homeinv_application::ApplicationResult;
use tokio::sync::{mpsc, watch};

use crate::store::{Store, ViewState};

pub use account::*;
pub use compartment::*;
pub use furniture::*;
pub use home::*;
pub use item::*;
pub use login::*;
pub use my_homes::*;
pub use register::*;
pub use room::*;
pub use rooms::*;
pub use search::*;

/// A screen: state, inbound events and outbound effects
pub trait Screen {
    type State: ViewState + Clone;
    type Event;
    type Effect: Send + 'static;

    fn store(&self) -> &Store<Self::State, Self::Effect>;

    /// Handle one event. Remote work runs in tasks owned by the screen.
    fn dispatch(&self, event: Self::Event);

    fn state(&self) -> watch::Receiver<Self::State> {
        self.store().subscribe()
    }

    fn snapshot(&self) -> Self::State {
        self.store().snapshot()
    }

    /// Effect receiver, available once
    fn effects(&self) -> Option<mpsc::UnboundedReceiver<Self::Effect>> {
        self.store().take_effects()
    }

    /// Wait for every task this screen started
    #[allow(async_fn_in_trait)]
    async fn settle(&self) {
        self.store().idle().await
    }
}

/// Unwraps a precondition, surfacing its failure as the screen error
pub(crate) fn precondition<S, F, T>(store: &Store<S, F>, result: ApplicationResult<T>) -> Option<T>
where
    S: ViewState,
    F: Send + 'static,
{
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            store.update(|state| state.set_error(Some(e.to_string())));
            None
        }
    }
}
