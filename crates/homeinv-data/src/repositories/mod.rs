//! Stream-backed repository implementations
//!
//! Each repository method returns a cold stream built by [`resource_stream`].
//! Nothing runs until the stream is polled; then it yields `Loading`, runs the
//! data-source call on a spawned tokio task and yields the terminal state.

mod compartment;
mod furniture;
mod home;
mod invitation;
mod item;
mod room;
mod user;

use std::{future::Future, sync::Arc};

use homeinv_domain::{repositories::Repositories, Failure, Resource, ResourceStream};
use homeinv_http::HttpClientTrait;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::sources::{
    CompartmentRemoteDataSource, FurnitureRemoteDataSource, HomeRemoteDataSource,
    InvitationRemoteDataSource, ItemRemoteDataSource, RemoteSource, RoomRemoteDataSource,
    UserRemoteDataSource,
};

pub use compartment::CompartmentRepositoryImpl;
pub use furniture::FurnitureRepositoryImpl;
pub use home::HomeRepositoryImpl;
pub use invitation::InvitationRepositoryImpl;
pub use item::ItemRepositoryImpl;
pub use room::RoomRepositoryImpl;
pub use user::UserRepositoryImpl;

/// Build a cold `Loading → terminal` stream around `call`.
///
/// `call` is invoked only once the stream is first polled, and its future
/// runs on its own tokio task. Dropping the stream aborts that task.
pub fn resource_stream<T, F, Fut>(call: F) -> ResourceStream<T>
where
    T: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, Failure>> + Send + 'static,
{
    Box::pin(async_stream::stream! {
        yield Resource::Loading;

        let mut task = AbortOnDrop(tokio::spawn(call()));
        let outcome = match (&mut task.0).await {
            Ok(result) => Resource::from(result),
            Err(e) => {
                warn!("Repository task did not complete: {}", e);
                Resource::Error(Failure::transport(e))
            }
        };

        yield outcome;
    })
}

struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Every repository, wired to one HTTP client
pub fn remote_repositories(client: Arc<dyn HttpClientTrait>) -> Repositories {
    let remote = RemoteSource::new(client);

    Repositories {
        homes: Arc::new(HomeRepositoryImpl::new(HomeRemoteDataSource::new(remote.clone()))),
        rooms: Arc::new(RoomRepositoryImpl::new(RoomRemoteDataSource::new(remote.clone()))),
        furniture: Arc::new(FurnitureRepositoryImpl::new(FurnitureRemoteDataSource::new(
            remote.clone(),
        ))),
        compartments: Arc::new(CompartmentRepositoryImpl::new(
            CompartmentRemoteDataSource::new(remote.clone()),
        )),
        items: Arc::new(ItemRepositoryImpl::new(ItemRemoteDataSource::new(remote.clone()))),
        users: Arc::new(UserRepositoryImpl::new(UserRemoteDataSource::new(remote.clone()))),
        invitations: Arc::new(InvitationRepositoryImpl::new(InvitationRemoteDataSource::new(
            remote,
        ))),
    }
}
