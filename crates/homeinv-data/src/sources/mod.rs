//! Remote data sources
//!
//! One source per entity. Every method names its request, its mapper and its
//! [`ErrorPolicy`]; the shared [`RemoteSource`] does the rest. Sources never
//! panic and never return transport errors: every outcome is a
//! `Result<T, Failure>`.

mod compartment;
mod furniture;
mod home;
mod invitation;
mod item;
mod room;
mod user;

use std::sync::Arc;

use homeinv_domain::Failure;
use homeinv_http::{ApiRequest, HttpClientTrait};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::{
    adapter::{safe_call, safe_call_no_body},
    policy::{EmptyPolicy, ErrorPolicy},
};

pub use compartment::CompartmentRemoteDataSource;
pub use furniture::FurnitureRemoteDataSource;
pub use home::HomeRemoteDataSource;
pub use invitation::InvitationRemoteDataSource;
pub use item::ItemRemoteDataSource;
pub use room::RoomRemoteDataSource;
pub use user::UserRemoteDataSource;

/// Shared request runner used by every data source
#[derive(Clone)]
pub struct RemoteSource {
    client: Arc<dyn HttpClientTrait>,
}

impl RemoteSource {
    pub fn new(client: Arc<dyn HttpClientTrait>) -> Self {
        Self { client }
    }

    /// Fetch and decode a single payload
    pub async fn fetch<D>(&self, request: ApiRequest, policy: ErrorPolicy, context: &str) -> Result<D, Failure>
    where
        D: DeserializeOwned,
    {
        let result = safe_call(|| self.client.request(request)).await;
        finish(result.map_err(|failure| policy.apply(failure)), context)
    }

    /// Fetch a collection and apply the endpoint's empty-collection rule
    pub async fn fetch_list<D>(
        &self,
        request: ApiRequest,
        policy: ErrorPolicy,
        empty: EmptyPolicy,
        context: &str,
    ) -> Result<Vec<D>, Failure>
    where
        D: DeserializeOwned,
    {
        let result = safe_call(|| self.client.request(request)).await;
        let result = empty.apply(result, Vec::is_empty);
        finish(result.map_err(|failure| policy.apply(failure)), context)
    }

    /// Fetch a composite payload that counts as empty according to `is_empty`
    pub async fn fetch_non_empty<D, F>(
        &self,
        request: ApiRequest,
        policy: ErrorPolicy,
        empty: EmptyPolicy,
        is_empty: F,
        context: &str,
    ) -> Result<D, Failure>
    where
        D: DeserializeOwned + Default,
        F: FnOnce(&D) -> bool,
    {
        self.fetch_non_empty_map(request, policy, empty, is_empty, Ok, context)
            .await
    }

    /// Like [`fetch_non_empty`](Self::fetch_non_empty), with a fallible
    /// conversion whose failure is logged like any other
    pub async fn fetch_non_empty_map<D, T, F, M>(
        &self,
        request: ApiRequest,
        policy: ErrorPolicy,
        empty: EmptyPolicy,
        is_empty: F,
        map: M,
        context: &str,
    ) -> Result<T, Failure>
    where
        D: DeserializeOwned + Default,
        F: FnOnce(&D) -> bool,
        M: FnOnce(D) -> Result<T, Failure>,
    {
        let result = safe_call(|| self.client.request(request)).await;
        let result = empty
            .apply(result, is_empty)
            .map_err(|failure| policy.apply(failure))
            .and_then(map);
        finish(result, context)
    }

    /// Run a request whose response has no payload
    pub async fn execute(&self, request: ApiRequest, policy: ErrorPolicy, context: &str) -> Result<(), Failure> {
        let result = safe_call_no_body(|| self.client.request(request)).await;
        finish(result.map_err(|failure| policy.apply(failure)), context)
    }
}

/// Build a request carrying a JSON body
pub(crate) fn with_body<B: Serialize>(request: ApiRequest, body: &B) -> Result<ApiRequest, Failure> {
    request.json(body).map_err(Failure::decode)
}

fn finish<T>(result: Result<T, Failure>, context: &str) -> Result<T, Failure> {
    if let Err(failure) = &result {
        info!(kind = ?failure.kind, status = ?failure.status, "Error while {}: {}", context, failure.message);
    }
    result
}
