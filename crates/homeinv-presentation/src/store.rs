//! Screen state container
//!
//! A [`Store`] owns one screen's state in a `watch` channel, a queue of
//! one-shot effects (navigation, confirmations) and the set of tasks the
//! screen started. Dropping the store aborts every task still in flight.

use std::{future::Future, sync::Arc};

use futures::StreamExt;
use homeinv_domain::{Resource, ResourceStream};
use parking_lot::Mutex;
use tokio::{
    sync::{mpsc, watch},
    task::JoinSet,
};
use tracing::{debug, trace, warn};

/// Loading and error flags every screen state carries
pub trait ViewState: Send + Sync + 'static {
    fn is_loading(&self) -> bool;

    fn error(&self) -> Option<&str>;

    fn set_loading(&mut self, loading: bool);

    fn set_error(&mut self, error: Option<String>);
}

/// Implements [`ViewState`] for structs with `is_loading` and `error` fields
macro_rules! view_state {
    ($($state:ty),+ $(,)?) => {
        $(
            impl $crate::store::ViewState for $state {
                fn is_loading(&self) -> bool {
                    self.is_loading
                }

                fn error(&self) -> Option<&str> {
                    self.error.as_deref()
                }

                fn set_loading(&mut self, loading: bool) {
                    self.is_loading = loading;
                }

                fn set_error(&mut self, error: Option<String>) {
                    self.error = error;
                }
            }
        )+
    };
}

pub(crate) use view_state;

/// State, effects and tasks of one screen
pub struct Store<S, F> {
    state: Arc<watch::Sender<S>>,
    effects: mpsc::UnboundedSender<F>,
    effect_receiver: Mutex<Option<mpsc::UnboundedReceiver<F>>>,
    tasks: Mutex<JoinSet<()>>,
}

impl<S, F> Store<S, F>
where
    S: ViewState,
    F: Send + 'static,
{
    pub fn new(initial: S) -> Self {
        let (state, _) = watch::channel(initial);
        let (effects, receiver) = mpsc::unbounded_channel();
        Self {
            state: Arc::new(state),
            effects,
            effect_receiver: Mutex::new(Some(receiver)),
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Observe state changes
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.state.borrow().clone()
    }

    /// Take the effect receiver. Only the first caller gets it, so each
    /// effect is observed exactly once.
    pub fn take_effects(&self) -> Option<mpsc::UnboundedReceiver<F>> {
        self.effect_receiver.lock().take()
    }

    /// Modify the current state in place
    pub fn update(&self, modify: impl FnOnce(&mut S)) {
        self.state.send_modify(modify);
    }

    pub fn emit(&self, effect: F) {
        self.handle().emit(effect);
    }

    pub fn handle(&self) -> StoreHandle<S, F> {
        StoreHandle {
            state: Arc::clone(&self.state),
            effects: self.effects.clone(),
        }
    }

    /// Run a task bound to this store's lifetime
    pub fn spawn<T, Fut>(&self, task: T)
    where
        T: FnOnce(StoreHandle<S, F>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let future = task(self.handle());
        let mut tasks = self.tasks.lock();
        while let Some(finished) = tasks.try_join_next() {
            if let Err(e) = finished {
                warn!("Screen task ended abnormally: {}", e);
            }
        }
        tasks.spawn(future);
    }

    /// Wait until no task of this store is running
    pub async fn idle(&self) {
        loop {
            let mut tasks = std::mem::take(&mut *self.tasks.lock());
            if tasks.is_empty() {
                return;
            }
            while let Some(finished) = tasks.join_next().await {
                if let Err(e) = finished {
                    warn!("Screen task ended abnormally: {}", e);
                }
            }
        }
    }
}

/// Cloneable access to a store from inside its tasks
pub struct StoreHandle<S, F> {
    state: Arc<watch::Sender<S>>,
    effects: mpsc::UnboundedSender<F>,
}

impl<S, F> Clone for StoreHandle<S, F> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            effects: self.effects.clone(),
        }
    }
}

impl<S, F> StoreHandle<S, F>
where
    S: ViewState,
    F: Send + 'static,
{
    pub fn update(&self, modify: impl FnOnce(&mut S)) {
        self.state.send_modify(modify);
    }

    pub fn emit(&self, effect: F) {
        if self.effects.send(effect).is_err() {
            trace!("Effect dropped, receiver closed");
        }
    }

    /// Fold a resource stream into the state.
    ///
    /// `Loading` raises the loading flag. `Success` clears it together with
    /// the error and hands the payload to `apply`, whose result is returned.
    /// `Error` clears the flag and stores the failure message.
    pub async fn collect<T, R, A>(&self, mut stream: ResourceStream<T>, apply: A) -> Option<R>
    where
        T: Send + 'static,
        R: Send,
        A: FnOnce(&mut S, T) -> R + Send,
    {
        let mut apply = Some(apply);
        let mut applied = None;

        while let Some(resource) = stream.next().await {
            match resource {
                Resource::Loading => self.update(|state| state.set_loading(true)),
                Resource::Success(value) => {
                    let Some(apply) = apply.take() else {
                        continue;
                    };
                    self.update(|state| {
                        state.set_loading(false);
                        state.set_error(None);
                        applied = Some(apply(state, value));
                    });
                }
                Resource::Error(failure) => {
                    debug!(kind = ?failure.kind, "Screen received failure: {}", failure);
                    self.update(|state| {
                        state.set_loading(false);
                        state.set_error(Some(failure.message));
                    });
                }
            }
        }

        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use homeinv_domain::Failure;
    use std::time::Duration;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct CounterState {
        count: i64,
        is_loading: bool,
        error: Option<String>,
    }

    view_state!(CounterState);

    fn respond(result: Result<i64, Failure>) -> ResourceStream<i64> {
        Box::pin(stream::iter(vec![Resource::Loading, Resource::from(result)]))
    }

    #[tokio::test]
    async fn test_collect_success() {
        let store: Store<CounterState, ()> = Store::new(CounterState {
            error: Some("stale".into()),
            ..Default::default()
        });

        let applied = store
            .handle()
            .collect(respond(Ok(3)), |state, n| {
                state.count = n;
                n * 2
            })
            .await;

        assert_eq!(applied, Some(6));
        let state = store.snapshot();
        assert_eq!(state.count, 3);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_collect_error() {
        let store: Store<CounterState, ()> = Store::new(CounterState::default());

        let applied = store
            .handle()
            .collect(respond(Err(Failure::not_found())), |state, n| state.count = n)
            .await;

        assert_eq!(applied, None);
        let state = store.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.error(), Some(homeinv_domain::errors::NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn test_loading_is_observed() {
        let store: Store<CounterState, ()> = Store::new(CounterState::default());
        let mut states = store.subscribe();

        let pending: ResourceStream<i64> = Box::pin(
            stream::iter(vec![Resource::Loading]).chain(stream::pending()),
        );
        store.spawn(|handle| async move {
            handle.collect(pending, |state, n| state.count = n).await;
        });

        states.wait_for(|state| state.is_loading).await.unwrap();
    }

    #[tokio::test]
    async fn test_effects_taken_once() {
        let store: Store<CounterState, &'static str> = Store::new(CounterState::default());
        let mut effects = store.take_effects().unwrap();
        assert!(store.take_effects().is_none());

        store.emit("open");
        assert_eq!(effects.recv().await, Some("open"));
        assert!(effects.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_idle_waits_for_tasks() {
        let store: Store<CounterState, ()> = Store::new(CounterState::default());
        store.spawn(|handle| async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handle.update(|state| state.count = 1);
        });

        store.idle().await;
        assert_eq!(store.snapshot().count, 1);
    }

    #[tokio::test]
    async fn test_drop_aborts_tasks() {
        let store: Store<CounterState, ()> = Store::new(CounterState::default());
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        store.spawn(|_| async move {
            let _tx = tx;
            std::future::pending::<()>().await;
        });

        drop(store);
        assert!(rx.await.is_err());
    }
}
