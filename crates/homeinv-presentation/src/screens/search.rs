use homeinv_application::usecases::ItemUseCases;
use homeinv_domain::{EntityId, Item};

use super::Screen;
use crate::store::{view_state, Store};

/// Shown when a search completes without matches
pub const NO_ITEMS_FOUND: &str = "No items found";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub search_word: String,
    pub items: Vec<Item>,
    pub has_searched: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

view_state!(SearchState);

impl SearchState {
    /// Empty-result notice. Not an error.
    pub fn notice(&self) -> Option<&'static str> {
        (self.has_searched && !self.is_loading && self.error.is_none() && self.items.is_empty())
            .then_some(NO_ITEMS_FOUND)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    UpdateSearchWord(String),
    GetSearch { home_id: EntityId, word: String },
    ItemClicked(EntityId),
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEffect {
    OpenItem(EntityId),
}

/// Item search within one home
pub struct SearchScreen {
    store: Store<SearchState, SearchEffect>,
    items: ItemUseCases,
}

impl SearchScreen {
    pub fn new(items: ItemUseCases) -> Self {
        Self {
            store: Store::new(SearchState::default()),
            items,
        }
    }
}

impl Screen for SearchScreen {
    type State = SearchState;
    type Event = SearchEvent;
    type Effect = SearchEffect;

    fn store(&self) -> &Store<SearchState, SearchEffect> {
        &self.store
    }

    fn dispatch(&self, event: SearchEvent) {
        match event {
            SearchEvent::UpdateSearchWord(word) => self.store.update(|s| s.search_word = word),
            SearchEvent::GetSearch { home_id, word } => {
                let word = word.trim().to_string();
                if word.is_empty() {
                    self.store.update(|s| {
                        s.items.clear();
                        s.has_searched = false;
                    });
                    return;
                }

                let stream = self.items.search.execute(home_id, &word);
                self.store.update(|s| s.search_word = word);
                self.store.spawn(|handle| async move {
                    handle
                        .collect(stream, |state, items| {
                            state.items = items;
                            state.has_searched = true;
                        })
                        .await;
                });
            }
            SearchEvent::ItemClicked(id) => self.store.emit(SearchEffect::OpenItem(id)),
            SearchEvent::ErrorDisplayed => self.store.update(|s| s.error = None),
        }
    }
}
