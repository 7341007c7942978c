use std::sync::Arc;

use tokio::sync::Mutex;

use super::errors::SessionError;
use crate::domain::basket::model::BasketItem;
use crate::domain::basket::store::BasketStore;
use crate::domain::shared::identity::ItemId;
use crate::domain::suggestion::model::Suggestion;
use crate::domain::suggestion::store::SuggestionStore;
use crate::domain::sync::controller::SyncController;
use crate::domain::sync::fetch::FetchRequest;
use crate::domain::sync::trigger::SyncTrigger;

/// Session state shared between the use cases and the synchronizer.
pub type SharedSession = Arc<Mutex<SessionState>>;

/// Everything one shopping session holds.
///
/// Methods are the only write path. Every mutation that may invalidate the
/// suggestions returns the fetch it schedules, if any.
#[derive(Debug, Default)]
pub struct SessionState {
    basket: BasketStore,
    suggestions: SuggestionStore,
    query: String,
    trigger: SyncTrigger,
    controller: SyncController,
}

/// Read-only copy of the session handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub basket: Vec<BasketItem>,
    pub suggestions: Vec<Suggestion>,
    pub query: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the session. Nothing is fetched until `initial_request`.
    pub fn with_initial(basket: Vec<BasketItem>, suggestions: Vec<Suggestion>) -> Self {
        let mut state = Self {
            basket: BasketStore::with_items(basket),
            ..Self::default()
        };
        state.suggestions.replace_all(suggestions);
        state
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// The fetch issued when the session starts.
    pub fn initial_request(&mut self) -> Option<FetchRequest> {
        self.evaluate()
    }

    /// With an empty query nothing else would notice basket growth, so the
    /// trigger is regenerated. With a non-empty query the suggestions stay
    /// as they are until the query changes or an item is removed.
    pub fn add_item(&mut self, item: BasketItem) -> Option<FetchRequest> {
        self.basket.add(item);
        if self.query.is_empty() {
            self.trigger = self.trigger.regenerate();
        }
        self.evaluate()
    }

    /// Always schedules a fetch, even when `identifier` was not in the basket.
    pub fn remove_basket_item(&mut self, identifier: &ItemId) -> Option<FetchRequest> {
        self.basket.remove(identifier);
        self.trigger = self.trigger.regenerate();
        self.evaluate()
    }

    pub fn remove_suggestion(&mut self, identifier: &ItemId) -> Option<Suggestion> {
        self.suggestions.remove(identifier)
    }

    /// Moves a displayed suggestion into the basket.
    pub fn accept_suggestion(
        &mut self,
        identifier: &ItemId,
    ) -> Result<Option<FetchRequest>, SessionError> {
        let suggestion = self
            .suggestions
            .remove(identifier)
            .ok_or(SessionError::SuggestionNotFound)?;
        Ok(self.add_item(BasketItem::from(&suggestion)))
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Option<FetchRequest> {
        self.query = query.into();
        self.evaluate()
    }

    /// Installs the result of fetch `sequence` if no newer fetch was issued.
    pub fn apply_suggestions(&mut self, sequence: u64, suggestions: Vec<Suggestion>) -> bool {
        if !self.controller.is_current(sequence) {
            return false;
        }
        self.suggestions.replace_all(suggestions);
        true
    }

    /// Clears the suggestions after fetch `sequence` failed, if no newer
    /// fetch was issued.
    pub fn discard_suggestions(&mut self, sequence: u64) -> bool {
        if !self.controller.is_current(sequence) {
            return false;
        }
        self.suggestions.clear();
        true
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            basket: self.basket.list(),
            suggestions: self.suggestions.list(),
            query: self.query.clone(),
        }
    }

    pub fn basket(&self) -> &BasketStore {
        &self.basket
    }

    pub fn suggestions(&self) -> &SuggestionStore {
        &self.suggestions
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    fn evaluate(&mut self) -> Option<FetchRequest> {
        self.controller
            .evaluate(&self.query, self.trigger, self.basket.identifiers())
    }
}
