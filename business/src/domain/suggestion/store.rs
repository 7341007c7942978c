use super::model::Suggestion;
use crate::domain::shared::identity::{Identified, ItemId};

/// Suggestions from the last applied fetch, in server ranking order.
#[derive(Debug, Clone, Default)]
pub struct SuggestionStore {
    suggestions: Vec<Suggestion>,
}

impl SuggestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `suggestions` as the whole set, in the order received.
    pub fn replace_all(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
    }

    pub fn remove(&mut self, identifier: &ItemId) -> Option<Suggestion> {
        let position = self
            .suggestions
            .iter()
            .position(|suggestion| suggestion.has_identifier(identifier))?;
        Some(self.suggestions.remove(position))
    }

    pub fn clear(&mut self) {
        self.suggestions.clear();
    }

    pub fn find(&self, identifier: &ItemId) -> Option<&Suggestion> {
        self.suggestions
            .iter()
            .find(|suggestion| suggestion.has_identifier(identifier))
    }

    pub fn list(&self) -> Vec<Suggestion> {
        self.suggestions.clone()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
