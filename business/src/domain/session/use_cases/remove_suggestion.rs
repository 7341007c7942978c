use async_trait::async_trait;

use crate::domain::shared::identity::ItemId;

pub struct RemoveSuggestionParams {
    pub identifier: ItemId,
}

/// Dismisses a suggestion locally. Returns whether it was present.
#[async_trait]
pub trait RemoveSuggestionUseCase: Send + Sync {
    async fn execute(&self, params: RemoveSuggestionParams) -> bool;
}
