use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::shared::identity::ItemId;
use crate::domain::sync::fetch::ScheduledFetch;

pub struct AcceptSuggestionParams {
    pub identifier: ItemId,
}

#[async_trait]
pub trait AcceptSuggestionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AcceptSuggestionParams,
    ) -> Result<Option<ScheduledFetch>, SessionError>;
}
