use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::shared::identity::ItemId;
use crate::domain::sync::fetch::ScheduledFetch;

pub struct AddBasketItemParams {
    pub identifier: ItemId,
    pub name: String,
}

#[async_trait]
pub trait AddBasketItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddBasketItemParams,
    ) -> Result<Option<ScheduledFetch>, SessionError>;
}
