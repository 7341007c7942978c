use async_trait::async_trait;

use crate::domain::shared::identity::ItemId;
use crate::domain::sync::fetch::ScheduledFetch;

pub struct RemoveBasketItemParams {
    pub identifier: ItemId,
}

#[async_trait]
pub trait RemoveBasketItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveBasketItemParams) -> Option<ScheduledFetch>;
}
