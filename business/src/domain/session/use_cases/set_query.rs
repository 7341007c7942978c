use async_trait::async_trait;

use crate::domain::sync::fetch::ScheduledFetch;

pub struct SetQueryParams {
    pub query: String,
}

#[async_trait]
pub trait SetQueryUseCase: Send + Sync {
    async fn execute(&self, params: SetQueryParams) -> Option<ScheduledFetch>;
}
