use std::sync::Arc;

use async_trait::async_trait;

use crate::application::sync::synchronizer::SuggestionSynchronizer;
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;
use crate::domain::session::use_cases::remove_basket_item::{
    RemoveBasketItemParams, RemoveBasketItemUseCase,
};
use crate::domain::sync::fetch::ScheduledFetch;

pub struct RemoveBasketItemUseCaseImpl {
    pub session: SharedSession,
    pub synchronizer: Arc<SuggestionSynchronizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveBasketItemUseCase for RemoveBasketItemUseCaseImpl {
    async fn execute(&self, params: RemoveBasketItemParams) -> Option<ScheduledFetch> {
        self.logger
            .info(&format!("Removing basket item: {}", params.identifier));

        let request = self
            .session
            .lock()
            .await
            .remove_basket_item(&params.identifier);

        request.map(|request| self.synchronizer.schedule(request))
    }
}
