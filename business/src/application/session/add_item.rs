use std::sync::Arc;

use async_trait::async_trait;

use crate::application::sync::synchronizer::SuggestionSynchronizer;
use crate::domain::basket::model::BasketItem;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::SharedSession;
use crate::domain::session::use_cases::add_item::{AddBasketItemParams, AddBasketItemUseCase};
use crate::domain::sync::fetch::ScheduledFetch;

pub struct AddBasketItemUseCaseImpl {
    pub session: SharedSession,
    pub synchronizer: Arc<SuggestionSynchronizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddBasketItemUseCase for AddBasketItemUseCaseImpl {
    async fn execute(
        &self,
        params: AddBasketItemParams,
    ) -> Result<Option<ScheduledFetch>, SessionError> {
        self.logger
            .info(&format!("Adding basket item: {}", params.identifier));

        let item = BasketItem::new(params.identifier, params.name)?;
        let request = self.session.lock().await.add_item(item);

        Ok(request.map(|request| self.synchronizer.schedule(request)))
    }
}
