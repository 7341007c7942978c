use std::sync::Arc;

use async_trait::async_trait;

use crate::application::sync::synchronizer::SuggestionSynchronizer;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::SharedSession;
use crate::domain::session::use_cases::accept_suggestion::{
    AcceptSuggestionParams, AcceptSuggestionUseCase,
};
use crate::domain::sync::fetch::ScheduledFetch;

pub struct AcceptSuggestionUseCaseImpl {
    pub session: SharedSession,
    pub synchronizer: Arc<SuggestionSynchronizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AcceptSuggestionUseCase for AcceptSuggestionUseCaseImpl {
    async fn execute(
        &self,
        params: AcceptSuggestionParams,
    ) -> Result<Option<ScheduledFetch>, SessionError> {
        self.logger
            .info(&format!("Accepting suggestion: {}", params.identifier));

        let request = self
            .session
            .lock()
            .await
            .accept_suggestion(&params.identifier)?;

        Ok(request.map(|request| self.synchronizer.schedule(request)))
    }
}
