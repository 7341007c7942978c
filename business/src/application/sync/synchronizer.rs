use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;
use crate::domain::suggestion::gateway::RecommendationGateway;
use crate::domain::sync::fetch::{FetchOutcome, FetchRequest, ScheduledFetch};

/// Runs the fetches decided by the session and reconciles their results.
///
/// Gateway calls happen outside the session lock. Results are applied under
/// the lock and only when the fetch is still the latest one issued, so a
/// slow response can never overwrite a newer one.
pub struct SuggestionSynchronizer {
    pub session: SharedSession,
    pub gateway: Arc<dyn RecommendationGateway>,
    pub logger: Arc<dyn Logger>,
    pub timeout: Duration,
}

impl SuggestionSynchronizer {
    /// Issues the fetch a freshly opened session needs.
    pub async fn start(self: &Arc<Self>) -> Option<ScheduledFetch> {
        let request = self.session.lock().await.initial_request()?;
        Some(self.schedule(request))
    }

    /// Spawns `request` on the runtime.
    pub fn schedule(self: &Arc<Self>, request: FetchRequest) -> ScheduledFetch {
        self.logger.debug(&format!(
            "Scheduling fetch #{} (basket: {} items, query: {:?})",
            request.sequence,
            request.basket.len(),
            request.query
        ));

        let sequence = request.sequence;
        let synchronizer = Arc::clone(self);
        let handle = tokio::spawn(async move { synchronizer.run(request).await });
        ScheduledFetch::new(sequence, handle)
    }

    pub async fn run(&self, request: FetchRequest) -> FetchOutcome {
        let result = match tokio::time::timeout(
            self.timeout,
            self.gateway
                .fetch_suggestions(&request.basket, &request.query),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => {
                self.logger.warn(&format!(
                    "Fetch #{} timed out after {:?}",
                    request.sequence, self.timeout
                ));
                Err(GatewayError::network())
            }
        };

        let mut state = self.session.lock().await;
        match result {
            Ok(suggestions) => {
                let count = suggestions.len();
                if state.apply_suggestions(request.sequence, suggestions) {
                    self.logger.info(&format!(
                        "Fetch #{} applied {} suggestions",
                        request.sequence, count
                    ));
                    FetchOutcome::Applied { count }
                } else {
                    self.logger
                        .debug(&format!("Fetch #{} superseded", request.sequence));
                    FetchOutcome::Superseded
                }
            }
            Err(err) => {
                if state.discard_suggestions(request.sequence) {
                    self.logger.warn(&format!(
                        "Fetch #{} failed ({}), suggestions cleared",
                        request.sequence, err
                    ));
                    FetchOutcome::Cleared
                } else {
                    self.logger.debug(&format!(
                        "Fetch #{} failed after being superseded ({})",
                        request.sequence, err
                    ));
                    FetchOutcome::Superseded
                }
            }
        }
    }
}
