use std::sync::Arc;

use async_trait::async_trait;

use crate::application::sync::synchronizer::SuggestionSynchronizer;
use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;
use crate::domain::session::use_cases::set_query::{SetQueryParams, SetQueryUseCase};
use crate::domain::sync::fetch::ScheduledFetch;

pub struct SetQueryUseCaseImpl {
    pub session: SharedSession,
    pub synchronizer: Arc<SuggestionSynchronizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetQueryUseCase for SetQueryUseCaseImpl {
    async fn execute(&self, params: SetQueryParams) -> Option<ScheduledFetch> {
        self.logger.debug(&format!("Query set to {:?}", params.query));

        let request = self.session.lock().await.set_query(params.query);

        request.map(|request| self.synchronizer.schedule(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::model::Product;
    use crate::domain::session::model::SessionState;
    use crate::domain::shared::identity::ItemId;
    use crate::domain::suggestion::gateway::RecommendationGateway;
    use crate::domain::suggestion::model::{Measure, Suggestion};
    use crate::domain::sync::fetch::FetchOutcome;
    use mockall::mock;
    use std::time::Duration;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl RecommendationGateway for Gateway {
            async fn fetch_suggestions(
                &self,
                basket: &[ItemId],
                query: &str,
            ) -> Result<Vec<Suggestion>, GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(session: SharedSession, gateway: MockGateway) -> SetQueryUseCaseImpl {
        let synchronizer = Arc::new(SuggestionSynchronizer {
            session: session.clone(),
            gateway: Arc::new(gateway),
            logger: mock_logger(),
            timeout: Duration::from_secs(5),
        });
        SetQueryUseCaseImpl {
            session,
            synchronizer,
            logger: mock_logger(),
        }
    }

    fn started_session() -> SharedSession {
        let mut state = SessionState::new();
        state.initial_request();
        state.into_shared()
    }

    #[tokio::test]
    async fn should_replace_suggestions_with_query_results() {
        let session = started_session();
        let mut gateway = MockGateway::new();
        gateway
            .expect_fetch_suggestions()
            .withf(|basket, query| basket.is_empty() && query.to_string() == "straw")
            .times(1)
            .returning(|_, _| {
                Ok(vec![Suggestion::new(
                    None,
                    Product::new(ItemId::from(21137), "Organic Strawberries".to_string())
                        .unwrap(),
                    vec![],
                    Measure::new(0.0, 0.0).unwrap(),
                )])
            });

        let fetch = use_case(session.clone(), gateway)
            .execute(SetQueryParams {
                query: "straw".to_string(),
            })
            .await
            .expect("fetch should be scheduled");

        assert_eq!(fetch.wait().await, Some(FetchOutcome::Applied { count: 1 }));
        let snapshot = session.lock().await.snapshot();
        assert_eq!(snapshot.query, "straw");
        assert_eq!(snapshot.suggestions[0].product.name, "Organic Strawberries");
    }

    #[tokio::test]
    async fn should_not_fetch_when_query_unchanged() {
        let session = started_session();

        let fetch = use_case(session, MockGateway::new())
            .execute(SetQueryParams {
                query: String::new(),
            })
            .await;

        assert!(fetch.is_none());
    }
}
