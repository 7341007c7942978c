use std::sync::Arc;

use logger::TracingLogger;
use recommendation::client::RecommendationClient;
use recommendation::suggestion_gateway::RecommendationGatewayHttp;

use business::application::session::accept_suggestion::AcceptSuggestionUseCaseImpl;
use business::application::session::add_item::AddBasketItemUseCaseImpl;
use business::application::session::get_snapshot::GetSessionSnapshotUseCaseImpl;
use business::application::session::remove_basket_item::RemoveBasketItemUseCaseImpl;
use business::application::session::remove_suggestion::RemoveSuggestionUseCaseImpl;
use business::application::session::set_query::SetQueryUseCaseImpl;
use business::application::sync::synchronizer::SuggestionSynchronizer;
use business::domain::session::model::SessionState;

use crate::config::recommendation_config::RecommendationConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub session_api: crate::api::session::routes::SessionApi,
}

impl DependencyContainer {
    pub async fn new(recommendation: RecommendationConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let client = RecommendationClient::new(recommendation.base_url, recommendation.timeout);
        let gateway = Arc::new(RecommendationGatewayHttp::new(client));

        // One session for the lifetime of the process
        let session = SessionState::new().into_shared();
        let synchronizer = Arc::new(SuggestionSynchronizer {
            session: session.clone(),
            gateway,
            logger: logger.clone(),
            timeout: recommendation.timeout,
        });

        // Session use cases
        let get_snapshot_use_case = Arc::new(GetSessionSnapshotUseCaseImpl {
            session: session.clone(),
        });
        let add_item_use_case = Arc::new(AddBasketItemUseCaseImpl {
            session: session.clone(),
            synchronizer: synchronizer.clone(),
            logger: logger.clone(),
        });
        let accept_suggestion_use_case = Arc::new(AcceptSuggestionUseCaseImpl {
            session: session.clone(),
            synchronizer: synchronizer.clone(),
            logger: logger.clone(),
        });
        let remove_basket_item_use_case = Arc::new(RemoveBasketItemUseCaseImpl {
            session: session.clone(),
            synchronizer: synchronizer.clone(),
            logger: logger.clone(),
        });
        let remove_suggestion_use_case = Arc::new(RemoveSuggestionUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let set_query_use_case = Arc::new(SetQueryUseCaseImpl {
            session,
            synchronizer: synchronizer.clone(),
            logger,
        });

        // Suggestions for the empty basket, like a freshly opened client
        synchronizer.start().await;

        let session_api = crate::api::session::routes::SessionApi::new(
            get_snapshot_use_case,
            add_item_use_case,
            accept_suggestion_use_case,
            remove_basket_item_use_case,
            remove_suggestion_use_case,
            set_query_use_case,
        );

        Ok(Self {
            health_api,
            session_api,
        })
    }
}
