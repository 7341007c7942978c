use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::identity::ItemId;

use super::model::Suggestion;

/// Service port for the remote recommendation service.
///
/// Returns suggestions ranked by the server for the given basket and query.
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    async fn fetch_suggestions(
        &self,
        basket: &[ItemId],
        query: &str,
    ) -> Result<Vec<Suggestion>, GatewayError>;
}
