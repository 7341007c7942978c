use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::errors::GatewayError;
use business::domain::product::model::Product;
use business::domain::shared::identity::ItemId;
use business::domain::suggestion::gateway::RecommendationGateway;
use business::domain::suggestion::model::{Measure, Suggestion};

use crate::client::RecommendationClient;

#[derive(Debug, Serialize)]
struct SuggestionRequest<'a> {
    basket: &'a [ItemId],
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuggestionEnvelope {
    data: Vec<SuggestionRecord>,
}

/// The service has answered both with bare products and with full
/// association-rule suggestions.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuggestionRecord {
    Rule(RuleRecord),
    Flat(ProductRecord),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleRecord {
    #[serde(default, alias = "id")]
    identifier: Option<ItemId>,
    product: ProductRecord,
    #[serde(default, alias = "antecedent_items")]
    antecedent_items: Vec<ProductRecord>,
    measure: MeasureRecord,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    #[serde(alias = "id")]
    identifier: ItemId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct MeasureRecord {
    lift: f64,
    #[serde(default)]
    support: f64,
}

impl ProductRecord {
    fn into_domain(self) -> Result<Product, GatewayError> {
        Product::new(self.identifier, self.name).map_err(|_| GatewayError::invalid_response())
    }
}

impl SuggestionRecord {
    fn into_domain(self) -> Result<Suggestion, GatewayError> {
        match self {
            SuggestionRecord::Rule(rule) => {
                let product = rule.product.into_domain()?;
                let antecedent_items = rule
                    .antecedent_items
                    .into_iter()
                    .map(ProductRecord::into_domain)
                    .collect::<Result<Vec<_>, _>>()?;
                let measure = Measure::new(rule.measure.lift, rule.measure.support)
                    .map_err(|_| GatewayError::invalid_response())?;
                Ok(Suggestion::new(
                    rule.identifier,
                    product,
                    antecedent_items,
                    measure,
                ))
            }
            SuggestionRecord::Flat(record) => {
                let product = record.into_domain()?;
                let measure =
                    Measure::new(0.0, 0.0).map_err(|_| GatewayError::invalid_response())?;
                Ok(Suggestion::new(None, product, vec![], measure))
            }
        }
    }
}

/// `RecommendationGateway` over `POST /api/suggestion`.
pub struct RecommendationGatewayHttp {
    client: RecommendationClient,
}

impl RecommendationGatewayHttp {
    pub fn new(client: RecommendationClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> Result<Vec<Suggestion>, GatewayError> {
        let envelope: SuggestionEnvelope =
            serde_json::from_str(body).map_err(|_| GatewayError::invalid_response())?;

        envelope
            .data
            .into_iter()
            .map(SuggestionRecord::into_domain)
            .collect()
    }
}

#[async_trait]
impl RecommendationGateway for RecommendationGatewayHttp {
    async fn fetch_suggestions(
        &self,
        basket: &[ItemId],
        query: &str,
    ) -> Result<Vec<Suggestion>, GatewayError> {
        let response = self
            .client
            .client
            .post(self.client.suggestion_url())
            .json(&SuggestionRequest { basket, query })
            .send()
            .await
            .map_err(|_| GatewayError::network())?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::server(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|_| GatewayError::network())?;

        Self::parse_response(&body)
    }
}
