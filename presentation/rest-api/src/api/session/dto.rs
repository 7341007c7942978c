use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::basket::model::BasketItem;
use business::domain::product::model::Product;
use business::domain::session::model::SessionSnapshot;
use business::domain::shared::identity::ItemId;
use business::domain::suggestion::model::Suggestion;
use business::domain::sync::fetch::ScheduledFetch;

/// Whether an identifier is an integer or a string on the service side.
/// `5` and `"5"` are different items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum IdentifierKindDto {
    #[oai(rename = "number")]
    Number,
    #[oai(rename = "text")]
    Text,
}

impl From<&ItemId> for IdentifierKindDto {
    fn from(identifier: &ItemId) -> Self {
        match identifier {
            ItemId::Number(_) => IdentifierKindDto::Number,
            ItemId::Text(_) => IdentifierKindDto::Text,
        }
    }
}

/// Rebuilds an identifier from its rendered form.
///
/// Without a kind, numeric text is read as a number.
pub fn parse_identifier(raw: &str, kind: Option<IdentifierKindDto>) -> ItemId {
    match kind {
        Some(IdentifierKindDto::Text) => ItemId::Text(raw.to_string()),
        Some(IdentifierKindDto::Number) | None => ItemId::parse(raw),
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddBasketItemRequest {
    /// Product identifier; numeric text is sent to the service as a number
    /// unless `identifier_kind` is `text`
    pub identifier: String,
    pub identifier_kind: Option<IdentifierKindDto>,
    /// Display name (cannot be empty)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct SetQueryRequest {
    /// Free-text search; empty means no text filter
    pub query: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub identifier: String,
    pub identifier_kind: IdentifierKindDto,
    pub name: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            identifier_kind: IdentifierKindDto::from(&product.identifier),
            identifier: product.identifier.to_string(),
            name: product.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BasketItemResponse {
    pub identifier: String,
    pub identifier_kind: IdentifierKindDto,
    pub name: String,
    /// Full product record, present for items accepted from a suggestion
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductResponse>,
}

impl From<BasketItem> for BasketItemResponse {
    fn from(item: BasketItem) -> Self {
        Self {
            identifier_kind: IdentifierKindDto::from(&item.identifier),
            identifier: item.identifier.to_string(),
            name: item.name,
            product: item.product.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MeasureResponse {
    pub lift: f64,
    pub support: f64,
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionResponse {
    pub identifier: String,
    pub identifier_kind: IdentifierKindDto,
    pub product: ProductResponse,
    /// Products that must already be in the basket for this rule to apply
    pub antecedent_items: Vec<ProductResponse>,
    pub measure: MeasureResponse,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            identifier_kind: IdentifierKindDto::from(&suggestion.identifier),
            identifier: suggestion.identifier.to_string(),
            product: suggestion.product.into(),
            antecedent_items: suggestion
                .antecedent_items
                .into_iter()
                .map(Into::into)
                .collect(),
            measure: MeasureResponse {
                lift: suggestion.measure.lift,
                support: suggestion.measure.support,
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    pub basket: Vec<BasketItemResponse>,
    /// Suggestions in server ranking order
    pub suggestions: Vec<SuggestionResponse>,
    pub query: String,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            basket: snapshot.basket.into_iter().map(Into::into).collect(),
            suggestions: snapshot.suggestions.into_iter().map(Into::into).collect(),
            query: snapshot.query,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SyncResponse {
    /// Sequence number of the recommendation fetch this change scheduled
    #[oai(skip_serializing_if_is_none)]
    pub fetch_sequence: Option<u64>,
}

impl From<Option<ScheduledFetch>> for SyncResponse {
    fn from(fetch: Option<ScheduledFetch>) -> Self {
        Self {
            fetch_sequence: fetch.as_ref().map(ScheduledFetch::sequence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::session::model::SessionState;
    use business::domain::suggestion::model::Measure;

    #[test]
    fn should_map_snapshot_to_response() {
        let milk = Product::new(ItemId::from(5), "Milk".to_string()).unwrap();
        let eggs = Product::new(ItemId::from("eggs-12"), "Eggs".to_string()).unwrap();
        let snapshot = SessionSnapshot {
            basket: vec![BasketItem::from_product(milk.clone())],
            suggestions: vec![Suggestion::new(
                None,
                eggs,
                vec![milk],
                Measure::new(1.7, 0.02).unwrap(),
            )],
            query: "egg".to_string(),
        };

        let response = SessionResponse::from(snapshot);

        assert_eq!(response.basket[0].identifier, "5");
        assert_eq!(response.basket[0].identifier_kind, IdentifierKindDto::Number);
        assert!(response.basket[0].product.is_some());
        assert_eq!(response.suggestions[0].identifier, "eggs-12");
        assert_eq!(
            response.suggestions[0].identifier_kind,
            IdentifierKindDto::Text
        );
        assert_eq!(response.suggestions[0].antecedent_items[0].name, "Milk");
        assert_eq!(response.suggestions[0].measure.lift, 1.7);
        assert_eq!(response.query, "egg");
    }

    #[test]
    fn should_omit_sequence_when_nothing_scheduled() {
        let response = SyncResponse::from(None::<ScheduledFetch>);

        assert!(response.fetch_sequence.is_none());
    }

    #[test]
    fn should_read_back_rendered_identifiers_of_both_kinds() {
        let identifiers = [
            ItemId::from(24852),
            ItemId::from("24852"),
            ItemId::from("sku-7"),
        ];

        for identifier in identifiers {
            let kind = IdentifierKindDto::from(&identifier);

            let parsed = parse_identifier(&identifier.to_string(), Some(kind));

            assert_eq!(parsed, identifier);
        }
    }

    #[test]
    fn should_read_numeric_text_as_number_when_kind_missing() {
        assert_eq!(parse_identifier("24852", None), ItemId::Number(24852));
    }

    #[test]
    fn should_accept_suggestion_with_numeric_looking_text_id_from_response() {
        let product = Product::new(ItemId::from("24852"), "Banana".to_string()).unwrap();
        let suggestion =
            Suggestion::new(None, product, vec![], Measure::new(1.2, 0.01).unwrap());
        let mut state = SessionState::with_initial(vec![], vec![suggestion]);

        let response = SessionResponse::from(state.snapshot());
        let rendered = &response.suggestions[0];
        let identifier = parse_identifier(&rendered.identifier, Some(rendered.identifier_kind));

        assert!(state.accept_suggestion(&identifier).is_ok());
        assert_eq!(state.basket().identifiers(), vec![ItemId::from("24852")]);
    }
}
