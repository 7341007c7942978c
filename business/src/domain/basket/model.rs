use super::errors::BasketError;
use crate::domain::product::model::Product;
use crate::domain::shared::identity::{Identified, ItemId};
use crate::domain::suggestion::model::Suggestion;

/// A product the user has put in the basket.
///
/// Items added by hand only carry an identifier and a display name. Items
/// accepted from a suggestion also keep the full product record. Both shapes
/// behave the same for synchronization.
#[derive(Debug, Clone)]
pub struct BasketItem {
    pub identifier: ItemId,
    pub name: String,
    pub product: Option<Product>,
}

impl BasketItem {
    pub fn new(identifier: ItemId, name: String) -> Result<Self, BasketError> {
        if name.trim().is_empty() {
            return Err(BasketError::NameEmpty);
        }

        Ok(Self {
            identifier,
            name,
            product: None,
        })
    }

    pub fn from_product(product: Product) -> Self {
        Self {
            identifier: product.identifier.clone(),
            name: product.name.clone(),
            product: Some(product),
        }
    }
}

/// The basket is sent to the service as product ids, so an accepted
/// suggestion enters the basket under its product's identifier.
impl From<&Suggestion> for BasketItem {
    fn from(suggestion: &Suggestion) -> Self {
        Self::from_product(suggestion.product.clone())
    }
}

impl Identified for BasketItem {
    fn identifier(&self) -> &ItemId {
        &self.identifier
    }
}
