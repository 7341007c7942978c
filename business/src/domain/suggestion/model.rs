use super::errors::SuggestionError;
use crate::domain::product::model::Product;
use crate::domain::shared::identity::{Identified, ItemId};

/// Association-rule strength behind a suggestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    /// How much more likely the product is given the antecedents. Never negative.
    pub lift: f64,
    /// Share of baskets the rule was observed in, between 0 and 1.
    pub support: f64,
}

impl Measure {
    pub fn new(lift: f64, support: f64) -> Result<Self, SuggestionError> {
        if lift.is_nan() || lift < 0.0 {
            return Err(SuggestionError::InvalidLift);
        }

        if support.is_nan() || !(0.0..=1.0).contains(&support) {
            return Err(SuggestionError::InvalidSupport);
        }

        Ok(Self { lift, support })
    }
}

/// "If the basket already holds `antecedent_items`, `product` is
/// recommended with strength `measure.lift`."
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub identifier: ItemId,
    pub product: Product,
    pub antecedent_items: Vec<Product>,
    pub measure: Measure,
}

impl Suggestion {
    /// Builds a suggestion. Without an explicit identifier the suggestion is
    /// identified by its product.
    pub fn new(
        identifier: Option<ItemId>,
        product: Product,
        antecedent_items: Vec<Product>,
        measure: Measure,
    ) -> Self {
        Self {
            identifier: identifier.unwrap_or_else(|| product.identifier.clone()),
            product,
            antecedent_items,
            measure,
        }
    }
}

impl Identified for Suggestion {
    fn identifier(&self) -> &ItemId {
        &self.identifier
    }
}
