use super::errors::ProductError;
use crate::domain::shared::identity::{Identified, ItemId};

/// A catalogue product as known by the recommendation service.
#[derive(Debug, Clone)]
pub struct Product {
    pub identifier: ItemId,
    pub name: String,
}

impl Product {
    pub fn new(identifier: ItemId, name: String) -> Result<Self, ProductError> {
        if let ItemId::Number(number) = &identifier
            && *number < 0
        {
            return Err(ProductError::NegativeIdentifier);
        }

        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        Ok(Self { identifier, name })
    }
}

impl Identified for Product {
    fn identifier(&self) -> &ItemId {
        &self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_product_when_valid() {
        let product = Product::new(ItemId::from(24852), "Banana".to_string()).unwrap();

        assert_eq!(product.identifier, ItemId::Number(24852));
        assert_eq!(product.name, "Banana");
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = Product::new(ItemId::from(1), "  ".to_string());

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_negative_identifier() {
        let result = Product::new(ItemId::from(-1), "Banana".to_string());

        assert!(matches!(
            result.unwrap_err(),
            ProductError::NegativeIdentifier
        ));
    }

    #[test]
    fn should_accept_text_identifier() {
        let result = Product::new(ItemId::from("organic-banana"), "Banana".to_string());

        assert!(result.is_ok());
    }
}
