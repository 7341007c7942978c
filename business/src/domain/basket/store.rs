use super::model::BasketItem;
use crate::domain::shared::identity::{Identified, ItemId};

/// Ordered basket holding at most one item per identifier.
#[derive(Debug, Clone, Default)]
pub struct BasketStore {
    items: Vec<BasketItem>,
}

impl BasketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = BasketItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            store.add(item);
        }
        store
    }

    /// Appends `item`, dropping any previous entry with the same identifier
    /// first. Returns the replaced entry.
    pub fn add(&mut self, item: BasketItem) -> Option<BasketItem> {
        let replaced = self.remove(item.identifier());
        self.items.push(item);
        replaced
    }

    /// Removes the entry with `identifier`. Absent identifiers are a no-op.
    pub fn remove(&mut self, identifier: &ItemId) -> Option<BasketItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.has_identifier(identifier))?;
        Some(self.items.remove(position))
    }

    pub fn list(&self) -> Vec<BasketItem> {
        self.items.clone()
    }

    pub fn identifiers(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .map(|item| item.identifier().clone())
            .collect()
    }

    pub fn contains(&self, identifier: &ItemId) -> bool {
        self.items.iter().any(|item| item.has_identifier(identifier))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn item(id: i64, name: &str) -> BasketItem {
        BasketItem::new(ItemId::from(id), name.to_string()).unwrap()
    }

    #[test]
    fn should_append_new_items_in_order() {
        let mut store = BasketStore::new();
        store.add(item(5, "Milk"));
        store.add(item(7, "Eggs"));

        assert_eq!(store.identifiers(), vec![ItemId::from(5), ItemId::from(7)]);
    }

    #[test]
    fn should_replace_existing_item_and_move_it_last() {
        let mut store = BasketStore::with_items(vec![item(5, "Milk"), item(7, "Eggs")]);

        let replaced = store.add(item(5, "Whole milk"));

        assert_eq!(replaced.map(|i| i.name), Some("Milk".to_string()));
        let items = store.list();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].identifier, ItemId::from(7));
        assert_eq!(items[1].identifier, ItemId::from(5));
        assert_eq!(items[1].name, "Whole milk");
    }

    #[test]
    fn should_remove_item_by_identifier() {
        let mut store = BasketStore::with_items(vec![item(5, "Milk"), item(7, "Eggs")]);

        let removed = store.remove(&ItemId::from(5));

        assert!(removed.is_some());
        assert_eq!(store.identifiers(), vec![ItemId::from(7)]);
    }

    #[test]
    fn should_ignore_removal_of_unknown_identifier() {
        let mut store = BasketStore::with_items(vec![item(5, "Milk")]);

        let removed = store.remove(&ItemId::from(99));

        assert!(removed.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn should_return_snapshot_unaffected_by_later_changes() {
        let mut store = BasketStore::with_items(vec![item(5, "Milk")]);
        let snapshot = store.list();

        store.add(item(7, "Eggs"));

        assert_eq!(snapshot.len(), 1);
        assert!(store.contains(&ItemId::from(7)));
    }

    proptest! {
        #[test]
        fn should_never_hold_duplicate_identifiers(ids in proptest::collection::vec(0i64..8, 0..40)) {
            let mut store = BasketStore::new();
            for id in &ids {
                store.add(item(*id, "Item"));
            }

            let identifiers = store.identifiers();
            let unique: HashSet<_> = identifiers.iter().cloned().collect();
            prop_assert_eq!(unique.len(), identifiers.len());
            let distinct_added: HashSet<_> = ids.iter().copied().collect();
            prop_assert_eq!(identifiers.len(), distinct_added.len());
            if let Some(last) = ids.last() {
                prop_assert_eq!(identifiers.last(), Some(&ItemId::from(*last)));
            }
        }
    }
}
