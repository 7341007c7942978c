use super::fetch::FetchRequest;
use super::trigger::SyncTrigger;
use crate::domain::shared::identity::ItemId;

/// Decides when the recommendation service must be queried again.
///
/// The observed inputs are the query text and the trigger generation. Any
/// change of either issues one fetch with a strictly larger sequence number.
/// Only the latest issued sequence may touch the suggestion store.
#[derive(Debug, Default)]
pub struct SyncController {
    observed: Option<(String, SyncTrigger)>,
    latest_sequence: u64,
}

impl SyncController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current inputs. The first evaluation always fetches.
    pub fn evaluate(
        &mut self,
        query: &str,
        trigger: SyncTrigger,
        basket: Vec<ItemId>,
    ) -> Option<FetchRequest> {
        let unchanged = matches!(
            &self.observed,
            Some((observed_query, observed_trigger))
                if observed_query == query && *observed_trigger == trigger
        );
        if unchanged {
            return None;
        }

        self.observed = Some((query.to_string(), trigger));
        self.latest_sequence += 1;

        Some(FetchRequest {
            sequence: self.latest_sequence,
            basket,
            query: query.to_string(),
        })
    }

    pub fn is_current(&self, sequence: u64) -> bool {
        sequence != 0 && sequence == self.latest_sequence
    }

    pub fn latest_sequence(&self) -> u64 {
        self.latest_sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fetch_on_first_evaluation() {
        let mut controller = SyncController::new();

        let request = controller.evaluate("", SyncTrigger::initial(), vec![]);

        assert_eq!(
            request,
            Some(FetchRequest {
                sequence: 1,
                basket: vec![],
                query: String::new(),
            })
        );
    }

    #[test]
    fn should_not_fetch_when_inputs_unchanged() {
        let mut controller = SyncController::new();
        let trigger = SyncTrigger::initial();
        controller.evaluate("eggs", trigger, vec![]);

        let request = controller.evaluate("eggs", trigger, vec![ItemId::from(1)]);

        assert!(request.is_none());
        assert_eq!(controller.latest_sequence(), 1);
    }

    #[test]
    fn should_fetch_when_query_changes() {
        let mut controller = SyncController::new();
        let trigger = SyncTrigger::initial();
        controller.evaluate("egg", trigger, vec![]);

        let request = controller.evaluate("eggs", trigger, vec![ItemId::from(7)]);

        let request = request.unwrap();
        assert_eq!(request.sequence, 2);
        assert_eq!(request.query, "eggs");
        assert_eq!(request.basket, vec![ItemId::from(7)]);
    }

    #[test]
    fn should_fetch_when_trigger_regenerated_with_same_query() {
        let mut controller = SyncController::new();
        let trigger = SyncTrigger::initial();
        controller.evaluate("eggs", trigger, vec![]);

        let request = controller.evaluate("eggs", trigger.regenerate(), vec![]);

        assert!(request.is_some());
    }

    #[test]
    fn should_only_consider_latest_sequence_current() {
        let mut controller = SyncController::new();
        let trigger = SyncTrigger::initial();
        let first = controller.evaluate("a", trigger, vec![]).unwrap();
        let second = controller.evaluate("ab", trigger, vec![]).unwrap();

        assert!(!controller.is_current(first.sequence));
        assert!(controller.is_current(second.sequence));
        assert!(!controller.is_current(0));
    }
}
