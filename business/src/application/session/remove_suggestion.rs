use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::model::SharedSession;
use crate::domain::session::use_cases::remove_suggestion::{
    RemoveSuggestionParams, RemoveSuggestionUseCase,
};

pub struct RemoveSuggestionUseCaseImpl {
    pub session: SharedSession,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveSuggestionUseCase for RemoveSuggestionUseCaseImpl {
    async fn execute(&self, params: RemoveSuggestionParams) -> bool {
        let removed = self
            .session
            .lock()
            .await
            .remove_suggestion(&params.identifier)
            .is_some();

        if removed {
            self.logger
                .info(&format!("Suggestion dismissed: {}", params.identifier));
        } else {
            self.logger.debug(&format!(
                "Suggestion {} not present, nothing to dismiss",
                params.identifier
            ));
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::session::model::SessionState;
    use crate::domain::shared::identity::ItemId;
    use crate::domain::suggestion::model::{Measure, Suggestion};
    use mockall::mock;

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

    fn suggestion(id: i64, name: &str) -> Suggestion {
        Suggestion::new(
            None,
            Product::new(ItemId::from(id), name.to_string()).unwrap(),
            vec![],
            Measure::new(1.1, 0.2).unwrap(),
        )
    }

    #[tokio::test]
    async fn should_remove_suggestion_without_touching_basket() {
        let session =
            SessionState::with_initial(vec![], vec![suggestion(1, "Milk"), suggestion(2, "Eggs")])
                .into_shared();
        let use_case = RemoveSuggestionUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(RemoveSuggestionParams {
                identifier: ItemId::from(1),
            })
            .await;

        assert!(removed);
        let snapshot = session.lock().await.snapshot();
        assert_eq!(snapshot.suggestions.len(), 1);
        assert_eq!(snapshot.suggestions[0].identifier, ItemId::from(2));
        assert!(snapshot.basket.is_empty());
    }

    #[tokio::test]
    async fn should_ignore_unknown_suggestion() {
        let session = SessionState::new().into_shared();
        let use_case = RemoveSuggestionUseCaseImpl {
            session,
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(RemoveSuggestionParams {
                identifier: ItemId::from("missing"),
            })
            .await;

        assert!(!removed);
    }
}
