//! GetProgressHandler - Query handler for per-level progress.
//!
//! Unlike question retrieval and submission, a locked level is not an
//! error here; it is reported through the `unlocked` flag. Admins see
//! every level unlocked.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{AssessmentError, AssessmentProgress, Level, LevelProgress};
use crate::domain::foundation::{Role, UserId};
use crate::ports::{AccessChecker, AssessmentReader};

#[derive(Debug, Clone)]
pub struct GetProgressQuery {
    pub user_id: UserId,
    pub role: Role,
}

pub struct GetProgressHandler {
    reader: Arc<dyn AssessmentReader>,
    access_checker: Arc<dyn AccessChecker>,
}

impl GetProgressHandler {
    pub fn new(reader: Arc<dyn AssessmentReader>, access_checker: Arc<dyn AccessChecker>) -> Self {
        Self {
            reader,
            access_checker,
        }
    }

    pub async fn handle(
        &self,
        query: GetProgressQuery,
    ) -> Result<AssessmentProgress, AssessmentError> {
        info!(user_id = %query.user_id, "Assessment progress requested");

        let mut levels = Vec::with_capacity(Level::ALL.len());
        for level in Level::ALL {
            let answered = self.reader.count_by_level(&query.user_id, level).await?;
            let unlocked = self
                .access_checker
                .can_access_level(&query.user_id, i64::from(level.number()))
                .await?
                .is_allowed()
                || query.role.bypasses_payment();
            levels.push(LevelProgress::new(level, answered, unlocked));
        }

        Ok(AssessmentProgress { levels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::access::PaymentAccessChecker;
    use crate::adapters::memory::{InMemoryAssessmentStore, InMemoryPaymentStore};
    use crate::domain::assessment::{QuestionBank, ScoringEngine};
    use crate::domain::foundation::Timestamp;
    use crate::domain::payment::{Currency, PaymentRecord, PurchasableService};
    use crate::ports::AssessmentRepository;
    use std::collections::HashMap;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn handler(
        store: Arc<InMemoryAssessmentStore>,
        payments: InMemoryPaymentStore,
    ) -> GetProgressHandler {
        GetProgressHandler::new(
            store,
            Arc::new(PaymentAccessChecker::new(Arc::new(payments))),
        )
    }

    async fn submit(store: &InMemoryAssessmentStore, level: Level) {
        let answers: HashMap<String, String> =
            (0..12).map(|i| (i.to_string(), "A".to_string())).collect();
        let submission = ScoringEngine::new(QuestionBank::standard().unwrap())
            .score_submission(&user(), level, &answers, Timestamp::now())
            .unwrap();
        store.save_submission(&submission).await.unwrap();
    }

    #[tokio::test]
    async fn new_user_sees_only_level_one_unlocked() {
        let progress = handler(Arc::new(InMemoryAssessmentStore::new()), InMemoryPaymentStore::new())
            .handle(GetProgressQuery {
                user_id: user(),
                role: Role::User,
            })
            .await
            .unwrap();

        let unlocked: Vec<bool> = progress.levels.iter().map(|l| l.unlocked).collect();
        assert_eq!(unlocked, vec![true, false, false]);
        assert!(progress.levels.iter().all(|l| !l.completed && l.questions_answered == 0));
    }

    #[tokio::test]
    async fn admin_sees_every_level_unlocked_without_payment() {
        let progress = handler(Arc::new(InMemoryAssessmentStore::new()), InMemoryPaymentStore::new())
            .handle(GetProgressQuery {
                user_id: user(),
                role: Role::Admin,
            })
            .await
            .unwrap();
        assert!(progress.levels.iter().all(|l| l.unlocked));
    }

    #[tokio::test]
    async fn coach_gets_no_bypass() {
        let progress = handler(Arc::new(InMemoryAssessmentStore::new()), InMemoryPaymentStore::new())
            .handle(GetProgressQuery {
                user_id: user(),
                role: Role::Coach,
            })
            .await
            .unwrap();
        assert!(!progress.levels[1].unlocked);
    }

    #[tokio::test]
    async fn completed_payment_and_submission_show_up() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        submit(&store, Level::One).await;
        let mut paid = PaymentRecord::pending(
            user(),
            PurchasableService::LevelTwo,
            Currency::Gbp,
            "paypal",
            "PAY-1",
            Timestamp::now(),
        );
        paid.complete(Timestamp::now()).unwrap();

        let progress = handler(store, InMemoryPaymentStore::with_records(vec![paid]))
            .handle(GetProgressQuery {
                user_id: user(),
                role: Role::User,
            })
            .await
            .unwrap();

        assert!(progress.levels[0].completed);
        assert_eq!(progress.levels[0].questions_answered, 12);
        assert!(progress.levels[1].unlocked);
        assert!(!progress.levels[2].unlocked);
        assert_eq!(progress.levels[2].price.gbp, 10);
    }

    #[tokio::test]
    async fn payment_lookup_failure_surfaces_as_storage_error() {
        let err = handler(Arc::new(InMemoryAssessmentStore::new()), InMemoryPaymentStore::failing())
            .handle(GetProgressQuery {
                user_id: user(),
                role: Role::User,
            })
            .await
            .unwrap_err();
        assert!(err.is_internal());
    }
}
