//! SubmitAnswersHandler - Command handler for submitting a level.
//!
//! Preconditions are checked in a fixed order and the first failure wins:
//! payment access, level existence, answer count, then each answer by
//! position. Nothing is written unless all of them pass, and the write
//! itself is all-or-nothing.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, warn};

use super::level_gate::open_level;
use crate::domain::assessment::{AssessmentError, Level, QuestionBank, ScoringEngine};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{AccessChecker, AssessmentRepository};

/// Command carrying one full set of answers for a level.
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub user_id: UserId,
    pub level: i64,
    /// Answer letters keyed by question position ("0".."11").
    pub answers: HashMap<String, String>,
}

/// Acknowledgement of a stored submission. No score is computed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAnswersResult {
    pub level: Level,
    pub records_written: usize,
}

pub struct SubmitAnswersHandler {
    access_checker: Arc<dyn AccessChecker>,
    repository: Arc<dyn AssessmentRepository>,
    bank: &'static QuestionBank,
}

impl SubmitAnswersHandler {
    pub fn new(
        access_checker: Arc<dyn AccessChecker>,
        repository: Arc<dyn AssessmentRepository>,
        bank: &'static QuestionBank,
    ) -> Self {
        Self {
            access_checker,
            repository,
            bank,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnswersCommand,
    ) -> Result<SubmitAnswersResult, AssessmentError> {
        info!(user_id = %cmd.user_id, level = cmd.level, "Assessment submission received");

        let level = open_level(self.access_checker.as_ref(), &cmd.user_id, cmd.level).await?;

        let submission = ScoringEngine::new(self.bank)
            .score_submission(&cmd.user_id, level, &cmd.answers, Timestamp::now())
            .map_err(|e| {
                warn!(user_id = %cmd.user_id, level = cmd.level, error = %e, "Submission rejected");
                e
            })?;

        self.repository
            .save_submission(&submission)
            .await
            .map_err(|e| {
                error!(user_id = %cmd.user_id, level = cmd.level, error = %e, "Failed to store submission");
                AssessmentError::from(e)
            })?;

        info!(user_id = %cmd.user_id, level = cmd.level, "Assessment submission stored");

        Ok(SubmitAnswersResult {
            level,
            records_written: submission.records.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::access::PaymentAccessChecker;
    use crate::adapters::memory::{InMemoryAssessmentStore, InMemoryPaymentStore};
    use crate::domain::assessment::AssessmentRecord;
    use crate::domain::payment::{Currency, PaymentRecord, PurchasableService};
    use crate::ports::AssessmentReader;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn answers(letters: [&str; 12]) -> HashMap<String, String> {
        letters
            .iter()
            .enumerate()
            .map(|(i, l)| (i.to_string(), l.to_string()))
            .collect()
    }

    fn all(letter: &str) -> HashMap<String, String> {
        answers([letter; 12])
    }

    fn command(level: i64, answers: HashMap<String, String>) -> SubmitAnswersCommand {
        SubmitAnswersCommand {
            user_id: user(),
            level,
            answers,
        }
    }

    fn completed(service: PurchasableService) -> PaymentRecord {
        let mut r =
            PaymentRecord::pending(user(), service, Currency::Usd, "paypal", "PAY-1", Timestamp::now());
        r.complete(Timestamp::now()).unwrap();
        r
    }

    fn setup(
        payments: Vec<PaymentRecord>,
        store: InMemoryAssessmentStore,
    ) -> (SubmitAnswersHandler, Arc<InMemoryAssessmentStore>) {
        let store = Arc::new(store);
        let checker = Arc::new(PaymentAccessChecker::new(Arc::new(
            InMemoryPaymentStore::with_records(payments),
        )));
        let handler =
            SubmitAnswersHandler::new(checker, store.clone(), QuestionBank::standard().unwrap());
        (handler, store)
    }

    async fn user_records(store: &InMemoryAssessmentStore) -> Vec<AssessmentRecord> {
        store.find_by_user(&user()).await.unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn level_one_submission_writes_twelve_records_and_one_event() {
        let (handler, store) = setup(vec![], InMemoryAssessmentStore::new());

        let result = handler.handle(command(1, all("A"))).await.unwrap();

        assert_eq!(result.level, Level::One);
        assert_eq!(result.records_written, 12);
        assert_eq!(store.record_count().await, 12);
        let events = store.tracking_events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_data["level"], 1);
    }

    #[tokio::test]
    async fn paid_level_accepts_submission() {
        let (handler, store) = setup(
            vec![completed(PurchasableService::LevelThree)],
            InMemoryAssessmentStore::new(),
        );
        handler.handle(command(3, all("c"))).await.unwrap();

        let records = user_records(&store).await;
        assert!(records.iter().all(|r| r.level == Level::Three && r.points == 2));
    }

    #[tokio::test]
    async fn resubmission_accumulates_rather_than_replaces() {
        let (handler, store) = setup(vec![], InMemoryAssessmentStore::new());

        handler.handle(command(1, all("A"))).await.unwrap();
        handler.handle(command(1, all("D"))).await.unwrap();

        let records = user_records(&store).await;
        assert_eq!(records.len(), 24);
        let total: i64 = records.iter().map(|r| r.points).sum();
        assert_eq!(total, 48 + 12);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Precondition Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unpaid_level_is_payment_required_and_writes_nothing() {
        let (handler, store) = setup(vec![], InMemoryAssessmentStore::new());
        let err = handler.handle(command(2, all("A"))).await.unwrap_err();

        assert_eq!(err, AssessmentError::payment_required(2));
        assert_eq!(store.record_count().await, 0);
    }

    #[tokio::test]
    async fn payment_required_wins_over_bad_answers() {
        let (handler, _) = setup(vec![], InMemoryAssessmentStore::new());
        let err = handler.handle(command(3, HashMap::new())).await.unwrap_err();
        assert_eq!(err, AssessmentError::payment_required(3));
    }

    #[tokio::test]
    async fn consultation_payment_does_not_make_level_four_exist() {
        let (handler, _) = setup(
            vec![completed(PurchasableService::Consultation)],
            InMemoryAssessmentStore::new(),
        );
        let err = handler.handle(command(4, all("A"))).await.unwrap_err();
        assert_eq!(err, AssessmentError::level_not_found(4));
    }

    #[tokio::test]
    async fn wrong_count_writes_nothing() {
        let (handler, store) = setup(vec![], InMemoryAssessmentStore::new());
        let mut eleven = all("A");
        eleven.remove("0");

        let err = handler.handle(command(1, eleven)).await.unwrap_err();

        assert_eq!(err, AssessmentError::answer_count_mismatch(12, 11));
        assert_eq!(store.record_count().await, 0);
        assert!(store.tracking_events().await.is_empty());
    }

    #[tokio::test]
    async fn one_invalid_letter_writes_nothing() {
        let (handler, store) = setup(vec![], InMemoryAssessmentStore::new());
        let mut letters = ["B"; 12];
        letters[9] = "F";

        let err = handler.handle(command(1, answers(letters))).await.unwrap_err();

        assert_eq!(err, AssessmentError::invalid_answer(9, "F"));
        assert_eq!(store.record_count().await, 0);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Storage Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn storage_failure_mid_write_leaves_no_partial_records() {
        let (handler, store) = setup(vec![], InMemoryAssessmentStore::failing_after(7));

        let err = handler.handle(command(1, all("A"))).await.unwrap_err();

        assert!(err.is_internal());
        assert_eq!(store.record_count().await, 0);
        assert!(store.tracking_events().await.is_empty());
    }
}
