//! PostgreSQL implementation of AssessmentRepository.
//!
//! A submission's twelve rows and its tracking event share one transaction.
//! Any failed statement returns early and the dropped transaction rolls back.

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

use crate::domain::assessment::{AssessmentSubmission, TrackingEvent};
use crate::domain::foundation::DomainError;
use crate::ports::AssessmentRepository;

pub struct PostgresAssessmentRepository {
    pool: PgPool,
}

impl PostgresAssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentRepository for PostgresAssessmentRepository {
    async fn save_submission(&self, submission: &AssessmentSubmission) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to start transaction: {}", e))
        })?;

        for record in &submission.records {
            sqlx::query(
                r#"
                INSERT INTO assessment_results (
                    id, user_id, level, domain, domain_score, answer, question_text, completed_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(record.id.as_uuid())
            .bind(record.user_id.as_str())
            .bind(record.level.number() as i16)
            .bind(record.domain.name())
            .bind(record.points)
            .bind(record.answer.as_str())
            .bind(&record.question_text)
            .bind(record.completed_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to insert assessment result: {}", e))
            })?;
        }

        insert_event(&submission.event)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert tracking event: {}", e)))?;

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }

    async fn record_event(&self, event: &TrackingEvent) -> Result<(), DomainError> {
        insert_event(event)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert tracking event: {}", e)))?;
        Ok(())
    }
}

fn insert_event(event: &TrackingEvent) -> Query<'_, Postgres, PgArguments> {
    sqlx::query(
        r#"
        INSERT INTO user_tracking (user_id, event_type, event_data, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(event.user_id.as_str())
    .bind(&event.event_type)
    .bind(&event.event_data)
    .bind(event.created_at.as_datetime())
}
