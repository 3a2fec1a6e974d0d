//! PostgreSQL implementation of PaymentRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::payment_row::{PaymentRow, PAYMENT_COLUMNS};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::payment::PaymentRecord;
use crate::ports::PaymentRepository;

pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn amount_column(record: &PaymentRecord) -> Result<i32, DomainError> {
    i32::try_from(record.amount)
        .map_err(|_| DomainError::database(format!("Amount out of range: {}", record.amount)))
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn save(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payment_logs (
                id, user_id, amount, currency, payment_gateway, transaction_id,
                service_type, status, failure_reason, is_refunded, initiated_at, completed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.user_id.as_str())
        .bind(amount_column(record)?)
        .bind(record.currency.code())
        .bind(&record.gateway)
        .bind(&record.transaction_id)
        .bind(record.service_type())
        .bind(record.status.as_str())
        .bind(&record.failure_reason)
        .bind(record.is_refunded)
        .bind(record.initiated_at.as_datetime())
        .bind(record.completed_at.as_ref().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save payment: {}", e)))?;

        Ok(())
    }

    async fn update(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE payment_logs SET
                status = $2,
                failure_reason = $3,
                is_refunded = $4,
                completed_at = $5
            WHERE id = $1
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.status.as_str())
        .bind(&record.failure_reason)
        .bind(record.is_refunded)
        .bind(record.completed_at.as_ref().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update payment: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PaymentNotFound,
                format!("Payment not found: {}", record.id),
            ));
        }

        Ok(())
    }

    async fn find_pending_by_transaction(
        &self,
        user_id: &UserId,
        transaction_id: &str,
    ) -> Result<Option<PaymentRecord>, DomainError> {
        let sql = format!(
            "SELECT {} FROM payment_logs \
             WHERE user_id = $1 AND transaction_id = $2 AND status = 'pending' \
             ORDER BY initiated_at DESC LIMIT 1",
            PAYMENT_COLUMNS
        );
        let row: Option<PaymentRow> = sqlx::query_as(&sql)
            .bind(user_id.as_str())
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find payment: {}", e)))?;

        row.map(PaymentRecord::try_from).transpose()
    }
}
