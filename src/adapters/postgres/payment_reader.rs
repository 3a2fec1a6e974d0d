//! PostgreSQL implementation of PaymentReader.

use async_trait::async_trait;
use sqlx::PgPool;

use super::payment_row::{into_records, PaymentRow, PAYMENT_COLUMNS};
use crate::domain::foundation::{DomainError, PaymentId, UserId};
use crate::domain::payment::PaymentRecord;
use crate::ports::PaymentReader;

pub struct PostgresPaymentReader {
    pool: PgPool,
}

impl PostgresPaymentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentReader for PostgresPaymentReader {
    async fn has_completed_payment(
        &self,
        user_id: &UserId,
        service_type: &str,
    ) -> Result<bool, DomainError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM payment_logs
                WHERE user_id = $1 AND service_type = $2 AND status = 'completed'
            )
            "#,
        )
        .bind(user_id.as_str())
        .bind(service_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to check payment: {}", e)))?;

        Ok(exists)
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<PaymentRecord>, DomainError> {
        let sql = format!(
            "SELECT {} FROM payment_logs WHERE user_id = $1 ORDER BY initiated_at DESC",
            PAYMENT_COLUMNS
        );
        let rows: Vec<PaymentRow> = sqlx::query_as(&sql)
            .bind(user_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list payments: {}", e)))?;

        into_records(rows)
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        id: &PaymentId,
    ) -> Result<Option<PaymentRecord>, DomainError> {
        let sql = format!(
            "SELECT {} FROM payment_logs WHERE id = $1 AND user_id = $2",
            PAYMENT_COLUMNS
        );
        let row: Option<PaymentRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to load payment: {}", e)))?;

        row.map(PaymentRecord::try_from).transpose()
    }
}
