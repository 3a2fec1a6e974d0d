//! Row mapping for the `payment_logs` table.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, PaymentId, Timestamp, UserId};
use crate::domain::payment::{PaymentRecord, PaymentStatus, PurchasableService};

pub(super) const PAYMENT_COLUMNS: &str = "id, user_id, amount, currency, payment_gateway, \
     transaction_id, service_type, status, failure_reason, is_refunded, initiated_at, completed_at";

#[derive(Debug, sqlx::FromRow)]
pub(super) struct PaymentRow {
    pub id: Uuid,
    pub user_id: String,
    pub amount: i32,
    pub currency: String,
    pub payment_gateway: String,
    pub transaction_id: String,
    pub service_type: String,
    pub status: String,
    pub failure_reason: Option<String>,
    pub is_refunded: bool,
    pub initiated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl TryFrom<PaymentRow> for PaymentRecord {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let service = PurchasableService::from_service_type(&row.service_type).ok_or_else(|| {
            DomainError::database(format!("Invalid service_type value: {}", row.service_type))
        })?;
        let status = PaymentStatus::parse(&row.status)
            .ok_or_else(|| DomainError::database(format!("Invalid status value: {}", row.status)))?;
        let currency = row
            .currency
            .parse()
            .map_err(|_| DomainError::database(format!("Invalid currency value: {}", row.currency)))?;
        let amount = u32::try_from(row.amount)
            .map_err(|_| DomainError::database(format!("Invalid amount value: {}", row.amount)))?;

        Ok(PaymentRecord {
            id: PaymentId::from_uuid(row.id),
            user_id: UserId::new(row.user_id)
                .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?,
            service,
            amount,
            currency,
            gateway: row.payment_gateway,
            transaction_id: row.transaction_id,
            status,
            failure_reason: row.failure_reason,
            is_refunded: row.is_refunded,
            initiated_at: Timestamp::from_datetime(row.initiated_at),
            completed_at: row.completed_at.map(Timestamp::from_datetime),
        })
    }
}

pub(super) fn into_records(rows: Vec<PaymentRow>) -> Result<Vec<PaymentRecord>, DomainError> {
    rows.into_iter().map(PaymentRecord::try_from).collect()
}
