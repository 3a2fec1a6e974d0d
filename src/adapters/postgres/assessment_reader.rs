//! PostgreSQL implementation of AssessmentReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::assessment::{AnswerLetter, AssessmentRecord, Level, LifeDomain};
use crate::domain::foundation::{AssessmentRecordId, DomainError, Timestamp, UserId};
use crate::ports::{AssessmentReader, HistoryFilter};

pub struct PostgresAssessmentReader {
    pool: PgPool,
}

impl PostgresAssessmentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AssessmentRow {
    id: Uuid,
    user_id: String,
    level: i16,
    domain: String,
    domain_score: i64,
    answer: String,
    question_text: String,
    completed_at: DateTime<Utc>,
}

impl TryFrom<AssessmentRow> for AssessmentRecord {
    type Error = DomainError;

    fn try_from(row: AssessmentRow) -> Result<Self, Self::Error> {
        let level = u32::try_from(row.level)
            .ok()
            .and_then(|n| Level::try_from(n).ok())
            .ok_or_else(|| DomainError::database(format!("Invalid level value: {}", row.level)))?;
        let domain = LifeDomain::from_name(&row.domain)
            .ok_or_else(|| DomainError::database(format!("Invalid domain value: {}", row.domain)))?;
        let answer = AnswerLetter::parse(row.answer.trim())
            .ok_or_else(|| DomainError::database(format!("Invalid answer value: {}", row.answer)))?;

        Ok(AssessmentRecord {
            id: AssessmentRecordId::from_uuid(row.id),
            user_id: UserId::new(row.user_id)
                .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?,
            level,
            domain,
            answer,
            points: row.domain_score,
            question_text: row.question_text,
            completed_at: Timestamp::from_datetime(row.completed_at),
        })
    }
}

fn into_records(rows: Vec<AssessmentRow>) -> Result<Vec<AssessmentRecord>, DomainError> {
    rows.into_iter().map(AssessmentRecord::try_from).collect()
}

#[async_trait]
impl AssessmentReader for PostgresAssessmentReader {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError> {
        self.history(user_id, &HistoryFilter::default()).await
    }

    async fn history(
        &self,
        user_id: &UserId,
        filter: &HistoryFilter,
    ) -> Result<Vec<AssessmentRecord>, DomainError> {
        // Levels outside the smallint range cannot match any stored row.
        let level = match filter.level {
            Some(n) => match i16::try_from(n) {
                Ok(level) => Some(level),
                Err(_) => return Ok(Vec::new()),
            },
            None => None,
        };

        let rows: Vec<AssessmentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, level, domain, domain_score, answer, question_text, completed_at
            FROM assessment_results
            WHERE user_id = $1
              AND ($2::SMALLINT IS NULL OR level = $2)
              AND ($3::TEXT IS NULL OR domain = $3)
            ORDER BY completed_at ASC, seq ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(level)
        .bind(filter.domain.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load assessment history: {}", e)))?;

        into_records(rows)
    }

    async fn count_by_level(&self, user_id: &UserId, level: Level) -> Result<u32, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM assessment_results WHERE user_id = $1 AND level = $2",
        )
        .bind(user_id.as_str())
        .bind(level.number() as i16)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to count assessment results: {}", e)))?;

        u32::try_from(count)
            .map_err(|_| DomainError::database(format!("Invalid result count: {}", count)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> AssessmentRow {
        AssessmentRow {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            level: 2,
            domain: "Family".to_string(),
            domain_score: 3,
            answer: "B".to_string(),
            question_text: "How connected do you feel to your family?".to_string(),
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn row_converts_to_record() {
        let record = AssessmentRecord::try_from(row()).unwrap();
        assert_eq!(record.level, Level::Two);
        assert_eq!(record.domain, LifeDomain::Family);
        assert_eq!(record.answer, AnswerLetter::B);
        assert_eq!(record.points, 3);
        assert_eq!(record.user_id.as_str(), "user-1");
    }

    #[test]
    fn padded_answer_column_is_accepted() {
        let padded = AssessmentRow {
            answer: "A ".to_string(),
            ..row()
        };
        assert_eq!(AssessmentRecord::try_from(padded).unwrap().answer, AnswerLetter::A);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let bad = AssessmentRow { level: 7, ..row() };
        assert!(AssessmentRecord::try_from(bad).is_err());

        let negative = AssessmentRow { level: -1, ..row() };
        assert!(AssessmentRecord::try_from(negative).is_err());
    }

    #[test]
    fn unknown_domain_is_rejected() {
        let bad = AssessmentRow {
            domain: "Hobbies".to_string(),
            ..row()
        };
        assert!(AssessmentRecord::try_from(bad).is_err());
    }

    #[test]
    fn unknown_answer_is_rejected() {
        let bad = AssessmentRow {
            answer: "E".to_string(),
            ..row()
        };
        assert!(AssessmentRecord::try_from(bad).is_err());
    }
}
