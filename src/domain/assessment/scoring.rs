//! Answer validation and score aggregation.
//!
//! Scores are never stored. Every report recomputes them from the full
//! record history, so a resubmitted level adds to the totals instead of
//! replacing the earlier answers.

use std::collections::{BTreeMap, HashMap};

use super::question_bank::QUESTIONS_PER_LEVEL;
use super::{
    AnswerLetter, AssessmentError, AssessmentRecord, AssessmentSubmission, Level, LifeDomain,
    QuestionBank, TrackingEvent,
};
use crate::domain::foundation::{Timestamp, UserId};

/// Turns raw answer maps into records ready to persist.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    bank: &'a QuestionBank,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Validates a submission and builds its records and tracking event.
    ///
    /// `answers` is keyed by question position as a decimal string ("0".."11").
    /// The count is checked first, then every position in order; the first
    /// bad entry rejects the whole submission.
    pub fn score_submission(
        &self,
        user_id: &UserId,
        level: Level,
        answers: &HashMap<String, String>,
        now: Timestamp,
    ) -> Result<AssessmentSubmission, AssessmentError> {
        if answers.len() != QUESTIONS_PER_LEVEL {
            return Err(AssessmentError::answer_count_mismatch(
                QUESTIONS_PER_LEVEL,
                answers.len(),
            ));
        }

        let mut records = Vec::with_capacity(QUESTIONS_PER_LEVEL);
        for index in 0..QUESTIONS_PER_LEVEL {
            let raw = answers
                .get(&index.to_string())
                .map(String::as_str)
                .unwrap_or("");
            let letter = AnswerLetter::parse(raw)
                .ok_or_else(|| AssessmentError::invalid_answer(index, raw.to_uppercase()))?;
            let question = self
                .bank
                .question(level, index)
                .ok_or_else(|| AssessmentError::level_not_found(i64::from(level.number())))?;

            records.push(AssessmentRecord::answer(user_id.clone(), question, letter, now));
        }

        Ok(AssessmentSubmission {
            user_id: user_id.clone(),
            level,
            records,
            event: TrackingEvent::assessment_completed(user_id.clone(), level, now),
        })
    }
}

/// Cumulative score per domain. Always holds all twelve domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainScores(BTreeMap<LifeDomain, i64>);

impl DomainScores {
    /// Sums points per domain across every record given.
    pub fn from_records<'r>(records: impl IntoIterator<Item = &'r AssessmentRecord>) -> Self {
        let mut scores: BTreeMap<LifeDomain, i64> =
            LifeDomain::ALL.iter().map(|d| (*d, 0)).collect();
        for record in records {
            *scores.entry(record.domain).or_insert(0) += record.points;
        }
        Self(scores)
    }

    pub fn get(&self, domain: LifeDomain) -> i64 {
        self.0.get(&domain).copied().unwrap_or(0)
    }

    /// Sum over all twelve domains.
    pub fn overall(&self) -> i64 {
        self.0.values().sum()
    }

    /// Domains with their scores, in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (LifeDomain, i64)> + '_ {
        self.0.iter().map(|(d, s)| (*d, *s))
    }

    /// True when no domain has any points yet.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|s| *s == 0)
    }

    /// Up to `n` weakest domains among those with a non-zero score.
    ///
    /// Ascending by score; equal scores keep presentation order.
    pub fn lowest_assessed(&self, n: usize) -> Vec<(LifeDomain, i64)> {
        let mut assessed: Vec<(LifeDomain, i64)> = self.iter().filter(|(_, s)| *s > 0).collect();
        assessed.sort_by_key(|(_, score)| *score);
        assessed.truncate(n);
        assessed
    }
}

/// Per-domain totals over a user's full history.
pub fn cumulative_domain_scores(records: &[AssessmentRecord]) -> DomainScores {
    DomainScores::from_records(records)
}

/// Sum of all cumulative domain scores.
pub fn overall_score(records: &[AssessmentRecord]) -> i64 {
    cumulative_domain_scores(records).overall()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn engine() -> ScoringEngine<'static> {
        ScoringEngine::new(QuestionBank::standard().unwrap())
    }

    fn answers_all(letter: &str) -> HashMap<String, String> {
        (0..12).map(|i| (i.to_string(), letter.to_string())).collect()
    }

    #[test]
    fn all_a_yields_twelve_records_of_four_points() {
        let submission = engine()
            .score_submission(&user(), Level::One, &answers_all("A"), Timestamp::now())
            .unwrap();

        assert_eq!(submission.records.len(), 12);
        assert!(submission.records.iter().all(|r| r.points == 4));
        assert_eq!(submission.event.event_type, TrackingEvent::ASSESSMENT_COMPLETED);
    }

    #[test]
    fn records_follow_question_positions() {
        let submission = engine()
            .score_submission(&user(), Level::Two, &answers_all("d"), Timestamp::now())
            .unwrap();

        for (i, record) in submission.records.iter().enumerate() {
            assert_eq!(record.domain, LifeDomain::ALL[i]);
            assert_eq!(record.answer, AnswerLetter::D);
            assert_eq!(record.level, Level::Two);
        }
    }

    #[test]
    fn lowercase_letters_score_like_uppercase() {
        let lower = engine()
            .score_submission(&user(), Level::One, &answers_all("b"), Timestamp::now())
            .unwrap();
        assert!(lower.records.iter().all(|r| r.answer == AnswerLetter::B && r.points == 3));
    }

    #[test]
    fn eleven_answers_is_count_mismatch() {
        let mut answers = answers_all("A");
        answers.remove("11");
        let err = engine()
            .score_submission(&user(), Level::One, &answers, Timestamp::now())
            .unwrap_err();
        assert_eq!(err, AssessmentError::answer_count_mismatch(12, 11));
    }

    #[test]
    fn thirteen_answers_is_count_mismatch() {
        let mut answers = answers_all("A");
        answers.insert("12".to_string(), "A".to_string());
        let err = engine()
            .score_submission(&user(), Level::One, &answers, Timestamp::now())
            .unwrap_err();
        assert_eq!(err, AssessmentError::answer_count_mismatch(12, 13));
    }

    #[test]
    fn count_is_checked_before_letters() {
        let answers: HashMap<String, String> =
            (0..3).map(|i| (i.to_string(), "Z".to_string())).collect();
        let err = engine()
            .score_submission(&user(), Level::One, &answers, Timestamp::now())
            .unwrap_err();
        assert!(matches!(err, AssessmentError::AnswerCountMismatch { .. }));
    }

    #[test]
    fn first_invalid_letter_wins() {
        let mut answers = answers_all("A");
        answers.insert("3".to_string(), "e".to_string());
        answers.insert("7".to_string(), "X".to_string());
        let err = engine()
            .score_submission(&user(), Level::One, &answers, Timestamp::now())
            .unwrap_err();
        assert_eq!(err, AssessmentError::invalid_answer(3, "E"));
    }

    #[test]
    fn twelve_entries_with_wrong_keys_report_missing_position() {
        let mut answers = answers_all("A");
        answers.remove("5");
        answers.insert("twelve".to_string(), "A".to_string());
        let err = engine()
            .score_submission(&user(), Level::One, &answers, Timestamp::now())
            .unwrap_err();
        assert_eq!(err, AssessmentError::invalid_answer(5, ""));
    }

    #[test]
    fn empty_history_scores_zero_in_every_domain() {
        let scores = cumulative_domain_scores(&[]);
        assert_eq!(scores.iter().count(), 12);
        assert!(scores.iter().all(|(_, s)| s == 0));
        assert_eq!(scores.overall(), 0);
    }

    fn records_for(letters: &[(usize, &str)]) -> Vec<AssessmentRecord> {
        let bank = QuestionBank::standard().unwrap();
        letters
            .iter()
            .map(|(index, letter)| {
                let question = bank.question(Level::One, *index).unwrap();
                AssessmentRecord::answer(
                    user(),
                    question,
                    AnswerLetter::parse(letter).unwrap(),
                    Timestamp::now(),
                )
            })
            .collect()
    }

    #[test]
    fn lowest_assessed_orders_by_score() {
        let mut answers = answers_all("A");
        answers.insert("6".to_string(), "D".to_string());
        answers.insert("2".to_string(), "C".to_string());
        answers.insert("10".to_string(), "B".to_string());
        let submission = engine()
            .score_submission(&user(), Level::One, &answers, Timestamp::now())
            .unwrap();

        let lowest = DomainScores::from_records(&submission.records).lowest_assessed(3);

        assert_eq!(
            lowest,
            vec![
                (LifeDomain::RelationshipsAndLove, 1),
                (LifeDomain::PhysicalHealth, 2),
                (LifeDomain::PersonalGrowth, 3),
            ]
        );
    }

    #[test]
    fn lowest_assessed_breaks_ties_by_presentation_order() {
        let records = records_for(&[(11, "D"), (4, "D"), (0, "D"), (7, "D")]);
        let lowest = DomainScores::from_records(&records).lowest_assessed(3);

        let domains: Vec<LifeDomain> = lowest.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            domains,
            vec![
                LifeDomain::CareerAndVocation,
                LifeDomain::Family,
                LifeDomain::CommunityAndGiving,
            ]
        );
    }

    #[test]
    fn lowest_assessed_skips_unscored_domains() {
        let records = records_for(&[(5, "A"), (9, "C")]);
        let scores = DomainScores::from_records(&records);

        assert!(!scores.is_empty());
        assert_eq!(
            scores.lowest_assessed(3),
            vec![(LifeDomain::PhysicalEnvironment, 2), (LifeDomain::Friends, 4)]
        );
    }

    #[test]
    fn nothing_assessed_yields_no_focus_domains() {
        let scores = cumulative_domain_scores(&[]);
        assert!(scores.is_empty());
        assert!(scores.lowest_assessed(3).is_empty());
    }

    #[test]
    fn scores_sum_across_levels_and_submissions() {
        let e = engine();
        let mut records = Vec::new();
        for (level, letter) in [(Level::One, "A"), (Level::Two, "C"), (Level::One, "D")] {
            let s = e
                .score_submission(&user(), level, &answers_all(letter), Timestamp::now())
                .unwrap();
            records.extend(s.records);
        }

        let scores = cumulative_domain_scores(&records);
        for domain in LifeDomain::ALL {
            assert_eq!(scores.get(domain), 4 + 2 + 1);
        }
        assert_eq!(overall_score(&records), 7 * 12);
    }
}
