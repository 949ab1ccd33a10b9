use crate::models::OutcomeKind;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row};

use super::now;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub id: u64,
    pub user_id: String,
    pub quiz_type: String,
    pub tags: Vec<String>,
    pub outcome: OutcomeKind,
    pub completed_at: u64,
}

fn row_to_result(row: &Row) -> Result<QuizResult> {
    let tags_json: String = row.get(3)?;
    let tags: Vec<String> = serde_json::from_str(&tags_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    let outcome_raw: String = row.get(4)?;
    let outcome = OutcomeKind::parse(&outcome_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            format!("unknown outcome '{}'", outcome_raw).into(),
        )
    })?;

    Ok(QuizResult {
        id: row.get(0)?,
        user_id: row.get(1)?,
        quiz_type: row.get(2)?,
        tags,
        outcome,
        completed_at: row.get(5)?,
    })
}

pub fn create_quiz_result(
    conn: &Connection,
    user_id: &str,
    quiz_type: &str,
    tags: &[String],
    outcome: OutcomeKind,
) -> Result<u64> {
    let tags_json = serde_json::to_string(tags)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    conn.execute(
        "INSERT INTO quiz_results (user_id, quiz_type, tags, outcome, completed_at)
         VALUES (?, ?, ?, ?, ?)",
        rusqlite::params![user_id, quiz_type, tags_json, outcome.as_str(), now()],
    )?;

    Ok(conn.last_insert_rowid() as u64)
}

pub fn latest_quiz_result(
    conn: &Connection,
    user_id: &str,
    quiz_type: &str,
) -> Result<Option<QuizResult>> {
    conn.query_row(
        "SELECT id, user_id, quiz_type, tags, outcome, completed_at FROM quiz_results
         WHERE user_id = ? AND quiz_type = ?
         ORDER BY completed_at DESC, id DESC
         LIMIT 1",
        [user_id, quiz_type],
        row_to_result,
    )
    .optional()
}

pub fn count_quiz_results(conn: &Connection, user_id: &str) -> Result<usize> {
    conn.query_row(
        "SELECT COUNT(*) FROM quiz_results WHERE user_id = ?",
        [user_id],
        |row| row.get(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_test_db;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_create_and_fetch_latest() {
        let conn = open_test_db();
        create_quiz_result(
            &conn,
            "u1",
            "onboarding",
            &tags(&["calm", "rarely"]),
            OutcomeKind::General,
        )
        .unwrap();
        let second = create_quiz_result(
            &conn,
            "u1",
            "onboarding",
            &tags(&["stressed", "overwhelmed"]),
            OutcomeKind::StressRelief,
        )
        .unwrap();

        let latest = latest_quiz_result(&conn, "u1", "onboarding")
            .unwrap()
            .unwrap();
        assert_eq!(latest.id, second);
        assert_eq!(latest.outcome, OutcomeKind::StressRelief);
        assert_eq!(latest.tags, tags(&["stressed", "overwhelmed"]));
    }

    #[test]
    fn test_latest_is_scoped_to_user_and_type() {
        let conn = open_test_db();
        create_quiz_result(&conn, "u1", "onboarding", &[], OutcomeKind::General).unwrap();

        assert!(latest_quiz_result(&conn, "u2", "onboarding").unwrap().is_none());
        assert!(latest_quiz_result(&conn, "u1", "weekly").unwrap().is_none());
        assert_eq!(count_quiz_results(&conn, "u1").unwrap(), 1);
        assert_eq!(count_quiz_results(&conn, "u2").unwrap(), 0);
    }
}
