use crate::calendar::{days_in_month, first_of_month};
use crate::models::{JournalEntry, Mood};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row};

use super::now;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn row_to_entry(row: &Row) -> Result<JournalEntry> {
    let date_raw: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date_raw, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    let mood_raw: String = row.get(2)?;
    let mood = Mood::parse(&mood_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unknown mood '{}'", mood_raw).into(),
        )
    })?;

    Ok(JournalEntry {
        id: Some(row.get(0)?),
        date,
        mood,
        note: row.get(3)?,
    })
}

pub fn add_entry(conn: &Connection, user_id: &str, entry: &JournalEntry) -> Result<u64> {
    conn.execute(
        "INSERT INTO journal_entries (user_id, entry_date, mood, note, created_at)
         VALUES (?, ?, ?, ?, ?)",
        rusqlite::params![
            user_id,
            entry.date.format(DATE_FORMAT).to_string(),
            entry.mood.as_str(),
            entry.note,
            now()
        ],
    )?;
    Ok(conn.last_insert_rowid() as u64)
}

/// Entries with `from <= date <= to`, oldest first. Rows that no longer parse
/// are skipped.
pub fn entries_between(
    conn: &Connection,
    user_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, entry_date, mood, note FROM journal_entries
         WHERE user_id = ? AND entry_date >= ? AND entry_date <= ?
         ORDER BY entry_date ASC, id ASC",
    )?;

    let entries = stmt
        .query_map(
            rusqlite::params![
                user_id,
                from.format(DATE_FORMAT).to_string(),
                to.format(DATE_FORMAT).to_string()
            ],
            row_to_entry,
        )?
        .filter_map(|r| r.ok())
        .collect();

    Ok(entries)
}

pub fn entries_for_month(
    conn: &Connection,
    user_id: &str,
    month: u32,
    year: i32,
) -> Result<Vec<JournalEntry>> {
    let Some(first) = first_of_month(month, year) else {
        return Ok(Vec::new());
    };
    let last = first + chrono::Duration::days(days_in_month(month, year) as i64 - 1);
    entries_between(conn, user_id, first, last)
}

pub fn all_entries(conn: &Connection, user_id: &str) -> Result<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, entry_date, mood, note FROM journal_entries
         WHERE user_id = ?
         ORDER BY entry_date ASC, id ASC",
    )?;

    let entries = stmt
        .query_map([user_id], row_to_entry)?
        .filter_map(|r| r.ok())
        .collect();

    Ok(entries)
}

pub fn delete_entry(conn: &Connection, id: u64) -> Result<bool> {
    let removed = conn.execute("DELETE FROM journal_entries WHERE id = ?", [id])?;
    Ok(removed > 0)
}
