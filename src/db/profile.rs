use crate::models::UserProfile;
use rusqlite::{Connection, OptionalExtension, Result};

use super::now;

pub fn upsert_profile(conn: &Connection, profile: &UserProfile) -> Result<()> {
    let ts = now();
    let created_at = if profile.created_at == 0 {
        ts
    } else {
        profile.created_at
    };
    conn.execute(
        "INSERT INTO profiles (user_id, first_name, last_name, email, newsletter, quiz_completed, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(user_id) DO UPDATE SET
             first_name = excluded.first_name,
             last_name = excluded.last_name,
             email = excluded.email,
             newsletter = excluded.newsletter,
             quiz_completed = excluded.quiz_completed,
             updated_at = excluded.updated_at",
        rusqlite::params![
            profile.user_id,
            profile.first_name,
            profile.last_name,
            profile.email,
            profile.newsletter,
            profile.quiz_completed,
            created_at,
            ts
        ],
    )?;
    Ok(())
}

pub fn get_profile(conn: &Connection, user_id: &str) -> Result<Option<UserProfile>> {
    conn.query_row(
        "SELECT user_id, first_name, last_name, email, newsletter, quiz_completed, created_at
         FROM profiles WHERE user_id = ?",
        [user_id],
        |row| {
            Ok(UserProfile {
                user_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
                newsletter: row.get(4)?,
                quiz_completed: row.get(5)?,
                created_at: row.get(6)?,
            })
        },
    )
    .optional()
}

pub fn update_newsletter(conn: &Connection, user_id: &str, newsletter: bool) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE profiles SET newsletter = ?, updated_at = ? WHERE user_id = ?",
        rusqlite::params![newsletter, now(), user_id],
    )?;
    Ok(changed > 0)
}

pub fn set_quiz_completed(conn: &Connection, user_id: &str, completed: bool) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE profiles SET quiz_completed = ?, updated_at = ? WHERE user_id = ?",
        rusqlite::params![completed, now(), user_id],
    )?;
    Ok(changed > 0)
}

pub fn delete_profile(conn: &Connection, user_id: &str) -> Result<bool> {
    let removed = conn.execute("DELETE FROM profiles WHERE user_id = ?", [user_id])?;
    Ok(removed > 0)
}
