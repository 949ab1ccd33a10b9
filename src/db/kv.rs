use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

use crate::theme::{PreferenceStore, ThemePreference, THEME_PREFERENCE_KEY};

use super::now;

pub fn kv_set<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        rusqlite::params![key, json, now()],
    )?;
    Ok(())
}

pub fn kv_get<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    let raw: Option<String> = conn
        .query_row("SELECT value FROM kv_store WHERE key = ?", [key], |row| {
            row.get(0)
        })
        .optional()?;

    raw.map(|json| {
        serde_json::from_str(&json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
    })
    .transpose()
}

pub fn kv_remove(conn: &Connection, key: &str) -> Result<bool> {
    let removed = conn.execute("DELETE FROM kv_store WHERE key = ?", [key])?;
    Ok(removed > 0)
}

/// Key-value store handle shared with the theme store.
#[derive(Debug, Clone)]
pub struct KvStore {
    conn: Rc<Connection>,
}

impl KvStore {
    pub fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl PreferenceStore for KvStore {
    fn load_preference(&self) -> Option<ThemePreference> {
        match kv_get(&self.conn, THEME_PREFERENCE_KEY) {
            Ok(preference) => preference,
            Err(e) => {
                crate::logger::warn(&format!("Unreadable theme preference: {}", e));
                None
            }
        }
    }

    fn save_preference(&self, preference: ThemePreference) -> std::result::Result<(), String> {
        kv_set(&self.conn, THEME_PREFERENCE_KEY, &preference).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_test_db;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Cache {
        completed: bool,
        score: u32,
    }

    #[test]
    fn test_set_get_overwrite_remove() {
        let conn = open_test_db();
        assert_eq!(kv_get::<Cache>(&conn, "cache").unwrap(), None);

        kv_set(&conn, "cache", &Cache { completed: false, score: 1 }).unwrap();
        kv_set(&conn, "cache", &Cache { completed: true, score: 2 }).unwrap();
        assert_eq!(
            kv_get::<Cache>(&conn, "cache").unwrap(),
            Some(Cache { completed: true, score: 2 })
        );

        assert!(kv_remove(&conn, "cache").unwrap());
        assert!(!kv_remove(&conn, "cache").unwrap());
        assert_eq!(kv_get::<Cache>(&conn, "cache").unwrap(), None);
    }

    #[test]
    fn test_get_with_wrong_shape_is_error() {
        let conn = open_test_db();
        kv_set(&conn, "cache", &"just a string").unwrap();
        assert!(kv_get::<Cache>(&conn, "cache").is_err());
    }

    #[test]
    fn test_theme_preference_persists_through_kv_store() {
        let store = KvStore::new(Rc::new(open_test_db()));
        assert_eq!(store.load_preference(), None);
        store.save_preference(ThemePreference::Dark).unwrap();
        assert_eq!(store.load_preference(), Some(ThemePreference::Dark));
    }
}
