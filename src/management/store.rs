use std::path::Path;

use rusqlite::Connection;

use crate::error::{Error, Result};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS refresh_token (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    token TEXT NOT NULL,
    created TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

const GET_TOKEN_SQL: &str =
    "SELECT token FROM refresh_token ORDER BY created DESC, id DESC LIMIT 1";

const SET_TOKEN_SQL: &str = "INSERT INTO refresh_token (token) VALUES (?1)";

/// Repository for the persisted OAuth refresh token.
///
/// The table is append-only: `set_refresh_token` inserts a new row and
/// `get_refresh_token` reads the most recently created one. History is kept,
/// latest wins.
pub struct TokenStore {
    connection: Connection,
}

impl TokenStore {
    /// Opens (and initializes, if needed) the store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let connection = Connection::open(path)?;
        connection.execute_batch(SCHEMA)?;
        Ok(TokenStore { connection })
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()?;
        connection.execute_batch(SCHEMA)?;
        Ok(TokenStore { connection })
    }

    /// Returns the latest stored refresh token.
    ///
    /// Fails with [`Error::NoRefreshToken`] if none has been stored yet.
    pub fn get_refresh_token(&self) -> Result<String> {
        self.connection
            .query_row(GET_TOKEN_SQL, [], |row| row.get(0))
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Error::NoRefreshToken,
                other => Error::Store(other),
            })
    }

    /// Appends a new refresh token row.
    pub fn set_refresh_token(&self, token: &str) -> Result<()> {
        self.connection.execute(SET_TOKEN_SQL, [token])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_token() {
        let store = TokenStore::open_in_memory().unwrap();
        assert!(matches!(
            store.get_refresh_token(),
            Err(Error::NoRefreshToken)
        ));
    }

    #[test]
    fn stored_token_round_trips() {
        let store = TokenStore::open_in_memory().unwrap();
        store.set_refresh_token("first").unwrap();
        assert_eq!(store.get_refresh_token().unwrap(), "first");
    }

    #[test]
    fn latest_token_wins() {
        let store = TokenStore::open_in_memory().unwrap();
        store.set_refresh_token("first").unwrap();
        store.set_refresh_token("second").unwrap();
        assert_eq!(store.get_refresh_token().unwrap(), "second");
    }
}
