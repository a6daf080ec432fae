//! [`SqliteStore`] — the SQLite implementation of [`SocialStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use roost_core::{
  Error as CoreError,
  record::{StatusUpdate, UserAccount},
  store::SocialStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roost record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn user_exists(&self, user_id: String) -> Result<bool> {
    let exists = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM users WHERE user_id = ?1",
              rusqlite::params![user_id],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;
    Ok(exists)
  }

  async fn status_exists(&self, status_id: String) -> Result<bool> {
    let exists = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM statuses WHERE status_id = ?1",
              rusqlite::params![status_id],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;
    Ok(exists)
  }
}

fn status_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<StatusUpdate> {
  Ok(StatusUpdate {
    status_id: row.get(0)?,
    user_id:   row.get(1)?,
    text:      row.get(2)?,
  })
}

// ─── SocialStore impl ────────────────────────────────────────────────────────

impl SocialStore for SqliteStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn add_user(&self, user: UserAccount) -> Result<()> {
    if self.user_exists(user.user_id.clone()).await? {
      return Err(CoreError::DuplicateUser(user.user_id).into());
    }

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (user_id, email, first_name, last_name)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![user.user_id, user.email, user.first_name, user.last_name],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn update_user(&self, user: UserAccount) -> Result<()> {
    let user_id = user.user_id.clone();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE users SET email = ?2, first_name = ?3, last_name = ?4
           WHERE user_id = ?1",
          rusqlite::params![user.user_id, user.email, user.first_name, user.last_name],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(CoreError::UserNotFound(user_id).into());
    }
    Ok(())
  }

  async fn delete_user(&self, user_id: &str) -> Result<()> {
    let id = user_id.to_owned();

    // The schema's ON DELETE CASCADE removes the user's statuses.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM users WHERE user_id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(CoreError::UserNotFound(user_id.to_owned()).into());
    }
    Ok(())
  }

  async fn get_user(&self, user_id: &str) -> Result<Option<UserAccount>> {
    let id = user_id.to_owned();

    let user = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT user_id, email, first_name, last_name
               FROM users WHERE user_id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(UserAccount {
                  user_id:    row.get(0)?,
                  email:      row.get(1)?,
                  first_name: row.get(2)?,
                  last_name:  row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    Ok(user)
  }

  // ── Statuses ──────────────────────────────────────────────────────────────

  async fn add_status(&self, status: StatusUpdate) -> Result<()> {
    if self.status_exists(status.status_id.clone()).await? {
      return Err(CoreError::DuplicateStatus(status.status_id).into());
    }
    if !self.user_exists(status.user_id.clone()).await? {
      return Err(CoreError::OwnerNotFound(status.user_id).into());
    }

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO statuses (status_id, user_id, status_text)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![status.status_id, status.user_id, status.text],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn update_status(&self, status: StatusUpdate) -> Result<()> {
    let status_id = status.status_id.clone();

    // Only the text is writable; id and owner are fixed at creation.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE statuses SET status_text = ?2 WHERE status_id = ?1",
          rusqlite::params![status.status_id, status.text],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(CoreError::StatusNotFound(status_id).into());
    }
    Ok(())
  }

  async fn delete_status(&self, status_id: &str) -> Result<()> {
    let id = status_id.to_owned();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM statuses WHERE status_id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(CoreError::StatusNotFound(status_id.to_owned()).into());
    }
    Ok(())
  }

  async fn get_status(&self, status_id: &str) -> Result<Option<StatusUpdate>> {
    let id = status_id.to_owned();

    let status = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT status_id, user_id, status_text
               FROM statuses WHERE status_id = ?1",
              rusqlite::params![id],
              status_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(status)
  }

  // ── Queries ───────────────────────────────────────────────────────────────

  async fn statuses_by_user(&self, user_id: &str) -> Result<Vec<StatusUpdate>> {
    let id = user_id.to_owned();

    let statuses = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT status_id, user_id, status_text
           FROM statuses WHERE user_id = ?1
           ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![id], status_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(statuses)
  }

  async fn filter_statuses(&self, phrase: &str) -> Result<Vec<StatusUpdate>> {
    let needle = phrase.to_owned();

    // instr() gives literal, case-sensitive containment. LIKE would fold
    // ASCII case and treat '%'/'_' in the phrase as wildcards.
    let statuses = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT status_id, user_id, status_text
           FROM statuses WHERE instr(status_text, ?1) > 0
           ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![needle], status_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(statuses)
  }
}
