//! SQL schema for the Roost SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `foreign_keys` is a per-connection pragma; the store holds a single
/// long-lived connection, so setting it here covers every later statement.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id    TEXT PRIMARY KEY,
    email      TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL
);

-- Deleting a user deletes every status that user owns.
CREATE TABLE IF NOT EXISTS statuses (
    status_id   TEXT PRIMARY KEY,
    user_id     TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    status_text TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS statuses_owner_idx ON statuses(user_id);

PRAGMA user_version = 1;
";
