//! Error types for `roost-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("user {0:?} already exists")]
  DuplicateUser(String),

  #[error("status {0:?} already exists")]
  DuplicateStatus(String),

  #[error("user not found: {0:?}")]
  UserNotFound(String),

  #[error("status not found: {0:?}")]
  StatusNotFound(String),

  /// A status referenced an owner id with no matching user account.
  #[error("status owner not found: {0:?}")]
  OwnerNotFound(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
