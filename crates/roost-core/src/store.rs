//! The `SocialStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roost-store-sqlite`).
//! Higher layers (`roost-service`, `roost-cli`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::record::{StatusUpdate, UserAccount};

/// Abstraction over a Roost record store backend.
///
/// Every operation is atomic: it either fully succeeds or leaves the store
/// unchanged. Deleting a user also deletes every status that user owns.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait SocialStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Insert a new user account. Fails with a duplicate-user error if
  /// `user_id` is already taken; the existing record is left untouched.
  fn add_user(
    &self,
    user: UserAccount,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Overwrite all mutable fields of an existing account. Fails with a
  /// not-found error if `user_id` is absent.
  fn update_user(
    &self,
    user: UserAccount,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete an account and, transitively, every status it owns.
  fn delete_user<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Retrieve an account by id. Returns `None` if not found.
  fn get_user<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Option<UserAccount>, Self::Error>> + Send + 'a;

  // ── Statuses ──────────────────────────────────────────────────────────

  /// Insert a new status. Fails if `status_id` is taken or if `user_id`
  /// does not reference an existing account.
  fn add_status(
    &self,
    status: StatusUpdate,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Replace the text of an existing status. The id and owner are fixed;
  /// the `user_id` field of the argument is ignored on write.
  fn update_status(
    &self,
    status: StatusUpdate,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete a status by id.
  fn delete_status<'a>(
    &'a self,
    status_id: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Retrieve a status by id. Returns `None` if not found.
  fn get_status<'a>(
    &'a self,
    status_id: &'a str,
  ) -> impl Future<Output = Result<Option<StatusUpdate>, Self::Error>> + Send + 'a;

  // ── Queries ───────────────────────────────────────────────────────────

  /// All statuses owned by `user_id`, in insertion order. Empty if the
  /// user has none (or does not exist).
  fn statuses_by_user<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Vec<StatusUpdate>, Self::Error>> + Send + 'a;

  /// All statuses whose text contains `phrase`. Containment is
  /// case-sensitive; `phrase` is matched literally, with no wildcards.
  fn filter_statuses<'a>(
    &'a self,
    phrase: &'a str,
  ) -> impl Future<Output = Result<Vec<StatusUpdate>, Self::Error>> + Send + 'a;
}
