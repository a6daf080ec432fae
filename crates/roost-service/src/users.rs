//! The user-account collection service.

use std::sync::Arc;

use roost_core::{record::UserAccount, store::SocialStore};
use tracing::{error, info};

/// Service facade over the `users` side of a [`SocialStore`].
///
/// Holds no record state of its own; every call goes straight to the store.
pub struct UserCollection<S> {
  store: Arc<S>,
}

impl<S: SocialStore> UserCollection<S> {
  pub fn new(store: Arc<S>) -> Self {
    info!("user collection initialised");
    Self { store }
  }

  /// Insert a new account. Returns `false` if the id is already taken.
  pub async fn add_user(
    &self,
    user_id: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
  ) -> bool {
    let user = UserAccount {
      user_id:    user_id.to_owned(),
      email:      email.to_owned(),
      first_name: first_name.to_owned(),
      last_name:  last_name.to_owned(),
    };
    match self.store.add_user(user).await {
      Ok(()) => {
        info!(%user_id, "added user");
        true
      }
      Err(err) => {
        error!(%user_id, %err, "unable to add user");
        false
      }
    }
  }

  /// Overwrite all fields of an existing account. Returns `false` if the
  /// id is absent.
  pub async fn update_user(
    &self,
    user_id: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
  ) -> bool {
    let user = UserAccount {
      user_id:    user_id.to_owned(),
      email:      email.to_owned(),
      first_name: first_name.to_owned(),
      last_name:  last_name.to_owned(),
    };
    match self.store.update_user(user).await {
      Ok(()) => {
        info!(%user_id, "updated user");
        true
      }
      Err(err) => {
        error!(%user_id, %err, "unable to update user");
        false
      }
    }
  }

  /// Delete an account and all statuses it owns. Returns `false` if the
  /// id is absent.
  pub async fn delete_user(&self, user_id: &str) -> bool {
    match self.store.delete_user(user_id).await {
      Ok(()) => {
        info!(%user_id, "deleted user");
        true
      }
      Err(err) => {
        error!(%user_id, %err, "unable to delete user");
        false
      }
    }
  }

  /// Look up an account by id. `None` covers both "not found" and a store
  /// failure; the latter is additionally logged.
  pub async fn search_user(&self, user_id: &str) -> Option<UserAccount> {
    match self.store.get_user(user_id).await {
      Ok(Some(user)) => {
        info!(%user_id, "found user");
        Some(user)
      }
      Ok(None) => {
        error!(%user_id, "unable to find user");
        None
      }
      Err(err) => {
        error!(%user_id, %err, "user lookup failed");
        None
      }
    }
  }
}
