//! The status-message collection service.

use std::sync::Arc;

use roost_core::{record::StatusUpdate, store::SocialStore};
use tracing::{error, info};

/// Service facade over the `statuses` side of a [`SocialStore`].
pub struct StatusCollection<S> {
  store: Arc<S>,
}

impl<S: SocialStore> StatusCollection<S> {
  pub fn new(store: Arc<S>) -> Self {
    info!("status collection initialised");
    Self { store }
  }

  /// Insert a new status. Returns `false` if the id is taken or the owner
  /// does not exist.
  pub async fn add_status(&self, status_id: &str, user_id: &str, text: &str) -> bool {
    let status = StatusUpdate {
      status_id: status_id.to_owned(),
      user_id:   user_id.to_owned(),
      text:      text.to_owned(),
    };
    match self.store.add_status(status).await {
      Ok(()) => {
        info!(%status_id, %user_id, "added status");
        true
      }
      Err(err) => {
        error!(%status_id, %err, "unable to add status");
        false
      }
    }
  }

  /// Replace the text of an existing status. Returns `false` if the id is
  /// absent. The owner cannot be changed.
  pub async fn update_status(&self, status_id: &str, user_id: &str, text: &str) -> bool {
    let status = StatusUpdate {
      status_id: status_id.to_owned(),
      user_id:   user_id.to_owned(),
      text:      text.to_owned(),
    };
    match self.store.update_status(status).await {
      Ok(()) => {
        info!(%status_id, %user_id, "updated status");
        true
      }
      Err(err) => {
        error!(%status_id, %err, "unable to update status");
        false
      }
    }
  }

  /// Delete a status by id. Returns `false` if the id is absent.
  pub async fn delete_status(&self, status_id: &str) -> bool {
    match self.store.delete_status(status_id).await {
      Ok(()) => {
        info!(%status_id, "deleted status");
        true
      }
      Err(err) => {
        error!(%status_id, %err, "unable to delete status");
        false
      }
    }
  }

  /// Look up a status by id.
  pub async fn search_status(&self, status_id: &str) -> Option<StatusUpdate> {
    match self.store.get_status(status_id).await {
      Ok(Some(status)) => {
        info!(%status_id, "found status");
        Some(status)
      }
      Ok(None) => {
        error!(%status_id, "unable to find status");
        None
      }
      Err(err) => {
        error!(%status_id, %err, "status lookup failed");
        None
      }
    }
  }

  /// All statuses owned by `user_id`. `None` if the user has none.
  pub async fn search_all_status_updates(&self, user_id: &str) -> Option<Vec<StatusUpdate>> {
    match self.store.statuses_by_user(user_id).await {
      Ok(statuses) if statuses.is_empty() => {
        error!(%user_id, "no statuses for user");
        None
      }
      Ok(statuses) => {
        info!(%user_id, count = statuses.len(), "found statuses for user");
        Some(statuses)
      }
      Err(err) => {
        error!(%user_id, %err, "status query failed");
        None
      }
    }
  }

  /// All statuses whose text contains `phrase` (case-sensitive). `None` if
  /// nothing matches.
  pub async fn filter_status_by_string(&self, phrase: &str) -> Option<Vec<StatusUpdate>> {
    match self.store.filter_statuses(phrase).await {
      Ok(statuses) if statuses.is_empty() => {
        error!(%phrase, "no statuses matching phrase");
        None
      }
      Ok(statuses) => {
        info!(%phrase, count = statuses.len(), "found statuses matching phrase");
        Some(statuses)
      }
      Err(err) => {
        error!(%phrase, %err, "status filter failed");
        None
      }
    }
  }
}
