//! The two record types the store manages.
//!
//! Records are identified by caller-supplied external string ids, not by
//! anything the store generates. The store is the sole owner of record state;
//! values handed out by reads are plain snapshots.

use serde::{Deserialize, Serialize};

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
  pub user_id:    String,
  pub email:      String,
  pub first_name: String,
  pub last_name:  String,
}

/// A status message owned by a user account.
///
/// `status_id` and `user_id` are fixed at creation; updates may only replace
/// the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
  pub status_id: String,
  pub user_id:   String,
  pub text:      String,
}
