//! Bulk loading of accounts and statuses from delimited text files.
//!
//! Both formats are comma-delimited with a header row:
//!
//! ```text
//! USER_ID,EMAIL,NAME,LASTNAME
//! STATUS_ID,USER_ID,STATUS_TEXT
//! ```
//!
//! Rows that fail to parse or fail to insert are logged and skipped; the
//! load always runs to the end of the file.

use std::path::Path;

use roost_core::store::SocialStore;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{StatusCollection, UserCollection};

/// Outcome of a bulk load: how many rows went in, how many were skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
  pub loaded:  usize,
  pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct UserRow {
  #[serde(rename = "USER_ID")]
  user_id:    String,
  #[serde(rename = "EMAIL")]
  email:      String,
  #[serde(rename = "NAME")]
  first_name: String,
  #[serde(rename = "LASTNAME")]
  last_name:  String,
}

#[derive(Debug, Deserialize)]
struct StatusRow {
  #[serde(rename = "STATUS_ID")]
  status_id: String,
  #[serde(rename = "USER_ID")]
  user_id:   String,
  #[serde(rename = "STATUS_TEXT")]
  text:      String,
}

/// Load account records from `path`, inserting each through `users`.
///
/// Returns an error only if the file itself cannot be opened; per-row
/// failures are counted in the report.
pub async fn load_users<S: SocialStore>(
  path: impl AsRef<Path>,
  users: &UserCollection<S>,
) -> Result<LoadReport, csv::Error> {
  let mut reader = csv::Reader::from_path(path.as_ref())?;
  let mut report = LoadReport::default();

  for row in reader.deserialize::<UserRow>() {
    match row {
      Ok(row) => {
        if users
          .add_user(&row.user_id, &row.email, &row.first_name, &row.last_name)
          .await
        {
          report.loaded += 1;
        } else {
          report.skipped += 1;
        }
      }
      Err(err) => {
        warn!(%err, "skipping malformed user row");
        report.skipped += 1;
      }
    }
  }

  info!(
    path = %path.as_ref().display(),
    loaded = report.loaded,
    skipped = report.skipped,
    "user load finished",
  );
  Ok(report)
}

/// Load status records from `path`, inserting each through `statuses`.
pub async fn load_statuses<S: SocialStore>(
  path: impl AsRef<Path>,
  statuses: &StatusCollection<S>,
) -> Result<LoadReport, csv::Error> {
  let mut reader = csv::Reader::from_path(path.as_ref())?;
  let mut report = LoadReport::default();

  for row in reader.deserialize::<StatusRow>() {
    match row {
      Ok(row) => {
        if statuses
          .add_status(&row.status_id, &row.user_id, &row.text)
          .await
        {
          report.loaded += 1;
        } else {
          report.skipped += 1;
        }
      }
      Err(err) => {
        warn!(%err, "skipping malformed status row");
        report.skipped += 1;
      }
    }
  }

  info!(
    path = %path.as_ref().display(),
    loaded = report.loaded,
    skipped = report.skipped,
    "status load finished",
  );
  Ok(report)
}
