//! Service-layer tests against an in-memory SQLite store.

use std::sync::Arc;

use roost_store_sqlite::SqliteStore;

use crate::{StatusCollection, UserCollection, load_statuses, load_users};

async fn collections() -> (UserCollection<SqliteStore>, StatusCollection<SqliteStore>) {
  let store = Arc::new(
    SqliteStore::open_in_memory()
      .await
      .expect("in-memory store"),
  );
  (
    UserCollection::new(store.clone()),
    StatusCollection::new(store),
  )
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_user_reports_duplicate_as_failure() {
  let (users, _) = collections().await;

  assert!(users.add_user("u1", "a@example.com", "Ann", "Orr").await);
  assert!(!users.add_user("u1", "b@example.com", "Bob", "Orr").await);

  // First record survives.
  let found = users.search_user("u1").await.unwrap();
  assert_eq!(found.email, "a@example.com");
  assert_eq!(found.first_name, "Ann");
}

#[tokio::test]
async fn search_user_returns_submitted_fields() {
  let (users, _) = collections().await;
  users.add_user("u1", "a@example.com", "Ann", "Orr").await;

  let found = users.search_user("u1").await.unwrap();
  assert_eq!(found.user_id, "u1");
  assert_eq!(found.email, "a@example.com");
  assert_eq!(found.first_name, "Ann");
  assert_eq!(found.last_name, "Orr");

  assert!(users.search_user("u2").await.is_none());
}

#[tokio::test]
async fn update_and_delete_missing_user_fail() {
  let (users, _) = collections().await;

  assert!(!users.update_user("u1", "a@example.com", "Ann", "Orr").await);
  assert!(!users.delete_user("u1").await);
}

#[tokio::test]
async fn delete_user_cascades_through_services() {
  let (users, statuses) = collections().await;
  users.add_user("u1", "a@example.com", "Ann", "Orr").await;
  statuses.add_status("s1", "u1", "hello").await;

  assert!(users.delete_user("u1").await);
  assert!(statuses.search_status("s1").await.is_none());
}

// ─── Statuses ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_status_requires_existing_owner() {
  let (_, statuses) = collections().await;

  assert!(!statuses.add_status("s1", "ghost", "boo").await);
  assert!(statuses.search_status("s1").await.is_none());
}

#[tokio::test]
async fn update_missing_status_fails() {
  let (users, statuses) = collections().await;
  users.add_user("u1", "a@example.com", "Ann", "Orr").await;

  assert!(!statuses.update_status("s1", "u1", "new text").await);
  assert!(statuses.search_status("s1").await.is_none());
}

#[tokio::test]
async fn search_all_status_updates_none_when_empty() {
  let (users, statuses) = collections().await;
  users.add_user("u1", "a@example.com", "Ann", "Orr").await;

  assert!(statuses.search_all_status_updates("u1").await.is_none());

  statuses.add_status("s1", "u1", "one").await;
  statuses.add_status("s2", "u1", "two").await;

  let mine = statuses.search_all_status_updates("u1").await.unwrap();
  assert_eq!(mine.len(), 2);
}

#[tokio::test]
async fn filter_status_by_string_none_when_no_match() {
  let (users, statuses) = collections().await;
  users.add_user("u1", "a@example.com", "Ann", "Orr").await;
  statuses.add_status("s1", "u1", "I like cats").await;
  statuses.add_status("s2", "u1", "dogs rule").await;
  statuses.add_status("s3", "u1", "concatenate").await;

  let hits = statuses.filter_status_by_string("cat").await.unwrap();
  let ids: Vec<_> = hits.iter().map(|st| st.status_id.as_str()).collect();
  assert_eq!(ids, ["s1", "s3"]);

  assert!(statuses.filter_status_by_string("zebra").await.is_none());
}

// ─── Bulk load ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn load_users_skips_bad_rows_and_loads_the_rest() {
  let (users, _) = collections().await;

  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("accounts.csv");
  std::fs::write(
    &path,
    "USER_ID,EMAIL,NAME,LASTNAME\n\
     u1,a@example.com,Ann,Orr\n\
     not,enough\n\
     u2,b@example.com,Bob,Orr\n\
     u1,dup@example.com,Dup,Orr\n",
  )
  .unwrap();

  let report = load_users(&path, &users).await.unwrap();
  assert_eq!(report.loaded, 2);
  assert_eq!(report.skipped, 2);

  assert!(users.search_user("u2").await.is_some());
  // The duplicate row did not clobber u1.
  assert_eq!(users.search_user("u1").await.unwrap().email, "a@example.com");
}

#[tokio::test]
async fn load_statuses_skips_rows_with_missing_owner() {
  let (users, statuses) = collections().await;
  users.add_user("u1", "a@example.com", "Ann", "Orr").await;

  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("statuses.csv");
  std::fs::write(
    &path,
    "STATUS_ID,USER_ID,STATUS_TEXT\n\
     s1,u1,hello world\n\
     s2,ghost,nobody home\n",
  )
  .unwrap();

  let report = load_statuses(&path, &statuses).await.unwrap();
  assert_eq!(report.loaded, 1);
  assert_eq!(report.skipped, 1);

  assert!(statuses.search_status("s1").await.is_some());
  assert!(statuses.search_status("s2").await.is_none());
}

#[tokio::test]
async fn load_users_missing_file_errors() {
  let (users, _) = collections().await;
  assert!(load_users("/no/such/file.csv", &users).await.is_err());
}
