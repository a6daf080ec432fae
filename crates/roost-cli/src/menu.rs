//! The fixed single-letter menu and its dispatch loop.

use std::io::{self, Write as _};

use roost_core::store::SocialStore;
use roost_service::{StatusCollection, UserCollection, load_statuses, load_users};
use tracing::info;

// ─── Options ──────────────────────────────────────────────────────────────────

/// One selectable menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
  LoadUsers,
  LoadStatuses,
  AddUser,
  UpdateUser,
  SearchUser,
  DeleteUser,
  AddStatus,
  UpdateStatus,
  SearchStatus,
  ReviewMatching,
  PrintMatching,
  FlaggedMatching,
  DeleteStatus,
  Quit,
}

impl MenuOption {
  /// Parse a raw input line. Whitespace and case are forgiven; anything
  /// outside A–N is `None`.
  pub fn from_input(line: &str) -> Option<Self> {
    match line.trim().to_ascii_uppercase().as_str() {
      "A" => Some(Self::LoadUsers),
      "B" => Some(Self::LoadStatuses),
      "C" => Some(Self::AddUser),
      "D" => Some(Self::UpdateUser),
      "E" => Some(Self::SearchUser),
      "F" => Some(Self::DeleteUser),
      "G" => Some(Self::AddStatus),
      "H" => Some(Self::UpdateStatus),
      "I" => Some(Self::SearchStatus),
      "J" => Some(Self::ReviewMatching),
      "K" => Some(Self::PrintMatching),
      "L" => Some(Self::FlaggedMatching),
      "M" => Some(Self::DeleteStatus),
      "N" => Some(Self::Quit),
      _ => None,
    }
  }
}

const MENU: &str = "
  A: Load users file          H: Update status
  B: Load statuses file       I: Search status
  C: Add user                 J: Review statuses matching a phrase
  D: Update user              K: Print statuses matching a phrase
  E: Search user              L: Print matching statuses as (id, owner, text)
  F: Delete user              M: Delete status
  G: Add status               N: Quit
";

// ─── Prompting ────────────────────────────────────────────────────────────────

/// Prompt on stdout and read one line from stdin. `None` on end of input.
fn prompt(label: &str) -> io::Result<Option<String>> {
  print!("{label}: ");
  io::stdout().flush()?;

  let mut line = String::new();
  if io::stdin().read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
}

fn yes(answer: &str) -> bool { answer.trim().eq_ignore_ascii_case("y") }

// Reads a prompt, or returns from the handler early on end of input.
macro_rules! ask {
  ($label:expr) => {
    match prompt($label)? {
      Some(line) => line,
      None => return Ok(()),
    }
  };
}

// ─── Loop ─────────────────────────────────────────────────────────────────────

/// Run the menu until the user quits or stdin closes.
pub async fn run<S: SocialStore>(
  users: &UserCollection<S>,
  statuses: &StatusCollection<S>,
) -> anyhow::Result<()> {
  loop {
    println!("{MENU}");
    let Some(selection) = prompt("Please enter your choice")? else {
      break;
    };

    let Some(option) = MenuOption::from_input(&selection) else {
      info!(%selection, "invalid option");
      println!("Invalid option");
      continue;
    };
    info!(%selection, ?option, "menu selection");

    match option {
      MenuOption::LoadUsers => load_users_file(users).await?,
      MenuOption::LoadStatuses => load_statuses_file(statuses).await?,
      MenuOption::AddUser => add_user(users).await?,
      MenuOption::UpdateUser => update_user(users).await?,
      MenuOption::SearchUser => search_user(users).await?,
      MenuOption::DeleteUser => delete_user(users).await?,
      MenuOption::AddStatus => add_status(statuses).await?,
      MenuOption::UpdateStatus => update_status(statuses).await?,
      MenuOption::SearchStatus => search_status(statuses).await?,
      MenuOption::ReviewMatching => review_matching(statuses).await?,
      MenuOption::PrintMatching => print_matching(statuses).await?,
      MenuOption::FlaggedMatching => flagged_matching(statuses).await?,
      MenuOption::DeleteStatus => delete_status(statuses).await?,
      MenuOption::Quit => break,
    }
  }

  info!("quitting program");
  Ok(())
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

async fn load_users_file<S: SocialStore>(
  users: &UserCollection<S>,
) -> anyhow::Result<()> {
  let path = ask!("Enter filename of user file");
  match load_users(&path, users).await {
    Ok(report) => {
      println!("Loaded {} users, skipped {}", report.loaded, report.skipped);
    }
    Err(err) => println!("Could not read {path}: {err}"),
  }
  Ok(())
}

async fn load_statuses_file<S: SocialStore>(
  statuses: &StatusCollection<S>,
) -> anyhow::Result<()> {
  let path = ask!("Enter filename for status file");
  match load_statuses(&path, statuses).await {
    Ok(report) => {
      println!("Loaded {} statuses, skipped {}", report.loaded, report.skipped);
    }
    Err(err) => println!("Could not read {path}: {err}"),
  }
  Ok(())
}

async fn add_user<S: SocialStore>(users: &UserCollection<S>) -> anyhow::Result<()> {
  let user_id = ask!("User ID");
  let email = ask!("User email");
  let first_name = ask!("User name");
  let last_name = ask!("User last name");

  if users.add_user(&user_id, &email, &first_name, &last_name).await {
    println!("User was successfully added");
  } else {
    println!("An error occurred while trying to add new user");
  }
  Ok(())
}

async fn update_user<S: SocialStore>(users: &UserCollection<S>) -> anyhow::Result<()> {
  let user_id = ask!("User ID");
  let email = ask!("User email");
  let first_name = ask!("User name");
  let last_name = ask!("User last name");

  if users.update_user(&user_id, &email, &first_name, &last_name).await {
    println!("User was successfully updated");
  } else {
    println!("An error occurred while trying to update user");
  }
  Ok(())
}

async fn search_user<S: SocialStore>(users: &UserCollection<S>) -> anyhow::Result<()> {
  let user_id = ask!("Enter user ID to search");

  match users.search_user(&user_id).await {
    Some(user) => {
      println!("User ID: {}", user.user_id);
      println!("Email: {}", user.email);
      println!("Name: {}", user.first_name);
      println!("Last name: {}", user.last_name);
    }
    None => println!("ERROR: User does not exist"),
  }
  Ok(())
}

async fn delete_user<S: SocialStore>(users: &UserCollection<S>) -> anyhow::Result<()> {
  let user_id = ask!("User ID");

  if users.delete_user(&user_id).await {
    println!("User was successfully deleted");
  } else {
    println!("An error occurred while trying to delete user");
  }
  Ok(())
}

async fn add_status<S: SocialStore>(
  statuses: &StatusCollection<S>,
) -> anyhow::Result<()> {
  let user_id = ask!("User ID");
  let status_id = ask!("Status ID");
  let text = ask!("Status text");

  if statuses.add_status(&status_id, &user_id, &text).await {
    println!("New status was successfully added");
  } else {
    println!("An error occurred while trying to add new status");
  }
  Ok(())
}

async fn update_status<S: SocialStore>(
  statuses: &StatusCollection<S>,
) -> anyhow::Result<()> {
  let user_id = ask!("User ID");
  let status_id = ask!("Status ID");
  let text = ask!("Status text");

  if statuses.update_status(&status_id, &user_id, &text).await {
    println!("Status was successfully updated");
  } else {
    println!("An error occurred while trying to update status");
  }
  Ok(())
}

async fn search_status<S: SocialStore>(
  statuses: &StatusCollection<S>,
) -> anyhow::Result<()> {
  let status_id = ask!("Enter status ID to search");

  match statuses.search_status(&status_id).await {
    Some(status) => {
      println!("User ID: {}", status.user_id);
      println!("Status ID: {}", status.status_id);
      println!("Status text: {}", status.text);
    }
    None => println!("ERROR: Status does not exist"),
  }
  Ok(())
}

/// Walk the matches one at a time, offering to delete each.
async fn review_matching<S: SocialStore>(
  statuses: &StatusCollection<S>,
) -> anyhow::Result<()> {
  let phrase = ask!("Enter the string to search");

  let Some(hits) = statuses.filter_status_by_string(&phrase).await else {
    println!("No statuses matching {phrase:?}");
    return Ok(());
  };

  for status in hits {
    println!("{}", status.text);
    if yes(&ask!("Delete the status? (Y/N)")) {
      statuses.delete_status(&status.status_id).await;
    } else if !yes(&ask!("Review the next status? (Y/N)")) {
      break;
    }
  }
  Ok(())
}

async fn print_matching<S: SocialStore>(
  statuses: &StatusCollection<S>,
) -> anyhow::Result<()> {
  let phrase = ask!("Enter the string to search");

  match statuses.filter_status_by_string(&phrase).await {
    Some(hits) => {
      for status in hits {
        println!("{}", status.text);
      }
    }
    None => println!("No statuses matching {phrase:?}"),
  }
  Ok(())
}

async fn flagged_matching<S: SocialStore>(
  statuses: &StatusCollection<S>,
) -> anyhow::Result<()> {
  let phrase = ask!("Enter the string to search");

  match statuses.filter_status_by_string(&phrase).await {
    Some(hits) => {
      for status in hits {
        println!("({:?}, {:?}, {:?})", status.status_id, status.user_id, status.text);
      }
    }
    None => println!("No statuses matching {phrase:?}"),
  }
  Ok(())
}

async fn delete_status<S: SocialStore>(
  statuses: &StatusCollection<S>,
) -> anyhow::Result<()> {
  let status_id = ask!("Status ID");

  if statuses.delete_status(&status_id).await {
    println!("Status was successfully deleted");
  } else {
    println!("An error occurred while trying to delete status");
  }
  Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
