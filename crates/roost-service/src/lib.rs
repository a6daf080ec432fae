//! Collection services for Roost.
//!
//! The shell talks to [`UserCollection`] and [`StatusCollection`], which wrap
//! any [`roost_core::store::SocialStore`] and reduce its typed errors to the
//! boolean / not-found signals the menu reports. Every outcome is logged via
//! [`tracing`]; the caller decides where those events go.

pub mod load;
pub mod status;
pub mod users;

pub use load::{LoadReport, load_statuses, load_users};
pub use status::StatusCollection;
pub use users::UserCollection;

#[cfg(test)]
mod tests;
