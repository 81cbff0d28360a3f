//! Civic issue reporting over an in-memory sample store.
//!
//! Pages are exposed as CLI commands under [`cli::commands`]; the pure view
//! functions in [`view`] derive everything a page shows from [`store::IssueStore`].

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod routes;
pub mod session;
pub mod store;
pub mod view;

pub use error::{CivicError, Result, StructuredError};
