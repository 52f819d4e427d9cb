//! Configuration: the operator's config file and the reminder settings store

mod loader;
mod store;

pub use loader::{load_config, API_TOKEN_ENV, API_URL_ENV};
pub use store::ReminderConfigStore;
