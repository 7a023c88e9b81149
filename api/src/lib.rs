//! This crate contains the platform independent core of the directory app:
//! the country model, the remote source, the loader, the filters, the theme
//! preference and the immutable UI snapshot.

pub mod config;
pub mod country;
pub mod directory_source;
pub mod error;
pub mod filter;
pub mod loader;
pub mod prefs;
pub mod region;
pub mod snapshot;

pub use country::CountryRecord;
pub use error::DirectoryError;
pub use loader::DirectoryState;
