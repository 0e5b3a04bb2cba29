pub mod list_file;
pub mod manager;

pub use crate::domain::model::PackageList;
pub use crate::domain::ports::Fetcher;
pub use crate::utils::error::Result;
pub use manager::{ListManager, ListPath};
