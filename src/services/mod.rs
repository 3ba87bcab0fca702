pub use errors::{ServiceError, ServiceResult};

pub mod articles;
pub mod bookmarks;
pub mod categories;
pub mod errors;
pub mod home;
pub mod search;
