//! View-ready shapes returned by the service layer.

pub mod articles;
pub mod categories;
