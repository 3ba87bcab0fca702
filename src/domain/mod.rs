//! Catalog entities and the value types they are built from.

pub mod article;
pub mod catalog;
pub mod category;
pub mod presentation;
pub mod search;
pub mod share;
pub mod types;
