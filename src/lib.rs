//! Core library exports for the news reader service.
//!
//! The `data` feature exposes the catalog domain, seed loading and the
//! in-memory repositories. The `server` feature adds forms, DTOs, services and
//! the HTTP routes used by the reader application.

pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod repository;
pub mod seed;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
