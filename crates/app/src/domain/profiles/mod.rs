//! Profiles

pub mod data;
pub mod errors;
pub mod links;
pub mod ownership;
pub mod records;
mod repository;
pub mod service;
pub mod slugs;
pub mod validation;

pub use errors::ProfilesServiceError;
pub use service::*;
