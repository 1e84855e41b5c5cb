//! Photos

pub mod data;
pub mod errors;
pub mod service;

pub use errors::PhotosError;
pub use service::*;
