//! GroomerLink Domain Concerns

pub mod photos;
pub mod profiles;
