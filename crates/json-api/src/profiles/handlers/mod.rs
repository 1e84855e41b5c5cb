//! Profile Handlers

pub(crate) mod create;
pub(crate) mod edit;
pub(crate) mod show;
pub(crate) mod update;
