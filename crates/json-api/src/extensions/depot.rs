//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};

use crate::state::State;

/// Helpers for pulling shared values out of the depot.
pub(crate) trait DepotExt {
    /// The injected application state, or a 500 when the router was built without it.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>()
            .map_err(|_ignored| StatusError::internal_server_error().brief("Missing application state"))
    }
}
