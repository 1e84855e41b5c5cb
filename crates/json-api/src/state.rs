//! State

use std::sync::Arc;

use groomerlink_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Largest photo accepted by the upload endpoint, in bytes.
    pub(crate) upload_max_bytes: u64,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, upload_max_bytes: u64) -> Self {
        Self {
            app,
            upload_max_bytes,
        }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, upload_max_bytes: u64) -> Arc<Self> {
        Arc::new(Self::new(app, upload_max_bytes))
    }
}
