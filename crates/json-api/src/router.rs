//! App Router

use std::path::Path;

use salvo::{Router, serve_static::StaticDir};

use crate::{healthcheck, observability::metrics_handler, profiles, uploads};

/// Public API routes. Hoops and state are added by the caller.
pub(crate) fn app_router(uploads_dir: &Path) -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("profiles")
                .post(profiles::create::handler)
                .push(
                    Router::with_path("{locator}")
                        .get(profiles::show::handler)
                        .put(profiles::update::handler)
                        .push(Router::with_path("edit").post(profiles::edit::handler)),
                ),
        )
        .push(
            Router::with_path("uploads")
                .post(uploads::create::handler)
                .push(
                    Router::with_path("{**path}")
                        .get(StaticDir::new(vec![uploads_dir.to_path_buf()])),
                ),
        )
}
