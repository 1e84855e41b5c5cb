//! Browser-facing response hardening.

use salvo::{
    cors::{AllowOrigin, Any, Cors, CorsHandler},
    http::{
        HeaderValue, Method,
        header::{
            CONTENT_TYPE, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
            X_XSS_PROTECTION,
        },
    },
    prelude::*,
};

use crate::config::http::HttpConfig;

/// Adds the standard hardening headers to every response.
#[handler]
pub(crate) async fn security_headers(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let headers = res.headers_mut();

    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    ctrl.call_next(req, depot, res).await;
}

/// CORS policy built from the configured origins; `*` allows any origin.
pub(crate) fn cors_handler(config: &HttpConfig) -> CorsHandler {
    let allow_any = config
        .cors_allowed_origins
        .iter()
        .any(|origin| origin.trim() == "*");

    let origins: AllowOrigin = if allow_any {
        Any.into()
    } else {
        AllowOrigin::list(
            config
                .cors_allowed_origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok()),
        )
    };

    Cors::new()
        .allow_origin(origins)
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(vec![CONTENT_TYPE])
        .into_handler()
}
