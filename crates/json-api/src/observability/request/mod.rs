//! Per-request span, request id and completion logging.

mod parent_context;
mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use super::{metrics, settings};

/// Paths polled by infrastructure; they get neither spans nor metrics.
const UNTRACED_PATHS: [&str; 2] = ["/healthcheck", "/metrics"];

/// What gets logged about a request once it completes.
#[derive(Debug)]
struct RequestFacts {
    request_id: String,
    method: String,
    path: String,
    route: String,
}

impl RequestFacts {
    fn span(&self, remote_addr: &str) -> Span {
        tracing::info_span!(
            parent: None,
            "http.request",
            otel.name = %format!("{} {}", self.method, self.route),
            otel.kind = "server",
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            remote_addr = %remote_addr,
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        )
    }

    fn log_completion(&self, status: StatusCode, elapsed: Duration) {
        let duration_ms = elapsed.as_millis();
        let threshold_ms = u128::from(settings::slow_request_threshold_ms());
        let code = status.as_u16();

        info!(status = code, duration_ms, "request.completed");

        if status.is_server_error() {
            error!(status = code, method = %self.method, path = %self.path, request_id = %self.request_id, "server error response");
        } else if status.is_client_error() {
            warn!(status = code, method = %self.method, path = %self.path, request_id = %self.request_id, "client error response");
        }

        if duration_ms > threshold_ms {
            warn!(
                method = %self.method,
                path = %self.path,
                request_id = %self.request_id,
                duration_ms,
                threshold_ms,
                "slow request"
            );
        }
    }
}

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if UNTRACED_PATHS.contains(&req.uri().path()) {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();
    let _in_flight = metrics::InFlight::start();

    let path = req.uri().path().to_owned();

    let facts = RequestFacts {
        request_id: request_ids::resolve_request_id(
            req.header::<String>(request_ids::REQUEST_ID_HEADER),
        ),
        method: req.method().to_string(),
        route: spans::route_template(&path),
        path,
    };

    request_ids::set_request_id_header(res, &facts.request_id);

    let span = facts.span(&req.remote_addr().to_string());

    if settings::otel_parent_propagation_enabled()
        && let Some(parent) = parent_context::extract_parent_context(req.headers())
        && let Err(source) = span.set_parent(parent)
    {
        warn!("failed to attach remote parent to request span: {source}");
    }

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let elapsed = started.elapsed();
    let status = res.status_code.unwrap_or(StatusCode::OK);

    metrics::observe_request(&facts.method, &facts.route, status, elapsed.as_secs_f64());

    span.record("status", status.as_u16());
    span.record("duration_ms", elapsed.as_millis());
    span.in_scope(|| facts.log_completion(status, elapsed));
}
