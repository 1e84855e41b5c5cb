//! Prometheus metrics and the `/metrics` endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const PREFIX: &str = "groomerlink_json";

const DURATION_BUCKETS: [f64; 11] = [
    0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
];

#[derive(Debug)]
struct Metrics {
    registry: Registry,
    requests: IntCounterVec,
    request_seconds: HistogramVec,
    in_flight: IntGauge,
    profiles_created: IntCounter,
    identifier_conflicts: IntCounter,
    photos_stored: IntCounter,
}

impl Metrics {
    fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some(PREFIX.to_owned()), None)?;

        let requests = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests by method, route and status."),
            &["method", "route", "status_class", "status_code"],
        )?;

        let request_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request latency by route.")
                .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let in_flight = IntGauge::new("http_requests_in_flight", "HTTP requests being served.")?;

        let profiles_created = IntCounter::new("profiles_created_total", "Profiles created.")?;

        let identifier_conflicts = IntCounter::new(
            "profile_identifier_conflicts_total",
            "Profile writes rejected because no usable identifier was free.",
        )?;

        let photos_stored = IntCounter::new("photos_stored_total", "Profile photos stored.")?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(request_seconds.clone()))?;
        registry.register(Box::new(in_flight.clone()))?;
        registry.register(Box::new(profiles_created.clone()))?;
        registry.register(Box::new(identifier_conflicts.clone()))?;
        registry.register(Box::new(photos_stored.clone()))?;

        Ok(Self {
            registry,
            requests,
            request_seconds,
            in_flight,
            profiles_created,
            identifier_conflicts,
            photos_stored,
        })
    }

    fn encode(&self) -> Result<(String, Vec<u8>), prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();

        encoder.encode(&self.registry.gather(), &mut buffer)?;

        Ok((encoder.format_type().to_owned(), buffer))
    }
}

static METRICS: OnceLock<Option<Metrics>> = OnceLock::new();

/// Metrics are best effort: a registration failure is logged once and every
/// recorder becomes a no-op.
fn metrics() -> Option<&'static Metrics> {
    METRICS
        .get_or_init(|| {
            Metrics::new()
                .inspect_err(|source| error!("failed to build metrics registry: {source}"))
                .ok()
        })
        .as_ref()
}

/// Counts a request as in flight until dropped.
#[derive(Debug)]
pub(super) struct InFlight(Option<&'static Metrics>);

impl InFlight {
    pub(super) fn start() -> Self {
        let metrics = metrics();

        if let Some(metrics) = metrics {
            metrics.in_flight.inc();
        }

        Self(metrics)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(metrics) = self.0 {
            metrics.in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status: StatusCode, seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    metrics
        .requests
        .with_label_values(&[method, route, status_class(status), status.as_str()])
        .inc();

    metrics
        .request_seconds
        .with_label_values(&[method, route])
        .observe(seconds);
}

pub(crate) fn record_profile_created() {
    if let Some(metrics) = metrics() {
        metrics.profiles_created.inc();
    }
}

pub(crate) fn record_identifier_conflict() {
    if let Some(metrics) = metrics() {
        metrics.identifier_conflicts.inc();
    }
}

pub(crate) fn record_photo_stored() {
    if let Some(metrics) = metrics() {
        metrics.photos_stored.inc();
    }
}

fn status_class(status: StatusCode) -> &'static str {
    if status.is_informational() {
        "1xx"
    } else if status.is_success() {
        "2xx"
    } else if status.is_redirection() {
        "3xx"
    } else if status.is_client_error() {
        "4xx"
    } else if status.is_server_error() {
        "5xx"
    } else {
        "other"
    }
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let (format_type, body) = match metrics().map(Metrics::encode) {
        Some(Ok(encoded)) => encoded,
        Some(Err(source)) => {
            error!("failed to encode metrics: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
        None => {
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    };

    match HeaderValue::from_str(&format_type) {
        Ok(value) => {
            res.headers_mut().insert(CONTENT_TYPE, value);
        }
        Err(source) => error!("invalid metrics content type {format_type:?}: {source}"),
    }

    res.render(String::from_utf8_lossy(&body).into_owned());
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_classes() {
        assert_eq!(status_class(StatusCode::CREATED), "2xx", "created");
        assert_eq!(status_class(StatusCode::CONFLICT), "4xx", "conflict");
        assert_eq!(status_class(StatusCode::BAD_GATEWAY), "5xx", "bad gateway");
    }

    #[tokio::test]
    async fn metrics_endpoint_exposes_request_and_domain_metrics() -> TestResult {
        observe_request("GET", "/profiles/{locator}", StatusCode::OK, 0.042);
        record_profile_created();
        record_identifier_conflict();
        record_photo_stored();

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let body = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        for name in [
            "groomerlink_json_http_requests_total",
            "groomerlink_json_http_request_duration_seconds",
            "groomerlink_json_http_requests_in_flight",
            "groomerlink_json_profiles_created_total",
            "groomerlink_json_profile_identifier_conflicts_total",
            "groomerlink_json_photos_stored_total",
        ] {
            assert!(body.contains(name), "expected {name} in metrics output");
        }

        assert!(
            body.contains(r#"route="/profiles/{locator}""#),
            "expected normalised route label"
        );

        Ok(())
    }
}
