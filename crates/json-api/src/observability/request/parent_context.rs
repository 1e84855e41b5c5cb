//! Remote parent span from W3C trace headers.

use opentelemetry::{
    Context, global,
    propagation::{Extractor, TextMapPropagator},
    trace::TraceContextExt as _,
};
use salvo::http::{HeaderMap, HeaderName};

struct TraceHeaders<'a>(&'a HeaderMap);

impl Extractor for TraceHeaders<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

/// The caller's span context, if the request carries a valid one.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    global::get_text_map_propagator(|propagator| remote_parent(propagator, headers))
}

fn remote_parent(propagator: &dyn TextMapPropagator, headers: &HeaderMap) -> Option<Context> {
    // Start from an empty context so a request without trace headers does
    // not pick up whatever span is active in this task.
    let context = propagator.extract_with_context(&Context::new(), &TraceHeaders(headers));
    let valid = context.span().span_context().is_valid();

    valid.then_some(context)
}

#[cfg(test)]
mod tests {
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use salvo::http::HeaderValue;

    use super::*;

    fn headers_with_traceparent(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert("traceparent", HeaderValue::from_static(value));

        headers
    }

    #[test]
    fn valid_traceparent_yields_parent() {
        let headers =
            headers_with_traceparent("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01");

        let parent = remote_parent(&TraceContextPropagator::new(), &headers);

        assert!(parent.is_some(), "expected a remote parent");
    }

    #[test]
    fn missing_headers_yield_nothing() {
        let parent = remote_parent(&TraceContextPropagator::new(), &HeaderMap::new());

        assert!(parent.is_none(), "no headers means no parent");
    }

    #[test]
    fn malformed_traceparent_yields_nothing() {
        let headers = headers_with_traceparent("00-not-a-trace-01");

        let parent = remote_parent(&TraceContextPropagator::new(), &headers);

        assert!(parent.is_none(), "malformed header should be ignored");
    }
}
