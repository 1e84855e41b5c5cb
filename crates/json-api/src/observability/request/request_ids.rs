//! `x-request-id` handling.

use salvo::{http::header::HeaderValue, prelude::Response};
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied id that is echoed back.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Keep a caller's id when it is short printable ASCII, otherwise mint a UUID v7.
pub(super) fn resolve_request_id(incoming: Option<String>) -> String {
    incoming
        .map(|id| id.trim().to_owned())
        .filter(|id| is_acceptable(id))
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn is_acceptable(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN && id.bytes().all(|b| b.is_ascii_graphic())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    // Resolved ids are always printable ASCII, so this only fails on a bug.
    if let Ok(value) = HeaderValue::from_str(request_id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
}
