//! Route templates for span names and metric labels.

use uuid::Uuid;

/// Replace identifiers in a path with placeholders so spans and metric
/// labels stay low-cardinality.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");
    let mut previous: Option<&str> = None;

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        let placeholder = match previous {
            Some("profiles") => Some("{locator}"),
            Some("uploads") => Some("{file}"),
            _ if Uuid::parse_str(segment).is_ok() => Some("{uuid}"),
            _ => None,
        };

        normalised.push_str(placeholder.unwrap_or(segment));
        previous = Some(segment);
    }

    normalised
}
