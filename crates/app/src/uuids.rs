//! Record identifiers.

use std::{fmt, marker::PhantomData, str::FromStr};

use uuid::Uuid;

/// A UUID v7 that can only identify records of type `T`.
///
/// Trait impls are written by hand so they hold for any `T`, not only for
/// record types that are themselves `Copy` or `Eq`.
pub struct TypedUuid<T>(Uuid, PhantomData<fn() -> T>);

impl<T> TypedUuid<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::now_v7())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl<T> Clone for TypedUuid<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedUuid<T> {}

impl<T> PartialEq for TypedUuid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedUuid<T> {}

impl<T> fmt::Debug for TypedUuid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T> fmt::Display for TypedUuid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Only the hyphenated and simple text forms are accepted, so a locator
/// path segment is either a UUID or a slug, never both.
impl<T> FromStr for TypedUuid<T> {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(value).map(Self::from_uuid)
    }
}

impl<T> From<Uuid> for TypedUuid<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<TypedUuid<T>> for Uuid {
    fn from(id: TypedUuid<T>) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn new_ids_are_distinct_and_time_ordered() {
        let first = TypedUuid::<Marker>::new();
        let second = TypedUuid::<Marker>::new();

        assert_ne!(first, second, "freshly generated ids must not collide");
        assert_eq!(first.into_uuid().get_version_num(), 7);
    }

    #[test]
    fn parses_hyphenated_uuid() {
        let parsed: Result<TypedUuid<Marker>, _> = "0190b6a4-7c1e-7000-8000-000000000001".parse();

        assert!(parsed.is_ok(), "expected a valid uuid to parse");
    }

    #[test]
    fn rejects_slug_shaped_input() {
        let parsed: Result<TypedUuid<Marker>, _> = "joao-d-avila".parse();

        assert!(parsed.is_err(), "a slug must not parse as a uuid");
    }
}
