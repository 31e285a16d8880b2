//! Three-state outcome of a remote operation

use std::pin::Pin;

use futures_core::Stream;

use crate::errors::Failure;

/// State of one remote operation as observed by a subscriber.
///
/// A pipeline emits `Loading` first and then exactly one of `Success` or
/// `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(Failure),
}

/// Cold stream of resource states. Every call to a repository method builds
/// a fresh stream, and nothing happens until it is polled.
pub type ResourceStream<T> = Pin<Box<dyn Stream<Item = Resource<T>> + Send + 'static>>;

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    /// `true` for `Success` and `Error`
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resource<U> {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(value) => Resource::Success(f(value)),
            Resource::Error(failure) => Resource::Error(failure),
        }
    }

    pub fn success(self) -> Option<T> {
        match self {
            Resource::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Failure> {
        match self {
            Resource::Error(failure) => Some(failure),
            _ => None,
        }
    }
}

impl<T> From<Result<T, Failure>> for Resource<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Resource::Success(value),
            Err(failure) => Resource::Error(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Resource<i32> = Ok(3).into();
        assert_eq!(ok, Resource::Success(3));

        let err: Resource<i32> = Err(Failure::not_found()).into();
        assert!(err.error().is_some_and(Failure::is_not_found));
    }

    #[test]
    fn test_map_preserves_state() {
        assert_eq!(Resource::<i32>::Loading.map(|v| v * 2), Resource::Loading);
        assert_eq!(Resource::Success(2).map(|v| v * 2), Resource::Success(4));
        assert!(Resource::<i32>::Error(Failure::empty_body())
            .map(|v| v * 2)
            .error()
            .is_some());
    }

    #[test]
    fn test_terminal() {
        assert!(!Resource::<()>::Loading.is_terminal());
        assert!(Resource::Success(()).is_terminal());
        assert!(Resource::<()>::Error(Failure::transport("refused")).is_terminal());
    }
}
