//! Per-endpoint failure policies
//!
//! The adapter produces generic failures. A policy rewrites their messages for
//! one endpoint: status remaps match the numeric code exactly, and the
//! failure's kind and status are never changed.

use homeinv_domain::{Failure, FailureKind};

use crate::messages;

/// Message rewriting for one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPolicy {
    /// Message for a 404
    pub not_found: Option<&'static str>,
    /// Message for a successful response without the expected payload
    pub empty_body: Option<&'static str>,
    /// `(status, message)` pairs, matched by equality on the status code
    pub remaps: &'static [(u16, &'static str)],
    /// Message replacing every failure message
    pub replace_all: Option<&'static str>,
}

impl ErrorPolicy {
    /// Keep the adapter's messages
    pub const NONE: ErrorPolicy = ErrorPolicy {
        not_found: None,
        empty_body: None,
        remaps: &[],
        replace_all: None,
    };

    pub const fn not_found(message: &'static str) -> Self {
        ErrorPolicy {
            not_found: Some(message),
            ..Self::NONE
        }
    }

    pub const fn empty_body(message: &'static str) -> Self {
        ErrorPolicy {
            empty_body: Some(message),
            ..Self::NONE
        }
    }

    pub const fn remaps(remaps: &'static [(u16, &'static str)]) -> Self {
        ErrorPolicy {
            remaps,
            ..Self::NONE
        }
    }

    pub const fn replace_all(message: &'static str) -> Self {
        ErrorPolicy {
            replace_all: Some(message),
            ..Self::NONE
        }
    }

    /// Rewrite the message of `failure` according to this policy
    pub fn apply(&self, failure: Failure) -> Failure {
        if let Some(message) = self.replace_all {
            return failure.with_message(message);
        }

        if let Some(code) = failure.status {
            if let Some((_, message)) = self.remaps.iter().find(|(status, _)| *status == code) {
                return failure.with_message(*message);
            }
        }

        match (failure.kind, self.not_found, self.empty_body) {
            (FailureKind::NotFound, Some(message), _) => failure.with_message(message),
            (FailureKind::EmptyBody, _, Some(message)) => failure.with_message(message),
            _ => failure,
        }
    }
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self::NONE
    }
}

/// What an empty collection means for one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Empty is a valid answer: `Success([])`
    Allow,
    /// Empty is an error carrying this message
    Reject(&'static str),
}

impl EmptyPolicy {
    /// Apply to the outcome of a collection fetch. A missing body counts as
    /// an empty collection.
    pub fn apply<T, F>(self, result: Result<T, Failure>, is_empty: F) -> Result<T, Failure>
    where
        T: Default,
        F: FnOnce(&T) -> bool,
    {
        match (self, result) {
            (EmptyPolicy::Allow, Err(failure)) if failure.kind == FailureKind::EmptyBody => {
                Ok(T::default())
            }
            (EmptyPolicy::Reject(message), Err(failure)) if failure.kind == FailureKind::EmptyBody => {
                Err(Failure::empty(message))
            }
            (EmptyPolicy::Reject(message), Ok(value)) if is_empty(&value) => {
                Err(Failure::empty(message))
            }
            (_, result) => result,
        }
    }
}

// Endpoint policies

pub const HOMES_BY_USER: ErrorPolicy =
    ErrorPolicy::remaps(&[(403, messages::PERMISSION_DENIED)]);
pub const HOMES_BY_USER_EMPTY: EmptyPolicy = EmptyPolicy::Reject(messages::NO_HOMES_FOUND);
pub const HOME_BY_ID: ErrorPolicy = ErrorPolicy::not_found(messages::NO_HOME_FOUND);
pub const SAVE_HOME: ErrorPolicy = ErrorPolicy::replace_all(messages::HOME_NOT_CREATED);
pub const UPDATE_HOME: ErrorPolicy = ErrorPolicy::empty_body(messages::UPDATING_HOME);
pub const DELETE_HOME: ErrorPolicy = ErrorPolicy::replace_all(messages::HOME_NOT_DELETED);

pub const ROOM_BY_ID: ErrorPolicy = ErrorPolicy::not_found(messages::NO_ROOM_FOUND);
pub const SAVE_ROOM: ErrorPolicy = ErrorPolicy::empty_body(messages::SAVING_ROOM);
pub const UPDATE_ROOM: ErrorPolicy = ErrorPolicy::empty_body(messages::UPDATING_ROOM);
pub const DELETE_ROOM: ErrorPolicy = ErrorPolicy::not_found(messages::NO_ROOM_FOUND);

pub const FURNITURE_BY_ID: ErrorPolicy = ErrorPolicy::not_found(messages::NO_FURNITURE_FOUND);
pub const SAVE_FURNITURE: ErrorPolicy = ErrorPolicy::empty_body(messages::SAVING_FURNITURE);
pub const UPDATE_FURNITURE: ErrorPolicy = ErrorPolicy::empty_body(messages::UPDATING_FURNITURE);
pub const DELETE_FURNITURE: ErrorPolicy = ErrorPolicy::not_found(messages::NO_FURNITURE_FOUND);

pub const COMPARTMENT_BY_ID: ErrorPolicy = ErrorPolicy::not_found(messages::NO_COMPARTMENT_FOUND);
pub const SAVE_COMPARTMENT: ErrorPolicy = ErrorPolicy::empty_body(messages::SAVING_COMPARTMENT);
pub const UPDATE_COMPARTMENT: ErrorPolicy =
    ErrorPolicy::empty_body(messages::UPDATING_COMPARTMENT);
pub const DELETE_COMPARTMENT: ErrorPolicy =
    ErrorPolicy::not_found(messages::NO_COMPARTMENT_FOUND);

pub const ITEM_BY_ID: ErrorPolicy = ErrorPolicy::not_found(messages::NO_ITEM_FOUND);
pub const SAVE_ITEM: ErrorPolicy = ErrorPolicy::empty_body(messages::SAVING_ITEM);
pub const UPDATE_ITEM: ErrorPolicy = ErrorPolicy::empty_body(messages::UPDATING_ITEM);
pub const ITEM_ROUTE: ErrorPolicy = ErrorPolicy::not_found(messages::NO_ITEM_ROUTE_FOUND);

pub const USER_LOOKUP: ErrorPolicy = ErrorPolicy::not_found(messages::NO_USER_FOUND);
pub const HOME_USERS_EMPTY: EmptyPolicy = EmptyPolicy::Reject(messages::NO_MEMBERS_FOUND);
pub const LOGIN: ErrorPolicy = ErrorPolicy::remaps(&[
    (401, messages::WRONG_LOGIN),
    (403, messages::ACCOUNT_NOT_ACTIVATED),
]);
pub const REGISTER: ErrorPolicy = ErrorPolicy::remaps(&[(400, messages::USER_ALREADY_EXISTS)]);

pub const SEND_INVITATION: ErrorPolicy = ErrorPolicy::not_found(messages::NO_USER_FOUND);
pub const INVITATION_INFO: ErrorPolicy = ErrorPolicy::not_found(messages::NO_INVITATION_FOUND);
pub const RESOLVE_INVITATION: ErrorPolicy =
    ErrorPolicy::not_found(messages::INVITATION_RESOLVED);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_remap_by_status_equality() {
        let failure = HOMES_BY_USER.apply(Failure::status(403, "Forbidden"));
        assert_eq!(failure.message, messages::PERMISSION_DENIED);
        assert_eq!(failure.status, Some(403));
    }

    #[test]
    fn test_remap_ignores_other_codes() {
        // 4031 would have matched a substring check on "403"
        let failure = HOMES_BY_USER.apply(Failure::status(4031, "Odd"));
        assert_eq!(failure.message, "ERROR: 4031 Odd");
    }

    #[test]
    fn test_not_found_message() {
        let failure = ROOM_BY_ID.apply(Failure::not_found());
        assert_eq!(failure.message, messages::NO_ROOM_FOUND);
        assert!(failure.is_not_found());
    }

    #[test]
    fn test_delete_reports_missing_entity() {
        assert_eq!(DELETE_ROOM.apply(Failure::not_found()).message, messages::NO_ROOM_FOUND);
        assert_eq!(
            DELETE_FURNITURE.apply(Failure::not_found()).message,
            messages::NO_FURNITURE_FOUND
        );
        assert_eq!(
            DELETE_COMPARTMENT.apply(Failure::not_found()).message,
            messages::NO_COMPARTMENT_FOUND
        );
        assert_eq!(
            DELETE_ROOM.apply(Failure::status(500, "Internal Server Error")).message,
            "ERROR: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_replace_all() {
        let failure = SAVE_HOME.apply(Failure::transport("connection refused"));
        assert_eq!(failure.message, messages::HOME_NOT_CREATED);
        assert_eq!(failure.kind, FailureKind::Transport);
    }

    #[test]
    fn test_login_remaps() {
        assert_eq!(LOGIN.apply(Failure::status(401, "Unauthorized")).message, messages::WRONG_LOGIN);
        assert_eq!(
            LOGIN.apply(Failure::status(403, "Forbidden")).message,
            messages::ACCOUNT_NOT_ACTIVATED
        );
        assert_eq!(
            LOGIN.apply(Failure::status(500, "Internal Server Error")).message,
            "ERROR: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_empty_allowed() {
        let result: Result<Vec<i32>, _> = EmptyPolicy::Allow.apply(Err(Failure::empty_body()), Vec::is_empty);
        assert_eq!(result.unwrap(), Vec::<i32>::new());

        let result: Result<Vec<i32>, _> = EmptyPolicy::Allow.apply(Ok(vec![]), Vec::is_empty);
        assert_eq!(result.unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_empty_rejected() {
        let result: Result<Vec<i32>, _> = HOMES_BY_USER_EMPTY.apply(Ok(vec![]), Vec::is_empty);
        let failure = result.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Empty);
        assert_eq!(failure.message, messages::NO_HOMES_FOUND);

        let result: Result<Vec<i32>, _> = HOMES_BY_USER_EMPTY.apply(Err(Failure::empty_body()), Vec::is_empty);
        assert_eq!(result.unwrap_err().message, messages::NO_HOMES_FOUND);
    }

    #[test]
    fn test_empty_policy_keeps_other_failures() {
        let result: Result<Vec<i32>, _> =
            EmptyPolicy::Allow.apply(Err(Failure::status(500, "Internal Server Error")), Vec::is_empty);
        assert_eq!(result.unwrap_err().status, Some(500));
    }

    proptest! {
        #[test]
        fn prop_policy_never_changes_kind_or_status(code in 100u16..600) {
            let policies = [HOMES_BY_USER, HOME_BY_ID, SAVE_HOME, LOGIN, REGISTER, ErrorPolicy::NONE];
            for policy in policies {
                let original = if code == 404 { Failure::not_found() } else { Failure::status(code, "Phrase") };
                let mapped = policy.apply(original.clone());
                prop_assert_eq!(mapped.kind, original.kind);
                prop_assert_eq!(mapped.status, original.status);
            }
        }

        #[test]
        fn prop_no_policy_keeps_adapter_message(code in 100u16..600) {
            let original = Failure::status(code, "Phrase");
            prop_assert_eq!(ErrorPolicy::NONE.apply(original.clone()), original);
        }
    }
}
