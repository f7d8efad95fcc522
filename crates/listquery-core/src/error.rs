use crate::{
    compile::CompilationError, cursor::CursorDecodeError, input::ValidationError,
    policy::PolicyError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// QueryError
///
/// Umbrella error for the list-query request path.
/// `class()` separates caller mistakes from server faults so transports can
/// map them to 4xx and 5xx responses.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("invalid list query: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid cursor: {0}")]
    Decode(#[from] CursorDecodeError),

    #[error("list query compilation failed: {0}")]
    Compilation(#[from] CompilationError),

    #[error("invalid pagination policy: {0}")]
    Policy(#[from] PolicyError),
}

impl QueryError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Validation(_) | Self::Decode(_) => ErrorClass::Rejected,
            Self::Compilation(_) | Self::Policy(_) => ErrorClass::Internal,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Validation(_) => ErrorOrigin::Input,
            Self::Decode(_) => ErrorOrigin::Cursor,
            Self::Compilation(_) => ErrorOrigin::Compile,
            Self::Policy(_) => ErrorOrigin::Policy,
        }
    }

    /// True when the caller can fix the request and retry.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self.class(), ErrorClass::Rejected)
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Rejected,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Rejected => "rejected",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Input,
    Cursor,
    Compile,
    Policy,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Input => "input",
            Self::Cursor => "cursor",
            Self::Compile => "compile",
            Self::Policy => "policy",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_are_rejected_and_contract_errors_are_internal() {
        let validation = QueryError::from(ValidationError::CursorMultiSort { count: 2 });
        assert_eq!(validation.class(), ErrorClass::Rejected);
        assert_eq!(validation.origin(), ErrorOrigin::Input);
        assert!(validation.is_rejected());

        let decode = QueryError::from(CursorDecodeError::Empty);
        assert_eq!(decode.class(), ErrorClass::Rejected);
        assert_eq!(decode.origin(), ErrorOrigin::Cursor);

        let compilation =
            QueryError::from(CompilationError::UnknownSortColumn { column: "archived" });
        assert_eq!(compilation.class(), ErrorClass::Internal);
        assert!(!compilation.is_rejected());

        let policy = QueryError::from(PolicyError::ZeroBound { field: "max_limit" });
        assert_eq!(policy.class(), ErrorClass::Internal);
        assert_eq!(policy.origin(), ErrorOrigin::Policy);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(ErrorClass::Rejected.to_string(), "rejected");
        assert_eq!(ErrorClass::Internal.to_string(), "internal");
        assert_eq!(ErrorOrigin::Cursor.to_string(), "cursor");
    }

    #[test]
    fn display_names_the_inner_error() {
        let err = QueryError::from(CompilationError::UnknownSortColumn { column: "archived" });

        assert_eq!(
            err.to_string(),
            "list query compilation failed: sort column 'archived' is not in the sortable set"
        );
    }
}
