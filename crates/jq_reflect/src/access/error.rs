use alloc::string::String;

use thiserror::Error;

use crate::info::short_type_name;

/// An error returned by path reads and writes.
///
/// Type names are shortened with [`short_type_name`].
///
/// # Examples
///
/// ```
/// use jq_reflect::access::{AccessError, ReflectPathAccess};
///
/// let data = vec![1_u8];
/// let err = data.read_path("3").unwrap_err();
///
/// assert_eq!(err.to_string(), r#""3" not found in Vec<u8>"#);
/// assert!(matches!(err, AccessError::PathNotFound { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A segment addresses nothing in the value it is applied to.
    #[error("{segment:?} not found in {type_name}")]
    PathNotFound {
        /// The segment that failed to resolve.
        segment: String,
        /// The type of the value the segment was applied to.
        type_name: String,
    },
    /// A value cannot be stored, or read, as the requested type.
    #[error("expected {expected}, not {actual}")]
    TypeMismatch {
        /// The type of the destination.
        expected: String,
        /// The type of the offered value.
        actual: String,
    },
    /// A write was attempted through an empty root indirection.
    #[error("invalid receiver")]
    InvalidReceiver,
}

impl AccessError {
    pub(crate) fn path_not_found(segment: &str, type_path: &str) -> Self {
        Self::PathNotFound {
            segment: String::from(segment),
            type_name: short_type_name(type_path),
        }
    }

    pub(crate) fn type_mismatch(expected_path: &str, actual_path: &str) -> Self {
        Self::TypeMismatch {
            expected: short_type_name(expected_path),
            actual: short_type_name(actual_path),
        }
    }
}
