//! Membership-specific error types.
//!
//! Errors raised while quoting, assembling or submitting a membership.
//! The pure computations never fail; these come from lookups, form
//! validation and the remote collaborators.

use crate::domain::foundation::{
    ChapterId, DomainError, ErrorCode, MemberId, MembershipId, PackageId, ValidationError,
};

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// No member exists with this id.
    MemberNotFound(MemberId),

    /// The package is not in the catalog.
    PackageNotFound(PackageId),

    /// No membership record exists with this id.
    MembershipNotFound(MembershipId),

    /// The package is restricted to another chapter.
    PackageNotVisible {
        package_id: PackageId,
        chapter_id: Option<ChapterId>,
    },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl MembershipError {
    pub fn member_not_found(id: MemberId) -> Self {
        MembershipError::MemberNotFound(id)
    }

    pub fn package_not_found(id: PackageId) -> Self {
        MembershipError::PackageNotFound(id)
    }

    pub fn membership_not_found(id: MembershipId) -> Self {
        MembershipError::MembershipNotFound(id)
    }

    pub fn package_not_visible(package_id: PackageId, chapter_id: Option<ChapterId>) -> Self {
        MembershipError::PackageNotVisible {
            package_id,
            chapter_id,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            MembershipError::PackageNotFound(_) => ErrorCode::PackageNotFound,
            MembershipError::MembershipNotFound(_) => ErrorCode::MembershipNotFound,
            MembershipError::PackageNotVisible { .. } => ErrorCode::PackageNotVisible,
            MembershipError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MembershipError::Infrastructure(_) => ErrorCode::RemoteApiError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::MemberNotFound(id) => format!("Member not found: {}", id),
            MembershipError::PackageNotFound(id) => format!("Package not found: {}", id),
            MembershipError::MembershipNotFound(id) => format!("Membership not found: {}", id),
            MembershipError::PackageNotVisible {
                package_id,
                chapter_id,
            } => match chapter_id {
                Some(chapter) => format!(
                    "Package {} is not available to chapter {}",
                    package_id, chapter
                ),
                None => format!("Package {} is not available", package_id),
            },
            MembershipError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MembershipError::Infrastructure(_))
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<ValidationError> for MembershipError {
    fn from(err: ValidationError) -> Self {
        MembershipError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        if err.code.is_validation() {
            MembershipError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            }
        } else {
            MembershipError::Infrastructure(err.to_string())
        }
    }
}

impl From<MembershipError> for DomainError {
    fn from(err: MembershipError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
