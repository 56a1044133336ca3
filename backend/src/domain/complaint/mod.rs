//! Complaint aggregate: classification enums, the entity itself, the
//! assignment snapshot, store query criteria and the owner-joined view.

mod assignment;
mod enums;
mod filter;
mod record;
mod view;

use std::fmt;

pub use self::assignment::Assignment;
pub use self::enums::{
    ComplaintCategory, ComplaintPriority, ComplaintStatus, Department, ParseEnumError,
};
pub use self::filter::{ComplaintFilter, ComplaintSearch};
pub use self::record::{
    Complaint, ComplaintDraft, ComplaintId, ComplaintSnapshot, DESCRIPTION_MIN, TITLE_MIN,
};
pub use self::view::ComplaintView;

/// Validation errors raised while filing or mutating a complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplaintValidationError {
    TitleTooShort { min: usize },
    DescriptionTooShort { min: usize },
    EmptyResponse,
}

impl ComplaintValidationError {
    /// Request field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::TitleTooShort { .. } => "title",
            Self::DescriptionTooShort { .. } => "description",
            Self::EmptyResponse => "adminResponse",
        }
    }
}

impl fmt::Display for ComplaintValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleTooShort { min } => {
                write!(f, "title must be at least {min} characters")
            }
            Self::DescriptionTooShort { min } => {
                write!(f, "description must be at least {min} characters")
            }
            Self::EmptyResponse => write!(f, "admin response must not be blank"),
        }
    }
}

impl std::error::Error for ComplaintValidationError {}
