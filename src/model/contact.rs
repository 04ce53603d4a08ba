use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::validate_terms_accepted;

/// A general contact form submission. Request-scoped and never persisted;
/// it exists only to be validated and rendered into the two emails.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub last_name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub phone: String,

    #[validate(length(min = 5, message = "must be at least 5 characters"))]
    pub subject: String,

    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub message: String,

    pub preferred_contact: PreferredContact,

    #[validate(custom(function = validate_terms_accepted))]
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    Email,
    Phone,
    Both,
}

impl PreferredContact {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredContact::Email => "email",
            PreferredContact::Phone => "phone",
            PreferredContact::Both => "both",
        }
    }
}
