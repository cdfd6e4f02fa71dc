//! Contact form submissions.
//!
//! Nothing is sent anywhere: a valid request is logged and acknowledged
//! with a toast.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

pub const SERVICE_OPTIONS: [&str; 6] = [
    "Emergency Repair",
    "Drain Cleaning",
    "Water Heater",
    "Installation",
    "Maintenance",
    "Other",
];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Raw form fields as posted. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
    pub service: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.service.is_none()
            && self.message.is_none()
    }
}

impl ContactSubmission {
    /// Checks every field and reports all failures at once.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<ContactRequest, FieldErrors> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let email = self.email.trim();
        let service = self.service.trim();
        let message = self.message.trim();

        let mut errors = FieldErrors::default();
        if name.chars().count() < 2 {
            errors.name = Some("Name is required");
        }
        if phone.chars().count() < 10 {
            errors.phone = Some("Valid phone number is required");
        }
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            errors.email = Some("Invalid email address");
        }
        if !SERVICE_OPTIONS.contains(&service) {
            errors.service = Some("Please select a service");
        }
        if message.chars().count() < 10 {
            errors.message = Some("Please provide more details");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactRequest {
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: (!email.is_empty()).then(|| email.to_owned()),
            service: service.to_owned(),
            message: message.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            phone: "(501) 555-0199".to_string(),
            email: String::new(),
            service: "Drain Cleaning".to_string(),
            message: "Kitchen sink drains slowly".to_string(),
        }
    }

    #[test]
    fn valid_submission_without_email() {
        let request = valid_submission().validate().expect("valid");
        assert_eq!(request.name, "Jane Doe");
        assert!(request.email.is_none());
    }

    #[test]
    fn valid_email_is_kept() {
        let mut submission = valid_submission();
        submission.email = " jane@example.com ".to_string();
        let request = submission.validate().expect("valid");
        assert_eq!(request.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = ContactSubmission::default().validate().unwrap_err();
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.phone, Some("Valid phone number is required"));
        assert_eq!(errors.email, None);
        assert_eq!(errors.service, Some("Please select a service"));
        assert_eq!(errors.message, Some("Please provide more details"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut submission = valid_submission();
        submission.email = "jane@example".to_string();
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors.email, Some("Invalid email address"));
        assert!(errors.name.is_none());
    }

    #[test]
    fn unknown_service_is_rejected() {
        let mut submission = valid_submission();
        submission.service = "Roofing".to_string();
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors.service, Some("Please select a service"));
    }

    #[test]
    fn whitespace_does_not_count_toward_lengths() {
        let mut submission = valid_submission();
        submission.name = "  J  ".to_string();
        submission.message = "   short    ".to_string();
        let errors = submission.validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.message.is_some());
    }
}
