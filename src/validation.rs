use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
});

/// Browser-style trim: Unicode whitespace plus the byte order mark.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{FEFF}')
}

/// Loose `local@domain.tld` check. No RFC parsing.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Subject => "Subject",
            FieldKind::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: String },
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FieldError {
    pub fn required(label: impl Into<String>) -> Self {
        FieldError::Required { label: label.into() }
    }
}

/// Snapshot of the contact form taken at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    /// Builds a snapshot, trimming the free-text fields. The subject comes
    /// from a select and is kept as is.
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: trim_input(name).to_string(),
            email: trim_input(email).to_string(),
            subject: subject.to_string(),
            message: trim_input(message).to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<(FieldKind, FieldError)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: FieldKind) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(kind, _)| *kind == field)
            .map(|(_, error)| error)
    }
}

/// Whole-form rules: name, email and message are required and the email
/// must look like an address. Subject is never checked.
pub fn validate_form(data: &FormData) -> ValidationReport {
    let mut errors = Vec::new();

    if data.name.is_empty() {
        errors.push((FieldKind::Name, FieldError::required(FieldKind::Name.label())));
    }

    if data.email.is_empty() {
        errors.push((FieldKind::Email, FieldError::required(FieldKind::Email.label())));
    } else if !is_valid_email(&data.email) {
        errors.push((FieldKind::Email, FieldError::InvalidEmail));
    }

    if data.message.is_empty() {
        errors.push((FieldKind::Message, FieldError::required(FieldKind::Message.label())));
    }

    ValidationReport { errors }
}

/// Rules applied when a single field loses focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules<'a> {
    pub required: bool,
    pub email: bool,
    pub label: &'a str,
}

pub fn validate_field(rules: FieldRules<'_>, value: &str) -> Result<(), FieldError> {
    let value = trim_input(value);
    if rules.required && value.is_empty() {
        return Err(FieldError::required(rules.label));
    }
    if rules.email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@example.co.uk"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn missing_name_is_the_only_error() {
        let data = FormData::new("", "a@b.co", "", "hi");
        let report = validate_form(&data);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.error_for(FieldKind::Name), Some(&FieldError::required(FieldKind::Name.label())));
    }

    #[test]
    fn complete_form_is_valid() {
        let data = FormData::new("Ada", "ada@example.com", "General", "Hello there");
        assert!(validate_form(&data).is_valid());
    }

    #[test]
    fn email_errors_distinguish_empty_from_malformed() {
        let empty = validate_form(&FormData::new("Ada", "", "", "hi"));
        assert_eq!(empty.error_for(FieldKind::Email).map(ToString::to_string).as_deref(), Some("Email is required"));

        let malformed = validate_form(&FormData::new("Ada", "ada@home", "", "hi"));
        assert_eq!(malformed.error_for(FieldKind::Email), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let report = validate_form(&FormData::new("   ", " a@b.co ", "", "\n\t"));
        assert_eq!(report.errors.len(), 2);
        assert!(report.error_for(FieldKind::Email).is_none());
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(trim_input("\u{FEFF} Ada \u{FEFF}"), "Ada");
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(!is_valid_email("ab@c\u{FEFF}d.com"));

        let report = validate_form(&FormData::new("\u{FEFF}", "\u{FEFF}a@b.co", "", "hi"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.error_for(FieldKind::Name), Some(&FieldError::required("Name")));

        let name = FieldRules { required: true, email: false, label: "Name" };
        assert_eq!(validate_field(name, "\u{FEFF}\u{FEFF}"), Err(FieldError::required("Name")));
    }

    #[test]
    fn blur_rules() {
        let name = FieldRules { required: true, email: false, label: "Your name" };
        assert_eq!(
            validate_field(name, " ").unwrap_err().to_string(),
            "Your name is required"
        );
        assert!(validate_field(name, "Ada").is_ok());

        let optional_email = FieldRules { required: false, email: true, label: "Email" };
        assert!(validate_field(optional_email, "").is_ok());
        assert_eq!(validate_field(optional_email, "nope"), Err(FieldError::InvalidEmail));
    }
}
