use std::{str::FromStr, sync::LazyLock};

use counsel_shared::{Issue, IssueCode, Issues};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::PracticeArea;

/// Schema field order, used to order reported issues.
pub const FIELDS: [&str; 6] = ["name", "email", "phone", "service", "message", "privacy"];

// Leading dots and `..` are rejected in `validate_email_address`.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

/// A legal-inquiry submission that passed every constraint.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_service"))]
    pub service: Option<String>,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,

    #[validate(custom(function = "validate_privacy"))]
    pub privacy: bool,
}

fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if !email.starts_with('.') && !email.contains("..") && RE_EMAIL.is_match(email) {
        return Ok(());
    }

    Err(ValidationError::new("email").with_message("Please enter a valid email address".into()))
}

fn validate_service(service: &str) -> Result<(), ValidationError> {
    if service.is_empty() || PracticeArea::from_str(service).is_ok() {
        return Ok(());
    }

    Err(ValidationError::new("invalid_enum_value")
        .with_message("Please select a valid service".into()))
}

fn validate_privacy(privacy: &bool) -> Result<(), ValidationError> {
    if *privacy {
        return Ok(());
    }

    Err(ValidationError::new("privacy")
        .with_message("You must accept the privacy policy".into()))
}

impl ContactSubmission {
    /// Checks an untyped request body against the contact schema.
    ///
    /// Either every constraint holds and the values are returned unchanged,
    /// or all failing constraints are reported in schema field order.
    pub fn parse(input: &Value) -> Result<Self, Issues> {
        let Value::Object(object) = input else {
            return Err(Issues::from_iter([Issue::root(
                IssueCode::InvalidType,
                format!("Expected object, received {}", type_name(input)),
            )]));
        };

        let mut fields = FieldReader::new(object);
        let submission = Self {
            name: fields.required_string("name"),
            email: fields.required_string("email"),
            phone: fields.optional_string("phone"),
            service: fields.optional_string("service"),
            message: fields.required_string("message"),
            privacy: fields.required_bool("privacy"),
        };

        let FieldReader {
            mut issues,
            mistyped,
            ..
        } = fields;

        if let Err(errors) = submission.validate() {
            let mut constraint_issues = Issues::new();
            constraint_issues.extend_from_validation(&errors, &FIELDS);

            issues.extend(
                constraint_issues
                    .into_iter()
                    .filter(|issue| {
                        !issue
                            .field()
                            .is_some_and(|field| mistyped.iter().any(|m| *m == field))
                    }),
            );
        }

        if issues.is_empty() {
            return Ok(submission);
        }

        issues.sort_by_key(|issue| field_rank(issue.field()));

        Err(issues.into_iter().collect())
    }

    /// Same submission with the phone number prefixed by `country_code`.
    pub fn with_country_code(mut self, country_code: &str) -> Self {
        self.phone = self
            .phone
            .map(|phone| crate::normalize_phone(&phone, country_code));
        self
    }

    /// Selected practice area, `None` when left empty.
    pub fn practice_area(&self) -> Option<PracticeArea> {
        self.service
            .as_deref()
            .and_then(|service| PracticeArea::from_str(service).ok())
    }
}

fn field_rank(field: Option<&str>) -> usize {
    match field {
        None => 0,
        Some(field) => FIELDS
            .iter()
            .position(|f| *f == field)
            .map(|pos| pos + 1)
            .unwrap_or(FIELDS.len() + 1),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    issues: Vec<Issue>,
    mistyped: Vec<&'static str>,
}

impl<'a> FieldReader<'a> {
    fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            issues: Vec::new(),
            mistyped: Vec::new(),
        }
    }

    fn required_string(&mut self, field: &'static str) -> String {
        match self.object.get(field) {
            Some(Value::String(value)) => value.to_owned(),
            other => {
                self.mismatch(field, "string", other);
                String::new()
            }
        }
    }

    fn optional_string(&mut self, field: &'static str) -> Option<String> {
        match self.object.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value.to_owned()),
            other => {
                self.mismatch(field, "string", other);
                None
            }
        }
    }

    fn required_bool(&mut self, field: &'static str) -> bool {
        match self.object.get(field) {
            Some(Value::Bool(value)) => *value,
            other => {
                self.mismatch(field, "boolean", other);
                false
            }
        }
    }

    fn mismatch(&mut self, field: &'static str, expected: &str, received: Option<&Value>) {
        let message = match received {
            None => "Required".to_owned(),
            Some(value) => format!("Expected {expected}, received {}", type_name(value)),
        };

        self.issues.push(Issue::new(IssueCode::InvalidType, field, message));
        self.mistyped.push(field);
    }
}
