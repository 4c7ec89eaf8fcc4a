use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use validator::ValidationErrors;

#[derive(Serialize, Deserialize, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueCode {
    InvalidJson,
    InvalidType,
    TooSmall,
    InvalidString,
    InvalidEnumValue,
    Custom,
}

impl IssueCode {
    /// Maps a `validator` error code onto the issue taxonomy.
    pub fn from_validator(code: &str) -> Self {
        match code {
            "length" => Self::TooSmall,
            "email" => Self::InvalidString,
            "invalid_enum_value" => Self::InvalidEnumValue,
            _ => Self::Custom,
        }
    }
}

/// One failing constraint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub code: IssueCode,
    pub path: Vec<String>,
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: vec![field.into()],
            message: message.into(),
        }
    }

    /// Issue about the input as a whole rather than one field.
    pub fn root(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            path: Vec::new(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

/// Ordered list of issues.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Issues(Vec<Issue>);

impl Issues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.0.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Issue> {
        self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|issue| issue.field() == Some(field))
    }

    /// Appends the field errors of `errors`, walking fields in `order`.
    ///
    /// Fields not listed in `order` are appended last, sorted by name.
    pub fn extend_from_validation(&mut self, errors: &ValidationErrors, order: &[&str]) {
        let field_errors = errors.field_errors();

        let mut rest = field_errors
            .keys()
            .map(|field| field.to_string())
            .filter(|field| !order.contains(&field.as_str()))
            .collect::<Vec<_>>();
        rest.sort();

        let fields = order
            .iter()
            .map(|field| field.to_string())
            .chain(rest);

        for field in fields {
            let Some(errors) = field_errors.get(field.as_str()) else {
                continue;
            };

            for error in errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid input".to_owned());

                self.push(Issue::new(
                    IssueCode::from_validator(&error.code),
                    field.clone(),
                    message,
                ));
            }
        }
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<Issue> for Issues {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
