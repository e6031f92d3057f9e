use std::{collections::BTreeMap, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::Field;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex is valid")
});

/// A contact-form submission as typed by the visitor.
///
/// Optional fields are empty strings rather than `None` so the relay body always
/// carries every key. The relay body holds name, email, company, phone and
/// message; `service` only travels in the deep-link summary.
#[derive(Validate, Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactInquiry {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    pub company: String,
    #[serde(skip_serializing)]
    pub service: String,
    pub phone: String,
    #[validate(custom(function = "validate_message"))]
    pub message: String,
}

impl ContactInquiry {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Service => self.service = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// Runs every field rule and collects the failures.
    pub fn check(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => errors.into(),
        }
    }
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    min_trimmed_chars(value, NAME_MIN_CHARS)
}

fn validate_message(value: &str) -> Result<(), ValidationError> {
    min_trimmed_chars(value, MESSAGE_MIN_CHARS)
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_SHAPE.is_match(value.trim()) {
        return Ok(());
    }

    Err(ValidationError::new("email").with_message("invalid format".into()))
}

fn min_trimmed_chars(value: &str, min: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() >= min {
        return Ok(());
    }

    Err(ValidationError::new("length").with_message("too short".into()))
}

/// Per-field validation failures, empty when the draft can be submitted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (name, failures) in errors.field_errors() {
            let Ok(field) = Field::from_str(&name) else {
                continue;
            };
            let message = failures
                .iter()
                .find_map(|failure| failure.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "invalid".to_owned());
            map.insert(field, message);
        }

        Self(map)
    }
}

/// Validates a draft without touching any form state.
pub fn validate(inquiry: &ContactInquiry) -> FieldErrors {
    inquiry.check()
}
