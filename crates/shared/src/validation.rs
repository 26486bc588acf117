//! Submit-time validation of the profile form.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{FormField, FormFields};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

const PHONE_DIGITS_MIN: usize = 6;
const PHONE_DIGITS_MAX: usize = 15;

/// Fields currently in error, mapped to a message for display next to the
/// field. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Check every rule against the current values.
///
/// Only `firstName`, `thirdName`, `number` and `email` carry rules; the
/// remaining fields are free text.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if fields.first_name.trim().is_empty() {
        errors.insert(FormField::FirstName, "First name is required");
    }
    if fields.third_name.trim().is_empty() {
        errors.insert(FormField::ThirdName, "Third name is required");
    }

    if fields.number.trim().is_empty() {
        errors.insert(FormField::Number, "Phone number is required");
    } else if !is_valid_phone_number(&fields.number) {
        errors.insert(FormField::Number, "Enter a valid phone number (digits only)");
    }

    if !fields.email.is_empty() && !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(FormField::Email, "Invalid email");
    }

    errors
}

/// Separators are ignored: only the count of ASCII digits matters.
pub fn is_valid_phone_number(raw: &str) -> bool {
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    (PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits)
}
