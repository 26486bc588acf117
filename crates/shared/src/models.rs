//! Profile form data model: field keys, field values and dial prefixes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UnknownCountryCode, UnknownField};

// --- Field keys ---

/// One of the fixed, exhaustive profile form keys.
///
/// Declaration order is the order fields appear in a submitted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    SecondName,
    ThirdName,
    Number,
    Email,
    State,
    District,
    City,
    Tol,
    MotherName,
    FatherName,
    Study,
}

impl FormField {
    pub const ALL: [FormField; 12] = [
        FormField::FirstName,
        FormField::SecondName,
        FormField::ThirdName,
        FormField::Number,
        FormField::Email,
        FormField::State,
        FormField::District,
        FormField::City,
        FormField::Tol,
        FormField::MotherName,
        FormField::FatherName,
        FormField::Study,
    ];

    /// Wire name used in payloads and by the backend.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::SecondName => "secondName",
            Self::ThirdName => "thirdName",
            Self::Number => "number",
            Self::Email => "email",
            Self::State => "state",
            Self::District => "district",
            Self::City => "city",
            Self::Tol => "tol",
            Self::MotherName => "motherName",
            Self::FatherName => "fatherName",
            Self::Study => "study",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name *",
            Self::SecondName => "Second Name (optional)",
            Self::ThirdName => "Third Name *",
            Self::Number => "Mobile Number *",
            Self::Email => "Email",
            Self::State => "State",
            Self::District => "District",
            Self::City => "City",
            Self::Tol => "Tol",
            Self::MotherName => "Mother's Full Name",
            Self::FatherName => "Father's Full Name",
            Self::Study => "Study",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Enter first name",
            Self::SecondName => "Enter second name",
            Self::ThirdName => "Enter third name",
            Self::Number => "Mobile Number",
            Self::Email => "name@example.com",
            Self::State => "State",
            Self::District => "District",
            Self::City => "City",
            Self::Tol => "Tol",
            Self::MotherName => "Mother's full name",
            Self::FatherName => "Father's full name",
            Self::Study => "Highest study / qualification",
        }
    }

    /// Whether a blank value blocks submission.
    pub fn is_required(self) -> bool {
        matches!(self, Self::FirstName | Self::ThirdName | Self::Number)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

// --- Field values ---

/// Current text of every profile field. All values start empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub second_name: String,
    pub third_name: String,
    pub number: String,
    pub email: String,
    pub state: String,
    pub district: String,
    pub city: String,
    pub tol: String,
    pub mother_name: String,
    pub father_name: String,
    pub study: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::SecondName => &self.second_name,
            FormField::ThirdName => &self.third_name,
            FormField::Number => &self.number,
            FormField::Email => &self.email,
            FormField::State => &self.state,
            FormField::District => &self.district,
            FormField::City => &self.city,
            FormField::Tol => &self.tol,
            FormField::MotherName => &self.mother_name,
            FormField::FatherName => &self.father_name,
            FormField::Study => &self.study,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::SecondName => &mut self.second_name,
            FormField::ThirdName => &mut self.third_name,
            FormField::Number => &mut self.number,
            FormField::Email => &mut self.email,
            FormField::State => &mut self.state,
            FormField::District => &mut self.district,
            FormField::City => &mut self.city,
            FormField::Tol => &mut self.tol,
            FormField::MotherName => &mut self.mother_name,
            FormField::FatherName => &mut self.father_name,
            FormField::Study => &mut self.study,
        }
    }

    /// Replace one field's value, leaving the rest untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// `(field, value)` pairs in payload order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

// --- Country codes ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    #[default]
    #[serde(rename = "+977")]
    Nepal,
    #[serde(rename = "+1")]
    NorthAmerica,
    #[serde(rename = "+44")]
    UnitedKingdom,
}

impl CountryCode {
    pub const ALL: [CountryCode; 3] = [
        CountryCode::Nepal,
        CountryCode::NorthAmerica,
        CountryCode::UnitedKingdom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nepal => "+977",
            Self::NorthAmerica => "+1",
            Self::UnitedKingdom => "+44",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = UnknownCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CountryCode::ALL
            .into_iter()
            .find(|code| code.as_str() == trimmed)
            .ok_or_else(|| UnknownCountryCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_round_trip_through_from_str() {
        for field in FormField::ALL {
            assert_eq!(field.key().parse::<FormField>(), Ok(field));
        }
    }

    #[test]
    fn unknown_field_names_are_rejected() {
        assert_eq!(
            "nickname".parse::<FormField>(),
            Err(UnknownField("nickname".to_string()))
        );
        // Keys are case-sensitive wire names.
        assert!("FirstName".parse::<FormField>().is_err());
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut fields = FormFields::default();
        fields.set(FormField::City, "Kathmandu");

        for (field, value) in fields.iter() {
            if field == FormField::City {
                assert_eq!(value, "Kathmandu");
            } else {
                assert_eq!(value, "", "{field} should be untouched");
            }
        }
    }

    #[test]
    fn setting_the_same_value_twice_is_idempotent() {
        let mut once = FormFields::default();
        once.set(FormField::Email, "a@b.c");

        let mut twice = FormFields::default();
        twice.set(FormField::Email, "a@b.c");
        twice.set(FormField::Email, "a@b.c");

        assert_eq!(once, twice);
    }

    #[test]
    fn form_fields_serialize_with_wire_keys() {
        let mut fields = FormFields::default();
        fields.set(FormField::MotherName, "Sita");

        let json = serde_json::to_value(&fields).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), FormField::ALL.len());
        for field in FormField::ALL {
            assert!(object.contains_key(field.key()), "missing {}", field.key());
        }
        assert_eq!(json["motherName"], "Sita");
    }

    #[test]
    fn country_code_defaults_to_nepal() {
        assert_eq!(CountryCode::default().as_str(), "+977");
    }

    #[test]
    fn country_code_parses_only_the_supported_set() {
        assert_eq!("+44".parse::<CountryCode>(), Ok(CountryCode::UnitedKingdom));
        assert_eq!(" +1 ".parse::<CountryCode>(), Ok(CountryCode::NorthAmerica));
        assert!("+91".parse::<CountryCode>().is_err());
    }

    #[test]
    fn country_code_serializes_as_dial_prefix() {
        let json = serde_json::to_string(&CountryCode::NorthAmerica).unwrap();
        assert_eq!(json, "\"+1\"");
    }
}
