//! Multi-part submission payload.
//!
//! Part names must stay stable: an eventual backend keys on them.

use serde_json::{Map, Value};

use crate::models::{CountryCode, FormFields};

/// Text part carrying the selected dial prefix.
pub const COUNTRY_CODE_KEY: &str = "countryCode";

/// Binary part carrying the profile picture.
pub const PICTURE_PART: &str = "picture";

/// Binary picture part with its original filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicturePart {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePayload {
    text_parts: Vec<(&'static str, String)>,
    picture: Option<PicturePart>,
}

impl ProfilePayload {
    /// Every form field in key order, then `countryCode`, then the picture if any.
    pub fn assemble(
        fields: &FormFields,
        country_code: CountryCode,
        picture: Option<PicturePart>,
    ) -> Self {
        let mut text_parts: Vec<(&'static str, String)> = fields
            .iter()
            .map(|(field, value)| (field.key(), value.to_string()))
            .collect();
        text_parts.push((COUNTRY_CODE_KEY, country_code.as_str().to_string()));

        Self { text_parts, picture }
    }

    pub fn text_parts(&self) -> &[(&'static str, String)] {
        &self.text_parts
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.text_parts
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn picture(&self) -> Option<&PicturePart> {
        self.picture.as_ref()
    }

    /// Names of all parts in the order they would be sent.
    pub fn part_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.text_parts.iter().map(|(k, _)| *k).collect();
        if self.picture.is_some() {
            names.push(PICTURE_PART);
        }
        names
    }

    /// Plain object of the text parts for diagnostic logging, without the
    /// picture binary.
    pub fn diagnostic_json(&self) -> Value {
        let map: Map<String, Value> = self
            .text_parts
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormField;

    fn sample_fields() -> FormFields {
        FormFields {
            first_name: "Ram".into(),
            third_name: "Shrestha".into(),
            number: "9841000000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn payload_carries_every_field_and_country_code() {
        let payload = ProfilePayload::assemble(&sample_fields(), CountryCode::UnitedKingdom, None);

        let mut expected: Vec<&str> = FormField::ALL.iter().map(|f| f.key()).collect();
        expected.push(COUNTRY_CODE_KEY);
        assert_eq!(payload.part_names(), expected);

        assert_eq!(payload.text("firstName"), Some("Ram"));
        assert_eq!(payload.text("study"), Some(""));
        assert_eq!(payload.text(COUNTRY_CODE_KEY), Some("+44"));
        assert!(payload.picture().is_none());
    }

    #[test]
    fn picture_part_keeps_original_filename() {
        let picture = PicturePart {
            filename: "me.png".into(),
            content_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        };
        let payload =
            ProfilePayload::assemble(&sample_fields(), CountryCode::default(), Some(picture));

        assert_eq!(payload.part_names().last(), Some(&PICTURE_PART));
        assert_eq!(payload.picture().map(|p| p.filename.as_str()), Some("me.png"));
    }

    #[test]
    fn diagnostics_exclude_the_picture() {
        let picture = PicturePart {
            filename: "me.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0; 16],
        };
        let payload =
            ProfilePayload::assemble(&sample_fields(), CountryCode::default(), Some(picture));

        let json = payload.diagnostic_json();
        assert_eq!(json["thirdName"], "Shrestha");
        assert_eq!(json[COUNTRY_CODE_KEY], "+977");
        assert!(json.get(PICTURE_PART).is_none());
        assert_eq!(json.as_object().map(|o| o.len()), Some(FormField::ALL.len() + 1));
    }
}
