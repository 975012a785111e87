use serde::{Deserialize, Serialize};

use super::error::TransposeError;

/// Body of `POST /transpose`
///
/// Both fields are optional at the serde level so that absence is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransposeRequest {
    #[serde(default)]
    pub xml: Option<String>,
    #[serde(default)]
    pub interval: Option<IntervalField>,
}

/// `interval` as sent by clients: a JSON number or a numeric string
///
/// Only whole numbers are accepted. JSON floats, even `2.0`, land in
/// `Other` and are rejected rather than truncated toward zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntervalField {
    Integer(i64),
    Text(String),
    Other(serde_json::Value),
}

impl IntervalField {
    /// Semitone count, if this is an integer that fits `i32`
    pub fn semitones(&self) -> Option<i32> {
        match self {
            IntervalField::Integer(value) => i32::try_from(*value).ok(),
            IntervalField::Text(text) => text.trim().parse().ok(),
            IntervalField::Other(_) => None,
        }
    }
}

impl From<i32> for IntervalField {
    fn from(value: i32) -> Self {
        IntervalField::Integer(i64::from(value))
    }
}

impl From<&str> for IntervalField {
    fn from(value: &str) -> Self {
        IntervalField::Text(value.to_string())
    }
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub xml: String,
    pub semitones: i32,
}

impl TransposeRequest {
    pub fn new(xml: impl Into<String>, interval: impl Into<IntervalField>) -> Self {
        Self {
            xml: Some(xml.into()),
            interval: Some(interval.into()),
        }
    }

    /// Check presence first, then the interval format
    pub fn validate(self) -> Result<ValidatedRequest, TransposeError> {
        let (xml, interval) = match (self.xml, self.interval) {
            (Some(xml), Some(interval)) if !xml.is_empty() => (xml, interval),
            _ => return Err(TransposeError::MissingField),
        };

        let semitones = interval.semitones().ok_or(TransposeError::InvalidInterval)?;
        Ok(ValidatedRequest { xml, semitones })
    }
}

/// Success body of `POST /transpose`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransposeResponse {
    #[serde(rename = "transposedXml")]
    pub transposed_xml: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(body: &str) -> TransposeRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_accepts_number_and_string() {
        let request = from_json(r#"{"xml": "<a/>", "interval": -3}"#).validate().unwrap();
        assert_eq!(request.semitones, -3);

        let request = from_json(r#"{"xml": "<a/>", "interval": " 7 "}"#).validate().unwrap();
        assert_eq!(request.semitones, 7);
    }

    #[test]
    fn test_missing_fields() {
        for body in [
            r#"{"interval": 2}"#,
            r#"{"xml": "", "interval": 2}"#,
            r#"{"xml": null, "interval": 2}"#,
            r#"{"xml": "<a/>"}"#,
            r#"{"xml": "<a/>", "interval": null}"#,
        ] {
            assert!(
                matches!(from_json(body).validate(), Err(TransposeError::MissingField)),
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_missing_fields_checked_before_format() {
        let result = from_json(r#"{"interval": "abc"}"#).validate();
        assert!(matches!(result, Err(TransposeError::MissingField)));
    }

    #[test]
    fn test_invalid_intervals() {
        for interval in [r#""abc""#, r#""""#, "2.5", "2.0", r#""2.0""#, "true", "[1]", "4294967296", r#""1e3""#] {
            let body = format!(r#"{{"xml": "<a/>", "interval": {}}}"#, interval);
            assert!(
                matches!(from_json(&body).validate(), Err(TransposeError::InvalidInterval)),
                "{}",
                interval
            );
        }
    }

    #[test]
    fn test_response_field_name() {
        let json = serde_json::to_value(TransposeResponse {
            transposed_xml: "<x/>".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"transposedXml": "<x/>"}));
    }
}
